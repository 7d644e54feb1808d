mod console;
mod email;

pub use console::ConsoleNotifier;
pub use email::EmailNotifier;

use async_trait::async_trait;

use crate::error::Error;
use crate::types::Listing;

/// Delivery channel for the noteworthy subset of a run. The pipeline treats
/// delivery failure as non-fatal; implementations just report it.
#[async_trait]
pub trait Notifier {
    async fn notify(&self, items: &[Listing]) -> Result<(), Error>;
}
