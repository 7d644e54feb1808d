//! Typed errors for the notifier pipeline.
//!
//! Uses `thiserror` for library errors (not `eyre`) so callers can match on
//! the failure kind; the binary converts into a `Report` at the boundary.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A listing node is missing a required attribute or sub-element.
    #[error("can not get attribute '{0}'")]
    MissingAttribute(&'static str),

    /// The price text of a listing node contains no digits.
    #[error("no price digits in {0:?}")]
    ParsePrice(String),

    /// The stored catalog is malformed.
    #[error("malformed catalog: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Read/write failure on the catalog location.
    #[error("catalog I/O on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The search-results page could not be fetched.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A notifier accepted the listings but could not deliver them.
    #[error("notification delivery failed: {0}")]
    Notify(String),
}
