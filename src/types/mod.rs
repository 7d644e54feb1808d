mod types;

pub use types::Listing;
