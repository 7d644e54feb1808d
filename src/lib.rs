pub mod catalog;
pub mod configuration;
pub mod detect;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod notify;
pub mod pipeline;
pub mod telemetry;
pub mod types;
