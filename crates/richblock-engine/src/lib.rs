pub mod error;
pub mod models;
pub mod ranges;

// Re-export key types for easier usage
pub use error::BlockError;
pub use models::*;
pub use ranges::{Runs, find_ranges};
