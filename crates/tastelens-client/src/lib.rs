// Error types
pub mod error;

// Typed operations over the TasteLens HTTP API
pub mod api;

pub use api::ApiClient;
pub use error::{ApiError, Result};
