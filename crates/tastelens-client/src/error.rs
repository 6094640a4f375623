use std::fmt;

/// Result type for tastelens-client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// User-facing wording for transport-level failures. Malformed bodies share
/// it: both mean "the service did not answer usably", and the distinction
/// only matters in the logs.
pub const CONNECTIVITY_MESSAGE: &str = "Unable to reach the TasteLens service.";

/// User-facing wording for a missing single-entity lookup. Must stay
/// distinct from `CONNECTIVITY_MESSAGE`.
pub const NOT_FOUND_MESSAGE: &str = "Dish not found.";

/// Error taxonomy for calls against the TasteLens service
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection refused, timeout)
    Connectivity(String),

    /// Non-success status for a single-entity lookup
    NotFound,

    /// Transport succeeded but the body encodes an application-level
    /// failure; the message comes from the service verbatim
    Domain(String),

    /// Body could not be parsed as the expected shape. Presented to users
    /// as a connectivity problem, logged distinctly
    Malformed(String),
}

impl ApiError {
    /// The static message a renderer shows for this error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Connectivity(_) | ApiError::Malformed(_) => {
                CONNECTIVITY_MESSAGE.to_string()
            }
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Domain(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Connectivity(detail) => write!(f, "Connectivity error: {}", detail),
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::Domain(msg) => write!(f, "Service error: {}", msg),
            ApiError::Malformed(detail) => write!(f, "Malformed response: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Connectivity(err.to_string())
    }
}
