use std::fmt;

/// Result type for tastelens-wire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the wire layer
#[derive(Debug)]
pub enum Error {
    /// JSON parsing failed
    Json(serde_json::Error),

    /// Body parsed as JSON but does not match the expected envelope
    Envelope(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Envelope(msg) => write!(f, "Envelope error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Envelope(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
