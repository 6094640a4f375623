use std::fmt;

/// Result type for tastelens-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A dish violated a model invariant (empty id or name)
    InvalidDish(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDish(msg) => write!(f, "Invalid dish: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
