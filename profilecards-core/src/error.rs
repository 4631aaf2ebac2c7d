//! Error types for profilecards core.

use std::{error::Error, fmt, io};

/// Error type for profilecards core operations.
#[derive(Debug)]
pub enum ProfileCardsError {
    /// An underlying I/O error.
    Io(io::Error),
    /// The requested account or resource does not exist.
    NotFound(String),
    /// The configured credential was rejected.
    Unauthorized,
    /// The remote API answered with an unexpected status.
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or a short description.
        message: String,
    },
    /// A catch-all error with a message.
    Other(String),
}

impl ProfileCardsError {
    /// Whether this error must abort the run instead of degrading output.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for ProfileCardsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::NotFound(resource) => write!(f, "not found: {resource}"),
            Self::Unauthorized => write!(f, "credential rejected"),
            Self::Api { status, message } => write!(f, "api error ({status}): {message}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ProfileCardsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProfileCardsError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ProfileCardsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Other(format!("json error: {value}"))
    }
}

/// Convenience result type for profilecards core.
pub type Result<T> = std::result::Result<T, ProfileCardsError>;
