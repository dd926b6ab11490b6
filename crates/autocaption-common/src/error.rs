//! Common error types used throughout autocaption.
//!
//! This module provides a unified error type for the preference store and
//! other collaborators of the caption engine. The engine itself never fails.

/// Common error type for autocaption.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A per-user limit was reached.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new LimitExceeded error.
    pub fn limit_exceeded<S: Into<String>>(msg: S) -> Self {
        Self::LimitExceeded(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("empty caption");
        assert_eq!(err.to_string(), "Invalid input: empty caption");

        let err = Error::limit_exceeded("3 channels");
        assert_eq!(err.to_string(), "Limit exceeded: 3 channels");
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(Error::invalid_input("x"), Error::InvalidInput(_)));
        assert!(matches!(Error::limit_exceeded("x"), Error::LimitExceeded(_)));
    }
}
