//! Error types for shared script values

use thiserror::Error;

/// Main error type for constructing shared values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A constructor argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SharedError {
    /// Build an `InvalidArgument` error from any message
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        SharedError::InvalidArgument(reason.into())
    }
}

/// Result type alias for shared value operations
pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SharedError::invalid_argument("name cannot be null or empty");
        assert_eq!(
            err.to_string(),
            "Invalid argument: name cannot be null or empty"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&SharedError::invalid_argument("x"));
    }
}
