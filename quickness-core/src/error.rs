use thiserror::Error;

/// Errors raised at the edges of the library.
///
/// Scoring and layout never fail; these variants only cover configuration
/// loading, host interchange and input parsing.
#[derive(Error, Debug)]
pub enum QuicknessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, QuicknessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_error_display() {
        let error = QuicknessError::InvalidConfig("margin must not be negative".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: margin must not be negative"
        );

        let error = QuicknessError::InvalidPageSize("a7".to_string());
        assert_eq!(error.to_string(), "Invalid page size: a7");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::NotFound, "config.json");
        let error = QuicknessError::from(io_error);

        match error {
            QuicknessError::Io(ref err) => assert_eq!(err.kind(), ErrorKind::NotFound),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = QuicknessError::from(json_error);
        assert!(error.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QuicknessError>();
    }
}
