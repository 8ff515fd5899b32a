//! Error types for the library system

use thiserror::Error;

/// Numeric error codes reported alongside errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    UnsupportedOperation = 2,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::UnsupportedOperation(_) => ErrorCode::UnsupportedOperation,
            AppError::Config(_) => ErrorCode::Failure,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operation_code() {
        let err = AppError::UnsupportedOperation("nope".to_string());
        assert_eq!(err.code(), ErrorCode::UnsupportedOperation);
        assert_eq!(err.code() as u32, 2);
        assert_eq!(err.to_string(), "Unsupported operation: nope");
    }

    #[test]
    fn test_config_error_code() {
        let err: AppError = config::ConfigError::Message("bad".to_string()).into();
        assert_eq!(err.code(), ErrorCode::Failure);
    }
}
