//! Error types for the rolodex core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when reading or writing the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store document is not valid JSON
    #[error("store document unreadable: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored record failed validation on reload
    #[error("corrupt contact record: {0}")]
    Corrupt(ValidationError),

    /// CSV encoding or decoding failed
    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Corrupt(ValidationError::InvalidEmail("bogus".to_string()));
        assert_eq!(
            err.to_string(),
            "corrupt contact record: Invalid email address: bogus"
        );

        let err = ConfigError::InvalidValue {
            var: "ROLODEX_CONTACTS_FILE".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ROLODEX_CONTACTS_FILE: Cannot be empty"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io.into();
        assert!(err.to_string().contains("denied"));
    }
}
