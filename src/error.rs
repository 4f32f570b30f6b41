//! Error types for the Excelsior site.

use thiserror::Error;

/// Common error type for the Excelsior site.
#[derive(Error, Debug)]
pub enum SiteError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Page template error.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Server address could not be parsed.
    #[error("invalid address: {0}")]
    Address(String),
}

/// Result type alias for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SiteError::Config("port out of range".to_string());
        assert_eq!(err.to_string(), "configuration error: port out of range");
    }

    #[test]
    fn test_address_error_display() {
        let err = SiteError::Address("not-a-host:abc".to_string());
        assert_eq!(err.to_string(), "invalid address: not-a-host:abc");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SiteError = io_err.into();
        assert!(matches!(err, SiteError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(SiteError::Config("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
