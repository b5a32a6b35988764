use std::path::PathBuf;
use thiserror::Error;

/// Lineage error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Individual not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid pedigree depth {0}: at least one generation is required")]
    InvalidDepth(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for lineage operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create a not-found error for an individual id
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound(id.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// True when the error means the record does not exist, as opposed to
    /// the store failing to answer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "geckos.json").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_path_not_found_display() {
        let err = Error::PathNotFound(PathBuf::from("/some/store.json"));
        assert_eq!(err.to_string(), "Path not found: /some/store.json");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("gecko-42");
        assert_eq!(err.to_string(), "Individual not found: gecko-42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_store_error_is_not_not_found() {
        let err = Error::store("connection reset");
        assert_eq!(err.to_string(), "Store error: connection reset");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_depth_display() {
        let err = Error::InvalidDepth(0);
        assert!(err.to_string().contains("Invalid pedigree depth 0"));
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("max_depth must be at least 1");
        assert_eq!(err.to_string(), "Config validation error: max_depth must be at least 1");
    }

    #[test]
    fn test_other_error_is_bare_message() {
        let err = Error::other("Unknown format: svg");
        assert_eq!(err.to_string(), "Unknown format: svg");
    }

    #[test]
    fn test_error_crosses_rayon_join() {
        fn is_send<T: Send>() {}
        is_send::<Error>();
        is_send::<Result<Vec<String>>>();
    }
}
