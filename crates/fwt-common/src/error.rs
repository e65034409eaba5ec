//! Error types for the fixed-width transformer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fwt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for configuration resolution and spec derivation.
#[derive(Error, Debug)]
pub enum Error {
    // Shape errors (10-19)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // Location errors (20-29)
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required environment variable '{0}' is not set")]
    MissingEnvVar(String),

    #[error("failed to fetch object '{key}' from bucket '{bucket}': {reason}")]
    ObjectFetch {
        bucket: String,
        key: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Value errors (30-39)
    #[error("invalid position range '{input}': {reason}")]
    InvalidRange { input: String, reason: String },
}

/// The three failure kinds callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document or a required section exists but has the wrong shape.
    InvalidConfig,
    /// Something expected at a location could not be found.
    MissingConfig,
    /// A single value (such as a position range) is malformed.
    InvalidValue,
}

impl Error {
    /// Classify this error into one of the three failure kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidConfig(_) | Error::Yaml(_) => ErrorKind::InvalidConfig,
            Error::MissingConfig(_)
            | Error::ConfigNotFound { .. }
            | Error::MissingEnvVar(_)
            | Error::ObjectFetch { .. }
            | Error::Io(_) => ErrorKind::MissingConfig,
            Error::InvalidRange { .. } => ErrorKind::InvalidValue,
        }
    }

    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidConfig(_) => 10,
            Error::Yaml(_) => 11,
            Error::MissingConfig(_) => 20,
            Error::ConfigNotFound { .. } => 21,
            Error::MissingEnvVar(_) => 22,
            Error::ObjectFetch { .. } => 23,
            Error::Io(_) => 24,
            Error::InvalidRange { .. } => 30,
        }
    }

    /// Wrap an I/O failure on `path`, keeping not-found distinct.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::ConfigNotFound {
                path: path.into(),
                source,
            }
        } else {
            Error::Io(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kinds_cover_domain_errors() {
        assert_eq!(
            Error::InvalidConfig("x".into()).kind(),
            ErrorKind::InvalidConfig
        );
        assert_eq!(
            Error::MissingConfig("x".into()).kind(),
            ErrorKind::MissingConfig
        );
        assert_eq!(
            Error::MissingEnvVar("config_name".into()).kind(),
            ErrorKind::MissingConfig
        );
        let range = Error::InvalidRange {
            input: "abc".into(),
            reason: "must be comma separated".into(),
        };
        assert_eq!(range.kind(), ErrorKind::InvalidValue);
        assert_eq!(range.code(), 30);
    }

    #[test]
    fn test_from_io_not_found_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let io = std::fs::read_to_string(&path).unwrap_err();

        let err = Error::from_io(&path, io);
        assert_eq!(err.kind(), ErrorKind::MissingConfig);
        assert_eq!(err.code(), 21);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_from_io_other_errors_are_plain_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from_io("/etc/shadow", io);
        assert!(matches!(err, Error::Io(_)));
    }
}
