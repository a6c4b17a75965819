//! Error types and exit codes for plagscan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration)
//! - 3: Data error (corpus or input document cannot be accessed)
//!
//! Low-signal linguistic input is never an error: every similarity
//! algorithm resolves degenerate input to a numeric default instead.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or configuration (2)
    Usage = 2,
    /// Data error - corpus or input unavailable (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during plagscan operations
#[derive(Error, Debug)]
pub enum ScanError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Data errors (exit code 3)
    #[error("corpus unavailable at {path:?}: {reason}")]
    CorpusUnavailable { path: PathBuf, reason: String },

    #[error("cannot read input {path:?}: {reason}")]
    InputUnavailable { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl ScanError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ScanError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid configuration entry
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        ScanError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        ScanError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a corpus root that cannot be created or listed
    pub fn corpus_unavailable(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        ScanError::CorpusUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an input document that cannot be read
    pub fn input_unavailable(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        ScanError::InputUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ScanError::UnknownFormat(_)
            | ScanError::UsageError(_)
            | ScanError::InvalidValue { .. }
            | ScanError::InvalidConfig { .. }
            | ScanError::AlreadyExists { .. } => ExitCode::Usage,

            ScanError::CorpusUnavailable { .. } | ScanError::InputUnavailable { .. } => {
                ExitCode::Data
            }

            ScanError::Io(_)
            | ScanError::Json(_)
            | ScanError::TomlDe(_)
            | ScanError::TomlSer(_)
            | ScanError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ScanError::UnknownFormat(_) => "unknown_format",
            ScanError::UsageError(_) => "usage_error",
            ScanError::InvalidValue { .. } => "invalid_value",
            ScanError::InvalidConfig { .. } => "invalid_config",
            ScanError::AlreadyExists { .. } => "already_exists",
            ScanError::CorpusUnavailable { .. } => "corpus_unavailable",
            ScanError::InputUnavailable { .. } => "input_unavailable",
            ScanError::Io(_) => "io_error",
            ScanError::Json(_) => "json_error",
            ScanError::TomlDe(_) | ScanError::TomlSer(_) => "toml_error",
            ScanError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for plagscan operations
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            ScanError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ScanError::invalid_config("weights.cosine must be >= 0").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ScanError::corpus_unavailable("/missing", "permission denied").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            ScanError::input_unavailable("essay.txt", "not found").exit_code(),
            ExitCode::Data
        );
        let invalid = ScanError::invalid_value("threshold", "1.5");
        assert_eq!(invalid.exit_code(), ExitCode::Usage);
        assert_eq!(invalid.error_type(), "invalid_value");
        assert_eq!(invalid.to_string(), "invalid threshold: 1.5");
        assert_eq!(ScanError::Other("x".into()).exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = ScanError::corpus_unavailable("/srv/corpus", "permission denied");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "corpus_unavailable");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("permission denied"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: ScanError = io.into();
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(err.error_type(), "io_error");
    }
}
