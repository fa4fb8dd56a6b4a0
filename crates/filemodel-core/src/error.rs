//! Error types module
//!
//! All failures raised by the file model are unified under [`FileModelError`].
//! Every variant is a local validation failure: none are retried, each maps to
//! a caller-visible rejection in whatever service hosts this crate.

use uuid::Uuid;

use crate::models::FileType;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for malformed payloads that made it past the edge
    Warn,
}

/// Metadata describing how an error should be presented by a hosting service
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "MISSING_LICENSE")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum FileModelError {
    #[error("{value} not a valid FileType, expected one of: {expected}")]
    InvalidFileType { value: String, expected: String },

    #[error(
        "file {identifier} is not annotated as an administrative agreement and should have a license"
    )]
    MissingLicense { identifier: Uuid },

    #[error("duplicate file identifier in file set: {identifier}")]
    DuplicateIdentifier { identifier: Uuid },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FileModelError>;

impl FileModelError {
    pub(crate) fn invalid_file_type(value: &str) -> Self {
        FileModelError::InvalidFileType {
            value: value.to_string(),
            expected: FileType::expected_tags(),
        }
    }

    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            FileModelError::InvalidFileType { .. } => "InvalidFileType",
            FileModelError::MissingLicense { .. } => "MissingLicense",
            FileModelError::DuplicateIdentifier { .. } => "DuplicateIdentifier",
            FileModelError::Json(_) => "Json",
        }
    }
}

/// Static metadata for each variant: (error_code, suggested_action, log_level).
fn file_model_error_static_metadata(
    err: &FileModelError,
) -> (&'static str, Option<&'static str>, LogLevel) {
    match err {
        FileModelError::InvalidFileType { .. } => (
            "INVALID_FILE_TYPE",
            Some("Use one of the canonical file type tags"),
            LogLevel::Debug,
        ),
        FileModelError::MissingLicense { .. } => (
            "MISSING_LICENSE",
            Some("Attach a license or mark the file as an administrative agreement"),
            LogLevel::Debug,
        ),
        FileModelError::DuplicateIdentifier { .. } => (
            "DUPLICATE_IDENTIFIER",
            Some("Ensure every file in the set has a distinct identifier"),
            LogLevel::Debug,
        ),
        FileModelError::Json(_) => (
            "INVALID_JSON",
            Some("Check request body format"),
            LogLevel::Warn,
        ),
    }
}

impl ErrorMetadata for FileModelError {
    fn error_code(&self) -> &'static str {
        file_model_error_static_metadata(self).0
    }

    /// Every variant is a rejection of the input; retrying the same input fails again.
    fn is_recoverable(&self) -> bool {
        false
    }

    fn suggested_action(&self) -> Option<&'static str> {
        file_model_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            FileModelError::Json(_) => "Malformed file description".to_string(),
            other => other.to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        file_model_error_static_metadata(self).2
    }
}
