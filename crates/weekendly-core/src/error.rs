//! Error types for the weekend planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all planner operations.
///
/// Most store-level conditions (stale indices, unknown ids, malformed saved
/// state) are recovered locally and never surface here. These variants cover
/// what a caller can actually act on.
#[derive(Error, Debug)]
pub enum WeekendlyError {
    /// Key-value storage connection or query errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// No theme with the given name exists in the catalog
    #[error("Theme '{name}' not found")]
    ThemeNotFound { name: String },
    /// Picker index does not point at an available activity
    #[error("No activity at picker position {index} (picker has {len})")]
    PickerIndexOutOfRange { index: usize, len: usize },
    /// Suggestion endpoint failures; only seen inside the suggestion adapter
    #[error("Suggestion request failed: {message}")]
    Suggestion { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WeekendlyError {
        WeekendlyError::Storage {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WeekendlyError {
        WeekendlyError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WeekendlyError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a suggestion error from anything printable.
    pub fn suggestion(message: impl std::fmt::Display) -> Self {
        Self::Suggestion {
            message: message.to_string(),
        }
    }
}

/// Specialized extension trait for storage-related Results.
pub trait StorageResultExt<T> {
    /// Map storage errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WeekendlyError::storage(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, WeekendlyError>;
