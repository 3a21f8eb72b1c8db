//! Core error types for flowday-core.
//!
//! Expected scheduling conditions (nothing fits, quota already met) are never
//! errors; they surface as data on the schedule outcome. Errors here cover
//! precondition violations and collaborator failures only.

use thiserror::Error;

/// Core error type for flowday-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Preset import/export errors
    #[error("Preset error: {0}")]
    Preset(#[from] PresetError),

    /// Calendar collaborator errors
    #[error("Calendar error for '{calendar}': {message}")]
    Calendar { calendar: String, message: String },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end_time ({end}) must be greater than start_time ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Invalid configuration value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn invalid_value(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Preset-specific errors.
#[derive(Error, Debug)]
pub enum PresetError {
    /// Import version cannot be applied to this crate version
    #[error("Incompatible preset version: current={current}, import={import}")]
    IncompatibleVersion { current: String, import: String },

    /// Preset JSON could not be parsed
    #[error("Malformed preset: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
