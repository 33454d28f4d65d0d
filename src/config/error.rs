//! Error types for configuration loading and saving

use thiserror::Error;

/// Errors that can occur reading or writing settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A configured value is out of range
    #[error("Invalid setting {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
