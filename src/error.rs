//! # Error Types
//!
//! Custom error types for Teleop Shaper using `thiserror`.

use thiserror::Error;

/// Main error type for Teleop Shaper
#[derive(Debug, Error)]
pub enum ShaperError {
    /// Shaper parameters rejected at construction time
    #[error("Invalid shaper configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// A NaN stick sample was handed to the shaper
    #[error("Stick input is NaN")]
    NanInput,

    /// Sample parsing or telemetry serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Teleop Shaper
pub type Result<T> = std::result::Result<T, ShaperError>;
