//! Error types for Sprig

use thiserror::Error;

/// The main error type for Sprig operations
#[derive(Debug, Error)]
pub enum SprigError {
    #[error("Invalid frame rate: {0} (must be a finite number greater than zero)")]
    InvalidFrameRate(f64),

    #[error("Invalid resolution: {width}x{height} (both dimensions must be greater than zero)")]
    InvalidResolution { width: i64, height: i64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Surface error: {0}")]
    Surface(String),

    #[error("Display mode error: {0}")]
    DisplayMode(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

impl SprigError {
    /// Whether the loop can keep running after this error.
    ///
    /// Only display-mode failures are recoverable; everything else aborts
    /// startup or is rejected before the loop begins.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SprigError::DisplayMode(_))
    }
}

/// Result type alias for Sprig operations
pub type Result<T> = std::result::Result<T, SprigError>;

impl From<toml::de::Error> for SprigError {
    fn from(err: toml::de::Error) -> Self {
        SprigError::TomlParseError(err.to_string())
    }
}
