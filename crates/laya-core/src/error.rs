//! Core error types for laya-core.
//!
//! The navigation state machine itself is total and never fails; errors only
//! exist at the edges (config loading, gated form submissions, mock-store
//! lookups, serialization in the CLI).

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Core error type for laya-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Home dashboard errors
    #[error("Home error: {0}")]
    Home(#[from] HomeError),

    /// Gifting hub errors
    #[error("Gifting error: {0}")]
    Gifting(#[from] GiftingError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load the demo profile
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse the demo profile
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Home dashboard errors. These model disabled-button gates and
/// missing-fixture lookups, not real failure modes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HomeError {
    /// Share pressed with an empty daily answer
    #[error("Daily answer is empty")]
    EmptyDailyAnswer,

    /// Mood outside the 1-5 emoji scale
    #[error("Mood value {0} outside the 1-5 scale")]
    InvalidMood(u8),

    /// Unknown task id
    #[error("Unknown task: {0}")]
    UnknownTask(Uuid),

    /// Unknown note id
    #[error("Unknown note: {0}")]
    UnknownNote(Uuid),

    /// Unknown memory id
    #[error("Unknown memory: {0}")]
    UnknownMemory(Uuid),

    /// Feedback submitted empty
    #[error("Feedback text is empty")]
    EmptyFeedback,

    /// Unknown quick nudge index
    #[error("Unknown nudge index: {0}")]
    UnknownNudge(usize),
}

/// Gifting hub errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GiftingError {
    /// Offer id not in the affiliate catalog
    #[error("Unknown offer: {0}")]
    UnknownOffer(u8),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
