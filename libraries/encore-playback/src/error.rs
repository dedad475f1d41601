//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// The queue controller itself never fails; these cover the adapter seam and
/// host configuration.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Playback adapter rejected a command
    #[error("Playback adapter error: {0}")]
    Adapter(String),

    /// Item has no audio or embed locator to load
    #[error("No playable locator for item: {0}")]
    NoLocator(String),

    /// Configuration value out of range
    #[error("Invalid playback config: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
