//! Error types for playback state management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No episode is currently loaded
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// Queue is empty
    #[error("Queue is empty")]
    QueueEmpty,

    /// Index out of bounds
    #[error("Index out of bounds: {index} (queue length {len})")]
    IndexOutOfBounds {
        /// The rejected index
        index: usize,
        /// Queue length at the time of the call
        len: usize,
    },

    /// Media driver error
    #[error("Media driver error: {0}")]
    Driver(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
