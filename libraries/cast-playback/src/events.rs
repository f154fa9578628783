//! Playback events
//!
//! Two event streams cross the controller boundary:
//! - [`DriverEvent`]: discrete notifications from the media driver,
//!   consumed by the controller's single event-handling entry point
//! - [`PlayerEvent`]: notifications for the UI, queued by the controller
//!   and drained each frame

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted by the media driver
///
/// Delivered as plain values so a driver callback can never re-enter the
/// controller while a previous event is still being processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverEvent {
    /// Media metadata became available for the loaded resource
    MetadataLoaded {
        /// Total duration of the loaded resource
        duration: Duration,
    },

    /// Periodic position report while playing
    TimeUpdate {
        /// Current playback position
        position: Duration,
    },

    /// The device started playing (user gesture, autoplay, resume)
    Played,

    /// The device paused (user gesture, buffering stall)
    Paused,

    /// The loaded resource played to its end
    Ended,
}

/// Events emitted by the player for UI synchronization
///
/// The UI drains these with
/// [`PlayerController::drain_events`](crate::PlayerController::drain_events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playing flag changed
    StateChanged {
        /// Whether playback is now running
        playing: bool,
    },

    /// A different episode became current
    EpisodeChanged {
        /// Queue position of the new current episode
        index: usize,
        /// Title of the new current episode
        title: String,
    },

    /// Displayed progress changed (time update or seek)
    ProgressChanged {
        /// Whole-second playback position for display
        position: Duration,
    },

    /// The queue was cleared (end of playback or explicit clear)
    QueueCleared,

    /// A driver command failed
    Error {
        /// Error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_events_compare_by_value() {
        let a = DriverEvent::TimeUpdate {
            position: Duration::from_secs(10),
        };
        let b = DriverEvent::TimeUpdate {
            position: Duration::from_secs(10),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn player_events_compare_by_value() {
        let a = PlayerEvent::EpisodeChanged {
            index: 2,
            title: "Episode".to_string(),
        };
        let b = PlayerEvent::EpisodeChanged {
            index: 2,
            title: "Episode".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(a, PlayerEvent::QueueCleared);
    }
}
