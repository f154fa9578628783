//! Core types for playback state management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Episode information for queue management
///
/// Contains all metadata needed for playback and display.
/// Episodes are immutable value objects; they are never mutated after
/// creation and carry no identity beyond their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Credit line naming the participants (display only)
    pub members: String,

    /// Image reference for the episode artwork
    pub thumbnail: String,

    /// Episode duration (whole seconds)
    pub duration: Duration,

    /// Media resource locator handed to the driver
    pub url: String,
}

/// Configuration for the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial loop flag (default: off)
    pub looping: bool,

    /// Initial shuffle flag (default: off)
    pub shuffling: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert!(!config.looping);
        assert!(!config.shuffling);
    }

    #[test]
    fn episode_creation() {
        let episode = Episode {
            title: "Faladev #30".to_string(),
            members: "Diego and Richard".to_string(),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
            duration: Duration::from_secs(3600),
            url: "https://example.com/audio.mp3".to_string(),
        };

        assert_eq!(episode.title, "Faladev #30");
        assert_eq!(episode.duration, Duration::from_secs(3600));
    }
}
