//! Player controller - bridges state to the media driver
//!
//! Owns the [`PlayerState`] and a boxed [`MediaDriver`], translating
//! user transport commands into driver calls and driver events back
//! into state updates. Single-threaded and event-driven: every command
//! or event runs to completion before the next is processed.

use crate::{
    driver::MediaDriver,
    error::{PlaybackError, Result},
    events::{DriverEvent, PlayerEvent},
    state::PlayerState,
    types::{Episode, PlayerConfig},
};
use std::time::Duration;

/// Central playback controller
///
/// The playback position reported by the driver is tracked here for
/// display only; it is never written into [`PlayerState`].
pub struct PlayerController {
    // State
    state: PlayerState,
    driver: Box<dyn MediaDriver>,

    // Whole-second playback position for display
    progress: Duration,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a new controller around a media driver
    ///
    /// The configuration's loop flag is pushed to the driver immediately
    /// so the device and the state agree from the start.
    pub fn new(mut driver: Box<dyn MediaDriver>, config: PlayerConfig) -> Self {
        driver.set_looping(config.looping);
        Self {
            state: PlayerState::new(config),
            driver,
            progress: Duration::ZERO,
            pending_events: Vec::new(),
        }
    }

    // ===== Transport Commands =====

    /// Play a single episode, replacing the queue
    pub fn play(&mut self, episode: Episode) -> Result<()> {
        tracing::debug!("play single episode: {}", episode.title);
        self.state.play(episode);
        self.emit_state_changed();
        self.load_current()
    }

    /// Play a list of episodes starting at `index`
    ///
    /// This is the validating boundary for caller-supplied indices: an
    /// out-of-range index is clamped to the last episode rather than
    /// rejected, so interactive callers degrade gracefully. An empty
    /// list is reported as `QueueEmpty`.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        if list.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }

        let clamped = index.min(list.len() - 1);
        if clamped != index {
            tracing::warn!(
                "clamping out-of-range queue index {} to {}",
                index,
                clamped
            );
        }

        tracing::debug!("play list of {} episodes from index {}", list.len(), clamped);
        self.state.play_list(list, clamped)?;
        self.emit_state_changed();
        self.load_current()
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.state.is_empty() {
            return Err(PlaybackError::NoEpisodeLoaded);
        }

        self.state.toggle_play();
        if self.state.is_playing() {
            tracing::debug!("resuming at {}s", self.driver.position().as_secs());
            self.driver.play()?;
        } else {
            self.driver.pause()?;
        }
        self.emit_state_changed();
        Ok(())
    }

    /// Toggle the loop flag, forwarding it to the driver
    pub fn toggle_loop(&mut self) {
        self.state.toggle_loop();
        self.driver.set_looping(self.state.is_looping());
    }

    /// Toggle the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.state.toggle_shuffle();
    }

    /// Seek to a position in the current episode
    ///
    /// The target is clamped to the episode's duration. Displayed
    /// progress follows the seek immediately rather than waiting for
    /// the driver's next time update.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        let duration = self
            .state
            .current_episode()
            .map(|episode| episode.duration)
            .ok_or(PlaybackError::NoEpisodeLoaded)?;

        let clamped = position.min(duration);
        if clamped != position {
            tracing::warn!(
                "clamping seek target {}s to episode duration {}s",
                position.as_secs(),
                duration.as_secs()
            );
        }

        self.driver.seek(clamped)?;
        self.set_progress(clamped);
        Ok(())
    }

    /// Skip to the next episode
    ///
    /// No-op when the queue reports no next episode. With shuffle on,
    /// the random pick may land on the current index; the episode is
    /// reloaded and restarted in that case.
    pub fn next(&mut self) -> Result<()> {
        if self.state.is_empty() || !self.state.has_next() {
            return Ok(());
        }

        self.state.play_next();
        self.state.set_playing_state(true);
        self.emit_state_changed();
        self.load_current()
    }

    /// Step back to the previous episode
    ///
    /// No-op when already at the start of the queue.
    pub fn previous(&mut self) -> Result<()> {
        if !self.state.has_previous() {
            return Ok(());
        }

        self.state.play_previous();
        self.state.set_playing_state(true);
        self.emit_state_changed();
        self.load_current()
    }

    /// Clear the queue and pause the device
    ///
    /// Loop and shuffle flags survive; the playing flag is reconciled
    /// through the driver's `Paused` event.
    pub fn clear(&mut self) -> Result<()> {
        tracing::debug!("clearing player state");
        self.state.clear();
        self.driver.pause()?;
        self.set_progress(Duration::ZERO);
        self.pending_events.push(PlayerEvent::QueueCleared);
        Ok(())
    }

    // ===== Driver Events =====

    /// Handle a discrete event from the media driver
    ///
    /// Infallible by design: a failing follow-up driver command is
    /// logged and surfaced as a [`PlayerEvent::Error`] instead of
    /// propagating, so the application's event loop keeps running.
    pub fn handle_event(&mut self, event: DriverEvent) {
        match event {
            DriverEvent::MetadataLoaded { duration } => {
                tracing::debug!("metadata loaded, duration {}s", duration.as_secs());
                // New episode: rewind the device so time updates start at zero
                if let Err(e) = self.driver.seek(Duration::ZERO) {
                    self.emit_error(&e);
                }
                self.set_progress(Duration::ZERO);
            }
            DriverEvent::TimeUpdate { position } => {
                // Whole seconds only; the display has no use for sub-second jitter
                self.set_progress(Duration::from_secs(position.as_secs()));
            }
            DriverEvent::Played => {
                self.state.set_playing_state(true);
                self.emit_state_changed();
            }
            DriverEvent::Paused => {
                self.state.set_playing_state(false);
                self.emit_state_changed();
            }
            DriverEvent::Ended => self.handle_episode_ended(),
        }
    }

    /// Advance or shut down when the current episode plays to its end
    fn handle_episode_ended(&mut self) {
        if self.state.has_next() {
            tracing::debug!("episode ended, advancing");
            self.state.play_next();
            if let Err(e) = self.load_current() {
                self.emit_error(&e);
            }
        } else {
            tracing::debug!("episode ended with no next, clearing");
            if let Err(e) = self.clear() {
                self.emit_error(&e);
            }
        }
    }

    // ===== State Queries =====

    /// Get the playback state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Get the displayed playback position (whole seconds)
    pub fn progress(&self) -> Duration {
        self.progress
    }

    // ===== Events =====

    /// Drain all pending UI events
    ///
    /// Returns every event emitted since the last drain. The UI calls
    /// this once per frame or after dispatching a command.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending UI events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Load the current episode into the driver and start it
    fn load_current(&mut self) -> Result<()> {
        let Some(episode) = self.state.current_episode() else {
            return Err(PlaybackError::NoEpisodeLoaded);
        };

        let index = self.state.current_index();
        let title = episode.title.clone();

        self.driver.load(episode)?;
        self.driver.play()?;
        self.set_progress(Duration::ZERO);
        self.pending_events
            .push(PlayerEvent::EpisodeChanged { index, title });
        Ok(())
    }

    /// Update displayed progress and notify the UI
    fn set_progress(&mut self, position: Duration) {
        self.progress = position;
        self.pending_events
            .push(PlayerEvent::ProgressChanged { position });
    }

    /// Emit a state changed event
    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlayerEvent::StateChanged {
            playing: self.state.is_playing(),
        });
    }

    /// Emit an error event
    fn emit_error(&mut self, error: &PlaybackError) {
        tracing::error!("driver command failed: {}", error);
        self.pending_events.push(PlayerEvent::Error {
            message: error.to_string(),
        });
    }
}
