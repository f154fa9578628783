//! Platform-agnostic media driver trait
//!
//! Abstracts the capability that actually decodes and plays audio
//! (an HTML audio element, a native output stack, a test double).

use crate::error::Result;
use crate::types::Episode;
use std::time::Duration;

/// Platform-agnostic media driver
///
/// Implementors own the playback device and its timing. The controller
/// issues commands through this trait and consumes the driver's discrete
/// [`DriverEvent`](crate::DriverEvent) stream; the driver never calls
/// back into the controller.
pub trait MediaDriver: Send {
    /// Point the driver at an episode's media resource
    ///
    /// Loading is asynchronous on real platforms; the driver reports
    /// readiness with a `MetadataLoaded` event.
    fn load(&mut self, episode: &Episode) -> Result<()>;

    /// Start or resume playback of the loaded resource
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self) -> Result<()>;

    /// Seek to a position in the loaded resource
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Get the current playback position
    ///
    /// Authoritative for display only; the controller never writes it
    /// into [`PlayerState`](crate::PlayerState).
    fn position(&self) -> Duration;

    /// Enable or disable single-episode looping on the device
    fn set_looping(&mut self, looping: bool);
}

/// Scripted media driver for unit tests
///
/// Records every command it receives into a shared log so tests can
/// assert on the controller's driver traffic after handing the driver
/// over.
#[cfg(test)]
pub struct ScriptedDriver {
    commands: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    position: Duration,
}

#[cfg(test)]
impl ScriptedDriver {
    pub fn new() -> (Self, std::sync::Arc<std::sync::Mutex<Vec<String>>>) {
        let commands = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        (
            Self {
                commands: std::sync::Arc::clone(&commands),
                position: Duration::ZERO,
            },
            commands,
        )
    }

    fn record(&self, command: String) {
        self.commands.lock().unwrap().push(command);
    }
}

#[cfg(test)]
impl MediaDriver for ScriptedDriver {
    fn load(&mut self, episode: &Episode) -> Result<()> {
        self.record(format!("load {}", episode.url));
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.record("play".to_string());
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.record("pause".to_string());
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.record(format!("seek {}", position.as_secs()));
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_looping(&mut self, looping: bool) {
        self.record(format!("loop {}", looping));
    }
}
