//! Cast Player - Playback State Management
//!
//! Platform-agnostic playback state management for Cast Player.
//!
//! This crate provides:
//! - Episode queue with index-based navigation
//! - Transport flags (playing, looping, shuffling)
//! - Shuffle-aware next/previous rules
//! - A controller wiring the state to a media driver
//! - UI synchronization through a drained event queue
//!
//! # Architecture
//!
//! `cast-playback` has no dependency on any UI toolkit or audio backend.
//! The piece that actually decodes and plays audio is provided by the
//! application through the [`MediaDriver`] trait; the driver reports back
//! with discrete [`DriverEvent`] values, never by calling into the
//! controller directly.
//!
//! [`PlayerState`] on its own is pure data: every operation is an
//! immediate, synchronous transition with no side effects. All device
//! interaction goes through [`PlayerController`].
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use cast_playback::{Episode, PlayerConfig, PlayerState};
//! use std::time::Duration;
//!
//! let episode = Episode {
//!     title: "Designing in the open".to_string(),
//!     members: "Ana, Pedro".to_string(),
//!     thumbnail: "https://example.com/ep1.jpg".to_string(),
//!     duration: Duration::from_secs(2520),
//!     url: "https://example.com/ep1.mp3".to_string(),
//! };
//!
//! let mut state = PlayerState::new(PlayerConfig::default());
//! state.play(episode);
//!
//! assert!(state.is_playing());
//! assert!(!state.has_next());
//! assert!(!state.has_previous());
//! ```
//!
//! # Example: Driving a Media Driver
//!
//! ```rust,no_run
//! use cast_playback::{
//!     DriverEvent, Episode, MediaDriver, PlayerConfig, PlayerController, Result,
//! };
//! use std::time::Duration;
//!
//! // Implement MediaDriver for your platform
//! struct MyAudioElement {
//!     // ... platform-specific handle
//! }
//!
//! impl MediaDriver for MyAudioElement {
//!     fn load(&mut self, episode: &Episode) -> Result<()> {
//!         // Bind the media resource
//!         Ok(())
//!     }
//!
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn seek(&mut self, position: Duration) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn position(&self) -> Duration {
//!         Duration::ZERO
//!     }
//!
//!     fn set_looping(&mut self, looping: bool) {}
//! }
//!
//! // Wire it up
//! let driver = MyAudioElement { /* ... */ };
//! let mut controller = PlayerController::new(Box::new(driver), PlayerConfig::default());
//!
//! // React to device events from the platform's event loop
//! controller.handle_event(DriverEvent::TimeUpdate {
//!     position: Duration::from_secs(12),
//! });
//!
//! // Let the UI catch up
//! for event in controller.drain_events() {
//!     // render
//! }
//! ```

mod controller;
mod driver;
mod error;
mod events;
mod format;
mod state;
pub mod types;

// Public exports
pub use controller::PlayerController;
pub use driver::MediaDriver;
pub use error::{PlaybackError, Result};
pub use events::{DriverEvent, PlayerEvent};
pub use format::format_clock;
pub use state::PlayerState;
pub use types::{Episode, PlayerConfig};
