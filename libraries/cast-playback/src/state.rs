//! Playback state and navigation rules
//!
//! Single source of truth for what is queued and how playback advances:
//! - Episode queue (insertion order = play order)
//! - Current position (index-based, non-destructive navigation)
//! - Transport flags (playing, looping, shuffling)

use crate::error::{PlaybackError, Result};
use crate::types::{Episode, PlayerConfig};
use rand::Rng;

/// Playback state container
///
/// Structure:
/// ```text
/// Queue: [Episode A] [Episode B] [Episode C]
///                        ^
///                  current_index
/// ```
///
/// All transitions are immediate, synchronous, pure data mutation.
/// Driving the actual media device is the controller's responsibility;
/// this type never touches a driver.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Queued episodes (insertion order = play order)
    episode_list: Vec<Episode>,

    /// Current position in the queue
    ///
    /// Valid in `[0, episode_list.len())` when the queue is non-empty;
    /// unused (kept at 0) when the queue is empty.
    current_index: usize,

    /// Whether playback is running
    is_playing: bool,

    /// Whether the current episode loops
    is_looping: bool,

    /// Whether `play_next` picks a random episode
    is_shuffling: bool,
}

impl PlayerState {
    /// Create new idle state from configuration
    ///
    /// Starts with an empty queue, index 0, and not playing. Only the
    /// loop and shuffle flags come from the configuration.
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            episode_list: Vec::new(),
            current_index: 0,
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
        }
    }

    // ===== Queue Loading =====

    /// Play a single episode
    ///
    /// Replaces the queue with a one-element list containing `episode`
    /// and starts playing from index 0.
    pub fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.current_index = 0;
        self.is_playing = true;
    }

    /// Play a list of episodes starting at `index`
    ///
    /// Replaces the queue with `list` and starts playing from `index`.
    /// The index must be valid for `list`; out-of-range input is rejected
    /// without touching the current queue. Boundary layers that prefer to
    /// degrade gracefully clamp before calling (see `PlayerController`).
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        if index >= list.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: list.len(),
            });
        }

        self.episode_list = list;
        self.current_index = index;
        self.is_playing = true;
        Ok(())
    }

    // ===== Transport Flags =====

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Set the playing flag directly
    ///
    /// Used to reconcile with external driver events, e.g. the driver
    /// pausing on its own for buffering.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    // ===== Navigation =====

    /// Advance to the next episode
    ///
    /// With shuffle on, picks a uniformly random index in
    /// `[0, queue length)` - the pick may repeat the current index.
    /// Otherwise increments the index when `has_next`. No-op when
    /// neither applies (end of queue, or empty queue).
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            if self.episode_list.is_empty() {
                return;
            }
            self.current_index = rand::thread_rng().gen_range(0..self.episode_list.len());
        } else if self.has_next() {
            self.current_index += 1;
        }
    }

    /// Step back to the previous episode
    ///
    /// Decrements the index when `has_previous`; no-op otherwise.
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_index -= 1;
        }
    }

    /// Clear the queue
    ///
    /// Empties the episode list and resets the index to 0. Transport
    /// flags are untouched: loop and shuffle persist across a clear,
    /// and the playing flag is reconciled by the controller.
    pub fn clear(&mut self) {
        self.episode_list.clear();
        self.current_index = 0;
    }

    // ===== Derived Queries =====

    /// Check if there is a previous episode
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Check if there is a next episode
    ///
    /// Shuffle mode always reports a next episode available, since the
    /// random pick can land anywhere in the queue (including the current
    /// index).
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.episode_list.len()
    }

    /// Get the current episode, or `None` when the queue is empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_index)
    }

    /// Get the queued episodes in play order
    pub fn episodes(&self) -> &[Episode] {
        &self.episode_list
    }

    /// Get the current queue position
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Check if playback is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Check if the loop flag is set
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Check if the shuffle flag is set
    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Number of queued episodes
    pub fn len(&self) -> usize {
        self.episode_list.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.episode_list.is_empty()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn create_test_episode(title: &str) -> Episode {
        Episode {
            title: title.to_string(),
            members: "Test Members".to_string(),
            thumbnail: format!("https://example.com/{}.jpg", title),
            duration: Duration::from_secs(1800),
            url: format!("https://example.com/{}.mp3", title),
        }
    }

    #[test]
    fn new_state_is_idle() {
        let state = PlayerState::default();
        assert!(state.is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_playing());
        assert!(!state.is_looping());
        assert!(!state.is_shuffling());
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn config_flags_carry_over() {
        let state = PlayerState::new(PlayerConfig {
            looping: true,
            shuffling: true,
        });
        assert!(state.is_looping());
        assert!(state.is_shuffling());
        assert!(!state.is_playing());
    }

    #[test]
    fn play_replaces_queue_with_single_episode() {
        let mut state = PlayerState::default();
        state
            .play_list(
                vec![
                    create_test_episode("a"),
                    create_test_episode("b"),
                    create_test_episode("c"),
                ],
                2,
            )
            .unwrap();

        state.play(create_test_episode("x"));

        assert_eq!(state.len(), 1);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_playing());
        assert_eq!(state.current_episode().unwrap().title, "x");
    }

    #[test]
    fn play_list_sets_index_and_plays() {
        let mut state = PlayerState::default();
        let list = vec![
            create_test_episode("a"),
            create_test_episode("b"),
            create_test_episode("c"),
        ];

        state.play_list(list.clone(), 1).unwrap();

        assert_eq!(state.current_episode(), Some(&list[1]));
        assert!(state.is_playing());
    }

    #[test]
    fn play_list_rejects_out_of_range_index() {
        let mut state = PlayerState::default();
        let result = state.play_list(vec![create_test_episode("a")], 1);

        assert!(matches!(
            result,
            Err(PlaybackError::IndexOutOfBounds { index: 1, len: 1 })
        ));
        // Queue untouched on rejection
        assert!(state.is_empty());
        assert!(!state.is_playing());
    }

    #[test]
    fn play_list_rejects_empty_list() {
        let mut state = PlayerState::default();
        let result = state.play_list(vec![], 0);
        assert!(result.is_err());
    }

    #[test]
    fn toggle_play_flips_flag() {
        let mut state = PlayerState::default();

        state.toggle_play();
        assert!(state.is_playing());

        state.toggle_play();
        assert!(!state.is_playing());
    }

    #[test]
    fn toggle_loop_and_shuffle() {
        let mut state = PlayerState::default();

        state.toggle_loop();
        assert!(state.is_looping());

        state.toggle_shuffle();
        assert!(state.is_shuffling());

        state.toggle_loop();
        state.toggle_shuffle();
        assert!(!state.is_looping());
        assert!(!state.is_shuffling());
    }

    #[test]
    fn set_playing_state_directly() {
        let mut state = PlayerState::default();

        state.set_playing_state(true);
        assert!(state.is_playing());

        state.set_playing_state(false);
        assert!(!state.is_playing());
    }

    #[test]
    fn play_next_advances_sequentially() {
        let mut state = PlayerState::default();
        state
            .play_list(
                vec![
                    create_test_episode("a"),
                    create_test_episode("b"),
                    create_test_episode("c"),
                ],
                0,
            )
            .unwrap();

        state.play_next();
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.current_episode().unwrap().title, "b");
    }

    #[test]
    fn play_next_is_noop_at_end_of_queue() {
        let mut state = PlayerState::default();
        state
            .play_list(
                vec![
                    create_test_episode("a"),
                    create_test_episode("b"),
                    create_test_episode("c"),
                ],
                2,
            )
            .unwrap();

        assert!(!state.has_next());
        state.play_next();
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn play_next_with_shuffle_stays_in_range() {
        let mut state = PlayerState::default();
        state
            .play_list(
                vec![
                    create_test_episode("a"),
                    create_test_episode("b"),
                    create_test_episode("c"),
                ],
                2,
            )
            .unwrap();
        state.toggle_shuffle();

        assert!(state.has_next());

        for _ in 0..50 {
            state.play_next();
            assert!(state.current_index() < state.len());
        }
    }

    #[test]
    fn play_next_with_shuffle_may_repeat_current() {
        let mut state = PlayerState::default();
        state.play(create_test_episode("only"));
        state.toggle_shuffle();

        // Single-element queue: the random pick always lands on index 0
        state.play_next();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn play_next_with_shuffle_on_empty_queue_is_noop() {
        let mut state = PlayerState::default();
        state.toggle_shuffle();

        state.play_next();
        assert!(state.is_empty());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn play_previous_steps_back() {
        let mut state = PlayerState::default();
        state
            .play_list(
                vec![create_test_episode("a"), create_test_episode("b")],
                1,
            )
            .unwrap();

        assert!(state.has_previous());
        state.play_previous();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_episode().unwrap().title, "a");
    }

    #[test]
    fn play_previous_is_noop_at_start() {
        let mut state = PlayerState::default();
        state
            .play_list(vec![create_test_episode("a")], 0)
            .unwrap();

        assert!(!state.has_previous());
        state.play_previous();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn clear_resets_queue_but_keeps_flags() {
        let mut state = PlayerState::default();
        state
            .play_list(
                vec![create_test_episode("a"), create_test_episode("b")],
                1,
            )
            .unwrap();
        state.toggle_loop();
        state.toggle_shuffle();

        state.clear();

        assert!(state.is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(state.current_episode().is_none());
        assert!(state.is_looping());
        assert!(state.is_shuffling());
    }

    #[test]
    fn empty_queue_has_no_navigation() {
        let state = PlayerState::default();
        assert!(!state.has_next());
        assert!(!state.has_previous());
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn has_next_tracks_shuffle_flag() {
        let mut state = PlayerState::default();
        state
            .play_list(
                vec![create_test_episode("a"), create_test_episode("b")],
                1,
            )
            .unwrap();

        assert!(!state.has_next());

        state.toggle_shuffle();
        assert!(state.has_next());
    }
}
