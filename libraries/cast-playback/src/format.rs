//! Clock-string formatting for progress and duration readouts

use std::time::Duration;

/// Format a duration as a zero-padded `HH:MM:SS` clock string
///
/// Hours are always shown, matching the player's progress readout.
///
/// # Example
///
/// ```rust
/// use cast_playback::format_clock;
/// use std::time::Duration;
///
/// assert_eq!(format_clock(Duration::from_secs(3725)), "01:02:05");
/// ```
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
