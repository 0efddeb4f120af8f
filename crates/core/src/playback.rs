// SPDX-License-Identifier: MIT

//!
//! Automatic stepping through the allowed years
//!

use std::time::Duration;

/// The default time between playback steps
pub const PLAYBACK_INTERVAL: Duration = Duration::from_millis(800);

/// Whether playback is running, and if so where it's up to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Idle,

    /// Playing, with the index of the allowed year most recently shown
    Playing { index: usize },
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        matches!(self, Playback::Playing { .. })
    }
}

/// The outcome of a single playback tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStep {
    /// Moved on to the allowed year at this index
    Advanced(usize),

    /// Was already at the last allowed year, so playback has stopped
    Finished,

    /// Playback wasn't running
    NotPlaying,
}
