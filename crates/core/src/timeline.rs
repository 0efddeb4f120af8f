// SPDX-License-Identifier: MIT

//!
//! The timeline's selection state (what's selected, and whether it's playing)
//!

use crate::{
    AllowedYears, Playback, PlaybackStep, SLIDER_MAX, Selection, Year, snap, year_to_value,
};

/// Everything about the timeline that isn't presentation: the allowed years,
/// the current year, whether "all years" is selected, and playback.
///
/// Each change to the selection queues a notification for the host, which is
/// collected with [`TimelineState::drain_notifications`].
#[derive(Debug, Clone)]
pub struct TimelineState {
    /// The years that can be selected
    allowed_years: AllowedYears,

    /// Index (into `allowed_years`) of the current year.  This is kept while
    /// "all years" is selected so that it can be restored.
    current_index: usize,

    /// Whether "all years" is selected
    all_years: bool,

    /// Playback state
    playback: Playback,

    /// Selections not yet reported to the host
    notifications: Vec<Selection>,
}

impl TimelineState {
    /// Create a new `TimelineState` with the first allowed year selected
    pub fn new(allowed_years: AllowedYears) -> Self {
        Self {
            allowed_years,
            current_index: 0,
            all_years: false,
            playback: Playback::Idle,
            notifications: Vec::new(),
        }
    }

    pub fn allowed_years(&self) -> &AllowedYears {
        &self.allowed_years
    }

    /// Replace the allowed years.  The current year goes back to the first
    /// allowed year and playback stops.  The host is not notified.
    pub fn set_allowed_years(&mut self, allowed_years: AllowedYears) {
        if allowed_years == self.allowed_years {
            return;
        }
        debug!(
            "Allowed years changed: {} years ({} - {})",
            allowed_years.len(),
            allowed_years.first(),
            allowed_years.last()
        );
        self.allowed_years = allowed_years;
        self.current_index = 0;
        self.stop_playback();
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current year (the year that's restored when "all years" is turned
    /// off)
    pub fn current_year(&self) -> Year {
        self.allowed_years
            .get(self.current_index)
            .unwrap_or_else(|| self.allowed_years.first())
    }

    pub fn all_years(&self) -> bool {
        self.all_years
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// The current selection
    pub fn selection(&self) -> Selection {
        if self.all_years {
            Selection::AllYears
        } else {
            Selection::Year(self.current_year())
        }
    }

    /// The text describing the current selection
    pub fn label(&self) -> String {
        if self.all_years {
            format!(
                "all years ({}-{})",
                self.allowed_years.first(),
                self.allowed_years.last()
            )
        } else {
            format!("current year: {}", self.current_year())
        }
    }

    /// Where the slider's handle sits.  When "all years" is selected it's
    /// parked at the end of the track.
    pub fn slider_position(&self) -> f64 {
        if self.all_years {
            SLIDER_MAX
        } else {
            year_to_value(self.allowed_years.range(), self.current_year())
        }
    }

    pub fn slider_enabled(&self) -> bool {
        !self.all_years
    }

    pub fn can_step_previous(&self) -> bool {
        !self.all_years && !self.is_playing() && self.current_index > 0
    }

    pub fn can_step_next(&self) -> bool {
        !self.all_years
            && !self.is_playing()
            && self.current_index < self.allowed_years.last_index()
    }

    /// Move the slider, snapping to the closest allowed year
    pub fn slide_to(&mut self, value: f64) {
        if self.all_years {
            return;
        }
        let (index, year) = snap(&self.allowed_years, value);
        trace!("Slider moved to {value:.2}, snapped to {year}");
        self.select_index(index);
    }

    /// Step to the previous allowed year.  Returns whether the selection moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_step_previous() {
            return false;
        }
        self.select_index(self.current_index - 1);
        true
    }

    /// Step to the next allowed year.  Returns whether the selection moved.
    pub fn next(&mut self) -> bool {
        if !self.can_step_next() {
            return false;
        }
        self.select_index(self.current_index + 1);
        true
    }

    /// Start or stop playback (the play/pause button).  Playback can't be
    /// started while "all years" is selected.
    pub fn toggle_playback(&mut self) -> Playback {
        if self.is_playing() || self.all_years {
            self.stop_playback();
        } else {
            debug!("Playback started from {}", self.current_year());
            self.playback = Playback::Playing {
                index: self.current_index,
            };
        }
        self.playback
    }

    /// Move playback on by 1 allowed year.  Once the last allowed year has been
    /// shown the next tick stops playback without selecting anything.
    pub fn playback_tick(&mut self) -> PlaybackStep {
        let Playback::Playing { index } = self.playback else {
            return PlaybackStep::NotPlaying;
        };
        if index >= self.allowed_years.last_index() {
            debug!("Playback reached the last year");
            self.playback = Playback::Idle;
            return PlaybackStep::Finished;
        }
        let index = index + 1;
        self.playback = Playback::Playing { index };
        self.select_index(index);
        PlaybackStep::Advanced(index)
    }

    /// Select (or deselect) "all years".  Selecting it stops playback.
    pub fn set_all_years(&mut self, all_years: bool) {
        if all_years == self.all_years {
            return;
        }
        debug!("All years: {all_years}");
        self.all_years = all_years;
        if all_years {
            self.stop_playback();
        }
        self.notify();
    }

    /// Take the selections that haven't yet been reported to the host (oldest
    /// first)
    pub fn drain_notifications(&mut self) -> std::vec::Drain<'_, Selection> {
        self.notifications.drain(..)
    }

    fn stop_playback(&mut self) {
        if self.is_playing() {
            debug!("Playback stopped at {}", self.current_year());
        }
        self.playback = Playback::Idle;
    }

    fn select_index(&mut self, index: usize) {
        self.current_index = index;
        self.notify();
    }

    fn notify(&mut self) {
        let selection = self.selection();
        trace!("Selection: {selection}");
        self.notifications.push(selection);
    }
}
