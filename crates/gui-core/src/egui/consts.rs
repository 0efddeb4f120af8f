// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub static STEP_BUTTON_WIDTH: f32 = 30.0;
pub static PLAY_PAUSE_BUTTON_WIDTH: f32 = 36.0;

pub static PREVIOUS_SYMBOL: &str = "⏮";
pub static NEXT_SYMBOL: &str = "⏭";
pub static PLAY_SYMBOL: &str = "▶";
pub static PAUSE_SYMBOL: &str = "⏸";

/// Height of the strip holding the tick marks and their labels
pub static TICK_STRIP_HEIGHT: f32 = 40.0;

/// Length of a tick mark
pub static TICK_LENGTH: f32 = 16.0;

/// Font size of the tick labels
pub static TICK_LABEL_FONT_SIZE: f32 = 10.0;
