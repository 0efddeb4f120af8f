// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider YearScrubber project*
//!
//! This library crate provides the `egui` timeline widget, and the small
//! desktop application used to host it.
//!

mod app;
mod config;
mod consts;
mod playback_timer;
mod widget;

pub use app::YearScrubberApp;
pub use config::{Config, ConfigError, DEFAULT_WIDGET_WIDTH, config_file_path};
pub use consts::DEFAULT_WINDOW_SIZES;
pub use playback_timer::PlaybackTimer;
pub use widget::TimelineWidget;

#[macro_use]
extern crate log;
