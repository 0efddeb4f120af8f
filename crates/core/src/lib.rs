// SPDX-License-Identifier: MIT

//!
//! *Part of the wider YearScrubber project*
//!
//! This crate holds everything about the year timeline that doesn't depend on
//! a GUI toolkit:
//!
//! - The allowed years and the timeline's range
//! - Converting slider positions to years (and snapping to allowed years)
//! - The selection state: current year, "all years", and playback
//! - Tick mark layout
//! - Where the widget sits within its parent, and dragging it around
//!
//! The `gui` crate draws all of this with `egui`.  Because nothing here knows
//! about `egui`, all of the behaviour can be tested directly.
//!

mod drag;
mod playback;
mod selection;
mod snapping;
mod ticks;
mod timeline;
mod year;

pub use drag::*;
pub use playback::*;
pub use selection::*;
pub use snapping::*;
pub use ticks::*;
pub use timeline::*;
pub use year::*;

#[macro_use]
extern crate log;
