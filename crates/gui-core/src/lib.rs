// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider YearScrubber project*
//!
//! This library crate includes the `egui` building blocks the YearScrubber
//! timeline widget uses that other projects may also wish to use.
//!

mod check_for_updates;
mod egui;

pub use check_for_updates::*;
pub use egui::*;
