// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Checking for updates.
//!
//! `egui` only redraws when there is some sort of interaction unless a redraw
//! is explicitly requested.  Things that change on their own (e.g. a timer
//! firing) implement this trait so that the caller can ask for a redraw only
//! while something is actually pending.
//!

/// Implementing types can check for updates and indicate whether they're
/// waiting for more.  For example, a timer's channel needs checking for ticks
/// for as long as the timer is running.
pub trait CheckForUpdates {
    /// Check for (and apply) any updates
    fn check_for_updates(&mut self);

    /// Whether more updates are expected without user interaction
    fn waiting_for_updates(&self) -> bool;
}
