// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Label helpers
//!

use eframe::egui::{Response, RichText, Ui};

/// Helpers for label drawing to an `egui` context
pub struct Label {}

impl Label {
    /// Draw a strong label and return the response (short for
    /// `ui.label(RichText::new(text).strong())`)
    pub fn strong(ui: &mut Ui, text: &str) -> Response {
        ui.label(RichText::new(text).strong())
    }

    /// Draw a weak label and return the response (short for
    /// `ui.label(RichText::new(text).weak())`)
    pub fn weak(ui: &mut Ui, text: &str) -> Response {
        ui.label(RichText::new(text).weak())
    }
}
