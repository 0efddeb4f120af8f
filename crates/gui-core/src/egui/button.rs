// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The timeline's control buttons
//!

use crate::{
    NEXT_SYMBOL, PAUSE_SYMBOL, PLAY_PAUSE_BUTTON_WIDTH, PLAY_SYMBOL, PREVIOUS_SYMBOL,
    STEP_BUTTON_WIDTH, body_text_height,
};
use eframe::egui::{self, Response, Ui};

/// Helpers for button drawing to an `egui` context
pub struct Button {}

impl Button {
    /// Draw the "previous year" button and return the response
    pub fn previous(ui: &mut Ui, enabled: bool) -> Response {
        Self::step(ui, enabled, PREVIOUS_SYMBOL)
    }

    /// Draw the "next year" button and return the response
    pub fn next(ui: &mut Ui, enabled: bool) -> Response {
        Self::step(ui, enabled, NEXT_SYMBOL)
    }

    /// Draw the play/pause button and return the response.  Shows the pause
    /// symbol while playing.
    pub fn play_pause(ui: &mut Ui, playing: bool) -> Response {
        let button_height = body_text_height(ui);
        let symbol = if playing { PAUSE_SYMBOL } else { PLAY_SYMBOL };
        ui.add_sized(
            [PLAY_PAUSE_BUTTON_WIDTH, button_height],
            egui::Button::new(symbol).frame(false),
        )
    }

    fn step(ui: &mut Ui, enabled: bool, symbol: &str) -> Response {
        let button_height = body_text_height(ui);
        ui.add_enabled_ui(enabled, |ui| {
            ui.add_sized(
                [STEP_BUTTON_WIDTH, button_height],
                egui::Button::new(symbol).frame(false),
            )
        })
        .inner
    }
}
