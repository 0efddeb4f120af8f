// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! YearScrubber egui desktop app
//!

use crate::{Config, TimelineWidget};
use eframe::App;
use eframe::egui::{CentralPanel, Context, RichText, TopBottomPanel};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use year_scrubber_core::{AllowedYears, Selection};
use year_scrubber_gui_core::{Draw, Label, widget_y_spacing};

/// Holds both the `tx` and `rx` ends of an unbounded channel.
#[derive(Debug)]
pub struct UnboundedChannel<T> {
    pub tx: UnboundedSender<T>,
    pub rx: UnboundedReceiver<T>,
}

impl<T> From<(UnboundedSender<T>, UnboundedReceiver<T>)> for UnboundedChannel<T> {
    fn from(value: (UnboundedSender<T>, UnboundedReceiver<T>)) -> Self {
        UnboundedChannel {
            tx: value.0,
            rx: value.1,
        }
    }
}

/// A host for the timeline widget: shows the allowed years and what the
/// widget has reported
pub struct YearScrubberApp {
    /// The timeline
    timeline: TimelineWidget,

    /// The widget's selections arrive on this channel
    selections: UnboundedReceiver<Selection>,

    /// The most recent selection (nothing until the user picks something)
    latest_selection: Option<Selection>,

    /// How many selections have been reported
    selection_count: usize,
}

impl YearScrubberApp {
    /// Create a new `YearScrubberApp`
    pub fn new(allowed_years: AllowedYears, config: &Config) -> Self {
        let channel: UnboundedChannel<Selection> = tokio::sync::mpsc::unbounded_channel().into();
        let tx = channel.tx;
        let timeline = TimelineWidget::new(allowed_years, config, move |selection| {
            let _ = tx.send(selection);
        });
        Self {
            timeline,
            selections: channel.rx,
            latest_selection: None,
            selection_count: 0,
        }
    }

    /// Receive the widget's selections
    fn check_for_selections(&mut self) {
        while let Ok(selection) = self.selections.try_recv() {
            self.selection_count += 1;
            info!(
                "Host received selection #{}: {}",
                self.selection_count,
                serde_json::to_string(&selection).unwrap_or_default()
            );
            self.latest_selection = Some(selection);
        }
    }

    fn draw_selection(&self, ui: &mut eframe::egui::Ui) {
        let allowed_years = self.timeline.state().allowed_years();
        let years: Vec<String> = allowed_years.iter().map(|year| year.to_string()).collect();
        ui.horizontal(|ui| {
            Label::strong(ui, "Allowed years");
            ui.label(years.join(", "));
        });
        ui.add_space(widget_y_spacing(ui));

        match self.latest_selection {
            Some(selection) => {
                let json = serde_json::to_string(&selection).unwrap_or_default();
                let years: Vec<String> = selection
                    .years(allowed_years)
                    .iter()
                    .map(|year| year.to_string())
                    .collect();
                ui.horizontal(|ui| {
                    Label::strong(ui, "Reported");
                    ui.label(RichText::new(json).monospace());
                });
                let showing = if selection.is_all_years() {
                    "Showing (all years)"
                } else {
                    "Showing"
                };
                ui.horizontal(|ui| {
                    Label::strong(ui, showing);
                    ui.label(years.join(", "));
                });
            }
            None => {
                Label::weak(ui, "Nothing reported yet");
            }
        }
    }
}

impl App for YearScrubberApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("heading").show(ctx, |ui| {
            ui.heading("YearScrubber");
        });

        CentralPanel::default().show(ctx, |ui| {
            // The widget reports as it's drawn, so draw it first
            self.timeline.draw(ctx, ui);
            self.check_for_selections();
            self.draw_selection(ui);
        });
    }
}
