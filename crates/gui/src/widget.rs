// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The timeline widget for egui
//!

use crate::config::Config;
use crate::playback_timer::PlaybackTimer;
use eframe::egui::{
    self, Align, Align2, Area, Context, FontId, Frame, Id, Layout, Margin, Order, Pos2, Response,
    Sense, Slider, Stroke, Ui, UiBuilder, Vec2,
};
use std::time::Duration;
use year_scrubber_core::{
    AllowedYears, Placement, Point, PlaybackStep, PressTarget, Rect, SLIDER_MAX, SLIDER_MIN,
    Selection, Size, TickLayout, TickParams, TimelineState, WidgetDrag,
};
use year_scrubber_gui_core::{
    Button, CheckForUpdates, Draw, Label, PLAY_PAUSE_BUTTON_WIDTH, STEP_BUTTON_WIDTH,
    TICK_LABEL_FONT_SIZE, TICK_LENGTH, TICK_STRIP_HEIGHT, widget_x_spacing,
};

/// Inner margin of the widget's frame
const FRAME_MARGIN: i8 = 10;

/// Height used for the widget before it has been measured
const INITIAL_HEIGHT_ESTIMATE: f32 = 130.0;

/// The controls drawn in the last frame (and where they were).  Presses on
/// these don't move the widget.
type ControlRects = Vec<(PressTarget, egui::Rect)>;

/// A floating, draggable timeline for picking a year (or all years).
///
/// The widget reports every change of selection to the `on_select` callback
/// it was created with.
pub struct TimelineWidget {
    /// The `egui` ID of the widget's area
    id: Id,

    /// What's selected and whether it's playing
    state: TimelineState,

    /// Where the widget is, and any drag in progress
    drag: WidgetDrag,

    /// Drives playback
    timer: PlaybackTimer,

    /// Time between playback steps
    playback_interval: Duration,

    /// Tick layout parameters
    tick_params: TickParams,

    /// Width of the widget's contents
    width: f32,

    /// The widget's size as of the last frame
    size: Size,

    /// The tick strip as of the last frame
    track_rect: egui::Rect,

    /// The controls as of the last frame
    controls: ControlRects,

    /// Called with each new selection
    on_select: Box<dyn FnMut(Selection)>,
}

impl TimelineWidget {
    /// Create a new `TimelineWidget` with the first allowed year selected
    pub fn new(
        allowed_years: AllowedYears,
        config: &Config,
        on_select: impl FnMut(Selection) + 'static,
    ) -> Self {
        info!(
            "New timeline widget for {} years ({} - {})",
            allowed_years.len(),
            allowed_years.first(),
            allowed_years.last()
        );
        let margins = 2.0 * f32::from(FRAME_MARGIN);
        let width = config.widget_width();
        Self {
            id: Id::new("year_scrubber_timeline"),
            state: TimelineState::new(allowed_years),
            drag: WidgetDrag::new(Placement::Anchored {
                right: config.anchor_margin(),
                bottom: config.anchor_margin(),
            }),
            timer: PlaybackTimer::new(),
            playback_interval: config.playback_interval(),
            tick_params: config.tick_params(),
            width,
            size: Size::new(width + margins, INITIAL_HEIGHT_ESTIMATE),
            track_rect: egui::Rect::ZERO,
            controls: ControlRects::new(),
            on_select: Box::new(on_select),
        }
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TimelineState {
        &mut self.state
    }

    /// Replace the allowed years (selects the first of the new years)
    pub fn set_allowed_years(&mut self, allowed_years: AllowedYears) {
        self.state.set_allowed_years(allowed_years);
        self.stop_timer_if_idle();
    }

    pub fn placement(&self) -> Placement {
        self.drag.placement()
    }

    pub fn track_width(&self) -> f32 {
        self.track_rect.width()
    }

    /// Start or stop the timer so that it matches the playback state.  Each
    /// tick repaints `ctx`, which is when the tick is applied.
    fn sync_timer(&mut self, ctx: &Context) {
        match (self.state.is_playing(), self.timer.is_running()) {
            (true, false) => {
                let ctx = ctx.clone();
                self.timer
                    .start(self.playback_interval, move || ctx.request_repaint());
            }
            (false, true) => self.timer.stop(),
            _ => (),
        }
    }

    fn stop_timer_if_idle(&mut self) {
        if !self.state.is_playing() {
            self.timer.stop();
        }
    }

    /// Pass any new selections on to the callback
    fn report_selections(&mut self) {
        for selection in self.state.drain_notifications() {
            debug!("Selected: {selection}");
            (self.on_select)(selection);
        }
    }

    fn draw_contents(&mut self, ui: &mut Ui) -> ControlRects {
        let mut controls = ControlRects::new();

        // Label & "all years" checkbox
        ui.horizontal(|ui| {
            Label::strong(ui, &self.state.label());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let mut all_years = self.state.all_years();
                let checkbox = ui.checkbox(&mut all_years, "all years");
                if checkbox.changed() {
                    self.state.set_all_years(all_years);
                }
                controls.push((PressTarget::Checkbox, checkbox.rect));
            });
        });

        // Slider
        let slider_enabled = self.state.slider_enabled();
        let mut value = self.state.slider_position();
        let slider = ui
            .scope(|ui| {
                ui.spacing_mut().slider_width = ui.available_width();
                let slider = Slider::new(&mut value, SLIDER_MIN..=SLIDER_MAX)
                    .show_value(false)
                    .trailing_fill(true);
                ui.add_enabled(slider_enabled, slider)
            })
            .inner;
        if slider.changed() {
            self.state.slide_to(value);
        }
        controls.push((PressTarget::Slider, slider.rect));

        // Ticks
        self.draw_ticks(ui);

        // Previous, play/pause, & next
        ui.horizontal(|ui| {
            let buttons_width =
                2.0 * STEP_BUTTON_WIDTH + PLAY_PAUSE_BUTTON_WIDTH + 2.0 * widget_x_spacing(ui);
            ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));

            let previous = Button::previous(ui, self.state.can_step_previous());
            if previous.clicked() {
                self.state.previous();
            }
            let play_pause = Button::play_pause(ui, self.state.is_playing());
            if play_pause.clicked() {
                self.state.toggle_playback();
            }
            let next = Button::next(ui, self.state.can_step_next());
            if next.clicked() {
                self.state.next();
            }
            for button in [previous, play_pause, next] {
                controls.push((PressTarget::Button, button.rect));
            }
        });

        controls
    }

    /// Draw the tick marks.  The strip is measured every frame so the ticks
    /// follow the widget's width.
    fn draw_ticks(&mut self, ui: &mut Ui) {
        let size = Vec2::new(ui.available_width(), TICK_STRIP_HEIGHT);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        if rect.width() != self.track_rect.width() {
            trace!("Track width {} -> {}", self.track_rect.width(), rect.width());
        }
        self.track_rect = rect;

        let range = self.state.allowed_years().range();
        let layout = TickLayout::compute(range, self.tick_params, rect.width());
        let colour = ui.visuals().text_color();
        let painter = ui.painter();
        for tick in layout.ticks {
            let x = rect.left() + tick.offset;
            painter.vline(
                x,
                rect.top()..=(rect.top() + TICK_LENGTH),
                Stroke::new(1.0, colour),
            );
            painter.text(
                Pos2::new(x, rect.top() + TICK_LENGTH + 2.0),
                Align2::CENTER_TOP,
                tick.year.to_string(),
                FontId::proportional(TICK_LABEL_FONT_SIZE),
                colour,
            );
        }
    }

    /// Move the widget if its background is being dragged.  Drags that start
    /// on one of the controls don't move it.
    fn handle_drag(&mut self, ctx: &Context, background: &Response, parent: Rect) {
        if background.drag_started() {
            if let Some(origin) = ctx.input(|i| i.pointer.press_origin()) {
                let target = self
                    .controls
                    .iter()
                    .find(|(_, rect)| rect.contains(origin))
                    .map(|(target, _)| *target)
                    .unwrap_or(PressTarget::Background);
                self.drag.begin(target, to_point(origin), parent, self.size);
            }
        }

        if background.dragged() {
            if let Some(pointer) = background.interact_pointer_pos() {
                self.drag.drag_to(to_point(pointer), parent, self.size);
            }
        } else if self.drag.is_dragging() {
            // Released, or the drag was interrupted (e.g. the window lost
            // focus)
            self.drag.end();
        }
    }
}

impl CheckForUpdates for TimelineWidget {
    /// Apply any playback ticks
    fn check_for_updates(&mut self) {
        for _ in 0..self.timer.poll_ticks() {
            if !matches!(self.state.playback_tick(), PlaybackStep::Advanced(_)) {
                break;
            }
        }
        self.stop_timer_if_idle();
    }

    fn waiting_for_updates(&self) -> bool {
        self.state.is_playing()
    }
}

impl Draw for TimelineWidget {
    fn draw(&mut self, ctx: &Context, ui: &mut Ui) {
        self.check_for_updates();

        let parent_rect = ui.max_rect();
        let parent = to_rect(parent_rect);
        let top_left = self.drag.placement().top_left(parent, self.size);
        let width = self.width;

        let area = Area::new(self.id)
            .order(Order::Foreground)
            .fixed_pos(to_pos2(top_left))
            .constrain_to(parent_rect)
            .show(ctx, |ui| {
                Frame::popup(ui.style())
                    .inner_margin(Margin::same(FRAME_MARGIN))
                    .show(ui, |ui| {
                        ui.set_width(width);
                        ui.scope_builder(UiBuilder::new().sense(Sense::drag()), |ui| {
                            self.draw_contents(ui)
                        })
                    })
                    .inner
            });
        self.size = Size::new(area.response.rect.width(), area.response.rect.height());

        let contents = area.inner;
        self.controls = contents.inner;
        self.handle_drag(ctx, &contents.response, parent);

        self.sync_timer(ctx);
        self.report_selections();
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

fn to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x, point.y)
}

fn to_rect(rect: egui::Rect) -> Rect {
    Rect::new(to_point(rect.min), Size::new(rect.width(), rect.height()))
}
