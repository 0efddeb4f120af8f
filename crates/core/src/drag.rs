// SPDX-License-Identifier: MIT

//!
//! Where the timeline sits within its parent, and moving it by dragging
//!

use serde::Serialize;
use std::ops::{Add, Sub};

/// The default distance between the timeline and its parent's bottom right
/// corner
pub const DEFAULT_ANCHOR_MARGIN: f32 = 10.0;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }
}

/// An axis aligned rectangle (top left corner and size)
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub min: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(min: Point, size: Size) -> Self {
        Rect { min, size }
    }

    pub fn max(&self) -> Point {
        Point::new(self.min.x + self.size.width, self.min.y + self.size.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        let max = self.max();
        (self.min.x..=max.x).contains(&point.x) && (self.min.y..=max.y).contains(&point.y)
    }

    /// Whether `other` lies entirely within this rectangle
    pub fn contains_rect(&self, other: Rect) -> bool {
        self.contains(other.min) && self.contains(other.max())
    }
}

/// How the timeline is positioned within its parent
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub enum Placement {
    /// A fixed distance from the parent's bottom right corner (follows the
    /// parent as it's resized)
    Anchored { right: f32, bottom: f32 },

    /// A fixed distance from the parent's top left corner
    Free { left: f32, top: f32 },
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Anchored {
            right: DEFAULT_ANCHOR_MARGIN,
            bottom: DEFAULT_ANCHOR_MARGIN,
        }
    }
}

impl Placement {
    /// The (absolute) position of the widget's top left corner
    pub fn top_left(&self, parent: Rect, widget: Size) -> Point {
        match *self {
            Placement::Anchored { right, bottom } => {
                let max = parent.max();
                Point::new(max.x - right - widget.width, max.y - bottom - widget.height)
            }
            Placement::Free { left, top } => parent.min + Point::new(left, top),
        }
    }
}

/// What was under the pointer when it was pressed.  Only presses on the
/// widget's background start a drag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PressTarget {
    Background,
    Checkbox,
    Slider,
    Button,
}

/// An in-progress drag
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragGesture {
    /// Where the pointer was pressed, relative to the widget's top left corner
    pointer_offset: Point,
}

/// The widget's placement, plus the drag gesture (if one is happening)
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct WidgetDrag {
    placement: Placement,
    gesture: Option<DragGesture>,
}

impl WidgetDrag {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            gesture: None,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Start a drag (if the press was on the background).  The widget's
    /// anchored position is converted to a free position at the same place so
    /// that it can be moved.
    pub fn begin(
        &mut self,
        target: PressTarget,
        pointer: Point,
        parent: Rect,
        widget: Size,
    ) -> bool {
        if target != PressTarget::Background {
            trace!("Ignoring press on {target:?}");
            return false;
        }
        let top_left = self.placement.top_left(parent, widget);
        let relative = top_left - parent.min;
        self.placement = Placement::Free {
            left: relative.x,
            top: relative.y,
        };
        self.gesture = Some(DragGesture {
            pointer_offset: pointer - top_left,
        });
        debug!("Drag started at ({:.0}, {:.0})", relative.x, relative.y);
        true
    }

    /// Follow the pointer, keeping the widget inside its parent
    pub fn drag_to(&mut self, pointer: Point, parent: Rect, widget: Size) {
        let Some(gesture) = self.gesture else {
            return;
        };
        let wanted = pointer - parent.min - gesture.pointer_offset;
        self.placement = Placement::Free {
            left: clamp_axis(wanted.x, parent.size.width - widget.width),
            top: clamp_axis(wanted.y, parent.size.height - widget.height),
        };
    }

    /// Finish the drag
    pub fn end(&mut self) {
        if self.gesture.take().is_some() {
            debug!("Drag finished at {:?}", self.placement);
        }
    }
}

/// Clamp to `0..=max`.  If the widget doesn't fit (`max` < 0) it's pinned to 0.
fn clamp_axis(value: f32, max: f32) -> f32 {
    value.min(max).max(0.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn parent() -> Rect {
        Rect::new(Point::new(50.0, 20.0), Size::new(800.0, 600.0))
    }

    fn widget() -> Size {
        Size::new(384.0, 130.0)
    }

    #[test]
    fn anchored_top_left() {
        let top_left = Placement::default().top_left(parent(), widget());
        assert_eq!(top_left, Point::new(850.0 - 10.0 - 384.0, 620.0 - 10.0 - 130.0));
    }

    #[test]
    fn begin_keeps_the_widget_where_it_was() {
        let mut drag = WidgetDrag::default();
        let before = drag.placement().top_left(parent(), widget());
        assert!(drag.begin(
            PressTarget::Background,
            before + Point::new(5.0, 5.0),
            parent(),
            widget()
        ));
        assert!(drag.is_dragging());
        assert!(matches!(drag.placement(), Placement::Free { .. }));
        assert_eq!(drag.placement().top_left(parent(), widget()), before);
    }

    #[test]
    fn presses_on_controls_are_ignored() {
        let mut drag = WidgetDrag::default();
        for target in [PressTarget::Checkbox, PressTarget::Slider, PressTarget::Button] {
            assert!(!drag.begin(target, Point::new(500.0, 500.0), parent(), widget()));
            assert!(!drag.is_dragging());
            assert_eq!(drag.placement(), Placement::default());
        }

        // Without a gesture, moving the pointer does nothing
        drag.drag_to(Point::new(0.0, 0.0), parent(), widget());
        assert_eq!(drag.placement(), Placement::default());
    }

    #[test]
    fn drag_follows_the_pointer() {
        let mut drag = WidgetDrag::new(Placement::Free {
            left: 100.0,
            top: 100.0,
        });
        let pointer = Point::new(160.0, 130.0);
        drag.begin(PressTarget::Background, pointer, parent(), widget());
        drag.drag_to(Point::new(170.0, 150.0), parent(), widget());
        assert_eq!(
            drag.placement(),
            Placement::Free {
                left: 110.0,
                top: 120.0
            }
        );
        drag.end();
        assert!(!drag.is_dragging());

        // Released, so further movement is ignored
        drag.drag_to(Point::new(400.0, 400.0), parent(), widget());
        assert_eq!(
            drag.placement(),
            Placement::Free {
                left: 110.0,
                top: 120.0
            }
        );
    }

    #[test]
    fn drag_never_leaves_the_parent() {
        let mut rng = StdRng::seed_from_u64(1917);
        for _ in 0..200 {
            let start = Placement::Free {
                left: rng.gen_range(0.0..416.0),
                top: rng.gen_range(0.0..470.0),
            };
            let mut drag = WidgetDrag::new(start);
            let press = start.top_left(parent(), widget()) + Point::new(10.0, 10.0);
            drag.begin(PressTarget::Background, press, parent(), widget());
            for _ in 0..50 {
                let pointer = Point::new(
                    rng.gen_range(-2000.0..2000.0),
                    rng.gen_range(-2000.0..2000.0),
                );
                drag.drag_to(pointer, parent(), widget());
                let top_left = drag.placement().top_left(parent(), widget());
                assert!(parent().contains_rect(Rect::new(top_left, widget())));
            }
            drag.end();
        }
    }

    #[test]
    fn too_big_to_fit_is_pinned_to_the_top_left() {
        let mut drag = WidgetDrag::new(Placement::Free { left: 0.0, top: 0.0 });
        let small_parent = Rect::new(Point::new(0.0, 0.0), Size::new(200.0, 100.0));
        let pointer = Point::new(1.0, 1.0);
        drag.begin(PressTarget::Background, pointer, small_parent, widget());
        drag.drag_to(Point::new(150.0, 90.0), small_parent, widget());
        assert_eq!(drag.placement(), Placement::Free { left: 0.0, top: 0.0 });
    }
}
