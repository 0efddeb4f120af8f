// SPDX-License-Identifier: MIT

//!
//! Tick marks along the timeline's track
//!

use crate::{TimelineRange, Year};
use serde::{Deserialize, Serialize};

/// Parameters controlling tick layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickParams {
    /// Roughly how many gaps the range is split into
    pub divisions: u32,

    /// The range is stretched by this factor when positioning ticks, leaving
    /// some room at the end of the track for the last label
    pub padding_factor: f32,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            divisions: 5,
            padding_factor: 1.05,
        }
    }
}

/// The smallest usable padding factor (no padding)
pub const MIN_PADDING_FACTOR: f32 = 1.0;

/// The largest usable padding factor
pub const MAX_PADDING_FACTOR: f32 = 2.0;

impl TickParams {
    /// The same parameters with the padding factor clamped to
    /// [`MIN_PADDING_FACTOR`, `MAX_PADDING_FACTOR`] (`NaN` becomes the minimum)
    pub fn clamped(self) -> Self {
        Self {
            divisions: self.divisions,
            padding_factor: self
                .padding_factor
                .max(MIN_PADDING_FACTOR)
                .min(MAX_PADDING_FACTOR),
        }
    }
}

/// A single tick mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub year: Year,

    /// Distance (in pixels) from the start of the track
    pub offset: f32,
}

/// All tick marks for a track of a given width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickLayout {
    pub ticks: Vec<Tick>,
}

/// The number of years between ticks (at least 1)
pub fn tick_spacing(range: TimelineRange, divisions: u32) -> i32 {
    let divisions = divisions.max(1);
    let spacing = (f64::from(range.width()) / f64::from(divisions)).round() as i32;
    spacing.max(1)
}

/// The years at which there are ticks, from the start of the range up to (and
/// possibly including) the end
pub fn tick_years(range: TimelineRange, params: TickParams) -> Vec<Year> {
    let spacing = tick_spacing(range, params.divisions);
    (range.start..=range.end)
        .step_by(spacing as usize)
        .map(Year::from)
        .collect()
}

impl TickLayout {
    /// Lay out the ticks for a track that's `track_width` pixels wide
    pub fn compute(range: TimelineRange, params: TickParams, track_width: f32) -> Self {
        let params = params.clamped();
        let padded_width = range.width() as f32 * params.padding_factor;
        let ticks = tick_years(range, params)
            .into_iter()
            .map(|year| Tick {
                year,
                offset: ((year.value() - range.start) as f32 / padded_width) * track_width,
            })
            .collect();
        TickLayout { ticks }
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::AllowedYears;

    fn range(years: &[i32]) -> TimelineRange {
        AllowedYears::new(years.to_vec()).unwrap().range()
    }

    #[test]
    fn test_tick_spacing() {
        // 12 / 5 = 2.4
        assert_eq!(tick_spacing(range(&[2000, 2005, 2010]), 5), 2);

        // 102 / 5 = 20.4
        assert_eq!(tick_spacing(range(&[1900, 2000]), 5), 20);

        // 2 / 5 = 0.4, which would never terminate
        assert_eq!(tick_spacing(range(&[2000]), 5), 1);
        assert_eq!(tick_spacing(range(&[2000]), 0), 2);
    }

    #[test]
    fn test_tick_years() {
        let years: Vec<i32> = tick_years(range(&[2000, 2005, 2010]), TickParams::default())
            .iter()
            .map(|year| year.value())
            .collect();
        assert_eq!(years, vec![1999, 2001, 2003, 2005, 2007, 2009, 2011]);

        let years: Vec<i32> = tick_years(range(&[2000]), TickParams::default())
            .iter()
            .map(|year| year.value())
            .collect();
        assert_eq!(years, vec![1999, 2000, 2001]);
    }

    #[test]
    fn offsets() {
        let layout = TickLayout::compute(range(&[1900, 2000]), TickParams::default(), 428.4);
        assert_eq!(layout.ticks[0].offset, 0.0);
        assert!(layout.ticks.iter().all(|tick| tick.offset < 428.4));

        // 1899 -> 2001 is 102 years, padded to 107.1, so 20 years is 80px
        assert!((layout.ticks[1].offset - 80.0).abs() < 0.01);

        // Nothing to measure against yet
        let layout = TickLayout::compute(range(&[1900, 2000]), TickParams::default(), 0.0);
        assert!(layout.ticks.iter().all(|tick| tick.offset == 0.0));
    }

    #[test]
    fn unusable_padding_still_gives_finite_offsets() {
        for padding_factor in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let params = TickParams {
                divisions: 5,
                padding_factor,
            };
            let layout = TickLayout::compute(range(&[1900, 2000]), params, 400.0);
            assert!(!layout.is_empty());
            assert!(
                layout
                    .ticks
                    .iter()
                    .all(|tick| tick.offset.is_finite() && (0.0..=400.0).contains(&tick.offset))
            );
        }
        assert_eq!(
            TickParams {
                divisions: 5,
                padding_factor: 0.0
            }
            .clamped()
            .padding_factor,
            MIN_PADDING_FACTOR
        );
    }
}
