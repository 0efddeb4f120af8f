// SPDX-License-Identifier: MIT

//!
//! Conversions between slider positions (0 to 100) and years
//!

use crate::{AllowedYears, TimelineRange, Year};

/// The slider's minimum position
pub const SLIDER_MIN: f64 = 0.0;

/// The slider's maximum position
pub const SLIDER_MAX: f64 = 100.0;

/// Convert a year to its slider position
pub fn year_to_value(range: TimelineRange, year: Year) -> f64 {
    let offset = (i64::from(year.value()) - i64::from(range.start)) as f64;
    (offset / f64::from(range.width())) * SLIDER_MAX
}

/// Convert a slider position to the (not necessarily allowed) year it points
/// at.  Positions outside the slider's bounds are clamped.
pub fn value_to_year(range: TimelineRange, value: f64) -> i32 {
    let value = value.clamp(SLIDER_MIN, SLIDER_MAX);
    let year = (value / SLIDER_MAX) * f64::from(range.width()) + f64::from(range.start);
    round_half_up(year) as i32
}

/// Find the allowed year closest to the given year, returning its index and
/// value.
///
/// The allowed years are scanned from earliest to latest and a candidate only
/// replaces the current best if it is strictly closer, so on an exact tie the
/// earlier year wins.
pub fn nearest_allowed(allowed: &AllowedYears, year: i32) -> (usize, Year) {
    let mut closest = (0, allowed.first());
    let mut closest_distance = (i64::from(allowed.first().value()) - i64::from(year)).abs();
    for (index, candidate) in allowed.iter().enumerate().skip(1) {
        let distance = (i64::from(candidate.value()) - i64::from(year)).abs();
        if distance < closest_distance {
            closest = (index, candidate);
            closest_distance = distance;
        }
    }
    closest
}

/// Snap a slider position to the closest allowed year
pub fn snap(allowed: &AllowedYears, value: f64) -> (usize, Year) {
    let year = value_to_year(allowed.range(), value);
    nearest_allowed(allowed, year)
}

/// Halves round towards positive infinity (so -2.5 becomes -2, 2.5 becomes 3)
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod test {
    use super::*;

    fn years(years: &[i32]) -> AllowedYears {
        AllowedYears::new(years.to_vec()).unwrap()
    }

    #[test]
    fn test_year_to_value() {
        let allowed = years(&[2000, 2005, 2010]);
        let range = allowed.range();
        assert_eq!(year_to_value(range, Year::from(1999)), 0.0);
        assert_eq!(year_to_value(range, Year::from(2011)), 100.0);
        assert_eq!(year_to_value(range, Year::from(2005)), 50.0);
    }

    #[test]
    fn test_value_to_year() {
        let range = years(&[2000, 2005, 2010]).range();
        assert_eq!(value_to_year(range, 0.0), 1999);
        assert_eq!(value_to_year(range, 100.0), 2011);
        assert_eq!(value_to_year(range, -20.0), 1999);
        assert_eq!(value_to_year(range, 250.0), 2011);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn snaps_2006_to_2005() {
        let allowed = years(&[2000, 2005, 2010]);
        let value = year_to_value(allowed.range(), Year::from(2006));
        assert_eq!(value_to_year(allowed.range(), value), 2006);
        assert_eq!(snap(&allowed, value), (1, Year::from(2005)));
    }

    #[test]
    fn ties_go_to_the_earlier_year() {
        let allowed = years(&[2000, 2004, 2008]);
        assert_eq!(nearest_allowed(&allowed, 2002), (0, Year::from(2000)));
        assert_eq!(nearest_allowed(&allowed, 2006), (1, Year::from(2004)));
        assert_eq!(nearest_allowed(&allowed, 2007), (2, Year::from(2008)));
    }

    #[test]
    fn snap_is_always_the_nearest_allowed_year() {
        let allowed = years(&[-40, -3, 0, 7, 8, 30, 31, 90]);
        let range = allowed.range();
        for step in 0..=1000 {
            let value = f64::from(step) / 10.0;
            let (index, snapped) = snap(&allowed, value);
            assert_eq!(allowed.get(index), Some(snapped));

            let implied = value_to_year(range, value);
            let distance = (snapped.value() - implied).abs();
            for (other_index, other) in allowed.iter().enumerate() {
                let other_distance = (other.value() - implied).abs();
                assert!(distance <= other_distance);
                if other_distance == distance {
                    assert!(index <= other_index);
                }
            }
        }
    }

    #[test]
    fn the_widest_range_snaps_without_overflowing() {
        let allowed = years(&[crate::MIN_YEAR, 0, crate::MAX_YEAR]);
        assert_eq!(snap(&allowed, SLIDER_MIN), (0, Year::from(crate::MIN_YEAR)));
        assert_eq!(snap(&allowed, 50.0), (1, Year::from(0)));
        assert_eq!(snap(&allowed, SLIDER_MAX), (2, Year::from(crate::MAX_YEAR)));
        assert_eq!(year_to_value(allowed.range(), Year::from(0)), 50.0);
    }

    #[test]
    fn allowed_years_survive_a_round_trip() {
        for allowed in [
            years(&[2000, 2005, 2010]),
            years(&[1]),
            years(&[-1000, -999, 0, 1, 2, 3, 1500, 2024]),
        ] {
            for (index, year) in allowed.iter().enumerate() {
                let value = year_to_value(allowed.range(), year);
                assert_eq!(snap(&allowed, value), (index, year));
            }
        }
    }
}
