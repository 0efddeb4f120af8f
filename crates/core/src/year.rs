// SPDX-License-Identifier: MIT

//!
//! Years and the set of years a user is allowed to pick from
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise when building an [`AllowedYears`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllowedYearsError {
    /// There must be at least 1 allowed year
    #[error("At least 1 allowed year is required")]
    Empty,

    /// The years must be given in ascending order
    #[error("Years must be ascending (`{previous}` is followed by `{next}`)")]
    NotAscending { previous: i32, next: i32 },

    /// Each year may only appear once
    #[error("Year `{0}` appears more than once")]
    Duplicate(i32),

    /// Years must lie within [`MIN_YEAR`, `MAX_YEAR`]
    #[error(
        "Year `{0}` is outside the supported range ({min} to {max})",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    OutOfRange(i32),
}

/// The earliest year that can be allowed
pub const MIN_YEAR: i32 = -1_000_000_000;

/// The latest year that can be allowed
pub const MAX_YEAR: i32 = 1_000_000_000;

/// A calendar year
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Year(value)
    }
}

/// The timeline's bounds: 1 year either side of the allowed years.  These are
/// only used for slider and tick arithmetic, they are never selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineRange {
    pub start: i32,
    pub end: i32,
}

impl TimelineRange {
    /// The number of years between the start and the end (always >= 2, and
    /// never more than `MAX_YEAR - MIN_YEAR + 2`)
    pub fn width(&self) -> i32 {
        self.end - self.start
    }
}

/// The (non-empty, strictly ascending) years that can be selected.
///
/// If an `AllowedYears` has been constructed it is guaranteed to be valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllowedYears(Vec<Year>);

impl AllowedYears {
    /// Create a new [`AllowedYears`] if the given years are valid
    pub fn new(years: Vec<i32>) -> Result<Self, AllowedYearsError> {
        if years.is_empty() {
            return Err(AllowedYearsError::Empty);
        }
        if let Some(&year) = years.iter().find(|&&year| !(MIN_YEAR..=MAX_YEAR).contains(&year)) {
            return Err(AllowedYearsError::OutOfRange(year));
        }
        for pair in years.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if previous == next {
                return Err(AllowedYearsError::Duplicate(next));
            }
            if previous > next {
                return Err(AllowedYearsError::NotAscending { previous, next });
            }
        }
        Ok(AllowedYears(years.into_iter().map(Year).collect()))
    }

    pub fn first(&self) -> Year {
        self.0[0]
    }

    pub fn last(&self) -> Year {
        self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true (kept for API completeness alongside `len()`)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether only a single year is allowed (in which case there is nothing
    /// to step between)
    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }

    /// The index of the last allowed year
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<Year> {
        self.0.get(index).copied()
    }

    pub fn index_of(&self, year: Year) -> Option<usize> {
        self.0.binary_search(&year).ok()
    }

    pub fn contains(&self, year: Year) -> bool {
        self.index_of(year).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Year> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Year] {
        &self.0
    }

    /// Get the timeline's bounds
    pub fn range(&self) -> TimelineRange {
        TimelineRange {
            start: self.first().value() - 1,
            end: self.last().value() + 1,
        }
    }
}

impl TryFrom<Vec<i32>> for AllowedYears {
    type Error = AllowedYearsError;
    fn try_from(years: Vec<i32>) -> Result<Self, Self::Error> {
        AllowedYears::new(years)
    }
}

impl<'de> Deserialize<'de> for AllowedYears {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let years = Vec::<i32>::deserialize(deserializer)?;
        AllowedYears::new(years).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new() {
        // Should return error
        assert_eq!(AllowedYears::new(vec![]), Err(AllowedYearsError::Empty));
        assert_eq!(
            AllowedYears::new(vec![2000, 2010, 2005]),
            Err(AllowedYearsError::NotAscending {
                previous: 2010,
                next: 2005
            })
        );
        assert_eq!(
            AllowedYears::new(vec![2000, 2000]),
            Err(AllowedYearsError::Duplicate(2000))
        );

        // Should be ok
        assert!(AllowedYears::new(vec![-500]).is_ok());
        assert!(AllowedYears::new(vec![2000, 2005, 2010]).is_ok());
    }

    #[test]
    fn range() {
        let years = AllowedYears::new(vec![2000, 2005, 2010]).unwrap();
        assert_eq!(
            years.range(),
            TimelineRange {
                start: 1999,
                end: 2011
            }
        );
        assert_eq!(years.range().width(), 12);

        // A single year still gives a range 2 years wide
        let years = AllowedYears::new(vec![1066]).unwrap();
        assert_eq!(years.range().width(), 2);
        assert!(years.is_single());
    }

    #[test]
    fn years_at_the_limits() {
        for year in [i32::MIN, MIN_YEAR - 1, MAX_YEAR + 1, i32::MAX] {
            assert_eq!(
                AllowedYears::new(vec![year]),
                Err(AllowedYearsError::OutOfRange(year))
            );
        }
        assert_eq!(
            AllowedYears::new(vec![0, 2000, i32::MAX]),
            Err(AllowedYearsError::OutOfRange(i32::MAX))
        );

        // The widest allowed range doesn't overflow
        let years = AllowedYears::new(vec![MIN_YEAR, MAX_YEAR]).unwrap();
        let range = years.range();
        assert_eq!(range.start, MIN_YEAR - 1);
        assert_eq!(range.end, MAX_YEAR + 1);
        assert_eq!(range.width(), 2_000_000_002);
    }

    #[test]
    fn index_of() {
        let years = AllowedYears::new(vec![2000, 2005, 2010]).unwrap();
        assert_eq!(years.index_of(Year::from(2005)), Some(1));
        assert_eq!(years.index_of(Year::from(2006)), None);
        assert_eq!(years.last_index(), 2);
    }

    #[test]
    fn deserialize() {
        let years: AllowedYears = serde_json::from_str("[1990, 1995]").unwrap();
        assert_eq!(years.first(), Year::from(1990));
        assert!(serde_json::from_str::<AllowedYears>("[]").is_err());
        assert!(serde_json::from_str::<AllowedYears>("[1995, 1990]").is_err());
    }
}
