// SPDX-License-Identifier: MIT

//!
//! What the user has selected
//!

use crate::{AllowedYears, Year};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt::Display;

/// The value reported in place of a year when every year is selected
pub const ALL_YEARS_SENTINEL: &str = "all years";

/// The user's selection, as reported to whoever is hosting the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// A single allowed year
    Year(Year),

    /// Every allowed year
    AllYears,
}

impl Selection {
    /// The concrete years covered by the selection
    pub fn years(&self, allowed: &AllowedYears) -> Vec<Year> {
        match self {
            Selection::Year(year) => vec![*year],
            Selection::AllYears => allowed.iter().collect(),
        }
    }

    pub fn is_all_years(&self) -> bool {
        matches!(self, Selection::AllYears)
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Year(year) => write!(f, "{year}"),
            Selection::AllYears => write!(f, "{ALL_YEARS_SENTINEL}"),
        }
    }
}

/// Hosts receive a list of 1: either `[2005]` or `["all years"]`
impl Serialize for Selection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(1))?;
        match self {
            Selection::Year(year) => seq.serialize_element(year)?,
            Selection::AllYears => seq.serialize_element(ALL_YEARS_SENTINEL)?,
        }
        seq.end()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize() {
        let json = serde_json::to_string(&Selection::Year(Year::from(2005))).unwrap();
        assert_eq!(json, "[2005]");
        let json = serde_json::to_string(&Selection::AllYears).unwrap();
        assert_eq!(json, r#"["all years"]"#);
    }

    #[test]
    fn years() {
        let allowed = AllowedYears::new(vec![2000, 2005, 2010]).unwrap();
        assert_eq!(
            Selection::Year(Year::from(2010)).years(&allowed),
            vec![Year::from(2010)]
        );
        assert_eq!(Selection::AllYears.years(&allowed).len(), 3);
    }

    #[test]
    fn is_all_years() {
        assert!(Selection::AllYears.is_all_years());
        assert!(!Selection::Year(Year::from(2005)).is_all_years());
    }
}
