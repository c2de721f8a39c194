//! Search outcome codes

use std::fmt;
use serde::{Serialize, Deserialize};

/// Outcome of a catalog search: how many entries matched, whether the name
/// matched exactly or by pattern, and how the requested unit was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindStatus {
    NoMatches,
    OneExactMatchUnitOk,
    OnePatternMatchUnitOk,
    OneExactMatchUnitMismatch,
    OnePatternMatchUnitMismatch,
    MultiExactMatchNoUnit,
    MultiPatternMatchNoUnit,
    MultiExactMatchUnitOk,
    MultiPatternMatchUnitOk,
    MultiExactMatchUnitMismatch,
    MultiPatternMatchUnitMismatch,
}

impl FindStatus {
    /// Status for `count` unit-resolved matches
    pub(crate) fn unit_ok(exact: bool, count: usize) -> Self {
        match (exact, count) {
            (true, 1) => FindStatus::OneExactMatchUnitOk,
            (false, 1) => FindStatus::OnePatternMatchUnitOk,
            (true, _) => FindStatus::MultiExactMatchUnitOk,
            (false, _) => FindStatus::MultiPatternMatchUnitOk,
        }
    }

    /// Status for `count` matches whose unit could not be resolved
    pub(crate) fn unit_mismatch(exact: bool, count: usize) -> Self {
        match (exact, count) {
            (true, 1) => FindStatus::OneExactMatchUnitMismatch,
            (false, 1) => FindStatus::OnePatternMatchUnitMismatch,
            (true, _) => FindStatus::MultiExactMatchUnitMismatch,
            (false, _) => FindStatus::MultiPatternMatchUnitMismatch,
        }
    }

    /// Status for several matches when no unit was requested
    pub(crate) fn multi_no_unit(exact: bool) -> Self {
        if exact {
            FindStatus::MultiExactMatchNoUnit
        } else {
            FindStatus::MultiPatternMatchNoUnit
        }
    }

    /// True iff the search resolved to exactly one unit-compatible value
    pub fn is_unique_unit_ok(&self) -> bool {
        matches!(
            self,
            FindStatus::OneExactMatchUnitOk | FindStatus::OnePatternMatchUnitOk
        )
    }
}

impl fmt::Display for FindStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FindStatus::NoMatches => "no matches",
            FindStatus::OneExactMatchUnitOk => "one exact match with matching unit",
            FindStatus::OnePatternMatchUnitOk => "one pattern match with matching unit",
            FindStatus::OneExactMatchUnitMismatch => "one exact match with unit mismatch",
            FindStatus::OnePatternMatchUnitMismatch => "one pattern match with unit mismatch",
            FindStatus::MultiExactMatchNoUnit => "several exact matches, no unit requested",
            FindStatus::MultiPatternMatchNoUnit => "several pattern matches, no unit requested",
            FindStatus::MultiExactMatchUnitOk => "several exact matches with matching units",
            FindStatus::MultiPatternMatchUnitOk => "several pattern matches with matching units",
            FindStatus::MultiExactMatchUnitMismatch => "several exact matches with unit mismatch",
            FindStatus::MultiPatternMatchUnitMismatch => "several pattern matches with unit mismatch",
        };
        write!(f, "{}", text)
    }
}
