//! Filter on an inclusive release-year range.

use crate::traits::Filter;
use data_loader::Title;

/// Keeps titles released within `[min, max]`, both ends inclusive.
///
/// A range with `min > max` keeps nothing.
pub struct ReleaseYearFilter {
    min: i32,
    max: i32,
}

impl ReleaseYearFilter {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn matches(&self, title: &Title) -> bool {
        (self.min..=self.max).contains(&title.release_year)
    }
}
