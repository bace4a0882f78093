//! Filter on content rating.

use crate::traits::Filter;
use data_loader::Title;
use std::collections::BTreeSet;

/// Keeps titles whose rating is in the allowed set.
///
/// Matching is exact; an empty set keeps nothing.
pub struct RatingFilter {
    allowed: BTreeSet<String>,
}

impl RatingFilter {
    pub fn new<S: Into<String>>(allowed: impl IntoIterator<Item = S>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn matches(&self, title: &Title) -> bool {
        self.allowed.contains(&title.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TitleBuilder;

    #[test]
    fn test_rating_filter() {
        let pg = TitleBuilder::movie().rating("PG").build();
        let mature = TitleBuilder::show().rating("TV-MA").build();

        let filter = RatingFilter::new(["PG", "PG-13"]);
        assert!(filter.matches(&pg));
        assert!(!filter.matches(&mature));
    }

    #[test]
    fn test_rating_match_is_exact() {
        let filter = RatingFilter::new(["pg"]);
        assert!(!filter.matches(&TitleBuilder::movie().rating("PG").build()));
        assert!(!RatingFilter::new(Vec::<String>::new()).matches(&TitleBuilder::movie().build()));
    }
}
