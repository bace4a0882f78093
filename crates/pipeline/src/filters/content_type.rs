//! Filter on movie / TV show.

use crate::traits::Filter;
use data_loader::{ContentType, Title};
use std::collections::BTreeSet;

/// Keeps titles whose type is in the allowed set.
///
/// An empty set keeps nothing.
pub struct ContentTypeFilter {
    allowed: BTreeSet<ContentType>,
}

impl ContentTypeFilter {
    pub fn new(allowed: impl IntoIterator<Item = ContentType>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl Filter for ContentTypeFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn matches(&self, title: &Title) -> bool {
        self.allowed.contains(&title.kind)
    }
}
