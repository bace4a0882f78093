//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern, and `FilterCriteria`, the three
//! dashboard widgets (type, rating, year range) expressed as a pipeline.

use crate::filters::{ContentTypeFilter, RatingFilter, ReleaseYearFilter};
use crate::traits::Filter;
use anyhow::{Result, anyhow};
use data_loader::{Catalog, ContentType, Title};
use serde::Serialize;
use std::collections::BTreeSet;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ContentTypeFilter::new([ContentType::Movie]))
///     .add_filter(ReleaseYearFilter::new(2000, 2010));
///
/// let filtered = pipeline.apply(&catalog);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether `title` passes every filter
    pub fn matches(&self, title: &Title) -> bool {
        self.filters.iter().all(|f| f.matches(title))
    }

    /// Apply all filters in sequence and return a new catalog.
    ///
    /// ## Algorithm
    /// 1. Start with every title of the source catalog
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain matching titles
    ///    c. Log output count
    /// 3. Copy the survivors into an owned catalog
    ///
    /// The source catalog is never modified.
    pub fn apply(&self, catalog: &Catalog) -> Catalog {
        let mut current: Vec<&Title> = catalog.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|title| filter.matches(title));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current.into_iter().cloned().collect()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Dashboard filter selection
// =============================================================================

/// The selection made in the three filter widgets.
///
/// Empty `types` or `ratings` select nothing. Year bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FilterCriteria {
    pub types: BTreeSet<ContentType>,
    pub ratings: BTreeSet<String>,
    pub year_min: i32,
    pub year_max: i32,
}

impl FilterCriteria {
    pub fn new(
        types: impl IntoIterator<Item = ContentType>,
        ratings: impl IntoIterator<Item = String>,
        year_min: i32,
        year_max: i32,
    ) -> Self {
        Self {
            types: types.into_iter().collect(),
            ratings: ratings.into_iter().collect(),
            year_min,
            year_max,
        }
    }

    /// Every type, every rating and the full year range of `catalog`,
    /// i.e. the initial state of the widgets.
    pub fn everything(catalog: &Catalog) -> Self {
        let (year_min, year_max) = catalog.year_bounds().unwrap_or((0, 0));
        Self {
            types: catalog.kinds().into_iter().collect(),
            ratings: catalog.ratings(),
            year_min,
            year_max,
        }
    }

    /// Replace the type selection from user-supplied labels
    /// ("Movie", "TV Show", ...).
    pub fn with_type_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Result<Self> {
        self.types = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                ContentType::parse(label).ok_or_else(|| anyhow!("Unknown content type '{label}'"))
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = String>) -> Self {
        self.ratings = ratings.into_iter().collect();
        self
    }

    pub fn with_year_min(mut self, year_min: i32) -> Self {
        self.year_min = year_min;
        self
    }

    pub fn with_year_max(mut self, year_max: i32) -> Self {
        self.year_max = year_max;
        self
    }

    /// The selection as a filter pipeline
    pub fn pipeline(&self) -> FilterPipeline {
        FilterPipeline::new()
            .add_filter(ContentTypeFilter::new(self.types.iter().copied()))
            .add_filter(RatingFilter::new(self.ratings.iter().cloned()))
            .add_filter(ReleaseYearFilter::new(self.year_min, self.year_max))
    }

    /// Filter `catalog` by this selection
    pub fn apply(&self, catalog: &Catalog) -> Catalog {
        self.pipeline().apply(catalog)
    }
}

/// Keep titles whose type is in `type_set`, rating is in `rating_set` and
/// release year is within `[year_min, year_max]`.
pub fn filter(
    catalog: &Catalog,
    type_set: &BTreeSet<ContentType>,
    rating_set: &BTreeSet<String>,
    year_min: i32,
    year_max: i32,
) -> Catalog {
    FilterCriteria {
        types: type_set.clone(),
        ratings: rating_set.clone(),
        year_min,
        year_max,
    }
    .apply(catalog)
}
