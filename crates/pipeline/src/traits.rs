//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a catalog.

use data_loader::Title;

/// A single row predicate.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with parallel code
/// - Filters only look at one title at a time and never mutate it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `title` passes this filter
    fn matches(&self, title: &Title) -> bool;
}
