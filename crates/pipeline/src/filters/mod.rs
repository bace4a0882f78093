//! Filter implementations for the catalog pipeline.
//!
//! One filter per dashboard widget; they are composed into a
//! FilterPipeline by `FilterCriteria`.

pub mod content_type;
pub mod rating;
pub mod release_year;

// Re-export for convenience
pub use content_type::ContentTypeFilter;
pub use rating::RatingFilter;
pub use release_year::ReleaseYearFilter;
