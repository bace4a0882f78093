//! # Data Loader Crate
//!
//! Loads a video-on-demand title catalog from a CSV export and cleans it
//! into typed, immutable records.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Title, ContentType, Catalog, LoadReport)
//! - **parser**: Parse and clean CSV rows into `Title`s
//! - **loader**: Read a catalog file from disk
//! - **cache**: Load each path at most once per process
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::CatalogCache;
//! use std::path::Path;
//!
//! let cache = CatalogCache::new();
//! let outcome = cache.load(Path::new("netflix_titles.csv"));
//! if let Some(problem) = &outcome.problem {
//!     eprintln!("Error: {problem}");
//! }
//! println!("{} titles", outcome.catalog.len());
//! ```

// Public modules
pub mod cache;
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use cache::{CatalogCache, LoadOutcome};
pub use error::{DataLoadError, Result};
pub use types::{month_name, Catalog, ContentType, LoadReport, Title, MONTH_NAMES, UNKNOWN};
