//! Filter engine and aggregators for the catalog dashboard.
//!
//! This crate provides:
//! - Filter trait and implementations for the three dashboard widgets
//! - FilterPipeline / FilterCriteria for composing them
//! - Aggregators turning a filtered catalog into chart-ready summaries
//! - Dashboard, which runs every aggregator for one filtered catalog
//!
//! ## Architecture
//! Every filter change re-runs the whole flow:
//! 1. Filters produce a new catalog from the cached source catalog
//! 2. An empty result short-circuits to `DashboardView::NoData`
//! 3. Otherwise every aggregator summarizes the filtered catalog
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Dashboard, DashboardConfig, FilterCriteria};
//!
//! let criteria = FilterCriteria::everything(&catalog).with_year_min(2015);
//! let filtered = criteria.apply(&catalog);
//! let view = Dashboard::compute(&filtered, &DashboardConfig::default());
//! ```

pub mod aggregators;
pub mod config;
pub mod dashboard;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardView};
pub use filter_pipeline::{filter, FilterCriteria, FilterPipeline};
pub use traits::Filter;
