//! Aggregators: pure functions from a (filtered) catalog to a summary.
//!
//! None of them mutate anything, so they can run in any order or in
//! parallel. Each one returns an empty summary for an empty catalog.

pub mod calendar;
pub mod counts;
pub mod durations;
pub mod genre_rating;
pub mod summaries;
pub mod top_n;

pub use calendar::{monthly_additions, year_month_heatmap};
pub use counts::{counts_by_year, rating_distribution, summary_metrics, type_split};
pub use durations::{movie_duration_histogram, runtime_by_genre, tv_seasons_distribution};
pub use genre_rating::{genre_rating_breakdown, genre_rating_stacked};
pub use summaries::*;
pub use top_n::{top_actors, top_countries, top_directors, top_genres};
