//! Composition of every aggregator into one dashboard snapshot.

use crate::aggregators::*;
use crate::config::DashboardConfig;
use data_loader::Catalog;
use serde::Serialize;
use tracing::{debug, instrument};

/// Every panel computed for one filtered catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub metrics: SummaryMetrics,
    pub counts_by_year: Vec<YearCount>,
    pub top_genres: Vec<LabelCount>,
    pub type_split: Vec<TypeCount>,
    pub top_directors: Vec<LabelCount>,
    pub top_actors: Vec<LabelCount>,
    pub top_countries: Vec<LabelCount>,
    pub rating_distribution: Vec<LabelCount>,
    pub movie_durations: Histogram,
    pub tv_seasons: Vec<SeasonCount>,
    pub monthly_additions: Vec<MonthCount>,
    pub year_month_heatmap: Heatmap,
    pub genre_rating_breakdown: GenreRatingTree,
    pub genre_rating_stacked: StackedCounts,
    pub runtime_by_genre: Vec<BoxStats>,
}

/// What the presentation layer should show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "panels", rename_all = "snake_case")]
pub enum DashboardView {
    /// The filtered catalog is empty; show a single notice instead of panels
    NoData,
    Panels(Box<Dashboard>),
}

impl DashboardView {
    pub fn is_no_data(&self) -> bool {
        matches!(self, DashboardView::NoData)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            DashboardView::NoData => None,
            DashboardView::Panels(dashboard) => Some(dashboard.as_ref()),
        }
    }
}

impl Dashboard {
    /// Compute every panel for `catalog`.
    ///
    /// An empty catalog short-circuits to `DashboardView::NoData` without
    /// running any aggregator. Otherwise the aggregators run in parallel
    /// on Rayon's pool; they only share immutable borrows of the catalog.
    #[instrument(skip_all, fields(titles = catalog.len()))]
    pub fn compute(catalog: &Catalog, config: &DashboardConfig) -> DashboardView {
        if catalog.is_empty() {
            debug!("No titles match the current filters");
            return DashboardView::NoData;
        }

        let n = config.top_n;
        let excluded = config.excluded_country.as_deref();

        let (
            ((metrics, counts_by_year), (type_split, rating_distribution)),
            ((top_genres, top_directors), (top_actors, top_countries)),
        ) = rayon::join(
            || {
                rayon::join(
                    || (summary_metrics(catalog), counts_by_year(catalog)),
                    || (type_split(catalog), rating_distribution(catalog)),
                )
            },
            || {
                rayon::join(
                    || (top_genres(catalog, n), top_directors(catalog, n)),
                    || (top_actors(catalog, n), top_countries(catalog, n, excluded)),
                )
            },
        );

        let (
            ((movie_durations, tv_seasons), runtime_by_genre),
            ((monthly_additions, year_month_heatmap), (genre_rating_breakdown, genre_rating_stacked)),
        ) = rayon::join(
            || {
                rayon::join(
                    || {
                        (
                            movie_duration_histogram(catalog, config.histogram_bins),
                            tv_seasons_distribution(catalog),
                        )
                    },
                    || runtime_by_genre(catalog, n),
                )
            },
            || {
                rayon::join(
                    || (monthly_additions(catalog), year_month_heatmap(catalog)),
                    || (genre_rating_breakdown(catalog, n), genre_rating_stacked(catalog, n)),
                )
            },
        );

        debug!("Computed dashboard for {} titles", metrics.total_titles);

        DashboardView::Panels(Box::new(Dashboard {
            metrics,
            counts_by_year,
            top_genres,
            type_split,
            top_directors,
            top_actors,
            top_countries,
            rating_distribution,
            movie_durations,
            tv_seasons,
            monthly_additions,
            year_month_heatmap,
            genre_rating_breakdown,
            genre_rating_stacked,
            runtime_by_genre,
        }))
    }
}
