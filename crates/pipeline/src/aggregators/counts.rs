//! Plain group-by counts over single-valued columns.

use super::summaries::{LabelCount, SummaryMetrics, TypeCount, YearCount};
use super::top_n::rank_counts;
use data_loader::{Catalog, ContentType};
use std::collections::BTreeMap;

/// Total titles, movies and TV shows
pub fn summary_metrics(catalog: &Catalog) -> SummaryMetrics {
    let movies = catalog.iter().filter(|t| t.is_movie()).count();
    let tv_shows = catalog.iter().filter(|t| t.is_tv_show()).count();
    SummaryMetrics {
        total_titles: catalog.len(),
        movies,
        tv_shows,
    }
}

/// Titles per release year, ascending by year
pub fn counts_by_year(catalog: &Catalog) -> Vec<YearCount> {
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    for title in catalog {
        *by_year.entry(title.release_year).or_insert(0) += 1;
    }
    by_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Titles per content type, most common first; absent types are omitted
pub fn type_split(catalog: &Catalog) -> Vec<TypeCount> {
    let mut split: Vec<TypeCount> = ContentType::ALL
        .iter()
        .map(|&kind| TypeCount {
            kind,
            count: catalog.iter().filter(|t| t.kind == kind).count(),
        })
        .filter(|tc| tc.count > 0)
        .collect();
    split.sort_by(|a, b| b.count.cmp(&a.count));
    split
}

/// Titles per rating, most common first
pub fn rating_distribution(catalog: &Catalog) -> Vec<LabelCount> {
    rank_counts(catalog.iter().map(|t| t.rating.as_str()))
}
