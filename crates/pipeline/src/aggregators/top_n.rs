//! Ranked "top N" counts over exploded list columns.
//!
//! Ties are broken by first appearance in the catalog, which keeps the
//! output deterministic for a given row order.

use super::summaries::LabelCount;
use data_loader::{Catalog, UNKNOWN};
use std::collections::HashMap;

/// Count occurrences and rank them by count descending, ties by first
/// appearance.
pub fn rank_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((position, 0)).1 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(label, (first_seen, count))| (label, first_seen, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    ranked
        .into_iter()
        .map(|(label, _, count)| LabelCount::new(label, count))
        .collect()
}

fn top(values: impl IntoIterator<Item = impl AsRef<str>>, n: usize) -> Vec<LabelCount> {
    let values: Vec<_> = values.into_iter().collect();
    let mut ranked = rank_counts(values.iter().map(|v| AsRef::<str>::as_ref(v)));
    ranked.truncate(n);
    ranked
}

/// Every genre tag of every title, top `n` by count
pub fn top_genres(catalog: &Catalog, n: usize) -> Vec<LabelCount> {
    top(catalog.iter().flat_map(|t| t.listed_in.iter()), n)
}

/// Directors, excluding the "Unknown" placeholder
pub fn top_directors(catalog: &Catalog, n: usize) -> Vec<LabelCount> {
    top(
        catalog
            .iter()
            .flat_map(|t| t.director.iter())
            .filter(|name| *name != UNKNOWN),
        n,
    )
}

/// Cast members, excluding the "Unknown" placeholder
pub fn top_actors(catalog: &Catalog, n: usize) -> Vec<LabelCount> {
    top(
        catalog
            .iter()
            .flat_map(|t| t.cast.iter())
            .filter(|name| *name != UNKNOWN),
        n,
    )
}

/// Production countries, excluding the "Unknown" placeholder and
/// `excluded` when given
pub fn top_countries(catalog: &Catalog, n: usize, excluded: Option<&str>) -> Vec<LabelCount> {
    top(
        catalog
            .iter()
            .flat_map(|t| t.country.iter())
            .filter(|country| *country != UNKNOWN && Some(country.as_str()) != excluded),
        n,
    )
}
