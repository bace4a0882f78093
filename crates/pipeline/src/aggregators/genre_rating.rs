//! Genre × rating crosstabs restricted to the most frequent main genres.

use super::summaries::{GenreNode, GenreRatingCount, GenreRatingTree, LabelCount, StackedCounts};
use super::top_n::rank_counts;
use data_loader::Catalog;
use std::collections::BTreeSet;

/// The `n` most frequent main genres, each with its rating breakdown
fn crosstab(catalog: &Catalog, n: usize) -> Vec<GenreNode> {
    let mut top = rank_counts(catalog.iter().filter_map(|t| t.main_genre()));
    top.truncate(n);

    top.into_iter()
        .map(|LabelCount { label: genre, count: total }| {
            let ratings = rank_counts(
                catalog
                    .iter()
                    .filter(|t| t.main_genre() == Some(genre.as_str()))
                    .map(|t| t.rating.as_str()),
            );
            GenreNode {
                genre,
                total,
                ratings,
            }
        })
        .collect()
}

/// All → genre → rating hierarchy over the top `n` main genres
pub fn genre_rating_breakdown(catalog: &Catalog, n: usize) -> GenreRatingTree {
    let genres = crosstab(catalog, n);
    GenreRatingTree {
        total: genres.iter().map(|g| g.total).sum(),
        genres,
    }
}

/// Stacked-bar layout of the same crosstab, genres by total descending
pub fn genre_rating_stacked(catalog: &Catalog, n: usize) -> StackedCounts {
    let nodes = crosstab(catalog, n);
    let ratings: BTreeSet<&str> = nodes
        .iter()
        .flat_map(|node| node.ratings.iter().map(|r| r.label.as_str()))
        .collect();

    let mut cells = Vec::new();
    for node in &nodes {
        for rating in &ratings {
            if let Some(rc) = node.ratings.iter().find(|r| r.label == *rating) {
                cells.push(GenreRatingCount {
                    genre: node.genre.clone(),
                    rating: rating.to_string(),
                    count: rc.count,
                });
            }
        }
    }

    StackedCounts {
        genres: nodes.iter().map(|node| node.genre.clone()).collect(),
        ratings: ratings.into_iter().map(str::to_string).collect(),
        cells,
    }
}
