//! Aggregators over the `duration` column.
//!
//! Duration only means minutes for movies and seasons for TV shows, so
//! every function here works on the subset of rows whose duration parses
//! for their type. Rows that fail to parse are skipped by that aggregator
//! alone.

use super::summaries::{BoxStats, Histogram, HistogramBin, SeasonCount};
use super::top_n::rank_counts;
use crate::config::MAX_HISTOGRAM_BINS;
use data_loader::{Catalog, Title};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Movie running times bucketed into `bins` equal-width bins spanning the
/// observed [min, max]. When every movie has the same length the bins are
/// one minute wide, starting at that length. `bins` is capped at
/// [`MAX_HISTOGRAM_BINS`].
pub fn movie_duration_histogram(catalog: &Catalog, bins: usize) -> Histogram {
    let minutes: Vec<f64> = movie_minutes(catalog).map(|(_, m)| f64::from(m)).collect();
    if minutes.is_empty() || bins == 0 {
        return Histogram::default();
    }
    let bins = bins.min(MAX_HISTOGRAM_BINS);

    let min = minutes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = minutes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let edges = bin_edges(min, max, bins);

    // Counting compares against the same edges the bins report
    let lowers = &edges[..bins];
    let mut counts = vec![0usize; bins];
    for value in &minutes {
        let index = lowers.partition_point(|lower| lower <= value).saturating_sub(1);
        counts[index] += 1;
    }

    Histogram {
        bins: counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: edges[i],
                upper: edges[i + 1],
                count,
            })
            .collect(),
    }
}

/// `bins + 1` ascending edges; bin `i` is `edges[i]..edges[i + 1]` and the
/// last edge is exactly `max`
fn bin_edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    if max > min {
        let span = max - min;
        (0..=bins)
            .map(|i| if i == bins { max } else { min + i as f64 * span / bins as f64 })
            .collect()
    } else {
        (0..=bins).map(|i| min + i as f64).collect()
    }
}

/// TV shows per season count, most common first (ties: fewer seasons first)
pub fn tv_seasons_distribution(catalog: &Catalog) -> Vec<SeasonCount> {
    let mut by_seasons: BTreeMap<u32, usize> = BTreeMap::new();
    for title in catalog.iter().filter(|t| t.is_tv_show()) {
        match title.seasons() {
            Some(seasons) => *by_seasons.entry(seasons).or_insert(0) += 1,
            None => debug!("Skipping unparseable season count '{}'", title.duration),
        }
    }

    let mut distribution: Vec<SeasonCount> = by_seasons
        .into_iter()
        .map(|(seasons, count)| SeasonCount {
            seasons,
            label: season_label(seasons),
            count,
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution
}

fn season_label(seasons: u32) -> String {
    if seasons == 1 {
        "1 Season".to_string()
    } else {
        format!("{seasons} Seasons")
    }
}

/// Five-number runtime summary for the `n` most frequent main genres among
/// movies with a parseable running time. Genres are ordered by frequency.
///
/// The ranking only counts movies that contribute a runtime, so a genre
/// made up of unparseable durations never takes a slot with an empty box.
/// This differs on purpose from the genre x rating panels, which rank every
/// title by main genre.
pub fn runtime_by_genre(catalog: &Catalog, n: usize) -> Vec<BoxStats> {
    let movies: Vec<(&str, u32)> = movie_minutes(catalog)
        .filter_map(|(title, minutes)| Some((title.main_genre()?, minutes)))
        .collect();

    let mut ranked = rank_counts(movies.iter().map(|(genre, _)| *genre));
    ranked.truncate(n);

    let mut runtimes: HashMap<&str, Vec<f64>> = HashMap::new();
    for (genre, minutes) in &movies {
        runtimes.entry(*genre).or_default().push(f64::from(*minutes));
    }

    ranked
        .into_iter()
        .filter_map(|genre| {
            let mut values = runtimes.remove(genre.label.as_str())?;
            values.sort_by(f64::total_cmp);
            five_number_summary(genre.label, &values)
        })
        .collect()
}

fn movie_minutes(catalog: &Catalog) -> impl Iterator<Item = (&Title, u32)> {
    catalog.iter().filter(|t| t.is_movie()).filter_map(|title| match title.minutes() {
        Some(minutes) => Some((title, minutes)),
        None => {
            debug!("Skipping unparseable movie duration '{}'", title.duration);
            None
        }
    })
}

fn five_number_summary(genre: String, sorted: &[f64]) -> Option<BoxStats> {
    Some(BoxStats {
        genre,
        count: sorted.len(),
        min: *sorted.first()?,
        q1: quantile(sorted, 0.25)?,
        median: quantile(sorted, 0.5)?,
        q3: quantile(sorted, 0.75)?,
        max: *sorted.last()?,
    })
}

/// Linear interpolation between closest ranks over sorted data
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TitleBuilder;

    #[test]
    fn test_single_movie_histogram() {
        let catalog: Catalog = vec![TitleBuilder::movie().duration("90 min").build()]
            .into_iter()
            .collect();

        let histogram = movie_duration_histogram(&catalog, 40);
        assert_eq!(histogram.bins.len(), 40);
        assert_eq!(histogram.total(), 1);
        assert_eq!(histogram.bin_containing(90.0).unwrap().count, 1);
    }

    #[test]
    fn test_histogram_spans_observed_range() {
        let catalog: Catalog = ["60 min", "100 min", "140 min", "1 Season"]
            .iter()
            .map(|d| TitleBuilder::movie().duration(d).build())
            .collect();

        let histogram = movie_duration_histogram(&catalog, 4);
        assert_eq!(histogram.bins.len(), 4);
        assert_eq!(histogram.bins[0].lower, 60.0);
        assert_eq!(histogram.bins[3].upper, 140.0);
        let counts: Vec<usize> = histogram.bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_narrow_range_counts_land_in_reported_bins() {
        let catalog: Catalog = ["1 min", "3 min", "5 min"]
            .iter()
            .map(|d| TitleBuilder::movie().duration(d).build())
            .collect();

        let histogram = movie_duration_histogram(&catalog, 40);
        assert_eq!(histogram.total(), 3);
        for value in [1.0, 3.0, 5.0] {
            let bin = histogram.bin_containing(value).unwrap();
            assert!(bin.count > 0, "{value} counted outside {bin:?}");
        }
    }

    #[test]
    fn test_bins_are_contiguous_and_agree_with_counts() {
        for low in 1..20u32 {
            for high in low + 1..low + 12 {
                let durations = [low, (low + high) / 2, high];
                let catalog: Catalog = durations
                    .iter()
                    .map(|m| TitleBuilder::movie().duration(&format!("{m} min")).build())
                    .collect();

                for bins in [7, 40] {
                    let histogram = movie_duration_histogram(&catalog, bins);
                    assert_eq!(histogram.bins.last().unwrap().upper, f64::from(high));
                    for pair in histogram.bins.windows(2) {
                        assert_eq!(pair[0].upper, pair[1].lower);
                    }
                    for m in durations {
                        let bin = histogram.bin_containing(f64::from(m)).unwrap();
                        assert!(bin.count > 0, "{m} min in {low}..{high} with {bins} bins");
                    }
                }
            }
        }
    }

    #[test]
    fn test_bin_count_is_capped() {
        let catalog: Catalog = vec![
            TitleBuilder::movie().duration("60 min").build(),
            TitleBuilder::movie().duration("120 min").build(),
        ]
        .into_iter()
        .collect();

        let histogram = movie_duration_histogram(&catalog, usize::MAX);
        assert_eq!(histogram.bins.len(), MAX_HISTOGRAM_BINS);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_histogram_ignores_tv_shows() {
        let catalog: Catalog = vec![TitleBuilder::show().duration("90 min").build()]
            .into_iter()
            .collect();
        assert!(movie_duration_histogram(&catalog, 40).is_empty());
    }

    #[test]
    fn test_tv_seasons_distribution() {
        let catalog: Catalog = ["1 Season", "2 Seasons", "1 Season", "many", "3 Seasons"]
            .iter()
            .map(|d| TitleBuilder::show().duration(d).build())
            .chain(std::iter::once(TitleBuilder::movie().build()))
            .collect();

        let seasons = tv_seasons_distribution(&catalog);
        let labels: Vec<(&str, usize)> = seasons.iter().map(|s| (s.label.as_str(), s.count)).collect();
        assert_eq!(labels, vec![("1 Season", 2), ("2 Seasons", 1), ("3 Seasons", 1)]);
    }

    #[test]
    fn test_quantile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&data, 0.0), Some(1.0));
        assert_eq!(quantile(&data, 0.5), Some(2.5));
        assert_eq!(quantile(&data, 0.25), Some(1.75));
        assert_eq!(quantile(&data, 1.0), Some(4.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_runtime_by_genre_orders_by_frequency() {
        let catalog: Catalog = vec![
            TitleBuilder::movie().genres("Dramas").duration("100 min").build(),
            TitleBuilder::movie().genres("Dramas, Comedies").duration("120 min").build(),
            TitleBuilder::movie().genres("Dramas").duration("140 min").build(),
            TitleBuilder::movie().genres("Action").duration("200 min").build(),
            TitleBuilder::movie().genres("Comedies").duration("n/a").build(),
            TitleBuilder::show().genres("Comedies").duration("2 Seasons").build(),
        ]
        .into_iter()
        .collect();

        let stats = runtime_by_genre(&catalog, 10);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].genre, "Dramas");
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[0].min, 100.0);
        assert_eq!(stats[0].median, 120.0);
        assert_eq!(stats[0].max, 140.0);
        assert_eq!(stats[1].genre, "Action");

        assert_eq!(runtime_by_genre(&catalog, 1).len(), 1);
    }

    #[test]
    fn test_runtime_ranking_ignores_unparseable_durations() {
        let catalog: Catalog = vec![
            TitleBuilder::movie().genres("Stand-Up Comedy").duration("n/a").build(),
            TitleBuilder::movie().genres("Stand-Up Comedy").duration("n/a").build(),
            TitleBuilder::movie().genres("Stand-Up Comedy").duration("45 min").build(),
            TitleBuilder::movie().genres("Thrillers").duration("100 min").build(),
            TitleBuilder::movie().genres("Thrillers").duration("110 min").build(),
        ]
        .into_iter()
        .collect();

        let stats = runtime_by_genre(&catalog, 1);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].genre, "Thrillers");
        assert_eq!(stats[0].count, 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(movie_duration_histogram(&catalog, 40).is_empty());
        assert!(tv_seasons_distribution(&catalog).is_empty());
        assert!(runtime_by_genre(&catalog, 10).is_empty());
    }
}
