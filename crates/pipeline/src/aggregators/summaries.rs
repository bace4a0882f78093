//! Plain summary tables produced by the aggregators.
//!
//! Every type here is renderer-agnostic and serializable. An empty summary
//! means "nothing to show" for that panel only.

use data_loader::ContentType;
use serde::Serialize;

/// Headline numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    pub total_titles: usize,
    pub movies: usize,
    pub tv_shows: usize,
}

impl SummaryMetrics {
    pub fn is_empty(&self) -> bool {
        self.total_titles == 0
    }
}

/// A labelled count (genre, person, country, rating, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub kind: ContentType,
    pub count: usize,
}

/// One equal-width histogram bucket covering `[lower, upper)`; the last
/// bucket also includes its upper edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of values counted
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// The bucket `value` falls into, if it is within the histogram range
    pub fn bin_containing(&self, value: f64) -> Option<&HistogramBin> {
        let last = self.bins.len().checked_sub(1)?;
        self.bins.iter().enumerate().find_map(|(i, bin)| {
            let inside = value >= bin.lower && (value < bin.upper || (i == last && value <= bin.upper));
            inside.then_some(bin)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonCount {
    pub seasons: u32,
    /// "1 Season", "2 Seasons", ...
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    /// 1-based calendar month
    pub month: u32,
    pub name: String,
    pub count: usize,
}

/// Titles added per (year, month). `counts[y][m]` pairs `years[y]` with
/// `months[m]`; combinations without titles hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub years: Vec<i32>,
    pub months: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Count for `year` and 1-based `month`, `None` if the year is absent
    pub fn get(&self, year: i32, month: u32) -> Option<usize> {
        let row = self.years.iter().position(|&y| y == year)?;
        let col = month.checked_sub(1)? as usize;
        self.counts.get(row)?.get(col).copied()
    }

    /// Largest cell value, used to scale colours
    pub fn max_count(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Second level of the genre → rating hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreNode {
    pub genre: String,
    pub total: usize,
    pub ratings: Vec<LabelCount>,
}

/// All → genre → rating hierarchy (treemap data)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenreRatingTree {
    pub total: usize,
    pub genres: Vec<GenreNode>,
}

impl GenreRatingTree {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreRatingCount {
    pub genre: String,
    pub rating: String,
    pub count: usize,
}

/// Genre × rating counts for a stacked bar chart. `genres` is ordered by
/// total descending, `ratings` alphabetically; `cells` holds non-zero
/// combinations in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackedCounts {
    pub genres: Vec<String>,
    pub ratings: Vec<String>,
    pub cells: Vec<GenreRatingCount>,
}

impl StackedCounts {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn count(&self, genre: &str, rating: &str) -> usize {
        self.cells
            .iter()
            .find(|c| c.genre == genre && c.rating == rating)
            .map_or(0, |c| c.count)
    }

    pub fn genre_total(&self, genre: &str) -> usize {
        self.cells
            .iter()
            .filter(|c| c.genre == genre)
            .map(|c| c.count)
            .sum()
    }
}

/// Five-number summary of one genre's runtimes (box plot data)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub genre: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}
