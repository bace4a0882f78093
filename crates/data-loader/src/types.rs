//! Core domain types for the title catalog.
//!
//! A `Title` is one cleaned row of the source CSV. Multi-valued columns
//! (country, director, cast, listed_in) are split into `Vec<String>` once at
//! load time so that nothing downstream has to re-split delimited strings.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Placeholder stored in `country`, `director` and `cast` when the source
/// value is missing.
pub const UNKNOWN: &str = "Unknown";

// =============================================================================
// Content type
// =============================================================================

/// Whether a title is a movie or a TV show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ContentType {
    Movie,
    /// Serialized with the spelling the source data uses
    #[serde(rename = "TV Show")]
    TvShow,
}

impl ContentType {
    /// All known content types, in display order
    pub const ALL: [ContentType; 2] = [ContentType::Movie, ContentType::TvShow];

    /// Label used by the source data ("Movie" / "TV Show")
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }

    /// Parse the spellings seen in catalog exports.
    ///
    /// Example: "TV Show" -> Some(ContentType::TvShow)
    ///          "tvshow"  -> Some(ContentType::TvShow)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "movie" => Some(ContentType::Movie),
            "tvshow" => Some(ContentType::TvShow),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Calendar months
// =============================================================================

/// Month names in calendar order, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a 1-based month number; `None` outside 1..=12
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

// =============================================================================
// Title record
// =============================================================================

/// One cleaned catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    /// Opaque source identifier, may be empty
    pub show_id: String,
    pub kind: ContentType,
    pub title: String,
    /// Never empty; `[UNKNOWN]` when the source had no value
    pub director: Vec<String>,
    /// Never empty; `[UNKNOWN]` when the source had no value
    pub cast: Vec<String>,
    /// Never empty; `[UNKNOWN]` when the source had no value
    pub country: Vec<String>,
    /// Raw `date_added` text, trimmed and never empty
    pub date_added: String,
    /// `date_added` parsed leniently; `None` if no known format matched
    pub added_on: Option<NaiveDate>,
    pub release_year: i32,
    /// Never empty
    pub rating: String,
    /// Raw duration text, e.g. "90 min" or "2 Seasons"
    pub duration: String,
    /// Genre tags in source order; the first is the main genre
    pub listed_in: Vec<String>,
    pub description: String,
}

impl Title {
    pub fn is_movie(&self) -> bool {
        self.kind == ContentType::Movie
    }

    pub fn is_tv_show(&self) -> bool {
        self.kind == ContentType::TvShow
    }

    /// First genre tag, if any
    pub fn main_genre(&self) -> Option<&str> {
        self.listed_in.first().map(String::as_str)
    }

    /// Running time in minutes. Only defined for movies.
    pub fn minutes(&self) -> Option<u32> {
        if !self.is_movie() {
            return None;
        }
        parse_unit_count(&self.duration, &["min", "mins"])
    }

    /// Number of seasons. Only defined for TV shows.
    pub fn seasons(&self) -> Option<u32> {
        if !self.is_tv_show() {
            return None;
        }
        parse_unit_count(&self.duration, &["Season", "Seasons"])
    }

    pub fn year_added(&self) -> Option<i32> {
        self.added_on.map(|d| d.year())
    }

    /// 1-based month the title was added
    pub fn month_added(&self) -> Option<u32> {
        self.added_on.map(|d| d.month())
    }
}

/// Parse "<integer> <unit>" where the unit is one of `units`
/// (case-insensitive). A bare integer is accepted too.
///
/// Example: "90 min" -> Some(90)
///          "2 Seasons" -> Some(2)
///          "ninety" -> None
fn parse_unit_count(s: &str, units: &[&str]) -> Option<u32> {
    let trimmed = s.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let number = parts.next()?.parse::<u32>().ok()?;
    match parts.next().map(str::trim) {
        None | Some("") => Some(number),
        Some(unit) if units.iter().any(|u| u.eq_ignore_ascii_case(unit)) => Some(number),
        Some(_) => None,
    }
}

// =============================================================================
// Load report
// =============================================================================

/// Row accounting for a single load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Data rows encountered (header excluded)
    pub rows_read: usize,
    /// Rows dropped because `rating`, `date_added` or `duration` was missing
    pub dropped_missing: usize,
    /// Rows rejected because a field could not be parsed
    pub rejected_malformed: usize,
    /// Retained rows whose `date_added` matched no known date format
    pub unparsed_dates: usize,
}

impl LoadReport {
    pub fn retained(&self) -> usize {
        self.rows_read
            .saturating_sub(self.dropped_missing)
            .saturating_sub(self.rejected_malformed)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable table of cleaned titles.
///
/// Both the full loaded catalog and every filtered view are a `Catalog`;
/// a filtered view owns its own rows, so nothing it does can reach back
/// into the catalog it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    titles: Vec<Title>,
    report: LoadReport,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-cleaned titles
    pub fn from_titles(titles: Vec<Title>) -> Self {
        let report = LoadReport {
            rows_read: titles.len(),
            ..LoadReport::default()
        };
        Self { titles, report }
    }

    pub(crate) fn with_report(titles: Vec<Title>, report: LoadReport) -> Self {
        Self { titles, report }
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Title> {
        self.titles.iter()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Distinct content types in first-seen order
    pub fn kinds(&self) -> Vec<ContentType> {
        let mut kinds = Vec::new();
        for title in &self.titles {
            if !kinds.contains(&title.kind) {
                kinds.push(title.kind);
            }
        }
        kinds
    }

    /// Distinct ratings, sorted
    pub fn ratings(&self) -> BTreeSet<String> {
        self.titles.iter().map(|t| t.rating.clone()).collect()
    }

    /// Smallest and largest release year, `None` for an empty catalog
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.titles.iter().map(|t| t.release_year).min()?;
        let max = self.titles.iter().map(|t| t.release_year).max()?;
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Title;
    type IntoIter = std::slice::Iter<'a, Title>;

    fn into_iter(self) -> Self::IntoIter {
        self.titles.iter()
    }
}

impl FromIterator<Title> for Catalog {
    fn from_iter<I: IntoIterator<Item = Title>>(iter: I) -> Self {
        Self::from_titles(iter.into_iter().collect())
    }
}
