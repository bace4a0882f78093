//! Parser for catalog CSV exports.
//!
//! Expected header (extra columns are ignored, `show_id`, `title` and
//! `description` are optional):
//!
//! ```text
//! show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
//! ```
//!
//! Cleaning rules applied while parsing:
//! - `country`, `director`, `cast`: missing -> "Unknown"
//! - rows missing `rating`, `date_added` or `duration` are dropped
//! - rows with an unknown `type` or non-numeric `release_year` are rejected
//! - `date_added` is parsed leniently, see [`parse_date`]

use crate::error::{DataLoadError, Result};
use crate::types::*;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use tracing::{debug, warn};

/// Columns every catalog file must provide
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "type",
    "rating",
    "release_year",
    "date_added",
    "country",
    "director",
    "cast",
    "listed_in",
    "duration",
];

/// Date layouts seen in `date_added`, tried in order
const DATE_FORMATS: [&str; 7] = [
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y-%m-%d",
    "%d-%b-%y",
    "%m/%d/%Y",
    "%d %B %Y",
    "%Y-%m-%d %H:%M:%S",
];

/// A row as it appears in the file, before cleaning
#[derive(Debug, Deserialize)]
struct RawTitle {
    show_id: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    director: Option<String>,
    cast: Option<String>,
    country: Option<String>,
    date_added: Option<String>,
    release_year: Option<String>,
    rating: Option<String>,
    duration: Option<String>,
    listed_in: Option<String>,
    description: Option<String>,
}

/// What happened to a single raw row
enum RowOutcome {
    Kept(Title),
    Dropped(&'static str),
    Rejected(String),
}

/// Parse a whole catalog from any reader.
///
/// `source` is only used in log lines and error messages.
///
/// Returns the cleaned titles plus row accounting. Row-level problems never
/// fail the call; a missing required column or an I/O failure does.
pub fn parse_titles<R: Read>(reader: R, source: &str) -> Result<(Vec<Title>, LoadReport)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                file: source.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut titles = Vec::new();
    let mut report = LoadReport::default();

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                report.rows_read += 1;
                report.rejected_malformed += 1;
                warn!("{source}: skipping unreadable row: {e}");
                continue;
            }
        };
        report.rows_read += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let raw: RawTitle = match record.deserialize(Some(&headers)) {
            Ok(raw) => raw,
            Err(e) => {
                report.rejected_malformed += 1;
                warn!("{source}: line {line}: {e}");
                continue;
            }
        };

        match clean_row(raw) {
            RowOutcome::Kept(title) => {
                if title.added_on.is_none() {
                    report.unparsed_dates += 1;
                    debug!(
                        "{source}: line {line}: unrecognised date_added '{}'",
                        title.date_added
                    );
                }
                titles.push(title);
            }
            RowOutcome::Dropped(field) => {
                report.dropped_missing += 1;
                debug!("{source}: line {line}: dropped, missing {field}");
            }
            RowOutcome::Rejected(reason) => {
                report.rejected_malformed += 1;
                let err = DataLoadError::ParseError {
                    file: source.to_string(),
                    line,
                    reason,
                };
                warn!("{err}");
            }
        }
    }

    Ok((titles, report))
}

/// Apply the cleaning rules to one raw row
fn clean_row(raw: RawTitle) -> RowOutcome {
    let Some(rating) = non_blank(raw.rating) else {
        return RowOutcome::Dropped("rating");
    };
    let Some(date_added) = non_blank(raw.date_added) else {
        return RowOutcome::Dropped("date_added");
    };
    let Some(duration) = non_blank(raw.duration) else {
        return RowOutcome::Dropped("duration");
    };

    let kind_str = non_blank(raw.kind).unwrap_or_default();
    let Some(kind) = ContentType::parse(&kind_str) else {
        return RowOutcome::Rejected(format!("Invalid type: '{kind_str}'"));
    };

    let year_str = non_blank(raw.release_year).unwrap_or_default();
    let release_year = match parse_release_year(&year_str) {
        Ok(year) => year,
        Err(e) => return RowOutcome::Rejected(e.to_string()),
    };

    let added_on = parse_date(&date_added);

    RowOutcome::Kept(Title {
        show_id: non_blank(raw.show_id).unwrap_or_default(),
        kind,
        title: non_blank(raw.title).unwrap_or_default(),
        director: split_or_unknown(raw.director),
        cast: split_or_unknown(raw.cast),
        country: split_or_unknown(raw.country),
        date_added,
        added_on,
        release_year,
        rating,
        duration,
        listed_in: non_blank(raw.listed_in)
            .map(|s| split_list(&s))
            .unwrap_or_default(),
        description: non_blank(raw.description).unwrap_or_default(),
    })
}

/// Trim a field, treating blank text the same as an absent value
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_release_year(s: &str) -> Result<i32> {
    // Some exports write years as floats ("2019.0")
    let digits = s.strip_suffix(".0").unwrap_or(s);
    digits.parse::<i32>().map_err(|_| DataLoadError::InvalidValue {
        field: "release_year".to_string(),
        value: s.to_string(),
    })
}

/// Split a comma-separated list into trimmed, non-empty items
///
/// Example: "Drama, Action" -> vec!["Drama", "Action"]
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_or_unknown(value: Option<String>) -> Vec<String> {
    let items = non_blank(value).map(|s| split_list(&s)).unwrap_or_default();
    if items.is_empty() {
        vec![UNKNOWN.to_string()]
    } else {
        items
    }
}

/// Parse a date written in any of the layouts the catalog uses.
///
/// Example: "September 25, 2021" -> 2021-09-25
///          " August 4, 2017"   -> 2017-08-04
///          "2020-01-15"        -> 2020-01-15
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(t, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description\n";

    fn parse(body: &str) -> (Vec<Title>, LoadReport) {
        let csv = format!("{HEADER}{body}");
        parse_titles(csv.as_bytes(), "test.csv").unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 9, 25).unwrap();
        assert_eq!(parse_date("September 25, 2021"), Some(expected));
        assert_eq!(parse_date(" September 25, 2021 "), Some(expected));
        assert_eq!(parse_date("Sep 25, 2021"), Some(expected));
        assert_eq!(parse_date("2021-09-25"), Some(expected));
        assert_eq!(parse_date("25-Sep-21"), Some(expected));
        assert_eq!(parse_date("09/25/2021"), Some(expected));
        assert_eq!(parse_date("August 4, 2017"), NaiveDate::from_ymd_opt(2017, 8, 4));
        assert_eq!(parse_date("someday"), None);
        assert_eq!(parse_date("   "), None);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("Drama, Action"), vec!["Drama", "Action"]);
        assert_eq!(split_list("Drama,,  "), vec!["Drama"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_clean_row_fills_unknown() {
        let (titles, report) = parse(
            "s1,Movie,A,,,,\"January 15, 2020\",2020,PG,90 min,\"Drama, Action\",desc\n",
        );
        assert_eq!(report.rows_read, 1);
        assert_eq!(titles.len(), 1);
        let t = &titles[0];
        assert_eq!(t.director, vec![UNKNOWN]);
        assert_eq!(t.cast, vec![UNKNOWN]);
        assert_eq!(t.country, vec![UNKNOWN]);
        assert_eq!(t.listed_in, vec!["Drama", "Action"]);
        assert_eq!(t.added_on, NaiveDate::from_ymd_opt(2020, 1, 15));
    }

    #[test]
    fn test_blank_director_becomes_unknown() {
        let (titles, _) = parse("s1,Movie,A,\"  \",Ann,US,2020-01-15,2020,PG,90 min,Drama,\n");
        assert_eq!(titles[0].director, vec![UNKNOWN]);
        assert_eq!(titles[0].cast, vec!["Ann"]);
    }

    #[test]
    fn test_rows_missing_required_fields_are_dropped() {
        let (titles, report) = parse(concat!(
            "s1,Movie,A,,,,2020-01-15,2020,,90 min,Drama,\n",
            "s2,Movie,B,,,,,2020,PG,90 min,Drama,\n",
            "s3,Movie,C,,,,2020-01-15,2020,PG,,Drama,\n",
            "s4,TV Show,D,,,,2019-06-01,2019,TV-MA,2 Seasons,Comedy,\n",
        ));
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].show_id, "s4");
        assert_eq!(report.dropped_missing, 3);
        assert_eq!(report.retained(), 1);
        for t in &titles {
            assert!(!t.rating.is_empty());
            assert!(!t.date_added.is_empty());
        }
    }

    #[test]
    fn test_malformed_rows_are_rejected() {
        let (titles, report) = parse(concat!(
            "s1,Podcast,A,,,,2020-01-15,2020,PG,90 min,Drama,\n",
            "s2,Movie,B,,,,2020-01-15,soon,PG,90 min,Drama,\n",
            "s3,Movie,C,,,,2020-01-15,2020.0,PG,90 min,Drama,\n",
        ));
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].release_year, 2020);
        assert_eq!(report.rejected_malformed, 2);
    }

    #[test]
    fn test_unparsed_date_is_kept() {
        let (titles, report) = parse("s1,Movie,A,,,,sometime,2020,PG,90 min,Drama,\n");
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].date_added, "sometime");
        assert_eq!(titles[0].added_on, None);
        assert_eq!(report.unparsed_dates, 1);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "type,rating,release_year\nMovie,PG,2020\n";
        let err = parse_titles(csv.as_bytes(), "short.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn { .. }));
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "type,rating,release_year,date_added,country,director,cast,listed_in,duration\n\
                   Movie,PG,2020,2020-01-15,,,,Drama,90 min\n";
        let (titles, _) = parse_titles(csv.as_bytes(), "minimal.csv").unwrap();
        assert_eq!(titles.len(), 1);
        assert!(titles[0].show_id.is_empty());
        assert!(titles[0].title.is_empty());
    }
}
