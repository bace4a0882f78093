//! Plain-text rendering of dashboard panels.
//!
//! Every function returns a `String` so panels can be tested without a
//! terminal. Only headings are colored.

use clap::ValueEnum;
use colored::Colorize;
use data_loader::{Catalog, LoadReport};
use pipeline::aggregators::{
    BoxStats, GenreRatingTree, Heatmap, Histogram, LabelCount, StackedCounts, SummaryMetrics,
};
use pipeline::Dashboard;
use std::fmt::Write;

const BAR_WIDTH: usize = 40;
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];
const EMPTY_PANEL: &str = "  (nothing to show)\n";

/// One dashboard panel, selectable with `vod-dash panel <name>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Panel {
    Metrics,
    ByYear,
    Genres,
    Types,
    Directors,
    Actors,
    Countries,
    Ratings,
    Durations,
    Seasons,
    Months,
    Heatmap,
    GenreRatings,
    GenreRatingsStacked,
    Runtime,
}

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Panel::Metrics => "Summary",
            Panel::ByYear => "Titles by release year",
            Panel::Genres => "Top genres",
            Panel::Types => "Movies vs TV shows",
            Panel::Directors => "Top directors",
            Panel::Actors => "Top actors",
            Panel::Countries => "Top countries",
            Panel::Ratings => "Rating distribution",
            Panel::Durations => "Movie durations (minutes)",
            Panel::Seasons => "TV show seasons",
            Panel::Months => "Titles added per month",
            Panel::Heatmap => "Additions by year and month",
            Panel::GenreRatings => "Genre and rating breakdown",
            Panel::GenreRatingsStacked => "Ratings within top genres",
            Panel::Runtime => "Runtime by genre",
        }
    }
}

pub fn heading(text: &str) -> String {
    format!("{}\n", text.bold().blue())
}

/// Render one panel of `dashboard`, heading included
pub fn panel(dashboard: &Dashboard, which: Panel) -> String {
    let body = match which {
        Panel::Metrics => metrics(&dashboard.metrics),
        Panel::ByYear => bars(
            dashboard
                .counts_by_year
                .iter()
                .map(|y| (y.year.to_string(), y.count)),
        ),
        Panel::Genres => label_bars(&dashboard.top_genres),
        Panel::Types => pie(
            dashboard
                .type_split
                .iter()
                .map(|t| (t.kind.label().to_string(), t.count)),
        ),
        Panel::Directors => label_bars(&dashboard.top_directors),
        Panel::Actors => label_bars(&dashboard.top_actors),
        Panel::Countries => label_bars(&dashboard.top_countries),
        Panel::Ratings => label_bars(&dashboard.rating_distribution),
        Panel::Durations => histogram(&dashboard.movie_durations),
        Panel::Seasons => bars(
            dashboard
                .tv_seasons
                .iter()
                .map(|s| (s.label.clone(), s.count)),
        ),
        Panel::Months => bars(
            dashboard
                .monthly_additions
                .iter()
                .map(|m| (m.name.clone(), m.count)),
        ),
        Panel::Heatmap => heatmap(&dashboard.year_month_heatmap),
        Panel::GenreRatings => tree(&dashboard.genre_rating_breakdown),
        Panel::GenreRatingsStacked => stacked(&dashboard.genre_rating_stacked),
        Panel::Runtime => box_stats(&dashboard.runtime_by_genre),
    };
    format!("{}{}", heading(which.title()), body)
}

/// Every panel in dashboard order
pub fn report(dashboard: &Dashboard) -> String {
    Panel::value_variants()
        .iter()
        .map(|&which| panel(dashboard, which))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn metrics(metrics: &SummaryMetrics) -> String {
    format!(
        "  Total titles: {}\n  Movies:       {}\n  TV shows:     {}\n",
        metrics.total_titles, metrics.movies, metrics.tv_shows
    )
}

pub fn load_report(report: &LoadReport) -> String {
    format!(
        "  Rows read:            {}\n  Dropped (missing):    {}\n  Rejected (malformed): {}\n  Unparsed dates:       {}\n",
        report.rows_read, report.dropped_missing, report.rejected_malformed, report.unparsed_dates
    )
}

fn label_bars(counts: &[LabelCount]) -> String {
    bars(counts.iter().map(|c| (c.label.clone(), c.count)))
}

/// Horizontal bar chart, bars scaled to the largest count
pub fn bars(rows: impl IntoIterator<Item = (String, usize)>) -> String {
    let rows: Vec<(String, usize)> = rows.into_iter().collect();
    if rows.is_empty() {
        return EMPTY_PANEL.to_string();
    }
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);

    let mut out = String::new();
    for (label, count) in &rows {
        let len = (count * BAR_WIDTH).div_ceil(max);
        let _ = writeln!(
            out,
            "  {label:<label_width$} {} {count}",
            "█".repeat(len)
        );
    }
    out
}

/// Pie chart as percentages of the total
pub fn pie(slices: impl IntoIterator<Item = (String, usize)>) -> String {
    let slices: Vec<(String, usize)> = slices.into_iter().collect();
    let total: usize = slices.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return EMPTY_PANEL.to_string();
    }
    let label_width = slices.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, count) in &slices {
        let share = *count as f64 * 100.0 / total as f64;
        let _ = writeln!(out, "  {label:<label_width$} {share:5.1}% ({count})");
    }
    out
}

pub fn histogram(histogram: &Histogram) -> String {
    if histogram.is_empty() {
        return EMPTY_PANEL.to_string();
    }
    bars(
        histogram
            .bins
            .iter()
            .map(|b| (format!("{:>6.1}-{:<6.1}", b.lower, b.upper), b.count)),
    )
}

/// Year-by-month grid shaded by count
pub fn heatmap(heatmap: &Heatmap) -> String {
    if heatmap.is_empty() {
        return EMPTY_PANEL.to_string();
    }
    let max = heatmap.max_count().max(1);

    let mut out = String::from("       ");
    for month in &heatmap.months {
        let abbrev: String = month.chars().take(3).collect();
        let _ = write!(out, " {abbrev}");
    }
    out.push('\n');

    for (year, row) in heatmap.years.iter().zip(&heatmap.counts) {
        let _ = write!(out, "  {year:>4} ");
        for &count in row {
            let shade = if count == 0 {
                SHADES[0]
            } else {
                SHADES[1 + (count * (SHADES.len() - 2)) / max]
            };
            let _ = write!(out, " {0}{0}{0}", shade);
        }
        let _ = writeln!(out, "  {}", row.iter().sum::<usize>());
    }
    let _ = writeln!(out, "  max per month: {}", heatmap.max_count());
    out
}

/// Indented genre -> rating tree
pub fn tree(tree: &GenreRatingTree) -> String {
    if tree.is_empty() {
        return EMPTY_PANEL.to_string();
    }
    let mut out = format!("  All ({})\n", tree.total);
    for (i, node) in tree.genres.iter().enumerate() {
        let last_genre = i + 1 == tree.genres.len();
        let (branch, indent) = if last_genre { ("└─", "   ") } else { ("├─", "│  ") };
        let _ = writeln!(out, "  {branch} {} ({})", node.genre, node.total);
        for (j, rating) in node.ratings.iter().enumerate() {
            let leaf = if j + 1 == node.ratings.len() { "└─" } else { "├─" };
            let _ = writeln!(out, "  {indent}{leaf} {} ({})", rating.label, rating.count);
        }
    }
    out
}

/// Genre rows by rating columns
pub fn stacked(stacked: &StackedCounts) -> String {
    if stacked.is_empty() {
        return EMPTY_PANEL.to_string();
    }
    let genre_width = stacked
        .genres
        .iter()
        .map(|g| g.chars().count())
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = stacked.ratings.iter().map(|r| r.chars().count().max(3)).collect();

    let mut out = format!("  {:genre_width$}", "");
    for (rating, width) in stacked.ratings.iter().zip(widths.iter().copied()) {
        let _ = write!(out, " {rating:>width$}");
    }
    out.push_str("  total\n");

    for genre in &stacked.genres {
        let _ = write!(out, "  {genre:<genre_width$}");
        for (rating, width) in stacked.ratings.iter().zip(widths.iter().copied()) {
            let _ = write!(out, " {:>width$}", stacked.count(genre, rating));
        }
        let _ = writeln!(out, "  {}", stacked.genre_total(genre));
    }
    out
}

pub fn box_stats(stats: &[BoxStats]) -> String {
    if stats.is_empty() {
        return EMPTY_PANEL.to_string();
    }
    let genre_width = stats.iter().map(|s| s.genre.chars().count()).max().unwrap_or(0);

    let mut out = format!(
        "  {:genre_width$} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6}\n",
        "", "n", "min", "q1", "median", "q3", "max"
    );
    for s in stats {
        let _ = writeln!(
            out,
            "  {:<genre_width$} {:>5} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1}",
            s.genre, s.count, s.min, s.q1, s.median, s.q3, s.max
        );
    }
    out
}

/// Raw data table of the first `limit` titles
pub fn titles_table(catalog: &Catalog, limit: usize) -> String {
    let mut out = format!(
        "  {:<8} {:<8} {:<40} {:>4} {:<8} {:<10} {}\n",
        "id", "type", "title", "year", "rating", "duration", "added"
    );
    for title in catalog.iter().take(limit) {
        let name: String = title.title.chars().take(40).collect();
        let _ = writeln!(
            out,
            "  {:<8} {:<8} {:<40} {:>4} {:<8} {:<10} {}",
            title.show_id,
            title.kind.label(),
            name,
            title.release_year,
            title.rating,
            title.duration,
            title.date_added
        );
    }
    if catalog.len() > limit {
        let _ = writeln!(out, "  ... {} more", catalog.len() - limit);
    }
    out
}
