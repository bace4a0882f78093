mod render;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, CatalogCache, ContentType};
use pipeline::config::MAX_HISTOGRAM_BINS;
use pipeline::{Dashboard, DashboardConfig, DashboardView, FilterCriteria};
use render::Panel;
use std::path::PathBuf;
use std::time::Instant;

/// vod-dash - Streaming catalog dashboard
#[derive(Parser)]
#[command(name = "vod-dash")]
#[command(about = "Explore a streaming catalog export as dashboard panels", long_about = None)]
struct Cli {
    /// Path to the catalog CSV export
    #[arg(
        short,
        long,
        global = true,
        env = "VOD_DASH_DATA_FILE",
        default_value = "netflix_titles.csv"
    )]
    data_file: PathBuf,

    #[command(flatten)]
    filters: FilterArgs,

    #[command(flatten)]
    panels: PanelArgs,

    #[command(subcommand)]
    command: Commands,
}

/// The three filter widgets. Omitted flags select everything.
#[derive(Args)]
struct FilterArgs {
    /// Content type to keep ("Movie", "TV Show"); repeatable
    #[arg(long = "type", global = true, value_parser = parse_content_type)]
    types: Vec<ContentType>,

    /// Rating to keep (e.g. "TV-MA"); repeatable
    #[arg(long = "rating", global = true)]
    ratings: Vec<String>,

    /// Earliest release year to keep
    #[arg(long, global = true)]
    year_min: Option<i32>,

    /// Latest release year to keep
    #[arg(long, global = true)]
    year_max: Option<i32>,
}

#[derive(Args)]
struct PanelArgs {
    /// Number of groups in top-N panels
    #[arg(
        long,
        global = true,
        default_value_t = pipeline::config::DEFAULT_TOP_N,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    top_n: usize,

    /// Number of bins in the movie duration histogram
    #[arg(
        long,
        global = true,
        default_value_t = pipeline::config::DEFAULT_HISTOGRAM_BINS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_HISTOGRAM_BINS as u64)
    )]
    bins: usize,

    /// Country left out of the country ranking; empty to keep all
    #[arg(long, global = true, default_value = pipeline::config::DEFAULT_EXCLUDED_COUNTRY)]
    exclude_country: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show high-level metrics and how the file was cleaned
    Summary,

    /// Render every panel
    Report {
        /// Print the dashboard as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render a single panel
    Panel {
        #[arg(value_enum)]
        name: Panel,
    },

    /// List the filtered titles
    Titles {
        /// Number of rows to print
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Print the titles as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the values available to each filter
    Options,
}

fn main() -> Result<()> {
    // Logs go to stderr; keep them quiet unless asked so they don't
    // interleave with the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cache = CatalogCache::new();
    let start = Instant::now();
    let outcome = cache.load(&cli.data_file);
    tracing::info!(
        "Loaded {} titles from {} in {:?}",
        outcome.catalog.len(),
        cli.data_file.display(),
        start.elapsed()
    );
    if let Some(problem) = &outcome.problem {
        eprintln!("{} {}", "Error:".red().bold(), problem.to_string().red());
    }
    let catalog = outcome.catalog;

    let criteria = build_criteria(&catalog, &cli.filters);
    tracing::debug!(?criteria, "Filter selection");
    let filtered = criteria.apply(&catalog);

    let config = DashboardConfig::new()
        .with_top_n(cli.panels.top_n)
        .with_histogram_bins(cli.panels.bins)
        .with_excluded_country(Some(cli.panels.exclude_country));

    match cli.command {
        Commands::Summary => handle_summary(&catalog, &filtered, &config),
        Commands::Report { json } => handle_report(&filtered, &config, json, outcome.problem.is_some()),
        Commands::Panel { name } => handle_panel(&filtered, &config, name, outcome.problem.is_some()),
        Commands::Titles { limit, json } => handle_titles(&filtered, limit, json),
        Commands::Options => handle_options(&catalog),
    }
}

fn parse_content_type(s: &str) -> std::result::Result<ContentType, String> {
    ContentType::parse(s).ok_or_else(|| {
        let known: Vec<&str> = ContentType::ALL.iter().map(|t| t.label()).collect();
        format!("unknown content type '{s}' (expected one of: {})", known.join(", "))
    })
}

/// Start from "everything selected" and narrow by the flags given
fn build_criteria(catalog: &Catalog, args: &FilterArgs) -> FilterCriteria {
    let mut criteria = FilterCriteria::everything(catalog);
    if !args.types.is_empty() {
        criteria.types = args.types.iter().copied().collect();
    }
    if !args.ratings.is_empty() {
        criteria = criteria.with_ratings(args.ratings.iter().cloned());
    }
    if let Some(year_min) = args.year_min {
        criteria = criteria.with_year_min(year_min);
    }
    if let Some(year_max) = args.year_max {
        criteria = criteria.with_year_max(year_max);
    }
    criteria
}

/// Print the notice shown in place of panels, returning the dashboard if
/// there is one
fn panels_or_notice(filtered: &Catalog, config: &DashboardConfig, load_failed: bool) -> Option<Dashboard> {
    match Dashboard::compute(filtered, config) {
        DashboardView::Panels(dashboard) => Some(*dashboard),
        DashboardView::NoData => {
            if load_failed {
                println!("No data available.");
            } else {
                println!("{}", "⚠ No titles match the selected filters.".yellow());
            }
            None
        }
    }
}

/// Handle the 'summary' command
fn handle_summary(catalog: &Catalog, filtered: &Catalog, config: &DashboardConfig) -> Result<()> {
    print!("{}", render::heading("Catalog"));
    print!("{}", render::load_report(catalog.report()));
    println!();

    if filtered.is_empty() && catalog.is_empty() {
        println!("No data available.");
        return Ok(());
    }
    if filtered.is_empty() {
        println!("{}", "⚠ No titles match the selected filters.".yellow());
        return Ok(());
    }

    let metrics = pipeline::aggregators::summary_metrics(filtered);
    print!("{}", render::heading(Panel::Metrics.title()));
    print!("{}", render::metrics(&metrics));
    println!(
        "  {} top {} groups, {} histogram bins",
        "•".green(),
        config.top_n,
        config.histogram_bins
    );
    Ok(())
}

/// Handle the 'report' command
fn handle_report(filtered: &Catalog, config: &DashboardConfig, json: bool, load_failed: bool) -> Result<()> {
    if json {
        let view = Dashboard::compute(filtered, config);
        let text = serde_json::to_string_pretty(&view).context("Failed to serialize dashboard")?;
        println!("{text}");
        return Ok(());
    }

    if let Some(dashboard) = panels_or_notice(filtered, config, load_failed) {
        print!("{}", render::report(&dashboard));
    }
    Ok(())
}

/// Handle the 'panel' command
fn handle_panel(filtered: &Catalog, config: &DashboardConfig, name: Panel, load_failed: bool) -> Result<()> {
    if let Some(dashboard) = panels_or_notice(filtered, config, load_failed) {
        print!("{}", render::panel(&dashboard, name));
    }
    Ok(())
}

/// Handle the 'titles' command
fn handle_titles(filtered: &Catalog, limit: usize, json: bool) -> Result<()> {
    if json {
        let rows: Vec<_> = filtered.iter().take(limit).collect();
        let text = serde_json::to_string_pretty(&rows).context("Failed to serialize titles")?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "{}",
        format!("{} matching titles", filtered.len()).bold().blue()
    );
    print!("{}", render::titles_table(filtered, limit));
    Ok(())
}

/// Handle the 'options' command
fn handle_options(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        println!("No data available.");
        return Ok(());
    }

    let types: Vec<&str> = catalog.kinds().into_iter().map(|t| t.label()).collect();
    let ratings: Vec<String> = catalog.ratings().into_iter().collect();

    print!("{}", render::heading("Filter options"));
    println!("{}Types:   {}", "• ".green(), types.join(", "));
    println!("{}Ratings: {}", "• ".green(), ratings.join(", "));
    if let Some((min, max)) = catalog.year_bounds() {
        println!("{}Years:   {min} - {max}", "• ".green());
    }
    Ok(())
}
