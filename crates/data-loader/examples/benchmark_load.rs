use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "netflix_titles.csv".to_string());

    println!("Loading catalog from {path}...\n");

    let start = Instant::now();
    let catalog = Catalog::from_path(Path::new(&path)).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let report = catalog.report();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Rows read: {}", report.rows_read);
    println!("Titles kept: {}", catalog.len());
    println!("Dropped (missing fields): {}", report.dropped_missing);
    println!("Rejected (malformed): {}", report.rejected_malformed);
    println!("Unparsed dates: {}", report.unparsed_dates);
    println!("\nPerformance: {:.0} rows/second",
             report.rows_read as f64 / elapsed.as_secs_f64());
}
