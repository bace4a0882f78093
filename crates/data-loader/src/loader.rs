//! Reading a catalog file from disk.
//!
//! `Catalog::from_path` is the uncached entry point. Most callers go
//! through [`crate::CatalogCache`] instead, which memoizes per path and
//! degrades failures to an empty catalog.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::Catalog;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, instrument};

impl Catalog {
    /// Load and clean a catalog CSV.
    ///
    /// Steps:
    /// 1. Open the file (a missing file is `DataLoadError::FileNotFound`)
    /// 2. Parse and clean every row
    /// 3. Log the row accounting
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DataLoadError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                DataLoadError::IoError(e)
            }
        })?;

        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let (titles, report) = parser::parse_titles(BufReader::new(file), &source)?;

        info!(
            "Loaded {} titles from {} ({} rows, {} dropped for missing fields, {} malformed, {} unparsed dates)",
            titles.len(),
            source,
            report.rows_read,
            report.dropped_missing,
            report.rejected_malformed,
            report.unparsed_dates
        );

        Ok(Catalog::with_report(titles, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Catalog::from_path(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("here.csv"));
    }

    #[test]
    fn test_load_from_path() {
        let path = write_temp_csv(
            "loader-basic.csv",
            "type,rating,release_year,date_added,country,director,cast,listed_in,duration\n\
             Movie,PG,2020,\"January 15, 2020\",,,,\"Drama, Action\",90 min\n\
             TV Show,TV-MA,2019,\"June 1, 2019\",,,,Comedy,2 Seasons\n",
        );

        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.report().rows_read, 2);
        assert_eq!(catalog.year_bounds(), Some((2019, 2020)));

        std::fs::remove_file(path).ok();
    }
}
