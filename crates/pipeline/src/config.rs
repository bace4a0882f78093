//! Tunables shared by the aggregators.

use serde::Serialize;

/// Number of groups kept by the top-N panels
pub const DEFAULT_TOP_N: usize = 10;

/// Bucket count of the movie duration histogram
pub const DEFAULT_HISTOGRAM_BINS: usize = 40;

/// Upper bound on histogram bins; larger requests are capped
pub const MAX_HISTOGRAM_BINS: usize = 1_000;

/// Country left out of the top-countries panel so the long tail is visible
pub const DEFAULT_EXCLUDED_COUNTRY: &str = "United States";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardConfig {
    /// Groups kept by top-N panels (genres, people, countries, genre crosstabs)
    pub top_n: usize,
    /// Equal-width bins in the movie duration histogram
    pub histogram_bins: usize,
    /// Country excluded from the top-countries panel, if any
    pub excluded_country: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            excluded_country: Some(DEFAULT_EXCLUDED_COUNTRY.to_string()),
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the top-N cutoff (default: 10)
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Configure the histogram bucket count (default: 40)
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// Configure the excluded country; `None` or a blank name disables the
    /// exclusion (default: "United States")
    pub fn with_excluded_country<S: Into<String>>(mut self, country: Option<S>) -> Self {
        self.excluded_country = country
            .map(Into::into)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.histogram_bins, 40);
        assert_eq!(config.excluded_country.as_deref(), Some("United States"));
    }

    #[test]
    fn test_blank_excluded_country_disables_exclusion() {
        let config = DashboardConfig::new().with_excluded_country(Some("  "));
        assert_eq!(config.excluded_country, None);

        let config = DashboardConfig::new().with_excluded_country(Some(" India "));
        assert_eq!(config.excluded_country.as_deref(), Some("India"));

        let config = DashboardConfig::new().with_excluded_country(None::<String>);
        assert_eq!(config.excluded_country, None);
    }
}
