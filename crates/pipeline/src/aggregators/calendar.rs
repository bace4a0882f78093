//! Aggregators over the date a title was added.
//!
//! Titles whose `date_added` could not be parsed are left out here and
//! nowhere else.

use super::summaries::{Heatmap, MonthCount};
use data_loader::{Catalog, MONTH_NAMES};
use std::collections::BTreeMap;

/// Titles added per calendar month, January first. Months without
/// additions are omitted.
pub fn monthly_additions(catalog: &Catalog) -> Vec<MonthCount> {
    let mut counts = [0usize; 12];
    for month in catalog.iter().filter_map(|t| t.month_added()) {
        counts[(month - 1) as usize] += 1;
    }

    counts
        .iter()
        .zip(MONTH_NAMES)
        .enumerate()
        .filter(|(_, (count, _))| **count > 0)
        .map(|(i, (&count, name))| MonthCount {
            month: i as u32 + 1,
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Year × month addition counts. Years ascending, all twelve months in
/// calendar order, missing combinations zero.
pub fn year_month_heatmap(catalog: &Catalog) -> Heatmap {
    let mut grid: BTreeMap<i32, [usize; 12]> = BTreeMap::new();
    for title in catalog {
        if let (Some(year), Some(month)) = (title.year_added(), title.month_added()) {
            grid.entry(year).or_insert([0; 12])[(month - 1) as usize] += 1;
        }
    }

    if grid.is_empty() {
        return Heatmap::default();
    }

    Heatmap {
        years: grid.keys().copied().collect(),
        months: MONTH_NAMES.iter().map(|m| m.to_string()).collect(),
        counts: grid.into_values().map(|row| row.to_vec()).collect(),
    }
}
