//! Folds category reports into the final validation report.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use econcheck_core::models::{CategoryReport, ValidationReport};
use econcheck_core::Category;

use crate::tolerance::round1;

/// `100 * accurate / found` over every category, one decimal. Zero when
/// nothing was found.
pub fn overall_accuracy(categories: &BTreeMap<Category, CategoryReport>) -> f64 {
    let found: usize = categories.values().map(|r| r.metrics_found).sum();
    let accurate: usize = categories.values().map(|r| r.metrics_accurate).sum();
    if found == 0 {
        return 0.0;
    }
    round1(accurate as f64 / found as f64 * 100.0)
}

/// Build the report. Categories missing from the input get an empty entry,
/// so a report always lists all ten.
pub fn aggregate(
    categories: impl IntoIterator<Item = (Category, CategoryReport)>,
    timestamp: DateTime<Utc>,
) -> ValidationReport {
    let mut map: BTreeMap<Category, CategoryReport> = categories.into_iter().collect();
    for category in Category::ALL {
        map.entry(category).or_default();
    }
    ValidationReport {
        overall_accuracy: overall_accuracy(&map),
        categories: map,
        timestamp,
    }
}
