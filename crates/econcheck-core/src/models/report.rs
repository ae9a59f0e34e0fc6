use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CategoryReport;
use crate::category::Category;

/// The full result of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// One entry per category, serialized in report order.
    pub categories: BTreeMap<Category, CategoryReport>,
    /// `100 * accurate / found` across all categories, one decimal.
    pub overall_accuracy: f64,
    pub timestamp: DateTime<Utc>,
}

impl ValidationReport {
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.get(&category)
    }

    pub fn total_found(&self) -> usize {
        self.categories.values().map(|r| r.metrics_found).sum()
    }

    pub fn total_accurate(&self) -> usize {
        self.categories.values().map(|r| r.metrics_accurate).sum()
    }

    /// Categories checked against stale or built-in data rather than a fresh fetch.
    pub fn degraded_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|(_, r)| r.degraded)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Whether the report clears a publishing threshold (percent).
    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.overall_accuracy >= threshold
    }
}
