use serde::{Deserialize, Serialize};

/// Citation-specific fields attached to an outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationDetail {
    pub expert: String,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_similar_known_quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_current_data: Option<bool>,
}

/// Result of comparing one accepted claim against its reference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    /// Detail type, e.g. `"EUR/USD"`, `"fed_rate_range"`, `"expert_citation"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub article_value: String,
    pub current_value: String,
    pub is_accurate: bool,
    /// Absolute or relative distance from the reference, rounded to 2 decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<CitationDetail>,
}

/// Per-category tally plus the ordered outcome list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub metrics_found: usize,
    pub metrics_accurate: usize,
    /// Set when the reference data behind this category could not be refreshed.
    pub degraded: bool,
    pub details: Vec<ComparisonOutcome>,
}

impl CategoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A report for a category whose reference data was unusable.
    pub fn degraded() -> Self {
        Self {
            degraded: true,
            ..Self::default()
        }
    }

    /// Count one outcome. The only way counts change, so
    /// `metrics_accurate <= metrics_found` always holds.
    pub fn record(&mut self, outcome: ComparisonOutcome) {
        self.metrics_found += 1;
        if outcome.is_accurate {
            self.metrics_accurate += 1;
        }
        self.details.push(outcome);
    }

    /// Category accuracy in percent, `None` when nothing was found.
    pub fn accuracy(&self) -> Option<f64> {
        if self.metrics_found == 0 {
            None
        } else {
            Some(self.metrics_accurate as f64 / self.metrics_found as f64 * 100.0)
        }
    }
}
