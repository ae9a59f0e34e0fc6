use serde::{Deserialize, Serialize};

use super::defaults;

/// Validation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// When true, a year written next to a meeting date is honored.
    /// When false, every date resolves against the current calendar year.
    pub strict_year_validation: bool,
    /// Quote similarity above which a known expert's citation is accurate.
    pub similarity_threshold: f64,
    /// Run the ten category validators on the rayon pool.
    pub parallel_categories: bool,
    /// Overall accuracy a report must reach to be publishable.
    pub publish_threshold: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_year_validation: defaults::DEFAULT_STRICT_YEAR_VALIDATION,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            parallel_categories: defaults::DEFAULT_PARALLEL_CATEGORIES,
            publish_threshold: defaults::DEFAULT_PUBLISH_THRESHOLD,
        }
    }
}
