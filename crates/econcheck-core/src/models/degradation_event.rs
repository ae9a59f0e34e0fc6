use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single fallback taken because reference data could not be refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    /// Usually a category name, e.g. `"forex_rates"`.
    pub component: String,
    pub failure: String,
    /// `"stale_snapshot"` or `"builtin_default"`.
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
