use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::category::Category;
use crate::constants::MAX_FETCH_TIMEOUT_SECS;

/// Reference snapshot store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Per-category TTL overrides (seconds). Key is the category name.
    pub ttl_overrides_secs: BTreeMap<String, u64>,
    /// Timeout for a single reference fetch, clamped to 10s.
    pub fetch_timeout_secs: u64,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            ttl_overrides_secs: BTreeMap::new(),
            fetch_timeout_secs: defaults::DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl SnapshotConfig {
    /// Effective TTL for a category: override if present, else the category default.
    pub fn ttl_for(&self, category: Category) -> Duration {
        self.ttl_overrides_secs
            .get(category.as_str())
            .map(|secs| Duration::from_secs(*secs))
            .unwrap_or_else(|| category.default_ttl())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.clamp(1, MAX_FETCH_TIMEOUT_SECS))
    }
}
