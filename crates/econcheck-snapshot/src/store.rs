//! Category-level reference resolution with degraded fallbacks.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Duration;
use econcheck_core::config::SnapshotConfig;
use econcheck_core::errors::EconError;
use econcheck_core::models::{DegradationEvent, ReferencePayload};
use econcheck_core::traits::{Clock, ReferenceDataSource};
use econcheck_core::Category;
use econcheck_observability::degradation::{DegradationTracker, TrackedDegradation};
use econcheck_observability::tracing_setup::events;

use crate::cache::{CacheLookup, SnapshotCache};
use crate::defaults;

pub const FALLBACK_STALE: &str = "stale_snapshot";
pub const FALLBACK_BUILTIN: &str = "builtin_default";

/// A payload ready for comparison.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub payload: Arc<ReferencePayload>,
    /// True when served from a stale snapshot or the built-in defaults.
    pub degraded: bool,
}

/// Read-through reference store shared by all validators.
///
/// `resolve` never fails for a category that owns a snapshot: a failed
/// refresh serves the last good snapshot, or the built-in payload when
/// nothing was ever fetched, and marks the result degraded.
pub struct ReferenceStore {
    source: Arc<dyn ReferenceDataSource>,
    cache: SnapshotCache,
    clock: Arc<dyn Clock>,
    config: SnapshotConfig,
    degradations: Mutex<DegradationTracker>,
}

impl ReferenceStore {
    pub fn new(
        source: Arc<dyn ReferenceDataSource>,
        clock: Arc<dyn Clock>,
        config: SnapshotConfig,
    ) -> Self {
        Self {
            source,
            cache: SnapshotCache::new(Arc::clone(&clock)),
            clock,
            config,
            degradations: Mutex::new(DegradationTracker::new()),
        }
    }

    /// Payload for `category`, refreshing the snapshot first if it expired.
    /// `None` only for categories without a snapshot of their own.
    pub fn resolve(&self, category: Category) -> Option<Resolved> {
        if !category.has_snapshot() {
            return None;
        }
        let ttl = self.config.ttl_for(category);
        let lookup = self
            .cache
            .get_or_refresh(category, ttl, || self.source.fetch(category));

        match lookup {
            CacheLookup::Hit(snapshot) => {
                events::snapshot_hit(category);
                Some(Resolved {
                    payload: snapshot.payload,
                    degraded: false,
                })
            }
            CacheLookup::Refreshed(snapshot) => {
                events::snapshot_refreshed(category, self.source.name());
                self.recovered(category);
                Some(Resolved {
                    payload: snapshot.payload,
                    degraded: false,
                })
            }
            CacheLookup::Stale { snapshot, error } => {
                self.degraded(category, &error, FALLBACK_STALE);
                Some(Resolved {
                    payload: snapshot.payload,
                    degraded: true,
                })
            }
            CacheLookup::Miss { error } => {
                self.degraded(category, &error, FALLBACK_BUILTIN);
                defaults::builtin_payload(category).map(|payload| Resolved {
                    payload: Arc::new(payload),
                    degraded: true,
                })
            }
        }
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Every degradation recorded so far, one per healthy to degraded
    /// transition.
    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker().events().to_vec()
    }

    /// Degradations not yet closed by a successful refresh.
    pub fn active_degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker()
            .active_degradations()
            .into_iter()
            .cloned()
            .collect()
    }

    /// How long `category` has been served from fallback data.
    pub fn degraded_for(&self, category: Category) -> Option<Duration> {
        self.tracker()
            .degraded_duration(category.as_str(), self.clock.now())
    }

    /// Times `category` went degraded within the trailing `window`.
    pub fn recent_degradations(&self, category: Category, window: Duration) -> usize {
        self.tracker()
            .count_recent(category.as_str(), window, self.clock.now())
    }

    /// Whether a category is currently served from fallback data.
    pub fn is_degraded(&self, category: Category) -> bool {
        self.tracker().is_degraded(category.as_str())
    }

    fn tracker(&self) -> std::sync::MutexGuard<'_, DegradationTracker> {
        self.degradations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Logs every failed refresh. Records only the transition into degraded.
    fn degraded(&self, category: Category, error: &EconError, fallback: &str) {
        let failure = error.to_string();
        events::fetch_failed(category, self.source.name(), &failure);
        let mut tracker = self.tracker();
        if tracker.is_degraded(category.as_str()) {
            return;
        }
        tracker.record(DegradationEvent {
            component: category.as_str().to_string(),
            failure,
            fallback_used: fallback.to_string(),
            timestamp: self.clock.now(),
        });
    }

    fn recovered(&self, category: Category) {
        let mut tracker = self.tracker();
        if tracker.is_degraded(category.as_str()) {
            tracker.mark_recovered(category.as_str(), self.clock.now());
        }
    }
}
