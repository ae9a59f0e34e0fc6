//! Per-category snapshot cache with a guarded check-then-refresh.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use dashmap::DashMap;
use econcheck_core::errors::{EconError, EconResult, SourceError};
use econcheck_core::models::{ReferencePayload, ReferenceSnapshot};
use econcheck_core::traits::Clock;
use econcheck_core::Category;

type Slot = Arc<Mutex<Option<ReferenceSnapshot>>>;

/// Outcome of a `get_or_refresh` call.
#[derive(Debug)]
pub enum CacheLookup {
    /// Served an unexpired snapshot without fetching.
    Hit(ReferenceSnapshot),
    /// Fetched and stored a new snapshot.
    Refreshed(ReferenceSnapshot),
    /// The fetch failed; the expired snapshot is still available.
    Stale {
        snapshot: ReferenceSnapshot,
        error: EconError,
    },
    /// The fetch failed and nothing was ever cached.
    Miss { error: EconError },
}

impl CacheLookup {
    pub fn snapshot(&self) -> Option<&ReferenceSnapshot> {
        match self {
            Self::Hit(s) | Self::Refreshed(s) | Self::Stale { snapshot: s, .. } => Some(s),
            Self::Miss { .. } => None,
        }
    }
}

/// One slot per category. The slot mutex is held across the freshness check
/// and the fetch, so concurrent callers that see the same expired entry
/// trigger a single fetch. Categories never block each other.
pub struct SnapshotCache {
    slots: DashMap<Category, Slot>,
    clock: Arc<dyn Clock>,
}

impl SnapshotCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            slots: DashMap::new(),
            clock,
        }
    }

    fn slot(&self, key: Category) -> Slot {
        // Clone the Arc out so the shard lock is released before locking the slot.
        Arc::clone(&*self.slots.entry(key).or_default())
    }

    /// Return the cached snapshot for `key` if it is younger than `ttl`,
    /// otherwise call `fetch` and store its payload stamped with the clock.
    pub fn get_or_refresh<F>(&self, key: Category, ttl: Duration, fetch: F) -> CacheLookup
    where
        F: FnOnce() -> EconResult<ReferencePayload>,
    {
        let slot = self.slot(key);
        let mut entry = slot.lock().unwrap_or_else(PoisonError::into_inner);

        let now = self.clock.now();
        if let Some(snapshot) = entry.as_ref() {
            if snapshot.ttl == ttl && snapshot.is_fresh(now) {
                return CacheLookup::Hit(snapshot.clone());
            }
        }

        let fetched = fetch().and_then(|payload| {
            if payload.category() == key {
                Ok(payload)
            } else {
                Err(SourceError::CategoryMismatch {
                    expected: key,
                    actual: payload.category(),
                }
                .into())
            }
        });

        match fetched {
            Ok(payload) => {
                let snapshot = ReferenceSnapshot::new(payload, self.clock.now(), ttl);
                *entry = Some(snapshot.clone());
                CacheLookup::Refreshed(snapshot)
            }
            Err(error) => match entry.as_ref() {
                Some(snapshot) => CacheLookup::Stale {
                    snapshot: snapshot.clone(),
                    error,
                },
                None => CacheLookup::Miss { error },
            },
        }
    }

    /// Current entry for `key`, fresh or not, without fetching.
    pub fn peek(&self, key: Category) -> Option<ReferenceSnapshot> {
        let slot = self.slots.get(&key).map(|s| Arc::clone(&*s))?;
        let entry = slot.lock().unwrap_or_else(PoisonError::into_inner);
        entry.clone()
    }

    /// Drop the entry for `key`; the next lookup fetches.
    pub fn invalidate(&self, key: Category) {
        if let Some(slot) = self.slots.get(&key).map(|s| Arc::clone(&*s)) {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }
    }

    /// Number of categories holding a snapshot.
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| {
                s.value()
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .is_some()
            })
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::{TimeZone, Utc};
    use econcheck_core::models::DollarIndex;
    use econcheck_core::traits::ManualClock;

    use super::*;

    fn dxy(level: f64) -> ReferencePayload {
        ReferencePayload::DollarIndex(DollarIndex {
            current: level,
            date: chrono::NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
        })
    }

    fn setup() -> (Arc<ManualClock>, SnapshotCache) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 9, 12, 8, 0, 0).unwrap(),
        ));
        let cache = SnapshotCache::new(clock.clone());
        (clock, cache)
    }

    #[test]
    fn second_lookup_within_ttl_is_a_hit() {
        let (_, cache) = setup();
        let calls = Cell::new(0);
        let ttl = Duration::from_secs(60);
        let fetch = || {
            calls.set(calls.get() + 1);
            Ok(dxy(97.61))
        };
        assert!(matches!(
            cache.get_or_refresh(Category::DxyIndex, ttl, fetch),
            CacheLookup::Refreshed(_)
        ));
        assert!(matches!(
            cache.get_or_refresh(Category::DxyIndex, ttl, fetch),
            CacheLookup::Hit(_)
        ));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn expired_entry_is_refetched() {
        let (clock, cache) = setup();
        let ttl = Duration::from_secs(60);
        cache.get_or_refresh(Category::DxyIndex, ttl, || Ok(dxy(97.61)));
        clock.advance(chrono::Duration::seconds(60));
        let lookup = cache.get_or_refresh(Category::DxyIndex, ttl, || Ok(dxy(98.0)));
        assert!(matches!(lookup, CacheLookup::Refreshed(_)));
        assert_eq!(
            *lookup.snapshot().unwrap().payload,
            dxy(98.0),
            "expired snapshot must not be reused"
        );
    }

    #[test]
    fn failed_refresh_keeps_stale_snapshot() {
        let (clock, cache) = setup();
        let ttl = Duration::from_secs(60);
        cache.get_or_refresh(Category::DxyIndex, ttl, || Ok(dxy(97.61)));
        clock.advance(chrono::Duration::hours(1));
        let lookup = cache.get_or_refresh(Category::DxyIndex, ttl, || {
            Err(SourceError::Network {
                reason: "down".into(),
            }
            .into())
        });
        match lookup {
            CacheLookup::Stale { snapshot, .. } => assert_eq!(*snapshot.payload, dxy(97.61)),
            other => panic!("expected stale, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let (_, cache) = setup();
        let lookup = cache.get_or_refresh(Category::ForexRates, Duration::from_secs(60), || {
            Ok(dxy(97.61))
        });
        assert!(matches!(lookup, CacheLookup::Miss { .. }));
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_forces_refetch() {
        let (_, cache) = setup();
        let ttl = Duration::from_secs(60);
        cache.get_or_refresh(Category::DxyIndex, ttl, || Ok(dxy(97.61)));
        assert_eq!(cache.len(), 1);
        cache.invalidate(Category::DxyIndex);
        assert!(cache.peek(Category::DxyIndex).is_none());
        assert!(matches!(
            cache.get_or_refresh(Category::DxyIndex, ttl, || Ok(dxy(97.61))),
            CacheLookup::Refreshed(_)
        ));
    }
}
