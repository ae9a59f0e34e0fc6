//! Reference store behavior: TTL refresh, degraded fallbacks, per-category guard.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use econcheck_core::config::SnapshotConfig;
use econcheck_core::errors::{EconResult, SourceError};
use econcheck_core::models::ReferencePayload;
use econcheck_core::traits::{ManualClock, ReferenceDataSource};
use econcheck_core::Category;
use econcheck_snapshot::defaults::builtin_payload;
use econcheck_snapshot::store::{FALLBACK_BUILTIN, FALLBACK_STALE};
use econcheck_snapshot::{FixedSnapshotSource, ReferenceStore};

/// Wraps a fixed source, counts fetches, and can be switched off.
struct CountingSource {
    inner: FixedSnapshotSource,
    calls: AtomicUsize,
    online: std::sync::atomic::AtomicBool,
    delay: Duration,
}

impl CountingSource {
    fn new(inner: FixedSnapshotSource) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            online: std::sync::atomic::AtomicBool::new(true),
            delay: Duration::ZERO,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

impl ReferenceDataSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn fetch(&self, category: Category) -> EconResult<ReferencePayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        if !self.online.load(Ordering::SeqCst) {
            return Err(SourceError::Network {
                reason: "connection refused".into(),
            }
            .into());
        }
        self.inner.fetch(category)
    }
}

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 9, 12, 8, 0, 0).unwrap(),
    ))
}

fn store_with(source: Arc<CountingSource>, clock: Arc<ManualClock>) -> ReferenceStore {
    ReferenceStore::new(source, clock, SnapshotConfig::default())
}

fn shifted_source() -> FixedSnapshotSource {
    FixedSnapshotSource::from_json(&test_fixtures::load_text(test_fixtures::REFERENCE_SHIFTED))
        .unwrap()
}

fn eur_usd(payload: &ReferencePayload) -> f64 {
    payload.as_forex().unwrap().rate_for("EUR/USD").unwrap()
}

// ─── TTL behavior ───

#[test]
fn fresh_snapshot_is_reused_within_ttl() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    let clock = clock();
    let store = store_with(source.clone(), clock.clone());

    store.resolve(Category::ForexRates).unwrap();
    clock.advance(chrono::Duration::hours(5));
    let resolved = store.resolve(Category::ForexRates).unwrap();

    assert_eq!(source.calls(), 1);
    assert!(!resolved.degraded);
}

#[test]
fn expired_snapshot_is_refreshed_before_use() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    let clock = clock();
    let store = store_with(source.clone(), clock.clone());

    assert_eq!(eur_usd(&store.resolve(Category::ForexRates).unwrap().payload), 1.1715);

    // Forex TTL is six hours.
    source
        .inner
        .set(shifted_source().fetch(Category::ForexRates).unwrap());
    clock.advance(chrono::Duration::hours(6));

    let resolved = store.resolve(Category::ForexRates).unwrap();
    assert_eq!(eur_usd(&resolved.payload), 1.0875);
    assert_eq!(source.calls(), 2);
}

#[test]
fn ttl_is_per_category() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    let clock = clock();
    let store = store_with(source.clone(), clock.clone());

    store.resolve(Category::ForexRates).unwrap();
    store.resolve(Category::InflationData).unwrap();
    clock.advance(chrono::Duration::days(1));
    store.resolve(Category::ForexRates).unwrap();
    store.resolve(Category::InflationData).unwrap();

    // Forex expired after 6h, inflation holds for 7 days.
    assert_eq!(source.calls(), 3);
}

#[test]
fn ttl_override_from_config_applies() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    let clock = clock();
    let config = SnapshotConfig {
        ttl_overrides_secs: [("inflation_data".to_string(), 60)].into_iter().collect(),
        ..SnapshotConfig::default()
    };
    let store = ReferenceStore::new(source.clone(), clock.clone(), config);

    store.resolve(Category::InflationData).unwrap();
    clock.advance(chrono::Duration::seconds(61));
    store.resolve(Category::InflationData).unwrap();
    assert_eq!(source.calls(), 2);
}

// ─── Degraded fallbacks ───

#[test]
fn failed_first_fetch_serves_builtin_default() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::empty()));
    source.set_online(false);
    let store = store_with(source, clock());

    let resolved = store.resolve(Category::TreasuryYields).unwrap();
    assert!(resolved.degraded);
    assert_eq!(
        *resolved.payload,
        builtin_payload(Category::TreasuryYields).unwrap()
    );
    assert!(store.is_degraded(Category::TreasuryYields));
    assert_eq!(store.degradations()[0].event.fallback_used, FALLBACK_BUILTIN);
}

#[test]
fn failed_refresh_serves_last_good_snapshot() {
    let source = Arc::new(CountingSource::new(shifted_source()));
    let clock = clock();
    let store = store_with(source.clone(), clock.clone());

    store.resolve(Category::ForexRates).unwrap();
    source.set_online(false);
    clock.advance(chrono::Duration::hours(7));

    let resolved = store.resolve(Category::ForexRates).unwrap();
    assert!(resolved.degraded);
    // The stale shifted snapshot wins over the built-in default.
    assert_eq!(eur_usd(&resolved.payload), 1.0875);
    assert_eq!(store.degradations()[0].event.fallback_used, FALLBACK_STALE);
}

#[test]
fn recovery_clears_degraded_flag() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    source.set_online(false);
    let store = store_with(source.clone(), clock());

    assert!(store.resolve(Category::DxyIndex).unwrap().degraded);
    source.set_online(true);
    assert!(!store.resolve(Category::DxyIndex).unwrap().degraded);
    assert!(!store.is_degraded(Category::DxyIndex));
}

#[test]
fn persistent_failure_records_one_degradation() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    source.set_online(false);
    let clock = clock();
    let store = store_with(source.clone(), clock.clone());

    for _ in 0..50 {
        assert!(store.resolve(Category::ForexRates).unwrap().degraded);
        clock.advance(chrono::Duration::minutes(1));
    }

    assert!(source.calls() >= 50);
    assert_eq!(store.degradations().len(), 1);
    assert_eq!(store.active_degradations().len(), 1);
    assert_eq!(
        store.degraded_for(Category::ForexRates),
        Some(chrono::Duration::minutes(50))
    );
}

#[test]
fn each_outage_is_recorded_once() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    let clock = clock();
    let store = store_with(source.clone(), clock.clone());

    for _ in 0..2 {
        source.set_online(false);
        store.resolve(Category::DxyIndex).unwrap();
        store.resolve(Category::DxyIndex).unwrap();
        source.set_online(true);
        store.resolve(Category::DxyIndex).unwrap();
        // Past the six hour DXY TTL.
        clock.advance(chrono::Duration::hours(7));
    }

    assert_eq!(store.degradations().len(), 2);
    assert!(store.active_degradations().is_empty());
    assert_eq!(store.degraded_for(Category::DxyIndex), None);
    assert_eq!(
        store.recent_degradations(Category::DxyIndex, chrono::Duration::hours(8)),
        1
    );
    assert_eq!(
        store.recent_degradations(Category::DxyIndex, chrono::Duration::days(1)),
        2
    );
}

#[test]
fn expert_citations_have_no_snapshot() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    let store = store_with(source.clone(), clock());
    assert!(store.resolve(Category::ExpertCitations).is_none());
    assert_eq!(source.calls(), 0);
}

// ─── Concurrency ───

#[test]
fn concurrent_stale_readers_trigger_one_fetch() {
    let mut inner = CountingSource::new(FixedSnapshotSource::builtin());
    inner.delay = Duration::from_millis(50);
    let source = Arc::new(inner);
    let store = Arc::new(store_with(source.clone(), clock()));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                store.resolve(Category::FedRates).unwrap().degraded
            })
        })
        .collect();

    for handle in handles {
        assert!(!handle.join().unwrap());
    }
    assert_eq!(source.calls(), 1);
}

#[test]
fn categories_refresh_independently() {
    let source = Arc::new(CountingSource::new(FixedSnapshotSource::builtin()));
    let store = Arc::new(store_with(source.clone(), clock()));

    std::thread::scope(|scope| {
        for category in Category::ALL {
            let store = &store;
            scope.spawn(move || store.resolve(category));
        }
    });
    assert_eq!(source.calls(), 9);
    assert_eq!(store.cache().len(), 9);
}
