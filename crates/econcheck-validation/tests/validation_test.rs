//! End-to-end validation through the engine: accuracy per category,
//! snapshot refresh, degraded sources and report determinism.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use econcheck_core::config::EconConfig;
use econcheck_core::models::{ForexRates, ReferencePayload, ValidationReport};
use econcheck_core::traits::ManualClock;
use econcheck_core::Category;
use econcheck_snapshot::FixedSnapshotSource;
use econcheck_validation::ValidationEngine;
use test_fixtures::{load_text, REFERENCE_2025_09, REFERENCE_SHIFTED};

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 12, 12, 0, 0).unwrap()
}

fn engine_with(source: Arc<FixedSnapshotSource>, clock: Arc<ManualClock>) -> ValidationEngine {
    ValidationEngine::builder()
        .source(source)
        .clock(clock)
        .build()
        .unwrap()
}

fn engine() -> ValidationEngine {
    let source = FixedSnapshotSource::from_json(&load_text(REFERENCE_2025_09)).unwrap();
    engine_with(Arc::new(source), Arc::new(ManualClock::new(noon())))
}

fn counts(report: &ValidationReport, category: Category) -> (usize, usize) {
    let r = report.category(category).unwrap();
    (r.metrics_found, r.metrics_accurate)
}

const ARTICLE: &str = "\
EUR/USD at 1.1715 after the data. GBP/USD trading at 1.3530 and USD/JPY at 147.50.
Headline CPI at 2.9% while core inflation remains elevated at 3.1%.
The unemployment rate rose to 4.3%, and initial jobless claims came in at 263,000.
The 10-year Treasury yield sits at 4.08% with the 2-year at 3.55%.
The FOMC meeting on September 16-17 follows a Fed rate range of 4.25-4.50%.
The probability of a 25bp cut is 80%. DXY at 97.61.
BoC is expected to lower its interest rate at the Bank of Canada meeting on October 29.";

const TABLE_ROW: &str = "Current Price: 1.0875 | GBP/USD Current Price: 1.2680 | 10-year Treasury yield currently trades at 4.35%";

// ─── Single Claims ───────────────────────────────────────────────────────────

#[test]
fn exact_forex_quote_is_accurate() {
    let report = engine().validate("EUR/USD at 1.1715");
    assert_eq!(counts(&report, Category::ForexRates), (1, 1));
    assert_eq!(report.overall_accuracy, 100.0);
}

#[test]
fn distant_forex_quote_is_inaccurate() {
    let report = engine().validate("EUR/USD at 1.2000");
    assert_eq!(counts(&report, Category::ForexRates), (1, 0));
    let detail = &report.category(Category::ForexRates).unwrap().details[0];
    assert_eq!(detail.kind, "EUR/USD");
    assert_eq!(detail.article_value, "1.2");
    assert_eq!(detail.current_value, "1.1715");
    assert_eq!(report.overall_accuracy, 0.0);
}

#[test]
fn fed_range_matches_both_bounds() {
    let engine = engine();
    let hit = engine.validate("Fed rate range of 4.25-4.50%");
    assert_eq!(counts(&hit, Category::FedRates), (1, 1));
    let miss = engine.validate("Fed rate range of 4.00-4.25%");
    assert_eq!(counts(&miss, Category::FedRates), (1, 0));
}

#[test]
fn boc_lower_matches_quarter_point_cut() {
    let report = engine().validate("BoC is expected to lower its interest rate");
    assert_eq!(counts(&report, Category::OtherCentralBanks), (1, 1));
    let detail = &report.category(Category::OtherCentralBanks).unwrap().details[0];
    assert_eq!(detail.article_value, "cut");
    assert_eq!(detail.current_value, "cut_25bp");
}

#[test]
fn paraphrased_expert_quote_is_accurate() {
    let text = "According to Adam Button, \u{201c}The Fed faces its most complex policy environment since 2020, balancing persistent inflation against growth concerns.\u{201d}";
    let report = engine().validate(text);
    assert_eq!(counts(&report, Category::ExpertCitations), (1, 1));
    let detail = report.category(Category::ExpertCitations).unwrap().details[0]
        .citation
        .clone()
        .unwrap();
    assert_eq!(detail.expert, "Adam Button");
    assert_eq!(detail.organization, "ForexLive");
    assert_eq!(detail.contains_current_data, Some(false));
    assert!(detail.similarity_score.unwrap() > 0.5);
}

// ─── Full Articles ───────────────────────────────────────────────────────────

#[test]
fn full_article_per_category() {
    let report = engine().validate(ARTICLE);
    let expected = [
        (Category::ForexRates, (3, 3)),
        (Category::InflationData, (2, 2)),
        (Category::UnemploymentData, (2, 1)),
        (Category::TreasuryYields, (2, 1)),
        (Category::FedMeetings, (1, 1)),
        (Category::FedRates, (1, 1)),
        (Category::RateProbabilities, (1, 1)),
        (Category::DxyIndex, (1, 1)),
        (Category::OtherCentralBanks, (2, 1)),
        (Category::ExpertCitations, (0, 0)),
    ];
    for (category, want) in expected {
        assert_eq!(counts(&report, category), want, "{category}");
    }
    assert_eq!(report.total_found(), 15);
    assert_eq!(report.total_accurate(), 12);
    assert_eq!(report.overall_accuracy, 80.0);
}

#[test]
fn table_row_against_september_reference_fails_everything() {
    let report = engine().validate(TABLE_ROW);
    assert_eq!(counts(&report, Category::ForexRates), (2, 0));
    assert_eq!(counts(&report, Category::TreasuryYields), (1, 0));
    assert_eq!(report.total_found(), 3);
    assert_eq!(report.overall_accuracy, 0.0);
}

#[test]
fn table_row_against_shifted_reference_passes() {
    let source = FixedSnapshotSource::from_json(&load_text(REFERENCE_SHIFTED)).unwrap();
    let engine = engine_with(Arc::new(source), Arc::new(ManualClock::new(noon())));
    let report = engine.validate(TABLE_ROW);
    assert_eq!(counts(&report, Category::ForexRates), (2, 2));
    assert_eq!(counts(&report, Category::TreasuryYields), (1, 1));
    assert_eq!(report.overall_accuracy, 100.0);
}

#[test]
fn text_without_claims_scores_zero() {
    let report = engine().validate("Markets were quiet over the holiday weekend.");
    assert_eq!(report.total_found(), 0);
    assert_eq!(report.overall_accuracy, 0.0);
    assert_eq!(report.categories.len(), 10);
}

// ─── Snapshots ───────────────────────────────────────────────────────────────

#[test]
fn snapshot_refreshes_only_after_ttl() {
    let source = Arc::new(FixedSnapshotSource::builtin());
    let clock = Arc::new(ManualClock::new(noon()));
    let engine = engine_with(Arc::clone(&source), Arc::clone(&clock));
    let text = "EUR/USD at 1.0875";

    assert_eq!(counts(&engine.validate(text), Category::ForexRates), (1, 0));

    source.set(ReferencePayload::Forex(ForexRates {
        rates: BTreeMap::from([("EUR/USD".to_string(), 1.0875)]),
    }));
    clock.advance(Duration::hours(5));
    assert_eq!(counts(&engine.validate(text), Category::ForexRates), (1, 0));

    clock.advance(Duration::hours(1));
    assert_eq!(counts(&engine.validate(text), Category::ForexRates), (1, 1));
}

#[test]
fn failing_source_degrades_but_still_validates() {
    let engine = engine_with(
        Arc::new(FixedSnapshotSource::empty()),
        Arc::new(ManualClock::new(noon())),
    );
    let report = engine.validate("EUR/USD at 1.1715");
    assert_eq!(counts(&report, Category::ForexRates), (1, 1));
    assert_eq!(report.degraded_categories(), Category::ALL.to_vec());
    assert!(engine.store().is_degraded(Category::ForexRates));
}

#[test]
fn repeated_validation_against_failing_source_keeps_one_event_per_category() {
    let clock = Arc::new(ManualClock::new(noon()));
    let engine = engine_with(Arc::new(FixedSnapshotSource::empty()), clock.clone());
    for _ in 0..25 {
        engine.validate(ARTICLE);
        clock.advance(Duration::minutes(10));
    }
    assert_eq!(engine.store().degradations().len(), 9);
    assert_eq!(engine.store().active_degradations().len(), 9);
    assert_eq!(
        engine.store().degraded_for(Category::InflationData),
        Some(Duration::minutes(250))
    );
}

#[test]
fn citations_inherit_forex_degradation() {
    let source = Arc::new(FixedSnapshotSource::builtin());
    source.remove(Category::ForexRates);
    let engine = engine_with(source, Arc::new(ManualClock::new(noon())));
    let report = engine.validate("");
    assert_eq!(
        report.degraded_categories(),
        vec![Category::ForexRates, Category::ExpertCitations]
    );
}

// ─── Determinism ─────────────────────────────────────────────────────────────

#[test]
fn identical_runs_serialize_identically() {
    let engine = engine();
    let first = serde_json::to_string(&engine.validate(ARTICLE)).unwrap();
    let second = serde_json::to_string(&engine.validate(ARTICLE)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_and_sequential_reports_agree() {
    let mut config = EconConfig::default();
    config.validation.parallel_categories = true;
    let parallel = ValidationEngine::builder()
        .source(Arc::new(FixedSnapshotSource::builtin()))
        .clock(Arc::new(ManualClock::new(noon())))
        .config(config)
        .build()
        .unwrap();
    assert_eq!(
        serde_json::to_string(&parallel.validate(ARTICLE)).unwrap(),
        serde_json::to_string(&engine().validate(ARTICLE)).unwrap()
    );
}

#[test]
fn report_serializes_every_category() {
    let json = serde_json::to_value(engine().validate(ARTICLE)).unwrap();
    let categories = json["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 10);
    assert!(categories.contains_key("expert_citations"));
    assert_eq!(json["overall_accuracy"], 80.0);
    assert_eq!(json["categories"]["forex_rates"]["details"][0]["type"], "EUR/USD");
    assert_eq!(json["categories"]["forex_rates"]["degraded"], false);
}
