//! Built-in reference payloads, served when a category has never been
//! fetched successfully. Values are the September 2025 reference set.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use econcheck_core::models::{
    CentralBankOutlook, DollarIndex, FedMeeting, FedMeetings, FedRates, ForexRates,
    InflationData, OtherCentralBanks, PairLevels, RateProbabilities, ReferencePayload,
    TreasuryYields, UnemploymentData,
};
use econcheck_core::Category;

fn buckets(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn outlook(next_meeting: NaiveDate, current_rate: f64, decision: &str) -> CentralBankOutlook {
    CentralBankOutlook {
        next_meeting,
        current_rate,
        expected_decision: decision.to_string(),
    }
}

/// Built-in payload for a category. `None` for categories without a snapshot.
pub fn builtin_payload(category: Category) -> Option<ReferencePayload> {
    let date = NaiveDate::from_ymd_opt;
    let payload = match category {
        Category::ForexRates => ReferencePayload::Forex(ForexRates {
            rates: buckets(&[("EUR/USD", 1.1715), ("GBP/USD", 1.353), ("USD/JPY", 147.45)]),
        }),
        Category::InflationData => ReferencePayload::Inflation(InflationData {
            cpi_headline: 2.9,
            cpi_core: 3.1,
        }),
        Category::UnemploymentData => ReferencePayload::Unemployment(UnemploymentData {
            unemployment_rate: 4.3,
            initial_claims: 240_500.0,
        }),
        Category::TreasuryYields => ReferencePayload::Treasury(TreasuryYields {
            yields: buckets(&[("2Y", 3.85), ("10Y", 4.08), ("30Y", 4.32)]),
        }),
        Category::FedMeetings => ReferencePayload::FedMeetings(FedMeetings {
            meetings: vec![FedMeeting {
                start_date: date(2025, 9, 16)?,
                end_date: date(2025, 9, 17)?,
                decision_time: "14:00 ET".to_string(),
                kind: "Regular".to_string(),
            }],
        }),
        Category::FedRates => ReferencePayload::FedRates(FedRates {
            lower: 4.25,
            upper: 4.50,
            effective_rate: 4.33,
            last_change: date(2025, 1, 15)?,
        }),
        Category::RateProbabilities => ReferencePayload::RateProbabilities(RateProbabilities {
            banks: BTreeMap::from([
                (
                    "fed".to_string(),
                    buckets(&[("hike", 0.0), ("hold", 15.0), ("cut_25bp", 80.0), ("cut_50bp", 5.0)]),
                ),
                (
                    "boc".to_string(),
                    buckets(&[("hike", 0.0), ("hold", 30.0), ("cut_25bp", 70.0)]),
                ),
            ]),
        }),
        Category::DxyIndex => ReferencePayload::DollarIndex(DollarIndex {
            current: 97.61,
            date: date(2025, 9, 12)?,
        }),
        Category::OtherCentralBanks => ReferencePayload::CentralBanks(OtherCentralBanks {
            banks: BTreeMap::from([
                ("boc".to_string(), outlook(date(2025, 9, 17)?, 2.75, "cut_25bp")),
                ("ecb".to_string(), outlook(date(2025, 9, 18)?, 3.50, "hold")),
                ("boe".to_string(), outlook(date(2025, 9, 19)?, 4.00, "hold")),
            ]),
            usd_cad: Some(PairLevels {
                current: 1.3839,
                support: 1.379,
                resistance: 1.389,
                date: date(2025, 9, 13)?,
            }),
        }),
        Category::ExpertCitations => return None,
    };
    Some(payload)
}

/// Every built-in payload, in report order.
pub fn builtin_payloads() -> Vec<ReferencePayload> {
    Category::ALL
        .iter()
        .filter_map(|c| builtin_payload(*c))
        .collect()
}
