use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Spot rates keyed by pair label, e.g. `"EUR/USD" -> 1.1715`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForexRates {
    pub rates: BTreeMap<String, f64>,
}

impl ForexRates {
    /// Rate for a pair, falling back to the inverse of the flipped pair.
    pub fn rate_for(&self, pair: &str) -> Option<f64> {
        if let Some(rate) = self.rates.get(pair) {
            return Some(*rate);
        }
        let (base, quote) = pair.split_once('/')?;
        let inverse = format!("{quote}/{base}");
        self.rates
            .get(&inverse)
            .filter(|r| **r != 0.0)
            .map(|r| 1.0 / r)
    }
}

/// Latest CPI readings, in percent year over year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationData {
    pub cpi_headline: f64,
    pub cpi_core: f64,
}

impl InflationData {
    /// `(subtype, value)` pairs in a stable order.
    pub fn metrics(&self) -> [(&'static str, f64); 2] {
        [("cpi_headline", self.cpi_headline), ("cpi_core", self.cpi_core)]
    }

    pub fn get(&self, subtype: &str) -> Option<f64> {
        self.metrics()
            .into_iter()
            .find(|(name, _)| *name == subtype)
            .map(|(_, v)| v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnemploymentData {
    /// Percent of the labor force.
    pub unemployment_rate: f64,
    /// Weekly initial jobless claims.
    pub initial_claims: f64,
}

/// Treasury yields by tenor label (`"2Y"`, `"10Y"`, `"30Y"`), in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasuryYields {
    pub yields: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FedMeeting {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub decision_time: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FedMeetings {
    pub meetings: Vec<FedMeeting>,
}

/// Federal funds target range and effective rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FedRates {
    pub lower: f64,
    pub upper: f64,
    pub effective_rate: f64,
    pub last_change: NaiveDate,
}

/// Market-implied decision probabilities per bank code (`"fed"`, `"boc"`),
/// keyed by bucket (`"hike"`, `"hold"`, `"cut_25bp"`, `"cut_50bp"`), in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateProbabilities {
    pub banks: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RateProbabilities {
    pub fn bucket(&self, bank: &str, bucket: &str) -> Option<f64> {
        self.banks.get(bank)?.get(bucket).copied()
    }

    /// Sum of every cut-size bucket for a bank.
    pub fn cut_total(&self, bank: &str) -> Option<f64> {
        let buckets = self.banks.get(bank)?;
        let cuts: Vec<f64> = buckets
            .iter()
            .filter(|(k, _)| k.starts_with("cut"))
            .map(|(_, v)| *v)
            .collect();
        if cuts.is_empty() {
            None
        } else {
            Some(cuts.iter().sum())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DollarIndex {
    pub current: f64,
    pub date: NaiveDate,
}

/// Next meeting, policy rate and consensus decision for a non-Fed central bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralBankOutlook {
    pub next_meeting: NaiveDate,
    pub current_rate: f64,
    /// e.g. `"cut_25bp"`, `"hold"`.
    pub expected_decision: String,
}

/// Spot level with technical support and resistance for one pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairLevels {
    pub current: f64,
    pub support: f64,
    pub resistance: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherCentralBanks {
    /// Keyed by bank code (`"boc"`, `"ecb"`, `"boe"`).
    pub banks: BTreeMap<String, CentralBankOutlook>,
    #[serde(default)]
    pub usd_cad: Option<PairLevels>,
}

/// A category-specific reference payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ReferencePayload {
    Forex(ForexRates),
    Inflation(InflationData),
    Unemployment(UnemploymentData),
    Treasury(TreasuryYields),
    FedMeetings(FedMeetings),
    FedRates(FedRates),
    RateProbabilities(RateProbabilities),
    DollarIndex(DollarIndex),
    CentralBanks(OtherCentralBanks),
}

impl ReferencePayload {
    /// The category this payload serves.
    pub fn category(&self) -> Category {
        match self {
            Self::Forex(_) => Category::ForexRates,
            Self::Inflation(_) => Category::InflationData,
            Self::Unemployment(_) => Category::UnemploymentData,
            Self::Treasury(_) => Category::TreasuryYields,
            Self::FedMeetings(_) => Category::FedMeetings,
            Self::FedRates(_) => Category::FedRates,
            Self::RateProbabilities(_) => Category::RateProbabilities,
            Self::DollarIndex(_) => Category::DxyIndex,
            Self::CentralBanks(_) => Category::OtherCentralBanks,
        }
    }

    pub fn as_forex(&self) -> Option<&ForexRates> {
        match self {
            Self::Forex(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_inflation(&self) -> Option<&InflationData> {
        match self {
            Self::Inflation(p) => Some(p),
            _ => None,
        }
    }
}

/// One immutable fetched payload. Refresh replaces the whole snapshot.
/// Clones share the payload.
#[derive(Debug, Clone)]
pub struct ReferenceSnapshot {
    pub category: Category,
    pub payload: Arc<ReferencePayload>,
    pub fetched_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl ReferenceSnapshot {
    pub fn new(payload: ReferencePayload, fetched_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            category: payload.category(),
            payload: Arc::new(payload),
            fetched_at,
            ttl,
        }
    }

    /// Valid only while `now - fetched_at < ttl`. A clock that moved
    /// backwards counts as zero elapsed time.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        let elapsed = (now - self.fetched_at).to_std().unwrap_or(Duration::ZERO);
        elapsed < self.ttl
    }
}
