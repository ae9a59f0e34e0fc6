use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const HOUR: u64 = 3_600;
const DAY: u64 = 24 * HOUR;

/// The ten validation categories, in report order.
///
/// The derived `Ord` follows declaration order, so a `BTreeMap<Category, _>`
/// iterates (and serializes) in the fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ForexRates,
    InflationData,
    UnemploymentData,
    TreasuryYields,
    FedMeetings,
    FedRates,
    RateProbabilities,
    DxyIndex,
    OtherCentralBanks,
    ExpertCitations,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 10] = [
        Category::ForexRates,
        Category::InflationData,
        Category::UnemploymentData,
        Category::TreasuryYields,
        Category::FedMeetings,
        Category::FedRates,
        Category::RateProbabilities,
        Category::DxyIndex,
        Category::OtherCentralBanks,
        Category::ExpertCitations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForexRates => "forex_rates",
            Self::InflationData => "inflation_data",
            Self::UnemploymentData => "unemployment_data",
            Self::TreasuryYields => "treasury_yields",
            Self::FedMeetings => "fed_meetings",
            Self::FedRates => "fed_rates",
            Self::RateProbabilities => "rate_probabilities",
            Self::DxyIndex => "dxy_index",
            Self::OtherCentralBanks => "other_central_banks",
            Self::ExpertCitations => "expert_citations",
        }
    }

    /// How long a fetched reference snapshot stays fresh.
    ///
    /// Fast-moving market quotes expire within hours; published statistics
    /// and calendars are held for a week.
    pub fn default_ttl(&self) -> Duration {
        match self {
            Self::ForexRates | Self::DxyIndex => Duration::from_secs(6 * HOUR),
            Self::TreasuryYields => Duration::from_secs(DAY),
            Self::RateProbabilities => Duration::from_secs(12 * HOUR),
            Self::InflationData
            | Self::UnemploymentData
            | Self::FedMeetings
            | Self::FedRates
            | Self::OtherCentralBanks
            | Self::ExpertCitations => Duration::from_secs(7 * DAY),
        }
    }

    /// Whether this category owns a reference snapshot.
    ///
    /// Expert citations have no snapshot of their own; they cross-check
    /// against the forex and inflation snapshots.
    pub fn has_snapshot(&self) -> bool {
        !matches!(self, Self::ExpertCitations)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
