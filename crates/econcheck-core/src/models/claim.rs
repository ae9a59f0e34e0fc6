use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Unit of an extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Exchange rate quote.
    Rate,
    Percent,
    Count,
    IndexPoints,
    Date,
    Decision,
    Text,
}

/// The parsed value of a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ClaimValue {
    Number { value: f64 },
    Range { low: f64, high: f64 },
    /// A resolved calendar date, or a multi-day meeting span.
    Date { start: NaiveDate, end: NaiveDate },
    /// A normalized policy decision: `"cut"`, `"hold"` or `"hike"`.
    Decision { decision: String },
    Quote {
        speaker: String,
        organization: Option<String>,
        text: String,
    },
    Mention { speaker: String },
}

impl ClaimValue {
    /// Canonical text for deduplication. Formatting through `f64` collapses
    /// `4.50` and `4.5` to the same key.
    pub fn normalized(&self) -> String {
        match self {
            Self::Number { value } => format!("{value}"),
            Self::Range { low, high } => format!("{low}-{high}"),
            Self::Date { start, end } => format!("{start}/{end}"),
            Self::Decision { decision } => decision.clone(),
            Self::Quote { speaker, text, .. } => {
                format!("{}:{}", speaker.to_lowercase(), text.to_lowercase())
            }
            Self::Mention { speaker } => format!("mention:{}", speaker.to_lowercase()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number { value } => Some(*value),
            _ => None,
        }
    }
}

/// A typed candidate claim pulled from the text. Lives for one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedClaim {
    pub category: Category,
    /// Rule-specific subtype, e.g. `"EUR/USD"`, `"cpi_core"`, `"boc_current_rate"`.
    pub subtype: String,
    /// What the value is about when a category covers several instruments or
    /// banks, e.g. `"EUR/USD"`, `"10Y"`, `"boc"`. Part of the dedup key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// The matched text, trimmed.
    pub raw_match: String,
    pub value: ClaimValue,
    pub unit: Unit,
}

impl ExtractedClaim {
    /// The value normalized together with its subject, so `EUR/USD 1.17`
    /// and `GBP/USD 1.17` stay distinct.
    pub fn normalized_value(&self) -> String {
        match &self.subject {
            Some(subject) => format!("{}:{}", subject.to_lowercase(), self.value.normalized()),
            None => self.value.normalized(),
        }
    }

    /// Dedup key: one claim per `(category, normalized value)`.
    pub fn dedup_key(&self) -> (Category, String) {
        (self.category, self.normalized_value())
    }
}
