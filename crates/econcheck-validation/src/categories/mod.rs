//! Per-category comparison of extracted claims against a reference payload.
//!
//! Each validator takes the deduplicated claims and the category payload
//! and records one outcome per claim it can check. A claim with no
//! matching reference entry is dropped without counting.

pub mod central_banks;
pub mod dollar_index;
pub mod fed_meetings;
pub mod fed_rates;
pub mod forex;
pub mod inflation;
pub mod probabilities;
pub mod treasury;
pub mod unemployment;

use econcheck_core::models::{
    CategoryReport, ClaimValue, ComparisonOutcome, ExtractedClaim, ReferencePayload, Unit,
};
use econcheck_core::Category;

/// Run the validator for `category`. A payload of the wrong kind yields an
/// empty report.
pub fn compare(
    category: Category,
    claims: &[ExtractedClaim],
    payload: &ReferencePayload,
) -> CategoryReport {
    match (category, payload) {
        (Category::ForexRates, ReferencePayload::Forex(p)) => forex::validate(claims, p),
        (Category::InflationData, ReferencePayload::Inflation(p)) => inflation::validate(claims, p),
        (Category::UnemploymentData, ReferencePayload::Unemployment(p)) => {
            unemployment::validate(claims, p)
        }
        (Category::TreasuryYields, ReferencePayload::Treasury(p)) => treasury::validate(claims, p),
        (Category::FedMeetings, ReferencePayload::FedMeetings(p)) => {
            fed_meetings::validate(claims, p)
        }
        (Category::FedRates, ReferencePayload::FedRates(p)) => fed_rates::validate(claims, p),
        (Category::RateProbabilities, ReferencePayload::RateProbabilities(p)) => {
            probabilities::validate(claims, p)
        }
        (Category::DxyIndex, ReferencePayload::DollarIndex(p)) => dollar_index::validate(claims, p),
        (Category::OtherCentralBanks, ReferencePayload::CentralBanks(p)) => {
            central_banks::validate(claims, p)
        }
        (category, payload) => {
            tracing::warn!(
                category = %category,
                payload = %payload.category(),
                "reference payload does not match category"
            );
            CategoryReport::new()
        }
    }
}

/// Display form of a value in its unit: `2.9%`, `1.1715`.
pub(crate) fn display(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Percent => format!("{value}%"),
        _ => format!("{value}"),
    }
}

pub(crate) fn display_range(low: f64, high: f64, unit: Unit) -> String {
    match unit {
        Unit::Percent => format!("{low}-{high}%"),
        _ => format!("{low}-{high}"),
    }
}

/// Outcome for a plain numeric claim.
pub(crate) fn numeric_outcome(
    kind: &str,
    article: f64,
    reference: f64,
    unit: Unit,
    is_accurate: bool,
    difference: Option<f64>,
) -> ComparisonOutcome {
    ComparisonOutcome {
        kind: kind.to_string(),
        article_value: display(article, unit),
        current_value: display(reference, unit),
        is_accurate,
        difference,
        citation: None,
    }
}

/// The numeric value of a claim, if it has one.
pub(crate) fn number(claim: &ExtractedClaim) -> Option<f64> {
    match claim.value {
        ClaimValue::Number { value } => Some(value),
        _ => None,
    }
}
