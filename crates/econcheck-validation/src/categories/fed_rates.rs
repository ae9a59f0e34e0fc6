use econcheck_core::models::{
    CategoryReport, ClaimValue, ComparisonOutcome, ExtractedClaim, FedRates, Unit,
};

use super::{display, display_range, numeric_outcome};
use crate::tolerance::{
    absolute_difference, range_matches, reported, within_absolute, POLICY_RANGE_ABS,
    POLICY_RATE_ABS,
};

/// Ranges must match both target bounds; single and effective rates are
/// checked against the effective rate, labelled as such in the detail.
pub fn validate(claims: &[ExtractedClaim], reference: &FedRates) -> CategoryReport {
    let mut report = CategoryReport::new();
    for claim in claims {
        let outcome = match claim.value {
            ClaimValue::Range { low, high } => ComparisonOutcome {
                kind: claim.subtype.clone(),
                article_value: display_range(low, high, Unit::Percent),
                current_value: display_range(reference.lower, reference.upper, Unit::Percent),
                is_accurate: range_matches(
                    low,
                    high,
                    reference.lower,
                    reference.upper,
                    POLICY_RANGE_ABS,
                ),
                difference: reported(
                    absolute_difference(low, reference.lower)
                        .max(absolute_difference(high, reference.upper)),
                ),
                citation: None,
            },
            ClaimValue::Number { value } => ComparisonOutcome {
                current_value: effective_label(reference.effective_rate),
                ..numeric_outcome(
                    &claim.subtype,
                    value,
                    reference.effective_rate,
                    Unit::Percent,
                    within_absolute(value, reference.effective_rate, POLICY_RATE_ABS),
                    reported(absolute_difference(value, reference.effective_rate)),
                )
            },
            _ => continue,
        };
        report.record(outcome);
    }
    report
}

fn effective_label(rate: f64) -> String {
    format!("{} (effective)", display(rate, Unit::Percent))
}
