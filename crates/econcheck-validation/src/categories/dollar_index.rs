use econcheck_core::models::{
    CategoryReport, ClaimValue, ComparisonOutcome, DollarIndex, ExtractedClaim, Unit,
};

use super::{display_range, numeric_outcome};
use crate::tolerance::{
    range_contains, relative_difference_pct, reported, within_relative, DXY_RELATIVE_PCT,
};

/// A level within 1% of the index, or a range that contains it.
pub fn validate(claims: &[ExtractedClaim], reference: &DollarIndex) -> CategoryReport {
    let mut report = CategoryReport::new();
    let current = reference.current;
    for claim in claims {
        let outcome = match claim.value {
            ClaimValue::Number { value } => numeric_outcome(
                &claim.subtype,
                value,
                current,
                Unit::IndexPoints,
                within_relative(value, current, DXY_RELATIVE_PCT),
                reported(relative_difference_pct(value, current)),
            ),
            ClaimValue::Range { low, high } => ComparisonOutcome {
                kind: claim.subtype.clone(),
                article_value: display_range(low, high, Unit::IndexPoints),
                current_value: format!("{current}"),
                is_accurate: range_contains(low, high, current),
                difference: None,
                citation: None,
            },
            _ => continue,
        };
        report.record(outcome);
    }
    report
}
