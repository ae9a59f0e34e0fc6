use econcheck_core::models::{CategoryReport, ExtractedClaim, ForexRates, Unit};

use super::{number, numeric_outcome};
use crate::tolerance::{relative_difference_pct, reported, within_relative, FOREX_RELATIVE_PCT};

/// Each quote against the reference rate for its pair; the inverse pair
/// is used when only that one is on file.
pub fn validate(claims: &[ExtractedClaim], reference: &ForexRates) -> CategoryReport {
    let mut report = CategoryReport::new();
    for claim in claims {
        let Some(article) = number(claim) else { continue };
        let Some(current) = reference.rate_for(&claim.subtype) else {
            continue;
        };
        report.record(numeric_outcome(
            &claim.subtype,
            article,
            current,
            Unit::Rate,
            within_relative(article, current, FOREX_RELATIVE_PCT),
            reported(relative_difference_pct(article, current)),
        ));
    }
    report
}
