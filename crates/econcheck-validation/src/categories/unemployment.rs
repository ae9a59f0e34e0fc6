use econcheck_core::models::{CategoryReport, ExtractedClaim, UnemploymentData, Unit};

use super::{number, numeric_outcome};
use crate::tolerance::{
    absolute_difference, relative_difference_pct, reported, within_absolute, within_relative,
    CLAIMS_RELATIVE_PCT, MACRO_RATE_ABS,
};

/// The rate is checked in percentage points, jobless claims relative to
/// the reported count.
pub fn validate(claims: &[ExtractedClaim], reference: &UnemploymentData) -> CategoryReport {
    let mut report = CategoryReport::new();
    for claim in claims {
        let Some(article) = number(claim) else { continue };
        let outcome = match claim.subtype.as_str() {
            "unemployment_rate" => {
                let current = reference.unemployment_rate;
                numeric_outcome(
                    &claim.subtype,
                    article,
                    current,
                    Unit::Percent,
                    within_absolute(article, current, MACRO_RATE_ABS),
                    reported(absolute_difference(article, current)),
                )
            }
            "initial_claims" => {
                let current = reference.initial_claims;
                numeric_outcome(
                    &claim.subtype,
                    article,
                    current,
                    Unit::Count,
                    within_relative(article, current, CLAIMS_RELATIVE_PCT),
                    reported(relative_difference_pct(article, current)),
                )
            }
            _ => continue,
        };
        report.record(outcome);
    }
    report
}
