use econcheck_core::models::{CategoryReport, ExtractedClaim, RateProbabilities, Unit};

use super::{number, numeric_outcome};
use crate::tolerance::{absolute_difference, reported, within_absolute, PROBABILITY_ABS};

/// Split `fed_prob_cut_25bp` into `("fed", "cut_25bp")`.
pub fn parse_subtype(subtype: &str) -> Option<(&str, &str)> {
    subtype.split_once("_prob_")
}

/// Reference probability for a bucket. A bare `cut` is the sum of every
/// cut-size bucket.
pub fn reference_for(reference: &RateProbabilities, bank: &str, bucket: &str) -> Option<f64> {
    if bucket == "cut" {
        reference.cut_total(bank)
    } else {
        reference.bucket(bank, bucket)
    }
}

pub fn validate(claims: &[ExtractedClaim], reference: &RateProbabilities) -> CategoryReport {
    let mut report = CategoryReport::new();
    for claim in claims {
        let Some(article) = number(claim) else { continue };
        let Some(current) = parse_subtype(&claim.subtype)
            .and_then(|(bank, bucket)| reference_for(reference, bank, bucket))
        else {
            continue;
        };
        report.record(numeric_outcome(
            &claim.subtype,
            article,
            current,
            Unit::Percent,
            within_absolute(article, current, PROBABILITY_ABS),
            reported(absolute_difference(article, current)),
        ));
    }
    report
}
