use econcheck_core::models::{CategoryReport, ExtractedClaim, TreasuryYields, Unit};

use super::{number, numeric_outcome};
use crate::tolerance::{absolute_difference, reported, within_absolute, TREASURY_ABS};

/// Yields by tenor, within 0.15 percentage points.
pub fn validate(claims: &[ExtractedClaim], reference: &TreasuryYields) -> CategoryReport {
    let mut report = CategoryReport::new();
    for claim in claims {
        let (Some(article), Some(current)) = (number(claim), reference.yields.get(&claim.subtype))
        else {
            continue;
        };
        report.record(numeric_outcome(
            &claim.subtype,
            article,
            *current,
            Unit::Percent,
            within_absolute(article, *current, TREASURY_ABS),
            reported(absolute_difference(article, *current)),
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use econcheck_core::models::ClaimValue;
    use econcheck_core::Category;

    use super::*;

    #[test]
    fn ten_year_outside_tolerance() {
        let reference = TreasuryYields {
            yields: BTreeMap::from([("10Y".to_string(), 4.08)]),
        };
        let claim = ExtractedClaim {
            category: Category::TreasuryYields,
            subtype: "10Y".into(),
            subject: Some("10Y".into()),
            raw_match: "10-year Treasury yield currently trades at 4.35%".into(),
            value: ClaimValue::Number { value: 4.35 },
            unit: Unit::Percent,
        };
        let report = validate(&[claim], &reference);
        assert_eq!((report.metrics_found, report.metrics_accurate), (1, 0));
        assert_eq!(report.details[0].difference, Some(0.27));
        assert_eq!(report.details[0].current_value, "4.08%");
    }
}
