use econcheck_core::models::{CategoryReport, ExtractedClaim, InflationData, Unit};

use super::{number, numeric_outcome};
use crate::tolerance::{absolute_difference, reported, within_absolute, MACRO_RATE_ABS};

pub fn validate(claims: &[ExtractedClaim], reference: &InflationData) -> CategoryReport {
    let mut report = CategoryReport::new();
    for claim in claims {
        let (Some(article), Some(current)) = (number(claim), reference.get(&claim.subtype)) else {
            continue;
        };
        report.record(numeric_outcome(
            &claim.subtype,
            article,
            current,
            Unit::Percent,
            within_absolute(article, current, MACRO_RATE_ABS),
            reported(absolute_difference(article, current)),
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use econcheck_core::models::ClaimValue;
    use econcheck_core::Category;

    use super::*;

    fn cpi(subtype: &str, value: f64) -> ExtractedClaim {
        ExtractedClaim {
            category: Category::InflationData,
            subtype: subtype.to_string(),
            subject: None,
            raw_match: String::new(),
            value: ClaimValue::Number { value },
            unit: Unit::Percent,
        }
    }

    #[test]
    fn tenth_of_a_point_is_tolerated() {
        let reference = InflationData {
            cpi_headline: 2.9,
            cpi_core: 3.1,
        };
        let report = validate(
            &[cpi("cpi_headline", 3.0), cpi("cpi_core", 3.3), cpi("cpi_other", 3.1)],
            &reference,
        );
        assert_eq!((report.metrics_found, report.metrics_accurate), (2, 1));
        assert_eq!(report.details[0].article_value, "3%");
        assert_eq!(report.details[1].difference, Some(0.2));
    }
}
