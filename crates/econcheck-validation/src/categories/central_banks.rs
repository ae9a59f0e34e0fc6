use econcheck_core::models::{
    CategoryReport, ClaimValue, ComparisonOutcome, ExtractedClaim, OtherCentralBanks, PairLevels,
    Unit,
};

use super::numeric_outcome;
use crate::tolerance::{
    absolute_difference, relative_difference_pct, reported, within_absolute,
    within_relative_inclusive, OTHER_BANK_RATE_ABS, USD_CAD_LEVEL_PCT, USD_CAD_TECHNICAL_PCT,
};

/// Meeting dates, policy rates and expected decisions per bank, plus the
/// USD/CAD level and its technical levels.
pub fn validate(claims: &[ExtractedClaim], reference: &OtherCentralBanks) -> CategoryReport {
    let mut report = CategoryReport::new();
    for claim in claims {
        let outcome = if claim.subtype.starts_with("usd_cad_") {
            reference
                .usd_cad
                .as_ref()
                .and_then(|levels| usd_cad(claim, levels))
        } else {
            bank(claim, reference)
        };
        if let Some(outcome) = outcome {
            report.record(outcome);
        }
    }
    report
}

fn bank(claim: &ExtractedClaim, reference: &OtherCentralBanks) -> Option<ComparisonOutcome> {
    let code = claim.subject.as_deref()?;
    let outlook = reference.banks.get(code)?;
    let outcome = match &claim.value {
        ClaimValue::Date { start, .. } => ComparisonOutcome {
            kind: format!("{code}_meeting_date"),
            article_value: start.to_string(),
            current_value: outlook.next_meeting.to_string(),
            is_accurate: *start == outlook.next_meeting,
            difference: None,
            citation: None,
        },
        ClaimValue::Number { value } => numeric_outcome(
            &claim.subtype,
            *value,
            outlook.current_rate,
            Unit::Percent,
            within_absolute(*value, outlook.current_rate, OTHER_BANK_RATE_ABS),
            reported(absolute_difference(*value, outlook.current_rate)),
        ),
        ClaimValue::Decision { decision } => ComparisonOutcome {
            kind: claim.subtype.clone(),
            article_value: decision.clone(),
            current_value: outlook.expected_decision.clone(),
            is_accurate: decision_matches(decision, &outlook.expected_decision),
            difference: None,
            citation: None,
        },
        _ => return None,
    };
    Some(outcome)
}

/// A normalized decision matches when the reference names it, so `cut`
/// matches `cut_25bp`.
pub fn decision_matches(decision: &str, expected: &str) -> bool {
    !decision.is_empty() && expected.to_lowercase().contains(&decision.to_lowercase())
}

fn usd_cad(claim: &ExtractedClaim, levels: &PairLevels) -> Option<ComparisonOutcome> {
    let value = claim.value.as_number()?;
    let (current, limit) = match claim.subtype.as_str() {
        "usd_cad_rate" => (levels.current, USD_CAD_LEVEL_PCT),
        "usd_cad_support" => (levels.support, USD_CAD_TECHNICAL_PCT),
        "usd_cad_resistance" => (levels.resistance, USD_CAD_TECHNICAL_PCT),
        _ => return None,
    };
    Some(numeric_outcome(
        &claim.subtype,
        value,
        current,
        Unit::Rate,
        within_relative_inclusive(value, current, limit),
        reported(relative_difference_pct(value, current)),
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use econcheck_core::models::CentralBankOutlook;
    use econcheck_core::Category;

    use super::*;

    fn reference() -> OtherCentralBanks {
        OtherCentralBanks {
            banks: BTreeMap::from([(
                "boc".to_string(),
                CentralBankOutlook {
                    next_meeting: NaiveDate::from_ymd_opt(2025, 9, 17).unwrap(),
                    current_rate: 2.75,
                    expected_decision: "cut_25bp".into(),
                },
            )]),
            usd_cad: Some(PairLevels {
                current: 1.3839,
                support: 1.379,
                resistance: 1.389,
                date: NaiveDate::from_ymd_opt(2025, 9, 13).unwrap(),
            }),
        }
    }

    fn claim(subtype: &str, subject: &str, value: ClaimValue) -> ExtractedClaim {
        ExtractedClaim {
            category: Category::OtherCentralBanks,
            subtype: subtype.into(),
            subject: Some(subject.into()),
            raw_match: String::new(),
            value,
            unit: Unit::Text,
        }
    }

    fn decision(d: &str) -> ClaimValue {
        ClaimValue::Decision { decision: d.into() }
    }

    #[test]
    fn expected_cut_matches_sized_cut() {
        let report = validate(
            &[
                claim("boc_expected_decision", "boc", decision("cut")),
                claim("boc_expected_decision", "boc", decision("hold")),
            ],
            &reference(),
        );
        let accurate: Vec<bool> = report.details.iter().map(|d| d.is_accurate).collect();
        assert_eq!(accurate, [true, false]);
        assert_eq!(report.details[0].current_value, "cut_25bp");
    }

    #[test]
    fn rate_within_quarter_point() {
        let report = validate(
            &[
                claim("boc_current_rate", "boc", ClaimValue::Number { value: 2.5 }),
                claim("boc_current_rate", "boc", ClaimValue::Number { value: 3.25 }),
            ],
            &reference(),
        );
        assert_eq!((report.metrics_found, report.metrics_accurate), (2, 1));
    }

    #[test]
    fn meeting_date_and_missing_bank() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap();
        let report = validate(
            &[
                claim("boc_meeting_explicit", "boc", ClaimValue::Date { start: day, end: day }),
                claim("rba_current_rate", "rba", ClaimValue::Number { value: 3.6 }),
            ],
            &reference(),
        );
        assert_eq!((report.metrics_found, report.metrics_accurate), (1, 1));
        assert_eq!(report.details[0].kind, "boc_meeting_date");
    }

    #[test]
    fn usd_cad_levels_use_their_own_tolerance() {
        let report = validate(
            &[
                claim("usd_cad_rate", "usd_cad_rate", ClaimValue::Number { value: 1.39 }),
                claim("usd_cad_support", "usd_cad_support", ClaimValue::Number { value: 1.37 }),
            ],
            &reference(),
        );
        let accurate: Vec<bool> = report.details.iter().map(|d| d.is_accurate).collect();
        assert_eq!(accurate, [true, false]);
    }
}
