//! Inflation and labor market figures.

use econcheck_core::models::Unit;

use super::{RuleSpec, ValueParser};

const VERB: &str = r"(?:of|at|is|was|stands\s+at|reached|hit)";
const PCT: &str = r"(?:\*\*)?(?P<value>\d+[.,]\d+)(?:\*\*)?\s*%";
/// `2.9% increase` describes a change, not a level.
const CHANGE_REJECT: &str = r"(?P<reject>\s*(?:increase|decrease|change))?";
const READING: &str = r"(?:\s+(?:rate|figure|data|reading))?";
const FOR_MONTH: &str = r"(?:\s+for\s+[a-z]+(?:\s+\d{4})?)?";

fn inflation_rule(subtype: &str, pattern: String) -> RuleSpec {
    RuleSpec::new(subtype, pattern, ValueParser::Decimal, Unit::Percent).plausible(0.0, 20.0)
}

/// Most specific first; the bare `inflation ...` rule must stay last so a
/// core figure is claimed by a core rule before it.
pub(super) fn inflation() -> Vec<RuleSpec> {
    let labelled = |label: &str| {
        format!(
            r"(?i)\b{label}(?:\s+\(?YoY\)?)?(?:\s+rate)?:?\s*(?:{VERB}\s*)?{PCT}{CHANGE_REJECT}"
        )
    };
    vec![
        inflation_rule(
            "cpi_headline",
            labelled(r"(?:headline\s+(?:CPI|inflation)|CPI\s+headline|inflation\s+headline)"),
        ),
        inflation_rule(
            "cpi_core",
            labelled(r"(?:core\s+(?:CPI|inflation)|CPI\s+core|inflation\s+core)"),
        ),
        inflation_rule(
            "cpi_headline",
            format!(r"(?i)\bheadline\s+inflation{READING}\s*(?:{VERB}\s*)?{PCT}"),
        ),
        inflation_rule(
            "cpi_core",
            format!(r"(?i)\bcore\s+inflation{READING}\s*(?:{VERB}\s*)?{PCT}"),
        ),
        inflation_rule(
            "cpi_core",
            format!(r"(?i)\bcore\s+CPI{READING}{FOR_MONTH}\s*(?:{VERB}\s*)?{PCT}"),
        ),
        inflation_rule(
            "cpi_core",
            format!(
                r"(?i)\bcore\s+(?:inflation|CPI)\s+(?:remains|stays)(?:\s+elevated)?\s+(?:at|near)\s+{PCT}"
            ),
        ),
        inflation_rule(
            "cpi_headline",
            format!(r"(?i)\binflation\s+persisting\s+near\s+{PCT}"),
        ),
        inflation_rule(
            "cpi_headline",
            format!(r"(?i)\binflation{READING}{FOR_MONTH}\s+(?:{VERB}\s*)?{PCT}"),
        ),
    ]
}

pub(super) fn unemployment() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(
            "unemployment_rate",
            r"(?i)\b(?:unemployment|chômage)\b[^%\n]{0,60}?(?P<value>\d+(?:[.,]\d+)?)\s*%",
            ValueParser::Decimal,
            Unit::Percent,
        )
        .own_subject()
        .plausible(0.0, 30.0),
        RuleSpec::new(
            "initial_claims",
            r"(?i)\b(?:initial\s+(?:jobless\s+)?claims|demandes\s+initiales)\D{0,40}?(?P<value>\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)(?P<scale>\s*(?:k\b|thousand))?",
            ValueParser::Count,
            Unit::Count,
        )
        .own_subject(),
    ]
}
