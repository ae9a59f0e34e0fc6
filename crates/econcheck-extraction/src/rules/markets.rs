//! Forex pairs, treasury yields and the dollar index.

use econcheck_core::models::Unit;

use super::{RuleSpec, ValueParser};
use crate::forex::PAIRS;

const FOREX_LEAD: &str = r"(?:\s+(?:at|trading\s+at|around|near|approximately|about|close\s+to|current|price|rate|level|quote|value|stands\s+at|is\s+at))?";

/// A number followed by `%`, `correlation` or `basis` is not a quote.
const FOREX_REJECT: &str = r"(?P<reject>\s*(?:%|correlation|basis))?";

pub(super) fn forex() -> Vec<RuleSpec> {
    let mut specs: Vec<RuleSpec> = PAIRS
        .iter()
        .map(|pair| {
            let number = if pair.label == "USD/JPY" {
                r"\d{3}(?:\.\d{1,2})?"
            } else {
                r"\d+\.\d{1,4}"
            };
            let pattern = format!(
                r"(?i){}{FOREX_LEAD}\s+(?P<value>{number})\b{FOREX_REJECT}",
                regex::escape(pair.label)
            );
            RuleSpec::new(pair.label, pattern, ValueParser::Decimal, Unit::Rate)
                .subject(pair.label)
                .plausible(pair.low, pair.high)
        })
        .collect();

    // `Current Price: 1.0875 |` style table cells; the pair comes from context.
    specs.push(
        RuleSpec::new(
            "forex_context",
            r"(?i)(?:Current\s+Price|Price|Rate|Trading\s+at|Level):\s*(?:\*\*)?(?P<value>\d+\.\d{4}|\d{3}(?:\.\d{1,2})?)(?:\*\*)?\s*(?:\||for\s+(?P<pair>EUR/USD|GBP/USD|USD/JPY))",
            ValueParser::Decimal,
            Unit::Rate,
        )
        .forex_pair(),
    );
    specs
}

pub(super) fn treasury() -> Vec<RuleSpec> {
    [("10Y", "10"), ("2Y", "2"), ("30Y", "30")]
        .into_iter()
        .map(|(tenor, years)| {
            let pattern = format!(
                r"(?i)\b{years}[- ]?(?:years?|ans)\b[^%\n]{{0,60}}?(?P<value>\d+(?:[.,]\d+)?)\s*%"
            );
            RuleSpec::new(tenor, pattern, ValueParser::Decimal, Unit::Percent)
                .subject(tenor)
                .plausible(0.0, 20.0)
        })
        .collect()
}

pub(super) fn dollar_index() -> Vec<RuleSpec> {
    const NAME: &str = r"(?i)\b(?:USD\s+index|Dollar\s+index|DXY)";
    const LEVEL: &str = r"\d{2,3}(?:\.\d+)?";
    vec![
        RuleSpec::new(
            "dxy_range",
            format!(
                r"{NAME}(?:\s+(?:trading|fluctuating|moving))?\s+(?:between|from|in\s+a\s+range\s+of)\s+(?P<low>{LEVEL})(?:\s*[-–—]\s*|\s+and\s+|\s+to\s+)(?P<high>{LEVEL})\b"
            ),
            ValueParser::Range,
            Unit::IndexPoints,
        ),
        RuleSpec::new(
            "dxy_index",
            format!(
                r"{NAME}(?:\s+(?:at|of|around|near|approximately|about|close\s+to|trading\s+at))?\s+(?P<value>{LEVEL})\b"
            ),
            ValueParser::Decimal,
            Unit::IndexPoints,
        )
        .plausible(50.0, 200.0),
    ]
}
