//! The generic rule-driven extractor.

use std::collections::HashSet;

use chrono::NaiveDate;
use econcheck_core::models::{ClaimValue, ExtractedClaim};
use econcheck_core::Category;
use regex::Captures;

use crate::dates::{month_to_number, resolve_date, YearPolicy};
use crate::forex::attribute_pair;
use crate::parse::{normalize_decision, parse_count, parse_decimal};
use crate::rules::{ExtractionRule, Subject, ValueParser, RULE_TABLE};

/// Per-pass inputs that are not part of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Anchors dates written without a year.
    pub today: NaiveDate,
    pub year_policy: YearPolicy,
}

impl ExtractionOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            year_policy: YearPolicy::default(),
        }
    }

    pub fn with_year_policy(mut self, year_policy: YearPolicy) -> Self {
        self.year_policy = year_policy;
        self
    }
}

/// Run every rule of `category` over `text` and return the deduplicated
/// claims, in rule order then text order.
pub fn extract(category: Category, text: &str, options: &ExtractionOptions) -> Vec<ExtractedClaim> {
    let mut claims = Vec::new();
    for rule in RULE_TABLE.rules(category) {
        for caps in rule.regex.captures_iter(text) {
            if caps.name("reject").is_some() {
                continue;
            }
            if let Some(claim) = build_claim(rule, &caps, text, options) {
                claims.push(claim);
            }
        }
    }
    let found = claims.len();
    let claims = dedup(claims);
    tracing::debug!(
        category = %category,
        matched = found,
        kept = claims.len(),
        "claims extracted"
    );
    claims
}

/// Keep the first claim for each `(category, normalized value)` key.
pub fn dedup(claims: Vec<ExtractedClaim>) -> Vec<ExtractedClaim> {
    let mut seen = HashSet::new();
    claims
        .into_iter()
        .filter(|c| seen.insert(c.dedup_key()))
        .collect()
}

fn build_claim(
    rule: &ExtractionRule,
    caps: &Captures<'_>,
    text: &str,
    options: &ExtractionOptions,
) -> Option<ExtractedClaim> {
    let whole = caps.get(0)?;
    let group = |name: &str| caps.name(name).map(|m| m.as_str());

    let value = match rule.parser {
        ValueParser::Decimal => {
            let v = parse_decimal(group("value")?)?;
            rule.accepts(v).then_some(ClaimValue::Number { value: v })?
        }
        ValueParser::Count => {
            let v = parse_count(group("value")?, group("scale"))?;
            rule.accepts(v).then_some(ClaimValue::Number { value: v })?
        }
        ValueParser::Range => {
            let a = parse_decimal(group("low")?)?;
            let b = parse_decimal(group("high")?)?;
            if !(rule.accepts(a) && rule.accepts(b)) {
                return None;
            }
            ClaimValue::Range {
                low: a.min(b),
                high: a.max(b),
            }
        }
        ValueParser::DateSpan => {
            let start = date_from(caps, "day", options)?;
            let end = match group("day2") {
                Some(_) => date_from(caps, "day2", options)?,
                None => start,
            };
            if end < start {
                return None;
            }
            ClaimValue::Date { start, end }
        }
        ValueParser::SingleDate => {
            let day = date_from(caps, "day", options)?;
            ClaimValue::Date { start: day, end: day }
        }
        ValueParser::Decision => ClaimValue::Decision {
            decision: normalize_decision(group("decision")?)?.to_string(),
        },
    };

    let (subtype, subject) = match &rule.subject {
        Subject::Category => (rule.subtype.clone(), None),
        Subject::Fixed(subject) => (rule.subtype.clone(), Some(subject.clone())),
        Subject::ForexPair => {
            let pair = attribute_pair(text, whole.start(), group("pair"), value.as_number()?)?;
            (pair.label.to_string(), Some(pair.label.to_string()))
        }
    };

    Some(ExtractedClaim {
        category: rule.category,
        subtype,
        subject,
        raw_match: whole.as_str().trim().to_string(),
        value,
        unit: rule.unit,
    })
}

fn date_from(caps: &Captures<'_>, day_group: &str, options: &ExtractionOptions) -> Option<NaiveDate> {
    let day = caps.name(day_group)?.as_str().parse::<u32>().ok()?;
    let month = month_to_number(caps.name("month")?.as_str())?;
    let year = caps
        .name("year")
        .and_then(|m| m.as_str().parse::<i32>().ok());
    resolve_date(day, month, year, options.today, options.year_policy)
}
