//! The declarative rule table: `Category -> [ExtractionRule]`.
//!
//! Patterns use named groups that the generic extractor understands:
//! `value`, `low`/`high`, `day`/`day2`/`month`/`year`, `decision`, `pair`,
//! `scale`. A match whose `reject` group participates is discarded; this
//! stands in for negative lookahead, which the regex engine lacks.
//!
//! Within a category, rules run in table order and the first claim for a
//! dedup key wins, so specific rules come before generic ones.

mod central_banks;
mod macro_data;
mod markets;
mod policy;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use econcheck_core::models::Unit;
use econcheck_core::Category;
use regex::Regex;

/// How matched groups become a claim value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueParser {
    /// `value` as a decimal.
    Decimal,
    /// `value` as a count, scaled by `scale`.
    Count,
    /// `low` and `high` as decimals.
    Range,
    /// `day`, optional `day2`, `month`, optional `year` as a date span.
    DateSpan,
    /// `day`, `month`, optional `year` as a single date.
    SingleDate,
    /// `decision` normalized to cut/hold/hike.
    Decision,
}

/// What a rule's claims are about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// The whole category; identical values collapse across rules.
    Category,
    Fixed(String),
    /// Resolved per match from the surrounding text.
    ForexPair,
}

/// Uncompiled rule definition.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    pub subtype: String,
    pub pattern: String,
    pub parser: ValueParser,
    pub unit: Unit,
    pub subject: Subject,
    pub plausible: Option<(f64, f64)>,
}

impl RuleSpec {
    pub fn new(subtype: &str, pattern: impl Into<String>, parser: ValueParser, unit: Unit) -> Self {
        Self {
            subtype: subtype.to_string(),
            pattern: pattern.into(),
            parser,
            unit,
            subject: Subject::Category,
            plausible: None,
        }
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Subject::Fixed(subject.to_string());
        self
    }

    /// Use the subtype as the subject.
    pub fn own_subject(mut self) -> Self {
        self.subject = Subject::Fixed(self.subtype.clone());
        self
    }

    pub fn forex_pair(mut self) -> Self {
        self.subject = Subject::ForexPair;
        self
    }

    /// Discard numeric values outside `[low, high]`.
    pub fn plausible(mut self, low: f64, high: f64) -> Self {
        self.plausible = Some((low, high));
        self
    }
}

/// A compiled extraction rule.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pub category: Category,
    pub subtype: String,
    pub regex: Regex,
    pub parser: ValueParser,
    pub unit: Unit,
    pub subject: Subject,
    pub plausible: Option<(f64, f64)>,
}

impl ExtractionRule {
    pub fn accepts(&self, value: f64) -> bool {
        match self.plausible {
            Some((low, high)) => (low..=high).contains(&value),
            None => true,
        }
    }
}

/// All compiled rules, keyed by category.
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: BTreeMap<Category, Vec<ExtractionRule>>,
    failed: Vec<String>,
}

impl RuleTable {
    /// Compile every rule. A pattern that fails to compile is skipped and
    /// recorded, so the rest of the table keeps working.
    pub fn build() -> Self {
        let mut table = Self::default();
        for category in Category::ALL {
            let specs = specs_for(category);
            let mut compiled = Vec::with_capacity(specs.len());
            for spec in specs {
                match Regex::new(&spec.pattern) {
                    Ok(regex) => compiled.push(ExtractionRule {
                        category,
                        subtype: spec.subtype,
                        regex,
                        parser: spec.parser,
                        unit: spec.unit,
                        subject: spec.subject,
                        plausible: spec.plausible,
                    }),
                    Err(e) => {
                        tracing::warn!(
                            event = "pattern_compile_failed",
                            category = %category,
                            subtype = %spec.subtype,
                            error = %e,
                            "extraction pattern failed to compile"
                        );
                        table.failed.push(format!("{category}/{}", spec.subtype));
                    }
                }
            }
            table.rules.insert(category, compiled);
        }
        table
    }

    /// Rules for a category in evaluation order.
    pub fn rules(&self, category: Category) -> &[ExtractionRule] {
        self.rules.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `category/subtype` of every rule that failed to compile.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The process-wide rule table.
pub static RULE_TABLE: LazyLock<RuleTable> = LazyLock::new(RuleTable::build);

fn specs_for(category: Category) -> Vec<RuleSpec> {
    match category {
        Category::ForexRates => markets::forex(),
        Category::InflationData => macro_data::inflation(),
        Category::UnemploymentData => macro_data::unemployment(),
        Category::TreasuryYields => markets::treasury(),
        Category::FedMeetings => policy::fed_meetings(),
        Category::FedRates => policy::fed_rates(),
        Category::RateProbabilities => policy::rate_probabilities(),
        Category::DxyIndex => markets::dollar_index(),
        Category::OtherCentralBanks => central_banks::other_central_banks(),
        // Quotes are extracted against the expert registry, not this table.
        Category::ExpertCitations => Vec::new(),
    }
}
