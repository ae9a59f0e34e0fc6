//! # econcheck-extraction
//!
//! Turns free-form article text into typed [`ExtractedClaim`]s.
//!
//! Every numeric, date and decision claim comes from one declarative
//! table, `Category -> [ExtractionRule]`, driven by a single generic
//! [`extract`] function. Quoted expert statements have their own
//! registry-driven extractor in [`citations`].
//!
//! [`ExtractedClaim`]: econcheck_core::ExtractedClaim

pub mod citations;
pub mod dates;
pub mod extract;
pub mod forex;
pub mod parse;
pub mod rules;

pub use citations::{extract_citations, CitationExtractor};
pub use dates::YearPolicy;
pub use extract::{dedup, extract, ExtractionOptions};
pub use rules::{ExtractionRule, RuleTable, ValueParser, RULE_TABLE};
