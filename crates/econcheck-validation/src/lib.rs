//! # econcheck-validation
//!
//! Checks the claims extracted from an article against reference snapshots
//! and scores the result.
//!
//! ## Pipeline
//! For each of the ten categories, independently:
//! 1. **Extract** claims with the rule table (or the citation extractor)
//! 2. **Resolve** the category snapshot, refreshing it if expired
//! 3. **Compare** each claim under the category tolerance
//! 4. **Record** one outcome per claim
//!
//! The aggregator then folds the ten category reports into one
//! [`ValidationReport`](econcheck_core::ValidationReport).

pub mod categories;
pub mod citation;
pub mod engine;
pub mod report;
pub mod tolerance;

pub use citation::{default_experts, JaccardScorer};
pub use engine::{ValidationEngine, ValidationEngineBuilder};
