//! # econcheck-core
//!
//! Foundation crate for the econcheck validation engine.
//! Defines categories, reference payloads, claims, reports, errors,
//! config, and the collaborator traits. Every other crate depends on this.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use category::Category;
pub use config::EconConfig;
pub use errors::{EconError, EconResult};
pub use models::{
    CategoryReport, ClaimValue, ComparisonOutcome, ExtractedClaim, ReferencePayload,
    ReferenceSnapshot, ValidationReport,
};
