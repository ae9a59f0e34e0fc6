//! # econcheck-observability
//!
//! Structured tracing setup, named log events for the validation pipeline,
//! and tracking of reference-data degradations.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
