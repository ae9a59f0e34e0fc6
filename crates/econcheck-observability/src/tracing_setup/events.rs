//! Structured log events for the validation pipeline.
//!
//! Each function emits a `tracing` event with structured fields.

use econcheck_core::Category;

/// A reference snapshot was fetched and stored.
pub fn snapshot_refreshed(category: Category, source: &str) {
    tracing::info!(
        event = "snapshot_refreshed",
        category = %category,
        source = %source,
        "reference snapshot refreshed"
    );
}

/// A fresh snapshot was served from the cache.
pub fn snapshot_hit(category: Category) {
    tracing::debug!(
        event = "snapshot_hit",
        category = %category,
        "reference snapshot served from cache"
    );
}

/// A reference fetch failed.
pub fn fetch_failed(category: Category, source: &str, error: &str) {
    tracing::warn!(
        event = "fetch_failed",
        category = %category,
        source = %source,
        error = %error,
        "reference fetch failed"
    );
}

/// One HTTP attempt failed and will be retried.
pub fn fetch_retry(endpoint: &str, attempt: u32, error: &str) {
    tracing::debug!(
        event = "fetch_retry",
        endpoint = %endpoint,
        attempt = attempt,
        error = %error,
        "retrying reference request"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// One category finished validating.
pub fn category_validated(category: Category, found: usize, accurate: usize, degraded: bool) {
    tracing::debug!(
        event = "category_validated",
        category = %category,
        found = found,
        accurate = accurate,
        degraded = degraded,
        "category validated"
    );
}

/// A full validation pass finished.
pub fn validation_completed(found: usize, accurate: usize, overall_accuracy: f64) {
    tracing::info!(
        event = "validation_completed",
        found = found,
        accurate = accurate,
        overall_accuracy = overall_accuracy,
        "validation completed"
    );
}
