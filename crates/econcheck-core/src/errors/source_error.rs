use crate::category::Category;

/// Reference data source errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("{source_name} timed out after {timeout_ms}ms")]
    Timeout { source_name: String, timeout_ms: u64 },

    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("failed to decode {endpoint} response: {reason}")]
    Decode { endpoint: String, reason: String },

    #[error("response missing field: {field}")]
    MissingField { field: String },

    #[error("{source_name} requires an API key")]
    MissingApiKey { source_name: String },

    #[error("{source_name} has no data for {category}")]
    Unsupported {
        source_name: String,
        category: Category,
    },

    #[error("payload for {actual} returned where {expected} was requested")]
    CategoryMismatch {
        expected: Category,
        actual: Category,
    },
}
