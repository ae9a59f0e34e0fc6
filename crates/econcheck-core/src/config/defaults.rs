// Single source of truth for all default values.

// --- Snapshot store ---
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

// --- Validation ---
pub const DEFAULT_STRICT_YEAR_VALIDATION: bool = false;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_PARALLEL_CATEGORIES: bool = false;
pub const DEFAULT_PUBLISH_THRESHOLD: f64 = 70.0;

// --- Sources ---
pub const DEFAULT_FOREX_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest/USD";
pub const DEFAULT_FRED_ENDPOINT: &str = "https://api.stlouisfed.org/fred/series/observations";
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 250;
pub const FRED_API_KEY_ENV: &str = "FRED_API_KEY";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
