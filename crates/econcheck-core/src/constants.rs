/// econcheck version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on a single reference fetch. Config values above this are clamped.
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 10;

/// Quotes longer than this are truncated in citation details.
pub const CITATION_PREVIEW_CHARS: usize = 100;

/// Number of validation categories in every report.
pub const CATEGORY_COUNT: usize = 10;
