//! Test fixture loader for reference snapshots and sample articles.
//!
//! Fixtures live beside this crate's manifest, so every crate in the
//! workspace resolves the same files.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Reference snapshot matching the built-in September 2025 values.
pub const REFERENCE_2025_09: &str = "reference/reference_2025_09.json";
/// The same snapshot with every market quote shifted, for refresh tests.
pub const REFERENCE_SHIFTED: &str = "reference/reference_shifted.json";
pub const SCENARIOS: &str = "articles/scenarios.json";

/// Root directory of the fixtures.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_text(relative_path);
    let path = fixture_path(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Expected counts for one category of a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedCounts {
    pub found: usize,
    pub accurate: usize,
}

/// A sample article with the counts it should produce per category.
/// Categories not listed are expected to find nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleScenario {
    pub name: String,
    pub text: String,
    pub expected: std::collections::BTreeMap<String, ExpectedCounts>,
}

/// All article scenarios.
pub fn load_scenarios() -> Vec<ArticleScenario> {
    load_fixture(SCENARIOS)
}
