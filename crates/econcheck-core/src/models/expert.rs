use serde::{Deserialize, Serialize};

/// A known analyst and the statements they are on record for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertProfile {
    /// Display name, e.g. `"Adam Button"`. Matched case-insensitively.
    pub name: String,
    pub organization: String,
    pub reference_quotes: Vec<String>,
}

impl ExpertProfile {
    pub fn new(name: &str, organization: &str, quotes: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            organization: organization.to_string(),
            reference_quotes: quotes.iter().map(|q| q.to_string()).collect(),
        }
    }
}
