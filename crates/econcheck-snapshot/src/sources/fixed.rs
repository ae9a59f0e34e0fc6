//! In-memory source serving a fixed set of payloads.

use std::collections::BTreeMap;

use dashmap::DashMap;
use econcheck_core::errors::{EconResult, SourceError};
use econcheck_core::models::ReferencePayload;
use econcheck_core::traits::ReferenceDataSource;
use econcheck_core::Category;

use crate::defaults;

/// Serves whatever payloads it was given. Payloads can be swapped at runtime
/// with [`FixedSnapshotSource::set`], which makes it double as a test fake.
#[derive(Debug)]
pub struct FixedSnapshotSource {
    name: String,
    payloads: DashMap<Category, ReferencePayload>,
}

impl Default for FixedSnapshotSource {
    fn default() -> Self {
        Self::empty()
    }
}

impl FixedSnapshotSource {
    /// An empty source; every fetch fails with `Unsupported`.
    pub fn empty() -> Self {
        Self {
            name: "fixed".to_string(),
            payloads: DashMap::new(),
        }
    }

    /// A source pre-loaded with the built-in reference payloads.
    pub fn builtin() -> Self {
        Self::from_payloads(defaults::builtin_payloads())
    }

    pub fn from_payloads(payloads: impl IntoIterator<Item = ReferencePayload>) -> Self {
        let source = Self::empty();
        for payload in payloads {
            source.set(payload);
        }
        source
    }

    /// Load a JSON object mapping category names to payloads.
    pub fn from_json(json: &str) -> EconResult<Self> {
        let map: BTreeMap<Category, ReferencePayload> = serde_json::from_str(json)?;
        for (category, payload) in &map {
            if payload.category() != *category {
                return Err(SourceError::CategoryMismatch {
                    expected: *category,
                    actual: payload.category(),
                }
                .into());
            }
        }
        Ok(Self::from_payloads(map.into_values()))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the payload for its category.
    pub fn set(&self, payload: ReferencePayload) {
        self.payloads.insert(payload.category(), payload);
    }

    pub fn remove(&self, category: Category) {
        self.payloads.remove(&category);
    }
}

impl ReferenceDataSource for FixedSnapshotSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, category: Category) -> EconResult<ReferencePayload> {
        self.payloads
            .get(&category)
            .map(|p| p.value().clone())
            .ok_or_else(|| {
                SourceError::Unsupported {
                    source_name: self.name.clone(),
                    category,
                }
                .into()
            })
    }
}
