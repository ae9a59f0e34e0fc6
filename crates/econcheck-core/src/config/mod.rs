pub mod defaults;
mod observability_config;
mod snapshot_config;
mod sources_config;
mod validation_config;

pub use observability_config::ObservabilityConfig;
pub use snapshot_config::SnapshotConfig;
pub use sources_config::SourcesConfig;
pub use validation_config::ValidationConfig;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{ConfigError, EconResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EconConfig {
    pub snapshot: SnapshotConfig,
    pub validation: ValidationConfig,
    pub sources: SourcesConfig,
    pub observability: ObservabilityConfig,
}

impl EconConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> EconResult<Self> {
        let config: EconConfig = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the engine misbehave.
    pub fn validate(&self) -> EconResult<()> {
        for name in self.snapshot.ttl_overrides_secs.keys() {
            if name.parse::<Category>().is_err() {
                return Err(ConfigError::Invalid {
                    field: format!("snapshot.ttl_overrides_secs.{name}"),
                    reason: "unknown category".to_string(),
                }
                .into());
            }
        }
        let threshold = self.validation.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid {
                field: "validation.similarity_threshold".to_string(),
                reason: format!("{threshold} is outside [0, 1]"),
            }
            .into());
        }
        let publish = self.validation.publish_threshold;
        if !(0.0..=100.0).contains(&publish) {
            return Err(ConfigError::Invalid {
                field: "validation.publish_threshold".to_string(),
                reason: format!("{publish} is outside [0, 100]"),
            }
            .into());
        }
        Ok(())
    }
}
