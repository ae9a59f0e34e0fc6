mod config_error;
mod source_error;

pub use config_error::ConfigError;
pub use source_error::SourceError;

/// Top-level error for the econcheck workspace.
#[derive(Debug, thiserror::Error)]
pub enum EconError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for EconError {
    fn from(e: serde_json::Error) -> Self {
        EconError::Serialization {
            reason: e.to_string(),
        }
    }
}

pub type EconResult<T> = Result<T, EconError>;
