//! Tracing setup: structured JSON logging and event helpers.

pub mod events;

use econcheck_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "ECONCHECK_LOG";

const FALLBACK_DIRECTIVE: &str = "info";

/// Initialize the tracing subscriber with structured JSON output at the
/// default level. See [`init_tracing_from_config`].
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Initialize the tracing subscriber with structured JSON output.
///
/// `ECONCHECK_LOG` wins when set; otherwise `observability.log_level`
/// is used. Safe to call more than once; later calls are no-ops.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let env = std::env::var(LOG_ENV).ok();
    let filter = EnvFilter::new(log_directive(env.as_deref(), config));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// The filter directive to install: a valid environment override, then
/// a valid configured level, then `info`.
pub fn log_directive(env: Option<&str>, config: &ObservabilityConfig) -> String {
    [env, Some(config.log_level.as_str())]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty() && EnvFilter::try_new(d).is_ok())
        .unwrap_or(FALLBACK_DIRECTIVE)
        .to_string()
}
