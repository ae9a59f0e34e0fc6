//! Blocking HTTP client with retry, exponential backoff, timeout, and gzip.

use std::time::{Duration, Instant};

use econcheck_core::constants::MAX_FETCH_TIMEOUT_SECS;
use econcheck_core::errors::{EconResult, SourceError};
use econcheck_observability::tracing_setup::events;

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Per-request timeout, clamped to the fetch ceiling.
    pub timeout: Duration,
    /// Maximum number of retry attempts after the first request.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(MAX_FETCH_TIMEOUT_SECS),
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(2),
        }
    }
}

fn net_err(reason: String) -> SourceError {
    SourceError::Network { reason }
}

/// Wall-clock budget shared by every request of one reference fetch.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    budget: Duration,
    expires: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            budget,
            expires: Instant::now() + budget,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left, or `None` once the budget is spent.
    pub fn remaining(&self) -> Option<Duration> {
        self.expires
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero())
    }

    fn exceeded(&self, source_name: &str) -> SourceError {
        SourceError::Timeout {
            source_name: source_name.to_string(),
            timeout_ms: self.budget.as_millis() as u64,
        }
    }
}

#[derive(Debug)]
pub struct HttpClient {
    config: HttpClientConfig,
}

impl HttpClient {
    pub fn new(mut config: HttpClientConfig) -> Self {
        config.timeout = config
            .timeout
            .min(Duration::from_secs(MAX_FETCH_TIMEOUT_SECS));
        Self { config }
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// GET a JSON document with retry and backoff. Client errors (4xx) are
    /// not retried. No attempt or backoff runs past `deadline`.
    pub fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        deadline: &Deadline,
    ) -> EconResult<serde_json::Value> {
        if deadline.remaining().is_none() {
            return Err(deadline.exceeded(url).into());
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| net_err(e.to_string()))?;

        let mut backoff = self.config.initial_backoff;
        let mut last_err = String::new();
        let mut timed_out = false;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                match deadline.remaining() {
                    Some(left) if left > backoff => {}
                    _ => {
                        timed_out = true;
                        break;
                    }
                }
                events::fetch_retry(url, attempt, &last_err);
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.config.max_backoff);
            }
            let Some(left) = deadline.remaining() else {
                timed_out = true;
                break;
            };

            match client
                .get(url)
                .query(query)
                .timeout(left.min(self.config.timeout))
                .send()
            {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<serde_json::Value>().map_err(|e| {
                            SourceError::Decode {
                                endpoint: url.to_string(),
                                reason: e.to_string(),
                            }
                            .into()
                        });
                    }
                    if status.is_client_error() {
                        return Err(SourceError::HttpStatus {
                            status: status.as_u16(),
                            endpoint: url.to_string(),
                        }
                        .into());
                    }
                    last_err = format!("HTTP {status}");
                    timed_out = false;
                }
                Err(e) => {
                    timed_out = e.is_timeout();
                    last_err = e.to_string();
                }
            }
        }

        if timed_out {
            return Err(deadline.exceeded(url).into());
        }
        Err(net_err(format!(
            "all {} retries exhausted: {last_err}",
            self.config.max_retries
        ))
        .into())
    }
}
