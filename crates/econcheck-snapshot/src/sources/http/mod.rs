//! Production source backed by public HTTP APIs.
//!
//! Forex comes from an exchange-rate API. CPI, labor and treasury series come
//! from FRED and need an API key. Every other category is delegated to a
//! fallback source when one is configured. One fetch, including all of its
//! FRED calls and retries, stays within the clamped snapshot fetch timeout.

mod client;
pub mod parsers;

pub use client::{Deadline, HttpClient, HttpClientConfig};

use std::sync::Arc;
use std::time::Duration;

use econcheck_core::config::{SnapshotConfig, SourcesConfig};
use econcheck_core::errors::{EconResult, SourceError};
use econcheck_core::models::{InflationData, ReferencePayload, TreasuryYields, UnemploymentData};
use econcheck_core::traits::ReferenceDataSource;
use econcheck_core::Category;

/// FRED series ids.
pub mod series {
    pub const CPI_HEADLINE: &str = "CPIAUCSL";
    pub const CPI_CORE: &str = "CPILFESL";
    pub const UNEMPLOYMENT_RATE: &str = "UNRATE";
    pub const INITIAL_CLAIMS: &str = "ICSA";
    pub const TREASURY: [(&str, &str); 3] = [("2Y", "DGS2"), ("10Y", "DGS10"), ("30Y", "DGS30")];
}

/// Observations needed for a year-over-year change on a monthly index.
const YOY_OBSERVATIONS: usize = 13;

pub struct HttpReferenceSource {
    client: HttpClient,
    config: SourcesConfig,
    fallback: Option<Arc<dyn ReferenceDataSource>>,
}

impl HttpReferenceSource {
    pub fn new(config: SourcesConfig, snapshot: &SnapshotConfig) -> Self {
        let client = HttpClient::new(HttpClientConfig {
            timeout: snapshot.fetch_timeout(),
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            ..HttpClientConfig::default()
        });
        Self {
            client,
            config,
            fallback: None,
        }
    }

    /// Total time one category fetch may take.
    pub fn fetch_budget(&self) -> Duration {
        self.client.config().timeout
    }

    /// Serve categories without a live feed from `fallback`.
    pub fn with_fallback(mut self, fallback: Arc<dyn ReferenceDataSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    fn fred_api_key(&self) -> EconResult<String> {
        self.config.resolved_fred_api_key().ok_or_else(|| {
            SourceError::MissingApiKey {
                source_name: "fred".to_string(),
            }
            .into()
        })
    }

    /// Latest `limit` observations of a FRED series, newest first.
    fn fred_series(
        &self,
        series_id: &str,
        limit: usize,
        deadline: &Deadline,
    ) -> EconResult<Vec<f64>> {
        let api_key = self.fred_api_key()?;
        let limit = limit.to_string();
        let body = self.client.get_json(
            &self.config.fred_endpoint,
            &[
                ("series_id", series_id),
                ("api_key", api_key.as_str()),
                ("file_type", "json"),
                ("sort_order", "desc"),
                ("limit", limit.as_str()),
            ],
            deadline,
        )?;
        parsers::parse_fred_observations(&body, &self.config.fred_endpoint)
    }

    fn fetch_forex(&self, deadline: &Deadline) -> EconResult<ReferencePayload> {
        let body = self
            .client
            .get_json(&self.config.forex_endpoint, &[], deadline)?;
        let rates = parsers::parse_forex(&body, &self.config.forex_endpoint)?;
        Ok(ReferencePayload::Forex(rates))
    }

    fn fetch_inflation(&self, deadline: &Deadline) -> EconResult<ReferencePayload> {
        let headline = self.fred_series(series::CPI_HEADLINE, YOY_OBSERVATIONS, deadline)?;
        let core = self.fred_series(series::CPI_CORE, YOY_OBSERVATIONS, deadline)?;
        Ok(ReferencePayload::Inflation(InflationData {
            cpi_headline: parsers::year_over_year(&headline, series::CPI_HEADLINE)?,
            cpi_core: parsers::year_over_year(&core, series::CPI_CORE)?,
        }))
    }

    fn fetch_unemployment(&self, deadline: &Deadline) -> EconResult<ReferencePayload> {
        let rate = self.fred_series(series::UNEMPLOYMENT_RATE, 1, deadline)?;
        let claims = self.fred_series(series::INITIAL_CLAIMS, 1, deadline)?;
        Ok(ReferencePayload::Unemployment(UnemploymentData {
            unemployment_rate: parsers::latest(&rate, series::UNEMPLOYMENT_RATE)?,
            initial_claims: parsers::latest(&claims, series::INITIAL_CLAIMS)?,
        }))
    }

    fn fetch_treasury(&self, deadline: &Deadline) -> EconResult<ReferencePayload> {
        let mut yields = std::collections::BTreeMap::new();
        for (tenor, series_id) in series::TREASURY {
            // Daily series carry "." on market holidays; look a few rows back.
            let values = self.fred_series(series_id, 5, deadline)?;
            yields.insert(tenor.to_string(), parsers::latest(&values, series_id)?);
        }
        Ok(ReferencePayload::Treasury(TreasuryYields { yields }))
    }
}

impl ReferenceDataSource for HttpReferenceSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch(&self, category: Category) -> EconResult<ReferencePayload> {
        let deadline = Deadline::after(self.fetch_budget());
        match category {
            Category::ForexRates => self.fetch_forex(&deadline),
            Category::InflationData => self.fetch_inflation(&deadline),
            Category::UnemploymentData => self.fetch_unemployment(&deadline),
            Category::TreasuryYields => self.fetch_treasury(&deadline),
            _ => match &self.fallback {
                Some(fallback) => fallback.fetch(category),
                None => Err(SourceError::Unsupported {
                    source_name: self.name().to_string(),
                    category,
                }
                .into()),
            },
        }
    }
}
