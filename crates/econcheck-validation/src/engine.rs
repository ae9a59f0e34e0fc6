//! ValidationEngine: runs the ten category checks over one article and
//! aggregates the results.

use std::sync::Arc;

use econcheck_core::config::EconConfig;
use econcheck_core::errors::EconResult;
use econcheck_core::models::{CategoryReport, ExpertProfile, ValidationReport};
use econcheck_core::traits::{Clock, ReferenceDataSource, SimilarityScorer, SystemClock};
use econcheck_core::Category;
use econcheck_extraction::{extract, CitationExtractor, ExtractionOptions, YearPolicy};
use econcheck_observability::tracing_setup::events;
use econcheck_snapshot::{FixedSnapshotSource, ReferenceStore};
use rayon::prelude::*;

use crate::categories;
use crate::citation::{self, default_experts, CitationContext, CurrentData, JaccardScorer};
use crate::report;

/// Builder for [`ValidationEngine`]. Every collaborator has a default:
/// the built-in reference payloads, the wall clock, Jaccard similarity and
/// the default expert registry.
pub struct ValidationEngineBuilder {
    source: Option<Arc<dyn ReferenceDataSource>>,
    clock: Option<Arc<dyn Clock>>,
    scorer: Option<Arc<dyn SimilarityScorer>>,
    experts: Option<Vec<ExpertProfile>>,
    config: EconConfig,
}

impl Default for ValidationEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngineBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            clock: None,
            scorer: None,
            experts: None,
            config: EconConfig::default(),
        }
    }

    pub fn source(mut self, source: Arc<dyn ReferenceDataSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn scorer(mut self, scorer: Arc<dyn SimilarityScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn experts(mut self, experts: Vec<ExpertProfile>) -> Self {
        self.experts = Some(experts);
        self
    }

    pub fn config(mut self, config: EconConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and assemble the engine.
    pub fn build(self) -> EconResult<ValidationEngine> {
        self.config.validate()?;
        let source: Arc<dyn ReferenceDataSource> = match self.source {
            Some(source) => source,
            None => Arc::new(FixedSnapshotSource::builtin()),
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };
        let scorer: Arc<dyn SimilarityScorer> = match self.scorer {
            Some(scorer) => scorer,
            None => Arc::new(JaccardScorer),
        };
        let experts = self.experts.unwrap_or_else(default_experts);
        let store = ReferenceStore::new(source, Arc::clone(&clock), self.config.snapshot.clone());

        Ok(ValidationEngine {
            store,
            clock,
            scorer,
            citations: CitationExtractor::new(&experts),
            experts,
            config: self.config,
        })
    }
}

/// The article validation engine.
///
/// Holds the process-wide reference store, so one engine should serve
/// every article. `validate` never fails: unavailable reference data
/// shows up as degraded categories in the report.
pub struct ValidationEngine {
    store: ReferenceStore,
    clock: Arc<dyn Clock>,
    scorer: Arc<dyn SimilarityScorer>,
    citations: CitationExtractor,
    experts: Vec<ExpertProfile>,
    config: EconConfig,
}

impl ValidationEngine {
    pub fn builder() -> ValidationEngineBuilder {
        ValidationEngineBuilder::new()
    }

    /// Validate one article against the current reference data.
    pub fn validate(&self, text: &str) -> ValidationReport {
        let options = ExtractionOptions::new(self.clock.now().date_naive()).with_year_policy(
            YearPolicy::from_strict(self.config.validation.strict_year_validation),
        );

        let categories = if self.config.validation.parallel_categories {
            self.validate_parallel(text, &options)
        } else {
            self.validate_sequential(text, &options)
        };

        let report = report::aggregate(categories, self.clock.now());
        events::validation_completed(
            report.total_found(),
            report.total_accurate(),
            report.overall_accuracy,
        );
        report
    }

    /// Whether a report clears the configured publish threshold.
    pub fn meets_publish_threshold(&self, report: &ValidationReport) -> bool {
        report.meets_threshold(self.config.validation.publish_threshold)
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    pub fn config(&self) -> &EconConfig {
        &self.config
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Validate categories on the rayon pool.
    fn validate_parallel(
        &self,
        text: &str,
        options: &ExtractionOptions,
    ) -> Vec<(Category, CategoryReport)> {
        Category::ALL
            .par_iter()
            .map(|category| (*category, self.validate_category(*category, text, options)))
            .collect()
    }

    /// Validate categories one after another.
    fn validate_sequential(
        &self,
        text: &str,
        options: &ExtractionOptions,
    ) -> Vec<(Category, CategoryReport)> {
        Category::ALL
            .iter()
            .map(|category| (*category, self.validate_category(*category, text, options)))
            .collect()
    }

    fn validate_category(
        &self,
        category: Category,
        text: &str,
        options: &ExtractionOptions,
    ) -> CategoryReport {
        let report = if category == Category::ExpertCitations {
            self.validate_citations(text)
        } else {
            let claims = extract(category, text, options);
            match self.store.resolve(category) {
                Some(resolved) => {
                    let mut report = categories::compare(category, &claims, &resolved.payload);
                    report.degraded = resolved.degraded;
                    report
                }
                None => CategoryReport::degraded(),
            }
        };
        events::category_validated(
            category,
            report.metrics_found,
            report.metrics_accurate,
            report.degraded,
        );
        report
    }

    /// Citations cross-check quotes against the forex and inflation
    /// snapshots and inherit their degradation.
    fn validate_citations(&self, text: &str) -> CategoryReport {
        let claims = self.citations.extract(text);
        let forex = self.store.resolve(Category::ForexRates);
        let inflation = self.store.resolve(Category::InflationData);
        let current = CurrentData::new(
            forex.as_ref().and_then(|r| r.payload.as_forex()),
            inflation.as_ref().and_then(|r| r.payload.as_inflation()),
        );

        let mut report = citation::validate(
            &claims,
            &CitationContext {
                experts: &self.experts,
                scorer: self.scorer.as_ref(),
                threshold: self.config.validation.similarity_threshold,
                current: &current,
            },
        );
        report.degraded = [forex, inflation]
            .iter()
            .any(|r| r.as_ref().map_or(true, |r| r.degraded));
        report
    }
}
