//! Expert citation scoring.
//!
//! Registered experts are scored by similarity against their known
//! statements, falling back to whether the quote carries a current
//! datapoint. Unregistered speakers only pass on a current datapoint.
//! A bare mention of a registered expert always passes.

mod jaccard;
mod registry;

pub use jaccard::JaccardScorer;
pub use registry::default_experts;

use econcheck_core::constants::CITATION_PREVIEW_CHARS;
use econcheck_core::models::{
    CategoryReport, CitationDetail, ClaimValue, ComparisonOutcome, ExpertProfile, ExtractedClaim,
    ForexRates, InflationData,
};
use econcheck_core::traits::SimilarityScorer;
use econcheck_extraction::citations::{EXPERT_CITATION, EXPERT_MENTION, UNKNOWN_EXPERT_CITATION};

use crate::tolerance::round2;

/// Current figures a quote may cite: forex rates and CPI readings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentData {
    forex_rates: Vec<f64>,
    inflation: Vec<f64>,
}

impl CurrentData {
    pub fn new(forex: Option<&ForexRates>, inflation: Option<&InflationData>) -> Self {
        Self {
            forex_rates: forex
                .map(|f| f.rates.values().copied().collect())
                .unwrap_or_default(),
            inflation: inflation
                .map(|i| i.metrics().iter().map(|(_, v)| *v).collect())
                .unwrap_or_default(),
        }
    }

    /// A rate written to two or one decimals (`1.17`, `1.2`), or a CPI
    /// reading with its percent sign (`2.9%`, `3.0 %`). A figure only
    /// counts when it does not continue an earlier number.
    pub fn contained_in(&self, quote: &str) -> bool {
        let rate_hit = self.forex_rates.iter().any(|rate| {
            contains_figure(quote, &format!("{}", round2(*rate)))
                || contains_figure(quote, &format!("{rate:.1}"))
        });
        let cpi_hit = self.inflation.iter().any(|v| {
            let figure = cpi_figure(*v);
            contains_figure(quote, &format!("{figure}%"))
                || contains_figure(quote, &format!("{figure} %"))
        });
        rate_hit || cpi_hit
    }
}

/// CPI readings keep at least one decimal: `3.0`, `2.9`, `2.95`.
fn cpi_figure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn contains_figure(haystack: &str, figure: &str) -> bool {
    haystack.match_indices(figure).any(|(at, _)| {
        !haystack[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
    })
}

/// Cut to the preview length, marking the cut with `...`.
pub fn truncate(text: &str) -> String {
    if text.chars().count() > CITATION_PREVIEW_CHARS {
        let head: String = text.chars().take(CITATION_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Best-scoring known statement for a quote. Ties keep the earlier one.
pub fn best_match<'a>(
    scorer: &dyn SimilarityScorer,
    quote: &str,
    known: &'a [String],
) -> Option<(f64, &'a str)> {
    let mut best: Option<(f64, &str)> = None;
    for candidate in known {
        let score = scorer.score(quote, candidate);
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, candidate));
        }
    }
    best
}

/// Inputs for scoring one pass of citation claims.
pub struct CitationContext<'a> {
    pub experts: &'a [ExpertProfile],
    pub scorer: &'a dyn SimilarityScorer,
    /// Similarity strictly above this passes.
    pub threshold: f64,
    pub current: &'a CurrentData,
}

pub fn validate(claims: &[ExtractedClaim], ctx: &CitationContext<'_>) -> CategoryReport {
    let mut report = CategoryReport::new();
    for claim in claims {
        let outcome = match (&claim.value, claim.subtype.as_str()) {
            (ClaimValue::Quote { speaker, text, .. }, EXPERT_CITATION) => {
                let Some(expert) = ctx
                    .experts
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(speaker))
                else {
                    continue;
                };
                known_quote(expert, text, ctx)
            }
            (
                ClaimValue::Quote {
                    speaker,
                    organization,
                    text,
                },
                UNKNOWN_EXPERT_CITATION,
            ) => unknown_quote(speaker, organization.as_deref(), text, ctx.current),
            (ClaimValue::Mention { speaker }, EXPERT_MENTION) => {
                let Some(expert) = ctx
                    .experts
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(speaker))
                else {
                    continue;
                };
                mention(expert)
            }
            _ => continue,
        };
        report.record(outcome);
    }
    report
}

fn known_quote(expert: &ExpertProfile, text: &str, ctx: &CitationContext<'_>) -> ComparisonOutcome {
    let (similarity, closest) =
        best_match(ctx.scorer, text, &expert.reference_quotes).unwrap_or((0.0, ""));
    let contains = ctx.current.contained_in(text);
    let preview = truncate(text);
    let closest = truncate(closest);
    ComparisonOutcome {
        kind: EXPERT_CITATION.to_string(),
        article_value: preview.clone(),
        current_value: closest.clone(),
        is_accurate: similarity > ctx.threshold || contains,
        difference: None,
        citation: Some(CitationDetail {
            expert: expert.name.clone(),
            organization: expert.organization.clone(),
            citation: Some(preview),
            similarity_score: Some(round2(similarity)),
            most_similar_known_quote: Some(closest),
            contains_current_data: Some(contains),
        }),
    }
}

fn unknown_quote(
    speaker: &str,
    organization: Option<&str>,
    text: &str,
    current: &CurrentData,
) -> ComparisonOutcome {
    let contains = current.contained_in(text);
    let preview = truncate(text);
    ComparisonOutcome {
        kind: UNKNOWN_EXPERT_CITATION.to_string(),
        article_value: preview.clone(),
        current_value: String::new(),
        is_accurate: contains,
        difference: None,
        citation: Some(CitationDetail {
            expert: speaker.to_string(),
            organization: organization.unwrap_or("Unknown").to_string(),
            citation: Some(preview),
            similarity_score: None,
            most_similar_known_quote: None,
            contains_current_data: Some(contains),
        }),
    }
}

fn mention(expert: &ExpertProfile) -> ComparisonOutcome {
    ComparisonOutcome {
        kind: EXPERT_MENTION.to_string(),
        article_value: expert.name.clone(),
        current_value: expert.organization.clone(),
        is_accurate: true,
        difference: None,
        citation: Some(CitationDetail {
            expert: expert.name.clone(),
            organization: expert.organization.clone(),
            citation: None,
            similarity_score: None,
            most_similar_known_quote: None,
            contains_current_data: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use econcheck_core::models::Unit;
    use econcheck_core::Category;

    use super::*;

    fn current() -> CurrentData {
        CurrentData::new(
            Some(&ForexRates {
                rates: BTreeMap::from([("EUR/USD".to_string(), 1.1715)]),
            }),
            Some(&InflationData {
                cpi_headline: 2.9,
                cpi_core: 3.1,
            }),
        )
    }

    fn quote(subtype: &str, speaker: &str, text: &str) -> ExtractedClaim {
        ExtractedClaim {
            category: Category::ExpertCitations,
            subtype: subtype.into(),
            subject: Some(speaker.into()),
            raw_match: String::new(),
            value: ClaimValue::Quote {
                speaker: speaker.into(),
                organization: None,
                text: text.into(),
            },
            unit: Unit::Text,
        }
    }

    fn run(claims: &[ExtractedClaim]) -> CategoryReport {
        let experts = default_experts();
        let data = current();
        validate(
            claims,
            &CitationContext {
                experts: &experts,
                scorer: &JaccardScorer,
                threshold: 0.5,
                current: &data,
            },
        )
    }

    #[test]
    fn datapoint_formats() {
        let data = current();
        assert!(data.contained_in("EUR/USD near 1.17 today"));
        assert!(data.contained_in("roughly 1.2 on the pair"));
        assert!(data.contained_in("CPI at 2.9 % again"));
        assert!(!data.contained_in("CPI at 2.9 again"));
    }

    #[test]
    fn whole_number_cpi_keeps_its_decimal() {
        let data = CurrentData::new(
            None,
            Some(&InflationData {
                cpi_headline: 3.0,
                cpi_core: 3.1,
            }),
        );
        assert!(data.contained_in("headline CPI is 3.0% now"));
        assert!(!data.contained_in("unemployment ticked up to 4.3% last month"));
        assert!(!data.contained_in("a 13% jump"));
        assert!(!data.contained_in("CPI at 3% flat"));
    }

    #[test]
    fn figures_inside_longer_numbers_do_not_count() {
        let data = current();
        assert!(!data.contained_in("the index gained 12.9% this year"));
        assert!(!data.contained_in("volume of 11.17 million"));
        assert!(data.contained_in("(2.9%) on the year"));
    }

    #[test]
    fn unknown_speaker_quoting_other_figures_is_inaccurate() {
        let data = CurrentData::new(
            None,
            Some(&InflationData {
                cpi_headline: 3.0,
                cpi_core: 3.0,
            }),
        );
        let experts = default_experts();
        let report = validate(
            &[quote(
                UNKNOWN_EXPERT_CITATION,
                "Jane Doe",
                "unemployment ticked up to 4.3% last month",
            )],
            &CitationContext {
                experts: &experts,
                scorer: &JaccardScorer,
                threshold: 0.5,
                current: &data,
            },
        );
        assert_eq!((report.metrics_found, report.metrics_accurate), (1, 0));
        let detail = report.details[0].citation.as_ref().unwrap();
        assert_eq!(detail.contains_current_data, Some(false));
    }

    #[test]
    fn close_paraphrase_is_accurate_without_data() {
        let text = "The Fed faces its most complex policy environment since 2020, balancing persistent inflation against growth concerns.";
        let report = run(&[quote(EXPERT_CITATION, "Adam Button", text)]);
        assert_eq!(report.metrics_accurate, 1);
        let detail = report.details[0].citation.as_ref().unwrap();
        assert!(detail.similarity_score.unwrap() > 0.5);
        assert_eq!(detail.contains_current_data, Some(false));
    }

    #[test]
    fn unfamiliar_quote_needs_current_data() {
        let report = run(&[
            quote(EXPERT_CITATION, "adam button", "Nothing to see here."),
            quote(EXPERT_CITATION, "Adam Button", "Inflation is stuck at 2.9% for now."),
        ]);
        let accurate: Vec<bool> = report.details.iter().map(|d| d.is_accurate).collect();
        assert_eq!(accurate, [false, true]);
        assert_eq!(report.details[0].citation.as_ref().unwrap().expert, "Adam Button");
    }

    #[test]
    fn unknown_speaker_defaults_organization() {
        let report = run(&[quote(UNKNOWN_EXPERT_CITATION, "Jane Doe", "EUR/USD at 1.17")]);
        assert_eq!(report.metrics_accurate, 1);
        let detail = report.details[0].citation.as_ref().unwrap();
        assert_eq!(detail.organization, "Unknown");
        assert_eq!(detail.similarity_score, None);
    }

    #[test]
    fn mention_always_counts() {
        let claim = ExtractedClaim {
            category: Category::ExpertCitations,
            subtype: EXPERT_MENTION.into(),
            subject: Some("Kit Juckes".into()),
            raw_match: "Kit Juckes".into(),
            value: ClaimValue::Mention {
                speaker: "Kit Juckes".into(),
            },
            unit: Unit::Text,
        };
        let report = run(&[claim]);
        assert_eq!((report.metrics_found, report.metrics_accurate), (1, 1));
        assert_eq!(report.details[0].current_value, "Societe Generale");
    }

    #[test]
    fn long_quotes_are_truncated() {
        let long = "x".repeat(150);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate("short"), "short");
    }
}
