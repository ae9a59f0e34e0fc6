//! Quoted expert statements and bare expert mentions.
//!
//! Two tiers run over the text. Registered experts get a dedicated pattern
//! built from their name and organization, matched case-insensitively. A
//! generic `Capitalized Name [of Organization] said "..."` pattern then
//! picks up unregistered speakers, skipping institutions and anyone the
//! registry already covers.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use econcheck_core::models::{ClaimValue, ExpertProfile, ExtractedClaim, Unit};
use econcheck_core::Category;
use regex::Regex;

pub const EXPERT_CITATION: &str = "expert_citation";
pub const UNKNOWN_EXPERT_CITATION: &str = "unknown_expert_citation";
pub const EXPERT_MENTION: &str = "expert_mention";

const ATTRIBUTION: &str = r"(?:according\s+to|as\s+per|as\s+stated\s+by|as\s+noted\s+by|as\s+mentioned\s+by|as\s+reported\s+by)";
const VERBS: &str = r"(?:said|says|stated|noted|mentioned|reported|commented|remarked|explained|suggested|pointed\s+out|highlighted|emphasized|warned|cautioned|predicted|forecasted|projected|estimated)";
const LINK: &str = r"\s*(?:that|,|:)?\s*";

/// Speakers that are institutions, not people.
const INSTITUTIONS: &[&str] = &[
    "fed",
    "federal reserve",
    "ecb",
    "boe",
    "bank of england",
    "bank of canada",
    "boc",
    "bank of japan",
    "boj",
    "fomc",
    "european central bank",
    "central bank",
    "reserve bank of australia",
    "reserve bank of new zealand",
    "reserve bank",
    "swiss national bank",
    "national bank",
    "rba",
    "rbnz",
    "snb",
];

/// The generic pattern splits `Bank of Canada` into name `Bank` and
/// organization `Canada`, so the joined form is checked too.
fn is_institution(name: &str, org: Option<&str>) -> bool {
    if INSTITUTIONS.contains(&name) {
        return true;
    }
    org.is_some_and(|org| {
        let joined = format!("{name} of {}", org.to_lowercase());
        INSTITUTIONS.contains(&joined.as_str())
    })
}

fn quoted(group: &str) -> String {
    format!(r#"["“](?P<{group}>[^"”]+)["”]"#)
}

static GENERIC_ATTRIBUTED: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(&format!(
        r"{ATTRIBUTION}\s+(?P<name>[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)(?:\s+(?:of|from|at)\s+(?P<org>[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*))?,?\s*(?:{VERBS})?{LINK}{}",
        quoted("quote")
    ))
});

static GENERIC_SAID: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(&format!(
        r"\b(?P<name>[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)(?:\s+(?:of|from|at)\s+(?P<org>[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*))?,?\s+{VERBS}{LINK}{}",
        quoted("quote")
    ))
});

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(event = "pattern_compile_failed", error = %e, "citation pattern failed to compile");
            None
        }
    }
}

/// Literal text with any run of whitespace matching any whitespace.
fn flexible(literal: &str) -> String {
    literal
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

#[derive(Debug)]
struct KnownExpert {
    name: String,
    organization: String,
    quote: Option<Regex>,
    mention: Option<Regex>,
}

impl KnownExpert {
    fn new(profile: &ExpertProfile) -> Self {
        let name = flexible(&profile.name);
        let org = format!(r"(?:\s+(?:of|from|at)\s+{})?", flexible(&profile.organization));
        let quote = compile(&format!(
            r"(?i){ATTRIBUTION}\s+{name}{org},?\s*(?:{VERBS})?{LINK}{}|\b{name}{org},?\s+{VERBS}{LINK}{}",
            quoted("q1"),
            quoted("q2")
        ));
        let mention = compile(&format!(r"(?i)\b{name}\b"));
        Self {
            name: profile.name.clone(),
            organization: profile.organization.clone(),
            quote,
            mention,
        }
    }
}

/// Citation extractor for a fixed expert registry.
#[derive(Debug)]
pub struct CitationExtractor {
    experts: Vec<KnownExpert>,
}

impl CitationExtractor {
    pub fn new(experts: &[ExpertProfile]) -> Self {
        Self {
            experts: experts.iter().map(KnownExpert::new).collect(),
        }
    }

    /// Registered quotes and mentions first, in registry order, then
    /// citations of unregistered speakers in text order.
    pub fn extract(&self, text: &str) -> Vec<ExtractedClaim> {
        let mut claims = Vec::new();
        let mut seen = HashSet::new();
        let mut claimed_spans: Vec<Range<usize>> = Vec::new();

        for expert in &self.experts {
            let mut quoted_any = false;
            if let Some(re) = &expert.quote {
                for caps in re.captures_iter(text) {
                    let Some(quote) = caps.name("q1").or_else(|| caps.name("q2")) else {
                        continue;
                    };
                    let quote = quote.as_str().trim();
                    if quote.is_empty() {
                        continue;
                    }
                    let Some(whole) = caps.get(0) else { continue };
                    claimed_spans.push(whole.range());
                    quoted_any = true;
                    let claim = quote_claim(
                        EXPERT_CITATION,
                        &expert.name,
                        Some(expert.organization.clone()),
                        quote,
                        whole.as_str(),
                    );
                    if seen.insert(claim.dedup_key()) {
                        claims.push(claim);
                    }
                }
            }

            if quoted_any {
                continue;
            }
            let mentioned = expert
                .mention
                .as_ref()
                .and_then(|re| re.find(text))
                .map(|m| m.as_str().to_string());
            if let Some(raw) = mentioned {
                claims.push(ExtractedClaim {
                    category: Category::ExpertCitations,
                    subtype: EXPERT_MENTION.to_string(),
                    subject: Some(expert.name.clone()),
                    raw_match: raw,
                    value: ClaimValue::Mention {
                        speaker: expert.name.clone(),
                    },
                    unit: Unit::Text,
                });
            }
        }

        claims.extend(self.unknown_citations(text, &claimed_spans));
        claims
    }

    fn is_known(&self, name: &str) -> bool {
        self.experts.iter().any(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// One claim per unregistered speaker, the first in the text.
    fn unknown_citations(&self, text: &str, claimed: &[Range<usize>]) -> Vec<ExtractedClaim> {
        let mut hits = Vec::new();
        for re in [&*GENERIC_ATTRIBUTED, &*GENERIC_SAID].into_iter().flatten() {
            for caps in re.captures_iter(text) {
                let (Some(whole), Some(name), Some(quote)) =
                    (caps.get(0), caps.name("name"), caps.name("quote"))
                else {
                    continue;
                };
                let org = caps.name("org").map(|m| m.as_str().trim().to_string());
                hits.push((whole.range(), name.as_str(), org, quote.as_str().trim()));
            }
        }
        hits.sort_by_key(|(span, ..)| span.start);

        let mut speakers = HashSet::new();
        let mut claims = Vec::new();
        for (span, name, org, quote) in hits {
            let name = name.strip_prefix("The ").unwrap_or(name).trim();
            let lowered = name.to_lowercase();
            if quote.is_empty()
                || is_institution(&lowered, org.as_deref())
                || self.is_known(name)
                || claimed.iter().any(|c| c.start < span.end && span.start < c.end)
                || !speakers.insert(lowered)
            {
                continue;
            }
            claims.push(quote_claim(
                UNKNOWN_EXPERT_CITATION,
                name,
                org,
                quote,
                &text[span],
            ));
        }
        claims
    }
}

fn quote_claim(
    subtype: &str,
    speaker: &str,
    organization: Option<String>,
    text: &str,
    raw: &str,
) -> ExtractedClaim {
    ExtractedClaim {
        category: Category::ExpertCitations,
        subtype: subtype.to_string(),
        subject: Some(speaker.to_string()),
        raw_match: raw.trim().to_string(),
        value: ClaimValue::Quote {
            speaker: speaker.to_string(),
            organization,
            text: text.to_string(),
        },
        unit: Unit::Text,
    }
}

/// Build an extractor for `experts` and run it once.
pub fn extract_citations(text: &str, experts: &[ExpertProfile]) -> Vec<ExtractedClaim> {
    CitationExtractor::new(experts).extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Vec<ExpertProfile> {
        vec![
            ExpertProfile::new(
                "Adam Button",
                "ForexLive",
                &["Markets are pricing in a 80% probability of a 25bp cut in September."],
            ),
            ExpertProfile::new("Kit Juckes", "Societe Generale", &[]),
        ]
    }

    fn subtypes(claims: &[ExtractedClaim]) -> Vec<&str> {
        claims.iter().map(|c| c.subtype.as_str()).collect()
    }

    #[test]
    fn known_expert_said_form() {
        let text = r#"Adam Button of ForexLive said "Markets are pricing a cut.""#;
        let claims = extract_citations(text, &registry());
        assert_eq!(subtypes(&claims), [EXPERT_CITATION]);
        match &claims[0].value {
            ClaimValue::Quote { speaker, organization, text } => {
                assert_eq!(speaker, "Adam Button");
                assert_eq!(organization.as_deref(), Some("ForexLive"));
                assert_eq!(text, "Markets are pricing a cut.");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn known_expert_according_to_form_is_case_insensitive() {
        let text = "according to kit juckes, “EUR/USD looks heavy”";
        let claims = extract_citations(text, &registry());
        assert_eq!(subtypes(&claims), [EXPERT_CITATION]);
    }

    #[test]
    fn mention_only_without_quote() {
        let text = "Kit Juckes has been bearish on the dollar for months.";
        let claims = extract_citations(text, &registry());
        assert_eq!(subtypes(&claims), [EXPERT_MENTION]);
    }

    #[test]
    fn quoted_expert_gets_no_mention() {
        let text = r#"Adam Button said "hold". Adam Button again on the wires."#;
        let claims = extract_citations(text, &registry());
        assert_eq!(subtypes(&claims), [EXPERT_CITATION]);
    }

    #[test]
    fn unknown_speaker_counted_once() {
        let text = r#"Jane Doe of Acme Capital said "EUR/USD at 1.17". Jane Doe said "again""#;
        let claims = extract_citations(text, &registry());
        assert_eq!(subtypes(&claims), [UNKNOWN_EXPERT_CITATION]);
        match &claims[0].value {
            ClaimValue::Quote { organization, .. } => {
                assert_eq!(organization.as_deref(), Some("Acme Capital"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn institutions_are_not_experts() {
        let text = r#"The Fed said "rates stay restrictive". ECB stated "no rush""#;
        assert!(extract_citations(text, &registry()).is_empty());
    }

    #[test]
    fn bank_of_institutions_are_not_experts() {
        let text = r#"Bank of Canada said "policy remains restrictive". Bank of England stated "no rush""#;
        assert!(extract_citations(text, &registry()).is_empty());
        let text = r#"Reserve Bank of Australia warned "inflation is sticky". Swiss National Bank said "franc is strong""#;
        assert!(extract_citations(text, &registry()).is_empty());
    }

    #[test]
    fn person_of_organization_is_still_an_expert() {
        let claims = extract_citations(r#"Jane Doe of Bank Street said "buy dips""#, &[]);
        assert_eq!(subtypes(&claims), [UNKNOWN_EXPERT_CITATION]);
    }

    #[test]
    fn registered_quote_not_recounted_as_unknown() {
        let text = r#"Analyst Adam Button said "fine""#;
        let claims = extract_citations(text, &registry());
        assert_eq!(subtypes(&claims), [EXPERT_CITATION]);
    }

    #[test]
    fn empty_registry_still_finds_unknown_speakers() {
        let claims = extract_citations(r#"Bob Smith warned "careful""#, &[]);
        assert_eq!(subtypes(&claims), [UNKNOWN_EXPERT_CITATION]);
    }
}
