//! Federal Reserve meetings, rate levels and market-implied probabilities.

use econcheck_core::models::Unit;

use super::{RuleSpec, ValueParser};

const ORDINAL: &str = r"(?:st|nd|rd|th)?\b";
const FED: &str = r"(?:FOMC|Fed)";
const MEETING: &str = r"(?:\s+meeting|\s+decision)";
const SCHEDULED: &str = r"(?:\s+on|\s+scheduled\s+for)?";
const RATE: &str = r"\d+(?:\.\d+)?";

/// Day, optional second day, month, optional year: `17-18 September 2025`.
pub(super) fn day_first(lead: &str) -> String {
    format!(
        r"{lead}\s+(?P<day>\d{{1,2}}){ORDINAL}(?:\s*[-–—]?\s*(?P<day2>\d{{1,2}}){ORDINAL})?\s+(?:of\s+)?(?P<month>[a-z]+)\.?(?:,?\s+(?P<year>\d{{4}}))?"
    )
}

/// Month, day, optional second day, optional year: `September 16-17, 2025`.
pub(super) fn month_first(lead: &str) -> String {
    format!(
        r"{lead}\s+(?P<month>[a-z]+)\.?\s+(?P<day>\d{{1,2}}){ORDINAL}(?:\s*[-–—]?\s*(?P<day2>\d{{1,2}}){ORDINAL})?(?:,?\s+(?P<year>\d{{4}}))?"
    )
}

pub(super) fn fed_meetings() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(
            "fomc_meeting_date",
            day_first(&format!(r"(?i)\b{FED}{MEETING}{SCHEDULED}(?:\s+(?:the|\w+))?")),
            ValueParser::DateSpan,
            Unit::Date,
        ),
        RuleSpec::new(
            "fomc_meeting_range",
            format!(
                r"(?i)\b(?P<day>\d{{1,2}}){ORDINAL}(?:\s*[-–—]\s*|\s+and\s+|\s+to\s+)(?P<day2>\d{{1,2}}){ORDINAL}\s+(?:of\s+)?(?P<month>[a-z]+)(?:,?\s+(?P<year>\d{{4}}))?\s+{FED}{MEETING}"
            ),
            ValueParser::DateSpan,
            Unit::Date,
        ),
        RuleSpec::new(
            "fomc_meeting_explicit",
            month_first(&format!(r"(?i)\b{FED}{MEETING}{SCHEDULED}")),
            ValueParser::DateSpan,
            Unit::Date,
        ),
    ]
}

/// Effective first, so `effective Fed funds rate of 4.33%` is not also
/// counted as a single target rate.
pub(super) fn fed_rates() -> Vec<RuleSpec> {
    const BANK: &str = r"\b(?:Federal\s+Reserve|Federal|Fed|FOMC)(?:\s+(?:target|funds|interest))*\s+rate";
    const LINK: &str = r"(?:\s+(?:of|at|is))?";
    vec![
        RuleSpec::new(
            "fed_rate_effective",
            format!(
                r"(?i)\b(?:effective|actual)(?:\s+(?:Federal\s+Reserve|Federal|Fed|FOMC))?(?:\s+(?:funds|interest))?\s+rate{LINK}\s+(?P<value>{RATE})\s*%"
            ),
            ValueParser::Decimal,
            Unit::Percent,
        ),
        RuleSpec::new(
            "fed_rate_range",
            format!(
                r"(?i){BANK}(?:\s+range)?{LINK}\s+(?P<low>{RATE})\s*%?(?:\s*[-–—]\s*|\s+to\s+)(?P<high>{RATE})\s*%"
            ),
            ValueParser::Range,
            Unit::Percent,
        ),
        RuleSpec::new(
            "fed_rate_single",
            format!(r"(?i){BANK}{LINK}\s+(?P<value>{RATE})\s*%"),
            ValueParser::Decimal,
            Unit::Percent,
        ),
    ]
}

const PROB_LEAD: &str = r"(?i)\b(?:probability|likelihood|chance|odds|market\s+pricing)(?:\s+of)?(?:\s+(?:a|an))?";
const PROB_TAIL: &str = r"(?:\s+in\s+rates)?(?:\s+(?:is|are|at|of|stands\s+at))?\s+(?P<value>\d+(?:[.,]\d+)?)\s*(?:%|percent)";
const CUT: &str = r"(?:cut|decrease|reduction|easing|lowering)";
const HOLD: &str = r"(?:hold|pause|unchanged|maintaining)";
const HIKE: &str = r"(?:hike|increase|raising)";

fn probability(subtype: &str, bank: &str, action: &str) -> RuleSpec {
    RuleSpec::new(
        subtype,
        format!(r"{PROB_LEAD}{bank}{action}{PROB_TAIL}"),
        ValueParser::Decimal,
        Unit::Percent,
    )
    .own_subject()
    .plausible(0.0, 100.0)
}

fn sized_cut(bp: u32) -> String {
    let size = format!(r"{bp}\s*(?:bp|basis\s+points?)");
    format!(r"(?:\s+{size}\s+(?:rate\s+)?{CUT}|\s+(?:rate\s+)?{CUT}\s+of\s+{size})")
}

/// Subtypes read `{bank}_prob_{bucket}`; a bare `cut` bucket means any cut size.
pub(super) fn rate_probabilities() -> Vec<RuleSpec> {
    const FED_OPT: &str = r"(?:\s+(?:Fed|FOMC))?";
    const BOC: &str = r"\s+(?:BoC|Bank\s+of\s+Canada)(?:'s)?";
    let plain = |action: &str| format!(r"\s+(?:rate\s+)?{action}");
    vec![
        probability("fed_prob_cut_25bp", FED_OPT, &sized_cut(25)),
        probability("fed_prob_cut_50bp", FED_OPT, &sized_cut(50)),
        probability("fed_prob_hike", FED_OPT, &plain(HIKE)),
        probability("fed_prob_hold", FED_OPT, &plain(HOLD)),
        probability("fed_prob_cut", FED_OPT, &plain(CUT)),
        probability("boc_prob_hold", BOC, &plain(HOLD)),
        probability("boc_prob_cut", BOC, &plain(CUT)),
    ]
}
