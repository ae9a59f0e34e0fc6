//! Non-Fed central banks from the registry, plus USD/CAD levels.

use econcheck_core::models::{Unit, CENTRAL_BANKS};

use super::policy::{day_first, month_first};
use super::{RuleSpec, ValueParser};

pub(super) fn other_central_banks() -> Vec<RuleSpec> {
    let mut specs = Vec::new();
    for bank in CENTRAL_BANKS.iter().filter(|b| b.code != "fed") {
        let names = format!(
            r"(?i)\b(?:{}|{})",
            regex::escape(bank.name),
            regex::escape(bank.short)
        );
        let meeting = format!(r"{names}(?:\s+meeting|\s+decision)(?:\s+on|\s+scheduled\s+for)?");
        let code = bank.code;

        specs.push(
            RuleSpec::new(
                &format!("{code}_meeting_date"),
                day_first(&format!(r"{meeting}(?:\s+(?:the|\w+))?")),
                ValueParser::SingleDate,
                Unit::Date,
            )
            .subject(code),
        );
        specs.push(
            RuleSpec::new(
                &format!("{code}_meeting_explicit"),
                month_first(&meeting),
                ValueParser::SingleDate,
                Unit::Date,
            )
            .subject(code),
        );
        specs.push(
            RuleSpec::new(
                &format!("{code}_current_rate"),
                format!(
                    r"{names}(?:'s)?(?:\s+(?:current|present|existing|actual))?(?:\s+(?:interest|policy|benchmark))?\s+rate(?:\s+(?:of|at|is))?\s+(?P<value>\d+(?:\.\d+)?)\b"
                ),
                ValueParser::Decimal,
                Unit::Percent,
            )
            .subject(code)
            .plausible(-1.0, 25.0),
        );
        specs.push(
            RuleSpec::new(
                &format!("{code}_expected_decision"),
                format!(
                    r"{names}(?:\s+is)?\s+(?:expected|anticipated|projected|forecast|predicted|likely)(?:\s+to)?\s+(?P<decision>hold|cut|hike|raise|lower|reduce|maintain|keep\s+unchanged)(?:\s+(?:its|their))?(?:\s+(?:interest|policy|benchmark))?\s+rates?\b"
                ),
                ValueParser::Decision,
                Unit::Decision,
            )
            .subject(code),
        );
    }

    const LEVEL: &str = r"(?P<value>\d+(?:\.\d+)?)\b";
    const NEAR: &str = r"(?:\s+(?:at|around|near|approximately|about|close\s+to))?";
    for (subtype, marker) in [
        ("usd_cad_support", r"\s+(?:support|floor|bottom)"),
        ("usd_cad_resistance", r"\s+(?:resistance|ceiling|top)"),
        ("usd_cad_rate", r"(?:\s+trading\s+at)?"),
    ] {
        specs.push(
            RuleSpec::new(
                subtype,
                format!(r"(?i)\bUSD/CAD{marker}{NEAR}\s+{LEVEL}"),
                ValueParser::Decimal,
                Unit::Rate,
            )
            .own_subject()
            .plausible(1.0, 2.0),
        );
    }
    specs
}
