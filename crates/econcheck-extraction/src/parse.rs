//! Value parsers shared by the extraction rules.

/// Parse a decimal written with either `.` or `,` as the separator.
/// Trailing stray punctuation (`4.3.`, `2,9,`) is stripped.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned = raw
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':'))
        .replace(',', ".");
    let value = cleaned.parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Parse a count such as `235,000`, `240500` or `235.5` with an optional
/// thousands scale word (`k`, `thousand`).
///
/// Commas in groups of three are thousands separators, not decimals.
pub fn parse_count(raw: &str, scale: Option<&str>) -> Option<f64> {
    let trimmed = raw
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':'));
    let value = if is_grouped(trimmed) {
        trimmed.replace(',', "").parse::<f64>().ok()?
    } else {
        parse_decimal(trimmed)?
    };
    let multiplier = match scale.map(|s| s.trim().to_lowercase()) {
        Some(s) if s == "k" || s == "thousand" => 1_000.0,
        _ => 1.0,
    };
    Some(value * multiplier)
}

/// `d{1,3}(,ddd)+`
fn is_grouped(s: &str) -> bool {
    let mut groups = s.split(',');
    let Some(head) = groups.next() else {
        return false;
    };
    let head_ok = (1..=3).contains(&head.len()) && head.chars().all(|c| c.is_ascii_digit());
    let mut tail_count = 0;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        tail_count += 1;
    }
    head_ok && tail_count > 0
}

/// Lowercase decision word to `cut`, `hold` or `hike`.
pub fn normalize_decision(raw: &str) -> Option<&'static str> {
    let words: Vec<String> = raw.split_whitespace().map(str::to_lowercase).collect();
    match words.join(" ").as_str() {
        "cut" | "lower" | "reduce" => Some("cut"),
        "hold" | "maintain" | "keep unchanged" => Some("hold"),
        "hike" | "raise" => Some("hike"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_accepts_comma_separator() {
        assert_eq!(parse_decimal("2,9"), Some(2.9));
        assert_eq!(parse_decimal(" 4.35 "), Some(4.35));
    }

    #[test]
    fn decimal_strips_trailing_punctuation() {
        assert_eq!(parse_decimal("4.3."), Some(4.3));
        assert_eq!(parse_decimal("1.0875,"), Some(1.0875));
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert_eq!(parse_decimal("4.3.2"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn count_reads_thousands_separators() {
        assert_eq!(parse_count("235,000", None), Some(235_000.0));
        assert_eq!(parse_count("1,235,000", None), Some(1_235_000.0));
        assert_eq!(parse_count("240500", None), Some(240_500.0));
    }

    #[test]
    fn count_applies_scale() {
        assert_eq!(parse_count("235", Some("K")), Some(235_000.0));
        assert_eq!(parse_count("240.5", Some(" thousand")), Some(240_500.0));
    }

    #[test]
    fn count_with_short_group_is_decimal() {
        assert_eq!(parse_count("2,5", None), Some(2.5));
    }

    #[test]
    fn decisions_normalize_synonyms() {
        assert_eq!(normalize_decision("lower"), Some("cut"));
        assert_eq!(normalize_decision("Reduce"), Some("cut"));
        assert_eq!(normalize_decision("keep  unchanged"), Some("hold"));
        assert_eq!(normalize_decision("raise"), Some("hike"));
        assert_eq!(normalize_decision("pivot"), None);
    }
}
