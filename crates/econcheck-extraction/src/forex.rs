//! Currency pair registry and pair attribution for context quotes.

/// A tracked pair with the window a plausible quote falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForexPair {
    pub label: &'static str,
    pub low: f64,
    pub high: f64,
}

impl ForexPair {
    pub fn is_plausible(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

pub const PAIRS: [ForexPair; 3] = [
    ForexPair { label: "EUR/USD", low: 1.0, high: 1.5 },
    ForexPair { label: "GBP/USD", low: 1.0, high: 1.5 },
    ForexPair { label: "USD/JPY", low: 100.0, high: 160.0 },
];

pub fn pair(label: &str) -> Option<&'static ForexPair> {
    PAIRS.iter().find(|p| p.label.eq_ignore_ascii_case(label))
}

/// Decide which pair a context quote such as `Current Price: 1.2680 |`
/// belongs to.
///
/// A trailing `for PAIR` is binding. Otherwise the closest pair label
/// earlier on the same line wins if the value is plausible for it, and
/// failing that the first pair whose window holds the value.
pub fn attribute_pair(
    text: &str,
    match_start: usize,
    stated: Option<&str>,
    value: f64,
) -> Option<&'static ForexPair> {
    if let Some(label) = stated {
        return pair(label).filter(|p| p.is_plausible(value));
    }

    let line_start = text[..match_start].rfind('\n').map_or(0, |i| i + 1);
    let before = text[line_start..match_start].to_ascii_uppercase();
    let nearest = PAIRS
        .iter()
        .filter_map(|p| before.rfind(p.label).map(|pos| (pos, p)))
        .max_by_key(|(pos, _)| *pos)
        .map(|(_, p)| p);
    if let Some(p) = nearest.filter(|p| p.is_plausible(value)) {
        return Some(p);
    }

    PAIRS.iter().find(|p| p.is_plausible(value))
}
