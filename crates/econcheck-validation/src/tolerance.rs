//! Comparison predicates shared by the category validators.
//!
//! Thresholds written `≤` include their bound up to [`EPSILON`], so a
//! claim of `3.2` against `3.1` counts as within `0.1` despite binary
//! floating point.

/// Slack applied to inclusive bounds.
pub const EPSILON: f64 = 1e-9;

/// Forex quotes: relative difference below 1%.
pub const FOREX_RELATIVE_PCT: f64 = 1.0;
/// Inflation and unemployment rates: within 0.1 percentage points.
pub const MACRO_RATE_ABS: f64 = 0.1;
/// Jobless claims: relative difference below 2%.
pub const CLAIMS_RELATIVE_PCT: f64 = 2.0;
pub const TREASURY_ABS: f64 = 0.15;
/// Each bound of a policy rate range.
pub const POLICY_RANGE_ABS: f64 = 0.01;
/// Single or effective policy rate.
pub const POLICY_RATE_ABS: f64 = 0.05;
/// Rate-change probabilities, in percentage points.
pub const PROBABILITY_ABS: f64 = 10.0;
pub const DXY_RELATIVE_PCT: f64 = 1.0;
pub const OTHER_BANK_RATE_ABS: f64 = 0.25;
pub const USD_CAD_LEVEL_PCT: f64 = 1.0;
pub const USD_CAD_TECHNICAL_PCT: f64 = 0.5;

pub fn absolute_difference(article: f64, reference: f64) -> f64 {
    (article - reference).abs()
}

/// `|article - reference| / |reference|` in percent. Infinite when the
/// reference is zero and the claim is not.
pub fn relative_difference_pct(article: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        if article == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        (article - reference).abs() / reference.abs() * 100.0
    }
}

/// `|article - reference| <= limit`.
pub fn within_absolute(article: f64, reference: f64, limit: f64) -> bool {
    absolute_difference(article, reference) <= limit + EPSILON
}

/// Relative difference strictly below `limit_pct`.
pub fn within_relative(article: f64, reference: f64, limit_pct: f64) -> bool {
    relative_difference_pct(article, reference) < limit_pct
}

/// Relative difference at most `limit_pct`.
pub fn within_relative_inclusive(article: f64, reference: f64, limit_pct: f64) -> bool {
    relative_difference_pct(article, reference) <= limit_pct + EPSILON
}

/// Both bounds within `limit` of the reference bounds.
pub fn range_matches(low: f64, high: f64, ref_low: f64, ref_high: f64, limit: f64) -> bool {
    within_absolute(low, ref_low, limit) && within_absolute(high, ref_high, limit)
}

/// `low <= value <= high`.
pub fn range_contains(low: f64, high: f64, value: f64) -> bool {
    low - EPSILON <= value && value <= high + EPSILON
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Differences go into the report rounded; non-finite ones are left out.
pub fn reported(difference: f64) -> Option<f64> {
    difference.is_finite().then(|| round2(difference))
}
