//! Month names and calendar date resolution.

use chrono::{Datelike, NaiveDate};

/// How to pick the year of a date written without one, and whether a
/// stated year is trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearPolicy {
    /// Every date resolves into the current calendar year, even when the
    /// text names another year.
    #[default]
    CurrentYear,
    /// An explicitly stated year wins; the current year fills in otherwise.
    PreferStated,
}

impl YearPolicy {
    pub fn from_strict(strict_year_validation: bool) -> Self {
        if strict_year_validation {
            Self::PreferStated
        } else {
            Self::CurrentYear
        }
    }
}

/// Full or abbreviated English month name to its number.
pub fn month_to_number(name: &str) -> Option<u32> {
    let month = match name.trim().trim_end_matches('.').to_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Build a calendar date from text parts. `None` for impossible dates.
pub fn resolve_date(
    day: u32,
    month: u32,
    stated_year: Option<i32>,
    today: NaiveDate,
    policy: YearPolicy,
) -> Option<NaiveDate> {
    let year = match (policy, stated_year) {
        (YearPolicy::PreferStated, Some(year)) => year,
        _ => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}
