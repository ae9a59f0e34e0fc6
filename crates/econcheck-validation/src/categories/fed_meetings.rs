use chrono::NaiveDate;
use econcheck_core::models::{
    CategoryReport, ClaimValue, ComparisonOutcome, ExtractedClaim, FedMeeting, FedMeetings,
};

const KIND: &str = "fomc_meeting_date";

/// A stated span must equal a scheduled meeting's start and end. A single
/// date must equal a meeting's decision day.
pub fn validate(claims: &[ExtractedClaim], reference: &FedMeetings) -> CategoryReport {
    let mut report = CategoryReport::new();
    let Some(first) = reference.meetings.first() else {
        return report;
    };
    for claim in claims {
        let ClaimValue::Date { start, end } = claim.value else {
            continue;
        };
        let matched = reference.meetings.iter().find(|m| matches(m, start, end));
        let shown = matched.unwrap_or(first);
        report.record(ComparisonOutcome {
            kind: KIND.to_string(),
            article_value: span(start, end),
            current_value: span(shown.start_date, shown.end_date),
            is_accurate: matched.is_some(),
            difference: None,
            citation: None,
        });
    }
    report
}

fn matches(meeting: &FedMeeting, start: NaiveDate, end: NaiveDate) -> bool {
    if start == end {
        start == meeting.end_date || (start == meeting.start_date && meeting.start_date == meeting.end_date)
    } else {
        start == meeting.start_date && end == meeting.end_date
    }
}

fn span(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start} to {end}")
    }
}
