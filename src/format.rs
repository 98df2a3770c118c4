//! Display Formatting
//!
//! Pure helpers turning API values into display strings and CSS classes.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Map an opportunity status to its badge class.
/// Unknown statuses fall through to the last branch.
pub fn opportunity_status_class(status: &str) -> &'static str {
    match status {
        "discovered" => "status-badge blue",
        "reviewed" => "status-badge yellow",
        "applied" => "status-badge purple",
        _ => "status-badge green",
    }
}

/// Map a project status to its badge class.
/// Unknown statuses fall through to the last branch.
pub fn project_status_class(status: &str) -> &'static str {
    match status {
        "in_progress" => "status-badge blue",
        "review" => "status-badge yellow",
        "delivered" => "status-badge green",
        _ => "status-badge purple",
    }
}

/// Scale a 0-1 quality score to a whole percent string ("83%")
pub fn percent(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

/// Budget as "$" plus the bare numeric value
pub fn budget_label(amount: f64) -> String {
    format!("${}", amount)
}

/// AI score, or "N/A" when the backend has not scored yet
pub fn score_label(score: Option<f64>) -> String {
    match score {
        Some(value) => value.to_string(),
        None => "N/A".to_string(),
    }
}

/// Short month/day/year rendering of an API timestamp.
/// Unparseable input is shown as received.
pub fn short_date(ts: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(ts, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }
    ts.to_string()
}

/// Project deadline, or "N/A" when none is set
pub fn deadline_label(deadline: Option<&str>) -> String {
    match deadline {
        Some(ts) => short_date(ts),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opportunity_statuses_map_to_fixed_classes() {
        assert_eq!(opportunity_status_class("discovered"), "status-badge blue");
        assert_eq!(opportunity_status_class("reviewed"), "status-badge yellow");
        assert_eq!(opportunity_status_class("applied"), "status-badge purple");
        assert_eq!(opportunity_status_class("won"), "status-badge green");
    }

    #[test]
    fn unknown_opportunity_status_falls_to_default() {
        assert_eq!(
            opportunity_status_class("unknown-value"),
            "status-badge green"
        );
    }

    #[test]
    fn project_statuses_map_to_fixed_classes() {
        assert_eq!(project_status_class("in_progress"), "status-badge blue");
        assert_eq!(project_status_class("review"), "status-badge yellow");
        assert_eq!(project_status_class("delivered"), "status-badge green");
        assert_eq!(project_status_class("archived"), "status-badge purple");
    }

    #[test]
    fn percent_scales_and_rounds() {
        assert_eq!(percent(0.83), "83%");
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(1.0), "100%");
        assert_eq!(percent(0.625), "63%");
    }

    #[test]
    fn budget_keeps_bare_numeric_form() {
        assert_eq!(budget_label(2500.0), "$2500");
        assert_eq!(budget_label(1234.5), "$1234.5");
        assert_eq!(budget_label(0.0), "$0");
    }

    #[test]
    fn score_label_handles_missing_score() {
        assert_eq!(score_label(Some(8.7)), "8.7");
        assert_eq!(score_label(None), "N/A");
    }

    #[test]
    fn short_date_handles_common_timestamp_shapes() {
        assert_eq!(short_date("2026-08-25T14:30:00"), "8/25/2026");
        assert_eq!(short_date("2026-08-25T14:30:00.123456"), "8/25/2026");
        assert_eq!(short_date("2026-08-25T14:30:00+00:00"), "8/25/2026");
        assert_eq!(short_date("2026-08-25"), "8/25/2026");
    }

    #[test]
    fn short_date_passes_through_garbage() {
        assert_eq!(short_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn deadline_label_defaults_to_na() {
        assert_eq!(deadline_label(None), "N/A");
        assert_eq!(deadline_label(Some("2026-12-01T00:00:00")), "12/1/2026");
    }
}
