//! Internship duration and lifecycle-status utilities.
//!
//! Pure functions invoked at read time by the intern handlers and row
//! mappers. Status is always derived from the dates, never stored back, with
//! one exception: `Terminated` is sticky and short-circuits derivation.
//! Malformed date strings fail open to `Active` (logged, not thrown) so bad
//! legacy data never blocks a listing.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::InternshipStatus;

/// Parse a stored date string: plain `YYYY-MM-DD` or an RFC 3339 timestamp.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Elapsed time between two instants in days, rounded up for partial days.
/// `end` defaults to now. Negative when `start` is in the future.
pub fn calculate_duration_in_days(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> i64 {
    let end = end.unwrap_or_else(Utc::now);
    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        seconds / 86_400
    } else {
        (seconds + 86_399) / 86_400
    }
}

/// Render a day count as a tiered human string: days under a week, weeks and
/// days under a month, months and weeks under a year, then years and months.
pub fn format_duration_from_days(days: i64) -> String {
    fn unit(count: i64, singular: &str) -> String {
        if count == 1 {
            format!("1 {}", singular)
        } else {
            format!("{} {}s", count, singular)
        }
    }

    fn pair(major: i64, major_name: &str, minor: i64, minor_name: &str) -> String {
        if minor == 0 {
            unit(major, major_name)
        } else {
            format!("{}, {}", unit(major, major_name), unit(minor, minor_name))
        }
    }

    if days < 7 {
        unit(days, "day")
    } else if days < 30 {
        pair(days / 7, "week", days % 7, "day")
    } else if days < 365 {
        pair(days / 30, "month", (days % 30) / 7, "week")
    } else {
        pair(days / 365, "year", (days % 365) / 30, "month")
    }
}

fn internship_duration_at(start: &str, end: Option<&str>, today: NaiveDate) -> String {
    let Some(start) = parse_date(start) else {
        tracing::warn!("Unparsable internship start date: {:?}", start);
        return String::new();
    };
    let end = match end {
        Some(text) => match parse_date(text) {
            Some(date) => date,
            None => {
                tracing::warn!("Unparsable internship end date: {:?}", text);
                today
            }
        },
        None => today,
    };

    let days = (end - start).num_days();
    if days < 0 {
        "Not started".to_string()
    } else if days == 0 {
        "Started today".to_string()
    } else {
        format_duration_from_days(days)
    }
}

/// Human-readable elapsed internship time from `start_date` to `end_date`
/// (default: today). A future start yields "Not started".
pub fn calculate_internship_duration(start: &str, end: Option<&str>) -> String {
    internship_duration_at(start, end, Utc::now().date_naive())
}

fn internship_status_at(
    start: &str,
    end: Option<&str>,
    current: Option<InternshipStatus>,
    today: NaiveDate,
) -> InternshipStatus {
    // Terminated is sticky regardless of dates.
    if current == Some(InternshipStatus::Terminated) {
        return InternshipStatus::Terminated;
    }

    let Some(start) = parse_date(start) else {
        tracing::warn!("Unparsable internship start date, defaulting to Active: {:?}", start);
        return InternshipStatus::Active;
    };

    if today < start {
        return InternshipStatus::Upcoming;
    }

    if let Some(text) = end {
        match parse_date(text) {
            Some(end) if today > end => return InternshipStatus::Completed,
            Some(_) => {}
            None => {
                tracing::warn!("Unparsable internship end date, defaulting to Active: {:?}", text);
            }
        }
    }

    InternshipStatus::Active
}

/// Derive the lifecycle status of an internship from its dates.
pub fn get_internship_status(
    start: &str,
    end: Option<&str>,
    current: Option<InternshipStatus>,
) -> InternshipStatus {
    internship_status_at(start, end, current, Utc::now().date_naive())
}

/// True when the internship is currently in its Active window.
pub fn is_internship_active(
    start: &str,
    end: Option<&str>,
    current: Option<InternshipStatus>,
) -> bool {
    get_internship_status(start, end, current) == InternshipStatus::Active
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn iso(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    #[test]
    fn duration_in_days_rounds_up_partial_days() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        assert_eq!(calculate_duration_in_days(start, Some(end)), 2);

        let exact = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        assert_eq!(calculate_duration_in_days(start, Some(exact)), 1);

        // Start in the future yields a negative count.
        assert!(calculate_duration_in_days(end, Some(start)) < 0);
    }

    #[test]
    fn tiered_duration_strings() {
        assert_eq!(format_duration_from_days(1), "1 day");
        assert_eq!(format_duration_from_days(5), "5 days");
        assert_eq!(format_duration_from_days(7), "1 week");
        assert_eq!(format_duration_from_days(10), "1 week, 3 days");
        assert_eq!(format_duration_from_days(21), "3 weeks");
        assert_eq!(format_duration_from_days(30), "1 month");
        assert_eq!(format_duration_from_days(45), "1 month, 2 weeks");
        assert_eq!(format_duration_from_days(365), "1 year");
        assert_eq!(format_duration_from_days(400), "1 year, 1 month");
        assert_eq!(format_duration_from_days(760), "2 years, 1 month");
    }

    #[test]
    fn internship_duration_tiers_and_edges() {
        let ten_days_ago = today().checked_sub_days(Days::new(10)).unwrap();
        assert_eq!(
            internship_duration_at(&iso(ten_days_ago), None, today()),
            "1 week, 3 days"
        );

        assert_eq!(internship_duration_at(&iso(today()), None, today()), "Started today");

        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        assert_eq!(internship_duration_at(&iso(tomorrow), None, today()), "Not started");
    }

    #[test]
    fn status_upcoming_active_completed() {
        let yesterday = iso(today().checked_sub_days(Days::new(1)).unwrap());
        let tomorrow = iso(today().checked_add_days(Days::new(1)).unwrap());
        let last_year = iso(today().checked_sub_days(Days::new(400)).unwrap());

        assert_eq!(
            internship_status_at(&tomorrow, None, None, today()),
            InternshipStatus::Upcoming
        );
        assert_eq!(
            internship_status_at(&yesterday, None, Some(InternshipStatus::Active), today()),
            InternshipStatus::Active
        );
        assert_eq!(
            internship_status_at(
                &last_year,
                Some(&yesterday),
                Some(InternshipStatus::Active),
                today()
            ),
            InternshipStatus::Completed
        );
        // End date today is still in-window.
        assert_eq!(
            internship_status_at(&last_year, Some(&iso(today())), None, today()),
            InternshipStatus::Active
        );
    }

    #[test]
    fn terminated_is_sticky() {
        let tomorrow = iso(today().checked_add_days(Days::new(1)).unwrap());
        assert_eq!(
            internship_status_at(&tomorrow, None, Some(InternshipStatus::Terminated), today()),
            InternshipStatus::Terminated
        );
        assert_eq!(
            internship_status_at("garbage", None, Some(InternshipStatus::Terminated), today()),
            InternshipStatus::Terminated
        );
    }

    #[test]
    fn active_window_check() {
        let yesterday = iso(chrono::Utc::now().date_naive() - chrono::Duration::days(1));
        let tomorrow = iso(chrono::Utc::now().date_naive() + chrono::Duration::days(1));
        assert!(is_internship_active(&yesterday, None, None));
        assert!(is_internship_active(&yesterday, Some(&tomorrow), None));
        assert!(!is_internship_active(&tomorrow, None, None));
        assert!(!is_internship_active(
            &yesterday,
            None,
            Some(InternshipStatus::Terminated)
        ));
    }

    #[test]
    fn malformed_dates_fail_open_to_active() {
        assert_eq!(
            internship_status_at("not-a-date", None, None, today()),
            InternshipStatus::Active
        );
        let yesterday = iso(today().checked_sub_days(Days::new(1)).unwrap());
        assert_eq!(
            internship_status_at(&yesterday, Some("not-a-date"), None, today()),
            InternshipStatus::Active
        );
    }
}
