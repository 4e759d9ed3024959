//! Attendance time utilities.
//!
//! Punch times are stored as free-form text in whatever format they arrived in
//! (12-hour with AM/PM or 24-hour); normalization happens at read/display time.
//! Every function here is total: malformed input degrades to a safe default
//! instead of an error, so legacy records never block a page.

/// Minutes in a day, used for midnight wraparound.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a time string into minutes since midnight.
///
/// Accepts `H:MM AM|PM` (case-insensitive, hour 1-12) and 24-hour `H:MM` or
/// `H:MM:SS` (hour 0-23). Returns `None` for anything malformed or out of
/// range. 12:00 AM maps to 0, 12:00 PM to 720.
pub fn parse_time_to_minutes(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // Split off a trailing AM/PM marker if present.
    let (clock, meridiem) = match text.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if tail.eq_ignore_ascii_case("am") => (head.trim(), Some(false)),
        Some((head, tail)) if tail.eq_ignore_ascii_case("pm") => (head.trim(), Some(true)),
        _ => (text, None),
    };

    let mut parts = clock.split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = parts.next()?.parse().ok()?;
    // Seconds are accepted in 24-hour form and ignored.
    if let Some(seconds) = parts.next() {
        if meridiem.is_some() {
            return None;
        }
        let _: u32 = seconds.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    if minute > 59 {
        return None;
    }

    match meridiem {
        Some(is_pm) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            let hour24 = match (hour, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            };
            Some(hour24 * 60 + minute)
        }
        None => {
            if hour > 23 {
                return None;
            }
            Some(hour * 60 + minute)
        }
    }
}

/// Render minutes-since-midnight as zero-padded 24-hour `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Normalize a stored time string to canonical `HH:MM` 24-hour form.
///
/// On parse failure the original input is returned unchanged, so unparsable
/// legacy data still displays as-is.
pub fn format_time_for_display(text: &str) -> String {
    match parse_time_to_minutes(text) {
        Some(minutes) => format_minutes(minutes),
        None => {
            if !text.is_empty() {
                tracing::debug!("Unparsable time string left as-is: {:?}", text);
            }
            text.to_string()
        }
    }
}

/// Compute the elapsed span between two punches as an `H:MM` string.
///
/// Hours are unpadded, minutes zero-padded ("8:05"). A checkout earlier in the
/// day than the checkin is treated as crossing midnight. Missing or unparsable
/// input yields "0:00".
pub fn calculate_total_hours(check_in: &str, check_out: &str) -> String {
    let (Some(start), Some(end)) = (
        parse_time_to_minutes(check_in),
        parse_time_to_minutes(check_out),
    ) else {
        return "0:00".to_string();
    };

    let elapsed = if end >= start {
        end - start
    } else {
        end + MINUTES_PER_DAY - start
    };

    format!("{}:{:02}", elapsed / 60, elapsed % 60)
}

/// Convert an `H:MM` span (as produced by [`calculate_total_hours`]) to
/// decimal hours, e.g. "8:30" -> 8.5. Unparsable input yields 0.0.
pub fn duration_to_decimal_hours(duration: &str) -> f64 {
    let Some((hours, minutes)) = duration.split_once(':') else {
        return 0.0;
    };
    let (Ok(hours), Ok(minutes)) = (hours.trim().parse::<u32>(), minutes.trim().parse::<u32>())
    else {
        return 0.0;
    };
    f64::from(hours) + f64::from(minutes) / 60.0
}

/// True when a punch-in at `check_in` counts as late against the `HH:MM`
/// cutoff. Unparsable punch times are not flagged late.
pub fn is_late(check_in: &str, cutoff: &str) -> bool {
    match (parse_time_to_minutes(check_in), parse_time_to_minutes(cutoff)) {
        (Some(punch), Some(limit)) => punch > limit,
        _ => false,
    }
}
