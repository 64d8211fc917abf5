// Timestamp formatters
//
// History rows show how long ago a conversion happened; after a week the
// absolute date is more useful than "9 days ago".

use chrono::{DateTime, Utc};

/// Format an entry timestamp relative to now
pub fn relative_time(timestamp: DateTime<Utc>) -> String {
    format_relative(timestamp, Utc::now())
}

/// Format `timestamp` relative to `now` (split out for testing)
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);

    // A timestamp from the future means clock skew; treat it as fresh
    let mins = diff.num_minutes().max(0);
    let hours = diff.num_hours().max(0);
    let days = diff.num_days().max(0);

    match (mins, hours, days) {
        (0, _, _) => "just now".to_string(),
        (1, _, _) => "1 minute ago".to_string(),
        (m, 0, _) => format!("{} minutes ago", m),
        (_, 1, _) => "1 hour ago".to_string(),
        (_, h, 0) => format!("{} hours ago", h),
        (_, _, 1) => "yesterday".to_string(),
        (_, _, d) if d < 7 => format!("{} days ago", d),
        _ => timestamp.format("%b %-d, %Y %H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-08-06T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(format_relative(now(), now()), "just now");
        assert_eq!(
            format_relative(now() - Duration::seconds(30), now()),
            "just now"
        );
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(
            format_relative(now() + Duration::minutes(5), now()),
            "just now"
        );
    }

    #[test]
    fn test_minutes() {
        assert_eq!(
            format_relative(now() - Duration::minutes(1), now()),
            "1 minute ago"
        );
        assert_eq!(
            format_relative(now() - Duration::minutes(45), now()),
            "45 minutes ago"
        );
    }

    #[test]
    fn test_hours() {
        assert_eq!(
            format_relative(now() - Duration::hours(1), now()),
            "1 hour ago"
        );
        assert_eq!(
            format_relative(now() - Duration::hours(23), now()),
            "23 hours ago"
        );
    }

    #[test]
    fn test_days() {
        assert_eq!(
            format_relative(now() - Duration::days(1), now()),
            "yesterday"
        );
        assert_eq!(
            format_relative(now() - Duration::days(6), now()),
            "6 days ago"
        );
    }

    #[test]
    fn test_old_entries_use_absolute_date() {
        let formatted = format_relative(now() - Duration::days(10), now());
        assert!(formatted.starts_with("Jul 27, 2026"));
    }
}
