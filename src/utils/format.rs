// src/utils/format.rs
use chrono::{NaiveDateTime, Utc};

use crate::history::TIMESTAMP_FORMAT;

// Render a stored timestamp as a relative duration for display
pub fn format_time_ago(timestamp: &str) -> String {
    let parsed = match NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        Ok(parsed) => parsed,
        // An unreadable stamp is shown verbatim rather than dropped
        Err(_) => return timestamp.to_string(),
    };

    let now = Utc::now();
    let duration = now.signed_duration_since(parsed.and_utc());

    let seconds = duration.num_seconds();

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else if seconds < 2592000 {
        format!("{} days ago", duration.num_days())
    } else if seconds < 31536000 {
        format!("{} months ago", duration.num_days() / 30)
    } else {
        format!("{} years ago", duration.num_days() / 365)
    }
}

// Truncate a string if it's too long, counting characters rather than
// bytes so multi-byte content never splits mid-character
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stamp(ago: Duration) -> String {
        (Utc::now() - ago).format(TIMESTAMP_FORMAT).to_string()
    }

    #[test]
    fn test_time_ago_buckets() {
        assert_eq!(format_time_ago(&stamp(Duration::seconds(10))), "10 seconds ago");
        assert_eq!(format_time_ago(&stamp(Duration::minutes(5))), "5 minutes ago");
        assert_eq!(format_time_ago(&stamp(Duration::hours(3))), "3 hours ago");
        assert_eq!(format_time_ago(&stamp(Duration::days(2))), "2 days ago");
    }

    #[test]
    fn test_time_ago_unparseable_is_shown_verbatim() {
        assert_eq!(format_time_ago("yesterday-ish"), "yesterday-ish");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("exactly-ten", 11), "exactly-ten");
        assert_eq!(
            truncate_string("a-very-long-password-goes-here", 12),
            "a-very-lo..."
        );
    }

    #[test]
    fn test_truncate_string_multibyte() {
        // Character counts, not byte counts: nine emoji are 36 bytes but
        // fit a 32-character width untouched
        let password = "🔐".repeat(9);
        assert_eq!(truncate_string(&password, 32), password);

        let long = "🔐".repeat(40);
        assert_eq!(truncate_string(&long, 12), format!("{}...", "🔐".repeat(9)));
    }

    #[test]
    fn test_truncate_string_tiny_width() {
        // Widths smaller than the ellipsis degrade instead of underflowing
        assert_eq!(truncate_string("abcdef", 2), "...");
        assert_eq!(truncate_string("abcdef", 0), "...");
    }
}
