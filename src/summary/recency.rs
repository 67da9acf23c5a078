use chrono::{DateTime, Duration, Utc};

/// Format the recency suffix for a summary:
/// - Relative for <24 hours: "(2h0m ago)", "(20m ago)"
/// - Absolute for ≥24 hours: "(Jan 15)"
pub fn format_recency(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*timestamp);

    if elapsed < Duration::hours(24) {
        format!("({} ago)", format_relative(elapsed))
    } else {
        format!("({})", format_absolute(timestamp))
    }
}

/// Elapsed time rounded to the nearest minute, e.g. "2h0m" or "45m"
fn format_relative(elapsed: Duration) -> String {
    // Timestamps slightly in the future (clock skew) count as zero
    let millis = elapsed.num_milliseconds().max(0);
    let minutes = (millis + 30_000) / 60_000;
    let hours = minutes / 60;

    if hours > 0 { format!("{}h{}m", hours, minutes % 60) } else { format!("{}m", minutes) }
}

fn format_absolute(timestamp: &DateTime<Utc>) -> String {
    // "Jan 2"
    timestamp.format("%b %-d").to_string()
}
