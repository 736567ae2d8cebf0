use chrono::{DateTime, Utc};

const UNKNOWN: &str = "Unknown";

/// Human distance between an RFC 3339 timestamp and `now`, e.g.
/// `3 minutes ago`. `Unknown` when the timestamp is missing or unparseable.
pub fn relative_age(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(parsed) = timestamp.and_then(|ts| DateTime::parse_from_rfc3339(ts).ok()) else {
        return UNKNOWN.to_string();
    };

    let seconds = now
        .signed_duration_since(parsed.with_timezone(&Utc))
        .num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    match seconds {
        // Clock skew puts the object slightly in the future
        s if s < 45 => "less than a minute ago".to_string(),
        s if s < 90 => "1 minute ago".to_string(),
        _ if minutes < 45 => format!("{} minutes ago", minutes),
        _ if minutes < 90 => "about 1 hour ago".to_string(),
        _ if hours < 24 => format!("about {} hours ago", hours),
        _ if days < 30 => plural(days, "day"),
        _ if days < 365 => plural(days / 30, "month"),
        _ => plural(days / 365, "year"),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
