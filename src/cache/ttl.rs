//! Duration strings used for the cache TTL.

use anyhow::{bail, Context, Result};
use chrono::Duration;

/// Parse a TTL string like "10m", "1h", "90s".
///
/// A bare number is taken as seconds.
pub fn parse_ttl(ttl: &str) -> Result<Duration> {
    let ttl = ttl.trim().to_lowercase();
    if ttl.is_empty() {
        bail!("empty duration");
    }

    let (digits, unit): (&str, fn(i64) -> Option<Duration>) =
        if let Some(d) = ttl.strip_suffix('d') {
            (d, Duration::try_days)
        } else if let Some(h) = ttl.strip_suffix('h') {
            (h, Duration::try_hours)
        } else if let Some(m) = ttl.strip_suffix('m') {
            (m, Duration::try_minutes)
        } else if let Some(s) = ttl.strip_suffix('s') {
            (s, Duration::try_seconds)
        } else {
            (ttl.as_str(), Duration::try_seconds)
        };

    let n: i64 = digits
        .trim()
        .parse()
        .with_context(|| format!("invalid duration '{}'", ttl))?;
    if n < 0 {
        bail!("duration must not be negative: '{}'", ttl);
    }
    unit(n).with_context(|| format!("duration out of range: '{}'", ttl))
}

/// Format a duration for display, largest whole unit only.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds().max(0);

    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

/// Human-readable age such as "just now" or "12m ago".
pub fn format_age(age: Duration) -> String {
    if age < Duration::seconds(5) {
        "just now".to_string()
    } else {
        format!("{} ago", format_duration(age))
    }
}
