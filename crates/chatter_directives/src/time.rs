//! Human readable elapsed and remaining time.

use chatter_constant::style::{BROWN, DARK_GREEN, NORMAL, OLIVE, RED};
use chrono::{DateTime, TimeZone, Utc};

const HOUR: i64 = 3600;

/// Formats points in time relative to "now".
///
/// Unparseable input and differences in the wrong direction floor at
/// `0 seconds` instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeAnnotator {
    now: Option<DateTime<Utc>>,
}

impl TimeAnnotator {
    /// Measures against the wall clock.
    pub fn new() -> Self {
        Self { now: None }
    }

    /// Measures against a fixed instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Some(now) }
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// `"2 hours, 5 minutes, 1 second ago"`
    pub fn since(&self, then: Option<DateTime<Utc>>) -> String {
        let secs = then.map_or(0, |then| (self.now() - then).num_seconds());
        format!("{} ago", format_seconds(secs))
    }

    /// `"3 minutes, 20 seconds remaining"`
    pub fn until(&self, then: Option<DateTime<Utc>>) -> String {
        let secs = then.map_or(0, |then| (then - self.now()).num_seconds());
        format!("{} remaining", format_seconds(secs))
    }

    /// Wraps `text` in a colour that goes from green to red as `then` ages:
    /// under 3 hours, under 12, under 24, older. A missing time counts as
    /// fresh.
    pub fn color_with_age(&self, text: &str, then: Option<DateTime<Utc>>) -> String {
        let age = then.map_or(0, |then| (self.now() - then).num_seconds());
        let color = match age {
            a if a < 3 * HOUR => DARK_GREEN,
            a if a < 12 * HOUR => OLIVE,
            a if a < 24 * HOUR => BROWN,
            _ => RED,
        };
        format!("{color}{text}{NORMAL}")
    }
}

/// Accepts RFC 3339 or unix seconds.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<i64>() {
        return from_unix(secs);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn from_unix(secs: i64) -> Option<DateTime<Utc>> {
    if secs < 0 {
        return None;
    }
    Utc.timestamp_opt(secs, 0).single()
}

/// `N hours, M minutes, S seconds`, leaving out zero parts. Negative input
/// counts as zero.
pub fn format_seconds(secs: i64) -> String {
    let secs = secs.max(0);
    let hours = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = secs % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(plural(seconds, "second"));
    }
    parts.join(", ")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
