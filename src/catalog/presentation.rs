//! Display strings shared by the feed, the detail view and the dashboard.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::models::{SignalStatus, SignalTag};

/// Relative age of a signal, switching to a calendar date in `tz` after a
/// week.
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>, tz: Tz) -> String {
    let seconds = (now - at).num_milliseconds() as f64 / 1000.0;
    let seconds = seconds.round();
    let minutes = (seconds / 60.0).round() as i64;
    let hours = (minutes as f64 / 60.0).round() as i64;
    let days = (hours as f64 / 24.0).round() as i64;

    if seconds < 60.0 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days <= 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        at.with_timezone(&tz).format("%b %-d, %Y").to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

pub fn status_label(status: SignalStatus) -> &'static str {
    match status {
        SignalStatus::Active => "Active",
        SignalStatus::Achieved => "Achieved (TP)",
        SignalStatus::Canceled => "Canceled (SL)",
    }
}

pub fn tag_label(tag: SignalTag) -> &'static str {
    match tag {
        SignalTag::Free => "Free",
        SignalTag::Vip => "VIP",
        SignalTag::Both => "VIP & Free",
    }
}
