use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trailing time range used to scope statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsWindow {
    All,
    Day,
    Week,
    Month,
}

impl StatsWindow {
    pub const ALL: [StatsWindow; 4] = [
        StatsWindow::All,
        StatsWindow::Day,
        StatsWindow::Week,
        StatsWindow::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsWindow::All => "all",
            StatsWindow::Day => "day",
            StatsWindow::Week => "week",
            StatsWindow::Month => "month",
        }
    }

    /// Window length, `None` for the unbounded window.
    pub fn span(&self) -> Option<Duration> {
        match self {
            StatsWindow::All => None,
            StatsWindow::Day => Some(Duration::days(1)),
            StatsWindow::Week => Some(Duration::days(7)),
            StatsWindow::Month => Some(Duration::days(30)),
        }
    }

    /// Whether `at` lies in `[now - span, now]`. Continuous comparison, no
    /// calendar truncation.
    pub fn contains(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.span() {
            None => true,
            Some(span) => at >= now - span && at <= now,
        }
    }
}

impl fmt::Display for StatsWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_window_is_continuous() {
        let now = DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert!(StatsWindow::Day.contains(now - Duration::hours(23), now));
        assert!(StatsWindow::Day.contains(now - Duration::hours(24), now));
        assert!(!StatsWindow::Day.contains(now - Duration::hours(25), now));
        assert!(!StatsWindow::Day.contains(now + Duration::minutes(1), now));
    }

    #[test]
    fn all_has_no_bounds() {
        let now = Utc::now();
        assert!(StatsWindow::All.contains(now - Duration::days(3650), now));
        assert!(StatsWindow::All.contains(now + Duration::days(1), now));
    }
}
