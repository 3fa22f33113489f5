use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::catalog::lifecycle::Outcome;
use crate::models::{Signal, SignalStatus, StatsWindow};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_count: usize,
    pub wins: usize,
    pub losses: usize,
    pub open: usize,
    /// `100 * wins / closed`, one decimal. Zero when nothing is closed.
    pub win_rate_percent: f64,
}

impl CatalogStats {
    pub fn closed(&self) -> usize {
        self.wins + self.losses
    }
}

/// Counts and win rate over signals created inside `window`.
pub fn compute_stats(signals: &[Signal], window: StatsWindow, now: DateTime<Utc>) -> CatalogStats {
    let windowed: Vec<&Signal> = signals
        .iter()
        .filter(|s| window.contains(s.created_at, now))
        .collect();

    let mut wins = 0;
    let mut losses = 0;
    for s in &windowed {
        match s.status.outcome() {
            Some(Outcome::Win) => wins += 1,
            Some(Outcome::Loss) => losses += 1,
            None => {}
        }
    }

    let closed = wins + losses;
    let win_rate = if closed > 0 {
        100.0 * wins as f64 / closed as f64
    } else {
        0.0
    };

    CatalogStats {
        total_count: windowed.len(),
        wins,
        losses,
        open: windowed.len() - closed,
        win_rate_percent: round1(win_rate),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub stats: CatalogStats,
    /// Closed trades inside the week, oldest first.
    pub closed_trades: Vec<String>,
}

/// Statistics over the trailing seven days regardless of any selected window.
pub fn weekly_summary(signals: &[Signal], now: DateTime<Utc>) -> WeeklySummary {
    let window = StatsWindow::Week;
    let stats = compute_stats(signals, window, now);

    let mut closed: Vec<&Signal> = signals
        .iter()
        .filter(|s| window.contains(s.created_at, now) && s.status.is_closed())
        .collect();
    closed.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    WeeklySummary {
        start: now - Duration::days(7),
        end: now,
        stats,
        closed_trades: closed.into_iter().filter_map(closed_trade_line).collect(),
    }
}

/// `"{symbol}: tp {N}"` where N is the number of configured targets, not the
/// one actually reached. Product has not confirmed which is intended.
fn closed_trade_line(signal: &Signal) -> Option<String> {
    match signal.status {
        SignalStatus::Achieved => Some(format!(
            "{}: tp {}",
            signal.symbol,
            signal.take_profits.len()
        )),
        SignalStatus::Canceled => Some(format!("{}: sl", signal.symbol)),
        SignalStatus::Active => None,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
