use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::catalog::stats::weekly_summary;
use crate::error::{CatalogError, Result};
use crate::models::{Channel, Signal};

/// What happened to a signal that the operator wants to announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateType {
    New,
    /// 1-based take-profit index.
    TakeProfitHit(usize),
    Achieved,
    StopLoss,
}

/// Anything that can be rendered into a share message.
#[derive(Debug, Clone, Copy)]
pub enum ShareContent<'a> {
    Update {
        signal: &'a Signal,
        update: UpdateType,
    },
    WeeklySummary {
        signals: &'a [Signal],
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

const NO_NOTES: &str = "No additional notes.";

/// Renders share messages. Output depends only on the inputs and `now`.
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    brand: String,
    tz: Tz,
}

impl MessageFormatter {
    pub fn new(brand: impl Into<String>, tz: Tz) -> Self {
        Self {
            brand: brand.into(),
            tz,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// The channel only changes the branding line.
    pub fn header(&self, channel: Channel) -> String {
        match channel {
            Channel::Vip => format!("✨ *{} Signal - VIP Special* ✨", self.brand),
            Channel::Free => format!("*{} Trading Signal*", self.brand),
        }
    }

    pub fn render(
        &self,
        content: ShareContent<'_>,
        channel: Channel,
        now: DateTime<Utc>,
    ) -> Result<String> {
        match content {
            ShareContent::Update { signal, update } => {
                self.format_share_message(signal, update, channel, now)
            }
            ShareContent::WeeklySummary { signals } => {
                Ok(self.format_weekly_summary(signals, channel, now))
            }
        }
    }

    /// Fails with `InvalidShareIndex` for a take-profit index outside
    /// `1..=take_profits.len()`; nothing is rendered in that case.
    pub fn format_share_message(
        &self,
        signal: &Signal,
        update: UpdateType,
        channel: Channel,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let mut lines = vec![
            self.header(channel),
            format!("*Shared at: {}*", self.timestamp(now)),
            String::new(),
            format!("*Pair:* {}", signal.symbol),
            format!("*Type:* {}", signal.direction),
        ];

        match update {
            UpdateType::New => {
                lines.push(format!("*Entry Price:* {}", signal.entry));
                lines.push(format!("*Stop Loss:* {}", signal.stop_loss));
                lines.push(String::new());
                lines.push("*Take Profit Targets:*".to_string());
                if signal.take_profits.is_empty() {
                    lines.push("No targets set".to_string());
                }
                for (i, tp) in signal.take_profits.iter().enumerate() {
                    lines.push(format!("TP{}: {}", i + 1, tp));
                }
                lines.push(String::new());
                lines.push(format!("*Confidence:* {}%", signal.confidence_pct()));
                let notes = if signal.notes.trim().is_empty() {
                    NO_NOTES
                } else {
                    signal.notes.trim()
                };
                lines.push(format!("*Notes:* {}", notes));
            }
            UpdateType::TakeProfitHit(k) => {
                let value = signal
                    .take_profit(k)
                    .ok_or(CatalogError::InvalidShareIndex {
                        index: k,
                        available: signal.take_profits.len(),
                    })?;
                lines.push(String::new());
                lines.push(format!("🎯 Take Profit {} hit at {}", k, value));
                lines.push(String::new());
                let remaining: Vec<String> = signal
                    .take_profits
                    .iter()
                    .enumerate()
                    .skip(k)
                    .map(|(i, tp)| format!("TP{}: {}", i + 1, tp))
                    .collect();
                if remaining.is_empty() {
                    lines.push("🏆 All targets reached! Trade completed.".to_string());
                } else {
                    lines.push(format!("Next targets: {}", remaining.join(", ")));
                }
            }
            UpdateType::Achieved => {
                lines.push(String::new());
                lines.push("✅ Signal achieved: all targets hit".to_string());
                lines.push(String::new());
                for (i, tp) in signal.take_profits.iter().enumerate() {
                    lines.push(format!("TP{}: {} ✅", i + 1, tp));
                }
            }
            UpdateType::StopLoss => {
                lines.push(String::new());
                lines.push(format!("❌ Stop Loss hit at {}", signal.stop_loss));
            }
        }

        Ok(tidy(&lines.join("\n")))
    }

    /// Seven-day statistics and closed trades, dated from `now - 7 days` to
    /// `now`.
    pub fn format_weekly_summary(
        &self,
        signals: &[Signal],
        channel: Channel,
        now: DateTime<Utc>,
    ) -> String {
        let summary = weekly_summary(signals, now);

        let mut lines = vec![
            self.header(channel),
            "📊 *Weekly Performance Summary*".to_string(),
            format!(
                "*Period:* {} - {}",
                self.date(summary.start),
                self.date(summary.end)
            ),
            String::new(),
            format!("*Total Signals:* {}", summary.stats.total_count),
            format!("*Win Rate:* {:.1}%", summary.stats.win_rate_percent),
            String::new(),
            "*Closed Trades:*".to_string(),
        ];
        if summary.closed_trades.is_empty() {
            lines.push("No closed trades this week.".to_string());
        }
        lines.extend(summary.closed_trades);

        tidy(&lines.join("\n"))
    }

    /// Short desktop notification describing the same update.
    pub fn notification(
        &self,
        content: ShareContent<'_>,
        channel: Channel,
        now: DateTime<Utc>,
    ) -> Notification {
        match content {
            ShareContent::Update { signal, update } => {
                let (title, body) = match update {
                    UpdateType::New => (
                        format!("New {} Signal: {} ({})", self.brand, signal.symbol, channel),
                        format!(
                            "Type: {}\nEntry: {}\nStop Loss: {}",
                            signal.direction, signal.entry, signal.stop_loss
                        ),
                    ),
                    UpdateType::TakeProfitHit(k) => (
                        format!("{}: Take Profit {} hit ({})", signal.symbol, k, channel),
                        match signal.take_profit(k) {
                            Some(value) => format!("Target {}: {}", k, value),
                            None => String::new(),
                        },
                    ),
                    UpdateType::Achieved => (
                        format!("{}: all targets achieved ({})", signal.symbol, channel),
                        format!("{} targets hit", signal.take_profits.len()),
                    ),
                    UpdateType::StopLoss => (
                        format!("{}: stop loss hit ({})", signal.symbol, channel),
                        format!("Stop Loss: {}", signal.stop_loss),
                    ),
                };
                Notification { title, body }
            }
            ShareContent::WeeklySummary { signals } => {
                let summary = weekly_summary(signals, now);
                Notification {
                    title: format!("{} weekly summary ({})", self.brand, channel),
                    body: format!(
                        "Signals: {} | Win rate: {:.1}%",
                        summary.stats.total_count, summary.stats.win_rate_percent
                    ),
                }
            }
        }
    }

    fn timestamp(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.tz)
            .format("%b %-d, %Y, %-I:%M %p")
            .to_string()
    }

    fn date(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.tz).format("%b %-d, %Y").to_string()
    }
}

/// Trim the message and collapse every run of blank lines into one.
pub fn tidy(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut previous_blank = false;
    for line in text.lines() {
        let line = line.trim_end();
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        out.push(line);
        previous_blank = blank;
    }
    out.join("\n").trim().to_string()
}
