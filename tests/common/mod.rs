#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;

use kdm_signal::models::{Direction, Signal, SignalStatus, SignalTag};
use kdm_signal::share::{ChannelLauncher, Notifier};

/// 2024-01-17 09:30 UTC.
pub fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-17T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Signal created `minutes_ago` before `now()`.
pub fn signal(id: &str, minutes_ago: i64, tag: SignalTag, status: SignalStatus) -> Signal {
    Signal {
        id: id.to_string(),
        symbol: "XAUUSD".to_string(),
        direction: Direction::Buy,
        entry: 4010.0,
        stop_loss: 4000.0,
        take_profits: vec![4100.0, 4200.0, 63000.0],
        confidence: 0.78,
        tag,
        notes: String::new(),
        created_at: now() - Duration::minutes(minutes_ago),
        status,
    }
}

pub fn ids(signals: &[&Signal]) -> Vec<String> {
    signals.iter().map(|s| s.id.clone()).collect()
}

#[derive(Default)]
pub struct Outbox {
    pub messages: RefCell<Vec<String>>,
    pub notifications: RefCell<Vec<String>>,
}

impl ChannelLauncher for &Outbox {
    fn launch(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl Notifier for &Outbox {
    fn notify(&self, title: &str, _body: &str) {
        self.notifications.borrow_mut().push(title.to_string());
    }
}
