use anyhow::{bail, Result};
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use std::cell::RefCell;

use crate::models::{Direction, Signal, SignalEdit, SignalStatus, SignalTag};
use crate::share::{ChannelLauncher, MessageFormatter, Notifier, ShareService};
use crate::storage::KeyValueSlot;

pub const KEY: &str = "kdm_signals";

/// Fixed "now" used across tests: 2024-01-15 12:00 UTC.
pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A signal created `hours` relative to `base_time()` (negative = in the past).
pub fn make_signal(id: &str, hours: i64, tag: SignalTag, status: SignalStatus) -> Signal {
    Signal {
        id: id.to_string(),
        symbol: format!("{}/USDT", id.to_uppercase()),
        direction: Direction::Buy,
        entry: 100.0,
        stop_loss: 95.0,
        take_profits: vec![105.0, 110.0],
        confidence: 0.7,
        tag,
        notes: String::new(),
        created_at: base_time() + Duration::hours(hours),
        status,
    }
}

pub fn make_edit(symbol: &str) -> SignalEdit {
    SignalEdit {
        symbol: symbol.to_string(),
        direction: Direction::Buy,
        entry: 100.0,
        stop_loss: 95.0,
        take_profits: vec![105.0, 110.0, 120.0],
        confidence: 0.75,
        tag: SignalTag::Free,
        notes: String::new(),
    }
}

/// Slot whose reads and writes always fail.
pub struct FailingSlot;

impl KeyValueSlot for FailingSlot {
    fn read(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        bail!("storage unavailable")
    }

    fn write(&mut self, _key: &str, _bytes: &[u8]) -> Result<()> {
        bail!("quota exceeded")
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    sent: RefCell<Vec<String>>,
}

impl RecordingLauncher {
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl ChannelLauncher for RecordingLauncher {
    fn launch(&self, message: &str) {
        self.sent.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) {
        self.sent
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
    }
}

pub fn test_share_service() -> ShareService<RecordingLauncher, RecordingNotifier> {
    ShareService::new(
        MessageFormatter::new("KDM", Tz::UTC),
        RecordingLauncher::default(),
        RecordingNotifier::default(),
    )
}
