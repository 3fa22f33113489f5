use chrono::{DateTime, Duration, Utc};

use crate::models::{Direction, Signal, SignalStatus, SignalTag};

/// Starting list used when storage holds nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Empty,
    Demo,
}

impl Seed {
    pub fn signals(&self, now: DateTime<Utc>) -> Vec<Signal> {
        match self {
            Seed::Empty => Vec::new(),
            Seed::Demo => vec![Signal {
                id: "sig_xauusd_vip_001".to_string(),
                symbol: "XAUUSD".to_string(),
                direction: Direction::Buy,
                entry: 4010.0,
                stop_loss: 4000.0,
                take_profits: vec![4100.0, 4200.0, 63000.0],
                confidence: 0.78,
                tag: SignalTag::Vip,
                notes: "Confluence of EMA50 support with the demand zone.".to_string(),
                created_at: now - Duration::hours(2),
                status: SignalStatus::Active,
            }],
        }
    }
}
