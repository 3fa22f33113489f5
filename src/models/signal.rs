use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Direction, SignalStatus, SignalTag};

/// A published trade recommendation. This is the record persisted to the
/// durable slot, one JSON object per signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub entry: f64,
    pub stop_loss: f64,
    /// Target 1, Target 2, ... in priority order. Never sorted by value.
    #[serde(default)]
    pub take_profits: Vec<f64>,
    pub confidence: f64,
    pub tag: SignalTag,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub status: SignalStatus,
}

impl Signal {
    /// New ACTIVE signal built from an editor request.
    pub fn publish(edit: SignalEdit, id: String, created_at: DateTime<Utc>) -> Self {
        let mut signal = Self {
            id,
            symbol: String::new(),
            direction: edit.direction,
            entry: 0.0,
            stop_loss: 0.0,
            take_profits: Vec::new(),
            confidence: 0.0,
            tag: edit.tag,
            notes: String::new(),
            created_at,
            status: SignalStatus::Active,
        };
        signal.apply(edit);
        signal
    }

    /// Replace every editable field. `id`, `created_at` and `status` are not
    /// reachable through an edit.
    pub fn apply(&mut self, edit: SignalEdit) {
        let SignalEdit {
            symbol,
            direction,
            entry,
            stop_loss,
            take_profits,
            confidence,
            tag,
            notes,
        } = edit;
        self.symbol = symbol;
        self.direction = direction;
        self.entry = entry;
        self.stop_loss = stop_loss;
        self.take_profits = take_profits;
        self.confidence = confidence;
        self.tag = tag;
        self.notes = notes;
    }

    /// The editable part of this signal, e.g. to prefill an editor.
    pub fn to_edit(&self) -> SignalEdit {
        SignalEdit {
            symbol: self.symbol.clone(),
            direction: self.direction,
            entry: self.entry,
            stop_loss: self.stop_loss,
            take_profits: self.take_profits.clone(),
            confidence: self.confidence,
            tag: self.tag,
            notes: self.notes.clone(),
        }
    }

    /// Confidence as a whole percentage.
    pub fn confidence_pct(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }

    /// 1-based take-profit lookup.
    pub fn take_profit(&self, target: usize) -> Option<f64> {
        target
            .checked_sub(1)
            .and_then(|i| self.take_profits.get(i))
            .copied()
    }
}

/// Full set of operator-editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalEdit {
    pub symbol: String,
    pub direction: Direction,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profits: Vec<f64>,
    pub confidence: f64,
    pub tag: SignalTag,
    pub notes: String,
}

/// Fresh signal id, `sig_` followed by a random UUID. Never reused.
pub fn new_signal_id() -> String {
    format!("sig_{}", Uuid::new_v4().simple())
}
