use std::fmt;

use crate::models::SignalStatus;

/// How a closed signal counts in statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl SignalStatus {
    /// ACHIEVED is a win, CANCELED is a stop-loss loss, ACTIVE is still open.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            SignalStatus::Active => None,
            SignalStatus::Achieved => Some(Outcome::Win),
            SignalStatus::Canceled => Some(Outcome::Loss),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.outcome().is_some()
    }
}

/// A status change requested by the operator. Every pair of states is a
/// legal transition, including moving a closed signal back to ACTIVE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SignalStatus,
    pub to: SignalStatus,
}

impl Transition {
    pub fn new(from: SignalStatus, to: SignalStatus) -> Self {
        Self { from, to }
    }

    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    pub fn reopens(&self) -> bool {
        self.from.is_closed() && self.to == SignalStatus::Active
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Statuses offered to the operator for a signal currently in `current`.
/// The current status is left out, which is all the dashboard blocks.
pub fn available_transitions(current: SignalStatus) -> Vec<SignalStatus> {
    SignalStatus::ALL
        .into_iter()
        .filter(|s| *s != current)
        .collect()
}
