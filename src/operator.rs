//! Operator access gate.
//!
//! This is a convenience lock in front of the operator views, NOT a security
//! boundary: the secret is a static string compared verbatim, there is no
//! session expiry, hashing or throttling.

use tracing::{info, warn};

use crate::error::{CatalogError, Result};

/// Capability held for the lifetime of an operator view. Only a successful
/// gate check produces one.
#[derive(Debug)]
pub struct OperatorSession {
    _private: (),
}

#[derive(Debug, Clone)]
pub struct OperatorGate {
    secret: String,
}

impl OperatorGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn check(&self, input: &str) -> Result<OperatorSession> {
        if input == self.secret {
            info!("Operator unlocked");
            Ok(OperatorSession { _private: () })
        } else {
            warn!("Operator code rejected");
            Err(CatalogError::AuthMismatch)
        }
    }
}

/// State of the access-code prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginPrompt {
    pub input: String,
    pub error: Option<String>,
}

impl LoginPrompt {
    pub fn open() -> Self {
        Self::default()
    }

    /// A wrong code clears the input and shows the retry message. Attempts are
    /// not counted.
    pub fn submit(&mut self, gate: &OperatorGate) -> Option<OperatorSession> {
        match gate.check(&self.input) {
            Ok(session) => {
                self.input.clear();
                self.error = None;
                Some(session)
            }
            Err(e) => {
                self.input.clear();
                self.error = Some(e.to_string());
                None
            }
        }
    }
}
