use std::fmt;
use tracing::warn;

use crate::catalog::{
    compute_stats, sort_newest_first, CatalogStats, FeedView, SignalForm, SignalStore, Transition,
};
use crate::clock::Clock;
use crate::error::{CatalogError, Result};
use crate::models::{Channel, Signal, SignalStatus, StatsWindow};
use crate::operator::OperatorSession;
use crate::share::{ChannelLauncher, Notifier, ShareService, UpdateType};
use crate::storage::KeyValueSlot;

/// User-facing outcome of an operator action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Saved { id: String },
    Deleted { id: String },
    StatusChanged { id: String, transition: Transition },
    Shared { message: String },
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    fn from_error(action: &str, e: CatalogError) -> Self {
        warn!("{} failed: {}", action, e);
        Notice::Error(e.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Saved { id } => write!(f, "Signal {} saved", id),
            Notice::Deleted { id } => write!(f, "Signal {} deleted", id),
            Notice::StatusChanged { id, transition } => {
                write!(f, "Signal {} is now {}", id, transition.to)
            }
            Notice::Shared { .. } => write!(f, "Message ready to send"),
            Notice::Error(msg) => write!(f, "{}", msg),
        }
    }
}

/// The signal catalog as the feed and the operator panel see it.
///
/// Every operator action needs an [`OperatorSession`] and returns a
/// [`Notice`]; no error escapes this layer.
pub struct SignalDesk<S: KeyValueSlot, C: Clock, L: ChannelLauncher, N: Notifier> {
    store: SignalStore<S, C>,
    share: ShareService<L, N>,
}

impl<S: KeyValueSlot, C: Clock, L: ChannelLauncher, N: Notifier> SignalDesk<S, C, L, N> {
    pub fn new(store: SignalStore<S, C>, share: ShareService<L, N>) -> Self {
        Self { store, share }
    }

    pub fn store(&self) -> &SignalStore<S, C> {
        &self.store
    }

    pub fn share_service(&self) -> &ShareService<L, N> {
        &self.share
    }

    /// Flush and release the store.
    pub fn close(self) -> S {
        self.store.close()
    }

    pub fn feed(&self, view: &FeedView) -> Vec<&Signal> {
        view.apply(self.store.list())
    }

    pub fn stats(&self, window: StatsWindow) -> CatalogStats {
        compute_stats(self.store.list(), window, self.store.clock().now())
    }

    /// Every signal, newest first.
    pub fn dashboard(&self, _session: &OperatorSession) -> Vec<&Signal> {
        sort_newest_first(self.store.list())
    }

    /// Create a signal from the form, or update `editing` when given.
    pub fn save(
        &mut self,
        _session: &OperatorSession,
        form: &SignalForm,
        editing: Option<&str>,
    ) -> Notice {
        let saved = form.parse().and_then(|edit| match editing {
            Some(id) => self.store.update(id, edit).map(|s| s.id.clone()),
            None => self.store.publish(edit).map(|s| s.id.clone()),
        });
        match saved {
            Ok(id) => Notice::Saved { id },
            Err(e) => Notice::from_error("Save", e),
        }
    }

    pub fn delete(&mut self, _session: &OperatorSession, id: &str) -> Notice {
        match self.store.delete(id) {
            Ok(removed) => Notice::Deleted { id: removed.id },
            Err(e) => Notice::from_error("Delete", e),
        }
    }

    pub fn set_status(
        &mut self,
        _session: &OperatorSession,
        id: &str,
        status: SignalStatus,
    ) -> Notice {
        match self.store.set_status(id, status) {
            Ok(transition) => Notice::StatusChanged {
                id: id.to_string(),
                transition,
            },
            Err(e) => Notice::from_error("Status change", e),
        }
    }

    pub fn share(
        &self,
        _session: &OperatorSession,
        id: &str,
        update: UpdateType,
        channel: Channel,
    ) -> Notice {
        match self.share_signal(id, update, channel) {
            Ok(message) => Notice::Shared { message },
            Err(e) => Notice::from_error("Share", e),
        }
    }

    pub fn share_weekly_summary(&self, _session: &OperatorSession, channel: Channel) -> Notice {
        let now = self.store.clock().now();
        match self.share.share_weekly_summary(self.store.list(), channel, now) {
            Ok(message) => Notice::Shared { message },
            Err(e) => Notice::from_error("Share", e),
        }
    }

    fn share_signal(&self, id: &str, update: UpdateType, channel: Channel) -> Result<String> {
        let signal = self
            .store
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.share
            .share_update(signal, update, channel, self.store.clock().now())
    }
}
