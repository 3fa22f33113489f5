use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::models::{Channel, Signal};
use crate::share::{ChannelLauncher, MessageFormatter, Notifier, ShareContent, UpdateType};

/// Formats a message, fires the notification and hands the text to the
/// launcher. Neither collaborator can fail the share.
pub struct ShareService<L: ChannelLauncher, N: Notifier> {
    formatter: MessageFormatter,
    launcher: L,
    notifier: N,
}

impl<L: ChannelLauncher, N: Notifier> ShareService<L, N> {
    pub fn new(formatter: MessageFormatter, launcher: L, notifier: N) -> Self {
        Self {
            formatter,
            launcher,
            notifier,
        }
    }

    pub fn formatter(&self) -> &MessageFormatter {
        &self.formatter
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the message that was handed off. A formatting error aborts
    /// before anything is sent.
    pub fn share(
        &self,
        content: ShareContent<'_>,
        channel: Channel,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let message = self.formatter.render(content, channel, now)?;

        let note = self.formatter.notification(content, channel, now);
        self.notifier.notify(&note.title, &note.body);
        self.launcher.launch(&message);

        info!("Shared to {} channel: {}", channel, note.title);
        Ok(message)
    }

    pub fn share_update(
        &self,
        signal: &Signal,
        update: UpdateType,
        channel: Channel,
        now: DateTime<Utc>,
    ) -> Result<String> {
        self.share(ShareContent::Update { signal, update }, channel, now)
    }

    pub fn share_weekly_summary(
        &self,
        signals: &[Signal],
        channel: Channel,
        now: DateTime<Utc>,
    ) -> Result<String> {
        self.share(ShareContent::WeeklySummary { signals }, channel, now)
    }
}
