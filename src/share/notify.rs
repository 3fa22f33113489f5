use std::process::Command;
use std::thread;
use tracing::{debug, info, warn};

use crate::share::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    Unsupported,
    Default,
    Granted,
    Denied,
}

impl NotificationPermission {
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unsupported" => Some(Self::Unsupported),
            "default" => Some(Self::Default),
            "granted" => Some(Self::Granted),
            "denied" => Some(Self::Denied),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Unsupported => "Notifications are not supported on this system.",
            Self::Default => "Click to enable notifications.",
            Self::Granted => "Notifications are enabled.",
            Self::Denied => "Notifications are blocked. Check your system settings.",
        }
    }
}

/// Desktop notifications through an external command such as `notify-send`,
/// called as `<command> <title> <body>`.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    command: Option<String>,
    permission: NotificationPermission,
}

impl DesktopNotifier {
    /// Without a command the notifier is unsupported whatever `permission` says.
    pub fn new(command: Option<String>, permission: NotificationPermission) -> Self {
        let permission = if command.is_some() {
            permission
        } else {
            NotificationPermission::Unsupported
        };
        Self {
            command,
            permission,
        }
    }

    pub fn permission(&self) -> NotificationPermission {
        self.permission
    }

    /// Only an undecided permission can change; a decision sticks.
    pub fn request_permission(&mut self) -> NotificationPermission {
        match self.permission {
            NotificationPermission::Default => {
                self.permission = NotificationPermission::Granted;
                info!("Desktop notifications enabled");
            }
            NotificationPermission::Unsupported => {
                warn!("This system does not support desktop notification");
            }
            NotificationPermission::Granted | NotificationPermission::Denied => {}
        }
        self.permission
    }

    pub fn deny(&mut self) {
        if self.permission != NotificationPermission::Unsupported {
            self.permission = NotificationPermission::Denied;
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        if self.permission != NotificationPermission::Granted {
            debug!("Notification skipped ({:?}): {}", self.permission, title);
            return;
        }
        let Some(cmd) = &self.command else {
            return;
        };
        match Command::new(cmd).arg(title).arg(body).spawn() {
            // Reap the child without blocking the caller.
            Ok(mut child) => {
                thread::spawn(move || child.wait());
            }
            Err(e) => debug!("Notification via {} failed: {}", cmd, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn no_command_means_unsupported() {
        let mut n = DesktopNotifier::new(None, NotificationPermission::Granted);
        assert_eq!(n.permission(), NotificationPermission::Unsupported);
        assert_eq!(n.request_permission(), NotificationPermission::Unsupported);
        n.notify("title", "body");
    }

    #[test]
    fn request_grants_only_from_default() {
        let mut n = DesktopNotifier::new(Some("true".into()), NotificationPermission::Default);
        assert_eq!(n.request_permission(), NotificationPermission::Granted);

        let mut n = DesktopNotifier::new(Some("true".into()), NotificationPermission::Denied);
        assert_eq!(n.request_permission(), NotificationPermission::Denied);
    }

    #[test]
    fn denied_notifier_runs_nothing() {
        let dir = tempdir().unwrap();
        let marker = dir.path().join("notified");
        let mut n = DesktopNotifier::new(Some("touch".into()), NotificationPermission::Granted);

        n.deny();
        assert_eq!(n.permission(), NotificationPermission::Denied);
        assert_eq!(n.request_permission(), NotificationPermission::Denied);

        n.notify(marker.to_str().unwrap(), "body");
        assert!(!marker.exists());
    }

    #[test]
    fn deny_keeps_unsupported() {
        let mut n = DesktopNotifier::new(None, NotificationPermission::Default);
        n.deny();
        assert_eq!(n.permission(), NotificationPermission::Unsupported);
    }

    #[test]
    fn failing_command_is_silent() {
        let n = DesktopNotifier::new(
            Some("kdm-no-such-notifier".into()),
            NotificationPermission::Granted,
        );
        n.notify("title", "body");
    }

    #[test]
    fn permission_parsing_and_text() {
        assert_eq!(
            NotificationPermission::from_str_loose("Granted"),
            Some(NotificationPermission::Granted)
        );
        assert_eq!(NotificationPermission::from_str_loose("maybe"), None);
        assert_eq!(
            NotificationPermission::Default.describe(),
            "Click to enable notifications."
        );
    }
}
