pub mod formatter;
pub mod notify;
pub mod service;
pub mod whatsapp;

pub use formatter::{tidy, MessageFormatter, Notification, ShareContent, UpdateType};
pub use notify::{DesktopNotifier, NotificationPermission};
pub use service::ShareService;
pub use whatsapp::WhatsAppLauncher;

/// Hands a finished message to an external messaging application.
///
/// Fire-and-forget: there is no delivery confirmation and nothing to wait on.
pub trait ChannelLauncher {
    fn launch(&self, message: &str);
}

/// Best-effort local notification. Missing support or permission makes this a
/// no-op, never an error.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}
