use chrono_tz::Tz;

use crate::catalog::Seed;
use crate::operator::OperatorGate;
use crate::share::whatsapp::DEFAULT_SHARE_URL;
use crate::share::NotificationPermission;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_dir: String,
    pub storage_key: String,
    pub seed_demo: bool,

    // Operator
    pub operator_secret: String,

    // Messages
    pub brand: String,
    pub display_tz: Tz,

    // Share handoff
    pub share_base_url: String,
    pub share_opener: Option<String>,

    // Notifications
    pub notify_command: Option<String>,
    pub notifications: NotificationPermission,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };
        let optional = |key: &str| -> Option<String> {
            std::env::var(key).ok().filter(|v| !v.trim().is_empty())
        };

        Config {
            data_dir: env("DATA_DIR", "data"),
            storage_key: env("STORAGE_KEY", "kdm_signals"),
            seed_demo: env("SEED_DEMO", "true").to_lowercase() == "true",
            operator_secret: env("OPERATOR_SECRET", "adminkdm321"),
            brand: env("BRAND", "KDM"),
            display_tz: env("DISPLAY_TZ", "UTC").parse().unwrap_or(Tz::UTC),
            share_base_url: env("SHARE_BASE_URL", DEFAULT_SHARE_URL),
            share_opener: optional("SHARE_OPENER"),
            notify_command: Some(env("NOTIFY_COMMAND", "notify-send"))
                .filter(|c| !c.trim().is_empty()),
            notifications: NotificationPermission::from_str_loose(&env(
                "NOTIFICATIONS",
                "default",
            ))
            .unwrap_or(NotificationPermission::Default),
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    pub fn seed(&self) -> Seed {
        if self.seed_demo {
            Seed::Demo
        } else {
            Seed::Empty
        }
    }

    pub fn operator_gate(&self) -> OperatorGate {
        OperatorGate::new(self.operator_secret.clone())
    }
}
