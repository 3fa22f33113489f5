use anyhow::{Context, Result};
use reqwest::Url;
use std::process::Command;
use std::thread;
use tracing::{info, warn};

use crate::share::ChannelLauncher;

pub const DEFAULT_SHARE_URL: &str = "https://api.whatsapp.com/send";

/// Opens a WhatsApp share link with the message pre-filled.
///
/// With no opener command configured the link is only logged, for the
/// operator to open by hand.
#[derive(Debug, Clone)]
pub struct WhatsAppLauncher {
    base_url: Url,
    opener: Option<String>,
}

impl WhatsAppLauncher {
    pub fn new(base_url: &str, opener: Option<String>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid share url {base_url:?}"))?;
        Ok(Self { base_url, opener })
    }

    pub fn share_url(&self, message: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("text", message);
        url
    }
}

impl ChannelLauncher for WhatsAppLauncher {
    fn launch(&self, message: &str) {
        let url = self.share_url(message);
        match &self.opener {
            Some(cmd) => match Command::new(cmd).arg(url.as_str()).spawn() {
                Ok(mut child) => {
                    // Reap the child without blocking the caller.
                    thread::spawn(move || child.wait());
                    info!("Opened share link with {}", cmd);
                }
                Err(e) => warn!("Could not run {}: {}; share link: {}", cmd, e, url),
            },
            None => info!("Share link: {}", url),
        }
    }
}
