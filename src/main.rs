use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use kdm_signal::catalog::presentation::{status_label, tag_label, time_ago};
use kdm_signal::catalog::{FeedView, SignalStore};
use kdm_signal::clock::{Clock, SystemClock};
use kdm_signal::config::Config;
use kdm_signal::desk::{Notice, SignalDesk};
use kdm_signal::models::{Channel, StatsWindow, ViewerTier};
use kdm_signal::share::{DesktopNotifier, MessageFormatter, ShareService, WhatsAppLauncher};
use kdm_signal::storage::FileSlot;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let slot = FileSlot::new(&cfg.data_dir);
    let store = SignalStore::open(slot, &cfg.storage_key, cfg.seed(), SystemClock);
    let formatter = MessageFormatter::new(&cfg.brand, cfg.display_tz);
    let launcher = WhatsAppLauncher::new(&cfg.share_base_url, cfg.share_opener.clone())?;
    let notifier = DesktopNotifier::new(cfg.notify_command.clone(), cfg.notifications);
    let desk = SignalDesk::new(store, ShareService::new(formatter, launcher, notifier));

    info!("{}", "=".repeat(60));
    info!("{} signal catalog", cfg.brand);
    info!("Storage: {}/{}.json", cfg.data_dir, cfg.storage_key);
    info!("Signals: {}", desk.store().len());
    info!(
        "Free feed: {} | VIP feed: {}",
        desk.feed(&FeedView::enter(ViewerTier::Free)).len(),
        desk.feed(&FeedView::enter(ViewerTier::Vip)).len()
    );
    let now = desk.store().clock().now();
    for signal in desk.feed(&FeedView::enter(ViewerTier::Vip)) {
        info!(
            "  {} {} | {} | {} | {}",
            signal.symbol,
            signal.direction,
            status_label(signal.status),
            tag_label(signal.tag),
            time_ago(signal.created_at, now, cfg.display_tz)
        );
    }
    for window in StatsWindow::ALL {
        let stats = desk.stats(window);
        info!(
            "  {:<5} total={} wins={} losses={} open={} win_rate={:.1}%",
            window.as_str(),
            stats.total_count,
            stats.wins,
            stats.losses,
            stats.open,
            stats.win_rate_percent
        );
    }
    info!("{}", "=".repeat(60));

    // Passing the operator code shares the summary instead of only printing it.
    let args: Vec<String> = std::env::args().collect();
    match args.get(1) {
        Some(code) => match cfg.operator_gate().check(code) {
            Ok(session) => {
                let notice = desk.share_weekly_summary(&session, Channel::Vip);
                info!("{}", notice);
                if let Notice::Shared { message } = notice {
                    println!("{message}");
                }
            }
            Err(e) => warn!("{}", e),
        },
        None => {
            let summary = desk
                .share_service()
                .formatter()
                .format_weekly_summary(desk.store().list(), Channel::Vip, now);
            println!("{summary}");
        }
    }

    desk.close();
    Ok(())
}
