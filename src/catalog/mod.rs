pub mod editor;
pub mod lifecycle;
pub mod presentation;
pub mod seed;
pub mod stats;
pub mod store;
pub mod visibility;

pub use editor::SignalForm;
pub use lifecycle::{available_transitions, Outcome, Transition};
pub use seed::Seed;
pub use stats::{compute_stats, weekly_summary, CatalogStats, WeeklySummary};
pub use store::SignalStore;
pub use visibility::{is_visible, sort_newest_first, visible_signals, FeedView};
