mod common;

use proptest::prelude::*;

use common::{now, signal};
use kdm_signal::catalog::{compute_stats, visible_signals};
use kdm_signal::models::{Signal, SignalStatus, SignalTag, StatsWindow, TagFilter, ViewerTier};

fn tag() -> impl Strategy<Value = SignalTag> {
    prop_oneof![Just(SignalTag::Free), Just(SignalTag::Vip), Just(SignalTag::Both)]
}

fn status() -> impl Strategy<Value = SignalStatus> {
    prop_oneof![
        Just(SignalStatus::Active),
        Just(SignalStatus::Achieved),
        Just(SignalStatus::Canceled)
    ]
}

fn filter() -> impl Strategy<Value = TagFilter> {
    prop_oneof![Just(TagFilter::All), Just(TagFilter::Free), Just(TagFilter::Vip)]
}

fn window() -> impl Strategy<Value = StatsWindow> {
    prop_oneof![
        Just(StatsWindow::All),
        Just(StatsWindow::Day),
        Just(StatsWindow::Week),
        Just(StatsWindow::Month)
    ]
}

/// Signals with distinct creation times spread over ~60 days.
fn catalog() -> impl Strategy<Value = Vec<Signal>> {
    (
        prop::collection::hash_set(0i64..90_000, 0..40),
        prop::collection::vec((tag(), status()), 40),
    )
        .prop_map(|(ages, attrs)| {
            ages.into_iter()
                .zip(attrs)
                .enumerate()
                .map(|(i, (minutes, (tag, status)))| signal(&format!("s{i}"), minutes, tag, status))
                .collect()
        })
}

proptest! {
    #[test]
    fn feed_is_strictly_newest_first(all in catalog(), f in filter()) {
        for tier in [ViewerTier::Free, ViewerTier::Vip] {
            let visible = visible_signals(&all, tier, f);
            for pair in visible.windows(2) {
                prop_assert!(pair[0].created_at > pair[1].created_at);
            }
        }
    }

    #[test]
    fn free_viewers_never_see_vip_only(all in catalog(), f in filter()) {
        let visible = visible_signals(&all, ViewerTier::Free, f);
        prop_assert!(visible.iter().all(|s| s.tag != SignalTag::Vip));
        let expected = all.iter().filter(|s| s.tag != SignalTag::Vip).count();
        prop_assert_eq!(visible.len(), expected);
    }

    #[test]
    fn both_is_visible_under_every_filter(all in catalog(), f in filter()) {
        let visible = visible_signals(&all, ViewerTier::Vip, f);
        let both = all.iter().filter(|s| s.tag == SignalTag::Both).count();
        prop_assert_eq!(visible.iter().filter(|s| s.tag == SignalTag::Both).count(), both);
    }

    #[test]
    fn win_rate_is_bounded(all in catalog(), w in window()) {
        let stats = compute_stats(&all, w, now());
        prop_assert!(stats.win_rate_percent >= 0.0 && stats.win_rate_percent <= 100.0);
        prop_assert_eq!(stats.wins + stats.losses + stats.open, stats.total_count);
        if stats.closed() == 0 {
            prop_assert_eq!(stats.win_rate_percent, 0.0);
        }
    }
}
