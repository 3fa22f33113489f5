use crate::models::{Signal, TagFilter, ViewerTier};

/// Newest first. The sort is stable, so equal timestamps keep store order.
pub fn sort_newest_first(signals: &[Signal]) -> Vec<&Signal> {
    let mut sorted: Vec<&Signal> = signals.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

/// Whether a viewer who entered through `tier` sees `signal` under `filter`.
/// Free-channel viewers are limited to free content whatever the filter says.
pub fn is_visible(signal: &Signal, tier: ViewerTier, filter: TagFilter) -> bool {
    match tier {
        ViewerTier::Free => signal.tag.reaches_free(),
        ViewerTier::Vip => match filter {
            TagFilter::All => true,
            TagFilter::Free => signal.tag.reaches_free(),
            TagFilter::Vip => signal.tag.reaches_vip(),
        },
    }
}

/// The feed a viewer sees, newest first.
pub fn visible_signals(all: &[Signal], tier: ViewerTier, filter: TagFilter) -> Vec<&Signal> {
    sort_newest_first(all)
        .into_iter()
        .filter(|s| is_visible(s, tier, filter))
        .collect()
}

/// A viewer's position in the feed: the channel they entered through and the
/// sub-filter currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedView {
    pub tier: ViewerTier,
    pub filter: TagFilter,
}

impl FeedView {
    pub fn enter(tier: ViewerTier) -> Self {
        Self {
            tier,
            filter: tier.default_filter(),
        }
    }

    /// Only VIP viewers get the filter toggle.
    pub fn can_filter(&self) -> bool {
        self.tier == ViewerTier::Vip
    }

    pub fn set_filter(&mut self, filter: TagFilter) {
        if self.can_filter() {
            self.filter = filter;
        }
    }

    pub fn apply<'a>(&self, all: &'a [Signal]) -> Vec<&'a Signal> {
        visible_signals(all, self.tier, self.filter)
    }
}
