#![forbid(unsafe_code)]

//! Pager tunables.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::error::ConfigError;

/// Behaviour switches for [`PagerLayout`](crate::PagerLayout).
///
/// Fields are public; the same-named builder methods exist for chaining.
///
/// ```
/// use tabpager_layout::PagerConfig;
///
/// let config = PagerConfig::default()
///     .prefetch_item_count(1)
///     .index_change_threshold(0.75);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerConfig {
    /// Keep detached non-reusable items in the index cache.
    pub auto_cache: bool,
    /// Upper bound on cached items.
    pub cache_capacity: usize,
    /// Pages fetched ahead on each side of a settled visible page.
    pub prefetch_item_count: usize,
    /// Attach prefetched items as soon as they are fetched.
    pub prefetch_items_attach_early: bool,
    /// While several pages are visible, only show items that are already
    /// prefetched or cached.
    pub add_visible_items_only_when_settled: bool,
    /// Report continuous progress to hosts that track it and commit the
    /// index only at full pages.
    pub progress_animate_enabled: bool,
    /// Fraction of a page past which a drag commits the next index.
    pub index_change_threshold: f64,
    /// Subtract the top content inset from the page height.
    pub adjust_scroll_inset: bool,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            auto_cache: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            prefetch_item_count: 0,
            prefetch_items_attach_early: false,
            add_visible_items_only_when_settled: false,
            progress_animate_enabled: true,
            index_change_threshold: 0.5,
            adjust_scroll_inset: true,
        }
    }
}

impl PagerConfig {
    #[must_use]
    pub fn auto_cache(mut self, enabled: bool) -> Self {
        self.auto_cache = enabled;
        self
    }

    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    #[must_use]
    pub fn prefetch_item_count(mut self, count: usize) -> Self {
        self.prefetch_item_count = count;
        self
    }

    #[must_use]
    pub fn prefetch_items_attach_early(mut self, enabled: bool) -> Self {
        self.prefetch_items_attach_early = enabled;
        self
    }

    #[must_use]
    pub fn add_visible_items_only_when_settled(mut self, enabled: bool) -> Self {
        self.add_visible_items_only_when_settled = enabled;
        self
    }

    #[must_use]
    pub fn progress_animate_enabled(mut self, enabled: bool) -> Self {
        self.progress_animate_enabled = enabled;
        self
    }

    #[must_use]
    pub fn index_change_threshold(mut self, threshold: f64) -> Self {
        self.index_change_threshold = threshold;
        self
    }

    #[must_use]
    pub fn adjust_scroll_inset(mut self, enabled: bool) -> Self {
        self.adjust_scroll_inset = enabled;
        self
    }

    /// Check the values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.index_change_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }
}
