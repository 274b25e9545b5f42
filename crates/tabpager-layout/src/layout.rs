#![forbid(unsafe_code)]

//! The pager layout engine.
//!
//! [`PagerLayout`] owns the scroll surface model (frame, content offset,
//! content size, insets) and every page item the host has handed over. Each
//! offset change recomputes the visible window, moves items between the
//! visible map, the prefetch map, the index cache and the reuse pool, and
//! tells the host what to mount, unmount, and report.
//!
//! # Item routing
//!
//! | leaving the window     | goes to                                   |
//! |------------------------|-------------------------------------------|
//! | inside prefetch range  | prefetch map (stays materialised)         |
//! | registered identifier  | reuse pool                                |
//! | anything else          | index cache when `auto_cache`, else drop  |
//!
//! Entering items are resolved in the order visible map, prefetch map,
//! index cache, and finally a fresh fetch from the host.
//!
//! # Offset change ordering
//!
//! Within one [`PagerLayout::set_content_offset`] call the order is fixed:
//! discrete index commit, progress report, window layout, then
//! [`PagerHost::did_scroll`]. Observers of `did_scroll` always see the
//! committed index.

use std::collections::BTreeMap;
use std::mem;

use tabpager_core::{IndexRange, Insets, Rect, Size};

use crate::cache::{CacheStats, IndexCache};
use crate::config::PagerConfig;
use crate::error::ConfigError;
use crate::host::PagerHost;
use crate::item::PagerItem;
use crate::reuse::{Dequeue, ReusePool};
use crate::window::{
    self, COMMIT_AT_FULL_PAGE, PageGeometry, ProgressTransition, ScrollDirection,
};

/// Coarse engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPhase {
    /// No data has been loaded yet.
    #[default]
    Unloaded,
    /// A reload is in progress.
    Loading,
    /// Idle with a settled layout.
    LaidOut,
    /// A drag or a programmatic jump is in flight.
    Scrolling,
}

/// Windowing engine for a horizontal one-page-at-a-time scroller.
pub struct PagerLayout<T> {
    config: PagerConfig,
    phase: LayoutPhase,

    frame: Rect,
    content_offset: f64,
    content_inset: Insets,
    content_size: Size,

    count: usize,
    cur_index: Option<usize>,
    pending_index: Option<usize>,
    did_load: bool,

    visible_range: IndexRange,
    prefetch_range: IndexRange,
    visible: BTreeMap<usize, PagerItem<T>>,
    prefetched: BTreeMap<usize, PagerItem<T>>,
    cache: IndexCache<PagerItem<T>>,
    pool: ReusePool<T>,

    needs_layout: bool,
    drag_start_offset: f64,
    tap_scroll: bool,
    scroll_animated: bool,
}

impl<T> Default for PagerLayout<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for PagerLayout<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerLayout")
            .field("phase", &self.phase)
            .field("count", &self.count)
            .field("cur_index", &self.cur_index)
            .field("content_offset", &self.content_offset)
            .field("visible_range", &self.visible_range)
            .field("prefetch_range", &self.prefetch_range)
            .field("cache", &self.cache.stats())
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl<T> PagerLayout<T> {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::build(PagerConfig::default())
    }

    /// Engine with a validated configuration.
    pub fn with_config(config: PagerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PagerConfig) -> Self {
        Self {
            cache: IndexCache::new(config.cache_capacity),
            config,
            phase: LayoutPhase::Unloaded,
            frame: Rect::ZERO,
            content_offset: 0.0,
            content_inset: Insets::ZERO,
            content_size: Size::ZERO,
            count: 0,
            cur_index: None,
            pending_index: None,
            did_load: false,
            visible_range: IndexRange::EMPTY,
            prefetch_range: IndexRange::EMPTY,
            visible: BTreeMap::new(),
            prefetched: BTreeMap::new(),
            pool: ReusePool::new(),
            needs_layout: false,
            drag_start_offset: 0.0,
            tap_scroll: false,
            scroll_animated: false,
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Configuration and registration
    // ════════════════════════════════════════════════════════════════════

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The prefetch window is recomputed and a full layout is requested for
    /// the next offset change or update.
    pub fn set_config(&mut self, config: PagerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.cache.set_capacity(config.cache_capacity);
        self.config = config;
        self.prefetch_range = IndexRange::EMPTY;
        self.needs_layout = true;
        Ok(())
    }

    /// Register the factory used by [`Dequeue::dequeue`] for `identifier`.
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: FnMut(usize) -> T + 'static,
    {
        self.pool.register(identifier, factory);
    }

    pub fn pool(&self) -> &ReusePool<T> {
        &self.pool
    }

    /// Drop every cached item. Safe at any time.
    pub fn on_memory_warning(&mut self) {
        let dropped = self.cache.len();
        self.cache.clear();
        tracing::debug!(message = "pager.cache.clear", reason = "memory_warning", dropped);
    }

    // ════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════

    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cur_index(&self) -> Option<usize> {
        self.cur_index
    }

    pub fn visible_range(&self) -> IndexRange {
        self.visible_range
    }

    pub fn prefetch_range(&self) -> IndexRange {
        self.prefetch_range
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn content_offset(&self) -> f64 {
        self.content_offset
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn content_inset(&self) -> Insets {
        self.content_inset
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Live items in index order.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &PagerItem<T>)> + '_ {
        self.visible.iter().map(|(index, item)| (*index, item))
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible.keys().copied().collect()
    }

    /// Indices currently held in the prefetch map.
    pub fn prefetched_indices(&self) -> Vec<usize> {
        self.prefetched.keys().copied().collect()
    }

    /// Item for `index` from the live set, the prefetch map, or the cache.
    ///
    /// Never asks the host.
    pub fn item_for(&self, index: usize) -> Option<&PagerItem<T>> {
        self.visible
            .get(&index)
            .or_else(|| self.prefetched.get(&index))
            .or_else(|| self.cache.peek(index))
    }

    /// Mutable access to a live item.
    pub fn visible_item_mut(&mut self, index: usize) -> Option<&mut PagerItem<T>> {
        self.visible.get_mut(&index)
    }

    /// Height shared by every page.
    pub fn page_height(&self) -> f64 {
        if self.config.adjust_scroll_inset {
            (self.frame.height - self.content_inset.top).max(0.0)
        } else {
            self.frame.height
        }
    }

    fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.frame.width, self.page_height())
    }

    /// Frame of the page at `index` in content coordinates.
    pub fn frame_for_item(&self, index: usize) -> Rect {
        self.geometry().frame(index)
    }

    /// Threshold used to commit an index change.
    pub fn commit_threshold(&self, tracks_progress: bool) -> f64 {
        if tracks_progress && self.config.progress_animate_enabled && !self.tap_scroll {
            COMMIT_AT_FULL_PAGE
        } else {
            self.config.index_change_threshold
        }
    }

    /// Index a scroll to `offset` would commit.
    pub fn calculate_index(
        &self,
        offset: f64,
        direction: ScrollDirection,
        tracks_progress: bool,
    ) -> Option<usize> {
        window::committed_index(
            offset,
            self.frame.width,
            self.count,
            direction,
            self.commit_threshold(tracks_progress),
        )
    }

    /// Progress transition reported for `offset`.
    pub fn calculate_index_by_progress(
        &self,
        offset: f64,
        direction: ScrollDirection,
    ) -> Option<ProgressTransition> {
        window::progress_transition(offset, self.frame.width, self.count, direction)
    }

    fn has_surface(&self) -> bool {
        self.frame.width > 0.0 && !self.frame.is_empty()
    }

    // ════════════════════════════════════════════════════════════════════
    // Data loading
    // ════════════════════════════════════════════════════════════════════

    /// Drop every item and reload from the host.
    ///
    /// Live and prefetched items are detached; reusable ones go to the pool
    /// and the rest are dropped. The current index resets and is then
    /// recomputed by [`update_data`](Self::update_data).
    pub fn reload_data<H: PagerHost<T>>(&mut self, host: &mut H) {
        self.phase = LayoutPhase::Loading;
        tracing::debug!(
            message = "pager.reload",
            visible = self.visible.len(),
            prefetched = self.prefetched.len(),
            cached = self.cache.len()
        );
        self.cache.clear();

        let live = mem::take(&mut self.visible);
        let prefetched = mem::take(&mut self.prefetched);
        for (index, mut item) in live.into_iter().chain(prefetched) {
            detach_item(host, &mut item, index);
            // Items the pool hands back are dropped.
            match self.pool.enqueue(item) {
                Ok(displaced) => tracing::debug!(
                    message = "pager.pool.enqueue",
                    index,
                    displaced = displaced.is_some(),
                    reason = "reload"
                ),
                Err(_) => tracing::debug!(message = "pager.reload.drop", index),
            }
        }

        self.cur_index = None;
        self.drag_start_offset = 0.0;
        self.scroll_animated = false;
        self.tap_scroll = false;
        self.visible_range = IndexRange::EMPTY;
        self.prefetch_range = IndexRange::EMPTY;
        self.update_data(host);
    }

    /// Re-read the item count and lay out again if the window changed.
    pub fn update_data<H: PagerHost<T>>(&mut self, host: &mut H) {
        if self.config.auto_cache {
            self.cache.clear();
        }
        self.count = host.item_count();
        self.did_load = true;
        tracing::debug!(message = "pager.update", count = self.count);
        self.relayout(host, false, false);
    }

    /// Recompute content size, clamp the index, and lay out.
    ///
    /// The offset is kept unless a pending index is applied, the current
    /// index was clamped or unset, the offset ran past the last page, or
    /// `snap` asks for page alignment after a resize.
    fn relayout<H: PagerHost<T>>(&mut self, host: &mut H, force: bool, snap: bool) {
        if !self.has_surface() {
            self.needs_layout = true;
            return;
        }
        let width = self.frame.width;
        let mut force = force;

        let size = Size::new(self.count as f64 * width, self.page_height());
        if size != self.content_size {
            self.content_size = size;
            force = true;
        }

        let mut snap = snap;
        let target = match self.pending_index.take() {
            Some(index) if index < self.count => {
                force = true;
                snap = true;
                Some(index)
            }
            _ if self.count == 0 => None,
            _ => match self.cur_index {
                Some(index) => Some(index.min(self.count - 1)),
                None => window::committed_index(
                    self.content_offset.max(0.0),
                    width,
                    self.count,
                    ScrollDirection::Left,
                    self.config.index_change_threshold,
                ),
            },
        };

        let last_offset = self.count.saturating_sub(1) as f64 * width;
        snap |= target.is_none()
            || self.cur_index.is_none()
            || self.cur_index != target
            || self.content_offset > last_offset;
        if snap {
            self.content_offset = target.map_or(0.0, |index| index as f64 * width);
        }
        if target != self.cur_index {
            let from = self.cur_index;
            self.cur_index = target;
            if let Some(to) = target {
                tracing::debug!(message = "pager.transition", from = ?from, to, animated = false);
                host.transition(from, to, false);
            }
        }

        self.needs_layout |= force;
        self.layout_if_needed(host);
        self.phase = LayoutPhase::LaidOut;
    }

    // ════════════════════════════════════════════════════════════════════
    // Scroll surface
    // ════════════════════════════════════════════════════════════════════

    /// Resize the scroll surface.
    ///
    /// Before the first load the frame is only stored. Afterwards a size
    /// change re-lays out and re-places every materialised item.
    pub fn set_frame<H: PagerHost<T>>(&mut self, frame: Rect, host: &mut H) {
        let resized = frame.size() != self.frame.size();
        self.frame = frame;
        if !self.did_load || !resized {
            return;
        }
        self.relayout(host, true, true);
        self.place_materialised(host);
    }

    /// Change the content inset. Page height follows when
    /// `adjust_scroll_inset` is set.
    pub fn set_content_inset<H: PagerHost<T>>(&mut self, inset: Insets, host: &mut H) {
        if inset == self.content_inset {
            return;
        }
        self.content_inset = inset;
        if self.did_load {
            self.relayout(host, true, false);
            self.place_materialised(host);
        }
    }

    fn place_materialised<H: PagerHost<T>>(&mut self, host: &mut H) {
        let geometry = self.geometry();
        for (index, item) in self.visible.iter_mut().chain(self.prefetched.iter_mut()) {
            let frame = geometry.frame(*index);
            item.set_frame(frame);
            host.place_item(item, *index, frame);
        }
    }

    /// Jump to the page at `index`.
    ///
    /// The offset changes immediately; `animate` is only forwarded to the
    /// host callbacks and to the resulting transition.
    pub fn scroll_to_item<H: PagerHost<T>>(&mut self, index: usize, animate: bool, host: &mut H) {
        if !self.did_load {
            self.pending_index = Some(index);
            return;
        }
        if index >= self.count {
            return;
        }
        if !self.has_surface() {
            self.pending_index = Some(index);
            return;
        }

        host.will_begin_scroll(animate);
        self.tap_scroll = true;
        self.scroll_animated = animate;
        self.phase = LayoutPhase::Scrolling;
        let offset = index as f64 * self.frame.width;
        self.set_content_offset(offset, host);
        self.phase = LayoutPhase::LaidOut;
        host.did_end_scroll(animate);
    }

    /// Scroll-offset-changed callback.
    pub fn set_content_offset<H: PagerHost<T>>(&mut self, offset: f64, host: &mut H) {
        if offset == self.content_offset && !self.needs_layout {
            self.tap_scroll = false;
            self.scroll_animated = false;
            host.did_scroll();
            return;
        }
        self.content_offset = offset;

        if self.did_load && self.has_surface() {
            let direction = ScrollDirection::between(self.drag_start_offset, offset);
            let tracks_progress = host.tracks_progress();
            self.update_index(direction, tracks_progress, host);
            if tracks_progress && self.config.progress_animate_enabled && !self.tap_scroll {
                if let Some(step) = self.calculate_index_by_progress(offset, direction) {
                    tracing::trace!(
                        message = "pager.progress",
                        from = step.from,
                        to = step.to,
                        progress = step.progress
                    );
                    host.transition_progress(step.from, step.to, step.progress);
                }
            }
            self.layout_if_needed(host);
        }

        self.tap_scroll = false;
        host.did_scroll();
    }

    fn update_index<H: PagerHost<T>>(
        &mut self,
        direction: ScrollDirection,
        tracks_progress: bool,
        host: &mut H,
    ) {
        let Some(index) = self.calculate_index(self.content_offset, direction, tracks_progress)
        else {
            return;
        };
        if self.cur_index == Some(index) {
            return;
        }
        let from = self.cur_index;
        self.cur_index = Some(index);
        let animated = self.scroll_animated;
        tracing::debug!(message = "pager.transition", from = ?from, to = index, animated);
        host.transition(from, index, animated);
        self.scroll_animated = false;
    }

    // ════════════════════════════════════════════════════════════════════
    // Drag lifecycle
    // ════════════════════════════════════════════════════════════════════

    pub fn will_begin_dragging<H: PagerHost<T>>(&mut self, host: &mut H) {
        self.drag_start_offset = self.content_offset;
        self.tap_scroll = false;
        self.phase = LayoutPhase::Scrolling;
        host.will_begin_dragging();
    }

    pub fn did_end_dragging<H: PagerHost<T>>(&mut self, will_decelerate: bool, host: &mut H) {
        host.did_end_dragging(will_decelerate);
        if !will_decelerate {
            self.settle(host);
        }
    }

    pub fn will_begin_decelerating<H: PagerHost<T>>(&mut self, host: &mut H) {
        host.will_begin_decelerating();
    }

    pub fn did_end_decelerating<H: PagerHost<T>>(&mut self, host: &mut H) {
        host.did_end_decelerating();
        self.settle(host);
    }

    pub fn did_end_scrolling_animation<H: PagerHost<T>>(&mut self, host: &mut H) {
        host.did_end_scrolling_animation();
        self.settle(host);
    }

    fn settle<H: PagerHost<T>>(&mut self, host: &mut H) {
        self.phase = LayoutPhase::LaidOut;
        if self.config.add_visible_items_only_when_settled {
            self.needs_layout = true;
            self.layout_if_needed(host);
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Windowing
    // ════════════════════════════════════════════════════════════════════

    /// Bring the live set in line with the current offset.
    ///
    /// A no-op when the visible range is unchanged and no structural change
    /// is pending.
    pub fn layout_if_needed<H: PagerHost<T>>(&mut self, host: &mut H) {
        if !self.has_surface() {
            return;
        }
        let range = window::visible_range(self.content_offset, self.frame.width, self.count);
        if range == self.visible_range && !self.needs_layout {
            return;
        }
        self.needs_layout = false;
        self.visible_range = range;

        let first = self.visible.is_empty();
        if !first {
            self.layout_prefetch(host);
        }
        self.remove_outside(range, host);
        self.add_inside(range, host);
        if first {
            self.layout_prefetch(host);
        }
    }

    fn remove_outside<H: PagerHost<T>>(&mut self, range: IndexRange, host: &mut H) {
        let stale: Vec<usize> = self
            .visible
            .keys()
            .copied()
            .filter(|index| !range.contains(*index))
            .collect();
        let keep_prefetched = self.config.prefetch_item_count > 0;
        let attach_early = self.config.prefetch_items_attach_early;

        for index in stale {
            let Some(mut item) = self.visible.remove(&index) else {
                continue;
            };
            if keep_prefetched && index < self.count && self.prefetch_range.contains(index) {
                if !attach_early {
                    detach_item(host, &mut item, index);
                }
                self.prefetched.insert(index, item);
            } else {
                detach_item(host, &mut item, index);
                self.recycle(index, item);
            }
        }
    }

    fn add_inside<H: PagerHost<T>>(&mut self, range: IndexRange, host: &mut H) {
        let defer_fresh = self.config.add_visible_items_only_when_settled
            && self.phase == LayoutPhase::Scrolling
            && !self.tap_scroll;

        for index in range.iter() {
            if self.visible.contains_key(&index) {
                continue;
            }
            let item = match self.prefetched.remove(&index) {
                Some(item) => Some(item),
                None => self.cache.take(index),
            };
            let mut item = match item {
                Some(item) => item,
                None if defer_fresh => continue,
                None => self.fetch(index, false, host),
            };
            let frame = self.frame_for_item(index);
            item.set_frame(frame);
            host.place_item(&mut item, index, frame);
            if !item.is_mounted() {
                attach_item(host, &mut item, index);
            }
            self.visible.insert(index, item);
        }
    }

    fn layout_prefetch<H: PagerHost<T>>(&mut self, host: &mut H) {
        let k = self.config.prefetch_item_count;
        if k == 0 {
            if !self.prefetched.is_empty() || !self.prefetch_range.is_empty() {
                self.prefetch_range = IndexRange::EMPTY;
                self.evict_prefetched(IndexRange::EMPTY, host);
            }
            return;
        }

        let visible = self.visible_range;
        if visible.len() == 1 {
            let next = window::prefetch_range(visible, k, self.count);
            if next == self.prefetch_range {
                return;
            }
            self.prefetch_range = next;
            self.evict_prefetched(next, host);

            let attach_early = self.config.prefetch_items_attach_early;
            for index in next.iter() {
                if visible.contains(index)
                    || self.visible.contains_key(&index)
                    || self.prefetched.contains_key(&index)
                {
                    continue;
                }
                let mut item = match self.cache.take(index) {
                    Some(item) => item,
                    None => self.fetch(index, true, host),
                };
                let frame = self.frame_for_item(index);
                item.set_frame(frame);
                host.place_item(&mut item, index, frame);
                if attach_early && !item.is_mounted() {
                    attach_item(host, &mut item, index);
                }
                self.prefetched.insert(index, item);
            }
        } else if !visible.intersects(&self.prefetch_range) {
            self.prefetch_range = IndexRange::EMPTY;
            self.evict_prefetched(IndexRange::EMPTY, host);
        }
    }

    /// Recycle prefetched items outside `keep`.
    fn evict_prefetched<H: PagerHost<T>>(&mut self, keep: IndexRange, host: &mut H) {
        let stale: Vec<usize> = self
            .prefetched
            .keys()
            .copied()
            .filter(|index| !keep.contains(*index))
            .collect();
        for index in stale {
            if let Some(mut item) = self.prefetched.remove(&index) {
                detach_item(host, &mut item, index);
                self.recycle(index, item);
            }
        }
    }

    fn fetch<H: PagerHost<T>>(&mut self, index: usize, prefetching: bool, host: &mut H) -> PagerItem<T> {
        let geometry = self.geometry();
        let mut reuse = Dequeue::new(&mut self.pool, geometry);
        let item = host.item(index, prefetching, &mut reuse);
        tracing::debug!(message = "pager.fetch", index, prefetching);
        item
    }

    /// Route a detached item to the pool, or else to the cache.
    ///
    /// Items past the end of the data are dropped.
    fn recycle(&mut self, index: usize, item: PagerItem<T>) {
        match self.pool.enqueue(item) {
            Ok(displaced) => {
                tracing::debug!(
                    message = "pager.pool.enqueue",
                    index,
                    displaced = displaced.is_some()
                );
            }
            Err(item) => {
                if self.config.auto_cache && index < self.count {
                    self.cache.insert(index, item);
                }
            }
        }
    }
}

fn attach_item<T, H: PagerHost<T>>(host: &mut H, item: &mut PagerItem<T>, index: usize) {
    host.attach(item, index);
    item.set_mounted(true);
    tracing::debug!(message = "pager.attach", index);
}

fn detach_item<T, H: PagerHost<T>>(host: &mut H, item: &mut PagerItem<T>, index: usize) {
    if !item.is_mounted() {
        return;
    }
    host.detach(item, index);
    item.set_mounted(false);
    tracing::debug!(message = "pager.detach", index);
}
