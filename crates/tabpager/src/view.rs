#![forbid(unsafe_code)]

//! Page-view container.
//!
//! [`PagerView`] owns a [`PagerLayout`] and a scroll surface frame, and turns
//! the engine's attach and detach calls into appear and disappear
//! notifications for plain page views.

use tabpager_core::{Insets, Rect};
use tabpager_layout::{ConfigError, Dequeue, PagerConfig, PagerHost, PagerItem, PagerLayout};

use crate::transition::{PagerTransition, TransitionLog};

/// Supplies page views. Required.
pub trait PagerViewDataSource<V> {
    fn number_of_views(&self) -> usize;

    /// Build or dequeue the view for `index`.
    fn view(&mut self, index: usize, prefetching: bool, reuse: &mut Dequeue<'_, V>) -> PagerItem<V>;
}

/// Optional notifications from a [`PagerView`].
pub trait PagerViewDelegate<V> {
    fn will_appear(&mut self, _view: &mut V, _index: usize) {}

    fn did_appear(&mut self, _view: &mut V, _index: usize) {}

    fn will_disappear(&mut self, _view: &mut V, _index: usize) {}

    fn did_disappear(&mut self, _view: &mut V, _index: usize) {}

    /// Whether [`PagerViewDelegate::transition_progress`] should be called.
    fn tracks_progress(&self) -> bool {
        false
    }

    fn transition(&mut self, _from: Option<usize>, _to: usize, _animated: bool) {}

    fn transition_progress(&mut self, _from: usize, _to: usize, _progress: f64) {}

    fn did_scroll(&mut self) {}

    fn will_begin_scrolling(&mut self, _animate: bool) {}

    fn did_end_scrolling(&mut self, _animate: bool) {}
}

/// Pager over plain views.
pub struct PagerView<V> {
    layout: PagerLayout<V>,
    data_source: Option<Box<dyn PagerViewDataSource<V>>>,
    delegate: Option<Box<dyn PagerViewDelegate<V>>>,
    transitions: TransitionLog,
    bounds: Rect,
    content_inset: Insets,
}

impl<V> Default for PagerView<V> {
    fn default() -> Self {
        Self::from_layout(PagerLayout::new())
    }
}

impl<V> std::fmt::Debug for PagerView<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerView")
            .field("layout", &self.layout)
            .field("has_data_source", &self.data_source.is_some())
            .field("has_delegate", &self.delegate.is_some())
            .field("bounds", &self.bounds)
            .field("content_inset", &self.content_inset)
            .finish()
    }
}

impl<V> PagerView<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PagerConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_layout(PagerLayout::with_config(config)?))
    }

    fn from_layout(layout: PagerLayout<V>) -> Self {
        Self {
            layout,
            data_source: None,
            delegate: None,
            transitions: TransitionLog::default(),
            bounds: Rect::ZERO,
            content_inset: Insets::ZERO,
        }
    }

    pub fn set_data_source(&mut self, data_source: impl PagerViewDataSource<V> + 'static) {
        self.data_source = Some(Box::new(data_source));
    }

    pub fn set_delegate(&mut self, delegate: impl PagerViewDelegate<V> + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Register the factory for views dequeued under `identifier`.
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: FnMut(usize) -> V + 'static,
    {
        self.layout.register(identifier, factory);
    }

    pub fn config(&self) -> &PagerConfig {
        self.layout.config()
    }

    pub fn set_config(&mut self, config: PagerConfig) -> Result<(), ConfigError> {
        self.layout.set_config(config)
    }

    pub fn layout(&self) -> &PagerLayout<V> {
        &self.layout
    }

    pub fn count(&self) -> usize {
        self.layout.count()
    }

    pub fn cur_index(&self) -> Option<usize> {
        self.layout.cur_index()
    }

    /// Live views in index order.
    pub fn visible_views(&self) -> impl Iterator<Item = (usize, &V)> + '_ {
        self.layout.visible_items().map(|(index, item)| (index, item.content()))
    }

    /// Materialised view for `index`, without asking the data source.
    pub fn view_for(&self, index: usize) -> Option<&V> {
        self.layout.item_for(index).map(PagerItem::content)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn content_inset(&self) -> Insets {
        self.content_inset
    }

    /// Record transitions for [`PagerView::take_transitions`].
    ///
    /// While enabled, drags also report progress.
    pub fn set_record_transitions(&mut self, enabled: bool) {
        self.transitions.set_enabled(enabled);
    }

    /// Drain the transitions recorded since the last call.
    pub fn take_transitions(&mut self) -> Vec<PagerTransition> {
        self.transitions.take()
    }

    // ── Driving the engine ──────────────────────────────────────────────

    fn with_host<R>(&mut self, f: impl FnOnce(&mut PagerLayout<V>, &mut ViewHost<'_, V>) -> R) -> R {
        let Some(data_source) = self.data_source.as_mut() else {
            panic!("PagerView has no data source");
        };
        let mut host = ViewHost {
            data_source,
            delegate: &mut self.delegate,
            transitions: &mut self.transitions,
        };
        f(&mut self.layout, &mut host)
    }

    /// Resize the container. The scroll surface fills `bounds`.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        // Without a data source nothing is loaded yet; the frame is applied
        // on the next reload.
        if self.data_source.is_none() {
            return;
        }
        self.with_host(|layout, host| layout.set_frame(bounds, host));
    }

    /// Inset of the scroll surface. With `adjust_scroll_inset` the top
    /// inset is taken off every page's height.
    pub fn set_content_inset(&mut self, inset: Insets) {
        self.content_inset = inset;
        if self.data_source.is_none() {
            return;
        }
        self.with_host(|layout, host| layout.set_content_inset(inset, host));
    }

    pub fn reload_data(&mut self) {
        let (bounds, inset) = (self.bounds, self.content_inset);
        self.with_host(|layout, host| {
            layout.set_frame(bounds, host);
            layout.set_content_inset(inset, host);
            layout.reload_data(host);
        });
    }

    pub fn update_data(&mut self) {
        let (bounds, inset) = (self.bounds, self.content_inset);
        self.with_host(|layout, host| {
            layout.set_frame(bounds, host);
            layout.set_content_inset(inset, host);
            layout.update_data(host);
        });
    }

    pub fn scroll_to_view(&mut self, index: usize, animate: bool) {
        self.with_host(|layout, host| layout.scroll_to_item(index, animate, host));
    }

    /// Scroll surface moved to `offset`.
    pub fn set_content_offset(&mut self, offset: f64) {
        self.with_host(|layout, host| layout.set_content_offset(offset, host));
    }

    pub fn will_begin_dragging(&mut self) {
        self.with_host(|layout, host| layout.will_begin_dragging(host));
    }

    pub fn did_end_dragging(&mut self, will_decelerate: bool) {
        self.with_host(|layout, host| layout.did_end_dragging(will_decelerate, host));
    }

    pub fn will_begin_decelerating(&mut self) {
        self.with_host(|layout, host| layout.will_begin_decelerating(host));
    }

    pub fn did_end_decelerating(&mut self) {
        self.with_host(|layout, host| layout.did_end_decelerating(host));
    }

    pub fn did_end_scrolling_animation(&mut self) {
        self.with_host(|layout, host| layout.did_end_scrolling_animation(host));
    }

    pub fn on_memory_warning(&mut self) {
        self.layout.on_memory_warning();
    }
}

struct ViewHost<'a, V> {
    data_source: &'a mut Box<dyn PagerViewDataSource<V>>,
    delegate: &'a mut Option<Box<dyn PagerViewDelegate<V>>>,
    transitions: &'a mut TransitionLog,
}

impl<V> PagerHost<V> for ViewHost<'_, V> {
    fn item_count(&self) -> usize {
        self.data_source.number_of_views()
    }

    fn item(&mut self, index: usize, prefetching: bool, reuse: &mut Dequeue<'_, V>) -> PagerItem<V> {
        self.data_source.view(index, prefetching, reuse)
    }

    fn attach(&mut self, item: &mut PagerItem<V>, index: usize) {
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.will_appear(item.content_mut(), index);
            delegate.did_appear(item.content_mut(), index);
        }
    }

    fn detach(&mut self, item: &mut PagerItem<V>, index: usize) {
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.will_disappear(item.content_mut(), index);
            delegate.did_disappear(item.content_mut(), index);
        }
    }

    fn tracks_progress(&self) -> bool {
        self.transitions.is_enabled()
            || self.delegate.as_deref().is_some_and(|delegate| delegate.tracks_progress())
    }

    fn transition(&mut self, from: Option<usize>, to: usize, animated: bool) {
        self.transitions.push(PagerTransition::Discrete { from, to, animated });
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.transition(from, to, animated);
        }
    }

    fn transition_progress(&mut self, from: usize, to: usize, progress: f64) {
        self.transitions.push(PagerTransition::Progress { from, to, progress });
        if let Some(delegate) = self.delegate.as_deref_mut() {
            if delegate.tracks_progress() {
                delegate.transition_progress(from, to, progress);
            }
        }
    }

    fn did_scroll(&mut self) {
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.did_scroll();
        }
    }

    fn will_begin_dragging(&mut self) {
        self.will_begin_scroll(true);
    }

    fn will_begin_scroll(&mut self, animate: bool) {
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.will_begin_scrolling(animate);
        }
    }

    fn did_end_scroll(&mut self, animate: bool) {
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.did_end_scrolling(animate);
        }
    }

    fn did_end_decelerating(&mut self) {
        self.did_end_scroll(true);
    }

    fn did_end_scrolling_animation(&mut self) {
        self.did_end_scroll(true);
    }
}
