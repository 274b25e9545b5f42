#![forbid(unsafe_code)]

//! Page-controller container.
//!
//! Like [`PagerView`](crate::PagerView), but each page is a controller with
//! a parent/child lifecycle. Attaching a page runs
//!
//! 1. `view_will_appear` on the delegate
//! 2. [`PageController::will_move_to_parent`]
//! 3. [`PageController::begin_appearance_transition`] (manual forwarding only)
//! 4. [`PageController::end_appearance_transition`] (manual forwarding only)
//! 5. [`PageController::did_move_to_parent`]
//! 6. `view_did_appear` on the delegate
//!
//! and detaching mirrors it with `attached == false`.

use tabpager_core::{Insets, Rect};
use tabpager_layout::{ConfigError, Dequeue, PagerConfig, PagerHost, PagerItem, PagerLayout};

use crate::transition::{PagerTransition, TransitionLog};

/// Lifecycle hooks of a page controller. All optional.
pub trait PageController {
    /// The controller is about to gain (`true`) or lose its parent.
    fn will_move_to_parent(&mut self, _attached: bool) {}

    fn did_move_to_parent(&mut self, _attached: bool) {}

    /// Only called when the container forwards appearance manually.
    fn begin_appearance_transition(&mut self, _appearing: bool, _animated: bool) {}

    /// Only called when the container forwards appearance manually.
    fn end_appearance_transition(&mut self) {}
}

/// Supplies page controllers. Required.
pub trait PagerControllerDataSource<C> {
    fn number_of_controllers(&self) -> usize;

    fn controller(
        &mut self,
        index: usize,
        prefetching: bool,
        reuse: &mut Dequeue<'_, C>,
    ) -> PagerItem<C>;
}

/// Optional notifications from a [`PagerController`].
pub trait PagerControllerDelegate<C> {
    fn view_will_appear(&mut self, _controller: &mut C, _index: usize) {}

    fn view_did_appear(&mut self, _controller: &mut C, _index: usize) {}

    fn view_will_disappear(&mut self, _controller: &mut C, _index: usize) {}

    fn view_did_disappear(&mut self, _controller: &mut C, _index: usize) {}

    /// Whether [`PagerControllerDelegate::transition_progress`] should be
    /// called.
    fn tracks_progress(&self) -> bool {
        false
    }

    fn transition(&mut self, _from: Option<usize>, _to: usize, _animated: bool) {}

    fn transition_progress(&mut self, _from: usize, _to: usize, _progress: f64) {}

    fn did_scroll(&mut self) {}

    fn will_begin_scrolling(&mut self, _animate: bool) {}

    fn did_end_scrolling(&mut self, _animate: bool) {}
}

/// Pager over page controllers.
pub struct PagerController<C> {
    layout: PagerLayout<C>,
    data_source: Option<Box<dyn PagerControllerDataSource<C>>>,
    delegate: Option<Box<dyn PagerControllerDelegate<C>>>,
    transitions: TransitionLog,
    bounds: Rect,
    content_inset: Insets,
    manual_appearance_forwarding: bool,
}

impl<C: PageController> Default for PagerController<C> {
    fn default() -> Self {
        Self::from_layout(PagerLayout::new())
    }
}

impl<C> std::fmt::Debug for PagerController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerController")
            .field("layout", &self.layout)
            .field("has_data_source", &self.data_source.is_some())
            .field("has_delegate", &self.delegate.is_some())
            .field("bounds", &self.bounds)
            .field("manual_appearance_forwarding", &self.manual_appearance_forwarding)
            .finish()
    }
}

impl<C: PageController> PagerController<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `adjust_scroll_inset` is forced on: pages fill the area below the
    /// top content inset.
    pub fn with_config(config: PagerConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_layout(PagerLayout::with_config(
            config.adjust_scroll_inset(true),
        )?))
    }

    fn from_layout(layout: PagerLayout<C>) -> Self {
        Self {
            layout,
            data_source: None,
            delegate: None,
            transitions: TransitionLog::default(),
            bounds: Rect::ZERO,
            content_inset: Insets::ZERO,
            manual_appearance_forwarding: false,
        }
    }

    pub fn set_data_source(&mut self, data_source: impl PagerControllerDataSource<C> + 'static) {
        self.data_source = Some(Box::new(data_source));
    }

    pub fn set_delegate(&mut self, delegate: impl PagerControllerDelegate<C> + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Forward appearance transitions to pages during attach and detach.
    ///
    /// Off by default: the host's own lifecycle machinery is assumed to do it.
    pub fn set_manual_appearance_forwarding(&mut self, enabled: bool) {
        self.manual_appearance_forwarding = enabled;
    }

    pub fn manual_appearance_forwarding(&self) -> bool {
        self.manual_appearance_forwarding
    }

    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: FnMut(usize) -> C + 'static,
    {
        self.layout.register(identifier, factory);
    }

    pub fn config(&self) -> &PagerConfig {
        self.layout.config()
    }

    pub fn set_config(&mut self, config: PagerConfig) -> Result<(), ConfigError> {
        self.layout.set_config(config.adjust_scroll_inset(true))
    }

    pub fn layout(&self) -> &PagerLayout<C> {
        &self.layout
    }

    pub fn count(&self) -> usize {
        self.layout.count()
    }

    pub fn cur_index(&self) -> Option<usize> {
        self.layout.cur_index()
    }

    pub fn visible_controllers(&self) -> impl Iterator<Item = (usize, &C)> + '_ {
        self.layout.visible_items().map(|(index, item)| (index, item.content()))
    }

    /// Materialised controller for `index`, without asking the data source.
    pub fn controller_for(&self, index: usize) -> Option<&C> {
        self.layout.item_for(index).map(PagerItem::content)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn content_inset(&self) -> Insets {
        self.content_inset
    }

    /// Record transitions for [`PagerController::take_transitions`].
    pub fn set_record_transitions(&mut self, enabled: bool) {
        self.transitions.set_enabled(enabled);
    }

    pub fn take_transitions(&mut self) -> Vec<PagerTransition> {
        self.transitions.take()
    }

    // ── Driving the engine ──────────────────────────────────────────────

    fn with_host<R>(
        &mut self,
        f: impl FnOnce(&mut PagerLayout<C>, &mut ControllerHost<'_, C>) -> R,
    ) -> R {
        let Some(data_source) = self.data_source.as_mut() else {
            panic!("PagerController has no data source");
        };
        let mut host = ControllerHost {
            data_source,
            delegate: &mut self.delegate,
            transitions: &mut self.transitions,
            manual_appearance_forwarding: self.manual_appearance_forwarding,
        };
        f(&mut self.layout, &mut host)
    }

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

    pub fn scroll_to_controller(&mut self, index: usize, animate: bool) {
        self.with_host(|layout, host| layout.scroll_to_item(index, animate, host));
    }

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

struct ControllerHost<'a, C> {
    data_source: &'a mut Box<dyn PagerControllerDataSource<C>>,
    delegate: &'a mut Option<Box<dyn PagerControllerDelegate<C>>>,
    transitions: &'a mut TransitionLog,
    manual_appearance_forwarding: bool,
}

impl<C: PageController> ControllerHost<'_, C> {
    fn move_page(&mut self, controller: &mut C, attached: bool) {
        controller.will_move_to_parent(attached);
        if self.manual_appearance_forwarding {
            controller.begin_appearance_transition(attached, true);
            controller.end_appearance_transition();
        }
        controller.did_move_to_parent(attached);
    }
}

impl<C: PageController> PagerHost<C> for ControllerHost<'_, C> {
    fn item_count(&self) -> usize {
        self.data_source.number_of_controllers()
    }

    fn item(&mut self, index: usize, prefetching: bool, reuse: &mut Dequeue<'_, C>) -> PagerItem<C> {
        self.data_source.controller(index, prefetching, reuse)
    }

    fn attach(&mut self, item: &mut PagerItem<C>, index: usize) {
        let controller = item.content_mut();
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.view_will_appear(controller, index);
        }
        self.move_page(controller, true);
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.view_did_appear(controller, index);
        }
    }

    fn detach(&mut self, item: &mut PagerItem<C>, index: usize) {
        let controller = item.content_mut();
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.view_will_disappear(controller, index);
        }
        self.move_page(controller, false);
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.view_did_disappear(controller, index);
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
