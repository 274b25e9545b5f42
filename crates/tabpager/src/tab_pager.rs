#![forbid(unsafe_code)]

//! Tab bar stacked above a page controller, kept in sync.
//!
//! Pager transitions drive the bar's selection and indicator; taps on the
//! bar scroll the pager. The bar takes the top `bar_height` of the bounds
//! and the pager the rest.

use tabpager_bar::BarConfig;
use tabpager_core::Rect;
use tabpager_layout::PagerConfig;

use crate::bar::TabPagerBar;
use crate::controller::{PageController, PagerController};
use crate::error::Error;
use crate::transition::PagerTransition;

pub const DEFAULT_BAR_HEIGHT: f64 = 44.0;

/// A [`TabPagerBar`] wired to a [`PagerController`].
#[derive(Debug)]
pub struct TabPager<C> {
    pager: PagerController<C>,
    bar: TabPagerBar,
    bounds: Rect,
    bar_height: f64,
}

impl<C: PageController> Default for TabPager<C> {
    fn default() -> Self {
        Self::from_parts(PagerController::new(), TabPagerBar::new())
    }
}

impl<C: PageController> TabPager<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configs(pager: PagerConfig, bar: BarConfig) -> Result<Self, Error> {
        Ok(Self::from_parts(
            PagerController::with_config(pager)?,
            TabPagerBar::with_config(bar)?,
        ))
    }

    /// Wire existing adapters together. The pager starts recording
    /// transitions.
    pub fn from_parts(mut pager: PagerController<C>, bar: TabPagerBar) -> Self {
        pager.set_record_transitions(true);
        Self {
            pager,
            bar,
            bounds: Rect::ZERO,
            bar_height: DEFAULT_BAR_HEIGHT,
        }
    }

    pub fn pager(&self) -> &PagerController<C> {
        &self.pager
    }

    /// Data source, delegate and registration access. Transitions raised
    /// through this handle reach the bar on the next driving call.
    pub fn pager_mut(&mut self) -> &mut PagerController<C> {
        &mut self.pager
    }

    pub fn bar(&self) -> &TabPagerBar {
        &self.bar
    }

    pub fn bar_mut(&mut self) -> &mut TabPagerBar {
        &mut self.bar
    }

    pub fn bar_height(&self) -> f64 {
        self.bar_height
    }

    pub fn set_bar_height(&mut self, height: f64) {
        self.bar_height = height.max(0.0);
        self.set_bounds(self.bounds);
    }

    fn bar_frame(&self) -> Rect {
        let height = self.bar_height.min(self.bounds.height);
        Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, height)
    }

    fn pager_frame(&self) -> Rect {
        let bar = self.bar_frame();
        Rect::new(
            self.bounds.x,
            bar.max_y(),
            self.bounds.width,
            self.bounds.height - bar.height,
        )
    }

    /// Forward queued pager transitions to the bar.
    fn sync(&mut self) {
        for transition in self.pager.take_transitions() {
            match transition {
                PagerTransition::Discrete { from, to, animated } => {
                    self.bar.scroll_to_item(from, to, animated);
                }
                PagerTransition::Progress { from, to, progress } => {
                    self.bar.scroll_to_item_progress(from, to, progress);
                }
            }
        }
    }

    // ── Driving ─────────────────────────────────────────────────────────

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        if self.bar.count() > 0 {
            self.bar.set_bounds(self.bar_frame());
        }
        self.pager.set_bounds(self.pager_frame());
        self.sync();
    }

    /// Reload the bar, then the pager.
    pub fn reload_data(&mut self) -> Result<(), Error> {
        self.bar.reload_data(self.bar_frame())?;
        self.pager.set_bounds(self.pager_frame());
        self.pager.reload_data();
        self.sync();
        Ok(())
    }

    pub fn update_data(&mut self) -> Result<(), Error> {
        self.bar.reload_data(self.bar_frame())?;
        self.pager.update_data();
        self.sync();
        Ok(())
    }

    /// The user tapped tab `index`.
    pub fn select_item(&mut self, index: usize) {
        if index >= self.bar.count() {
            return;
        }
        tracing::debug!(message = "tab_pager.select", index);
        self.bar.select_item(index);
        self.pager.scroll_to_controller(index, true);
        self.sync();
    }

    /// Select the tab under `x` in bar strip coordinates.
    pub fn tap_bar(&mut self, x: f64) {
        if let Some(index) = self.bar.item_at(x) {
            self.select_item(index);
        }
    }

    pub fn set_content_offset(&mut self, offset: f64) {
        self.pager.set_content_offset(offset);
        self.sync();
    }

    pub fn will_begin_dragging(&mut self) {
        self.pager.will_begin_dragging();
    }

    pub fn did_end_dragging(&mut self, will_decelerate: bool) {
        self.pager.did_end_dragging(will_decelerate);
        self.sync();
    }

    pub fn will_begin_decelerating(&mut self) {
        self.pager.will_begin_decelerating();
    }

    pub fn did_end_decelerating(&mut self) {
        self.pager.did_end_decelerating();
        self.sync();
    }

    pub fn did_end_scrolling_animation(&mut self) {
        self.pager.did_end_scrolling_animation();
        self.sync();
    }

    pub fn on_memory_warning(&mut self) {
        self.pager.on_memory_warning();
    }
}
