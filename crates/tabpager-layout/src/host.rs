#![forbid(unsafe_code)]

//! Host contract: data source and delegate in one trait.

use tabpager_core::Rect;

use crate::item::PagerItem;
use crate::reuse::Dequeue;

/// Implemented by whatever owns the pager's page contents.
///
/// The four required methods supply and mount items. Everything else is an
/// optional notification with an empty default body.
///
/// `attach` and `detach` are called exactly when an item enters or leaves
/// the visible window (and, with early attachment enabled, when it enters or
/// leaves the prefetch window). The host mounts and unmounts the content
/// inside these calls.
pub trait PagerHost<T> {
    /// Number of pages.
    fn item_count(&self) -> usize;

    /// Produce the item for `index`.
    ///
    /// `prefetching` is true when the request comes from read-ahead rather
    /// than from a page becoming visible. Use `reuse` to recycle pooled
    /// items.
    fn item(&mut self, index: usize, prefetching: bool, reuse: &mut Dequeue<'_, T>)
    -> PagerItem<T>;

    /// Mount `item` at `index`.
    fn attach(&mut self, item: &mut PagerItem<T>, index: usize);

    /// Unmount `item` from `index`.
    fn detach(&mut self, item: &mut PagerItem<T>, index: usize);

    /// Position the concrete view of `item` at `frame`.
    fn place_item(&mut self, _item: &mut PagerItem<T>, _index: usize, _frame: Rect) {}

    /// Whether the host listens to continuous progress.
    ///
    /// While this returns true and progress reporting is enabled, a drag
    /// only commits a new index at a full page.
    fn tracks_progress(&self) -> bool {
        false
    }

    /// Discrete index change. `from` is `None` on the first selection.
    fn transition(&mut self, _from: Option<usize>, _to: usize, _animated: bool) {}

    /// Continuous progress between two pages during a drag.
    fn transition_progress(&mut self, _from: usize, _to: usize, _progress: f64) {}

    fn did_scroll(&mut self) {}

    fn will_begin_dragging(&mut self) {}

    fn will_begin_scroll(&mut self, _animate: bool) {}

    fn did_end_scroll(&mut self, _animate: bool) {}

    fn did_end_dragging(&mut self, _will_decelerate: bool) {}

    fn will_begin_decelerating(&mut self) {}

    fn did_end_decelerating(&mut self) {}

    fn did_end_scrolling_animation(&mut self) {}
}
