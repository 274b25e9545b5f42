#![forbid(unsafe_code)]

//! Reuse pool: identifier registry plus one recycled item per identifier.
//!
//! Items leaving the visible window that carry a registered reuse
//! identifier park here instead of in the index cache. A later dequeue for
//! the same identifier hands the parked item back, so a pager with one page
//! layout only ever builds a handful of page contents.
//!
//! The pool keeps a single slot per identifier: parking a second item under
//! an occupied identifier drops the older one.

use std::fmt;

use ahash::AHashMap;
use tabpager_core::Rect;

use crate::item::PagerItem;
use crate::window::PageGeometry;

type Factory<T> = Box<dyn FnMut(usize) -> T>;

/// Registry of page factories and the recycled items keyed by identifier.
pub struct ReusePool<T> {
    factories: AHashMap<String, Factory<T>>,
    slots: AHashMap<String, PagerItem<T>>,
}

impl<T> Default for ReusePool<T> {
    fn default() -> Self {
        Self {
            factories: AHashMap::new(),
            slots: AHashMap::new(),
        }
    }
}

impl<T> fmt::Debug for ReusePool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        registered.sort_unstable();
        let mut pooled: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        pooled.sort_unstable();
        f.debug_struct("ReusePool")
            .field("registered", &registered)
            .field("pooled", &pooled)
            .finish()
    }
}

impl<T> ReusePool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory that builds fresh content for `identifier`.
    ///
    /// Registering an identifier again replaces its factory; an item already
    /// parked under it stays.
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: FnMut(usize) -> T + 'static,
    {
        self.factories.insert(identifier.into(), Box::new(factory));
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// Park a detached item.
    ///
    /// Returns `Ok` with the item it displaced, if any. Items without an
    /// identifier, or whose identifier was never registered, come back as
    /// `Err` so the caller can cache them instead.
    pub fn enqueue(&mut self, item: PagerItem<T>) -> Result<Option<PagerItem<T>>, PagerItem<T>> {
        let Some(identifier) = item.reuse_identifier() else {
            return Err(item);
        };
        if !self.factories.contains_key(identifier) {
            return Err(item);
        }
        let key = identifier.to_owned();
        Ok(self.slots.insert(key, item))
    }

    /// Take the parked item for `identifier` or build a fresh one.
    ///
    /// The returned item is stamped with `identifier` and sized to `frame`.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` was never registered.
    pub fn dequeue(&mut self, identifier: &str, index: usize, frame: Rect) -> PagerItem<T> {
        let mut item = match self.slots.remove(identifier) {
            Some(item) => item,
            None => {
                let Some(factory) = self.factories.get_mut(identifier) else {
                    panic!("no page factory registered for reuse identifier {identifier:?}");
                };
                PagerItem::reusable(factory(index), identifier)
            }
        };
        item.set_frame(frame);
        item
    }

    /// Borrow the item parked under `identifier`.
    pub fn pooled(&self, identifier: &str) -> Option<&PagerItem<T>> {
        self.slots.get(identifier)
    }

    /// Number of occupied slots.
    pub fn pooled_count(&self) -> usize {
        self.slots.len()
    }

    /// Drop every parked item. Registrations are kept.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Dequeue handle passed to [`PagerHost::item`](crate::PagerHost::item).
///
/// Borrows the engine's pool for the duration of one fetch and knows the
/// page geometry, so dequeued items arrive already sized for their index.
pub struct Dequeue<'a, T> {
    pool: &'a mut ReusePool<T>,
    geometry: PageGeometry,
}

impl<'a, T> Dequeue<'a, T> {
    pub fn new(pool: &'a mut ReusePool<T>, geometry: PageGeometry) -> Self {
        Self { pool, geometry }
    }

    /// Dequeue an item for `index`.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` was never registered.
    pub fn dequeue(&mut self, identifier: &str, index: usize) -> PagerItem<T> {
        let frame = self.geometry.frame(index);
        self.pool.dequeue(identifier, index, frame)
    }

    pub fn is_registered(&self, identifier: &str) -> bool {
        self.pool.is_registered(identifier)
    }

    /// Frame the engine will assign to `index`.
    pub fn frame_for(&self, index: usize) -> Rect {
        self.geometry.frame(index)
    }
}
