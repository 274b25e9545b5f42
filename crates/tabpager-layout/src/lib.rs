#![forbid(unsafe_code)]

//! Pager layout: item windowing and reuse for a one-page-at-a-time scroller.
//!
//! # Role in tabpager
//! `tabpager-layout` decides, for every scroll offset, which page indices are
//! visible, which neighbours are prefetched, where detached items go, and
//! when the host must attach or detach page content. The host adapters in
//! the `tabpager` facade own a [`PagerLayout`] and forward scroll events to it.
//!
//! # Primary types
//! - [`PagerLayout`]: the engine.
//! - [`PagerHost`]: data source and delegate contract implemented by the host.
//! - [`PagerItem`]: owned wrapper around the host's page payload.
//! - [`IndexCache`] and [`ReusePool`]: the two stores for detached items.
//! - [`PagerConfig`]: tunables with defaults and validation.
//!
//! # Example
//!
//! ```
//! use tabpager_core::Rect;
//! use tabpager_layout::{Dequeue, PagerHost, PagerItem, PagerLayout};
//!
//! struct Pages(Vec<usize>);
//!
//! impl PagerHost<String> for Pages {
//!     fn item_count(&self) -> usize {
//!         5
//!     }
//!     fn item(&mut self, index: usize, _prefetching: bool, reuse: &mut Dequeue<'_, String>) -> PagerItem<String> {
//!         let mut item = reuse.dequeue("page", index);
//!         *item.content_mut() = format!("page {index}");
//!         item
//!     }
//!     fn attach(&mut self, _item: &mut PagerItem<String>, index: usize) {
//!         self.0.push(index);
//!     }
//!     fn detach(&mut self, _item: &mut PagerItem<String>, index: usize) {
//!         self.0.retain(|i| *i != index);
//!     }
//! }
//!
//! let mut host = Pages(Vec::new());
//! let mut layout = PagerLayout::new();
//! layout.register("page", |_| String::new());
//! layout.set_frame(Rect::new(0.0, 0.0, 100.0, 200.0), &mut host);
//! layout.reload_data(&mut host);
//! layout.scroll_to_item(3, false, &mut host);
//!
//! assert_eq!(layout.cur_index(), Some(3));
//! assert_eq!(host.0, vec![3]);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod host;
pub mod item;
pub mod layout;
pub mod reuse;
pub mod window;

pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, IndexCache};
pub use config::PagerConfig;
pub use error::ConfigError;
pub use host::PagerHost;
pub use item::{PageContent, PagerItem};
pub use layout::{LayoutPhase, PagerLayout};
pub use reuse::{Dequeue, ReusePool};
pub use window::{PageGeometry, ProgressTransition, ScrollDirection};
