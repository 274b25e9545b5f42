#![forbid(unsafe_code)]

//! tabpager public facade crate.
//!
//! Re-exports the engines and adds host adapters that own a data source and
//! a delegate:
//!
//! - [`PagerView`]: pages are plain views.
//! - [`PagerController`]: pages are [`PageController`]s with a parent/child
//!   lifecycle.
//! - [`TabPagerBar`]: the tab strip.
//! - [`TabPager`]: a bar and a page controller kept in sync.
//!
//! # Example
//!
//! ```
//! use tabpager::prelude::*;
//!
//! struct Page;
//! impl PageController for Page {}
//!
//! struct Pages;
//! impl PagerControllerDataSource<Page> for Pages {
//!     fn number_of_controllers(&self) -> usize {
//!         4
//!     }
//!     fn controller(&mut self, _index: usize, _prefetching: bool, _reuse: &mut Dequeue<'_, Page>) -> PagerItem<Page> {
//!         PagerItem::new(Page)
//!     }
//! }
//!
//! struct Tabs;
//! impl TabPagerBarDataSource for Tabs {
//!     fn number_of_items(&self) -> usize {
//!         4
//!     }
//! }
//!
//! let bar = BarConfig::default().cell_width(60.0);
//! let mut tabs: TabPager<Page> = TabPager::with_configs(PagerConfig::default(), bar).unwrap();
//! tabs.pager_mut().set_data_source(Pages);
//! tabs.bar_mut().set_data_source(Tabs);
//! tabs.set_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
//! tabs.reload_data().unwrap();
//!
//! tabs.select_item(2);
//! assert_eq!(tabs.pager().cur_index(), Some(2));
//! assert_eq!(tabs.bar().cur_index(), 2);
//! ```

pub mod bar;
pub mod controller;
pub mod error;
pub mod tab_pager;
pub mod transition;
pub mod view;

pub use bar::{TabPagerBar, TabPagerBarDataSource, TabPagerBarDelegate};
pub use controller::{
    PageController, PagerController, PagerControllerDataSource, PagerControllerDelegate,
};
pub use error::{Error, Result};
pub use tab_pager::{DEFAULT_BAR_HEIGHT, TabPager};
pub use transition::PagerTransition;
pub use view::{PagerView, PagerViewDataSource, PagerViewDelegate};

// --- Engine re-exports -----------------------------------------------------

pub use tabpager_bar::{
    BarConfig, BarConfigError, BarLayout, BarStyle, BarTransition, CellAppearance,
};
pub use tabpager_core::{IndexRange, Insets, Rect, Rgba, Size};
pub use tabpager_layout::{
    ConfigError, Dequeue, PageContent, PagerConfig, PagerHost, PagerItem, PagerLayout,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BarConfig, BarStyle, Dequeue, Error, PageController, PagerConfig, PagerController,
        PagerControllerDataSource, PagerControllerDelegate, PagerItem, PagerTransition, PagerView,
        PagerViewDataSource, PagerViewDelegate, Rect, TabPager, TabPagerBar,
        TabPagerBarDataSource, TabPagerBarDelegate,
    };

    pub use crate::{bar_engine, core, layout};
}

pub use tabpager_bar as bar_engine;
pub use tabpager_core as core;
pub use tabpager_layout as layout;
