//! Pages and tabs shared by the facade suites.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tabpager::prelude::*;

pub const BOUNDS: Rect = Rect::new(0.0, 0.0, 320.0, 480.0);
pub const PAGE_WIDTH: f64 = 320.0;

pub type Log = Rc<RefCell<Vec<String>>>;

#[derive(Debug)]
pub struct Page {
    pub index: usize,
    pub parented: bool,
}

impl PageController for Page {
    fn did_move_to_parent(&mut self, attached: bool) {
        self.parented = attached;
    }
}

pub struct Pages(pub usize);

impl PagerControllerDataSource<Page> for Pages {
    fn number_of_controllers(&self) -> usize {
        self.0
    }

    fn controller(&mut self, index: usize, _prefetching: bool, _reuse: &mut Dequeue<'_, Page>) -> PagerItem<Page> {
        PagerItem::new(Page {
            index,
            parented: false,
        })
    }
}

pub struct Tabs(pub usize);

impl TabPagerBarDataSource for Tabs {
    fn number_of_items(&self) -> usize {
        self.0
    }
}

/// Records every tab tap.
pub struct TapLog(pub Log);

impl TabPagerBarDelegate for TapLog {
    fn did_select_item(&mut self, index: usize) {
        self.0.borrow_mut().push(format!("select {index}"));
    }
}

/// A loaded composite with `count` pages and 60-point tabs.
pub fn tab_pager(count: usize) -> TabPager<Page> {
    let bar = BarConfig::default().cell_width(60.0);
    let mut tabs = TabPager::with_configs(PagerConfig::default(), bar).unwrap();
    tabs.pager_mut().set_data_source(Pages(count));
    tabs.bar_mut().set_data_source(Tabs(count));
    tabs.set_bounds(BOUNDS);
    tabs.reload_data().unwrap();
    tabs
}
