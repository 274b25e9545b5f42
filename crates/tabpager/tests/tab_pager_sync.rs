//! Bar and pager stay in step.

mod common;

use common::{BOUNDS, Log, PAGE_WIDTH, TapLog, tab_pager};
use tabpager::prelude::*;

#[test]
fn reload_selects_first_tab_and_page() {
    let tabs = tab_pager(4);
    assert_eq!(tabs.pager().cur_index(), Some(0));
    assert_eq!(tabs.bar().cur_index(), 0);
    assert_eq!(tabs.bar().layout().bounds().height, 44.0);
    assert_eq!(tabs.pager().layout().frame(), Rect::new(0.0, 44.0, 320.0, 436.0));
    let (_, page) = tabs.pager().visible_controllers().next().unwrap();
    assert!(page.parented);
}

#[test]
fn tapping_a_tab_scrolls_the_pager() {
    let log = Log::default();
    let mut tabs = tab_pager(4);
    tabs.bar_mut().set_delegate(TapLog(log.clone()));

    // Tab 3 spans 204..270 in strip coordinates.
    tabs.tap_bar(210.0);

    assert_eq!(*log.borrow(), vec!["select 3"]);
    assert_eq!(tabs.pager().cur_index(), Some(3));
    assert_eq!(tabs.bar().cur_index(), 3);
    assert_eq!(tabs.pager().layout().content_offset(), 3.0 * PAGE_WIDTH);
}

#[test]
fn out_of_range_tab_is_ignored() {
    let mut tabs = tab_pager(2);
    tabs.select_item(5);
    tabs.tap_bar(1000.0);
    assert_eq!(tabs.bar().cur_index(), 0);
    assert_eq!(tabs.pager().cur_index(), Some(0));
}

#[test]
fn drag_moves_indicator_before_committing() {
    let mut tabs = tab_pager(4);
    let resting = tabs.bar().indicator().unwrap();

    tabs.will_begin_dragging();
    tabs.set_content_offset(PAGE_WIDTH / 2.0);

    assert_eq!(tabs.pager().cur_index(), Some(0));
    assert_eq!(tabs.bar().cur_index(), 0);
    let midway = tabs.bar().indicator().unwrap();
    assert!(midway.x > resting.x);
    let arriving = tabs.bar().layout().appearance(1).unwrap().scale;
    assert!(arriving > tabs.bar().config().font_scale() && arriving < 1.0);

    tabs.set_content_offset(PAGE_WIDTH);
    tabs.did_end_dragging(true);
    tabs.will_begin_decelerating();
    tabs.did_end_decelerating();

    assert_eq!(tabs.pager().cur_index(), Some(1));
    assert_eq!(tabs.bar().cur_index(), 1);
    assert_eq!(tabs.bar().indicator(), tabs.bar().layout().underline_frame(1));
}

#[test]
fn shrinking_data_clamps_both_sides() {
    let mut tabs = tab_pager(5);
    tabs.select_item(4);
    tabs.pager_mut().set_data_source(common::Pages(2));
    tabs.bar_mut().set_data_source(common::Tabs(2));
    tabs.update_data().unwrap();

    assert_eq!(tabs.pager().cur_index(), Some(1));
    assert_eq!(tabs.bar().cur_index(), 1);
}

#[test]
fn bar_height_splits_bounds() {
    let mut tabs = tab_pager(3);
    tabs.set_bar_height(60.0);
    assert_eq!(tabs.pager().layout().frame().min_y(), 60.0);
    assert_eq!(tabs.pager().layout().frame().height, BOUNDS.height - 60.0);
}

#[test]
fn invalid_configs_are_reported() {
    let result: Result<TabPager<common::Page>, Error> = TabPager::with_configs(
        PagerConfig::default().cache_capacity(0),
        BarConfig::default(),
    );
    assert!(matches!(result, Err(Error::Pager(_))));

    let result: Result<TabPager<common::Page>, Error> =
        TabPager::with_configs(PagerConfig::default(), BarConfig::default().fonts(0.0, 1.0));
    assert_eq!(
        result.unwrap_err().to_string(),
        "bar config: normal font size must be positive and finite, got 0"
    );
}
