//! End-to-end bar behaviour.

use tabpager_bar::indicator::{underline_rect, underline_rect_between};
use tabpager_bar::{BarConfig, BarLayout, BarStyle, IndicatorParams};
use tabpager_core::{Insets, Rect, Rgba};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 320.0, 40.0);

fn progress_params() -> IndicatorParams {
    BarConfig::default()
        .with_style(BarStyle::Progress)
        .cell_spacing(2.0)
        .indicator_params()
}

#[test]
fn progress_underline_between_fixed_cells() {
    let params = progress_params();
    let first = Rect::new(0.0, 0.0, 50.0, 40.0);
    let second = Rect::new(60.0, 0.0, 50.0, 40.0);

    let rest = underline_rect(first, &params);
    assert_eq!((rest.x, rest.width), (6.0, 38.0));

    let arrived = underline_rect_between(first, second, 1.0, &params);
    assert_eq!((arrived.x, arrived.width), (66.0, 38.0));
}

#[test]
fn engine_drag_then_commit() {
    let config = BarConfig::default()
        .with_style(BarStyle::Progress)
        .cell_width(44.0)
        .cell_spacing(10.0);
    let mut bar = BarLayout::with_config(config).unwrap();
    bar.reload(2, BOUNDS, None);
    assert_eq!(bar.cell_frame(1).x, 60.0);

    let half = bar.scroll_to_item_progress(0, 1, 0.5).unwrap();
    assert_eq!(half.indicator.map(|r| r.x), Some(36.0));
    assert_eq!(half.animation, None);
    assert_eq!(bar.cur_index(), 0);

    let end = bar.scroll_to_item_progress(0, 1, 1.0).unwrap();
    assert_eq!(end.indicator, Some(Rect::new(66.0, 38.0, 38.0, 2.0)));

    let commit = bar.scroll_to_item(Some(0), 1, false).unwrap();
    assert_eq!(commit.indicator, end.indicator);
    assert_eq!(bar.cur_index(), 1);
}

#[test]
fn drag_blends_cell_colours() {
    let config = BarConfig::default()
        .cell_width(40.0)
        .text_colors(Rgba::BLACK, Rgba::WHITE);
    let mut bar = BarLayout::with_config(config).unwrap();
    bar.reload(3, BOUNDS, None);

    let step = bar.scroll_to_item_progress(0, 1, 0.25).unwrap();
    let from = step.from_appearance.unwrap();
    assert!(from.text_color.approx_eq(&Rgba::new(0.75, 0.75, 0.75, 1.0), 1e-12));
    assert!(step.to_appearance.text_color.approx_eq(&Rgba::new(0.25, 0.25, 0.25, 1.0), 1e-12));
    // Untouched cells keep their state.
    assert_eq!(bar.appearance(2).map(|a| a.text_color), Some(Rgba::BLACK));
}

#[test]
fn content_inset_shrinks_strip() {
    let config = BarConfig::default()
        .cell_width(40.0)
        .content_inset(Insets::new(4.0, 10.0, 4.0, 10.0));
    let mut bar = BarLayout::with_config(config).unwrap();
    bar.reload(2, BOUNDS, None);
    assert_eq!(bar.strip(), Rect::new(10.0, 4.0, 300.0, 32.0));
    assert_eq!(bar.cell_frame(0).height, 32.0);
}

#[test]
fn resize_refits_cells() {
    let config = BarConfig::default().cell_width(40.0).adjust_content_cells_center(true);
    let mut bar = BarLayout::with_config(config).unwrap();
    bar.reload(2, BOUNDS, None);
    let before = bar.cell_frame(0).x;
    bar.set_bounds(Rect::new(0.0, 0.0, 420.0, 40.0), None);
    assert_eq!(bar.cell_frame(0).x, before + 50.0);
}

#[test]
fn wide_runs_are_not_centred() {
    let config = BarConfig::default().cell_width(94.0).adjust_content_cells_center(true);
    let mut bar = BarLayout::with_config(config).unwrap();
    bar.reload(5, BOUNDS, None);
    assert_eq!(bar.cell_frame(0).x, 0.0);
    assert_eq!(bar.content_width(), 508.0);
}

#[test]
fn out_of_range_frames() {
    let mut bar = BarLayout::with_config(BarConfig::default().cell_width(40.0)).unwrap();
    bar.reload(2, BOUNDS, None);
    assert_eq!(bar.cell_frame(7), Rect::ZERO);
    assert_eq!(bar.underline_frame(2), None);
    assert_eq!(bar.underline_frame_between(0, 2, 0.5), None);
}

#[test]
fn empty_bar_has_no_indicator() {
    let mut bar = BarLayout::with_config(BarConfig::default().cell_width(40.0)).unwrap();
    bar.reload(0, BOUNDS, None);
    assert_eq!(bar.indicator(), None);
    assert_eq!(bar.cur_index(), 0);
    assert!(bar.scroll_to_item(None, 0, false).is_none());
}

#[test]
fn invalid_config_is_rejected() {
    let mut bar = BarLayout::new();
    assert!(bar.set_config(BarConfig::default().fonts(-1.0, 18.0)).is_err());
    assert!(BarLayout::with_config(BarConfig::default().animate_duration(f64::NAN)).is_err());
}
