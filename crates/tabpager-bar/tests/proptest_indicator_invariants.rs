//! Property-based invariant tests for indicator geometry.
//!
//! 1. For adjacent cells, `progress == 0.0` rests on the departing cell and
//!    `progress == 1.0` rests on the arriving cell, in both directions and
//!    for every style
//! 2. Bounce and elastic are continuous across their `0.5` split
//! 3. Cell appearances at the ends of a drag equal the discrete states
//! 4. The bar engine's drag frames agree with its rest frames

use proptest::prelude::*;
use tabpager_bar::appearance::progress_appearances;
use tabpager_bar::indicator::{underline_rect, underline_span};
use tabpager_bar::{BarConfig, BarLayout, BarStyle, CellAppearance, IndicatorParams};
use tabpager_core::{Rect, Rgba};

const EPS: f64 = 1e-6;

// ── Strategies ──────────────────────────────────────────────────────────

fn style_strategy() -> impl Strategy<Value = BarStyle> {
    prop::sample::select(BarStyle::ALL.to_vec())
}

fn params_strategy() -> impl Strategy<Value = IndicatorParams> {
    (style_strategy(), 0f64..40.0, 1f64..6.0, -4f64..10.0, 0f64..4.0, 0f64..12.0).prop_map(
        |(style, width, height, hor_edging, ver_edging, cell_spacing)| IndicatorParams {
            style,
            width,
            height,
            hor_edging,
            ver_edging,
            cell_spacing,
        },
    )
}

/// Two adjacent cells, left then right.
fn adjacent_cells(spacing: f64) -> impl Strategy<Value = (Rect, Rect)> {
    (0f64..500.0, 10f64..200.0, 10f64..200.0, 20f64..60.0).prop_map(
        move |(x, left_width, right_width, height)| {
            let left = Rect::new(x, 0.0, left_width, height);
            let right = Rect::new(left.max_x() + spacing, 0.0, right_width, height);
            (left, right)
        },
    )
}

fn params_and_cells() -> impl Strategy<Value = (IndicatorParams, Rect, Rect)> {
    params_strategy().prop_flat_map(|params| {
        adjacent_cells(params.cell_spacing).prop_map(move |(left, right)| (params, left, right))
    })
}

fn close(actual: (f64, f64), expected: Rect) -> bool {
    (actual.0 - expected.x).abs() < EPS && (actual.1 - expected.width).abs() < EPS
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Rest frames at the ends of a drag
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ends_match_rest_frames((params, left, right) in params_and_cells()) {
        for (from, to) in [(left, right), (right, left)] {
            let start = underline_rect(from, &params);
            let end = underline_rect(to, &params);
            prop_assert!(close(underline_span(from, to, 0.0, &params), start));
            prop_assert!(close(underline_span(from, to, 1.0, &params), end));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Continuity at the split
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn two_piece_styles_are_continuous((params, left, right) in params_and_cells()) {
        for (from, to) in [(left, right), (right, left)] {
            let (x0, w0) = underline_span(from, to, 0.5, &params);
            let (x1, w1) = underline_span(from, to, 0.5 + 1e-12, &params);
            prop_assert!((x0 - x1).abs() < EPS);
            prop_assert!((w0 - w1).abs() < EPS);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Appearance endpoints
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn appearance_ends_match_discrete_states(
        normal_size in 8f64..20.0,
        extra in 0f64..10.0,
        normal in (0f64..1.0, 0f64..1.0, 0f64..1.0),
        selected in (0f64..1.0, 0f64..1.0, 0f64..1.0),
    ) {
        let config = BarConfig::default()
            .fonts(normal_size, normal_size + extra)
            .text_colors(
                Rgba::new(normal.0, normal.1, normal.2, 1.0),
                Rgba::new(selected.0, selected.1, selected.2, 1.0),
            );
        let sel = CellAppearance::selected(&config);
        let norm = CellAppearance::normal(&config);

        let (from, to) = progress_appearances(&config, (sel, norm), 0.0);
        prop_assert!(from.approx_eq(&sel, EPS));
        prop_assert!(to.approx_eq(&norm, EPS));

        let (from, to) = progress_appearances(&config, (sel, norm), 1.0);
        prop_assert!(from.approx_eq(&norm, EPS));
        prop_assert!(to.approx_eq(&sel, EPS));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Engine agreement
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn engine_drag_ends_on_rest_frames(
        style in style_strategy(),
        widths in prop::collection::vec(20f64..120.0, 2..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let count = widths.len();
        let mut bar = BarLayout::with_config(BarConfig::default().with_style(style)).unwrap();
        let mut width_for = |index: usize| widths[index];
        bar.reload(count, Rect::new(0.0, 0.0, 600.0, 44.0), Some(&mut width_for));

        let from = pick.index(count - 1);
        let to = from + 1;
        for (a, b) in [(from, to), (to, from)] {
            let start = bar.underline_frame_between(a, b, 0.0);
            let end = bar.underline_frame_between(a, b, 1.0);
            match (start, bar.underline_frame(a), end, bar.underline_frame(b)) {
                (Some(start), Some(rest_a), Some(end), Some(rest_b)) => {
                    prop_assert!(start.approx_eq(&rest_a, EPS));
                    prop_assert!(end.approx_eq(&rest_b, EPS));
                }
                (None, None, None, None) => prop_assert_eq!(style, BarStyle::None),
                other => prop_assert!(false, "mismatched frames {:?}", other),
            }
        }
    }
}
