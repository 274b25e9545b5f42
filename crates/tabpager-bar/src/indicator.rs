#![forbid(unsafe_code)]

//! Indicator geometry.
//!
//! Pure functions of two cell frames, a progress value and the indicator
//! parameters. [`underline_span`] returns the indicator's horizontal
//! extent; [`underline_rect_between`] adds the vertical placement.
//!
//! For adjacent cells (`to.x == from.max_x() + cell_spacing`, or the mirror
//! when moving left) every style satisfies
//!
//! - `progress == 0.0` reproduces [`underline_rect`] of `from`
//! - `progress == 1.0` reproduces [`underline_rect`] of `to`
//!
//! and the two-piece styles are continuous at `progress == 0.5`.

use tabpager_core::Rect;

use crate::style::BarStyle;

/// Inputs of the indicator formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorParams {
    pub style: BarStyle,
    /// Fixed indicator width, or `0.0` to inset by `hor_edging` instead.
    pub width: f64,
    pub height: f64,
    pub hor_edging: f64,
    pub ver_edging: f64,
    pub cell_spacing: f64,
}

/// Horizontal inset of the indicator inside a cell of width `cell_width`.
#[inline]
pub fn indicator_edging(cell_width: f64, params: &IndicatorParams) -> f64 {
    if params.width > 0.0 {
        (cell_width - params.width) / 2.0
    } else {
        params.hor_edging
    }
}

/// Vertical origin of the indicator inside a cell of height `cell_height`.
#[inline]
pub fn indicator_y(cell_height: f64, params: &IndicatorParams) -> f64 {
    if params.style.is_cover() {
        (cell_height - params.height) / 2.0
    } else {
        cell_height - params.height - params.ver_edging
    }
}

/// Indicator frame resting on `cell`.
pub fn underline_rect(cell: Rect, params: &IndicatorParams) -> Rect {
    let edging = indicator_edging(cell.width, params);
    Rect::new(
        cell.x + edging,
        indicator_y(cell.height, params),
        cell.width - 2.0 * edging,
        params.height,
    )
}

/// Indicator frame `progress` of the way from `from` to `to`.
pub fn underline_rect_between(from: Rect, to: Rect, progress: f64, params: &IndicatorParams) -> Rect {
    let (x, width) = underline_span(from, to, progress, params);
    Rect::new(x, indicator_y(to.height, params), width, params.height)
}

/// Horizontal `(x, width)` of the indicator between two cells.
pub fn underline_span(from: Rect, to: Rect, progress: f64, params: &IndicatorParams) -> (f64, f64) {
    let fe = indicator_edging(from.width, params);
    let te = indicator_edging(to.width, params);
    let spacing = params.cell_spacing;
    let p = progress;
    let moving_right = from.x < to.x;

    match params.style {
        BarStyle::ProgressBounce => {
            if moving_right {
                if p <= 0.5 {
                    let x = from.x + fe;
                    let width = (to.width - te + fe + spacing) * 2.0 * p + from.width - 2.0 * fe;
                    (x, width)
                } else {
                    let x = from.x + fe + (from.width - fe + te + spacing) * (p - 0.5) * 2.0;
                    (x, to.max_x() - te - x)
                }
            } else if p <= 0.5 {
                let x = from.x + fe - (to.width - te + fe + spacing) * 2.0 * p;
                (x, from.max_x() - fe - x)
            } else {
                let x = to.x + te;
                let width = (from.width - fe + te + spacing) * (1.0 - p) * 2.0 + to.width - 2.0 * te;
                (x, width)
            }
        }
        BarStyle::ProgressElastic => {
            // Indicator widths when resting on each cell.
            let from_bar = from.width - 2.0 * fe;
            let to_bar = to.width - 2.0 * te;
            if moving_right {
                if p <= 0.5 {
                    let x = from.x + fe + from_bar * p;
                    let width = (to.width - te + fe + spacing) * 2.0 * p - to_bar * p + from_bar
                        - from_bar * p;
                    (x, width)
                } else {
                    let x = from.x
                        + fe
                        + from_bar * 0.5
                        + (from.width - fe - from_bar * 0.5 + te + spacing) * (p - 0.5) * 2.0;
                    let width = to.max_x() - te - x - to_bar * (1.0 - p);
                    (x, width)
                }
            } else if p <= 0.5 {
                let x = from.x + fe - (to.width - to_bar / 2.0 - te + fe + spacing) * 2.0 * p;
                let width = from.max_x() - from_bar * p - fe - x;
                (x, width)
            } else {
                let x = to.x + te + to_bar * (1.0 - p);
                let width = (from.width - fe + te - from_bar / 2.0 + spacing) * (1.0 - p) * 2.0
                    + to_bar
                    - to_bar * (1.0 - p);
                (x, width)
            }
        }
        BarStyle::None | BarStyle::Progress | BarStyle::Cover => {
            let from_x = from.x + fe;
            let x = (to.x + te - from_x) * p + from_x;
            let width = (to.width - 2.0 * te) * p + (from.width - 2.0 * fe) * (1.0 - p);
            (x, width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(style: BarStyle, width: f64, hor_edging: f64) -> IndicatorParams {
        IndicatorParams {
            style,
            width,
            height: 2.0,
            hor_edging,
            ver_edging: 0.0,
            cell_spacing: 2.0,
        }
    }

    const A: Rect = Rect::new(0.0, 0.0, 50.0, 40.0);
    const B: Rect = Rect::new(52.0, 0.0, 80.0, 40.0);

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn progress_style_insets_by_edging() {
        let p = params(BarStyle::Progress, 0.0, 6.0);
        let rect = underline_rect(Rect::new(0.0, 0.0, 50.0, 40.0), &p);
        assert_eq!(rect, Rect::new(6.0, 38.0, 38.0, 2.0));
    }

    #[test]
    fn fixed_width_is_centred() {
        let p = params(BarStyle::ProgressElastic, 30.0, 0.0);
        let rect = underline_rect(B, &p);
        assert_eq!(rect.x, 77.0);
        assert_eq!(rect.width, 30.0);
    }

    #[test]
    fn cover_is_vertically_centred() {
        let mut p = params(BarStyle::Cover, 0.0, -1.0);
        p.height = 34.0;
        let rect = underline_rect(A, &p);
        assert_eq!(rect.y, 3.0);
        assert_eq!(rect.x, -1.0);
        assert_eq!(rect.width, 52.0);
    }

    #[test]
    fn linear_midpoint() {
        let p = params(BarStyle::Progress, 0.0, 6.0);
        let (x, width) = underline_span(A, B, 0.5, &p);
        assert!((x - 32.0).abs() < 1e-12);
        assert!((width - 53.0).abs() < 1e-12);
    }

    #[test]
    fn bounce_stretches_then_contracts() {
        let p = params(BarStyle::ProgressBounce, 30.0, 0.0);
        let rest_from = underline_rect(A, &p);
        let rest_to = underline_rect(B, &p);
        let (x, width) = underline_span(A, B, 0.5, &p);
        // Leading edge reaches the arriving indicator's right edge at the midpoint.
        assert!((x - rest_from.x).abs() < 1e-12);
        assert!((x + width - rest_to.max_x()).abs() < 1e-12);
    }

    #[test]
    fn every_style_matches_rest_frames_at_the_ends() {
        for style in BarStyle::ALL {
            let p = params(style, if style.is_stretching() { 30.0 } else { 0.0 }, 6.0);
            for (from, to) in [(A, B), (B, A)] {
                let start = underline_rect(from, &p);
                let end = underline_rect(to, &p);
                assert!(close(underline_span(from, to, 0.0, &p), (start.x, start.width)), "{style:?} p=0");
                assert!(close(underline_span(from, to, 1.0, &p), (end.x, end.width)), "{style:?} p=1");
            }
        }
    }
}
