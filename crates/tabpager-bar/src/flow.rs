#![forbid(unsafe_code)]

//! Single-row flow layout of tab cells.

use tabpager_core::{Insets, Rect};

use crate::config::BarConfig;

/// Width of cell `index` including its edging.
///
/// A fixed `cell_width` in the config wins over the host's width source.
///
/// # Panics
///
/// Panics when `cell_width` is zero and no width source is given.
pub fn cell_width(
    config: &BarConfig,
    index: usize,
    widths: Option<&mut dyn FnMut(usize) -> f64>,
) -> f64 {
    if config.cell_width > 0.0 {
        return config.cell_width + 2.0 * config.cell_edging;
    }
    match widths {
        Some(width_for) => width_for(index),
        None => panic!("tab cell {index} has no width: set cell_width or provide a width source"),
    }
}

/// Lay `widths` out left to right inside a strip of height `strip_height`.
///
/// Cells start at `inset.left`, are separated by `spacing`, and fill the
/// strip height minus the vertical insets.
pub fn flow_cells(widths: &[f64], inset: Insets, spacing: f64, strip_height: f64) -> Vec<Rect> {
    let height = (strip_height - inset.vertical_sum()).max(0.0);
    let mut x = inset.left;
    widths
        .iter()
        .map(|&width| {
            let cell = Rect::new(x, inset.top, width, height);
            x += width + spacing;
            cell
        })
        .collect()
}

/// Scrollable width of the strip: the cell run plus the section insets.
pub fn content_width(cells: &[Rect], inset: Insets) -> f64 {
    match cells.last() {
        Some(last) => last.max_x() + inset.right,
        None => inset.horizontal_sum(),
    }
}

/// Horizontal extent of the cell run, first cell's left edge to last
/// cell's right edge.
pub fn run_width(cells: &[Rect]) -> f64 {
    match (cells.first(), cells.last()) {
        (Some(first), Some(last)) => last.max_x() - first.min_x(),
        _ => 0.0,
    }
}

/// Section inset that centres a run of `run` points inside `strip_width`.
///
/// `None` when the run does not fit.
pub fn centring_inset(run: f64, strip_width: f64, base: Insets) -> Option<Insets> {
    if run > strip_width {
        return None;
    }
    let space = (strip_width - run) / 2.0;
    Some(Insets::new(base.top, space, base.bottom, space))
}

/// Strip scroll offset that centres `cell`, clamped to the scrollable range.
pub fn centered_offset(cell: Rect, strip_width: f64, content_width: f64) -> f64 {
    let max = (content_width - strip_width).max(0.0);
    (cell.mid_x() - strip_width / 2.0).clamp(0.0, max)
}
