#![forbid(unsafe_code)]

//! The tab bar engine.

use tabpager_core::{Insets, Rect};

use crate::appearance::{CellAppearance, progress_appearances};
use crate::config::BarConfig;
use crate::error::BarConfigError;
use crate::flow;
use crate::indicator::{self, IndicatorParams};
use crate::style::BarStyle;

/// Outcome of a selection change or a drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarTransition {
    pub from: Option<usize>,
    pub to: usize,
    /// New indicator frame, `None` when the style hides it.
    pub indicator: Option<Rect>,
    /// Animation duration in seconds, `None` for an instant change.
    pub animation: Option<f64>,
    pub from_appearance: Option<CellAppearance>,
    pub to_appearance: CellAppearance,
}

/// Tab strip layout, selection, and indicator state.
///
/// Frames are in strip coordinates: the bar bounds inset by
/// `content_inset`, before the strip's own scroll offset.
#[derive(Debug, Clone)]
pub struct BarLayout {
    config: BarConfig,
    bounds: Rect,
    strip: Rect,

    count: usize,
    cur_index: usize,
    widths: Vec<f64>,
    cells: Vec<Rect>,
    section_inset: Insets,
    appearances: Vec<CellAppearance>,

    indicator: Option<Rect>,
    indicator_height: f64,
    indicator_radius: f64,
    scroll_offset: f64,
    host_cell_transitions: bool,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self::build(BarConfig::default())
    }
}

impl BarLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BarConfig) -> Result<Self, BarConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: BarConfig) -> Self {
        Self {
            indicator_height: config.progress_height,
            indicator_radius: config.progress_radius,
            section_inset: config.effective_section_inset(),
            config,
            bounds: Rect::ZERO,
            strip: Rect::ZERO,
            count: 0,
            cur_index: 0,
            widths: Vec::new(),
            cells: Vec::new(),
            appearances: Vec::new(),
            indicator: None,
            scroll_offset: 0.0,
            host_cell_transitions: false,
        }
    }

    // ── Configuration ───────────────────────────────────────────────────

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Replace the configuration and re-lay out the existing cells.
    ///
    /// Cell widths from the last width source are kept when the new config
    /// has no fixed `cell_width`.
    pub fn set_config(&mut self, config: BarConfig) -> Result<(), BarConfigError> {
        config.validate()?;
        self.config = config;
        self.relayout(None);
        Ok(())
    }

    /// Switch indicator style, applying its preset.
    pub fn set_style(&mut self, style: BarStyle) {
        self.config.set_style(style);
        self.relayout(None);
    }

    /// Let the host style cells itself; transitions then leave
    /// [`CellAppearance`]s untouched.
    pub fn set_host_cell_transitions(&mut self, enabled: bool) {
        self.host_cell_transitions = enabled;
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cur_index(&self) -> usize {
        self.cur_index
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Frame of the cell strip inside the bar.
    pub fn strip(&self) -> Rect {
        self.strip
    }

    pub fn cells(&self) -> &[Rect] {
        &self.cells
    }

    /// Frame of cell `index`, or [`Rect::ZERO`] past the end.
    pub fn cell_frame(&self, index: usize) -> Rect {
        self.cells.get(index).copied().unwrap_or(Rect::ZERO)
    }

    pub fn appearance(&self, index: usize) -> Option<CellAppearance> {
        self.appearances.get(index).copied()
    }

    pub fn appearances(&self) -> &[CellAppearance] {
        &self.appearances
    }

    pub fn indicator(&self) -> Option<Rect> {
        self.indicator
    }

    /// Indicator height after the cover style's layout adjustment.
    pub fn indicator_height(&self) -> f64 {
        self.indicator_height
    }

    pub fn indicator_radius(&self) -> f64 {
        self.indicator_radius
    }

    /// Section inset in effect, including centring.
    pub fn section_inset(&self) -> Insets {
        self.section_inset
    }

    /// Scrollable width of the strip.
    pub fn content_width(&self) -> f64 {
        flow::content_width(&self.cells, self.section_inset)
    }

    /// Strip scroll offset requested by the last selection.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Strip scroll offset that centres cell `index`.
    pub fn centered_offset(&self, index: usize) -> f64 {
        flow::centered_offset(self.cell_frame(index), self.strip.width, self.content_width())
    }

    fn params(&self) -> IndicatorParams {
        IndicatorParams {
            height: self.indicator_height,
            ..self.config.indicator_params()
        }
    }

    // ── Layout ──────────────────────────────────────────────────────────

    /// Load `count` cells into a bar occupying `bounds`.
    ///
    /// The selection is clamped into the new count and every cell is reset
    /// to its normal or selected appearance.
    ///
    /// # Panics
    ///
    /// Panics if the config has no fixed `cell_width` and `widths` is `None`.
    pub fn reload(
        &mut self,
        count: usize,
        bounds: Rect,
        widths: Option<&mut dyn FnMut(usize) -> f64>,
    ) {
        self.count = count;
        if self.cur_index >= count {
            self.cur_index = count.saturating_sub(1);
        }
        self.widths.clear();
        self.set_bounds_inner(bounds);
        self.relayout(widths);
        self.reset_appearances();
        tracing::debug!(
            message = "bar.reload",
            count,
            cur_index = self.cur_index,
            style = ?self.config.style
        );
    }

    /// Resize the bar.
    pub fn set_bounds(&mut self, bounds: Rect, widths: Option<&mut dyn FnMut(usize) -> f64>) {
        if bounds == self.bounds {
            return;
        }
        self.set_bounds_inner(bounds);
        self.relayout(widths);
    }

    fn set_bounds_inner(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.strip = Rect::from_size(bounds.size()).inset_by(self.config.content_inset);
    }

    fn relayout(&mut self, widths: Option<&mut dyn FnMut(usize) -> f64>) {
        self.measure(widths);
        self.section_inset = self.config.effective_section_inset();
        self.cells = flow::flow_cells(
            &self.widths,
            self.section_inset,
            self.config.cell_spacing,
            self.strip.height,
        );
        self.centre_cells();
        self.layout_indicator();
    }

    fn measure(&mut self, mut widths: Option<&mut dyn FnMut(usize) -> f64>) {
        if self.config.cell_width <= 0.0 && widths.is_none() && self.widths.len() == self.count {
            return;
        }
        let mut measured = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let width_for = widths
                .as_mut()
                .map(|f| &mut **f as &mut dyn FnMut(usize) -> f64);
            measured.push(flow::cell_width(&self.config, index, width_for));
        }
        self.widths = measured;
    }

    fn centre_cells(&mut self) {
        if !self.config.adjust_content_cells_center || self.strip.is_empty() {
            return;
        }
        let run = flow::run_width(&self.cells);
        if let Some(inset) = flow::centring_inset(run, self.strip.width, self.config.section_inset) {
            self.section_inset = inset;
            self.cells = flow::flow_cells(&self.widths, inset, self.config.cell_spacing, self.strip.height);
        }
    }

    fn layout_indicator(&mut self) {
        if self.strip.is_empty() {
            return;
        }
        if self.config.style.is_cover() {
            self.indicator_height = self.strip.height - 2.0 * self.config.progress_ver_edging;
            self.indicator_radius = if self.config.progress_radius > 0.0 {
                self.config.progress_radius
            } else {
                self.indicator_height / 2.0
            };
        } else {
            self.indicator_height = self.config.progress_height;
            self.indicator_radius = self.config.progress_radius;
        }
        self.indicator = self.underline_frame(self.cur_index);
    }

    fn reset_appearances(&mut self) {
        let selected = CellAppearance::selected(&self.config);
        let normal = CellAppearance::normal(&self.config);
        self.appearances = (0..self.count)
            .map(|index| if index == self.cur_index { selected } else { normal })
            .collect();
    }

    // ── Indicator geometry ──────────────────────────────────────────────

    /// Indicator frame resting on cell `index`.
    ///
    /// `None` when the style hides the indicator or `index` is past the end.
    pub fn underline_frame(&self, index: usize) -> Option<Rect> {
        if !self.config.style.shows_indicator() || index >= self.count {
            return None;
        }
        Some(indicator::underline_rect(self.cell_frame(index), &self.params()))
    }

    /// Indicator frame `progress` of the way from cell `from` to cell `to`.
    pub fn underline_frame_between(&self, from: usize, to: usize, progress: f64) -> Option<Rect> {
        if !self.config.style.shows_indicator() || from >= self.count || to >= self.count {
            return None;
        }
        Some(indicator::underline_rect_between(
            self.cell_frame(from),
            self.cell_frame(to),
            progress,
            &self.params(),
        ))
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Select cell `to`, coming from `from`.
    ///
    /// Returns `None` when either index is out of range. The indicator
    /// animates only when there is a `from` cell and `animate` is set.
    pub fn scroll_to_item(
        &mut self,
        from: Option<usize>,
        to: usize,
        animate: bool,
    ) -> Option<BarTransition> {
        if to >= self.count || from.is_some_and(|from| from >= self.count) {
            return None;
        }
        self.cur_index = to;

        if !self.host_cell_transitions {
            if let Some(from) = from {
                self.appearances[from] = CellAppearance::normal(&self.config);
            }
            self.appearances[to] = CellAppearance::selected(&self.config);
        }

        self.indicator = self.underline_frame(to);
        if self.config.auto_scroll_item_to_center {
            self.scroll_offset = self.centered_offset(to);
        }

        let animated = from.is_some() && animate;
        tracing::debug!(message = "bar.transition", from = ?from, to, animated);
        Some(BarTransition {
            from,
            to,
            indicator: self.indicator,
            animation: animated.then_some(self.config.animate_duration),
            from_appearance: from.and_then(|from| self.appearance(from)),
            to_appearance: self.appearances[to],
        })
    }

    /// Drag step `progress` of the way from cell `from` to cell `to`.
    ///
    /// The selection does not change. Cell appearances follow the drag
    /// unless `text_color_progress_enabled` is off.
    pub fn scroll_to_item_progress(
        &mut self,
        from: usize,
        to: usize,
        progress: f64,
    ) -> Option<BarTransition> {
        if from >= self.count || to >= self.count {
            return None;
        }
        if self.config.text_color_progress_enabled && !self.host_cell_transitions {
            let current = (self.appearances[from], self.appearances[to]);
            let (from_appearance, to_appearance) =
                progress_appearances(&self.config, current, progress);
            self.appearances[from] = from_appearance;
            self.appearances[to] = to_appearance;
        }
        self.indicator = self.underline_frame_between(from, to, progress);
        tracing::trace!(message = "bar.progress", from, to, progress);
        Some(BarTransition {
            from: Some(from),
            to,
            indicator: self.indicator,
            animation: None,
            from_appearance: Some(self.appearances[from]),
            to_appearance: self.appearances[to],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_bar(count: usize) -> BarLayout {
        let config = BarConfig::default()
            .with_style(BarStyle::Progress)
            .cell_width(44.0);
        let mut bar = BarLayout::with_config(config).unwrap();
        bar.reload(count, Rect::new(0.0, 0.0, 400.0, 40.0), None);
        bar
    }

    #[test]
    fn reload_flows_fixed_width_cells() {
        let bar = progress_bar(3);
        assert_eq!(bar.cells()[0], Rect::new(0.0, 0.0, 50.0, 40.0));
        assert_eq!(bar.cells()[1], Rect::new(52.0, 0.0, 50.0, 40.0));
        assert_eq!(bar.content_width(), 154.0);
        assert_eq!(bar.indicator(), Some(Rect::new(6.0, 38.0, 38.0, 2.0)));
        assert_eq!(bar.appearance(0).map(|a| a.scale), Some(1.0));
        assert_eq!(bar.appearance(1).map(|a| a.scale), Some(15.0 / 18.0));
    }

    #[test]
    fn width_source_sizes_cells() {
        let mut bar = BarLayout::new();
        let mut widths = |index: usize| 30.0 + 10.0 * index as f64;
        bar.reload(3, Rect::new(0.0, 0.0, 400.0, 40.0), Some(&mut widths));
        assert_eq!(bar.cells()[2], Rect::new(74.0, 0.0, 50.0, 40.0));
        // Widths are remembered for config changes.
        bar.set_style(BarStyle::Progress);
        assert_eq!(bar.cells()[2].width, 50.0);
    }

    #[test]
    fn selection_clamps_on_shrink() {
        let mut bar = progress_bar(5);
        bar.scroll_to_item(Some(0), 4, false);
        bar.reload(2, Rect::new(0.0, 0.0, 400.0, 40.0), None);
        assert_eq!(bar.cur_index(), 1);
    }

    #[test]
    fn discrete_transition_styles_cells() {
        let mut bar = progress_bar(3);
        let step = bar.scroll_to_item(Some(0), 2, true).unwrap();
        assert_eq!(step.animation, Some(0.25));
        assert_eq!(step.to_appearance.scale, 1.0);
        assert_eq!(step.from_appearance.map(|a| a.scale), Some(15.0 / 18.0));
        assert_eq!(bar.cur_index(), 2);
        assert_eq!(bar.indicator().map(|r| r.x), Some(110.0));
    }

    #[test]
    fn first_selection_is_instant() {
        let mut bar = progress_bar(3);
        let step = bar.scroll_to_item(None, 1, true).unwrap();
        assert_eq!(step.animation, None);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut bar = progress_bar(3);
        assert!(bar.scroll_to_item(Some(0), 3, false).is_none());
        assert!(bar.scroll_to_item(Some(5), 1, false).is_none());
        assert!(bar.scroll_to_item_progress(0, 9, 0.5).is_none());
        assert_eq!(bar.cur_index(), 0);
    }

    #[test]
    fn none_style_hides_indicator() {
        let mut bar = progress_bar(3);
        bar.set_style(BarStyle::None);
        assert_eq!(bar.indicator(), None);
        assert_eq!(bar.scroll_to_item(Some(0), 1, false).unwrap().indicator, None);
    }

    #[test]
    fn cover_fills_strip_height() {
        let mut bar = progress_bar(3);
        bar.set_style(BarStyle::Cover);
        assert_eq!(bar.indicator_height(), 34.0);
        assert_eq!(bar.indicator_radius(), 17.0);
        let indicator = bar.indicator().unwrap();
        assert_eq!(indicator.y, 3.0);
        // Derived inset lets the highlight overhang the first cell.
        assert_eq!(bar.section_inset().left, 2.5);
        assert_eq!(indicator.x, 2.0);
    }

    #[test]
    fn centring_narrow_runs() {
        let config = BarConfig::default()
            .cell_width(44.0)
            .adjust_content_cells_center(true);
        let mut bar = BarLayout::with_config(config).unwrap();
        bar.reload(2, Rect::new(0.0, 0.0, 302.0, 40.0), None);
        assert_eq!(bar.section_inset().left, 100.0);
        assert_eq!(bar.cells()[0].x, 100.0);
        assert_eq!(bar.cells()[1].max_x(), 202.0);
    }

    #[test]
    fn auto_scroll_centres_selection() {
        let mut bar = progress_bar(20);
        bar.scroll_to_item(Some(0), 10, false);
        // Cell 10 spans 520..570 and the strip is 400 wide.
        assert_eq!(bar.scroll_offset(), 345.0);
    }

    #[test]
    fn progress_disabled_keeps_appearances() {
        let config = BarConfig::default()
            .with_style(BarStyle::Progress)
            .cell_width(44.0)
            .text_color_progress_enabled(false);
        let mut bar = BarLayout::with_config(config).unwrap();
        bar.reload(3, Rect::new(0.0, 0.0, 400.0, 40.0), None);
        let before = bar.appearances().to_vec();
        let step = bar.scroll_to_item_progress(0, 1, 0.5).unwrap();
        assert_eq!(bar.appearances(), before.as_slice());
        assert!(step.indicator.is_some());
    }

    #[test]
    fn host_cell_transitions_skip_appearances() {
        let mut bar = progress_bar(3);
        bar.set_host_cell_transitions(true);
        let before = bar.appearances().to_vec();
        bar.scroll_to_item(Some(0), 1, false);
        bar.scroll_to_item_progress(1, 2, 0.4);
        assert_eq!(bar.appearances(), before.as_slice());
        assert_eq!(bar.cur_index(), 1);
    }

    #[test]
    #[should_panic(expected = "has no width")]
    fn reload_without_widths_panics() {
        let mut bar = BarLayout::new();
        bar.reload(1, Rect::new(0.0, 0.0, 100.0, 40.0), None);
    }
}
