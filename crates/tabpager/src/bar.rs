#![forbid(unsafe_code)]

//! Tab bar container.

use tabpager_bar::{BarConfig, BarConfigError, BarLayout, BarStyle, BarTransition, CellAppearance};
use tabpager_core::Rect;

/// Supplies the tab count. Required.
pub trait TabPagerBarDataSource {
    fn number_of_items(&self) -> usize;
}

/// Optional hooks of a [`TabPagerBar`].
pub trait TabPagerBarDelegate {
    /// Adjust the bar config before every reload.
    fn configure_layout(&mut self, _config: &mut BarConfig) {}

    /// Width of cell `index`, edging included. Consulted only when the
    /// config has no fixed `cell_width`.
    fn width_for_item(&mut self, _index: usize) -> Option<f64> {
        None
    }

    fn did_select_item(&mut self, _index: usize) {}

    /// Whether the delegate styles cells itself. When true the bar leaves
    /// [`CellAppearance`]s alone and calls the transition hooks below.
    fn overrides_cell_transitions(&self) -> bool {
        false
    }

    fn transition(&mut self, _from: Option<usize>, _to: usize, _animated: bool) {}

    fn transition_progress(&mut self, _from: usize, _to: usize, _progress: f64) {}
}

/// Tab strip driven by a data source and an optional delegate.
pub struct TabPagerBar {
    layout: BarLayout,
    data_source: Option<Box<dyn TabPagerBarDataSource>>,
    delegate: Option<Box<dyn TabPagerBarDelegate>>,
}

impl Default for TabPagerBar {
    fn default() -> Self {
        Self::from_layout(BarLayout::new())
    }
}

impl std::fmt::Debug for TabPagerBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabPagerBar")
            .field("layout", &self.layout)
            .field("has_data_source", &self.data_source.is_some())
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl TabPagerBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BarConfig) -> Result<Self, BarConfigError> {
        Ok(Self::from_layout(BarLayout::with_config(config)?))
    }

    fn from_layout(layout: BarLayout) -> Self {
        Self {
            layout,
            data_source: None,
            delegate: None,
        }
    }

    pub fn set_data_source(&mut self, data_source: impl TabPagerBarDataSource + 'static) {
        self.data_source = Some(Box::new(data_source));
    }

    pub fn set_delegate(&mut self, delegate: impl TabPagerBarDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    pub fn config(&self) -> &BarConfig {
        self.layout.config()
    }

    pub fn set_style(&mut self, style: BarStyle) {
        self.layout.set_style(style);
    }

    pub fn count(&self) -> usize {
        self.layout.count()
    }

    pub fn cur_index(&self) -> usize {
        self.layout.cur_index()
    }

    pub fn cell_frame(&self, index: usize) -> Rect {
        self.layout.cell_frame(index)
    }

    pub fn appearance(&self, index: usize) -> Option<CellAppearance> {
        self.layout.appearance(index)
    }

    pub fn indicator(&self) -> Option<Rect> {
        self.layout.indicator()
    }

    /// Cell under `x`, in strip coordinates before scrolling.
    pub fn item_at(&self, x: f64) -> Option<usize> {
        self.layout
            .cells()
            .iter()
            .position(|cell| cell.min_x() <= x && x < cell.max_x())
    }

    // ── Layout ──────────────────────────────────────────────────────────

    /// Re-read the count, let the delegate adjust the config, and lay out
    /// into `bounds`.
    ///
    /// # Panics
    ///
    /// Panics without a data source, or when cells need a width the
    /// delegate does not provide.
    pub fn reload_data(&mut self, bounds: Rect) -> Result<(), BarConfigError> {
        let Some(data_source) = self.data_source.as_deref() else {
            panic!("TabPagerBar has no data source");
        };
        let count = data_source.number_of_items();

        let mut delegate = self.delegate.as_deref_mut();
        if let Some(delegate) = delegate.as_deref_mut() {
            let mut config = self.layout.config().clone();
            delegate.configure_layout(&mut config);
            if config != *self.layout.config() {
                self.layout.set_config(config)?;
            }
            self.layout
                .set_host_cell_transitions(delegate.overrides_cell_transitions());
        }

        let mut width_for = |index: usize| {
            match delegate.as_deref_mut().and_then(|d| d.width_for_item(index)) {
                Some(width) => width,
                None => panic!(
                    "tab cell {index} has no width: set cell_width or provide a width source"
                ),
            }
        };
        self.layout.reload(count, bounds, Some(&mut width_for));
        Ok(())
    }

    /// Resize the bar.
    pub fn set_bounds(&mut self, bounds: Rect) {
        let mut delegate = self.delegate.as_deref_mut();
        let mut width_for = |index: usize| {
            match delegate.as_deref_mut().and_then(|d| d.width_for_item(index)) {
                Some(width) => width,
                None => panic!(
                    "tab cell {index} has no width: set cell_width or provide a width source"
                ),
            }
        };
        self.layout.set_bounds(bounds, Some(&mut width_for));
    }

    // ── Selection ───────────────────────────────────────────────────────

    /// The user tapped cell `index`. Only the delegate is told; the owner
    /// decides whether the selection changes.
    pub fn select_item(&mut self, index: usize) {
        if index >= self.layout.count() {
            return;
        }
        if let Some(delegate) = self.delegate.as_deref_mut() {
            delegate.did_select_item(index);
        }
    }

    /// Move the selection from `from` to `to`.
    pub fn scroll_to_item(
        &mut self,
        from: Option<usize>,
        to: usize,
        animate: bool,
    ) -> Option<BarTransition> {
        let step = self.layout.scroll_to_item(from, to, animate)?;
        if let Some(delegate) = self.delegate.as_deref_mut() {
            if delegate.overrides_cell_transitions() {
                delegate.transition(from, to, animate);
            }
        }
        Some(step)
    }

    /// Drag step between `from` and `to`.
    pub fn scroll_to_item_progress(
        &mut self,
        from: usize,
        to: usize,
        progress: f64,
    ) -> Option<BarTransition> {
        let step = self.layout.scroll_to_item_progress(from, to, progress)?;
        if let Some(delegate) = self.delegate.as_deref_mut() {
            if delegate.overrides_cell_transitions() {
                delegate.transition_progress(from, to, progress);
            }
        }
        Some(step)
    }
}
