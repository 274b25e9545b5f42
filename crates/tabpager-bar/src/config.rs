#![forbid(unsafe_code)]

//! Bar tunables and per-style presets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tabpager_core::{Insets, Rgba};

use crate::error::BarConfigError;
use crate::indicator::IndicatorParams;
use crate::style::BarStyle;

/// Appearance and metrics of a tab bar.
///
/// Fields are public. Changing `style` through [`BarConfig::set_style`] or
/// [`BarConfig::with_style`] also applies that style's indicator preset;
/// assigning the field directly does not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarConfig {
    pub style: BarStyle,

    // Indicator.
    pub progress_height: f64,
    /// Fixed indicator width; `0.0` derives it from the cell and
    /// `progress_hor_edging`.
    pub progress_width: f64,
    pub progress_color: Rgba,
    /// Corner radius. For [`BarStyle::Cover`], `0.0` means half the height.
    pub progress_radius: f64,
    pub progress_border_width: f64,
    pub progress_border_color: Option<Rgba>,
    pub progress_hor_edging: f64,
    pub progress_ver_edging: f64,

    // Cells.
    /// Fixed text width of every cell; `0.0` asks the host for widths.
    pub cell_width: f64,
    pub cell_spacing: f64,
    /// Padding added on both sides of `cell_width`.
    pub cell_edging: f64,
    /// Overrides the derived section inset when non-zero.
    pub section_inset: Insets,
    /// Centre the cell run when it is narrower than the bar.
    pub adjust_content_cells_center: bool,
    /// Scroll the strip so the selected cell is centred.
    pub auto_scroll_item_to_center: bool,
    /// Inset of the cell strip inside the bar bounds.
    pub content_inset: Insets,

    // Typography.
    pub normal_font_size: f64,
    pub selected_font_size: f64,
    pub normal_text_color: Rgba,
    pub selected_text_color: Rgba,
    /// Interpolate cell scale and colour while dragging.
    pub text_color_progress_enabled: bool,
    /// Seconds.
    pub animate_duration: f64,
}

impl Default for BarConfig {
    fn default() -> Self {
        let mut config = Self {
            style: BarStyle::None,
            progress_height: 2.0,
            progress_width: 0.0,
            progress_color: Rgba::RED,
            progress_radius: 0.0,
            progress_border_width: 0.0,
            progress_border_color: None,
            progress_hor_edging: 6.0,
            progress_ver_edging: 0.0,
            cell_width: 0.0,
            cell_spacing: 2.0,
            cell_edging: 3.0,
            section_inset: Insets::ZERO,
            adjust_content_cells_center: false,
            auto_scroll_item_to_center: true,
            content_inset: Insets::ZERO,
            normal_font_size: 15.0,
            selected_font_size: 18.0,
            normal_text_color: Rgba::rgb8(51, 51, 51),
            selected_text_color: Rgba::RED,
            text_color_progress_enabled: true,
            animate_duration: 0.25,
        };
        config.set_style(BarStyle::default());
        config
    }
}

impl BarConfig {
    /// Switch style and apply its indicator preset.
    ///
    /// Setting the current style again changes nothing.
    pub fn set_style(&mut self, style: BarStyle) {
        if style == self.style {
            return;
        }
        match style {
            BarStyle::Progress => {
                self.progress_width = 0.0;
                self.progress_hor_edging = 6.0;
                self.progress_ver_edging = 0.0;
                self.progress_height = 2.0;
            }
            BarStyle::ProgressBounce | BarStyle::ProgressElastic => {
                self.progress_width = 30.0;
                self.progress_hor_edging = 0.0;
                self.progress_ver_edging = 0.0;
                self.progress_height = 2.0;
            }
            BarStyle::Cover => {
                self.progress_border_width = 0.0;
                self.progress_border_color = None;
                self.progress_width = 0.0;
                self.progress_hor_edging = -self.progress_height / 4.0;
                self.progress_ver_edging = 3.0;
            }
            BarStyle::None => {}
        }
        self.progress_radius = if style.is_cover() {
            0.0
        } else {
            self.progress_height / 2.0
        };
        self.style = style;
    }

    #[must_use]
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.set_style(style);
        self
    }

    #[must_use]
    pub fn progress_height(mut self, height: f64) -> Self {
        self.progress_height = height;
        self
    }

    #[must_use]
    pub fn progress_width(mut self, width: f64) -> Self {
        self.progress_width = width;
        self
    }

    #[must_use]
    pub fn progress_color(mut self, color: Rgba) -> Self {
        self.progress_color = color;
        self
    }

    #[must_use]
    pub fn progress_radius(mut self, radius: f64) -> Self {
        self.progress_radius = radius;
        self
    }

    #[must_use]
    pub fn progress_border(mut self, width: f64, color: Rgba) -> Self {
        self.progress_border_width = width;
        self.progress_border_color = Some(color);
        self
    }

    #[must_use]
    pub fn progress_hor_edging(mut self, edging: f64) -> Self {
        self.progress_hor_edging = edging;
        self
    }

    #[must_use]
    pub fn progress_ver_edging(mut self, edging: f64) -> Self {
        self.progress_ver_edging = edging;
        self
    }

    #[must_use]
    pub fn cell_width(mut self, width: f64) -> Self {
        self.cell_width = width;
        self
    }

    #[must_use]
    pub fn cell_spacing(mut self, spacing: f64) -> Self {
        self.cell_spacing = spacing;
        self
    }

    #[must_use]
    pub fn cell_edging(mut self, edging: f64) -> Self {
        self.cell_edging = edging;
        self
    }

    #[must_use]
    pub fn section_inset(mut self, inset: Insets) -> Self {
        self.section_inset = inset;
        self
    }

    #[must_use]
    pub fn adjust_content_cells_center(mut self, enabled: bool) -> Self {
        self.adjust_content_cells_center = enabled;
        self
    }

    #[must_use]
    pub fn auto_scroll_item_to_center(mut self, enabled: bool) -> Self {
        self.auto_scroll_item_to_center = enabled;
        self
    }

    #[must_use]
    pub fn content_inset(mut self, inset: Insets) -> Self {
        self.content_inset = inset;
        self
    }

    #[must_use]
    pub fn fonts(mut self, normal: f64, selected: f64) -> Self {
        self.normal_font_size = normal;
        self.selected_font_size = selected;
        self
    }

    #[must_use]
    pub fn text_colors(mut self, normal: Rgba, selected: Rgba) -> Self {
        self.normal_text_color = normal;
        self.selected_text_color = selected;
        self
    }

    #[must_use]
    pub fn text_color_progress_enabled(mut self, enabled: bool) -> Self {
        self.text_color_progress_enabled = enabled;
        self
    }

    #[must_use]
    pub fn animate_duration(mut self, seconds: f64) -> Self {
        self.animate_duration = seconds;
        self
    }

    /// Ratio of the normal to the selected font size.
    ///
    /// Unselected cells render with the selected font scaled by this ratio.
    #[inline]
    pub fn font_scale(&self) -> f64 {
        self.normal_font_size / self.selected_font_size
    }

    /// Section inset the flow layout uses when no centring applies.
    ///
    /// A non-zero override wins. Otherwise [`BarStyle::Cover`] derives
    /// `-progress_hor_edging + cell_spacing` on both sides so the highlight
    /// can overhang the first and last cells, unless centring is enabled.
    pub fn effective_section_inset(&self) -> Insets {
        if !self.section_inset.is_zero()
            || !self.style.is_cover()
            || self.adjust_content_cells_center
        {
            return self.section_inset;
        }
        let edging = -self.progress_hor_edging + self.cell_spacing;
        Insets::new(0.0, edging, 0.0, edging)
    }

    /// Indicator inputs for the pure geometry functions.
    pub fn indicator_params(&self) -> IndicatorParams {
        IndicatorParams {
            style: self.style,
            width: self.progress_width,
            height: self.progress_height,
            hor_edging: self.progress_hor_edging,
            ver_edging: self.progress_ver_edging,
            cell_spacing: self.cell_spacing,
        }
    }

    pub fn validate(&self) -> Result<(), BarConfigError> {
        for (which, size) in [
            ("normal", self.normal_font_size),
            ("selected", self.selected_font_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(BarConfigError::FontSize { which, size });
            }
        }
        if !(self.animate_duration.is_finite() && self.animate_duration >= 0.0) {
            return Err(BarConfigError::AnimationDuration(self.animate_duration));
        }
        if !(self.cell_spacing.is_finite() && self.cell_spacing >= 0.0) {
            return Err(BarConfigError::CellSpacing(self.cell_spacing));
        }
        Ok(())
    }
}
