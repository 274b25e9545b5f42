#![forbid(unsafe_code)]

//! Cell highlight state.
//!
//! Every cell renders its title with the selected font. Unselected cells
//! are scaled down by the font ratio so they read at the normal size.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tabpager_core::Rgba;

use crate::config::BarConfig;

/// Colour and scale of one tab cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellAppearance {
    pub text_color: Rgba,
    /// Uniform scale applied to the cell.
    pub scale: f64,
}

impl CellAppearance {
    /// Appearance of the selected cell.
    pub fn selected(config: &BarConfig) -> Self {
        Self {
            text_color: config.selected_text_color,
            scale: 1.0,
        }
    }

    /// Appearance of an unselected cell.
    pub fn normal(config: &BarConfig) -> Self {
        Self {
            text_color: config.normal_text_color,
            scale: config.font_scale(),
        }
    }

    /// Font size the title is drawn at once the scale is applied.
    pub fn effective_font_size(&self, config: &BarConfig) -> f64 {
        config.selected_font_size * self.scale
    }

    /// Approximate equality for interpolated values.
    pub fn approx_eq(&self, other: &CellAppearance, epsilon: f64) -> bool {
        (self.scale - other.scale).abs() <= epsilon
            && self.text_color.approx_eq(&other.text_color, epsilon)
    }
}

/// Appearances of the departing and arriving cells `progress` of the way
/// through a drag.
///
/// `current` holds the two cells' present appearances; colours are only
/// interpolated when the normal and selected colours differ.
pub fn progress_appearances(
    config: &BarConfig,
    current: (CellAppearance, CellAppearance),
    progress: f64,
) -> (CellAppearance, CellAppearance) {
    let ratio = config.font_scale();
    let delta = (1.0 - ratio) * progress;
    let (mut from, mut to) = current;
    from.scale = 1.0 - delta;
    to.scale = ratio + delta;

    let normal = config.normal_text_color;
    let selected = config.selected_text_color;
    if normal != selected {
        from.text_color = selected.lerp(normal, progress);
        to.text_color = normal.lerp(selected, progress);
    }
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BarConfig {
        BarConfig::default()
            .fonts(15.0, 20.0)
            .text_colors(Rgba::BLACK, Rgba::WHITE)
    }

    #[test]
    fn selected_and_normal() {
        let config = config();
        assert_eq!(CellAppearance::selected(&config).scale, 1.0);
        assert_eq!(CellAppearance::normal(&config).scale, 0.75);
        assert_eq!(CellAppearance::normal(&config).effective_font_size(&config), 15.0);
        assert_eq!(CellAppearance::selected(&config).effective_font_size(&config), 20.0);
    }

    #[test]
    fn progress_endpoints_match_discrete_states() {
        let config = config();
        let selected = CellAppearance::selected(&config);
        let normal = CellAppearance::normal(&config);
        let current = (selected, normal);

        let (from, to) = progress_appearances(&config, current, 0.0);
        assert!(from.approx_eq(&selected, 1e-12));
        assert!(to.approx_eq(&normal, 1e-12));

        let (from, to) = progress_appearances(&config, current, 1.0);
        assert!(from.approx_eq(&normal, 1e-12));
        assert!(to.approx_eq(&selected, 1e-12));
    }

    #[test]
    fn halfway_blends_symmetrically() {
        let config = config();
        let current = (CellAppearance::selected(&config), CellAppearance::normal(&config));
        let (from, to) = progress_appearances(&config, current, 0.5);
        assert_eq!(from.scale, 0.875);
        assert_eq!(to.scale, 0.875);
        assert!(from.text_color.approx_eq(&Rgba::new(0.5, 0.5, 0.5, 1.0), 1e-12));
        assert_eq!(from.text_color, to.text_color);
    }

    #[test]
    fn equal_colours_are_left_alone() {
        let config = config().text_colors(Rgba::RED, Rgba::RED);
        let marker = CellAppearance {
            text_color: Rgba::BLACK,
            scale: 1.0,
        };
        let (from, _) = progress_appearances(&config, (marker, marker), 0.3);
        assert_eq!(from.text_color, Rgba::BLACK);
    }
}
