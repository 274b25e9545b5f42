#![forbid(unsafe_code)]

//! Configuration errors.

use thiserror::Error;

/// Rejected [`BarConfig`](crate::BarConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BarConfigError {
    #[error("{which} font size must be positive and finite, got {size}")]
    FontSize { which: &'static str, size: f64 },
    #[error("animation duration must be non-negative and finite, got {0}")]
    AnimationDuration(f64),
    #[error("cell spacing must be non-negative and finite, got {0}")]
    CellSpacing(f64),
}
