#![forbid(unsafe_code)]

//! Tab bar layout for tabpager.
//!
//! `tabpager-bar` lays tab cells out left to right, keeps one of them
//! selected, and computes the selection indicator's frame for both discrete
//! selections and continuous drags between two cells. It is pure geometry:
//! the host draws cells and the indicator from the frames and appearances
//! this crate produces.
//!
//! # Primary types
//! - [`BarLayout`]: the engine.
//! - [`BarConfig`]: indicator style and metrics, cell metrics, typography.
//! - [`BarStyle`]: indicator geometry family.
//! - [`CellAppearance`]: per-cell colour and scale.
//!
//! # Example
//!
//! ```
//! use tabpager_bar::{BarConfig, BarLayout, BarStyle};
//! use tabpager_core::Rect;
//!
//! let config = BarConfig::default().with_style(BarStyle::Progress).cell_width(44.0);
//! let mut bar = BarLayout::with_config(config).unwrap();
//! bar.reload(3, Rect::new(0.0, 0.0, 320.0, 40.0), None);
//!
//! let indicator = bar.indicator().unwrap();
//! assert_eq!(indicator.x, 6.0);
//! assert_eq!(indicator.width, 38.0);
//! ```

pub mod appearance;
pub mod config;
pub mod error;
pub mod flow;
pub mod indicator;
pub mod layout;
pub mod style;

pub use appearance::CellAppearance;
pub use config::BarConfig;
pub use error::BarConfigError;
pub use indicator::IndicatorParams;
pub use layout::{BarLayout, BarTransition};
pub use style::BarStyle;
