#![forbid(unsafe_code)]

//! Core: geometry, index ranges, and colours for the tabpager engines.
//!
//! # Role in tabpager
//! `tabpager-core` is the shared vocabulary. The pager engine
//! (`tabpager-layout`) speaks in page frames and index ranges, the bar engine
//! (`tabpager-bar`) speaks in cell frames and colours, and the facade
//! (`tabpager`) forwards both to the host. None of these types know about
//! scrolling or items.
//!
//! # Primary types
//! - [`Rect`], [`Size`], [`Insets`]: floating-point layout geometry.
//! - [`IndexRange`]: half-open `[start, end)` interval of page indices.
//! - [`Rgba`]: normalized colour with linear interpolation.

pub mod color;
pub mod geometry;
pub mod range;

pub use color::Rgba;
pub use geometry::{Insets, Rect, Size};
pub use range::IndexRange;
