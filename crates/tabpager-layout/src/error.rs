#![forbid(unsafe_code)]

//! Configuration errors.

use thiserror::Error;

/// Rejected [`PagerConfig`](crate::PagerConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("index change threshold must lie in 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("cache capacity must be at least 1")]
    ZeroCacheCapacity,
}
