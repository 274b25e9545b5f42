#![forbid(unsafe_code)]

use tabpager_bar::BarConfigError;
use tabpager_layout::ConfigError;
use thiserror::Error;

/// Configuration rejected by one of the engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("pager config: {0}")]
    Pager(#[from] ConfigError),
    #[error("bar config: {0}")]
    Bar(#[from] BarConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
