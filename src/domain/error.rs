use std::time::Duration;

use thiserror::Error;

use super::Cell;

/// Errors raised by the simulation core and its configuration.
///
/// Only construction-time variants are fatal. `OutOfBoundsCell` is reported
/// per cell and absorbed by the caller without aborting the surrounding edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("cell {cell} lies outside the {width}x{height} board")]
    OutOfBoundsCell { cell: Cell, width: i32, height: i32 },

    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("step interval must be non-zero, got {0:?}")]
    InvalidInterval(Duration),

    #[error("invalid color {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
