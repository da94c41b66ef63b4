use std::collections::TryReserveError;

use ndarray::ShapeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Growing the entry storage failed. The matrix that reported it has
    /// already been cleared.
    #[error("failed to grow entry storage: {0}")]
    Alloc(#[from] TryReserveError),
    #[error("logical extent {rows} x {columns} does not fit in memory")]
    Extent { rows: usize, columns: usize },
    #[error("dense shape error: {0}")]
    Shape(#[from] ShapeError),
}
