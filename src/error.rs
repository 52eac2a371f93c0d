//! Error type shared by every filter entry point.
//!
//! All variants describe an invalid argument. They are raised before any
//! destination pixel is written, so a failed call leaves `dst` untouched.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("kernel size must be a positive odd integer, got {0}")]
    InvalidKernelSize(usize),

    #[error("destination shape {dst:?} does not match source shape {src:?}")]
    ShapeMismatch {
        src: (usize, usize, usize),
        dst: (usize, usize, usize),
    },

    #[error("buffer of length {len} cannot hold a {rows}x{cols}x{channels} image")]
    BufferLength {
        len: usize,
        rows: usize,
        cols: usize,
        channels: usize,
    },
}

#[cfg(feature = "python")]
impl From<FilterError> for pyo3::PyErr {
    fn from(err: FilterError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
