//! Median Filter
//!
//! Impulse-noise removal for 8-bit images, with Python bindings via PyO3
//! and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Images are `(height, width, channels)` arrays of `u8`:
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//!
//! ## Filter Architecture
//! The filter writes into a caller-provided destination of the same shape.
//! Only interior pixels (whose window lies fully inside the image) are
//! written; border pixels keep their previous value.

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FilterError, Result};
pub use filters::median::{median_u8, median_u8_into, median_u8_into_parallel, MedianFilter};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3, PyReadwriteArray3};
    use pyo3::prelude::*;

    use crate::filters::median::MedianFilter;

    // ========================================================================
    // Median Filter
    // ========================================================================

    /// Median-filter a u8 image, returning a new array.
    ///
    /// Border pixels of the result are zero.
    ///
    /// # Arguments
    /// * `image` - Input image (height, width, channels)
    /// * `kernel_size` - Odd window side length
    /// * `parallel` - Spread rows over worker threads
    #[pyfunction]
    #[pyo3(signature = (image, kernel_size=3, parallel=true))]
    pub fn median<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        kernel_size: usize,
        parallel: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        let filter = MedianFilter::new(kernel_size)?.parallel(parallel);
        let mut result = ndarray::Array3::<u8>::zeros(input.dim());
        filter.apply(input, result.view_mut())?;
        Ok(result.into_pyarray(py))
    }

    /// Median-filter `src` into the preallocated array `dst`.
    ///
    /// Only interior pixels of `dst` are written.
    #[pyfunction]
    #[pyo3(signature = (src, dst, kernel_size=3, parallel=true))]
    pub fn median_into<'py>(
        src: PyReadonlyArray3<'py, u8>,
        mut dst: PyReadwriteArray3<'py, u8>,
        kernel_size: usize,
        parallel: bool,
    ) -> PyResult<()> {
        MedianFilter::new(kernel_size)?
            .parallel(parallel)
            .apply(src.as_array(), dst.as_array_mut())?;
        Ok(())
    }

    #[pymodule]
    pub fn median_filter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(median, m)?)?;
        m.add_function(wrap_pyfunction!(median_into, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::median_filter;
