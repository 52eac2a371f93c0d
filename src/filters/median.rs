//! Median filter for 8-bit images.
//!
//! Each interior pixel is replaced, per channel, by the median of the
//! `kernel_size x kernel_size` window centered on it. Removes impulse
//! (salt-and-pepper) noise while keeping edges sharp.
//!
//! ## Supported Formats
//!
//! Any channel count is accepted, shape (height, width, channels). Channels
//! are filtered independently, alpha included.
//!
//! ## Borders
//!
//! Only pixels whose whole window lies inside the image are written. The
//! outer `kernel_size / 2` rows and columns of the destination keep whatever
//! they held before the call.

use ndarray::{s, Array3, ArrayView3, ArrayViewMut2, ArrayViewMut3, Axis};
use rayon::prelude::*;

use super::kernel::Kernel;
use crate::error::{FilterError, Result};

// ============================================================================
// Filter configuration
// ============================================================================

/// Median filter with a fixed window size.
///
/// ```
/// use median_filter::filters::median::MedianFilter;
/// use ndarray::Array3;
///
/// let src = Array3::<u8>::from_elem((8, 8, 3), 42);
/// let mut dst = Array3::<u8>::zeros(src.dim());
///
/// MedianFilter::new(3)?.apply(src.view(), dst.view_mut())?;
/// assert_eq!(dst[[4, 4, 1]], 42);
/// # Ok::<(), median_filter::error::FilterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedianFilter {
    kernel: Kernel,
    parallel: bool,
}

impl MedianFilter {
    /// Create a filter with the given odd window size.
    ///
    /// Rows are processed on the rayon thread pool unless disabled with
    /// [`MedianFilter::parallel`].
    ///
    /// # Errors
    /// `FilterError::InvalidKernelSize` if `kernel_size` is zero or even.
    pub fn new(kernel_size: usize) -> Result<Self> {
        Ok(MedianFilter {
            kernel: Kernel::new(kernel_size)?,
            parallel: true,
        })
    }

    /// Enable or disable row-parallel execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Filter `src` into `dst`.
    ///
    /// # Arguments
    /// * `src` - Source image (height, width, channels), read only
    /// * `dst` - Destination of identical shape; only interior pixels are written
    ///
    /// # Errors
    /// `FilterError::ShapeMismatch` if the shapes differ. Nothing is written
    /// in that case.
    ///
    /// A kernel larger than the image leaves `dst` unchanged and returns `Ok`.
    pub fn apply(&self, src: ArrayView3<u8>, mut dst: ArrayViewMut3<u8>) -> Result<()> {
        if src.dim() != dst.dim() {
            return Err(FilterError::ShapeMismatch {
                src: src.dim(),
                dst: dst.dim(),
            });
        }

        let (rows, cols, channels) = src.dim();
        if !self.kernel.fits(rows, cols) {
            log::debug!(
                "kernel {} exceeds {}x{} image, no interior pixels",
                self.kernel.size(),
                rows,
                cols
            );
            return Ok(());
        }

        log::trace!(
            "median filter {}x{}x{} kernel {} ({})",
            rows,
            cols,
            channels,
            self.kernel.size(),
            if self.parallel { "parallel" } else { "sequential" }
        );

        let kernel = self.kernel;
        let interior = kernel.interior(rows);

        if self.parallel {
            dst.axis_iter_mut(Axis(0))
                .into_par_iter()
                .enumerate()
                .filter(|(row, _)| interior.contains(row))
                .for_each_init(
                    || Vec::with_capacity(kernel.area()),
                    |window, (row, out)| filter_row(src, kernel, row, out, window),
                );
        } else {
            let mut window = Vec::with_capacity(kernel.area());
            for row in interior {
                filter_row(src, kernel, row, dst.index_axis_mut(Axis(0), row), &mut window);
            }
        }

        Ok(())
    }
}

// ============================================================================
// Per-row kernel
// ============================================================================

/// Fill the interior columns of one destination row.
///
/// `out` is row `row` of the destination, shape (width, channels).
fn filter_row(
    src: ArrayView3<u8>,
    kernel: Kernel,
    row: usize,
    mut out: ArrayViewMut2<u8>,
    window: &mut Vec<u8>,
) {
    let (_, cols, channels) = src.dim();
    let radius = kernel.radius();
    let rows_in_window = row - radius..=row + radius;

    for col in kernel.interior(cols) {
        for c in 0..channels {
            window.clear();
            window.extend(
                src.slice(s![rows_in_window.clone(), col - radius..=col + radius, c])
                    .iter()
                    .copied(),
            );
            out[[col, c]] = select_median(window, kernel.median_index());
        }
    }
}

/// Element of rank `index` in `values`, reordering `values` in place.
#[inline]
fn select_median(values: &mut [u8], index: usize) -> u8 {
    *values.select_nth_unstable(index).1
}

// ============================================================================
// Convenience entry points
// ============================================================================

/// Apply median filter into an existing buffer, single threaded.
///
/// # Arguments
/// * `src` - Image with any channel count (height, width, channels)
/// * `dst` - Destination of identical shape
/// * `kernel_size` - Window side length, positive and odd
pub fn median_u8_into(
    src: ArrayView3<u8>,
    dst: ArrayViewMut3<u8>,
    kernel_size: usize,
) -> Result<()> {
    MedianFilter::new(kernel_size)?.parallel(false).apply(src, dst)
}

/// Apply median filter into an existing buffer, rows spread over the rayon pool.
///
/// Output is identical to [`median_u8_into`].
pub fn median_u8_into_parallel(
    src: ArrayView3<u8>,
    dst: ArrayViewMut3<u8>,
    kernel_size: usize,
) -> Result<()> {
    MedianFilter::new(kernel_size)?.apply(src, dst)
}

/// Apply median filter - u8 version.
///
/// # Arguments
/// * `input` - Image with any channel count (height, width, channels)
/// * `kernel_size` - Window side length, positive and odd
///
/// # Returns
/// Filtered image of the same shape. Border pixels are zero.
pub fn median_u8(input: ArrayView3<u8>, kernel_size: usize) -> Result<Array3<u8>> {
    let filter = MedianFilter::new(kernel_size)?;
    let mut output = Array3::<u8>::zeros(input.dim());
    filter.apply(input, output.view_mut())?;
    Ok(output)
}
