//! WebAssembly exports for the median filter.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Images cross the boundary as flat interleaved byte arrays
//! (length = width * height * channels), the layout of canvas `ImageData`.

use wasm_bindgen::prelude::*;

use crate::filters::buffer::{from_interleaved, into_interleaved};
use crate::filters::median::MedianFilter;

// ============================================================================
// Median Filter - u8 (8-bit)
// ============================================================================

/// Median-filter an interleaved u8 image.
///
/// Runs single threaded; wasm targets have no rayon pool by default.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Samples per pixel (4 for canvas RGBA)
/// * `kernel_size` - Odd window side length
///
/// # Returns
/// Flat array of the same length; border pixels are zero
#[wasm_bindgen]
pub fn median_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel_size: usize,
) -> Result<Vec<u8>, JsError> {
    let input = from_interleaved(data.to_vec(), height, width, channels)?;
    let mut output = ndarray::Array3::<u8>::zeros(input.dim());

    MedianFilter::new(kernel_size)?
        .parallel(false)
        .apply(input.view(), output.view_mut())?;

    Ok(into_interleaved(output))
}
