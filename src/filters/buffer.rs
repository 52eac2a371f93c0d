//! Conversion between flat interleaved byte buffers and image arrays.
//!
//! Flat buffers are row-major with channels interleaved, the layout produced
//! by image decoders and expected by canvases and encoders:
//! `index = (row * cols + col) * channels + channel`.

use ndarray::{s, Array3, ArrayView3};

use crate::error::{FilterError, Result};

/// Wrap an interleaved buffer as a `(rows, cols, channels)` image.
///
/// # Errors
/// `FilterError::BufferLength` if `data.len() != rows * cols * channels`.
pub fn from_interleaved(
    data: Vec<u8>,
    rows: usize,
    cols: usize,
    channels: usize,
) -> Result<Array3<u8>> {
    let len = data.len();
    if len != rows * cols * channels {
        return Err(FilterError::BufferLength {
            len,
            rows,
            cols,
            channels,
        });
    }
    Array3::from_shape_vec((rows, cols, channels), data).map_err(|_| FilterError::BufferLength {
        len,
        rows,
        cols,
        channels,
    })
}

/// Flatten an image into an interleaved buffer.
pub fn into_interleaved(image: Array3<u8>) -> Vec<u8> {
    if !image.is_standard_layout() {
        return image.iter().copied().collect();
    }

    let len = image.len();
    match image.into_raw_vec_and_offset() {
        (data, Some(0)) if data.len() == len => data,
        (data, Some(offset)) => data[offset..offset + len].to_vec(),
        (_, None) => Vec::new(),
    }
}

/// Place `left` and `right` next to each other on one canvas.
///
/// Both images must have the same shape.
pub fn side_by_side(left: ArrayView3<u8>, right: ArrayView3<u8>) -> Result<Array3<u8>> {
    if left.dim() != right.dim() {
        return Err(FilterError::ShapeMismatch {
            src: left.dim(),
            dst: right.dim(),
        });
    }

    let (rows, cols, channels) = left.dim();
    let mut canvas = Array3::<u8>::zeros((rows, cols * 2, channels));
    canvas.slice_mut(s![.., ..cols, ..]).assign(&left);
    canvas.slice_mut(s![.., cols.., ..]).assign(&right);

    Ok(canvas)
}
