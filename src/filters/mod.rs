//! Filter modules for image processing.
//!
//! ## Supported Formats
//!
//! Filters operate on 8-bit images stored as `ndarray` arrays:
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W, 1) | u8 | Single luminance channel, 0-255 |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//!
//! Channel count is inferred from input array dimensions. Any other count
//! works as well; every channel is filtered on its own.
//!
//! ## Architecture
//!
//! - **Explicit destination** - Callers own the output buffer; filters never
//!   write outside the interior region
//! - **Validated arguments** - Bad kernel sizes and shape mismatches are
//!   reported as [`FilterError`](crate::error::FilterError) before any work
//! - **Thread-safe** - Rows are spread over rayon workers when enabled

pub mod buffer;
pub mod kernel;
pub mod median;
