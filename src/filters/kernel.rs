//! Square filter window geometry.

use std::ops::Range;

use crate::error::{FilterError, Result};

/// Odd-sized square window centered on the pixel being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    size: usize,
}

impl Kernel {
    /// Validate `size` as a window side length.
    ///
    /// # Errors
    /// `FilterError::InvalidKernelSize` if `size` is zero or even.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(size));
        }
        Ok(Kernel { size })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Maximum offset from the center included in the window.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Number of samples in one window.
    #[inline]
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// Zero-based rank of the median among the ordered window samples.
    #[inline]
    pub fn median_index(&self) -> usize {
        self.area() / 2
    }

    /// Centers along an axis of length `extent` whose window stays in bounds.
    ///
    /// Empty when the kernel is larger than the axis.
    pub fn interior(&self, extent: usize) -> Range<usize> {
        if extent < self.size {
            return 0..0;
        }
        self.radius()..extent - self.radius()
    }

    /// True if at least one pixel of a `rows x cols` image is interior.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        rows >= self.size && cols >= self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_even_and_zero() {
        assert_eq!(Kernel::new(0), Err(FilterError::InvalidKernelSize(0)));
        assert_eq!(Kernel::new(4), Err(FilterError::InvalidKernelSize(4)));
        assert!(Kernel::new(1).is_ok());
        assert!(Kernel::new(7).is_ok());
    }

    #[test]
    fn test_geometry() {
        let kernel = Kernel::new(5).unwrap();
        assert_eq!(kernel.radius(), 2);
        assert_eq!(kernel.area(), 25);
        assert_eq!(kernel.median_index(), 12);

        let kernel = Kernel::new(3).unwrap();
        assert_eq!(kernel.median_index(), 4);
    }

    #[test]
    fn test_interior_ranges() {
        let kernel = Kernel::new(3).unwrap();
        assert_eq!(kernel.interior(5), 1..4);
        assert_eq!(kernel.interior(3), 1..2);
        assert!(kernel.interior(2).is_empty());

        let identity = Kernel::new(1).unwrap();
        assert_eq!(identity.interior(4), 0..4);
    }

    #[test]
    fn test_fits() {
        let kernel = Kernel::new(5).unwrap();
        assert!(kernel.fits(5, 5));
        assert!(!kernel.fits(4, 10));
        assert!(!kernel.fits(10, 4));
    }
}
