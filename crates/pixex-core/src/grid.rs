//! The canonical pixel grid.
//!
//! [`PixelGrid`] is the in-memory destination of an import and the source
//! of an export: a rectangular array of pixels in the quantum domain,
//! independent of any buffer layout it was decoded from.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, with channels
//! interleaved per the grid's layout:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  ← Row 0
//!         [R G B A R G B A ...]  ← Row 1
//!         ...
//! ```
//!
//! # Ownership
//!
//! A grid exclusively owns its data. Imports copy out of the source
//! buffer; nothing aliases. Sharing one mutable grid across threads is the
//! caller's concern - the grid itself takes no locks.
//!
//! # Usage
//!
//! ```rust
//! use pixex_core::{ChannelMapping, PixelGrid, QUANTUM_MAX};
//!
//! let mut grid = PixelGrid::new(4, 2, ChannelMapping::rgba()).unwrap();
//! grid.set_pixel(1, 0, &[0, QUANTUM_MAX, 0, QUANTUM_MAX]).unwrap();
//! assert_eq!(grid.pixel(1, 0)[1], QUANTUM_MAX);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::mapping::ChannelMapping`] - Channel layout
//! - [`crate::error::Error`] - Error types
//! - [`rayon`] - Parallel row iteration
//!
//! # Used By
//!
//! - `pixex` - Import/export engine

use crate::error::{Error, Result};
use crate::format::Quantum;
use crate::mapping::{Channel, ChannelMapping};
use rayon::prelude::*;

/// Owned, row-major pixel grid in the quantum domain.
///
/// The channel layout is a runtime property (imports decide it from their
/// mapping), unlike a compile-time channel count. The layout must be
/// non-empty, duplicate-free, and must not contain [`Channel::Pad`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Pixel data, `width * height * layout.len()` quanta
    data: Vec<Quantum>,
    /// Grid width in pixels
    width: u32,
    /// Grid height in pixels
    height: u32,
    /// Channel layout
    layout: ChannelMapping,
}

impl PixelGrid {
    /// Creates a new grid filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if the layout is empty, contains a
    /// duplicate channel, or contains [`Channel::Pad`];
    /// [`Error::InvalidDimensions`] if either dimension is zero or the
    /// buffer size would overflow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixex_core::{ChannelMapping, PixelGrid};
    ///
    /// let grid = PixelGrid::new(1920, 1080, ChannelMapping::rgb()).unwrap();
    /// assert_eq!(grid.dimensions(), (1920, 1080));
    /// assert_eq!(grid.channels(), 3);
    /// ```
    pub fn new(width: u32, height: u32, layout: ChannelMapping) -> Result<Self> {
        let len = Self::checked_len(width, height, &layout)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
            layout,
        })
    }

    /// Creates a grid filled with a background pixel.
    ///
    /// This is how callers choose the default value of channels a
    /// subsequent subset import will not touch - e.g. an opaque
    /// background before importing only "R".
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus [`Error::ChannelMismatch`] when the
    /// background pixel length differs from the layout length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixex_core::{ChannelMapping, PixelGrid, QUANTUM_MAX};
    ///
    /// // Opaque black
    /// let grid =
    ///     PixelGrid::filled(8, 8, ChannelMapping::rgba(), &[0, 0, 0, QUANTUM_MAX]).unwrap();
    /// assert_eq!(grid.pixel(3, 3)[3], QUANTUM_MAX);
    /// ```
    pub fn filled(
        width: u32,
        height: u32,
        layout: ChannelMapping,
        background: &[Quantum],
    ) -> Result<Self> {
        if background.len() != layout.len() {
            return Err(Error::channel_mismatch(layout.len(), background.len()));
        }
        let len = Self::checked_len(width, height, &layout)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(background);
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Creates a grid from existing quantum data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` does not hold exactly
    /// `width * height * layout.len()` quanta, plus the layout errors of
    /// [`new`](Self::new).
    pub fn from_data(
        width: u32,
        height: u32,
        layout: ChannelMapping,
        data: Vec<Quantum>,
    ) -> Result<Self> {
        let expected = Self::checked_len(width, height, &layout)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} quanta, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Validates layout and dimensions, returning the buffer length.
    fn checked_len(width: u32, height: u32, layout: &ChannelMapping) -> Result<usize> {
        if layout.is_empty() {
            return Err(Error::invalid_layout("layout is empty"));
        }
        if layout.position(Channel::Pad).is_some() {
            return Err(Error::invalid_layout("layout contains a pad channel"));
        }
        if layout.has_duplicates() {
            return Err(Error::invalid_layout("layout contains a duplicate channel"));
        }
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero dimension"));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(layout.len()))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflow"))
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grid dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.len()
    }

    /// The channel layout.
    #[inline]
    pub fn layout(&self) -> &ChannelMapping {
        &self.layout
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the grid holds no pixels. Always `false` for a constructed
    /// grid, since zero dimensions are rejected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Slot of a channel within each pixel, if the layout carries it.
    #[inline]
    pub fn channel_index(&self, channel: Channel) -> Option<usize> {
        self.layout.position(channel)
    }

    /// A reference to the raw quantum data.
    #[inline]
    pub fn data(&self) -> &[Quantum] {
        &self.data
    }

    /// A mutable reference to the raw quantum data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Quantum] {
        &mut self.data
    }

    /// Flat index of the first channel of pixel (x, y).
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.layout.len()
    }

    /// The pixel at (x, y) as a channel slice.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds. Use [`get_pixel`](Self::get_pixel)
    /// for a checked variant.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[Quantum] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        &self.data[offset..offset + self.layout.len()]
    }

    /// The pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[Quantum]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// A mutable view of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [Quantum] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let channels = self.layout.len();
        &mut self.data[offset..offset + channels]
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the grid and
    /// [`Error::ChannelMismatch`] when the value length differs from the
    /// layout length.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[Quantum]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        if pixel.len() != self.layout.len() {
            return Err(Error::channel_mismatch(self.layout.len(), pixel.len()));
        }
        let offset = self.pixel_offset(x, y);
        self.data[offset..offset + pixel.len()].copy_from_slice(pixel);
        Ok(())
    }

    /// A row of pixels as a flat channel slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Quantum] {
        debug_assert!(y < self.height, "row out of bounds");
        let row_len = self.width as usize * self.layout.len();
        let start = y as usize * row_len;
        &self.data[start..start + row_len]
    }

    /// A mutable row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Quantum] {
        debug_assert!(y < self.height, "row out of bounds");
        let row_len = self.width as usize * self.layout.len();
        let start = y as usize * row_len;
        &mut self.data[start..start + row_len]
    }

    /// Iterates over all pixels with their coordinates, row-major.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixex_core::{ChannelMapping, PixelGrid};
    ///
    /// let grid = PixelGrid::new(2, 2, ChannelMapping::rgb()).unwrap();
    /// for (x, y, pixel) in grid.pixels() {
    ///     assert_eq!(pixel, [0, 0, 0]);
    /// }
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, &[Quantum])> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Fills the entire grid with a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] when the value length differs
    /// from the layout length.
    pub fn fill(&mut self, pixel: &[Quantum]) -> Result<()> {
        if pixel.len() != self.layout.len() {
            return Err(Error::channel_mismatch(self.layout.len(), pixel.len()));
        }
        for chunk in self.data.chunks_exact_mut(pixel.len()) {
            chunk.copy_from_slice(pixel);
        }
        Ok(())
    }

    /// Checks that a region lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] when `(x, y, w, h)` extends past
    /// the grid bounds.
    pub fn check_region(&self, x: u32, y: u32, w: u32, h: u32) -> Result<()> {
        let fits = (x as u64 + w as u64) <= self.width as u64
            && (y as u64 + h as u64) <= self.height as u64;
        if fits {
            Ok(())
        } else {
            Err(Error::invalid_region(x, y, w, h, self.width, self.height))
        }
    }

    /// Parallel iterator over rows, top to bottom.
    pub fn par_rows(&self) -> impl IndexedParallelIterator<Item = &[Quantum]> {
        let row_len = self.width as usize * self.layout.len();
        self.data.par_chunks_exact(row_len)
    }

    /// Parallel iterator over mutable rows, top to bottom.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [Quantum]> {
        let row_len = self.width as usize * self.layout.len();
        self.data.par_chunks_exact_mut(row_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::QUANTUM_MAX;

    #[test]
    fn test_new_zero_filled() {
        let grid = PixelGrid::new(3, 2, ChannelMapping::rgba()).unwrap();
        assert_eq!(grid.data().len(), 3 * 2 * 4);
        assert!(grid.data().iter().all(|&q| q == 0));
    }

    #[test]
    fn test_new_rejects_bad_layout() {
        assert!(matches!(
            PixelGrid::new(1, 1, ChannelMapping::parse("").unwrap()),
            Err(Error::InvalidLayout { .. })
        ));
        assert!(matches!(
            PixelGrid::new(1, 1, ChannelMapping::parse("RGBP").unwrap()),
            Err(Error::InvalidLayout { .. })
        ));
        assert!(matches!(
            PixelGrid::new(1, 1, ChannelMapping::parse("RRG").unwrap()),
            Err(Error::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            PixelGrid::new(0, 10, ChannelMapping::rgb()),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PixelGrid::new(10, 0, ChannelMapping::rgb()),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_filled_background() {
        let bg = [1, 2, 3, QUANTUM_MAX];
        let grid = PixelGrid::filled(2, 2, ChannelMapping::rgba(), &bg).unwrap();
        for (_, _, pixel) in grid.pixels() {
            assert_eq!(pixel, bg);
        }
    }

    #[test]
    fn test_filled_channel_mismatch() {
        let err = PixelGrid::filled(2, 2, ChannelMapping::rgba(), &[0, 0, 0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ChannelMismatch {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn test_from_data_length_check() {
        let err =
            PixelGrid::from_data(2, 2, ChannelMapping::rgb(), vec![0; 11]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));

        let grid = PixelGrid::from_data(2, 2, ChannelMapping::rgb(), vec![7; 12]).unwrap();
        assert_eq!(grid.pixel(1, 1), [7, 7, 7]);
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut grid = PixelGrid::new(4, 3, ChannelMapping::rgb()).unwrap();
        grid.set_pixel(2, 1, &[10, 20, 30]).unwrap();
        assert_eq!(grid.pixel(2, 1), [10, 20, 30]);
        assert_eq!(grid.get_pixel(4, 0), None);
        assert!(matches!(
            grid.set_pixel(4, 0, &[0, 0, 0]),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.set_pixel(0, 0, &[0, 0]),
            Err(Error::ChannelMismatch { .. })
        ));
    }

    #[test]
    fn test_row_access() {
        let mut grid = PixelGrid::new(2, 2, ChannelMapping::red()).unwrap();
        grid.row_mut(1).copy_from_slice(&[5, 6]);
        assert_eq!(grid.row(0), [0, 0]);
        assert_eq!(grid.row(1), [5, 6]);
        assert_eq!(grid.pixel(1, 1), [6]);
    }

    #[test]
    fn test_channel_index() {
        let grid = PixelGrid::new(1, 1, ChannelMapping::bgra()).unwrap();
        assert_eq!(grid.channel_index(Channel::Red), Some(2));
        assert_eq!(grid.channel_index(Channel::Alpha), Some(3));
        assert_eq!(grid.channel_index(Channel::Cyan), None);
    }

    #[test]
    fn test_check_region() {
        let grid = PixelGrid::new(4, 4, ChannelMapping::rgb()).unwrap();
        assert!(grid.check_region(0, 0, 4, 4).is_ok());
        assert!(grid.check_region(3, 3, 1, 1).is_ok());
        assert!(matches!(
            grid.check_region(3, 3, 2, 1),
            Err(Error::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_par_rows() {
        let mut grid = PixelGrid::new(8, 8, ChannelMapping::rgb()).unwrap();
        grid.par_rows_mut().enumerate().for_each(|(y, row)| {
            row.fill(y as Quantum);
        });
        let sums: Vec<u64> = grid
            .par_rows()
            .map(|row| row.iter().map(|&q| q as u64).sum())
            .collect();
        assert_eq!(sums[0], 0);
        assert_eq!(sums[7], 7 * 8 * 3);
    }
}
