//! Error types for pixex-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the core types:
//! - Grid allocation and bounds checking
//! - Channel layout validation
//! - Channel mapping parsing
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::grid::PixelGrid`] - Allocation and access checks
//! - [`crate::mapping::ChannelMapping`] - Symbol parsing
//! - `pixex` - Bridged into `ExchangeError` via `#[from]`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core pixel types.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds), [`InvalidRegion`](Error::InvalidRegion)
/// - **Layout errors**: [`InvalidLayout`](Error::InvalidLayout), [`ChannelMismatch`](Error::ChannelMismatch)
/// - **Dimension errors**: [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Mapping errors**: [`UnknownChannel`](Error::UnknownChannel)
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside grid bounds.
    #[error("pixel ({x}, {y}) out of bounds for grid {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Grid width
        width: u32,
        /// Grid height
        height: u32,
    },

    /// A region extends beyond grid bounds.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds grid bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Grid width
        width: u32,
        /// Grid height
        height: u32,
    },

    /// Invalid grid dimensions.
    ///
    /// Returned when width or height is zero, or dimensions would overflow
    /// the buffer size calculation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Channel layout is not usable for a grid.
    ///
    /// A grid layout must be non-empty, free of duplicates, and must not
    /// contain the pad channel.
    #[error("invalid channel layout: {reason}")]
    InvalidLayout {
        /// Reason why the layout is invalid
        reason: String,
    },

    /// Channel count mismatch between a pixel value and the grid layout.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: usize,
        /// Actual channel count
        got: usize,
    },

    /// A mapping string contains a symbol that is not a known channel.
    #[error("unknown channel symbol '{symbol}' in mapping")]
    UnknownChannel {
        /// The offending symbol
        symbol: char,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(rx: u32, ry: u32, rw: u32, rh: u32, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx,
            ry,
            rw,
            rh,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidLayout`] error.
    #[inline]
    pub fn invalid_layout(reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: usize, got: usize) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidRegion { .. })
    }

    /// Returns `true` if this is a layout or mapping configuration error.
    #[inline]
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLayout { .. } | Self::UnknownChannel { .. } | Self::ChannelMismatch { .. }
        )
    }
}
