//! # pixex
//!
//! Pixel buffer exchange: bidirectional conversion between flat
//! byte/quantum buffers and canonical [`PixelGrid`]s.
//!
//! A caller describes a buffer with a [`BufferDescriptor`] - geometry,
//! channel [`mapping`](pixex_core::ChannelMapping) and
//! [`StorageType`](pixex_core::StorageType) - and hands it, together with
//! a [`SampleBuffer`] view of the raw data, to [`import`]. The reverse
//! path, [`export`], is symmetric.
//!
//! ## Quick Start
//!
//! ```rust
//! use pixex::{import, export, BufferDescriptor, SampleBuffer};
//! use pixex_core::{ChannelMapping, StorageType, QUANTUM_MAX};
//!
//! // A 1x2 RGBA image as normalized doubles: pixel (0,0) has alpha 1.0,
//! // pixel (0,1) has green 1.0.
//! let mut data = [0.0f64; 8];
//! data[3] = 1.0;
//! data[5] = 1.0;
//! let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_ne_bytes()).collect();
//!
//! let settings =
//!     BufferDescriptor::new(1, 2, StorageType::Float64, ChannelMapping::rgba());
//! let grid = import(&SampleBuffer::bytes(&bytes), &settings).unwrap();
//! assert_eq!(grid.pixel(0, 0), [0, 0, 0, QUANTUM_MAX]);
//! assert_eq!(grid.pixel(0, 1), [0, QUANTUM_MAX, 0, 0]);
//!
//! // Round-trip back out
//! let out = export(&grid, &settings).unwrap();
//! assert_eq!(out, bytes);
//! ```
//!
//! ## Failure Semantics
//!
//! Every operation validates its descriptor against the supplied buffer
//! before touching any data: configuration errors (empty mapping,
//! undefined storage type) and range errors (negative offset, offset past
//! the end, buffer too small) abort the call with no partial output.
//! See [`ExchangeError`].
//!
//! ## Crate Structure
//!
//! ```text
//! pixex-core (grid, mapping, storage types)
//!    ^
//!    |
//!    +-- pixex (this crate: descriptors, buffer views, import/export)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
mod convert;
pub mod descriptor;
pub mod error;
pub mod exchange;

// Re-exports for convenience
pub use buffer::SampleBuffer;
pub use descriptor::BufferDescriptor;
pub use error::{ExchangeError, Result};
pub use exchange::{export, export_into, export_quanta, import, import_at, import_into};

pub use pixex_core::PixelGrid;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::SampleBuffer;
    pub use crate::descriptor::BufferDescriptor;
    pub use crate::error::{ExchangeError, Result};
    pub use crate::exchange::{
        export, export_into, export_quanta, import, import_at, import_into,
    };
    pub use pixex_core::prelude::*;
}
