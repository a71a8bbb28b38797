//! # pixex-core
//!
//! Core types for pixel buffer exchange.
//!
//! This crate provides the foundational types used by the pixex engine:
//!
//! - [`Quantum`] - The canonical per-channel precision (16-bit by default)
//! - [`StorageType`] - On-the-wire numeric representation of channel values
//! - [`Channel`], [`ChannelMapping`] - Channel symbols and ordered mappings
//! - [`PixelGrid`] - Owned, row-major canonical pixel grid
//!
//! ## Design Philosophy
//!
//! A buffer of bytes only becomes pixels once you know three things: the
//! geometry (width × height), the channel order (the mapping), and the
//! element representation (the storage type). This crate holds the types
//! that express those three facts plus the canonical grid they resolve to;
//! the conversion itself lives in the `pixex` crate.
//!
//! ## Quantum Depth
//!
//! The canonical precision is fixed at build time. The default is a 16-bit
//! quantum; enable the `q8` feature for an 8-bit quantum:
//!
//! ```toml
//! pixex-core = { version = "0.1", features = ["q8"] }
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of pixex and has no internal dependencies:
//!
//! ```text
//! pixex-core (this crate)
//!    ^
//!    |
//!    +-- pixex (buffer descriptors, import/export engine)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod grid;
pub mod mapping;

// Re-exports for convenience
pub use error::*;
pub use format::*;
pub use grid::*;
pub use mapping::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixex_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{Quantum, StorageType, QUANTUM_DEPTH, QUANTUM_MAX};
    pub use crate::grid::PixelGrid;
    pub use crate::mapping::{Channel, ChannelMapping};
}
