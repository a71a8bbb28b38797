//! Error types for exchange operations.
//!
//! Validation failures fall into two groups:
//!
//! - **Configuration errors** - the descriptor is internally invalid
//!   (empty mapping, undefined storage type, storage/buffer kind
//!   mismatch, unusable channels). These do not depend on the buffer.
//! - **Range errors** - the descriptor is inconsistent with the *given*
//!   buffer or grid (negative offset, offset past the end, buffer too
//!   small, region outside the grid).
//!
//! All failures are detected synchronously, before any data is read or
//! written; there is no degraded mode and nothing to retry.

use pixex_core::{Channel, StorageType};
use thiserror::Error;

/// Result type alias using [`ExchangeError`] as the error type.
pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Errors that can occur during buffer import/export.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// A buffer argument is present but zero-length.
    #[error("value cannot be empty: {param}")]
    EmptyBuffer {
        /// Name of the offending parameter
        param: &'static str,
    },

    /// The descriptor's mapping holds no channels.
    #[error("pixel storage mapping should be defined")]
    MappingNotDefined,

    /// The descriptor's storage type is [`StorageType::Undefined`].
    #[error("storage type should not be undefined")]
    UndefinedStorageType,

    /// A quantum buffer was combined with a non-quantum storage type.
    #[error("storage type should be quantum, not {actual}")]
    StorageNotQuantum {
        /// The storage type the descriptor carried
        actual: StorageType,
    },

    /// A channel occurs more than once in a mapping that allocates a grid.
    #[error("channel '{channel}' occurs more than once in the mapping")]
    DuplicateChannel {
        /// The repeated channel
        channel: Channel,
    },

    /// A mapped channel does not exist in the target/source grid.
    #[error("channel '{channel}' is not present in the grid layout")]
    ChannelNotInGrid {
        /// The missing channel
        channel: Channel,
    },

    /// A negative buffer offset was supplied.
    #[error("the offset should be positive, got {offset}")]
    NegativeOffset {
        /// The supplied offset
        offset: i64,
    },

    /// The offset points past the end of the buffer.
    #[error("the offset should not exceed the length of the buffer ({offset} > {length})")]
    OffsetExceedsLength {
        /// The supplied offset
        offset: usize,
        /// The buffer length
        length: usize,
    },

    /// The buffer is too small for the requested geometry.
    ///
    /// Lengths are in buffer units: bytes for byte buffers, elements for
    /// quantum buffers. `required` includes the offset, if any.
    #[error("the data length is {actual} but should be at least {required}")]
    BufferTooSmall {
        /// Actual buffer length
        actual: usize,
        /// Minimum required length
        required: usize,
    },

    /// An error surfaced from the core types (bounds, layout, mapping).
    #[error(transparent)]
    Core(#[from] pixex_core::Error),
}

impl ExchangeError {
    /// Returns `true` for errors caused by an internally invalid
    /// descriptor, independent of any buffer.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::MappingNotDefined
            | Self::UndefinedStorageType
            | Self::StorageNotQuantum { .. }
            | Self::DuplicateChannel { .. }
            | Self::ChannelNotInGrid { .. } => true,
            Self::Core(err) => err.is_layout_error(),
            _ => false,
        }
    }

    /// Returns `true` for errors caused by a descriptor that is
    /// inconsistent with the supplied buffer or grid.
    pub fn is_range(&self) -> bool {
        match self {
            Self::NegativeOffset { .. }
            | Self::OffsetExceedsLength { .. }
            | Self::BufferTooSmall { .. } => true,
            Self::Core(err) => err.is_bounds_error(),
            _ => false,
        }
    }
}
