//! Buffer descriptors and their validation.
//!
//! A [`BufferDescriptor`] states the contract under which a flat buffer is
//! interpreted: geometry (width × height, plus an origin when targeting a
//! region of an existing grid), channel mapping, and storage type.
//!
//! Validation is fail-fast and happens before any element is decoded:
//! configuration problems (empty mapping, undefined storage type,
//! storage/buffer kind mismatch) are reported first, then range problems
//! (offsets, buffer length) against the concrete buffer.

use crate::buffer::SampleBuffer;
use crate::error::{ExchangeError, Result};
use pixex_core::{ChannelMapping, Error as CoreError, StorageType};

/// Describes how a flat buffer maps onto a 2D pixel region.
///
/// # Region Origin
///
/// `x`/`y` locate the target region when importing into or exporting from
/// an existing grid. A fresh grid produced by [`import`](crate::import)
/// covers exactly `width × height`, so the origin is meaningful only for
/// [`import_into`](crate::import_into) and the export operations.
///
/// # Example
///
/// ```rust
/// use pixex::BufferDescriptor;
/// use pixex_core::{ChannelMapping, StorageType};
///
/// let settings =
///     BufferDescriptor::new(640, 480, StorageType::Char, ChannelMapping::rgb());
/// assert_eq!(settings.pixel_elements(), Some(640 * 480 * 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDescriptor {
    /// Region X origin.
    pub x: u32,
    /// Region Y origin.
    pub y: u32,
    /// Region width in pixels.
    pub width: u32,
    /// Region height in pixels.
    pub height: u32,
    /// In-buffer element representation.
    pub storage: StorageType,
    /// Ordered channel mapping.
    pub mapping: ChannelMapping,
}

impl BufferDescriptor {
    /// Creates a descriptor with the region origin at (0, 0).
    pub fn new(width: u32, height: u32, storage: StorageType, mapping: ChannelMapping) -> Self {
        Self::with_region(0, 0, width, height, storage, mapping)
    }

    /// Creates a descriptor targeting the region at (x, y).
    pub fn with_region(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        storage: StorageType,
        mapping: ChannelMapping,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            storage,
            mapping,
        }
    }

    /// Total number of buffer elements the region occupies
    /// (`width * height * mapping.len()`), or `None` on overflow.
    pub fn pixel_elements(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.mapping.len())
    }

    /// The minimum buffer length this descriptor requires, in the units of
    /// the given buffer: bytes for byte buffers, elements for quantum
    /// buffers.
    pub fn expected_len(&self, buffer: &SampleBuffer<'_>) -> Result<usize> {
        let elements = self.pixel_elements().ok_or_else(|| {
            CoreError::invalid_dimensions(self.width, self.height, "buffer size overflow")
        })?;
        match buffer {
            SampleBuffer::Bytes(_) => elements
                .checked_mul(self.storage.element_size())
                .ok_or_else(|| {
                    CoreError::invalid_dimensions(
                        self.width,
                        self.height,
                        "buffer size overflow",
                    )
                    .into()
                }),
            SampleBuffer::Quanta(_) => Ok(elements),
        }
    }

    /// Validates this descriptor against a buffer, starting at offset 0.
    ///
    /// # Errors
    ///
    /// Configuration errors first ([`ExchangeError::MappingNotDefined`],
    /// [`ExchangeError::UndefinedStorageType`],
    /// [`ExchangeError::StorageNotQuantum`]), then dimension and length
    /// checks ([`ExchangeError::BufferTooSmall`]).
    pub fn validate(&self, buffer: &SampleBuffer<'_>) -> Result<()> {
        self.validate_at(buffer, 0)
    }

    /// Validates this descriptor against a buffer read from `offset`.
    ///
    /// The offset is in buffer units and signed, so that callers doing
    /// their own offset arithmetic get a [`ExchangeError::NegativeOffset`]
    /// instead of a wrapped value. The length requirement includes the
    /// offset: a buffer of length 2 with offset 1 and an expected size of
    /// 3 reports "length is 2 but should be at least 4".
    pub fn validate_at(&self, buffer: &SampleBuffer<'_>, offset: i64) -> Result<()> {
        if self.mapping.is_empty() {
            return Err(ExchangeError::MappingNotDefined);
        }
        if !self.storage.is_defined() {
            return Err(ExchangeError::UndefinedStorageType);
        }
        if buffer.is_quanta() && self.storage != StorageType::Quantum {
            return Err(ExchangeError::StorageNotQuantum {
                actual: self.storage,
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(
                CoreError::invalid_dimensions(self.width, self.height, "zero dimension").into(),
            );
        }
        if offset < 0 {
            return Err(ExchangeError::NegativeOffset { offset });
        }
        let offset = offset as usize;
        if offset >= buffer.len() {
            return Err(ExchangeError::OffsetExceedsLength {
                offset,
                length: buffer.len(),
            });
        }
        let required = offset
            .checked_add(self.expected_len(buffer)?)
            .ok_or_else(|| {
                CoreError::invalid_dimensions(self.width, self.height, "buffer size overflow")
            })?;
        if buffer.len() < required {
            return Err(ExchangeError::BufferTooSmall {
                actual: buffer.len(),
                required,
            });
        }
        Ok(())
    }
}
