//! Import and export operations.
//!
//! Both directions are synchronous, stateless, single-pass conversions:
//! pixels are walked in row-major order and each mapped channel is
//! rescaled between the buffer's storage domain and the quantum domain.
//! Every validation failure is raised before the first element is read or
//! written, so a failed call never leaves partial output behind.
//!
//! # Operations
//!
//! | Operation | Direction | Target |
//! |-----------|-----------|--------|
//! | [`import`] / [`import_at`] | buffer → grid | fresh grid |
//! | [`import_into`] | buffer → grid | region of an existing grid |
//! | [`export`] / [`export_quanta`] | grid → buffer | fresh buffer |
//! | [`export_into`] | grid → buffer | region of a caller buffer |
//!
//! # Pad Channels
//!
//! A `P` symbol in the mapping occupies a buffer element but carries no
//! channel value: imports read and discard it, exports emit a zero
//! element. Grids never store pad channels.

use crate::buffer::SampleBuffer;
use crate::convert;
use crate::descriptor::BufferDescriptor;
use crate::error::{ExchangeError, Result};
use pixex_core::{Channel, PixelGrid, Quantum, StorageType};

/// Imports a buffer into a fresh grid, reading from the start of the
/// buffer.
///
/// Equivalent to [`import_at`] with offset 0.
///
/// # Example
///
/// ```rust
/// use pixex::{import, BufferDescriptor, SampleBuffer};
/// use pixex_core::{ChannelMapping, StorageType, QUANTUM_MAX};
///
/// let data = [0 as pixex_core::Quantum, 0, 0, QUANTUM_MAX];
/// let settings =
///     BufferDescriptor::new(1, 1, StorageType::Quantum, ChannelMapping::rgba());
/// let grid = import(&SampleBuffer::quanta(&data), &settings).unwrap();
/// assert_eq!(grid.pixel(0, 0), [0, 0, 0, QUANTUM_MAX]);
/// ```
pub fn import(data: &SampleBuffer<'_>, settings: &BufferDescriptor) -> Result<PixelGrid> {
    import_at(data, 0, settings)
}

/// Imports a buffer into a fresh `width × height` grid, reading from
/// `offset` (in buffer units).
///
/// The grid's layout is the descriptor's mapping with pad channels
/// stripped; the descriptor's region origin is ignored, since a fresh
/// grid covers exactly the described region.
///
/// # Errors
///
/// - [`ExchangeError::EmptyBuffer`] when the buffer is zero-length
/// - the configuration and range errors of
///   [`BufferDescriptor::validate_at`]
/// - [`ExchangeError::DuplicateChannel`] when a non-pad channel repeats
///   (a fresh grid cannot hold two slots for one channel)
pub fn import_at(
    data: &SampleBuffer<'_>,
    offset: i64,
    settings: &BufferDescriptor,
) -> Result<PixelGrid> {
    if data.is_empty() {
        return Err(ExchangeError::EmptyBuffer { param: "data" });
    }
    settings.validate_at(data, offset)?;
    if settings.mapping.has_duplicates() {
        let channel = first_duplicate(settings.mapping.channels());
        return Err(ExchangeError::DuplicateChannel { channel });
    }

    let mut grid = PixelGrid::new(
        settings.width,
        settings.height,
        settings.mapping.without_pad(),
    )?;
    // Fresh grid: every non-pad mapping entry has a slot by construction.
    let slots: Vec<Option<usize>> = settings
        .mapping
        .iter()
        .map(|c| grid.channel_index(c))
        .collect();

    decode_region(&mut grid, 0, 0, data, offset as usize, settings, &slots);
    Ok(grid)
}

/// Imports a buffer into a region of an existing grid.
///
/// Writes the descriptor's `width × height` region at its `(x, y)` origin.
/// Only mapped channels are touched: every other channel of the region's
/// pixels, and every pixel outside the region, keeps its value.
///
/// # Errors
///
/// As [`import_at`], plus:
///
/// - `InvalidRegion` (via [`ExchangeError::Core`]) when the region
///   extends past the grid
/// - [`ExchangeError::ChannelNotInGrid`] when a non-pad mapped channel is
///   absent from the grid's layout
///
/// All checks complete before the first write. Duplicate mapped channels
/// are allowed here; the last occurrence wins.
pub fn import_into(
    grid: &mut PixelGrid,
    data: &SampleBuffer<'_>,
    offset: i64,
    settings: &BufferDescriptor,
) -> Result<()> {
    if data.is_empty() {
        return Err(ExchangeError::EmptyBuffer { param: "data" });
    }
    settings.validate_at(data, offset)?;
    grid.check_region(settings.x, settings.y, settings.width, settings.height)?;
    let slots = resolve_slots(grid, settings)?;

    decode_region(
        grid,
        settings.x,
        settings.y,
        data,
        offset as usize,
        settings,
        &slots,
    );
    Ok(())
}

/// Exports a region of a grid into a fresh byte buffer.
///
/// The descriptor's region selects the pixels; channel values are
/// narrowed to the storage type with saturation, and pad channels emit
/// zero elements. The returned buffer has exactly the expected length.
///
/// # Errors
///
/// The configuration errors of [`BufferDescriptor::validate_at`], plus
/// `InvalidRegion` and [`ExchangeError::ChannelNotInGrid`] as for
/// [`import_into`].
pub fn export(grid: &PixelGrid, settings: &BufferDescriptor) -> Result<Vec<u8>> {
    validate_export(grid, settings)?;
    let slots = resolve_slots(grid, settings)?;
    let len = byte_len(settings)?;

    let mut out = vec![0u8; len];
    let mut element = 0;
    for_each_region_value(grid, settings, &slots, |raw| {
        convert::write_element(&mut out, 0, element, settings.storage, raw);
        element += 1;
    });
    Ok(out)
}

/// Exports a region of a grid into a fresh quantum element buffer.
///
/// # Errors
///
/// As [`export`], plus [`ExchangeError::StorageNotQuantum`] when the
/// descriptor's storage type is anything but
/// [`StorageType::Quantum`].
pub fn export_quanta(grid: &PixelGrid, settings: &BufferDescriptor) -> Result<Vec<Quantum>> {
    validate_export(grid, settings)?;
    if settings.storage != StorageType::Quantum {
        return Err(ExchangeError::StorageNotQuantum {
            actual: settings.storage,
        });
    }
    let slots = resolve_slots(grid, settings)?;
    let len = settings.pixel_elements().ok_or_else(|| {
        pixex_core::Error::invalid_dimensions(settings.width, settings.height, "buffer size overflow")
    })?;

    let mut out = Vec::with_capacity(len);
    for_each_region_value(grid, settings, &slots, |raw| {
        out.push(raw as Quantum);
    });
    Ok(out)
}

/// Exports a region of a grid into a caller byte buffer, writing from
/// `offset` (in bytes).
///
/// # Errors
///
/// As [`export`], plus the offset/length range errors of
/// [`BufferDescriptor::validate_at`] applied to the output buffer:
/// [`ExchangeError::NegativeOffset`],
/// [`ExchangeError::OffsetExceedsLength`] and
/// [`ExchangeError::BufferTooSmall`]. Nothing is written on error.
pub fn export_into(
    grid: &PixelGrid,
    out: &mut [u8],
    offset: i64,
    settings: &BufferDescriptor,
) -> Result<()> {
    if out.is_empty() {
        return Err(ExchangeError::EmptyBuffer { param: "out" });
    }
    settings.validate_at(&SampleBuffer::bytes(out), offset)?;
    grid.check_region(settings.x, settings.y, settings.width, settings.height)?;
    let slots = resolve_slots(grid, settings)?;

    let offset = offset as usize;
    let mut element = 0;
    for_each_region_value(grid, settings, &slots, |raw| {
        convert::write_element(out, offset, element, settings.storage, raw);
        element += 1;
    });
    Ok(())
}

/// Exact byte length of the buffer an export allocates.
fn byte_len(settings: &BufferDescriptor) -> Result<usize> {
    settings
        .pixel_elements()
        .and_then(|n| n.checked_mul(settings.storage.element_size()))
        .ok_or_else(|| {
            pixex_core::Error::invalid_dimensions(
                settings.width,
                settings.height,
                "buffer size overflow",
            )
            .into()
        })
}

/// Export-side validation without an output buffer: configuration checks
/// plus the region check against the source grid.
fn validate_export(grid: &PixelGrid, settings: &BufferDescriptor) -> Result<()> {
    if settings.mapping.is_empty() {
        return Err(ExchangeError::MappingNotDefined);
    }
    if !settings.storage.is_defined() {
        return Err(ExchangeError::UndefinedStorageType);
    }
    if settings.width == 0 || settings.height == 0 {
        return Err(pixex_core::Error::invalid_dimensions(
            settings.width,
            settings.height,
            "zero dimension",
        )
        .into());
    }
    grid.check_region(settings.x, settings.y, settings.width, settings.height)?;
    Ok(())
}

/// Resolves each mapping entry to a grid slot; pad entries resolve to
/// `None`. Fails before any data moves when a channel is missing.
fn resolve_slots(grid: &PixelGrid, settings: &BufferDescriptor) -> Result<Vec<Option<usize>>> {
    settings
        .mapping
        .iter()
        .map(|channel| {
            if channel == Channel::Pad {
                Ok(None)
            } else {
                grid.channel_index(channel)
                    .map(Some)
                    .ok_or(ExchangeError::ChannelNotInGrid { channel })
            }
        })
        .collect()
}

/// Decodes the buffer into the grid region at (gx, gy), row-major.
fn decode_region(
    grid: &mut PixelGrid,
    gx: u32,
    gy: u32,
    data: &SampleBuffer<'_>,
    offset: usize,
    settings: &BufferDescriptor,
    slots: &[Option<usize>],
) {
    let channels = grid.channels();
    let grid_width = grid.width() as usize;
    let out = grid.data_mut();

    let mut element = 0;
    for y in 0..settings.height as usize {
        let row_base = (gy as usize + y) * grid_width + gx as usize;
        for x in 0..settings.width as usize {
            let pixel_base = (row_base + x) * channels;
            for &slot in slots {
                let raw = convert::read_element(data, offset, element, settings.storage);
                element += 1;
                if let Some(slot) = slot {
                    out[pixel_base + slot] = convert::to_quantum(raw, settings.storage);
                }
            }
        }
    }
}

/// Walks the descriptor region row-major and yields one storage-domain
/// value per mapping entry (zero for pad entries).
fn for_each_region_value(
    grid: &PixelGrid,
    settings: &BufferDescriptor,
    slots: &[Option<usize>],
    mut emit: impl FnMut(f64),
) {
    for y in 0..settings.height {
        for x in 0..settings.width {
            let pixel = grid.pixel(settings.x + x, settings.y + y);
            for &slot in slots {
                let raw = match slot {
                    Some(slot) => convert::from_quantum(pixel[slot], settings.storage),
                    None => 0.0,
                };
                emit(raw);
            }
        }
    }
}

/// First non-pad channel that occurs twice in the list.
fn first_duplicate(channels: &[Channel]) -> Channel {
    for (i, &channel) in channels.iter().enumerate() {
        if channel != Channel::Pad && channels[..i].contains(&channel) {
            return channel;
        }
    }
    // Callers only ask after `has_duplicates` returned true.
    channels[0]
}
