//! Export behavior: narrowing, saturation, regions, caller buffers.

use approx::assert_relative_eq;
use pixex::{export, export_into, export_quanta, BufferDescriptor, ExchangeError, SampleBuffer};
use pixex_core::{Channel, ChannelMapping, PixelGrid, Quantum, StorageType, QUANTUM_MAX};

fn gradient_grid() -> PixelGrid {
    // 2x1 RGBA: left pixel opaque max-red, right pixel half-green.
    let mut grid = PixelGrid::new(2, 1, ChannelMapping::rgba()).unwrap();
    grid.set_pixel(0, 0, &[QUANTUM_MAX, 0, 0, QUANTUM_MAX]).unwrap();
    grid.set_pixel(1, 0, &[0, QUANTUM_MAX / 2, 0, 0]).unwrap();
    grid
}

#[test]
fn exports_char_bytes_with_saturation() {
    let grid = gradient_grid();
    let settings = BufferDescriptor::new(2, 1, StorageType::Char, ChannelMapping::rgba());
    let out = export(&grid, &settings).unwrap();
    assert_eq!(out.len(), 2 * 4);
    assert_eq!(&out[0..4], &[255, 0, 0, 255]);
    assert_eq!(out[5], 127);
}

#[test]
fn exports_doubles_normalized() {
    let grid = gradient_grid();
    let settings =
        BufferDescriptor::new(2, 1, StorageType::Float64, ChannelMapping::rgba());
    let out = export(&grid, &settings).unwrap();
    assert_eq!(out.len(), 2 * 4 * 8);

    let first = f64::from_ne_bytes(out[0..8].try_into().unwrap());
    assert_relative_eq!(first, 1.0);
    let alpha = f64::from_ne_bytes(out[24..32].try_into().unwrap());
    assert_relative_eq!(alpha, 1.0);
}

#[test]
fn export_honors_mapping_subset_and_order() {
    let grid = gradient_grid();
    let settings = BufferDescriptor::new(
        2,
        1,
        StorageType::Quantum,
        ChannelMapping::parse("AR").unwrap(),
    );
    let out = export_quanta(&grid, &settings).unwrap();
    assert_eq!(out, [QUANTUM_MAX, QUANTUM_MAX, 0, 0]);
}

#[test]
fn export_region_selects_pixels() {
    let grid = gradient_grid();
    let settings = BufferDescriptor::with_region(
        1,
        0,
        1,
        1,
        StorageType::Quantum,
        ChannelMapping::rgba(),
    );
    let out = export_quanta(&grid, &settings).unwrap();
    assert_eq!(out, [0, QUANTUM_MAX / 2, 0, 0]);
}

#[test]
fn export_region_out_of_bounds_is_rejected() {
    let grid = gradient_grid();
    let settings = BufferDescriptor::with_region(
        2,
        0,
        1,
        1,
        StorageType::Quantum,
        ChannelMapping::rgba(),
    );
    let err = export_quanta(&grid, &settings).unwrap_err();
    assert!(err.is_range());
}

#[test]
fn export_missing_channel_is_rejected() {
    let grid = PixelGrid::new(1, 1, ChannelMapping::rgb()).unwrap();
    let settings =
        BufferDescriptor::new(1, 1, StorageType::Quantum, ChannelMapping::cmyk());
    let err = export_quanta(&grid, &settings).unwrap_err();
    assert!(matches!(
        err,
        ExchangeError::ChannelNotInGrid {
            channel: Channel::Cyan
        }
    ));
}

#[test]
fn export_empty_mapping_is_rejected() {
    let grid = gradient_grid();
    let settings = BufferDescriptor::new(
        2,
        1,
        StorageType::Char,
        ChannelMapping::parse("").unwrap(),
    );
    let err = export(&grid, &settings).unwrap_err();
    assert!(matches!(err, ExchangeError::MappingNotDefined));
}

#[test]
fn export_undefined_storage_is_rejected() {
    let grid = gradient_grid();
    let settings =
        BufferDescriptor::new(2, 1, StorageType::Undefined, ChannelMapping::rgba());
    let err = export(&grid, &settings).unwrap_err();
    assert!(matches!(err, ExchangeError::UndefinedStorageType));
}

#[test]
fn export_into_validates_before_writing() {
    let grid = gradient_grid();
    let settings = BufferDescriptor::new(2, 1, StorageType::Char, ChannelMapping::rgba());

    // 8 bytes needed; a 7-byte target must stay untouched.
    let mut out = vec![9u8; 7];
    let err = export_into(&grid, &mut out, 0, &settings).unwrap_err();
    assert!(matches!(
        err,
        ExchangeError::BufferTooSmall {
            actual: 7,
            required: 8
        }
    ));
    assert!(out.iter().all(|&b| b == 9));
}

#[test]
fn export_into_writes_at_offset() {
    let grid = gradient_grid();
    let settings = BufferDescriptor::new(2, 1, StorageType::Char, ChannelMapping::rgba());
    let mut out = vec![9u8; 10];
    export_into(&grid, &mut out, 2, &settings).unwrap();
    assert_eq!(&out[0..2], &[9, 9]);
    assert_eq!(&out[2..6], &[255, 0, 0, 255]);
}

#[test]
fn export_pad_channel_emits_zero_elements() {
    let grid = gradient_grid();
    let settings = BufferDescriptor::new(
        2,
        1,
        StorageType::Quantum,
        ChannelMapping::parse("RP").unwrap(),
    );
    let out = export_quanta(&grid, &settings).unwrap();
    assert_eq!(out, [QUANTUM_MAX, 0, 0, 0]);
}

#[test]
fn export_duplicate_channel_repeats_value() {
    let mut grid = PixelGrid::new(1, 1, ChannelMapping::red()).unwrap();
    grid.set_pixel(0, 0, &[7 as Quantum]).unwrap();
    let settings = BufferDescriptor::new(
        1,
        1,
        StorageType::Quantum,
        ChannelMapping::parse("RRR").unwrap(),
    );
    let out = export_quanta(&grid, &settings).unwrap();
    assert_eq!(out, [7, 7, 7]);
}
