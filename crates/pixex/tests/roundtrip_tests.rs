//! Round-trip laws and end-to-end exchange scenarios.

use approx::assert_relative_eq;
use pixex::{
    export, export_quanta, import, import_into, BufferDescriptor, ExchangeError, SampleBuffer,
};
use pixex_core::{ChannelMapping, PixelGrid, Quantum, StorageType, QUANTUM_MAX};

/// `export(import(buffer))` is the identity for quantum storage.
#[test]
fn quantum_roundtrip_is_exact() {
    let data: Vec<Quantum> = (0..24).map(|v| (v * 977) as Quantum).collect();
    let settings = BufferDescriptor::new(3, 2, StorageType::Quantum, ChannelMapping::rgba());

    let grid = import(&SampleBuffer::quanta(&data), &settings).unwrap();
    let out = export_quanta(&grid, &settings).unwrap();
    assert_eq!(out, data);
}

/// Char storage is narrower than the quantum domain; a byte value must
/// come back unchanged even though the grid stores a widened quantum.
#[test]
fn char_roundtrip_is_exact() {
    let data: Vec<u8> = (0..=255).collect();
    let settings = BufferDescriptor::new(16, 16, StorageType::Char, ChannelMapping::red());

    let grid = import(&SampleBuffer::bytes(&data), &settings).unwrap();
    let out = export(&grid, &settings).unwrap();
    assert_eq!(out, data);
}

// Exact only when the quantum is as wide as the storage type.
#[cfg(not(feature = "q8"))]
#[test]
fn short_roundtrip_is_exact() {
    let values = [0u16, 1, 255, 32768, 65534, 65535];
    let data: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    let settings = BufferDescriptor::new(6, 1, StorageType::Short, ChannelMapping::red());

    let grid = import(&SampleBuffer::bytes(&data), &settings).unwrap();
    let out = export(&grid, &settings).unwrap();
    assert_eq!(out, data);
}

#[test]
fn float64_roundtrip_within_quantum_precision() {
    let values = [0.0f64, 0.25, 0.5, 0.75, 1.0];
    let data: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    let settings = BufferDescriptor::new(5, 1, StorageType::Float64, ChannelMapping::red());

    let grid = import(&SampleBuffer::bytes(&data), &settings).unwrap();
    let out = export(&grid, &settings).unwrap();

    // One quantum step of error at most.
    let step = 1.0 / QUANTUM_MAX as f64;
    for (i, &expected) in values.iter().enumerate() {
        let got = f64::from_ne_bytes(out[i * 8..(i + 1) * 8].try_into().unwrap());
        assert_relative_eq!(got, expected, epsilon = step);
    }
}

// The five behavior scenarios, end to end.

#[test]
fn scenario_float64_column_import() {
    let values = [0.0f64, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0];
    let data: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    let settings = BufferDescriptor::new(1, 2, StorageType::Float64, ChannelMapping::rgba());

    let grid = import(&SampleBuffer::bytes(&data), &settings).unwrap();
    assert_eq!(grid.pixel(0, 0), [0, 0, 0, QUANTUM_MAX]);
    assert_eq!(grid.pixel(0, 1), [0, QUANTUM_MAX, 0, 0]);
}

#[test]
fn scenario_short_quantum_buffer() {
    let data = [0 as Quantum, 0];
    let settings = BufferDescriptor::new(1, 1, StorageType::Quantum, ChannelMapping::rgb());
    let err = import(&SampleBuffer::quanta(&data), &settings).unwrap_err();
    assert!(matches!(
        err,
        ExchangeError::BufferTooSmall {
            actual: 2,
            required: 3
        }
    ));
}

#[test]
fn scenario_subset_import_preserves_channels() {
    let mut grid =
        PixelGrid::filled(1, 1, ChannelMapping::rgba(), &[1, 2, 3, 4]).unwrap();
    let data = [QUANTUM_MAX];
    let settings = BufferDescriptor::new(1, 1, StorageType::Quantum, ChannelMapping::red());

    import_into(&mut grid, &SampleBuffer::quanta(&data), 0, &settings).unwrap();
    assert_eq!(grid.pixel(0, 0), [QUANTUM_MAX, 2, 3, 4]);
}

#[test]
fn scenario_negative_offset_fails_first() {
    // The buffer itself is valid; the offset alone must trip the error.
    let data = [0 as Quantum; 4];
    let settings = BufferDescriptor::new(1, 1, StorageType::Quantum, ChannelMapping::rgba());
    let err = pixex::import_at(&SampleBuffer::quanta(&data), -1, &settings).unwrap_err();
    assert!(matches!(err, ExchangeError::NegativeOffset { offset: -1 }));
}

#[test]
fn scenario_quantum_max_exports_as_255() {
    let mut grid = PixelGrid::new(1, 1, ChannelMapping::red()).unwrap();
    grid.set_pixel(0, 0, &[QUANTUM_MAX]).unwrap();
    let settings = BufferDescriptor::new(1, 1, StorageType::Char, ChannelMapping::red());
    let out = export(&grid, &settings).unwrap();
    assert_eq!(out, [255]);
}

// Offset edge laws.

#[test]
fn offset_at_buffer_end_fails() {
    let data = [0 as Quantum; 4];
    let settings = BufferDescriptor::new(1, 1, StorageType::Quantum, ChannelMapping::rgba());
    let err = pixex::import_at(&SampleBuffer::quanta(&data), 4, &settings).unwrap_err();
    assert!(matches!(
        err,
        ExchangeError::OffsetExceedsLength {
            offset: 4,
            length: 4
        }
    ));
}

#[test]
fn exactly_sufficient_buffer_succeeds() {
    let data = [0 as Quantum; 4];
    let settings = BufferDescriptor::new(1, 1, StorageType::Quantum, ChannelMapping::rgba());
    assert!(import(&SampleBuffer::quanta(&data), &settings).is_ok());
}

#[test]
fn roundtrip_through_region_window() {
    // Import into the center of a larger grid, export the same window back.
    let mut grid = PixelGrid::new(4, 4, ChannelMapping::rgb()).unwrap();
    let data: Vec<Quantum> = (0..12).map(|v| (v + 1) as Quantum).collect();
    let settings =
        BufferDescriptor::with_region(1, 1, 2, 2, StorageType::Quantum, ChannelMapping::rgb());

    import_into(&mut grid, &SampleBuffer::quanta(&data), 0, &settings).unwrap();
    let out = export_quanta(&grid, &settings).unwrap();
    assert_eq!(out, data);

    // Pixels outside the window stay zero.
    assert_eq!(grid.pixel(0, 0), [0, 0, 0]);
    assert_eq!(grid.pixel(3, 3), [0, 0, 0]);
}
