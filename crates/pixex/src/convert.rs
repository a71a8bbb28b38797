//! Element decoding/encoding and quantum scaling.
//!
//! One storage element travels through `f64` on both paths:
//!
//! ```text
//! buffer element --decode--> f64 --to_quantum--> Quantum   (import)
//! Quantum --from_quantum--> f64 --encode--> buffer element (export)
//! ```
//!
//! Integer storage is rescaled linearly between the storage width and the
//! quantum width, so the maximum storage value maps exactly to
//! [`QUANTUM_MAX`] and back. Float storage carries normalized values in
//! `[0, 1]`; out-of-range values saturate. Byte buffers are decoded
//! native-endian.

use crate::buffer::SampleBuffer;
use pixex_core::{Quantum, StorageType, QUANTUM_MAX};

/// Decodes the element at `index` (counted from `offset`, both in buffer
/// units) as a raw `f64` in the storage domain.
///
/// Callers must have validated the descriptor against the buffer; the
/// element range is in bounds by that contract and `storage` is defined.
pub(crate) fn read_element(
    buffer: &SampleBuffer<'_>,
    offset: usize,
    index: usize,
    storage: StorageType,
) -> f64 {
    match buffer {
        SampleBuffer::Quanta(data) => data[offset + index] as f64,
        SampleBuffer::Bytes(data) => {
            let size = storage.element_size();
            let s = &data[offset + index * size..offset + (index + 1) * size];
            match storage {
                StorageType::Char => s[0] as f64,
                StorageType::Short => u16::from_ne_bytes([s[0], s[1]]) as f64,
                StorageType::Int32 => u32::from_ne_bytes([s[0], s[1], s[2], s[3]]) as f64,
                StorageType::Int64 => {
                    u64::from_ne_bytes([s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]]) as f64
                }
                StorageType::Float32 => {
                    f32::from_ne_bytes([s[0], s[1], s[2], s[3]]) as f64
                }
                StorageType::Float64 => {
                    f64::from_ne_bytes([s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]])
                }
                StorageType::Quantum => read_quantum_bytes(s) as f64,
                // Rejected by descriptor validation.
                StorageType::Undefined => 0.0,
            }
        }
    }
}

/// Encodes one element into `out` at `index` (counted from `offset`, in
/// bytes), native-endian.
pub(crate) fn write_element(
    out: &mut [u8],
    offset: usize,
    index: usize,
    storage: StorageType,
    raw: f64,
) {
    let size = storage.element_size();
    let s = &mut out[offset + index * size..offset + (index + 1) * size];
    match storage {
        StorageType::Char => s[0] = raw as u8,
        StorageType::Short => s.copy_from_slice(&(raw as u16).to_ne_bytes()),
        StorageType::Int32 => s.copy_from_slice(&(raw as u32).to_ne_bytes()),
        StorageType::Int64 => s.copy_from_slice(&(raw as u64).to_ne_bytes()),
        StorageType::Float32 => s.copy_from_slice(&(raw as f32).to_ne_bytes()),
        StorageType::Float64 => s.copy_from_slice(&raw.to_ne_bytes()),
        StorageType::Quantum => s.copy_from_slice(&(raw as Quantum).to_ne_bytes()),
        // Rejected by descriptor validation.
        StorageType::Undefined => {}
    }
}

#[cfg(feature = "q8")]
#[inline]
fn read_quantum_bytes(s: &[u8]) -> Quantum {
    s[0]
}

#[cfg(not(feature = "q8"))]
#[inline]
fn read_quantum_bytes(s: &[u8]) -> Quantum {
    u16::from_ne_bytes([s[0], s[1]])
}

/// Widens a raw storage-domain value to the quantum domain.
///
/// Integer storage rescales linearly (`raw / storage_max * QUANTUM_MAX`,
/// rounded), float storage scales the normalized value, and quantum
/// storage passes through. Values outside the representable range
/// saturate.
pub(crate) fn to_quantum(raw: f64, storage: StorageType) -> Quantum {
    let qmax = QUANTUM_MAX as f64;
    let scaled = match storage {
        StorageType::Float32 | StorageType::Float64 => raw * qmax,
        StorageType::Quantum => raw,
        _ => raw / storage.max_value() * qmax,
    };
    scaled.round().clamp(0.0, qmax) as Quantum
}

/// Narrows a quantum to the raw storage domain, saturating at the storage
/// type's representable range.
pub(crate) fn from_quantum(q: Quantum, storage: StorageType) -> f64 {
    let qmax = QUANTUM_MAX as f64;
    match storage {
        StorageType::Float32 | StorageType::Float64 => q as f64 / qmax,
        StorageType::Quantum => q as f64,
        _ => (q as f64 / qmax * storage.max_value()).round(),
    }
}
