//! Caller-owned buffer views.
//!
//! The original binding exposes separate entry points for byte arrays and
//! quantum arrays; here a single [`SampleBuffer`] discriminates the two,
//! and the descriptor's storage type selects how a byte buffer is
//! reinterpreted.
//!
//! # Units
//!
//! Lengths and offsets are expressed in *buffer units*: bytes for
//! [`SampleBuffer::Bytes`], quantum elements for [`SampleBuffer::Quanta`].
//! Every length reported in an error uses the same unit as the buffer it
//! describes.

use pixex_core::Quantum;

/// A read-only view over caller-owned sample data.
///
/// The buffer is never mutated and never aliased by the grid an import
/// produces; imports copy.
#[derive(Debug, Clone, Copy)]
pub enum SampleBuffer<'a> {
    /// Raw bytes, decoded native-endian according to the storage type.
    Bytes(&'a [u8]),
    /// Quantum elements. Only valid with [`StorageType::Quantum`](pixex_core::StorageType::Quantum).
    Quanta(&'a [Quantum]),
}

impl<'a> SampleBuffer<'a> {
    /// Wraps a byte buffer.
    #[inline]
    pub fn bytes(data: &'a [u8]) -> Self {
        Self::Bytes(data)
    }

    /// Wraps a quantum element buffer.
    #[inline]
    pub fn quanta(data: &'a [Quantum]) -> Self {
        Self::Quanta(data)
    }

    /// Buffer length in buffer units (bytes or elements).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(data) => data.len(),
            Self::Quanta(data) => data.len(),
        }
    }

    /// Whether the buffer holds no data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this is a quantum element buffer.
    #[inline]
    pub fn is_quanta(&self) -> bool {
        matches!(self, Self::Quanta(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_units() {
        let bytes = [0u8; 6];
        assert_eq!(SampleBuffer::bytes(&bytes).len(), 6);

        let quanta = [0 as Quantum; 6];
        let buf = SampleBuffer::quanta(&quanta);
        assert_eq!(buf.len(), 6);
        assert!(buf.is_quanta());
    }

    #[test]
    fn test_is_empty() {
        assert!(SampleBuffer::bytes(&[]).is_empty());
        assert!(!SampleBuffer::bytes(&[1]).is_empty());
    }
}
