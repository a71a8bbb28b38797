//! Storage element formats and the canonical quantum domain.
//!
//! This module defines how channel values are represented on two sides of
//! an exchange:
//!
//! - [`Quantum`] - The canonical in-memory precision used by [`PixelGrid`](crate::PixelGrid)
//! - [`StorageType`] - The in-buffer numeric representation of each element
//!
//! # Quantum Depth
//!
//! The quantum width is a build-time constant, selected by cargo feature:
//! 16-bit by default, 8-bit with the `q8` feature. [`QUANTUM_DEPTH`] and
//! [`QUANTUM_MAX`] describe the active build.
//!
//! # Usage
//!
//! ```rust
//! use pixex_core::format::{StorageType, QUANTUM_MAX};
//!
//! // A 16-bit buffer element occupies two bytes
//! assert_eq!(StorageType::Short.element_size(), 2);
//!
//! // Floats carry normalized values, integers carry full-range values
//! assert!(StorageType::Float64.is_float());
//! assert_eq!(StorageType::Char.max_value(), 255.0);
//! assert_eq!(StorageType::Quantum.max_value(), QUANTUM_MAX as f64);
//! ```

/// The canonical per-channel precision (8-bit build).
#[cfg(feature = "q8")]
pub type Quantum = u8;

/// The canonical per-channel precision (default 16-bit build).
#[cfg(not(feature = "q8"))]
pub type Quantum = u16;

/// Bits per quantum in this build.
#[cfg(feature = "q8")]
pub const QUANTUM_DEPTH: u32 = 8;

/// Bits per quantum in this build.
#[cfg(not(feature = "q8"))]
pub const QUANTUM_DEPTH: u32 = 16;

/// Maximum quantum value (255 for `q8`, 65535 by default).
pub const QUANTUM_MAX: Quantum = Quantum::MAX;

/// The in-buffer numeric representation of a channel element.
///
/// Integer types are unsigned. Floating-point types carry normalized
/// values in `[0.0, 1.0]`; integer types carry full-range values scaled
/// to the type's width.
///
/// `Undefined` is representable so that an unset descriptor can be
/// detected at validation time rather than at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageType {
    /// No storage type selected. Rejected by validation.
    #[default]
    Undefined,
    /// 8-bit unsigned integer.
    Char,
    /// 16-bit unsigned integer.
    Short,
    /// 32-bit unsigned integer.
    Int32,
    /// 64-bit unsigned integer.
    Int64,
    /// 32-bit single-precision float, normalized to [0, 1].
    Float32,
    /// 64-bit double-precision float, normalized to [0, 1].
    Float64,
    /// Native quantum width (see [`QUANTUM_DEPTH`]).
    Quantum,
}

impl StorageType {
    /// Bytes occupied by one element of this storage type.
    /// Returns 0 for `Undefined`.
    #[inline]
    pub const fn element_size(&self) -> usize {
        match self {
            Self::Undefined => 0,
            Self::Char => 1,
            Self::Short => 2,
            Self::Int32 => 4,
            Self::Int64 => 8,
            Self::Float32 => 4,
            Self::Float64 => 8,
            Self::Quantum => std::mem::size_of::<Quantum>(),
        }
    }

    /// Whether this is a floating-point representation.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Whether a storage type has been selected.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Maximum representable element value.
    ///
    /// Floats are normalized, so their maximum is 1.0. Returns 0.0 for
    /// `Undefined`.
    #[inline]
    pub fn max_value(&self) -> f64 {
        match self {
            Self::Undefined => 0.0,
            Self::Char => u8::MAX as f64,
            Self::Short => u16::MAX as f64,
            Self::Int32 => u32::MAX as f64,
            Self::Int64 => u64::MAX as f64,
            Self::Float32 | Self::Float64 => 1.0,
            Self::Quantum => QUANTUM_MAX as f64,
        }
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Quantum => "quantum",
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
