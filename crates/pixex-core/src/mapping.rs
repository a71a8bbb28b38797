//! Channel symbols and ordered channel mappings.
//!
//! A [`ChannelMapping`] states which channels a flat buffer contains and in
//! what order, e.g. `"RGBA"` or `"BGR"`. It doubles as the channel layout
//! of a [`PixelGrid`](crate::PixelGrid).
//!
//! # Symbols
//!
//! | Symbol | Channel | Notes |
//! |--------|---------|-------|
//! | `R` `G` `B` | red, green, blue | |
//! | `A` | alpha | `O` accepted as an alias |
//! | `C` `M` `Y` `K` | cyan, magenta, yellow, black | |
//! | `I` | gray (intensity) | |
//! | `P` | pad | skipped on import, zero on export |
//!
//! Symbols are case-insensitive. Anything else is a configuration error.
//!
//! # Usage
//!
//! ```rust
//! use pixex_core::mapping::{Channel, ChannelMapping};
//!
//! let mapping = ChannelMapping::parse("bgra").unwrap();
//! assert_eq!(mapping.len(), 4);
//! assert_eq!(mapping.to_string(), "BGRA");
//! assert_eq!(mapping.channels()[0], Channel::Blue);
//!
//! // Ready-made mappings for the common layouts
//! assert_eq!(ChannelMapping::rgba().to_string(), "RGBA");
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A single channel symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red ('R').
    Red,
    /// Green ('G').
    Green,
    /// Blue ('B').
    Blue,
    /// Alpha ('A', alias 'O').
    Alpha,
    /// Cyan ('C').
    Cyan,
    /// Magenta ('M').
    Magenta,
    /// Yellow ('Y').
    Yellow,
    /// Black ('K').
    Black,
    /// Gray / intensity ('I').
    Gray,
    /// Pad ('P'): occupies a buffer element but carries no channel value.
    Pad,
}

impl Channel {
    /// The canonical symbol for this channel.
    #[inline]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Alpha => 'A',
            Self::Cyan => 'C',
            Self::Magenta => 'M',
            Self::Yellow => 'Y',
            Self::Black => 'K',
            Self::Gray => 'I',
            Self::Pad => 'P',
        }
    }

    /// Parses a symbol, case-insensitively. 'O' maps to [`Channel::Alpha`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'A' | 'O' => Some(Self::Alpha),
            'C' => Some(Self::Cyan),
            'M' => Some(Self::Magenta),
            'Y' => Some(Self::Yellow),
            'K' => Some(Self::Black),
            'I' => Some(Self::Gray),
            'P' => Some(Self::Pad),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered sequence of channel symbols.
///
/// The mapping defines the per-pixel element count and channel order of a
/// buffer. An empty mapping is representable; operations reject it at
/// validation time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelMapping {
    channels: Vec<Channel>,
}

impl ChannelMapping {
    /// Creates a mapping from a channel list.
    #[inline]
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    /// Parses a mapping string such as `"RGBA"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChannel`] for any symbol outside the
    /// supported set.
    pub fn parse(mapping: &str) -> Result<Self> {
        let mut channels = Vec::with_capacity(mapping.len());
        for symbol in mapping.chars() {
            let channel =
                Channel::from_symbol(symbol).ok_or(Error::UnknownChannel { symbol })?;
            channels.push(channel);
        }
        Ok(Self { channels })
    }

    /// The "R" mapping.
    pub fn red() -> Self {
        Self::new(vec![Channel::Red])
    }

    /// The "I" (grayscale) mapping.
    pub fn gray() -> Self {
        Self::new(vec![Channel::Gray])
    }

    /// The "RGB" mapping.
    pub fn rgb() -> Self {
        Self::new(vec![Channel::Red, Channel::Green, Channel::Blue])
    }

    /// The "RGBA" mapping.
    pub fn rgba() -> Self {
        Self::new(vec![Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha])
    }

    /// The "BGR" mapping.
    pub fn bgr() -> Self {
        Self::new(vec![Channel::Blue, Channel::Green, Channel::Red])
    }

    /// The "BGRA" mapping.
    pub fn bgra() -> Self {
        Self::new(vec![Channel::Blue, Channel::Green, Channel::Red, Channel::Alpha])
    }

    /// The "CMYK" mapping.
    pub fn cmyk() -> Self {
        Self::new(vec![
            Channel::Cyan,
            Channel::Magenta,
            Channel::Yellow,
            Channel::Black,
        ])
    }

    /// The "CMYKA" mapping.
    pub fn cmyka() -> Self {
        Self::new(vec![
            Channel::Cyan,
            Channel::Magenta,
            Channel::Yellow,
            Channel::Black,
            Channel::Alpha,
        ])
    }

    /// Number of channels (buffer elements per pixel).
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the mapping contains no channels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// The ordered channel list.
    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Iterates over the channels in order.
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        self.channels.iter().copied()
    }

    /// Position of a channel within the mapping, if present.
    #[inline]
    pub fn position(&self, channel: Channel) -> Option<usize> {
        self.channels.iter().position(|&c| c == channel)
    }

    /// Whether any non-pad channel occurs more than once.
    pub fn has_duplicates(&self) -> bool {
        for (i, &channel) in self.channels.iter().enumerate() {
            if channel != Channel::Pad && self.channels[..i].contains(&channel) {
                return true;
            }
        }
        false
    }

    /// A copy of this mapping with pad channels removed.
    pub fn without_pad(&self) -> Self {
        Self {
            channels: self
                .channels
                .iter()
                .copied()
                .filter(|&c| c != Channel::Pad)
                .collect(),
        }
    }
}

impl FromStr for ChannelMapping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ChannelMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for channel in &self.channels {
            write!(f, "{}", channel.symbol())?;
        }
        Ok(())
    }
}

impl From<Vec<Channel>> for ChannelMapping {
    fn from(channels: Vec<Channel>) -> Self {
        Self::new(channels)
    }
}
