/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel bit depth information

/// The per-channel bit depth of a pixel buffer.
///
/// Calibration patterns are produced with 8 bits per channel,
/// which is the only depth the bitmap container writer accepts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Pixels are stored as [`u8`] and use the whole range from 0-255.
    Eight,
    /// Sixteen bit depth
    ///
    /// Pixels are stored as [`u16`] in native endian.
    Sixteen,
    /// Bit depth information is unknown
    #[default]
    Unknown
}

impl BitDepth {
    /// Get the max value supported by the bit depth
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Eight => (1 << 8) - 1,
            Self::Sixteen => u16::MAX,
            Self::Unknown => 0
        }
    }

    /// Number of bits a single channel occupies
    ///
    /// ```
    /// use calraster_core::bit_depth::BitDepth;
    /// // three 8 bit channels make up a 24 bit pixel
    /// assert_eq!(BitDepth::Eight.bits() * 3, 24);
    /// ```
    pub const fn bits(self) -> u16 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
            Self::Unknown => 0
        }
    }

    /// Get the number of bytes needed to store a single channel
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
            Self::Unknown => 0
        }
    }
}
