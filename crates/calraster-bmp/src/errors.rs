/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use calraster_core::bit_depth::BitDepth;
use calraster_core::bytestream::ByteIoError;
use calraster_core::colorspace::ColorSpace;

/// BMP errors that can occur during encoding
///
/// Everything but [`IoErrors`](Self::IoErrors) is detected before
/// a single byte is written
#[non_exhaustive]
pub enum BmpEncoderErrors {
    /// Only RGB and BGR buffers can be stored in a 24 bit bitmap
    UnsupportedColorSpace(ColorSpace),
    /// Only 8 bit channels can be stored in a 24 bit bitmap
    UnsupportedBitDepth(BitDepth),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// The input buffer length does not match the dimensions,
    /// expected a size but got another size
    WrongInputSize(usize, usize),
    /// The file would not fit the 32 bit header fields
    TooLargeDimensions(usize, usize),
    /// The pixels per metre value does not fit the signed 32 bit density fields
    InvalidDensity(u32),
    /// The sink failed, for files this carries the untouched `std::io::Error`
    IoErrors(ByteIoError)
}

impl BmpEncoderErrors {
    /// The underlying `std::io::Error` if the sink failed
    #[cfg(feature = "std")]
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            BmpEncoderErrors::IoErrors(ByteIoError::StdIoError(err)) => Some(err),
            _ => None
        }
    }
}

impl Debug for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedColorSpace(colorspace) => {
                writeln!(
                    f,
                    "Unsupported colorspace {colorspace:?}, BMP encoder only works with RGB or BGR data"
                )
            }
            Self::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth:?}, expected 8 bits per channel")
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Zero image dimensions {width}x{height}")
            }
            Self::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            Self::TooLargeDimensions(width, height) => {
                writeln!(
                    f,
                    "Too large dimensions {width}x{height}, file size exceeds 32 bit header fields"
                )
            }
            Self::InvalidDensity(density) => {
                writeln!(
                    f,
                    "Invalid density {density} pixels per metre, expected at most {}",
                    i32::MAX
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpEncoderErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<ByteIoError> for BmpEncoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpEncoderErrors::IoErrors(value)
    }
}

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// The input is too small, expected at least
    /// a size but got another size
    TooSmallBuffer(usize, usize),
    /// Generic message
    GenericStatic(&'static str),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// Only 24 bits per pixel is read
    UnsupportedBitDepth(u16),
    /// Only uncompressed pixel data is read
    UnsupportedCompression(u32),
    IoErrors(ByteIoError)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::GenericStatic(header) => {
                writeln!(f, "{}", header)
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::UnsupportedBitDepth(bpp) => {
                writeln!(f, "Unsupported bits per pixel {bpp}, only 24 is supported")
            }
            Self::UnsupportedCompression(method) => {
                writeln!(f, "Unsupported compression method {method}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpDecoderErrors {}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}
