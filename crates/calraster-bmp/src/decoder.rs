/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A reader for the bitmaps this crate writes
//!
//! Only uncompressed 24 bit Windows bitmaps are understood, enough
//! to check a written calibration file without an external viewer.
//! Both bottom-up (positive height) and top-down (negative height)
//! row orders are accepted.
use alloc::vec;
use alloc::vec::Vec;

use calraster_core::bytestream::ByteReader;
use calraster_core::colorspace::ColorSpace;
use calraster_core::log::trace;
use calraster_core::options::DecoderOptions;

use crate::common::{
    BmpCompression, RowGeometry, BITS_PER_PIXEL, BYTES_PER_PIXEL, FILE_HEADER_SIZE
};
use crate::BmpDecoderErrors;

/// Probe some bytes to see
/// if they consist of a BMP image
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read info header size
            if let Some(sz) = bytes.get(14) {
                return matches!(*sz, 40 | 52 | 56 | 108 | 124);
            }
        }
    }
    false
}

/// A BMP decoder
///
/// # Example
/// ```
/// use calraster_bmp::BmpDecoder;
///
/// fn main() -> Result<(), calraster_bmp::BmpDecoderErrors> {
///     let file = std::fs::read("calibration.bmp").unwrap_or_default();
///     let mut decoder = BmpDecoder::new(&file);
///
///     if decoder.decode_headers().is_ok() {
///         // after decoding headers, we can safely access the image metadata
///         let (w, h) = decoder.dimensions().unwrap();
///         println!("Image width: {}\t Image height: {}", w, h);
///     }
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<'a> {
    bytes:           ByteReader<'a>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    flip_vertically: bool,
    decoded_headers: bool,
    file_size:       u32,
    data_offset:     u32
}

impl<'a> BmpDecoder<'a> {
    /// Create a new bmp decoder that reads data from
    /// `data`
    pub fn new(data: &'a [u8]) -> BmpDecoder<'a> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> BmpDecoder<'a> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            width: 0,
            height: 0,
            flip_vertically: false,
            decoded_headers: false,
            file_size: 0,
            data_offset: 0
        }
    }

    /// Decode headers stored in the bmp file and store
    /// information in the decode context
    ///
    /// # Returns
    /// - Ok(()) Indicates the headers describe a 24 bit uncompressed image
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if self.bytes.len() < FILE_HEADER_SIZE {
            return Err(BmpDecoderErrors::TooSmallBuffer(
                FILE_HEADER_SIZE,
                self.bytes.len()
            ));
        }
        if self.bytes.get_slice(2)? != b"BM" {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }
        self.file_size = self.bytes.get_u32_le_err()?;
        // reserved
        self.bytes.skip(4);
        self.data_offset = self.bytes.get_u32_le_err()?;

        let ihsize = self.bytes.get_u32_le_err()?;

        if !matches!(ihsize, 40 | 52 | 56 | 108 | 124) {
            return Err(BmpDecoderErrors::GenericStatic(
                "Unknown information header size"
            ));
        }
        if (FILE_HEADER_SIZE as u32).saturating_add(ihsize) > self.data_offset {
            return Err(BmpDecoderErrors::GenericStatic(
                "Pixel data overlaps the headers"
            ));
        }

        let width = self.bytes.get_i32_le_err()?;
        let height = self.bytes.get_i32_le_err()?;

        if width <= 0 {
            return Err(BmpDecoderErrors::GenericStatic(
                "Width is zero or negative, invalid image"
            ));
        }
        if height == 0 {
            return Err(BmpDecoderErrors::GenericStatic(
                "Height is zero, invalid image"
            ));
        }
        // positive heights store the bottom row first
        self.flip_vertically = height > 0;

        self.width = width.unsigned_abs() as usize;
        self.height = height.unsigned_abs() as usize;

        if self.width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                self.width
            ));
        }
        if self.height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                self.height
            ));
        }

        trace!("Width: {}", self.width);
        trace!("Height: {}", self.height);

        // planes
        if self.bytes.get_u16_le_err()? != 1 {
            return Err(BmpDecoderErrors::GenericStatic("Invalid BMP header"));
        }
        let depth = self.bytes.get_u16_le_err()?;

        if depth != BITS_PER_PIXEL {
            return Err(BmpDecoderErrors::UnsupportedBitDepth(depth));
        }
        let compression = self.bytes.get_u32_le_err()?;

        if BmpCompression::from_u32(compression) != Some(BmpCompression::RGB) {
            return Err(BmpDecoderErrors::UnsupportedCompression(compression));
        }
        trace!("Pixel data offset: {}", self.data_offset);
        trace!("Bottom-up rows: {}", self.flip_vertically);

        self.decoded_headers = true;

        Ok(())
    }

    /// Image width and height, or `None` if headers were not decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// The file size recorded in the file header
    pub const fn file_size(&self) -> Option<u32> {
        if self.decoded_headers {
            return Some(self.file_size);
        }
        None
    }

    /// Whether the rows are stored bottom to top
    pub const fn is_bottom_up(&self) -> Option<bool> {
        if self.decoded_headers {
            return Some(self.flip_vertically);
        }
        None
    }

    /// The colorspace of [`decode`](Self::decode) output, always RGB
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            return Some(ColorSpace::RGB);
        }
        None
    }

    /// Size of the buffer [`decode`](Self::decode) returns
    pub fn output_buffer_size(&self) -> Option<usize> {
        if !self.decoded_headers {
            return None;
        }
        self.width
            .checked_mul(self.height)?
            .checked_mul(BYTES_PER_PIXEL)
    }

    /// Decode the image, returning top-down, row-major RGB pixels
    pub fn decode(&mut self) -> Result<Vec<u8>, BmpDecoderErrors> {
        self.decode_headers()?;

        let geometry = RowGeometry::new(self.width, self.height).ok_or(
            BmpDecoderErrors::GenericStatic("Image too large for a 32 bit bitmap")
        )?;
        let start = self.data_offset as usize;
        let needed = start.saturating_add(geometry.payload_size);

        if self.bytes.len() < needed {
            return Err(BmpDecoderErrors::TooSmallBuffer(needed, self.bytes.len()));
        }
        self.bytes.set_position(start);

        let mut pixels = vec![0_u8; geometry.row_bytes * self.height];

        for i in 0..self.height {
            let row = self.bytes.get_slice(geometry.padded_row)?;
            let out_row = if self.flip_vertically {
                self.height - 1 - i
            } else {
                i
            };
            let out_start = out_row * geometry.row_bytes;
            let out = &mut pixels[out_start..out_start + geometry.row_bytes];

            for (src, dst) in row[..geometry.row_bytes]
                .chunks_exact(BYTES_PER_PIXEL)
                .zip(out.chunks_exact_mut(BYTES_PER_PIXEL))
            {
                dst[0] = src[2];
                dst[1] = src[1];
                dst[2] = src[0];
            }
        }
        Ok(pixels)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use calraster_core::bit_depth::BitDepth;
    use calraster_core::colorspace::ColorSpace;
    use calraster_core::options::{DecoderOptions, EncoderOptions};

    use crate::{probe_bmp, BmpDecoder, BmpDecoderErrors, BmpEncoder};

    fn encoded(width: usize, height: usize, pixels: &[u8]) -> Vec<u8> {
        let options = EncoderOptions::new(width, height, ColorSpace::RGB, BitDepth::Eight);
        let mut out = vec![];
        BmpEncoder::new(pixels, options).encode(&mut out).unwrap();
        out
    }

    #[test]
    fn reads_back_what_was_written() {
        let pixels: Vec<u8> = (0..5 * 3 * 3).map(|x| x as u8).collect();
        let file = encoded(5, 3, &pixels);

        assert!(probe_bmp(&file));

        let mut decoder = BmpDecoder::new(&file);
        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((5, 3)));
        assert_eq!(decoder.file_size(), Some(file.len() as u32));
        assert_eq!(decoder.is_bottom_up(), Some(true));
        assert_eq!(decoder.output_buffer_size(), Some(pixels.len()));
        assert_eq!(decoder.decode().unwrap(), pixels);
    }

    #[test]
    fn top_down_rows() {
        // flip the height sign and the row order by hand
        let pixels = [1, 2, 3, 4, 5, 6];
        let mut file = encoded(1, 2, &pixels);
        file[22..26].copy_from_slice(&(-2_i32).to_le_bytes());
        let (first, second) = file[54..].split_at_mut(4);
        first.swap_with_slice(second);

        let mut decoder = BmpDecoder::new(&file);
        assert_eq!(decoder.decode().unwrap(), pixels);
        assert_eq!(decoder.is_bottom_up(), Some(false));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(!probe_bmp(b"PNG"));
        assert!(matches!(
            BmpDecoder::new(b"BM").decode_headers(),
            Err(BmpDecoderErrors::TooSmallBuffer(14, 2))
        ));

        let mut file = encoded(2, 2, &[0; 12]);
        file[0] = b'X';
        assert!(matches!(
            BmpDecoder::new(&file).decode_headers(),
            Err(BmpDecoderErrors::InvalidMagicBytes)
        ));

        let mut file = encoded(2, 2, &[0; 12]);
        file[28] = 32;
        assert!(matches!(
            BmpDecoder::new(&file).decode_headers(),
            Err(BmpDecoderErrors::UnsupportedBitDepth(32))
        ));

        let mut file = encoded(2, 2, &[0; 12]);
        file[30] = 1;
        assert!(matches!(
            BmpDecoder::new(&file).decode_headers(),
            Err(BmpDecoderErrors::UnsupportedCompression(1))
        ));

        let file = encoded(2, 2, &[0; 12]);
        assert!(matches!(
            BmpDecoder::new(&file[..60]).decode(),
            Err(BmpDecoderErrors::TooSmallBuffer(70, 60))
        ));
    }

    #[test]
    fn respects_limits() {
        let file = encoded(4, 1, &[0; 12]);
        let options = DecoderOptions::default().set_max_width(3);

        assert!(matches!(
            BmpDecoder::new_with_options(&file, options).decode_headers(),
            Err(BmpDecoderErrors::TooLargeDimensions("width", 3, 4))
        ));
    }
}
