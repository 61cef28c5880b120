/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for 24 bit bitmaps
use alloc::vec;

use calraster_core::bit_depth::BitDepth;
use calraster_core::bytestream::{ByteSink, ByteWriter};
use calraster_core::colorspace::ColorSpace;
use calraster_core::log::{debug, trace};
use calraster_core::options::EncoderOptions;

use crate::common::{
    BmpCompression, RowGeometry, BITS_PER_PIXEL, BYTES_PER_PIXEL, INFO_HEADER_SIZE,
    PAYLOAD_OFFSET
};
use crate::errors::BmpEncoderErrors;

/// A BMP encoder
///
/// Takes a top-down, row-major buffer of 8 bit RGB (or BGR) pixels and
/// writes an uncompressed, bottom-up, 24 bit bitmap.
///
/// # Example
/// - Encode a 79 pixel wide gray strip, every row carries 3 padding bytes
/// ```
/// use calraster_bmp::BmpEncoder;
/// use calraster_core::bit_depth::BitDepth;
/// use calraster_core::colorspace::ColorSpace;
/// use calraster_core::options::EncoderOptions;
///
/// let pixels = vec![128_u8; 79 * 2 * 3];
/// let options = EncoderOptions::new(79, 2, ColorSpace::RGB, BitDepth::Eight);
///
/// let mut out = vec![];
/// BmpEncoder::new(&pixels, options).encode(&mut out).unwrap();
/// assert_eq!(out.len(), 54 + 240 * 2);
/// ```
pub struct BmpEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions
}

impl<'a> BmpEncoder<'a> {
    /// Create a new encoder which will encode `data`
    /// whose format is contained in options
    ///
    /// # Arguments
    /// - data: top-down pixels, 3 bytes each
    /// - options: width, height, colorspace and depth of `data`
    pub fn new(data: &'a [u8], options: EncoderOptions) -> BmpEncoder<'a> {
        BmpEncoder { data, options }
    }

    /// Check the input against the options and return the file geometry
    ///
    /// This is the whole of the validation [`encode`](Self::encode) does,
    /// nothing is written when it fails.
    pub fn geometry(&self) -> Result<RowGeometry, BmpEncoderErrors> {
        let colorspace = self.options.colorspace();

        if !matches!(colorspace, ColorSpace::RGB | ColorSpace::BGR) {
            return Err(BmpEncoderErrors::UnsupportedColorSpace(colorspace));
        }
        if self.options.depth() != BitDepth::Eight {
            return Err(BmpEncoderErrors::UnsupportedBitDepth(self.options.depth()));
        }
        let (width, height) = (self.options.width(), self.options.height());

        if width == 0 || height == 0 {
            return Err(BmpEncoderErrors::ZeroDimensions(width, height));
        }
        let geometry = RowGeometry::new(width, height)
            .ok_or(BmpEncoderErrors::TooLargeDimensions(width, height))?;

        let density = self.options.pixels_per_meter();

        if i32::try_from(density).is_err() {
            return Err(BmpEncoderErrors::InvalidDensity(density));
        }

        // row_bytes * height cannot overflow, payload_size is bigger and did not
        let expected = geometry.row_bytes * height;

        if expected != self.data.len() {
            return Err(BmpEncoderErrors::WrongInputSize(expected, self.data.len()));
        }
        Ok(geometry)
    }

    fn encode_headers<T: ByteSink>(
        &self, stream: &mut ByteWriter<T>, geometry: &RowGeometry
    ) -> Result<(), BmpEncoderErrors> {
        // RowGeometry guarantees every size below fits its field
        stream.write_const_bytes(b"BM")?;
        stream.write_u32_le_err(geometry.file_size as u32)?;
        // reserved
        stream.write_u32_le_err(0)?;
        stream.write_u32_le_err(PAYLOAD_OFFSET as u32)?;

        stream.write_u32_le_err(INFO_HEADER_SIZE as u32)?;
        stream.write_i32_le_err(self.options.width() as i32)?;
        // positive height, rows are stored bottom-up
        stream.write_i32_le_err(self.options.height() as i32)?;
        // planes
        stream.write_u16_le_err(1)?;
        stream.write_u16_le_err(BITS_PER_PIXEL)?;
        stream.write_u32_le_err(BmpCompression::RGB.to_u32())?;
        stream.write_u32_le_err(geometry.payload_size as u32)?;

        // checked against i32::MAX in geometry()
        let density = self.options.pixels_per_meter() as i32;
        stream.write_i32_le_err(density)?;
        stream.write_i32_le_err(density)?;
        // colors used, important colors
        stream.write_u32_le_err(0)?;
        stream.write_u32_le_err(0)?;

        Ok(())
    }

    /// Encode the pixels to `sink`, returning the number of bytes written
    ///
    /// # Errors
    /// Any error from [`geometry`](Self::geometry), before a byte is written,
    /// or [`BmpEncoderErrors::IoErrors`] if the sink fails
    pub fn encode<T: ByteSink>(&self, sink: T) -> Result<usize, BmpEncoderErrors> {
        let geometry = self.geometry()?;

        debug!(
            "Encoding {}x{} bitmap, row {} bytes + {} padding, file size {}",
            self.options.width(),
            self.options.height(),
            geometry.row_bytes,
            geometry.padding,
            geometry.file_size
        );

        let mut stream = ByteWriter::new(sink);

        stream.reserve(geometry.file_size)?;

        self.encode_headers(&mut stream, &geometry)?;

        trace!("Headers written, {} bytes", stream.bytes_written());

        let swap_channels = !self.options.colorspace().is_bgr_order();
        let mut row_out = vec![0_u8; geometry.row_bytes];

        // the container stores the bottom row first
        for row in self.data.chunks_exact(geometry.row_bytes).rev() {
            if swap_channels {
                for (src, dst) in row
                    .chunks_exact(BYTES_PER_PIXEL)
                    .zip(row_out.chunks_exact_mut(BYTES_PER_PIXEL))
                {
                    dst[0] = src[2];
                    dst[1] = src[1];
                    dst[2] = src[0];
                }
                stream.write_all(&row_out)?;
            } else {
                stream.write_all(row)?;
            }
            stream.write_zeros(geometry.padding)?;
        }
        stream.flush()?;

        let position = stream.bytes_written();

        trace!("Payload written, {} bytes total", position);

        Ok(position)
    }
}

/// Write `pixels`, a top-down RGB buffer of `width` x `height`,
/// as a 24 bit bitmap to `path`, creating or truncating the file
///
/// # Errors
/// - Input errors from [`BmpEncoder::geometry`], raised before the file is touched
/// - [`BmpEncoderErrors::IoErrors`] carrying the `std::io::Error` from opening
///   or writing the file. A file created by this call is removed on failure,
///   an entry that already existed (file, symlink, device) is left in place
#[cfg(feature = "std")]
pub fn write_bmp<P: AsRef<std::path::Path>>(
    path: P, pixels: &[u8], width: usize, height: usize
) -> Result<(), BmpEncoderErrors> {
    let options = EncoderOptions::new(width, height, ColorSpace::RGB, BitDepth::Eight);

    write_bmp_with_options(path, pixels, options)
}

/// [`write_bmp`] with explicit encoder options
#[cfg(feature = "std")]
pub fn write_bmp_with_options<P: AsRef<std::path::Path>>(
    path: P, pixels: &[u8], options: EncoderOptions
) -> Result<(), BmpEncoderErrors> {
    use std::fs::{remove_file, OpenOptions};
    use std::io::{BufWriter, ErrorKind};

    use calraster_core::bytestream::ByteIoError;
    use calraster_core::log::warn;

    let path = path.as_ref();
    let encoder = BmpEncoder::new(pixels, options);

    // reject bad input before the file is created
    encoder.geometry()?;

    // only an entry this call created may be unlinked on failure
    let (file, created) = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => (file, true),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            let file = OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(path)
                .map_err(ByteIoError::StdIoError)?;
            (file, false)
        }
        Err(err) => return Err(ByteIoError::StdIoError(err).into())
    };
    let mut writer = BufWriter::new(file);

    let result = encoder.encode(&mut writer);
    // close the handle before anything else touches the path
    drop(writer);

    if let Err(err) = result {
        if created {
            if let Err(remove_err) = remove_file(path) {
                warn!("Could not remove partial file {}: {}", path.display(), remove_err);
            }
        }
        return Err(err);
    }
    debug!("Wrote {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use calraster_core::bit_depth::BitDepth;
    use calraster_core::colorspace::ColorSpace;
    use calraster_core::options::EncoderOptions;

    use crate::{BmpEncoder, BmpEncoderErrors};

    fn encode(pixels: &[u8], options: EncoderOptions) -> Result<Vec<u8>, BmpEncoderErrors> {
        let mut out = vec![];
        BmpEncoder::new(pixels, options).encode(&mut out)?;
        Ok(out)
    }

    #[rustfmt::skip]
    #[test]
    fn two_by_two_byte_exact() {
        // red, green
        // blue, black
        let pixels = [
            255, 0, 0, 0, 255, 0,
            0, 0, 255, 0, 0, 0
        ];
        let options = EncoderOptions::new(2, 2, ColorSpace::RGB, BitDepth::Eight);
        let out = encode(&pixels, options).unwrap();

        let expected: [u8; 70] = [
            // file header
            b'B', b'M', 70, 0, 0, 0, 0, 0, 0, 0, 54, 0, 0, 0,
            // info header
            40, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 1, 0, 24, 0,
            0, 0, 0, 0, 16, 0, 0, 0, 0x13, 0x0B, 0, 0, 0x13, 0x0B, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
            // bottom row first: blue, black, padding
            255, 0, 0, 0, 0, 0, 0, 0,
            // then the top row: red, green, padding
            0, 0, 255, 0, 255, 0, 0, 0
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn bgr_input_is_not_swapped() {
        let pixels = [1, 2, 3];
        let rgb = encode(&pixels, EncoderOptions::new(1, 1, ColorSpace::RGB, BitDepth::Eight));
        let bgr = encode(&pixels, EncoderOptions::new(1, 1, ColorSpace::BGR, BitDepth::Eight));

        assert_eq!(&rgb.unwrap()[54..], &[3, 2, 1, 0]);
        assert_eq!(&bgr.unwrap()[54..], &[1, 2, 3, 0]);
    }

    #[test]
    fn custom_density() {
        let options = EncoderOptions::new(1, 1, ColorSpace::RGB, BitDepth::Eight)
            .set_pixels_per_meter(11811);
        let out = encode(&[0, 0, 0], options).unwrap();

        assert_eq!(&out[38..42], &11811_i32.to_le_bytes());
        assert_eq!(&out[42..46], &11811_i32.to_le_bytes());
    }

    #[test]
    fn density_above_i32_is_rejected() {
        let mut out = vec![];
        let options = EncoderOptions::new(1, 1, ColorSpace::RGB, BitDepth::Eight);

        let largest = options.set_pixels_per_meter(i32::MAX as u32);
        assert!(BmpEncoder::new(&[0, 0, 0], largest).encode(&mut out).is_ok());
        assert_eq!(&out[38..42], &i32::MAX.to_le_bytes());

        out.clear();
        let too_large = options.set_pixels_per_meter(u32::MAX);
        let err = BmpEncoder::new(&[0, 0, 0], too_large).encode(&mut out);
        assert!(matches!(err, Err(BmpEncoderErrors::InvalidDensity(u32::MAX))));
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_input_writes_nothing() {
        let mut out = vec![];
        let options = EncoderOptions::new(2, 2, ColorSpace::RGB, BitDepth::Eight);

        let err = BmpEncoder::new(&[0; 11], options).encode(&mut out);
        assert!(matches!(err, Err(BmpEncoderErrors::WrongInputSize(12, 11))));

        let err = BmpEncoder::new(&[0; 12], options.set_colorspace(ColorSpace::RGBA))
            .encode(&mut out);
        assert!(matches!(
            err,
            Err(BmpEncoderErrors::UnsupportedColorSpace(ColorSpace::RGBA))
        ));

        let err = BmpEncoder::new(&[0; 12], options.set_depth(BitDepth::Sixteen))
            .encode(&mut out);
        assert!(matches!(
            err,
            Err(BmpEncoderErrors::UnsupportedBitDepth(BitDepth::Sixteen))
        ));

        let err = BmpEncoder::new(&[], options.set_width(0)).encode(&mut out);
        assert!(matches!(err, Err(BmpEncoderErrors::ZeroDimensions(0, 2))));

        assert!(out.is_empty());
    }

    #[test]
    fn short_sink_reports_io_error() {
        let pixels = [0; 12];
        let options = EncoderOptions::new(2, 2, ColorSpace::RGB, BitDepth::Eight);
        let mut storage = [0_u8; 60];

        let err = BmpEncoder::new(&pixels, options).encode(&mut storage[..]);
        assert!(matches!(err, Err(BmpEncoderErrors::IoErrors(_))));
    }
}
