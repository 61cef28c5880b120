/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `BITMAPFILEHEADER` size
pub(crate) const FILE_HEADER_SIZE: usize = 14;
/// `BITMAPINFOHEADER` size
pub(crate) const INFO_HEADER_SIZE: usize = 40;
/// Pixel data starts right after the headers, 24 bit images carry no color table
pub(crate) const PAYLOAD_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub(crate) const BITS_PER_PIXEL: u16 = 24;

pub(crate) const BYTES_PER_PIXEL: usize = 3;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    Unknown
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> Option<BmpCompression> {
        match num {
            0 => Some(BmpCompression::RGB),
            1 => Some(BmpCompression::RLE8),
            2 => Some(BmpCompression::RLE4),
            3 => Some(BmpCompression::BITFIELDS),
            _ => None
        }
    }

    pub const fn to_u32(self) -> u32 {
        match self {
            BmpCompression::RGB => 0,
            BmpCompression::RLE8 => 1,
            BmpCompression::RLE4 => 2,
            BmpCompression::BITFIELDS => 3,
            BmpCompression::Unknown => u32::MAX
        }
    }
}

/// Sizes derived from the image dimensions for a 24 bit bitmap
///
/// ```
/// use calraster_bmp::RowGeometry;
/// // 79 * 3 = 237 bytes, padded to 240
/// let geometry = RowGeometry::new(79, 2).unwrap();
/// assert_eq!(geometry.padding, 3);
/// assert_eq!(geometry.file_size, 54 + 240 * 2);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RowGeometry {
    /// Color bytes in a row, `width * 3`
    pub row_bytes:    usize,
    /// Zero bytes appended to each row so rows are 4 byte aligned
    pub padding:      usize,
    /// `row_bytes + padding`
    pub padded_row:   usize,
    /// `padded_row * height`
    pub payload_size: usize,
    /// Headers plus payload
    pub file_size:    usize
}

impl RowGeometry {
    /// Compute the geometry, `None` if any size overflows or the
    /// dimensions and sizes do not fit the signed/unsigned 32 bit header fields
    pub fn new(width: usize, height: usize) -> Option<RowGeometry> {
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return None;
        }
        let row_bytes = width.checked_mul(BYTES_PER_PIXEL)?;
        let padding = (4 - row_bytes % 4) % 4;
        let padded_row = row_bytes.checked_add(padding)?;
        let payload_size = padded_row.checked_mul(height)?;
        let file_size = payload_size.checked_add(PAYLOAD_OFFSET)?;

        if file_size > u32::MAX as usize {
            return None;
        }
        Some(RowGeometry {
            row_bytes,
            padding,
            padded_row,
            payload_size,
            file_size
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::RowGeometry;

    #[test]
    fn rows_are_four_byte_aligned() {
        for width in 1..=257 {
            let geometry = RowGeometry::new(width, 3).unwrap();

            assert!(geometry.padding < 4);
            assert_eq!(geometry.padded_row % 4, 0);
            assert_eq!(geometry.padded_row, width * 3 + geometry.padding);
            assert_eq!(geometry.file_size, 54 + geometry.padded_row * 3);
        }
    }

    #[test]
    fn reference_panel() {
        let geometry = RowGeometry::new(800, 480).unwrap();
        assert_eq!(geometry.padding, 0);
        assert_eq!(geometry.payload_size, 1_152_000);
        assert_eq!(geometry.file_size, 1_152_054);
    }

    #[test]
    fn odd_width_needs_padding() {
        assert_eq!(RowGeometry::new(1, 1).unwrap().padding, 1);
        assert_eq!(RowGeometry::new(2, 1).unwrap().padding, 2);
        assert_eq!(RowGeometry::new(3, 1).unwrap().padding, 3);
        assert_eq!(RowGeometry::new(4, 1).unwrap().padding, 0);
    }

    #[test]
    fn oversized_files_are_rejected() {
        assert!(RowGeometry::new(1 << 16, 1 << 16).is_none());
        assert!(RowGeometry::new(usize::MAX, 1).is_none());
    }
}
