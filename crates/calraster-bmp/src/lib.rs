/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A byte exact BMP writer
//!
//! This crate writes 24 bit, uncompressed, bottom-up Windows v3 bitmaps,
//! the format e-paper calibration tooling consumes, and reads the same
//! subset back for verification.
//!
//! # Layout written
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                                  ║
//! ╠════════╪══════════════════════════════════════════════════════════════╣
//! ║ 2      │ "BM" magic value                                             ║
//! ║ 4      │ u32 LE total file size                                       ║
//! ║ 4      │ reserved, zero                                               ║
//! ║ 4      │ u32 LE payload offset, always 54                             ║
//! ╟────────┼──────────────────────────────────────────────────────────────╢
//! ║ 4      │ u32 LE info header size, 40                                  ║
//! ║ 4 + 4  │ i32 LE width, i32 LE height (positive, rows are bottom-up)   ║
//! ║ 2 + 2  │ u16 LE planes (1), u16 LE bits per pixel (24)                ║
//! ║ 4      │ u32 LE compression, 0 (none)                                 ║
//! ║ 4      │ u32 LE payload size                                          ║
//! ║ 4 + 4  │ i32 LE horizontal and vertical pixels per metre              ║
//! ║ 4 + 4  │ u32 LE colors used, important colors, both zero              ║
//! ╟────────┼──────────────────────────────────────────────────────────────╢
//! ║ [BGR]  │ rows bottom to top, each padded with zeros to 4 bytes        ║
//! ╚════════╧══════════════════════════════════════════════════════════════╝
//! ```
//!
//! # Example
//! ```
//! use calraster_bmp::{BmpDecoder, BmpEncoder};
//! use calraster_core::bit_depth::BitDepth;
//! use calraster_core::colorspace::ColorSpace;
//! use calraster_core::options::EncoderOptions;
//!
//! // a 3x1 red, green, blue strip
//! let pixels = [255, 0, 0, 0, 255, 0, 0, 0, 255];
//! let options = EncoderOptions::new(3, 1, ColorSpace::RGB, BitDepth::Eight);
//!
//! let mut file = vec![];
//! let written = BmpEncoder::new(&pixels, options).encode(&mut file).unwrap();
//! // 54 header bytes, 9 color bytes and 3 padding bytes
//! assert_eq!(written, 66);
//!
//! let decoded = BmpDecoder::new(&file).decode().unwrap();
//! assert_eq!(decoded, pixels);
//! ```
//!
//! # Features
//! - `std` (default): write straight to a path with [`write_bmp`]
//! - `log`: debug logging of the header geometry
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use crate::common::{BmpCompression, RowGeometry};
pub use crate::decoder::{probe_bmp, BmpDecoder};
#[cfg(feature = "std")]
pub use crate::encoder::{write_bmp, write_bmp_with_options};
pub use crate::encoder::BmpEncoder;
pub use crate::errors::{BmpDecoderErrors, BmpEncoderErrors};

mod common;
mod decoder;
mod encoder;
mod errors;
