/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Calibration pattern compositor
//!
//! This crate turns an ordered list of colors into a dense, top-down
//! RGB buffer where the canvas is split into a grid of rectangular cells,
//! one color per cell.
//!
//! The compositor knows nothing about container formats, its output is
//! an interleaved byte buffer plus [`EncoderOptions`](calraster_core::options::EncoderOptions)
//! describing it, ready for any encoder.
//!
//! # Example
//! ```
//! use calraster_pattern::{compose, Palette};
//!
//! let palette = Palette::e6_theoretical();
//! let colors = palette.calibration_colors();
//!
//! let pixels = compose(800, 480, &colors).unwrap();
//! assert_eq!(pixels.as_bytes().len(), 800 * 480 * 3);
//! // top left is black, bottom right is green
//! assert_eq!(pixels.pixel(0, 0), Some(colors[0]));
//! assert_eq!(pixels.pixel(799, 479), Some(colors[5]));
//! ```
//!
//! # Layout policy
//! Cells are `width / cols` by `height / rows` pixels, the last column
//! and the last row absorb whatever the integer division truncated.
//!
//! # Features
//! - `std`: `std::error::Error` for [`PatternErrors`]
//! - `log`: trace logging of the computed layout
//! - `serde-support`: serialize and deserialize [`Rgb`] and palette entries
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use crate::color::Rgb;
pub use crate::compositor::{compose, compose_with_options, ComposeOptions, PixelBuffer};
pub use crate::errors::PatternErrors;
pub use crate::layout::{Cell, CellLayout, GridShape};
pub use crate::palette::{Palette, PaletteEntry};

mod color;
mod compositor;
mod errors;
mod layout;
mod palette;
