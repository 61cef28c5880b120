/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bit_depth::BitDepth;
use crate::colorspace::ColorSpace;

/// Physical density written into bitmap headers, 72 DPI in pixels per metre
pub const DEFAULT_PIXELS_PER_METER: u32 = 2835;

/// Options describing the buffer handed to an encoder
///
/// # Example
/// ```
/// use calraster_core::bit_depth::BitDepth;
/// use calraster_core::colorspace::ColorSpace;
/// use calraster_core::options::EncoderOptions;
///
/// let options = EncoderOptions::new(800, 480, ColorSpace::RGB, BitDepth::Eight);
/// assert_eq!(options.pixels_per_meter(), 2835);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:            usize,
    height:           usize,
    colorspace:       ColorSpace,
    depth:            BitDepth,
    pixels_per_meter: u32
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:            0,
            height:           0,
            colorspace:       ColorSpace::RGB,
            depth:            BitDepth::Eight,
            pixels_per_meter: DEFAULT_PIXELS_PER_METER
        }
    }
}

impl EncoderOptions {
    /// Create options for a buffer of the given geometry and layout
    pub fn new(
        width: usize, height: usize, colorspace: ColorSpace, depth: BitDepth
    ) -> EncoderOptions {
        EncoderOptions::default()
            .set_width(width)
            .set_height(height)
            .set_colorspace(colorspace)
            .set_depth(depth)
    }
    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }
    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Get the depth for which the image will be encoded in
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }
    /// Get the colorspace of the buffer to be encoded
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }
    /// Horizontal and vertical density written in headers that carry one
    pub const fn pixels_per_meter(&self) -> u32 {
        self.pixels_per_meter
    }

    /// Set width for the image to be encoded
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
    /// Set height for the image to be encoded
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
    /// Set depth for the image to be encoded
    pub fn set_depth(mut self, depth: BitDepth) -> Self {
        self.depth = depth;
        self
    }
    /// Set colorspace for the image to be encoded
    pub fn set_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.colorspace = colorspace;
        self
    }
    /// Set the physical density, defaults to [`DEFAULT_PIXELS_PER_METER`]
    pub fn set_pixels_per_meter(mut self, density: u32) -> Self {
        self.pixels_per_meter = density;
        self
    }
}
