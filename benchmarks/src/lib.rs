/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use calraster_pattern::{Palette, Rgb};

/// Canvas sizes benchmarked, the reference panel plus odd widths
/// that need row padding
pub const CANVAS_SIZES: [(usize, usize); 3] = [(800, 480), (1599, 1200), (79, 4000)];

/// Black, white, yellow, red, blue, green
pub fn reference_colors() -> Vec<Rgb> {
    Palette::e6_theoretical().calibration_colors()
}
