/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors raised while building palettes and composing patterns
///
/// All of them are raised before any pixel buffer is allocated
#[non_exhaustive]
pub enum PatternErrors {
    /// No colors were supplied, there is nothing to lay out
    EmptyColorSequence,
    /// Width or height of the canvas is zero
    ZeroDimensions(usize, usize),
    /// An explicit grid shape cannot hold the colors supplied
    InvalidGridShape {
        rows:   usize,
        cols:   usize,
        colors: usize
    },
    /// The pixel buffer size overflows
    TooLargeDimensions(usize, usize),
    /// A palette was built with the same index twice
    DuplicateIndex(u8),
    /// The index is present in the palette but reserved
    ReservedIndex(u8),
    /// The palette has no entry with this index
    UnknownIndex(u8)
}

impl Debug for PatternErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternErrors::EmptyColorSequence => {
                writeln!(f, "Empty color sequence, at least one color is needed")
            }
            PatternErrors::ZeroDimensions(width, height) => {
                writeln!(f, "Zero canvas dimensions {width}x{height}")
            }
            PatternErrors::InvalidGridShape { rows, cols, colors } => {
                writeln!(
                    f,
                    "Grid of {rows} rows and {cols} columns cannot hold {colors} colors"
                )
            }
            PatternErrors::TooLargeDimensions(width, height) => {
                writeln!(f, "Too large dimensions {width}x{height}")
            }
            PatternErrors::DuplicateIndex(index) => {
                writeln!(f, "Palette index {index} is defined more than once")
            }
            PatternErrors::ReservedIndex(index) => {
                writeln!(f, "Palette index {index} is reserved and cannot be used")
            }
            PatternErrors::UnknownIndex(index) => {
                writeln!(f, "Palette has no entry with index {index}")
            }
        }
    }
}

impl Display for PatternErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternErrors {}
