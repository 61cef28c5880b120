/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use calraster_bmp::{BmpDecoderErrors, BmpEncoderErrors};
use calraster_pattern::PatternErrors;

/// Everything that can stop the command line tool
pub enum CalErrors {
    /// Bad palette, color selection or canvas
    Pattern(PatternErrors),
    /// Writing the bitmap failed
    Encode(BmpEncoderErrors),
    /// Reading the written bitmap back failed
    Decode(BmpDecoderErrors),
    /// The palette file could not be read
    Io(PathBuf, std::io::Error),
    /// The palette file is not valid JSON for a palette
    PaletteFile(PathBuf, serde_json::Error),
    /// The written file decodes to a different canvas size
    VerifyDimensions {
        expected: (usize, usize),
        found:    (usize, usize)
    },
    /// The written file does not decode to the composed pixels,
    /// carries the first mismatching pixel
    VerifyMismatch { x: usize, y: usize },
    /// The JSON summary could not be produced
    Summary(serde_json::Error)
}

impl Debug for CalErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(err) => writeln!(f, "{err:?}"),
            Self::Encode(err) => writeln!(f, "{err:?}"),
            Self::Decode(err) => writeln!(f, "Verification read failed: {err:?}"),
            Self::Io(path, err) => {
                writeln!(f, "Could not read {}: {err}", path.display())
            }
            Self::PaletteFile(path, err) => {
                writeln!(f, "Invalid palette file {}: {err}", path.display())
            }
            Self::VerifyDimensions { expected, found } => {
                writeln!(
                    f,
                    "Written file is {}x{}, expected {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::VerifyMismatch { x, y } => {
                writeln!(f, "Written file differs from the pattern at pixel ({x},{y})")
            }
            Self::Summary(err) => writeln!(f, "Could not serialize summary: {err}")
        }
    }
}

impl Display for CalErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CalErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Io(_, err) => Some(err),
            Self::PaletteFile(_, err) => Some(err),
            Self::Summary(err) => Some(err),
            _ => None
        }
    }
}

impl From<PatternErrors> for CalErrors {
    fn from(value: PatternErrors) -> Self {
        CalErrors::Pattern(value)
    }
}

impl From<BmpEncoderErrors> for CalErrors {
    fn from(value: BmpEncoderErrors) -> Self {
        CalErrors::Encode(value)
    }
}

impl From<BmpDecoderErrors> for CalErrors {
    fn from(value: BmpDecoderErrors) -> Self {
        CalErrors::Decode(value)
    }
}
