/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use calraster_core::bit_depth::BitDepth;
use calraster_core::colorspace::ColorSpace;
use calraster_pattern::{GridShape, Rgb};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What was written, printed with `--json`
pub struct Summary<'a> {
    pub file:       &'a Path,
    pub width:      usize,
    pub height:     usize,
    pub file_size:  usize,
    pub colorspace: ColorSpace,
    pub depth:      BitDepth,
    pub grid:       GridShape,
    pub colors:     &'a [Rgb],
    pub verified:   bool
}

struct Grid(GridShape);

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Grid", 2)?;

        state.serialize_field("rows", &self.0.rows)?;
        state.serialize_field("cols", &self.0.cols)?;

        state.end()
    }
}

impl<'a> Serialize for Summary<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Summary", 9)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("colorspace", &self.colorspace)?;
        state.serialize_field("depth", &self.depth)?;
        state.serialize_field("grid", &Grid(self.grid))?;
        state.serialize_field("colors", &self.colors)?;
        state.serialize_field("verified", &self.verified)?;

        state.end()
    }
}
