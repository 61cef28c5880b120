/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! JSON palette files
//!
//! ```json
//! {
//!   "entries": [{ "index": 0, "rgb": [0, 0, 0] }, { "index": 1, "rgb": [255, 255, 255] }],
//!   "reserved": [4]
//! }
//! ```
use std::path::Path;

use calraster_pattern::{Palette, PaletteEntry};
use log::debug;
use serde::Deserialize;

use crate::errors::CalErrors;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteFile {
    entries:  Vec<PaletteEntry>,
    #[serde(default)]
    reserved: Vec<u8>
}

impl PaletteFile {
    pub fn into_palette(self) -> Result<Palette, CalErrors> {
        Ok(Palette::new(&self.entries, &self.reserved)?)
    }
}

pub fn read_palette_file(path: &Path) -> Result<Palette, CalErrors> {
    let contents = std::fs::read(path).map_err(|e| CalErrors::Io(path.to_path_buf(), e))?;

    let file: PaletteFile = serde_json::from_slice(&contents)
        .map_err(|e| CalErrors::PaletteFile(path.to_path_buf(), e))?;

    debug!(
        "Palette file {:?}: {} entries, reserved {:?}",
        path,
        file.entries.len(),
        file.reserved
    );
    file.into_palette()
}
