/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end scenarios, compose then encode then decode
//!
//! Scenarios live in `tests/scenarios.json`, each one names a canvas,
//! a palette selection and what the written file must look like.

use std::path::{Path, PathBuf};

use calraster_pattern::{compose_with_options, ComposeOptions, GridShape, Palette, PixelBuffer};
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod bmp;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPalette {
    Theoretical,
    Measured
}

impl JsonPalette {
    pub fn to_palette(self) -> Palette {
        match self {
            Self::Theoretical => Palette::e6_theoretical(),
            Self::Measured => Palette::e6_measured()
        }
    }
}

/// A pixel the decoded file must have
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Sample {
    pub x:   usize,
    pub y:   usize,
    pub rgb: [u8; 3]
}

#[derive(Clone, Deserialize, Debug)]
pub struct Scenario {
    pub name:      String,
    pub width:     usize,
    pub height:    usize,
    pub palette:   JsonPalette,
    /// Palette indices, all usable entries when missing
    pub colors:    Option<Vec<u8>>,
    /// Forced `[rows, cols]`
    pub grid:      Option<[usize; 2]>,
    pub file_size: usize,
    pub samples:   Vec<Sample>,
    pub comment:   Option<String>
}

impl Scenario {
    pub fn compose(&self) -> PixelBuffer {
        let palette = self.palette.to_palette();
        let colors = match &self.colors {
            Some(indices) => palette.select(indices).unwrap(),
            None => palette.calibration_colors()
        };
        let mut options = ComposeOptions::default();

        if let Some([rows, cols]) = self.grid {
            options = options.set_grid_shape(GridShape::new(rows, cols));
        }
        compose_with_options(self.width, self.height, &colors, options).unwrap()
    }
}

pub fn scenarios() -> Vec<Scenario> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scenarios.json");
    let json_file = std::fs::read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// A scratch file path unique to this test process
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("calraster-tests-{}-{}", std::process::id(), name))
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
