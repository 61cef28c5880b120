/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use calraster_pattern::{GridShape, Rgb};
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_args::PaletteKind;
use crate::cmd_parsers::fill_args;

/// Where palette colors come from
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PaletteSource {
    BuiltIn(PaletteKind),
    File(PathBuf)
}

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub output:     PathBuf,
    pub width:      usize,
    pub height:     usize,
    pub palette:    PaletteSource,
    pub colors:     Option<Vec<u8>>,
    pub background: Option<Rgb>,
    pub grid_shape: Option<GridShape>,
    pub verify:     bool,
    pub json:       bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            output:     PathBuf::from("calibration.bmp"),
            width:      800,
            height:     480,
            palette:    PaletteSource::BuiltIn(PaletteKind::Theoretical),
            colors:     None,
            background: None,
            grid_shape: None,
            verify:     false,
            json:       false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    info!("Arguments given: {:?}", fill_args(options));

    if let Some(out) = options.get_one::<String>("out") {
        cmd_options.output = PathBuf::from(out);
    }
    if let Some(width) = options.get_one::<usize>("width") {
        cmd_options.width = *width;
    }
    if let Some(height) = options.get_one::<usize>("height") {
        cmd_options.height = *height;
    }
    if let Some(kind) = options.get_one::<PaletteKind>("palette") {
        cmd_options.palette = PaletteSource::BuiltIn(*kind);
    }
    if let Some(file) = options.get_one::<String>("palette-file") {
        info!("Reading palette from {:?}, ignoring --palette", file);
        cmd_options.palette = PaletteSource::File(PathBuf::from(file));
    }
    cmd_options.colors = options.get_one::<Vec<u8>>("colors").cloned();
    cmd_options.background = options.get_one::<Rgb>("background").copied();

    // clap makes sure rows and cols come together
    if let (Some(rows), Some(cols)) = (
        options.get_one::<usize>("rows"),
        options.get_one::<usize>("cols")
    ) {
        cmd_options.grid_shape = Some(GridShape::new(*rows, *cols));
    }
    cmd_options.verify = options.get_flag("verify");
    cmd_options.json = options.get_flag("json");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
