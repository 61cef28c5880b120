/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};

use crate::cmd_args::arg_parsers::{parse_index_list, parse_rgb};
use crate::cmd_args::help_strings::{COLORS_HELP, GRID_HELP, PALETTE_FILE_HELP, PALETTE_HELP};

pub mod arg_parsers;
mod help_strings;

/// Built-in palettes selectable from the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PaletteKind {
    Theoretical,
    Measured
}

impl ValueEnum for PaletteKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Theoretical, Self::Measured]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Theoretical => PossibleValue::new("theoretical"),
            Self::Measured => PossibleValue::new("measured")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("calraster")
        .about("Write an e-paper calibration pattern as a 24 bit BMP")
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the bitmap to")
            .default_value("calibration.bmp"))
        .arg(Arg::new("width")
            .long("width")
            .help("Canvas width in pixels")
            .value_parser(value_parser!(usize))
            .default_value("800"))
        .arg(Arg::new("height")
            .long("height")
            .help("Canvas height in pixels")
            .value_parser(value_parser!(usize))
            .default_value("480"))
        .arg(Arg::new("palette")
            .long("palette")
            .help_heading("COLORS")
            .help("Built-in palette to use")
            .long_help(PALETTE_HELP)
            .value_parser(value_parser!(PaletteKind))
            .default_value("theoretical"))
        .arg(Arg::new("palette-file")
            .long("palette-file")
            .help_heading("COLORS")
            .help("JSON palette file, overrides --palette")
            .long_help(PALETTE_FILE_HELP))
        .arg(Arg::new("colors")
            .long("colors")
            .help_heading("COLORS")
            .help("Comma separated palette indices to draw")
            .long_help(COLORS_HELP)
            .value_parser(parse_index_list))
        .arg(Arg::new("background")
            .long("background")
            .help_heading("COLORS")
            .help("R,G,B color of cells left without a palette color")
            .value_parser(parse_rgb))
        .arg(Arg::new("rows")
            .long("rows")
            .help_heading("LAYOUT")
            .help("Number of grid rows")
            .long_help(GRID_HELP)
            .value_parser(value_parser!(usize))
            .requires("cols"))
        .arg(Arg::new("cols")
            .long("cols")
            .help_heading("LAYOUT")
            .help("Number of grid columns")
            .long_help(GRID_HELP)
            .value_parser(value_parser!(usize))
            .requires("rows"))
        .arg(Arg::new("verify")
            .long("verify")
            .action(ArgAction::SetTrue)
            .help("Read the written file back and compare every pixel"))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print a JSON summary of the written file"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the generated pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_consistent() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn defaults() {
        let matches = create_cmd_args().get_matches_from(["calraster"]);

        assert_eq!(matches.get_one::<String>("out").unwrap(), "calibration.bmp");
        assert_eq!(*matches.get_one::<usize>("width").unwrap(), 800);
        assert_eq!(*matches.get_one::<usize>("height").unwrap(), 480);
        assert_eq!(
            *matches.get_one::<PaletteKind>("palette").unwrap(),
            PaletteKind::Theoretical
        );
        assert!(matches.get_one::<Vec<u8>>("colors").is_none());
    }

    #[test]
    fn rows_need_cols() {
        let result = create_cmd_args().try_get_matches_from(["calraster", "--rows", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_palette_is_rejected() {
        let result = create_cmd_args().try_get_matches_from(["calraster", "--palette", "vivid"]);
        assert!(result.is_err());
    }
}
