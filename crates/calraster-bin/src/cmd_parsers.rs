/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;

pub mod global_options;

/// Arguments the user typed, in the order clap stores them
///
/// Defaults are left out so the log only shows what was asked for
pub fn fill_args(options: &ArgMatches) -> Vec<String> {
    options
        .ids()
        .filter(|id| options.value_source(id.as_str()) == Some(ValueSource::CommandLine))
        .map(|id| id.to_string())
        .collect()
}
