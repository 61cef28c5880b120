/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use calraster_pattern::Rgb;

fn parse_u8(value: &str, what: &str) -> Result<u8, String> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("Invalid {what} {value:?}, expected an integer between 0 and 255"))
}

/// Parse `0,1,2,3` into palette indices
pub fn parse_index_list(s: &str) -> Result<Vec<u8>, String> {
    // an empty string still yields one (invalid) item, the list is never empty
    s.split(',')
        .map(|index| parse_u8(index, "palette index"))
        .collect()
}

/// Parse `R,G,B` into a color
pub fn parse_rgb(s: &str) -> Result<Rgb, String> {
    let channels = s
        .split(',')
        .map(|channel| parse_u8(channel, "channel"))
        .collect::<Result<Vec<u8>, String>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
        _ => Err(format!(
            "Invalid color {s:?}, expected three comma separated channels R,G,B"
        ))
    }
}
