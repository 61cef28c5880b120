/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static PALETTE_HELP: &str = "Built-in palette to pick colors from

theoretical: pure sRGB primaries, the colors the panel is driven with
measured:    colors a reference panel actually shows, for previews

Index 4 is reserved on both and can never be selected.";

pub static PALETTE_FILE_HELP: &str = "Read the palette from a JSON file

The file lists entries and reserved indices, e.g

{\"entries\":[{\"index\":0,\"rgb\":[0,0,0]},{\"index\":1,\"rgb\":[255,255,255]}],\"reserved\":[4]}

Overrides --palette.";

pub static COLORS_HELP: &str = "Palette indices to draw, comma separated

Cells are filled left to right, top to bottom in the order given.
Defaults to every usable palette entry in ascending index order.";

pub static GRID_HELP: &str = "Force the grid shape

Must be given together with its counterpart, rows * cols must be at least the
number of colors. Without it the grid is ceil(sqrt(n)) columns wide.";
