/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use calraster_bmp::{write_bmp_with_options, BmpDecoder, RowGeometry};
use calraster_pattern::{compose_with_options, ComposeOptions, Palette, PixelBuffer, Rgb};
use log::{debug, info};

use crate::cmd_args::PaletteKind;
use crate::cmd_parsers::global_options::{CmdOptions, PaletteSource};
use crate::errors::CalErrors;
use crate::palette_file::read_palette_file;
use crate::serde::Summary;

fn load_palette(source: &PaletteSource) -> Result<Palette, CalErrors> {
    match source {
        PaletteSource::BuiltIn(PaletteKind::Theoretical) => Ok(Palette::e6_theoretical()),
        PaletteSource::BuiltIn(PaletteKind::Measured) => Ok(Palette::e6_measured()),
        PaletteSource::File(path) => read_palette_file(path)
    }
}

fn select_colors(palette: &Palette, indices: Option<&[u8]>) -> Result<Vec<Rgb>, CalErrors> {
    match indices {
        Some(indices) => Ok(palette.select(indices)?),
        None => Ok(palette.calibration_colors())
    }
}

/// Compare the file on disk with what was composed, pixel by pixel
fn verify_written(pixels: &PixelBuffer, file: &[u8]) -> Result<(), CalErrors> {
    let mut decoder = BmpDecoder::new(file);
    let decoded = decoder.decode()?;

    let expected = (pixels.width(), pixels.height());
    let found = decoder.dimensions().unwrap_or_default();

    if found != expected {
        return Err(CalErrors::VerifyDimensions { expected, found });
    }
    if let Some(pos) = decoded
        .chunks_exact(3)
        .zip(pixels.as_bytes().chunks_exact(3))
        .position(|(a, b)| a != b)
    {
        return Err(CalErrors::VerifyMismatch {
            x: pos % pixels.width(),
            y: pos / pixels.width()
        });
    }
    info!("Verified {} pixels", pixels.width() * pixels.height());

    Ok(())
}

/// Run the whole pipeline, returning the JSON summary if one was asked for
pub(crate) fn create_and_exec_workflow_from_cmd(
    cmd_opts: &CmdOptions
) -> Result<Option<String>, CalErrors> {
    info!("Creating workflow from input");

    let palette = load_palette(&cmd_opts.palette)?;
    debug!(
        "Palette has {} usable entries, reserved {:?}",
        palette.usable().len(),
        palette.reserved()
    );

    let colors = select_colors(&palette, cmd_opts.colors.as_deref())?;
    info!("Drawing {} colors", colors.len());

    let mut compose_options = ComposeOptions::default();

    if let Some(background) = cmd_opts.background {
        compose_options = compose_options.set_background(background);
    }
    if let Some(shape) = cmd_opts.grid_shape {
        compose_options = compose_options.set_grid_shape(shape);
    }

    let pixels = compose_with_options(cmd_opts.width, cmd_opts.height, &colors, compose_options)?;
    let shape = pixels.layout().shape();

    info!(
        "Composed {}x{} canvas, grid {}x{}",
        pixels.width(),
        pixels.height(),
        shape.rows,
        shape.cols
    );

    write_bmp_with_options(&cmd_opts.output, pixels.as_bytes(), pixels.encoder_options())?;

    info!("Wrote {:?}", cmd_opts.output);

    if cmd_opts.verify {
        let file = std::fs::read(&cmd_opts.output)
            .map_err(|e| CalErrors::Io(cmd_opts.output.clone(), e))?;
        verify_written(&pixels, &file)?;
    }

    if !cmd_opts.json {
        return Ok(None);
    }
    // the encoder accepted these dimensions, so the geometry exists
    let file_size = RowGeometry::new(pixels.width(), pixels.height())
        .map(|geometry| geometry.file_size)
        .unwrap_or_default();

    let summary = Summary {
        file: &cmd_opts.output,
        width: pixels.width(),
        height: pixels.height(),
        file_size,
        colorspace: pixels.colorspace(),
        depth: pixels.depth(),
        grid: shape,
        colors: &colors,
        verified: cmd_opts.verify
    };
    let json = serde_json::to_string_pretty(&summary).map_err(CalErrors::Summary)?;

    Ok(Some(json))
}
