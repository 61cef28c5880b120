/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fill a canvas with one color per grid cell.

use alloc::vec;
use alloc::vec::Vec;

use calraster_core::bit_depth::BitDepth;
use calraster_core::colorspace::ColorSpace;
use calraster_core::log::{debug, trace};
use calraster_core::options::EncoderOptions;

use crate::color::Rgb;
use crate::errors::PatternErrors;
use crate::layout::{CellLayout, GridShape};

/// Color of cells left over when the colors do not fill the grid,
/// white matches an erased e-paper panel
pub const DEFAULT_BACKGROUND: Rgb = Rgb::WHITE;

/// Options for [`compose_with_options`]
#[derive(Copy, Clone, Debug)]
pub struct ComposeOptions {
    background: Rgb,
    shape:      Option<GridShape>
}

impl Default for ComposeOptions {
    fn default() -> Self {
        ComposeOptions {
            background: DEFAULT_BACKGROUND,
            shape:      None
        }
    }
}

impl ComposeOptions {
    pub const fn background(&self) -> Rgb {
        self.background
    }
    /// The forced grid shape, `None` means derive it from the number of colors
    pub const fn grid_shape(&self) -> Option<GridShape> {
        self.shape
    }
    /// Set the color of cells without a color
    pub fn set_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }
    /// Force a grid shape instead of [`GridShape::for_colors`]
    pub fn set_grid_shape(mut self, shape: GridShape) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// A dense, top-down, row-major RGB buffer
///
/// Pixel `(x, y)` lives at `(y * width + x) * 3`.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    layout: CellLayout,
    data:   Vec<u8>
}

impl PixelBuffer {
    pub const fn width(&self) -> usize {
        self.layout.width()
    }

    pub const fn height(&self) -> usize {
        self.layout.height()
    }

    /// Channel order of [`as_bytes`](Self::as_bytes), always RGB
    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGB
    }

    pub const fn depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// The grid the buffer was composed with
    pub const fn layout(&self) -> &CellLayout {
        &self.layout
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Color at `(x, y)`, `None` outside the canvas
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let start = (y * self.width() + x) * 3;
        let px = self.data.get(start..start + 3)?;

        Some(Rgb::new(px[0], px[1], px[2]))
    }

    /// Options describing this buffer to an encoder
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::new(self.width(), self.height(), self.colorspace(), self.depth())
    }
}

/// Compose `colors` on a `width` x `height` canvas with default options.
///
/// The grid shape comes from [`GridShape::for_colors`], cells are filled in
/// row-major order, cells past the last color get [`DEFAULT_BACKGROUND`].
///
/// # Errors
/// See [`compose_with_options`]
pub fn compose(width: usize, height: usize, colors: &[Rgb]) -> Result<PixelBuffer, PatternErrors> {
    compose_with_options(width, height, colors, ComposeOptions::default())
}

/// Compose `colors` on a `width` x `height` canvas
///
/// # Errors
/// - [`PatternErrors::EmptyColorSequence`]: `colors` is empty
/// - [`PatternErrors::InvalidGridShape`]: a forced shape has fewer cells than colors
/// - [`PatternErrors::ZeroDimensions`]: see [`CellLayout::new`]
/// - [`PatternErrors::TooLargeDimensions`]: the buffer size overflows
///
/// All checks run before the buffer is allocated.
pub fn compose_with_options(
    width: usize, height: usize, colors: &[Rgb], options: ComposeOptions
) -> Result<PixelBuffer, PatternErrors> {
    if colors.is_empty() {
        return Err(PatternErrors::EmptyColorSequence);
    }
    let shape = match options.grid_shape() {
        Some(shape) => {
            if shape.rows == 0 || shape.cols == 0 || shape.num_cells() < colors.len() {
                return Err(PatternErrors::InvalidGridShape {
                    rows:   shape.rows,
                    cols:   shape.cols,
                    colors: colors.len()
                });
            }
            shape
        }
        None => GridShape::for_colors(colors.len())
    };
    let layout = CellLayout::new(width, height, shape)?;

    let size = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or(PatternErrors::TooLargeDimensions(width, height))?;

    debug!(
        "Composing {} colors on {}x{} canvas, grid {}x{}",
        colors.len(),
        width,
        height,
        shape.rows,
        shape.cols
    );

    let mut data = vec![0_u8; size];
    let stride = width * 3;

    // cells tile the canvas, so each pixel is written exactly once
    for (pos, cell) in layout.cells().enumerate() {
        let color = colors.get(pos).copied().unwrap_or(options.background());
        let channels = color.to_array();

        trace!(
            "Cell ({},{}) x:{}..{} y:{}..{} -> {:?}",
            cell.row,
            cell.col,
            cell.x_start,
            cell.x_end,
            cell.y_start,
            cell.y_end,
            color
        );

        for row in data.chunks_exact_mut(stride).take(cell.y_end).skip(cell.y_start) {
            row[cell.x_start * 3..cell.x_end * 3]
                .chunks_exact_mut(3)
                .for_each(|px| px.copy_from_slice(&channels));
        }
    }

    Ok(PixelBuffer { layout, data })
}

#[cfg(test)]
mod tests {
    use crate::{compose, compose_with_options, ComposeOptions, GridShape, PatternErrors, Rgb};

    fn reference_colors() -> [Rgb; 6] {
        [
            Rgb::BLACK,
            Rgb::WHITE,
            Rgb::YELLOW,
            Rgb::RED,
            Rgb::BLUE,
            Rgb::GREEN
        ]
    }

    #[test]
    fn panel_corners() {
        let pixels = compose(800, 480, &reference_colors()).unwrap();

        assert_eq!(pixels.layout().shape(), GridShape::new(2, 3));
        assert_eq!(pixels.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(pixels.pixel(799, 0), Some(Rgb::YELLOW));
        assert_eq!(pixels.pixel(0, 479), Some(Rgb::RED));
        assert_eq!(pixels.pixel(799, 479), Some(Rgb::GREEN));
        // boundaries between interior cells
        assert_eq!(pixels.pixel(265, 0), Some(Rgb::BLACK));
        assert_eq!(pixels.pixel(266, 0), Some(Rgb::WHITE));
        assert_eq!(pixels.pixel(531, 239), Some(Rgb::WHITE));
        assert_eq!(pixels.pixel(532, 239), Some(Rgb::YELLOW));
        assert_eq!(pixels.pixel(532, 240), Some(Rgb::GREEN));
        assert_eq!(pixels.pixel(800, 0), None);
    }

    #[test]
    fn every_pixel_matches_its_cell() {
        let colors = reference_colors();
        let pixels = compose(79, 31, &colors).unwrap();
        let layout = *pixels.layout();

        for y in 0..31 {
            for x in 0..79 {
                let cell = layout.cell_at(x, y).unwrap();
                let expected = colors[cell.row * layout.shape().cols + cell.col];
                assert_eq!(pixels.pixel(x, y), Some(expected), "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn unfilled_cells_get_background() {
        let colors = [Rgb::RED, Rgb::GREEN, Rgb::BLUE];
        let pixels = compose(10, 10, &colors).unwrap();
        // three colors make a 2x2 grid, the bottom right cell is unused
        assert_eq!(pixels.pixel(9, 9), Some(Rgb::WHITE));

        let options = ComposeOptions::default().set_background(Rgb::new(1, 2, 3));
        let pixels = compose_with_options(10, 10, &colors, options).unwrap();
        assert_eq!(pixels.pixel(9, 9), Some(Rgb::new(1, 2, 3)));
        assert_eq!(pixels.pixel(0, 9), Some(Rgb::BLUE));
    }

    #[test]
    fn forced_shape() {
        let options = ComposeOptions::default().set_grid_shape(GridShape::new(1, 6));
        let pixels = compose_with_options(60, 5, &reference_colors(), options).unwrap();

        assert_eq!(pixels.pixel(59, 4), Some(Rgb::GREEN));
        assert_eq!(pixels.pixel(30, 0), Some(Rgb::RED));

        let too_small = ComposeOptions::default().set_grid_shape(GridShape::new(1, 2));
        assert!(matches!(
            compose_with_options(60, 5, &reference_colors(), too_small),
            Err(PatternErrors::InvalidGridShape {
                rows:   1,
                cols:   2,
                colors: 6
            })
        ));
    }

    #[test]
    fn canvas_smaller_than_grid_is_still_filled() {
        // 2 pixels wide, 3 columns: only the trailing column is visible
        let pixels = compose(2, 480, &reference_colors()).unwrap();
        assert_eq!(pixels.as_bytes().len(), 2 * 480 * 3);
        assert_eq!(pixels.pixel(0, 0), Some(Rgb::YELLOW));
        assert_eq!(pixels.pixel(1, 479), Some(Rgb::GREEN));

        // 1 pixel tall, 2 rows: only the bottom row is visible
        let pixels = compose(5, 1, &reference_colors()).unwrap();
        assert_eq!(pixels.as_bytes().len(), 5 * 3);
        assert_eq!(pixels.pixel(0, 0), Some(Rgb::RED));
        assert_eq!(pixels.pixel(1, 0), Some(Rgb::BLUE));
        assert_eq!(pixels.pixel(4, 0), Some(Rgb::GREEN));
    }

    #[test]
    fn empty_colors_are_rejected() {
        assert!(matches!(
            compose(800, 480, &[]),
            Err(PatternErrors::EmptyColorSequence)
        ));
        assert!(matches!(
            compose(0, 480, &[Rgb::RED]),
            Err(PatternErrors::ZeroDimensions(0, 480))
        ));
    }

    #[test]
    fn buffer_layout_is_rgb_top_down() {
        let pixels = compose(2, 2, &[Rgb::RED, Rgb::GREEN, Rgb::BLUE, Rgb::BLACK]).unwrap();

        assert_eq!(
            pixels.as_bytes(),
            &[255_u8, 0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0]
        );
        let options = pixels.encoder_options();
        assert_eq!((options.width(), options.height()), (2, 2));
    }
}
