/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Grid layout of a canvas.
//!
//! Interior cells are all `width / cols` by `height / rows` pixels,
//! the last column ends at the canvas width and the last row ends at the
//! canvas height, so the integer division remainder lands on the trailing
//! edge and the cells always tile the canvas.
//!
//! A canvas narrower than the column count (or shorter than the row count)
//! gets zero sized interior cells, the trailing column (row) spans it all.

use crate::errors::PatternErrors;

/// Number of rows and columns of a grid
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize
}

impl GridShape {
    pub const fn new(rows: usize, cols: usize) -> GridShape {
        GridShape { rows, cols }
    }

    /// The most square grid able to hold `count` cells, never taller than wide.
    ///
    /// `cols = ceil(sqrt(count))`, `rows = ceil(count / cols)`
    ///
    /// ```
    /// use calraster_pattern::GridShape;
    /// assert_eq!(GridShape::for_colors(6), GridShape::new(2, 3));
    /// assert_eq!(GridShape::for_colors(1), GridShape::new(1, 1));
    /// ```
    pub fn for_colors(count: usize) -> GridShape {
        let count = count.max(1);

        let mut cols = 1;
        while cols * cols < count {
            cols += 1;
        }
        let rows = count.div_ceil(cols);

        GridShape { rows, cols }
    }

    pub const fn num_cells(&self) -> usize {
        self.rows * self.cols
    }
}

/// A rectangular region of the canvas, bounds are `[start, end)`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    pub row:     usize,
    pub col:     usize,
    pub x_start: usize,
    pub x_end:   usize,
    pub y_start: usize,
    pub y_end:   usize
}

impl Cell {
    pub const fn width(&self) -> usize {
        self.x_end - self.x_start
    }

    pub const fn height(&self) -> usize {
        self.y_end - self.y_start
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x_start && x < self.x_end && y >= self.y_start && y < self.y_end
    }
}

/// The partition of a canvas into a grid of cells
///
/// Cells are computed on demand, nothing but the grid parameters is stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CellLayout {
    width:       usize,
    height:      usize,
    shape:       GridShape,
    cell_width:  usize,
    cell_height: usize
}

impl CellLayout {
    /// Partition a `width` x `height` canvas into `shape`
    ///
    /// # Errors
    /// - [`PatternErrors::ZeroDimensions`]: width or height is zero
    /// - [`PatternErrors::InvalidGridShape`]: shape has zero rows or columns
    pub fn new(width: usize, height: usize, shape: GridShape) -> Result<CellLayout, PatternErrors> {
        if width == 0 || height == 0 {
            return Err(PatternErrors::ZeroDimensions(width, height));
        }
        if shape.rows == 0 || shape.cols == 0 {
            return Err(PatternErrors::InvalidGridShape {
                rows:   shape.rows,
                cols:   shape.cols,
                colors: 0
            });
        }
        Ok(CellLayout {
            width,
            height,
            shape,
            cell_width: width / shape.cols,
            cell_height: height / shape.rows
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Width of every cell except those in the last column
    pub const fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Height of every cell except those in the last row
    pub const fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// The cell at `row`, `col` or `None` if outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }
        let x_end = if col + 1 == self.shape.cols {
            self.width
        } else {
            (col + 1) * self.cell_width
        };
        let y_end = if row + 1 == self.shape.rows {
            self.height
        } else {
            (row + 1) * self.cell_height
        };

        Some(Cell {
            row,
            col,
            x_start: col * self.cell_width,
            x_end,
            y_start: row * self.cell_height,
            y_end
        })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.shape.cols;

        (0..self.shape.num_cells()).filter_map(move |pos| self.cell(pos / cols, pos % cols))
    }

    /// The cell containing pixel `(x, y)`, `None` outside the canvas
    pub fn cell_at(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        // trailing pixels past the last full cell belong to the last row/column,
        // so does everything when interior cells are empty
        let last_col = self.shape.cols - 1;
        let last_row = self.shape.rows - 1;

        let col = x.checked_div(self.cell_width).map_or(last_col, |c| c.min(last_col));
        let row = y.checked_div(self.cell_height).map_or(last_row, |r| r.min(last_row));

        self.cell(row, col)
    }
}
