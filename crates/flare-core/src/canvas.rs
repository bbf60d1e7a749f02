//! Frame buffer for rendered flares.
//!
//! [`Canvas`] is an owned, row-major grid of [`Color`] values with the
//! color space tracked at compile time, like the colors it stores.
//!
//! # Memory Layout
//!
//! ```text
//! pixels: [c(0,0) c(0,1) ... c(0,w-1)]   <- row 0
//!         [c(1,0) c(1,1) ... c(1,w-1)]   <- row 1
//!         ...
//! ```
//!
//! Coordinates are `(row, col)` with row = y growing downwards, matching the
//! shape query convention. Accessors take signed coordinates so that
//! drivers can sample outside the canvas without casting; out-of-range
//! reads return `None` instead of panicking.
//!
//! # Usage
//!
//! ```rust
//! use flare_core::{Canvas, Color, LinearRgb};
//!
//! let mut canvas: Canvas<LinearRgb> = Canvas::new(64, 32).unwrap();
//! canvas.set(10, 20, Color::new(1.0, 0.5, 0.0)).unwrap();
//! assert_eq!(canvas.get(10, 20).unwrap().to_array(), [1.0, 0.5, 0.0]);
//! assert!(canvas.get(-1, 0).is_none());
//! ```

use rayon::prelude::*;

use crate::color::Color;
use crate::colorspace::ColorSpace;
use crate::error::{Error, Result};

/// Owned frame buffer of colors in space `S`.
#[derive(Clone, PartialEq)]
pub struct Canvas<S: ColorSpace> {
    width: u32,
    height: u32,
    pixels: Vec<Color<S>>,
}

impl<S: ColorSpace> Canvas<S> {
    /// Creates a canvas filled with the zero color.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if a dimension is zero or the pixel
    /// count overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Color::ZERO)
    }

    /// Creates a canvas filled with `background`.
    pub fn filled(width: u32, height: u32, background: Color<S>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero size"));
        }
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))?;

        Ok(Self {
            width,
            height,
            pixels: vec![background; count],
        })
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color<S>] {
        &self.pixels
    }

    /// Mutable access to all pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color<S>] {
        &mut self.pixels
    }

    #[inline]
    fn index_of(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i64 || col >= self.width as i64 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Returns the color at `(row, col)`, or `None` outside the canvas.
    #[inline]
    pub fn get(&self, row: i64, col: i64) -> Option<Color<S>> {
        self.index_of(row, col).map(|i| self.pixels[i])
    }

    /// Writes the color at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] outside the canvas.
    pub fn set(&mut self, row: i64, col: i64, color: Color<S>) -> Result<()> {
        let i = self
            .index_of(row, col)
            .ok_or_else(|| Error::out_of_bounds(row, col, self.width, self.height))?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Iterates rows in parallel, yielding `(row_index, row_pixels)`.
    ///
    /// Rows are disjoint slices, so per-pixel writers need no locking.
    pub fn par_rows_mut(
        &mut self,
    ) -> impl IndexedParallelIterator<Item = (usize, &mut [Color<S>])> {
        self.pixels
            .par_chunks_mut(self.width as usize)
            .enumerate()
    }

    /// Iterates `(row, col, color)` over every pixel.
    pub fn enumerate(&self) -> impl Iterator<Item = (i64, i64, Color<S>)> + '_ {
        let w = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i / w) as i64, (i % w) as i64, *c))
    }

    /// Builds a canvas in another space by mapping every pixel in parallel.
    pub fn map_into<T, F>(&self, f: F) -> Canvas<T>
    where
        T: ColorSpace,
        F: Fn(Color<S>) -> Color<T> + Sync + Send,
    {
        Canvas {
            width: self.width,
            height: self.height,
            pixels: self.pixels.par_iter().map(|&c| f(c)).collect(),
        }
    }

    /// Copies the pixels out as interleaved `[c0, c1, c2, c0, ...]` values.
    pub fn to_interleaved(&self) -> Vec<f32> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}

impl<S: ColorSpace> std::fmt::Debug for Canvas<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("space", &S::NAME)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
