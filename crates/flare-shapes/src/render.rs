//! Compositing shapes into a [`Canvas`].
//!
//! Every pixel of the canvas is queried against every shape in order, and
//! each non-zero sample is blended into the pixel with a [`BlendMode`].
//! Zero samples are transparent and leave the pixel untouched in every mode.
//!
//! # Example
//!
//! ```rust
//! use flare_core::{Canvas, Color, LinearRgb};
//! use flare_shapes::{render, BlendMode, CanvasSize, Point, Shape, SolidDisk};
//!
//! let mut canvas: Canvas<LinearRgb> = Canvas::new(32, 32).unwrap();
//! let size = CanvasSize::of(&canvas);
//! let shapes: Vec<Shape<LinearRgb>> = vec![
//!     SolidDisk::new(size, Point::new(16, 16), 8.0, Color::splat(0.5)).into(),
//!     SolidDisk::new(size, Point::new(16, 16), 4.0, Color::splat(0.5)).into(),
//! ];
//!
//! render(&mut canvas, &shapes, BlendMode::Add);
//! assert_eq!(canvas.get(16, 16).unwrap()[0], 1.0);
//! ```

use std::fmt;
use std::str::FromStr;

use flare_core::{Canvas, Color, ColorSpace, Error};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::shape::{Sample, Shape};

/// How a shape sample combines with the pixel beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BlendMode {
    /// Sum of the two colors.
    #[default]
    Add,
    /// Per-channel maximum.
    Max,
    /// Sample replaces the pixel.
    Over,
    /// `1 - (1 - a) * (1 - b)` per channel.
    Screen,
}

impl BlendMode {
    /// All modes, in declaration order.
    pub const ALL: [BlendMode; 4] = [
        BlendMode::Add,
        BlendMode::Max,
        BlendMode::Over,
        BlendMode::Screen,
    ];

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            BlendMode::Add => "add",
            BlendMode::Max => "max",
            BlendMode::Over => "over",
            BlendMode::Screen => "screen",
        }
    }

    /// Blends `src` onto `dst`. A zero `src` returns `dst` unchanged.
    #[inline]
    pub fn apply<S: ColorSpace>(self, dst: Color<S>, src: Color<S>) -> Color<S> {
        if src.is_zero() {
            return dst;
        }
        match self {
            BlendMode::Add => dst + src,
            BlendMode::Max => dst.max(src),
            BlendMode::Over => src,
            BlendMode::Screen => dst.zip_with(src, |a, b| 1.0 - (1.0 - a) * (1.0 - b)),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        BlendMode::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| Error::invalid_parameter("blend", format!("unknown blend mode '{}'", s)))
    }
}

/// Composites one pixel: `base` with every shape's sample blended in order.
#[inline]
pub fn composite_pixel<S: ColorSpace>(
    shapes: &[Shape<S>],
    row: i64,
    col: i64,
    base: Color<S>,
    blend: BlendMode,
) -> Color<S> {
    shapes
        .iter()
        .fold(base, |acc, shape| blend.apply(acc, shape.sample(row, col)))
}

#[cfg(feature = "parallel")]
fn render_row<S: ColorSpace>(
    shapes: &[Shape<S>],
    row: i64,
    pixels: &mut [Color<S>],
    blend: BlendMode,
) {
    let active: Vec<&Shape<S>> = shapes.iter().filter(|s| !s.misses_row(row)).collect();
    if active.is_empty() {
        return;
    }
    for (col, px) in pixels.iter_mut().enumerate() {
        let col = col as i64;
        *px = active
            .iter()
            .fold(*px, |acc, shape| blend.apply(acc, shape.sample(row, col)));
    }
}

/// Renders `shapes` into `canvas`, blending over its current contents.
///
/// Rows are processed in parallel when the `parallel` feature is on. The
/// output is identical to [`render_sequential`].
pub fn render<S: ColorSpace>(canvas: &mut Canvas<S>, shapes: &[Shape<S>], blend: BlendMode) {
    debug!(
        width = canvas.width(),
        height = canvas.height(),
        shapes = shapes.len(),
        %blend,
        "render"
    );
    for (i, shape) in shapes.iter().enumerate() {
        trace!(index = i, kind = shape.kind(), extent = shape.extent(), "shape");
    }

    #[cfg(feature = "parallel")]
    canvas
        .par_rows_mut()
        .for_each(|(row, pixels)| render_row(shapes, row as i64, pixels, blend));

    #[cfg(not(feature = "parallel"))]
    render_sequential(canvas, shapes, blend);
}

/// Single-threaded per-pixel reference loop.
pub fn render_sequential<S: ColorSpace>(
    canvas: &mut Canvas<S>,
    shapes: &[Shape<S>],
    blend: BlendMode,
) {
    let width = canvas.width() as usize;
    if width == 0 {
        return;
    }
    for (i, px) in canvas.pixels_mut().iter_mut().enumerate() {
        let row = (i / width) as i64;
        let col = (i % width) as i64;
        *px = composite_pixel(shapes, row, col, *px, blend);
    }
}
