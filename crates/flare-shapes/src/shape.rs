//! The closed family of flare shapes and their shared query capability.

use flare_core::{Color, ColorSpace, Error, Result};

use crate::disk::{GradientDisk, SolidDisk};
use crate::geometry::{CanvasSize, Point};
use crate::ring::Ring;

/// Per-pixel color query.
///
/// `sample` is pure: the result depends only on the shape's construction
/// parameters and the coordinate. Any `(row, col)` is valid, including
/// coordinates off the canvas; pixels outside the footprint return
/// [`Color::ZERO`].
pub trait Sample<S: ColorSpace> {
    /// Color contribution at pixel `(row, col)`.
    fn sample(&self, row: i64, col: i64) -> Color<S>;
}

/// Any flare shape.
///
/// # Example
///
/// ```rust
/// use flare_core::{Color, LinearRgb};
/// use flare_shapes::{CanvasSize, Point, Sample, Shape, SolidDisk};
///
/// let disk: Shape<LinearRgb> =
///     SolidDisk::new(CanvasSize::new(32, 32), Point::new(16, 16), 4.0, Color::splat(1.0)).into();
/// assert_eq!(disk.kind(), "disk");
/// assert_eq!(disk.sample(16, 16)[0], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<S: ColorSpace> {
    /// Thin circular band.
    Ring(Ring<S>),
    /// Filled circle with an anti-aliased rim.
    SolidDisk(SolidDisk<S>),
    /// Filled circle with power-law falloff.
    GradientDisk(GradientDisk<S>),
}

impl<S: ColorSpace> Shape<S> {
    /// Short lowercase name, as used in scene files.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Ring(_) => "ring",
            Shape::SolidDisk(_) => "disk",
            Shape::GradientDisk(_) => "gradient",
        }
    }

    /// Center pixel.
    pub fn center(&self) -> Point {
        match self {
            Shape::Ring(s) => s.center(),
            Shape::SolidDisk(s) => s.center(),
            Shape::GradientDisk(s) => s.center(),
        }
    }

    /// Canvas the shape was built for.
    pub fn canvas(&self) -> CanvasSize {
        match self {
            Shape::Ring(s) => s.canvas(),
            Shape::SolidDisk(s) => s.canvas(),
            Shape::GradientDisk(s) => s.canvas(),
        }
    }

    /// Base color.
    pub fn color(&self) -> Color<S> {
        match self {
            Shape::Ring(s) => s.color(),
            Shape::SolidDisk(s) => s.color(),
            Shape::GradientDisk(s) => s.color(),
        }
    }

    /// Distance from the center beyond which every sample is zero.
    pub fn extent(&self) -> f32 {
        match self {
            Shape::Ring(s) => s.outer_radius(),
            Shape::SolidDisk(s) => s.radius(),
            Shape::GradientDisk(s) => s.radius(),
        }
    }

    /// Returns `true` if the row cannot intersect the shape.
    ///
    /// Used by the renderer to skip work; never changes results. Keeps a
    /// one-pixel margin so float rounding in the distance cannot matter.
    #[inline]
    pub fn misses_row(&self, row: i64) -> bool {
        let dy = row.saturating_sub(self.center().y as i64) as f32;
        dy.abs() > self.extent() + 1.0
    }

    /// Checks the geometry. See each variant's `validate`.
    pub fn validate(&self) -> Result<()> {
        match self {
            Shape::Ring(s) => s.validate(),
            Shape::SolidDisk(s) => s.validate(),
            Shape::GradientDisk(s) => s.validate(),
        }
    }

    /// Returns `true` if [`Shape::validate`] would fail.
    pub fn is_degenerate(&self) -> bool {
        self.validate().is_err()
    }
}

impl<S: ColorSpace> Sample<S> for Shape<S> {
    #[inline]
    fn sample(&self, row: i64, col: i64) -> Color<S> {
        match self {
            Shape::Ring(s) => s.sample(row, col),
            Shape::SolidDisk(s) => s.sample(row, col),
            Shape::GradientDisk(s) => s.sample(row, col),
        }
    }
}

impl<S: ColorSpace> From<Ring<S>> for Shape<S> {
    fn from(s: Ring<S>) -> Self {
        Shape::Ring(s)
    }
}

impl<S: ColorSpace> From<SolidDisk<S>> for Shape<S> {
    fn from(s: SolidDisk<S>) -> Self {
        Shape::SolidDisk(s)
    }
}

impl<S: ColorSpace> From<GradientDisk<S>> for Shape<S> {
    fn from(s: GradientDisk<S>) -> Self {
        Shape::GradientDisk(s)
    }
}

pub(crate) fn check_finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, format!("{} is not finite", value)))
    }
}
