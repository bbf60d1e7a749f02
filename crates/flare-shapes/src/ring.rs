//! Thin circular band.
//!
//! # Profile
//!
//! ```text
//!  intensity
//!     1 |        ______________
//!       |       /              \
//!     0 |______/                \______
//!            inner  radius   outer        distance
//!            |<1px>|         |<1px>|
//! ```
//!
//! The band spans `radius - thickness/2 ..= radius + thickness/2`. Within
//! one pixel of either edge the color ramps linearly to zero.

use flare_core::{Color, ColorSpace, Error, Result};
use tracing::trace;

use crate::geometry::{CanvasSize, Point};
use crate::shape::{check_finite, Sample};

/// A ring of given radius and band thickness.
///
/// # Example
///
/// ```rust
/// use flare_core::{Color, LinearRgb};
/// use flare_shapes::{CanvasSize, Point, Ring, Sample};
///
/// let white: Color<LinearRgb> = Color::splat(1.0);
/// let ring = Ring::new(CanvasSize::new(100, 100), Point::new(50, 50), 20.0, 10.0, white);
///
/// assert!(ring.sample(50, 50).is_zero()); // center is inside the hole
/// assert_eq!(ring.sample(50, 70), white); // middle of the band
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring<S: ColorSpace> {
    canvas: CanvasSize,
    center: Point,
    radius: f32,
    thickness: f32,
    inner: f32,
    outer: f32,
    color: Color<S>,
}

impl<S: ColorSpace> Ring<S> {
    /// Creates a ring. Degenerate geometry is accepted; see [`Ring::validate`].
    pub fn new(
        canvas: CanvasSize,
        center: Point,
        radius: f32,
        thickness: f32,
        color: Color<S>,
    ) -> Self {
        let half = thickness / 2.0;
        trace!(x = center.x, y = center.y, radius, thickness, "Ring::new");
        Self {
            canvas,
            center,
            radius,
            thickness,
            inner: radius - half,
            outer: radius + half,
            color,
        }
    }

    /// Canvas the ring was built for.
    #[inline]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Center pixel.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the band's midline.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Band thickness.
    #[inline]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Inner edge radius.
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.inner
    }

    /// Outer edge radius.
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.outer
    }

    /// Base color.
    #[inline]
    pub fn color(&self) -> Color<S> {
        self.color
    }

    /// Checks for degenerate geometry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for non-finite values, a negative radius or
    /// thickness, or a thickness larger than the diameter.
    pub fn validate(&self) -> Result<()> {
        check_finite("radius", self.radius)?;
        check_finite("thickness", self.thickness)?;
        if !self.color.is_finite() {
            return Err(Error::invalid_parameter("color", "components must be finite"));
        }
        if self.radius < 0.0 {
            return Err(Error::invalid_parameter("radius", format!("{} is negative", self.radius)));
        }
        if self.thickness < 0.0 {
            return Err(Error::invalid_parameter(
                "thickness",
                format!("{} is negative", self.thickness),
            ));
        }
        if self.thickness > 2.0 * self.radius {
            return Err(Error::invalid_parameter(
                "thickness",
                format!("{} exceeds twice the radius {}", self.thickness, self.radius),
            ));
        }
        Ok(())
    }
}

impl<S: ColorSpace> Sample<S> for Ring<S> {
    #[inline]
    fn sample(&self, row: i64, col: i64) -> Color<S> {
        // Non-finite bounds make an empty ring rather than a lit plane
        if !self.inner.is_finite() || !self.outer.is_finite() {
            return Color::ZERO;
        }
        let d = self.center.distance_to(row, col);
        let d1 = d - self.inner;
        let d2 = d - self.outer;

        if d1 < 0.0 || d2 > 0.0 {
            return Color::ZERO;
        }
        if d1 < 1.0 {
            self.color * d1
        } else if d2 > -1.0 {
            self.color * -d2
        } else {
            self.color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use flare_core::LinearRgb;

    fn at_origin(radius: f32, thickness: f32) -> Ring<LinearRgb> {
        Ring::new(
            CanvasSize::default(),
            Point::default(),
            radius,
            thickness,
            Color::splat(1.0),
        )
    }

    fn ring() -> Ring<LinearRgb> {
        Ring::new(
            CanvasSize::new(100, 100),
            Point::new(50, 50),
            20.0,
            10.0,
            Color::new(1.0, 0.5, 0.25),
        )
    }

    #[test]
    fn test_edges() {
        let r = ring();
        assert_eq!(r.inner_radius(), 15.0);
        assert_eq!(r.outer_radius(), 25.0);
    }

    #[test]
    fn test_hole_is_transparent() {
        let r = ring();
        assert!(r.sample(50, 50).is_zero());
        assert!(r.sample(50, 64).is_zero()); // d = 14
    }

    #[test]
    fn test_mid_band_full() {
        let r = ring();
        assert_eq!(r.sample(50, 70), r.color());
        assert_eq!(r.sample(30, 50), r.color());
    }

    #[test]
    fn test_outside_transparent() {
        let r = ring();
        assert!(r.sample(50, 76).is_zero()); // d = 26
        assert!(r.sample(-1000, 5000).is_zero());
    }

    #[test]
    fn test_inner_edge_attenuated() {
        let r = ring();
        // (row 62, col 59): d = 15, exactly on the inner edge
        assert!(r.sample(62, 59).is_zero());

        let d = Point::new(50, 50).distance_to(61, 61);
        let got = r.sample(61, 61);
        assert!(d > 15.0 && d < 16.0);
        assert_abs_diff_eq!(got[0], d - 15.0, epsilon = 1e-5);
    }

    #[test]
    fn test_outer_edge_attenuated() {
        let r = ring();
        let d = Point::new(50, 50).distance_to(67, 67);
        assert!(d > 24.0 && d < 25.0);
        let got = r.sample(67, 67);
        assert_abs_diff_eq!(got[0], 25.0 - d, epsilon = 1e-5);
        assert_abs_diff_eq!(got[1], 0.5 * (25.0 - d), epsilon = 1e-5);
    }

    #[test]
    fn test_on_outer_edge_is_zero() {
        let r = ring();
        // d = 25 exactly: inside by the strict test but scaled by 0
        assert!(r.sample(50, 75).is_zero());
    }

    #[test]
    fn test_validate() {
        assert!(ring().validate().is_ok());

        let thick = at_origin(5.0, 11.0);
        assert!(matches!(thick.validate(), Err(Error::InvalidParameter { name: "thickness", .. })));

        let neg = at_origin(-1.0, 0.0);
        assert!(matches!(neg.validate(), Err(Error::InvalidParameter { name: "radius", .. })));

        let nan = at_origin(f32::NAN, 1.0);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_degenerate_never_panics() {
        let r = at_origin(5.0, -4.0);
        // inner 7 > outer 3: no pixel is inside
        for row in -10..=10 {
            for col in -10..=10 {
                assert!(r.sample(row, col).is_zero());
            }
        }
    }
}
