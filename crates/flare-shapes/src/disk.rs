//! Filled circles: [`SolidDisk`] with a one-pixel anti-aliased rim, and
//! [`GradientDisk`] with a power-law falloff.

use flare_core::{Color, ColorSpace, Error, Result};
use tracing::trace;

use crate::geometry::{CanvasSize, Point};
use crate::shape::{check_finite, Sample};

/// A filled circle at full intensity, fading to zero over the last pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidDisk<S: ColorSpace> {
    canvas: CanvasSize,
    center: Point,
    radius: f32,
    color: Color<S>,
}

impl<S: ColorSpace> SolidDisk<S> {
    /// Creates a solid disk.
    pub fn new(canvas: CanvasSize, center: Point, radius: f32, color: Color<S>) -> Self {
        trace!(x = center.x, y = center.y, radius, "SolidDisk::new");
        Self {
            canvas,
            center,
            radius,
            color,
        }
    }

    /// Canvas the disk was built for.
    #[inline]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Center pixel.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
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
    /// [`Error::InvalidParameter`] for a negative or non-finite radius or a
    /// non-finite color.
    pub fn validate(&self) -> Result<()> {
        check_finite("radius", self.radius)?;
        check_color(self.color)?;
        check_radius(self.radius)
    }
}

impl<S: ColorSpace> Sample<S> for SolidDisk<S> {
    #[inline]
    fn sample(&self, row: i64, col: i64) -> Color<S> {
        if !self.radius.is_finite() {
            return Color::ZERO;
        }
        let overshoot = self.center.distance_to(row, col) - self.radius;
        if overshoot > 0.0 {
            Color::ZERO
        } else if overshoot > -1.0 {
            self.color * -overshoot
        } else {
            self.color
        }
    }
}

/// A filled circle whose intensity falls off as `(1 - d/radius)^gamma`.
///
/// `gamma = 1` is a linear cone; larger values concentrate the light at the
/// center. The falloff already reaches zero at the rim, so there is no
/// separate anti-aliasing term.
///
/// # Example
///
/// ```rust
/// use flare_core::{Color, LinearRgb};
/// use flare_shapes::{CanvasSize, GradientDisk, Point, Sample};
///
/// let glow = GradientDisk::new(
///     CanvasSize::new(64, 64),
///     Point::new(32, 32),
///     10.0,
///     Color::<LinearRgb>::splat(1.0),
///     2.0,
/// );
/// assert_eq!(glow.sample(32, 32)[0], 1.0);
/// assert!((glow.sample(32, 37)[0] - 0.25).abs() < 1e-6);
/// assert!(glow.sample(32, 42).is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDisk<S: ColorSpace> {
    canvas: CanvasSize,
    center: Point,
    radius: f32,
    color: Color<S>,
    gamma: f32,
}

impl<S: ColorSpace> GradientDisk<S> {
    /// Creates a gradient disk with falloff exponent `gamma`.
    pub fn new(
        canvas: CanvasSize,
        center: Point,
        radius: f32,
        color: Color<S>,
        gamma: f32,
    ) -> Self {
        trace!(x = center.x, y = center.y, radius, gamma, "GradientDisk::new");
        Self {
            canvas,
            center,
            radius,
            color,
            gamma,
        }
    }

    /// Canvas the disk was built for.
    #[inline]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Center pixel.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Base color at the center.
    #[inline]
    pub fn color(&self) -> Color<S> {
        self.color
    }

    /// Falloff exponent.
    #[inline]
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Intensity factor at distance `d` from the center.
    ///
    /// Zero outside the disk, for a non-positive or non-finite radius, and
    /// for a negative or NaN gamma.
    #[inline]
    pub fn falloff(&self, d: f32) -> f32 {
        let bad_radius = !self.radius.is_finite() || self.radius <= 0.0;
        let bad_gamma = self.gamma.is_nan() || self.gamma < 0.0;
        if bad_radius || bad_gamma || d > self.radius {
            0.0
        } else {
            (1.0 - d / self.radius).powf(self.gamma)
        }
    }

    /// Checks for degenerate geometry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for a negative or non-finite radius, a
    /// negative or non-finite gamma, or a non-finite color.
    pub fn validate(&self) -> Result<()> {
        check_finite("radius", self.radius)?;
        check_finite("gamma", self.gamma)?;
        check_color(self.color)?;
        check_radius(self.radius)?;
        if self.gamma < 0.0 {
            return Err(Error::invalid_parameter("gamma", format!("{} is negative", self.gamma)));
        }
        Ok(())
    }
}

impl<S: ColorSpace> Sample<S> for GradientDisk<S> {
    #[inline]
    fn sample(&self, row: i64, col: i64) -> Color<S> {
        let d = self.center.distance_to(row, col);
        let k = self.falloff(d);
        if k == 0.0 {
            Color::ZERO
        } else {
            self.color * k
        }
    }
}

fn check_radius(radius: f32) -> Result<()> {
    if radius < 0.0 {
        return Err(Error::invalid_parameter("radius", format!("{} is negative", radius)));
    }
    Ok(())
}

fn check_color<S: ColorSpace>(color: Color<S>) -> Result<()> {
    if !color.is_finite() {
        return Err(Error::invalid_parameter("color", "components must be finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use flare_core::LinearRgb;

    const RED: Color<LinearRgb> = Color::new(1.0, 0.0, 0.0);

    fn solid() -> SolidDisk<LinearRgb> {
        SolidDisk::new(CanvasSize::new(64, 64), Point::new(20, 20), 10.0, RED)
    }

    fn gradient(gamma: f32) -> GradientDisk<LinearRgb> {
        GradientDisk::new(CanvasSize::new(64, 64), Point::new(20, 20), 10.0, RED, gamma)
    }

    #[test]
    fn test_solid_center_full() {
        assert_eq!(solid().sample(20, 20), RED);
    }

    #[test]
    fn test_solid_interior_full() {
        let d = solid();
        // distance 9: one pixel clear of the rim
        assert_eq!(d.sample(20, 29), RED);
        // distance sqrt(80) ~ 8.94
        assert_eq!(d.sample(24, 28), RED);
    }

    #[test]
    fn test_solid_rim_attenuated() {
        let d = solid();
        // distance sqrt(97) ~ 9.85: last pixel before the rim
        let dist = Point::new(20, 20).distance_to(24, 29);
        let got = d.sample(24, 29);
        assert!(dist > 9.0 && dist < 10.0);
        assert_abs_diff_eq!(got[0], 10.0 - dist, epsilon = 1e-5);
        assert_eq!(got[1], 0.0);
    }

    #[test]
    fn test_solid_outside() {
        let d = solid();
        assert!(d.sample(20, 30).is_zero()); // exactly on the rim
        assert!(d.sample(20, 31).is_zero());
        // distance sqrt(113) ~ 10.63
        assert!(d.sample(27, 28).is_zero());
    }

    #[test]
    fn test_gradient_profile() {
        let g = gradient(1.0);
        assert_eq!(g.sample(20, 20), RED);
        assert_abs_diff_eq!(g.sample(20, 25)[0], 0.5, epsilon = 1e-6);
        assert!(g.sample(20, 30).is_zero());
        assert!(g.sample(20, 45).is_zero());
    }

    #[test]
    fn test_gradient_monotonic() {
        for gamma in [0.5, 1.0, 2.0, 4.0] {
            let g = gradient(gamma);
            let mut prev = f32::INFINITY;
            for col in 20..40 {
                let v = g.sample(20, col)[0];
                assert!(v <= prev, "gamma {} col {}", gamma, col);
                prev = v;
            }
        }
    }

    #[test]
    fn test_gradient_zero_radius() {
        let g = GradientDisk::new(CanvasSize::default(), Point::default(), 0.0, RED, 1.0);
        assert!(g.sample(0, 0).is_zero());
        assert!(g.sample(0, 1).is_zero());
    }

    #[test]
    fn test_validate() {
        assert!(solid().validate().is_ok());
        assert!(gradient(2.0).validate().is_ok());

        let neg = SolidDisk::new(CanvasSize::default(), Point::default(), -3.0, RED);
        assert!(neg.validate().is_err());
        assert!(neg.sample(0, 0).is_zero());

        assert!(matches!(
            gradient(-1.0).validate(),
            Err(Error::InvalidParameter { name: "gamma", .. })
        ));
        assert!(gradient(f32::INFINITY).validate().is_err());
    }
}
