//! Typed color values.
//!
//! [`Color<S>`] is a three-component `f32` tuple tagged with its color
//! space at compile time. The tag is a zero-sized marker from
//! [`crate::colorspace`], so a `Color<Srgb>` and a `Color<LinearRgb>` have
//! the same layout but cannot be mixed by accident.
//!
//! # Design
//!
//! Colors are plain values: `Copy`, no shared ownership, no bounds checking.
//! Components may leave their nominal range (negative RGB after a matrix,
//! HDR intensities above 1.0); clamping is the caller's decision.
//!
//! ```
//! use flare_core::{Color, LinearRgb, Srgb};
//!
//! let warm: Color<LinearRgb> = Color::new(1.0, 0.6, 0.2);
//! let half = warm * 0.5;
//! assert_eq!(half.to_array(), [0.5, 0.3, 0.1]);
//!
//! // Retagging is explicit and does no arithmetic.
//! let raw: Color<Srgb> = warm.reinterpret();
//! assert_eq!(raw.to_array(), warm.to_array());
//! ```
//!
//! # Memory Layout
//!
//! `#[repr(C)]`, three consecutive `f32` values.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Index, Mul, Sub};

use crate::colorspace::ColorSpace;

/// A color value tagged with its color space.
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Color<S: ColorSpace> {
    values: [f32; 3],
    _space: PhantomData<S>,
}

impl<S: ColorSpace> Color<S> {
    /// The zero color. Shapes return it for "transparent".
    pub const ZERO: Self = Self::from_array([0.0; 3]);

    /// Creates a color from its three components.
    #[inline]
    pub const fn new(c0: f32, c1: f32, c2: f32) -> Self {
        Self::from_array([c0, c1, c2])
    }

    /// Creates a color with all components equal.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::from_array([v, v, v])
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(values: [f32; 3]) -> Self {
        Self {
            values,
            _space: PhantomData,
        }
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        self.values
    }

    /// Returns `true` if every component is exactly zero.
    ///
    /// Drivers use this to skip blending transparent shape samples.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.values == [0.0; 3]
    }

    /// Returns `true` if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Multiplies every component by `k`.
    #[inline]
    pub fn scale(self, k: f32) -> Self {
        self.map(|v| v * k)
    }

    /// Applies a function to each component.
    #[inline]
    pub fn map<F: Fn(f32) -> f32>(self, f: F) -> Self {
        let [a, b, c] = self.values;
        Self::new(f(a), f(b), f(c))
    }

    /// Combines two colors component-wise.
    #[inline]
    pub fn zip_with<F: Fn(f32, f32) -> f32>(self, other: Self, f: F) -> Self {
        let [a0, a1, a2] = self.values;
        let [b0, b1, b2] = other.values;
        Self::new(f(a0, b0), f(a1, b1), f(a2, b2))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, f32::max)
    }

    /// Retags the same numbers as another color space.
    ///
    /// No conversion happens. Use only when the values are known to already
    /// be in `T`, e.g. data read from an untagged source.
    #[inline]
    pub const fn reinterpret<T: ColorSpace>(self) -> Color<T> {
        Color::from_array(self.values)
    }
}

impl<S: ColorSpace> fmt::Debug for Color<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.values;
        write!(f, "Color<{}>({}, {}, {})", S::NAME, a, b, c)
    }
}

impl<S: ColorSpace> From<[f32; 3]> for Color<S> {
    #[inline]
    fn from(values: [f32; 3]) -> Self {
        Self::from_array(values)
    }
}

impl<S: ColorSpace> From<Color<S>> for [f32; 3] {
    #[inline]
    fn from(color: Color<S>) -> Self {
        color.values
    }
}

impl<S: ColorSpace> Index<usize> for Color<S> {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.values[i]
    }
}

impl<S: ColorSpace> Add for Color<S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<S: ColorSpace> AddAssign for Color<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: ColorSpace> Sub for Color<S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<S: ColorSpace> Mul<f32> for Color<S> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorspace::{Hsv, LinearRgb, Srgb};

    #[test]
    fn test_zero_is_transparent() {
        assert!(Color::<LinearRgb>::ZERO.is_zero());
        assert!(!Color::<LinearRgb>::new(0.0, 0.0, 1e-9).is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a: Color<LinearRgb> = Color::new(0.5, 0.25, 1.0);
        let b: Color<LinearRgb> = Color::splat(0.5);
        assert_eq!((a + b).to_array(), [1.0, 0.75, 1.5]);
        assert_eq!((a - b).to_array(), [0.0, -0.25, 0.5]);
        assert_eq!((a * 2.0).to_array(), [1.0, 0.5, 2.0]);
        assert_eq!(a.max(b).to_array(), [0.5, 0.5, 1.0]);

        let mut acc = Color::<LinearRgb>::ZERO;
        acc += a;
        acc += a;
        assert_eq!(acc.to_array(), [1.0, 0.5, 2.0]);
    }

    #[test]
    fn test_finite() {
        let c: Color<Srgb> = Color::new(-0.5, 0.5, 3.0);
        assert!(c.is_finite());
        assert!(!Color::<Srgb>::new(f32::NAN, 0.0, 0.0).is_finite());
    }

    #[test]
    fn test_reinterpret_keeps_values() {
        let c: Color<Hsv> = Color::new(0.1, 0.2, 0.3);
        let r: Color<Srgb> = c.reinterpret();
        assert_eq!(r[0], 0.1);
        assert_eq!(r[2], 0.3);
    }

    #[test]
    fn test_debug_names_space() {
        let c: Color<Srgb> = Color::new(1.0, 0.0, 0.0);
        assert_eq!(format!("{:?}", c), "Color<sRGB>(1, 0, 0)");
    }
}
