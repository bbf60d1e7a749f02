//! 3D vector type for color triplets.
//!
//! [`Vec3`] is the untagged form of a [`Color`]: matrices operate on it,
//! and conversion functions move between the two at their boundaries.
//!
//! # Usage
//!
//! ```rust
//! use flare_core::{Color, Xyz};
//! use flare_math::Vec3;
//!
//! let v = Vec3::new(1.0, 0.5, 0.25);
//! let xyz: Color<Xyz> = v.into_color();
//! assert_eq!(xyz.to_array(), [1.0, 0.5, 0.25]);
//! ```

use flare_core::{Color, ColorSpace};

/// A 3D vector for color triplets (RGB, XYZ, etc.).
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f32,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f32,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f32,
}

impl Vec3 {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Untagged copy of a color.
    #[inline]
    pub fn from_color<S: ColorSpace>(c: Color<S>) -> Self {
        let [x, y, z] = c.to_array();
        Self::new(x, y, z)
    }

    /// Tags the vector as a color in space `S`.
    #[inline]
    pub fn into_color<S: ColorSpace>(self) -> Color<S> {
        Color::new(self.x, self.y, self.z)
    }
}
