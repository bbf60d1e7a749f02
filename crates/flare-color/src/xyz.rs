//! sRGB <-> linear RGB <-> CIE XYZ.
//!
//! The gamma-encoded sRGB triple is decoded with the sRGB EOTF, then mapped
//! to XYZ with the fixed D65 sRGB matrix. The reverse path applies the
//! inverse matrix and the sRGB OETF.
//!
//! ```text
//! Color<Srgb> --eotf--> Color<LinearRgb> --SRGB_TO_XYZ--> Color<Xyz>
//!             <-oetf--                   <-XYZ_TO_SRGB--
//! ```
//!
//! # Reference
//!
//! Bruce Lindbloom, "RGB/XYZ Matrices", sRGB with D65 reference white.

use flare_core::{Color, LinearRgb, Srgb, Xyz};
use flare_math::{Mat3, Vec3};
use flare_transfer::srgb;

/// Linear sRGB to XYZ (D65).
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to linear sRGB.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Decodes gamma sRGB to linear RGB.
#[inline]
pub fn srgb_to_linear(c: Color<Srgb>) -> Color<LinearRgb> {
    Color::from_array(srgb::eotf_rgb(c.to_array()))
}

/// Encodes linear RGB to gamma sRGB.
#[inline]
pub fn linear_to_srgb(c: Color<LinearRgb>) -> Color<Srgb> {
    Color::from_array(srgb::oetf_rgb(c.to_array()))
}

/// Linear RGB to XYZ.
#[inline]
pub fn linear_to_xyz(c: Color<LinearRgb>) -> Color<Xyz> {
    (SRGB_TO_XYZ * Vec3::from_color(c)).into_color()
}

/// XYZ to linear RGB.
#[inline]
pub fn xyz_to_linear(c: Color<Xyz>) -> Color<LinearRgb> {
    (XYZ_TO_SRGB * Vec3::from_color(c)).into_color()
}

/// Gamma sRGB to XYZ.
///
/// # Example
///
/// ```rust
/// use flare_color::{rgb_to_xyz, xyz_to_rgb};
/// use flare_core::{Color, Srgb};
///
/// let white: Color<Srgb> = Color::splat(1.0);
/// let xyz = rgb_to_xyz(white);
/// assert!((xyz[1] - 1.0).abs() < 1e-5); // Y of white is 1
///
/// let back = xyz_to_rgb(xyz);
/// assert!((back[0] - 1.0).abs() < 1e-4);
/// ```
#[inline]
pub fn rgb_to_xyz(c: Color<Srgb>) -> Color<Xyz> {
    linear_to_xyz(srgb_to_linear(c))
}

/// XYZ to gamma sRGB. Inverse of [`rgb_to_xyz`] up to float rounding.
#[inline]
pub fn xyz_to_rgb(c: Color<Xyz>) -> Color<Srgb> {
    linear_to_srgb(xyz_to_linear(c))
}
