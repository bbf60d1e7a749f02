//! CIE L*a*b* relative to the D65 white point.
//!
//! # Formula
//!
//! ```text
//! f(t) = t^(1/3)               if t > EPSILON
//!      = (KAPPA * t + 16) / 116  otherwise
//!
//! L = 116 * f(Y) - 16          (KAPPA * Y below EPSILON)
//! a = 500 * (f(X/Xn) - f(Y))
//! b = 200 * (f(Y) - f(Z/Zn))
//! ```
//!
//! Y is used directly because the D65 white has Yn = 1.

use flare_core::{Color, Lab, Srgb, Xyz};

use crate::xyz::{rgb_to_xyz, xyz_to_rgb};

/// D65 reference white X.
pub const D65_XN: f32 = 0.950470;

/// D65 reference white Z.
pub const D65_ZN: f32 = 1.088830;

/// Threshold between the cube-root and linear segments.
pub const EPSILON: f32 = 0.008856;

/// Slope of the linear segment.
pub const KAPPA: f32 = 903.3;

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(ft: f32) -> f32 {
    let cube = ft * ft * ft;
    if cube > EPSILON {
        cube
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// XYZ to L*a*b*.
pub fn xyz_to_lab(c: Color<Xyz>) -> Color<Lab> {
    let [x, y, z] = c.to_array();
    let fx = f(x / D65_XN);
    let fy = f(y);
    let fz = f(z / D65_ZN);

    let l = if y > EPSILON { 116.0 * fy - 16.0 } else { KAPPA * y };
    Color::new(l, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// L*a*b* to XYZ.
pub fn lab_to_xyz(c: Color<Lab>) -> Color<Xyz> {
    let [l, a, b] = c.to_array();
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let y = if l > EPSILON * KAPPA { fy * fy * fy } else { l / KAPPA };
    Color::new(f_inv(fx) * D65_XN, y, f_inv(fz) * D65_ZN)
}

/// Gamma sRGB to L*a*b*, through XYZ.
#[inline]
pub fn rgb_to_lab(c: Color<Srgb>) -> Color<Lab> {
    xyz_to_lab(rgb_to_xyz(c))
}

/// L*a*b* to gamma sRGB, through XYZ.
#[inline]
pub fn lab_to_rgb(c: Color<Lab>) -> Color<Srgb> {
    xyz_to_rgb(lab_to_xyz(c))
}
