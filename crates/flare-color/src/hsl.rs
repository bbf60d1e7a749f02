//! HSL (hue, saturation, lightness) over gamma sRGB.

use flare_core::{Color, Hsl, Srgb};
use flare_math::wrap_unit;

use crate::hsv::hue;

/// Gamma sRGB to HSL.
///
/// Lightness is the midpoint of the largest and smallest channel. Achromatic
/// input yields hue and saturation 0.
pub fn rgb_to_hsl(c: Color<Srgb>) -> Color<Hsl> {
    let rgb = c.to_array();
    let [r, g, b] = rgb;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Color::new(0.0, 0.0, l);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    Color::new(hue(rgb, max, delta), s, l)
}

/// HSL to gamma sRGB.
///
/// # Example
///
/// ```rust
/// use flare_color::hsl_to_rgb;
/// use flare_core::Color;
///
/// // Half-lightness, full saturation, hue 0 is pure red
/// let rgb = hsl_to_rgb(Color::new(0.0, 1.0, 0.5));
/// assert_eq!(rgb[0], 1.0);
/// assert!(rgb[1].abs() < 1e-6 && rgb[2].abs() < 1e-6);
/// ```
pub fn hsl_to_rgb(c: Color<Hsl>) -> Color<Srgb> {
    let [h, s, l] = c.to_array();
    if s == 0.0 {
        return Color::splat(l);
    }

    let v2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - s * l };
    let v1 = 2.0 * l - v2;

    Color::new(
        hue_to_channel(v1, v2, h + 1.0 / 3.0),
        hue_to_channel(v1, v2, h),
        hue_to_channel(v1, v2, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(v1: f32, v2: f32, h: f32) -> f32 {
    let h = wrap_unit(h);
    if 6.0 * h < 1.0 {
        v1 + (v2 - v1) * 6.0 * h
    } else if 2.0 * h < 1.0 {
        v2
    } else if 3.0 * h < 2.0 {
        v1 + (v2 - v1) * (2.0 / 3.0 - h) * 6.0
    } else {
        v1
    }
}
