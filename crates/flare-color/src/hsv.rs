//! HSV (hue, saturation, value) over gamma sRGB.
//!
//! All three components live in [0, 1]; hue is a fraction of a full turn
//! (0 = red, 1/3 = green, 2/3 = blue).

use flare_core::{Color, Hsv, Srgb};

/// Hue of an RGB triple given its max and chroma (`max - min`).
///
/// Shared by HSV and HSL. `delta` must be non-zero.
pub(crate) fn hue(rgb: [f32; 3], max: f32, delta: f32) -> f32 {
    let [r, g, b] = rgb;
    let del_r = ((max - r) / 6.0 + delta / 2.0) / delta;
    let del_g = ((max - g) / 6.0 + delta / 2.0) / delta;
    let del_b = ((max - b) / 6.0 + delta / 2.0) / delta;

    let h = if r == max {
        del_b - del_g
    } else if g == max {
        1.0 / 3.0 + del_r - del_b
    } else {
        2.0 / 3.0 + del_g - del_r
    };
    flare_math::wrap_unit(h)
}

/// Gamma sRGB to HSV.
///
/// Achromatic input (all channels equal) yields hue and saturation 0.
///
/// # Example
///
/// ```rust
/// use flare_color::rgb_to_hsv;
/// use flare_core::Color;
///
/// let hsv = rgb_to_hsv(Color::new(0.0, 0.0, 1.0));
/// assert!((hsv[0] - 2.0 / 3.0).abs() < 1e-6);
/// assert_eq!(hsv[1], 1.0);
/// assert_eq!(hsv[2], 1.0);
/// ```
pub fn rgb_to_hsv(c: Color<Srgb>) -> Color<Hsv> {
    let rgb = c.to_array();
    let [r, g, b] = rgb;
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    if delta == 0.0 {
        return Color::new(0.0, 0.0, max);
    }
    Color::new(hue(rgb, max, delta), delta / max, max)
}

/// HSV to gamma sRGB.
///
/// Saturation 0 yields gray at the value level regardless of hue.
pub fn hsv_to_rgb(c: Color<Hsv>) -> Color<Srgb> {
    let [h, s, v] = c.to_array();
    if s == 0.0 {
        return Color::splat(v);
    }

    let mut sector = h * 6.0;
    if sector == 6.0 {
        sector = 0.0;
    }
    let i = sector.floor();
    let frac = sector - i;

    let v1 = v * (1.0 - s);
    let v2 = v * (1.0 - s * frac);
    let v3 = v * (1.0 - s * (1.0 - frac));

    match i as i32 {
        0 => Color::new(v, v3, v1),
        1 => Color::new(v2, v, v1),
        2 => Color::new(v1, v, v3),
        3 => Color::new(v1, v2, v),
        4 => Color::new(v3, v1, v),
        _ => Color::new(v, v1, v2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb(c: Color<Srgb>, expected: [f32; 3]) {
        for k in 0..3 {
            assert_abs_diff_eq!(c[k], expected[k], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsv(Color::new(1.0, 0.0, 0.0));
        assert_eq!(red.to_array(), [0.0, 1.0, 1.0]);

        let green = rgb_to_hsv(Color::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(green[0], 1.0 / 3.0, epsilon = 1e-6);

        let magenta = rgb_to_hsv(Color::new(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(magenta[0], 5.0 / 6.0, epsilon = 1e-6);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let hsv = rgb_to_hsv(Color::splat(0.4));
        assert_eq!(hsv.to_array(), [0.0, 0.0, 0.4]);
        assert_rgb(hsv_to_rgb(Color::new(0.7, 0.0, 0.4)), [0.4, 0.4, 0.4]);
    }

    #[test]
    fn test_hue_one_is_red() {
        assert_rgb(hsv_to_rgb(Color::new(1.0, 1.0, 1.0)), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_each_sector() {
        let cases = [
            (0.5 / 6.0, [1.0, 0.5, 0.0]),
            (1.5 / 6.0, [0.5, 1.0, 0.0]),
            (2.5 / 6.0, [0.0, 1.0, 0.5]),
            (3.5 / 6.0, [0.0, 0.5, 1.0]),
            (4.5 / 6.0, [0.5, 0.0, 1.0]),
            (5.5 / 6.0, [1.0, 0.0, 0.5]),
        ];
        for (h, rgb) in cases {
            assert_rgb(hsv_to_rgb(Color::new(h, 1.0, 1.0)), rgb);
        }
    }

    #[test]
    fn test_roundtrip_chromatic() {
        let samples = [
            [0.9, 0.2, 0.1],
            [0.1, 0.8, 0.3],
            [0.25, 0.5, 0.75],
            [0.6, 0.1, 0.6],
            [1.0, 0.5, 0.0],
        ];
        for rgb in samples {
            let back = hsv_to_rgb(rgb_to_hsv(Color::from_array(rgb)));
            assert_rgb(back, rgb);
        }
    }
}
