//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Breakpoints
//!
//! Decoding switches to the power segment at 0.04045 (strictly below is
//! linear); encoding uses the linear segment up to and including 0.0031308.
//! Both segments meet within `f32` rounding at the breakpoint, so the
//! choice of strict or non-strict comparison only matters for bit-exact
//! reproduction.
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Values outside pass through unclamped; negative
//!   inputs always take the linear segment.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Decode threshold: encoded values below this use the linear segment.
pub const DECODE_THRESHOLD: f32 = 0.04045;

/// Encode threshold: linear values at or below this use the linear segment.
pub const ENCODE_THRESHOLD: f32 = 0.0031308;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f32 = 12.92;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V < 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use flare_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v < DECODE_THRESHOLD {
        v / LINEAR_SLOPE
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use flare_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= ENCODE_THRESHOLD {
        l * LINEAR_SLOPE
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(eotf)
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-5, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_segments_meet() {
        let below = DECODE_THRESHOLD / LINEAR_SLOPE;
        let above = ((DECODE_THRESHOLD + 0.055) / 1.055).powf(2.4);
        assert!((below - above).abs() < 1e-6);

        let lin = ENCODE_THRESHOLD * LINEAR_SLOPE;
        let pow = 1.055 * ENCODE_THRESHOLD.powf(1.0 / 2.4) - 0.055;
        assert!((lin - pow).abs() < 1e-5);
    }

    #[test]
    fn test_negative_stays_linear() {
        assert_eq!(eotf(-0.1), -0.1 / 12.92);
        assert_eq!(oetf(-0.01), -0.01 * 12.92);
    }

    #[test]
    fn test_rgb_helpers() {
        let rgb = [0.0, 0.5, 1.0];
        let back = oetf_rgb(eotf_rgb(rgb));
        for (a, b) in rgb.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-5);
        }
    }
}
