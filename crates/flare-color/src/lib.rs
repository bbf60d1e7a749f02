//! # flare-color
//!
//! Conversions between the color spaces a flare artist works in.
//!
//! - **sRGB / linear RGB** - gamma decode and encode
//! - **CIE XYZ** - fixed D65 sRGB matrices
//! - **CIE L\*a\*b\*** - relative to the D65 white
//! - **HSV / HSL** - cylindrical views of gamma sRGB
//!
//! # Architecture
//!
//! ```text
//!                  flare-color
//!                       |
//!       +---------------+---------------+
//!       |               |               |
//! flare-transfer    flare-math      flare-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use flare_color::{rgb_to_hsv, hsv_to_rgb, Convert};
//! use flare_core::{Color, LinearRgb, Srgb};
//!
//! let picked: Color<Srgb> = Color::new(1.0, 0.8, 0.3);
//!
//! // Direct functions
//! let hsv = rgb_to_hsv(picked);
//! let same = hsv_to_rgb(hsv);
//! assert!((same[1] - 0.8).abs() < 1e-5);
//!
//! // Any-to-any through the trait
//! let linear: Color<LinearRgb> = picked.convert();
//! assert!(linear[1] < picked[1]);
//! ```
//!
//! # Conventions
//!
//! | Space | Components | Nominal range |
//! |-------|------------|---------------|
//! | sRGB | R, G, B (gamma) | [0, 1] |
//! | Linear RGB | R, G, B | [0, 1] |
//! | XYZ | X, Y, Z | Y in [0, 1] |
//! | Lab | L, a, b | L in [0, 100] |
//! | HSV | H, S, V | [0, 1] each |
//! | HSL | H, S, L | [0, 1] each |
//!
//! Conversions never clamp and never fail. Hue is a fraction of a turn.
//!
//! # Dependencies
//!
//! - [`flare-core`] - `Color` and the color space markers
//! - [`flare-math`] - `Mat3` for the RGB/XYZ matrices
//! - [`flare-transfer`] - sRGB transfer curve
//! - [`rayon`] - parallel buffer conversion
//!
//! # Used By
//!
//! - `flare-shapes` - shape colors given in any space
//! - `flare-cli` - scene color parsing and PNG encoding

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod xyz;

pub use convert::{convert, convert_buffer, decode_srgb, encode_srgb, Convert};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use lab::{lab_to_rgb, lab_to_xyz, rgb_to_lab, xyz_to_lab};
pub use xyz::{linear_to_srgb, linear_to_xyz, rgb_to_xyz, srgb_to_linear, xyz_to_linear, xyz_to_rgb};

// Re-export sub-crates for convenience
pub use flare_math as math;
pub use flare_transfer as transfer;

/// Prelude with commonly used items.
pub mod prelude {
    pub use crate::Convert;
    pub use crate::{hsl_to_rgb, hsv_to_rgb, lab_to_rgb, rgb_to_hsl, rgb_to_hsv, rgb_to_lab};
    pub use crate::{rgb_to_xyz, xyz_to_rgb};
    pub use flare_core::{Color, ColorSpaceId, Hsl, Hsv, Lab, LinearRgb, Srgb, Xyz};
}
