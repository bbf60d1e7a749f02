//! Color space definitions and compile-time color space safety.
//!
//! This module provides the [`ColorSpace`] trait and zero-sized marker
//! types for every representation the flare pipeline works with.
//!
//! # Design
//!
//! A [`Color`](crate::Color) is parameterized by one of these markers, so a
//! gamma-encoded sRGB triple cannot be handed to a function expecting linear
//! RGB without an explicit conversion. The markers carry no data and cost
//! nothing at runtime.
//!
//! # Supported Color Spaces
//!
//! | Marker | Components | Nominal range |
//! |--------|------------|---------------|
//! | [`Srgb`] | gamma-encoded R, G, B | [0, 1] |
//! | [`LinearRgb`] | linear-light R, G, B (sRGB primaries) | [0, 1] |
//! | [`Xyz`] | CIE X, Y, Z (D65) | Y in [0, 1] |
//! | [`Lab`] | CIE L*, a*, b* (D65) | L in [0, 100] |
//! | [`Hsv`] | hue, saturation, value | [0, 1] each |
//! | [`Hsl`] | hue, saturation, lightness | [0, 1] each |
//!
//! Hue is normalized to [0, 1), not degrees.
//!
//! # Runtime Identification
//!
//! [`ColorSpaceId`] mirrors the markers at runtime for code that picks the
//! space from user input (command line, scene files):
//!
//! ```
//! use flare_core::{ColorSpace, ColorSpaceId, Lab};
//!
//! let id: ColorSpaceId = "lab".parse().unwrap();
//! assert_eq!(id, Lab::ID);
//! assert_eq!(id.name(), "CIE L*a*b*");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Trait for color space marker types.
///
/// # Implementing Custom Color Spaces
///
/// Custom markers must map to one of the runtime identifiers, since every
/// numeric conversion is defined on the fixed set of [`ColorSpaceId`]s.
///
/// ```
/// use flare_core::{ColorSpace, ColorSpaceId};
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// pub struct DisplayRgb;
///
/// impl ColorSpace for DisplayRgb {
///     const NAME: &'static str = "Display RGB";
///     const ID: ColorSpaceId = ColorSpaceId::Srgb;
/// }
/// ```
pub trait ColorSpace: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the color space.
    const NAME: &'static str;

    /// Runtime identifier of the color space.
    const ID: ColorSpaceId;
}

/// Gamma-encoded sRGB, the display and file storage encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Srgb;

impl ColorSpace for Srgb {
    const NAME: &'static str = "sRGB";
    const ID: ColorSpaceId = ColorSpaceId::Srgb;
}

/// Linear-light RGB with sRGB primaries.
///
/// The working space for shapes and canvases: intensities add and scale
/// physically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinearRgb;

impl ColorSpace for LinearRgb {
    const NAME: &'static str = "Linear sRGB";
    const ID: ColorSpaceId = ColorSpaceId::LinearRgb;
}

/// CIE 1931 XYZ tristimulus values, D65 referenced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Xyz;

impl ColorSpace for Xyz {
    const NAME: &'static str = "CIE XYZ";
    const ID: ColorSpaceId = ColorSpaceId::Xyz;
}

/// CIE L*a*b*, D65 referenced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Lab;

impl ColorSpace for Lab {
    const NAME: &'static str = "CIE L*a*b*";
    const ID: ColorSpaceId = ColorSpaceId::Lab;
}

/// Hue, saturation, value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsv;

impl ColorSpace for Hsv {
    const NAME: &'static str = "HSV";
    const ID: ColorSpaceId = ColorSpaceId::Hsv;
}

/// Hue, saturation, lightness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl;

impl ColorSpace for Hsl {
    const NAME: &'static str = "HSL";
    const ID: ColorSpaceId = ColorSpaceId::Hsl;
}

// ============================================================================
// Runtime identifier
// ============================================================================

/// Runtime identifier for a color space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpaceId {
    /// Gamma-encoded sRGB.
    Srgb,
    /// Linear-light RGB.
    LinearRgb,
    /// CIE XYZ.
    Xyz,
    /// CIE L*a*b*.
    Lab,
    /// Hue, saturation, value.
    Hsv,
    /// Hue, saturation, lightness.
    Hsl,
}

impl ColorSpaceId {
    /// Every identifier, in declaration order.
    pub const ALL: [ColorSpaceId; 6] = [
        Self::Srgb,
        Self::LinearRgb,
        Self::Xyz,
        Self::Lab,
        Self::Hsv,
        Self::Hsl,
    ];

    /// Human-readable name, matching the marker's [`ColorSpace::NAME`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Srgb => Srgb::NAME,
            Self::LinearRgb => LinearRgb::NAME,
            Self::Xyz => Xyz::NAME,
            Self::Lab => Lab::NAME,
            Self::Hsv => Hsv::NAME,
            Self::Hsl => Hsl::NAME,
        }
    }

    /// Short lowercase key used in scene files and on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::LinearRgb => "linear",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" | "rgb" => Ok(Self::Srgb),
            "linear" | "linear-rgb" | "linear_rgb" | "lin" => Ok(Self::LinearRgb),
            "xyz" => Ok(Self::Xyz),
            "lab" => Ok(Self::Lab),
            "hsv" => Ok(Self::Hsv),
            "hsl" => Ok(Self::Hsl),
            _ => Err(Error::UnknownColorSpace(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorspace_names() {
        assert_eq!(Srgb::NAME, "sRGB");
        assert_eq!(Lab::NAME, "CIE L*a*b*");
        assert_eq!(ColorSpaceId::Hsv.name(), Hsv::NAME);
    }

    #[test]
    fn test_parse_roundtrip() {
        for id in ColorSpaceId::ALL {
            let parsed: ColorSpaceId = id.key().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("RGB".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Srgb);
        assert_eq!(" Linear-RGB ".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::LinearRgb);
        assert!(matches!(
            "cmyk".parse::<ColorSpaceId>(),
            Err(Error::UnknownColorSpace(s)) if s == "cmyk"
        ));
    }
}
