//! Conversions between any two color spaces.
//!
//! Typed colors convert with [`Convert::convert`]; untagged triples and
//! interleaved buffers use [`convert`] and [`convert_buffer`] with runtime
//! [`ColorSpaceId`]s.
//!
//! # Routing
//!
//! ```text
//!   Hsv --+
//!         +-- Srgb -- LinearRgb -- Xyz -- Lab
//!   Hsl --+
//! ```
//!
//! Pairs inside the sRGB family (Srgb, Hsv, Hsl) meet at gamma sRGB, XYZ and
//! Lab meet at XYZ, and everything else goes through linear RGB. Each
//! conversion takes the shortest path along the chain.
//!
//! # Example
//!
//! ```rust
//! use flare_color::Convert;
//! use flare_core::{Color, Hsv, Lab, Srgb};
//!
//! let orange: Color<Srgb> = Color::new(1.0, 0.5, 0.0);
//! let hsv: Color<Hsv> = orange.convert();
//! let lab: Color<Lab> = hsv.convert();
//! let back: Color<Srgb> = lab.convert();
//! assert!((back[1] - 0.5).abs() < 1e-3);
//! ```

use flare_core::{Color, ColorSpace, ColorSpaceId, Error, LinearRgb, Result};
use rayon::prelude::*;

use crate::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::hsv::{hsv_to_rgb, rgb_to_hsv};
use crate::lab::{lab_to_xyz, xyz_to_lab};
use crate::xyz::{linear_to_srgb, linear_to_xyz, srgb_to_linear, xyz_to_linear};

/// Conversion of a typed color into another space.
pub trait Convert {
    /// Converts to space `T`. Converting to the same space is the identity.
    fn convert<T: ColorSpace>(self) -> Color<T>;
}

impl<S: ColorSpace> Convert for Color<S> {
    #[inline]
    fn convert<T: ColorSpace>(self) -> Color<T> {
        Color::from_array(convert(self.to_array(), S::ID, T::ID))
    }
}

/// Converts one triple from `from` to `to`.
///
/// Never fails; out-of-range input produces out-of-range output.
pub fn convert(v: [f32; 3], from: ColorSpaceId, to: ColorSpaceId) -> [f32; 3] {
    if from == to {
        return v;
    }
    if is_srgb_family(from) && is_srgb_family(to) {
        return srgb_into(srgb_from(v, from), to);
    }
    if is_xyz_family(from) && is_xyz_family(to) {
        return xyz_into(xyz_from(v, from), to);
    }
    linear_into(linear_from(v, from), to)
}

/// Converts an interleaved 3-channel buffer in place, in parallel.
///
/// # Errors
///
/// [`Error::ChannelMismatch`] if the length is not a multiple of 3.
pub fn convert_buffer(data: &mut [f32], from: ColorSpaceId, to: ColorSpaceId) -> Result<()> {
    if data.len() % 3 != 0 {
        return Err(Error::channel_mismatch(3, data.len()));
    }
    if from == to {
        return Ok(());
    }

    data.par_chunks_mut(3).for_each(|px| {
        let out = convert([px[0], px[1], px[2]], from, to);
        px.copy_from_slice(&out);
    });
    Ok(())
}

fn is_srgb_family(id: ColorSpaceId) -> bool {
    matches!(id, ColorSpaceId::Srgb | ColorSpaceId::Hsv | ColorSpaceId::Hsl)
}

fn is_xyz_family(id: ColorSpaceId) -> bool {
    matches!(id, ColorSpaceId::Xyz | ColorSpaceId::Lab)
}

// Non-sRGB-family ids pass through unchanged.
fn srgb_from(v: [f32; 3], from: ColorSpaceId) -> [f32; 3] {
    match from {
        ColorSpaceId::Hsv => hsv_to_rgb(Color::from_array(v)).to_array(),
        ColorSpaceId::Hsl => hsl_to_rgb(Color::from_array(v)).to_array(),
        _ => v,
    }
}

fn srgb_into(v: [f32; 3], to: ColorSpaceId) -> [f32; 3] {
    match to {
        ColorSpaceId::Hsv => rgb_to_hsv(Color::from_array(v)).to_array(),
        ColorSpaceId::Hsl => rgb_to_hsl(Color::from_array(v)).to_array(),
        _ => v,
    }
}

// Non-XYZ-family ids pass through unchanged.
fn xyz_from(v: [f32; 3], from: ColorSpaceId) -> [f32; 3] {
    match from {
        ColorSpaceId::Lab => lab_to_xyz(Color::from_array(v)).to_array(),
        _ => v,
    }
}

fn xyz_into(v: [f32; 3], to: ColorSpaceId) -> [f32; 3] {
    match to {
        ColorSpaceId::Lab => xyz_to_lab(Color::from_array(v)).to_array(),
        _ => v,
    }
}

fn linear_from(v: [f32; 3], from: ColorSpaceId) -> [f32; 3] {
    match from {
        ColorSpaceId::LinearRgb => v,
        ColorSpaceId::Srgb | ColorSpaceId::Hsv | ColorSpaceId::Hsl => {
            srgb_to_linear(Color::from_array(srgb_from(v, from))).to_array()
        }
        ColorSpaceId::Xyz | ColorSpaceId::Lab => {
            xyz_to_linear(Color::from_array(xyz_from(v, from))).to_array()
        }
    }
}

fn linear_into(v: [f32; 3], to: ColorSpaceId) -> [f32; 3] {
    let c: Color<LinearRgb> = Color::from_array(v);
    match to {
        ColorSpaceId::LinearRgb => v,
        ColorSpaceId::Srgb | ColorSpaceId::Hsv | ColorSpaceId::Hsl => {
            srgb_into(linear_to_srgb(c).to_array(), to)
        }
        ColorSpaceId::Xyz | ColorSpaceId::Lab => xyz_into(linear_to_xyz(c).to_array(), to),
    }
}

/// Decodes a gamma sRGB triple to linear. Shorthand used by scene loading.
#[inline]
pub fn decode_srgb(v: [f32; 3]) -> [f32; 3] {
    srgb_to_linear(Color::from_array(v)).to_array()
}

/// Encodes a linear triple to gamma sRGB. Shorthand used by image output.
#[inline]
pub fn encode_srgb(v: [f32; 3]) -> [f32; 3] {
    linear_to_srgb(Color::from_array(v)).to_array()
}
