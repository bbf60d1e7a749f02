//! # flare-core
//!
//! Core types for procedural lens-flare rendering.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`ColorSpace`] - Trait and marker types for compile-time color space safety
//! - [`Color`] - Three-component color value tagged with its space
//! - [`Canvas`] - Row-major frame buffer of colors
//! - [`Error`] - Errors for the few fallible edges (allocation, validation, parsing)
//!
//! ## Design Philosophy
//!
//! The core principle is **compile-time color space safety**. A gamma-encoded
//! sRGB color cannot be passed where linear RGB is expected without an
//! explicit conversion:
//!
//! ```ignore
//! let picked: Color<Srgb> = Color::new(1.0, 0.8, 0.3);
//! let linear: Color<LinearRgb> = picked.convert(); // flare_color::Convert
//! // let bad: Color<LinearRgb> = picked;        // Compile error!
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! flare-core (this crate)
//!    ^
//!    |
//!    +-- flare-math (Vec3, Mat3)
//!    +-- flare-transfer (sRGB transfer curve)
//!    +-- flare-color (color space conversions)
//!    +-- flare-shapes (ring / disk evaluators, rendering)
//!    +-- flare-cli (scene driver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod canvas;
pub mod color;
pub mod colorspace;
pub mod error;

// Re-exports for convenience
pub use canvas::Canvas;
pub use color::Color;
pub use colorspace::*;
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use flare_core::prelude::*;
///
/// let c: Color<LinearRgb> = Color::splat(0.5);
/// assert_eq!(LinearRgb::ID, ColorSpaceId::LinearRgb);
/// # let _ = c;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Color;
    pub use crate::colorspace::{ColorSpace, ColorSpaceId, Hsl, Hsv, Lab, LinearRgb, Srgb, Xyz};
    pub use crate::error::{Error, Result};
}
