//! # flare-math
//!
//! Math utilities for lens-flare color and shape processing.
//!
//! - [`Mat3`] - 3x3 matrices for the fixed RGB/XYZ transforms
//! - [`Vec3`] - 3D vectors for color triplets
//! - [`wrap_unit`] for hue wrapping
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use flare_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 1.0, 1.0);
//! assert!((xyz.y - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`flare-core`] - `Color` conversions to and from [`Vec3`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use vec3::*;
