//! # flare-shapes
//!
//! Procedural light shapes for lens-flare rendering.
//!
//! Each shape answers one question: what color does it contribute at pixel
//! `(row, col)`? Edges are anti-aliased analytically over one pixel, so no
//! supersampling is needed.
//!
//! # Shapes
//!
//! - [`Ring`] - thin circular band (halos)
//! - [`SolidDisk`] - filled circle (ghosts, bokeh)
//! - [`GradientDisk`] - filled circle with power-law falloff (glows)
//!
//! All three are wrapped by the closed [`Shape`] enum and share the
//! [`Sample`] trait.
//!
//! # Example
//!
//! ```rust
//! use flare_core::{Canvas, Color, LinearRgb};
//! use flare_shapes::{render, BlendMode, CanvasSize, GradientDisk, Point, Ring, Shape};
//!
//! let mut canvas: Canvas<LinearRgb> = Canvas::new(128, 128).unwrap();
//! let size = CanvasSize::of(&canvas);
//!
//! let shapes: Vec<Shape<LinearRgb>> = vec![
//!     GradientDisk::new(size, Point::new(64, 64), 30.0, Color::new(1.0, 0.9, 0.7), 2.0).into(),
//!     Ring::new(size, Point::new(64, 64), 45.0, 4.0, Color::new(0.2, 0.3, 0.8)).into(),
//! ];
//! render(&mut canvas, &shapes, BlendMode::Add);
//! ```
//!
//! # Degenerate Geometry
//!
//! Constructors never fail. A negative radius or a ring thicker than its
//! diameter simply produces an empty or odd-looking shape, and non-finite
//! geometry samples as transparent everywhere. Call [`Shape::validate`] to
//! detect these up front.
//!
//! # Dependencies
//!
//! - [`flare-core`] - `Color`, `Canvas`, `Error`
//! - [`rayon`] - row-parallel rendering (`parallel` feature, on by default)
//! - [`tracing`] - debug/trace logging
//!
//! # Used By
//!
//! - `flare-cli` - scene rendering

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod disk;
pub mod geometry;
pub mod render;
pub mod ring;
pub mod shape;

pub use disk::{GradientDisk, SolidDisk};
pub use geometry::{CanvasSize, Point};
pub use render::{composite_pixel, render, render_sequential, BlendMode};
pub use ring::Ring;
pub use shape::{Sample, Shape};
