//! Error types for flare-core operations.
//!
//! Color conversions and per-pixel shape queries are total and never
//! return errors. The [`Error`] enum covers the few fallible edges around
//! them:
//! - Canvas allocation (zero or overflowing dimensions)
//! - Opt-in validation of shape parameters
//! - Interleaved buffer conversion with a wrong channel layout
//! - Parsing color space names
//!
//! # Usage
//!
//! ```rust
//! use flare_core::{Error, Result};
//!
//! fn check_size(width: u32, height: u32) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_dimensions(width, height, "zero size"));
//!     }
//!     Ok(())
//! }
//! assert!(check_size(0, 10).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the fallible edges of the flare pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside canvas bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flare_core::Error;
    ///
    /// let err = Error::out_of_bounds(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel (row {row}, col {col}) out of bounds for canvas {width}x{height}")]
    OutOfBounds {
        /// Row that was accessed
        row: i64,
        /// Column that was accessed
        col: i64,
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },

    /// Invalid canvas dimensions.
    ///
    /// Returned when width or height is zero, or the pixel count would
    /// overflow `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A shape or render parameter is degenerate.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Interleaved buffer length does not match the channel count.
    #[error("channel mismatch: buffer of {len} values is not a multiple of {channels} channels")]
    ChannelMismatch {
        /// Expected channels per pixel
        channels: usize,
        /// Actual buffer length
        len: usize,
    },

    /// Color space name could not be parsed.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: i64, col: i64, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            row,
            col,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(channels: usize, len: usize) -> Self {
        Self::ChannelMismatch { channels, len }
    }
}
