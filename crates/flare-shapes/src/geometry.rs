//! Pixel-space geometry shared by all shapes.

use flare_core::{Canvas, ColorSpace};

/// Canvas dimensions a shape was built for.
///
/// Part of every shape's parameters but not used by evaluation; shapes can
/// be sampled anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Creates a canvas size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of an existing canvas.
    #[inline]
    pub fn of<S: ColorSpace>(canvas: &Canvas<S>) -> Self {
        Self::new(canvas.width(), canvas.height())
    }
}

/// Integer pixel position. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from this point to pixel `(row, col)`.
    ///
    /// Offsets are taken in integers and saturate, so any coordinate pair is
    /// valid input.
    #[inline]
    pub fn distance_to(&self, row: i64, col: i64) -> f32 {
        let dx = col.saturating_sub(self.x as i64) as f32;
        let dy = row.saturating_sub(self.y as i64) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<[i32; 2]> for Point {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let p = Point::new(50, 50);
        assert_eq!(p.distance_to(50, 50), 0.0);
        assert_eq!(p.distance_to(50, 70), 20.0);
        assert_eq!(p.distance_to(53, 54), 5.0);
        assert_eq!(p.distance_to(47, 46), 5.0);
    }

    #[test]
    fn test_distance_extreme_coords() {
        let p = Point::new(i32::MIN, i32::MAX);
        let d = p.distance_to(i64::MAX, i64::MIN);
        assert!(d.is_finite());
        assert!(d > 0.0);
    }

    #[test]
    fn test_canvas_size_of() {
        let canvas = Canvas::<flare_core::LinearRgb>::new(4, 3).unwrap();
        assert_eq!(CanvasSize::of(&canvas), CanvasSize::new(4, 3));
    }

    #[test]
    fn test_point_from_array() {
        assert_eq!(Point::from([3, -4]), Point::new(3, -4));
    }
}
