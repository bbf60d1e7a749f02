//! Scalar helpers shared by the cylindrical color models.

/// Brings a cyclic value back towards [0, 1] with a single +/-1 step.
///
/// Hue formulas overshoot the unit interval by less than one cycle. Values
/// more than one cycle out are only moved by one step. Exactly `0.0` and
/// `1.0` are left untouched.
///
/// # Example
///
/// ```rust
/// use flare_math::wrap_unit;
///
/// assert_eq!(wrap_unit(-0.25), 0.75);
/// assert_eq!(wrap_unit(1.25), 0.25);
/// assert_eq!(wrap_unit(0.5), 0.5);
/// ```
#[inline]
pub fn wrap_unit(value: f32) -> f32 {
    if value < 0.0 {
        value + 1.0
    } else if value > 1.0 {
        value - 1.0
    } else {
        value
    }
}
