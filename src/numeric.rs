//! Numeric helpers used across the project.
//!
//! The simulation runs in `f64`; rendering needs `f32`. The sign helper pins
//! down the zero convention used by the player's decay step so it does not
//! depend on how a platform treats signed zero.

/// Returns `-1.0` for negative values and `+1.0` otherwise, including both
/// signed zeros and NaN.
///
/// # Examples
///
/// ```
/// use chase::numeric::unit_sign;
/// assert_eq!(unit_sign(-3.5), -1.0);
/// assert_eq!(unit_sign(0.0), 1.0);
/// assert_eq!(unit_sign(-0.0), 1.0);
/// ```
#[must_use]
pub const fn unit_sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers assert that the value fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}
