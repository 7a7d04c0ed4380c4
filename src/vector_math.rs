//! Small 2D helpers for centre points and headings.
//!
//! Coordinates follow the screen convention of the rendering harness (origin
//! at the top-left, `y` growing downward). The maths does not depend on it.
use glam::DVec2;

/// Returns the centre of a square footprint whose top-left corner is
/// `top_left`.
///
/// # Examples
/// ```
/// use chase::vector_math::footprint_centre;
/// use glam::DVec2;
/// let centre = footprint_centre(DVec2::new(100.0, 100.0), 20.0);
/// assert_eq!(centre, DVec2::new(110.0, 110.0));
/// ```
#[must_use]
pub fn footprint_centre(top_left: DVec2, size: f64) -> DVec2 {
    top_left + DVec2::splat(size / 2.0)
}

/// Angle in radians of the direction from `from` to `to`.
///
/// Uses `atan2(dy, dx)`. When both points coincide the heading is `0.0`
/// regardless of signed zeros in the offset.
///
/// # Examples
/// ```
/// use chase::vector_math::heading_between;
/// use glam::DVec2;
/// let angle = heading_between(DVec2::ZERO, DVec2::new(0.0, 5.0));
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(heading_between(DVec2::ONE, DVec2::ONE), 0.0);
/// ```
#[must_use]
pub fn heading_between(from: DVec2, to: DVec2) -> f64 {
    let offset = to - from;
    if offset == DVec2::ZERO {
        return 0.0;
    }
    offset.y.atan2(offset.x)
}

/// Velocity of magnitude `speed` pointing along `heading`.
#[must_use]
pub fn heading_velocity(heading: f64, speed: f64) -> DVec2 {
    let (sin, cos) = heading.sin_cos();
    DVec2::new(speed * cos, speed * sin)
}
