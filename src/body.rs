//! Point-mass shared by every moving entity.
//!
//! A [`MotionBody`] carries a square footprint, a position (top-left corner of
//! the footprint) and a velocity in units per second. Specialised entities
//! compose it and finish their own update by calling
//! [`MotionBody::update`].
use glam::DVec2;
use log::debug;

use crate::vector_math::footprint_centre;

/// Colour tag handed to the renderer with each footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Used for the player.
    White,
    /// Used for pursuers.
    Red,
}

/// Rendering collaborator that entities draw themselves onto.
///
/// Implementations receive the top-left corner and side length of a square
/// footprint in screen coordinates.
pub trait Surface {
    /// Draws one square footprint.
    fn blit(&mut self, top_left: DVec2, size: f64, tint: Tint);
}

/// Generic 2D point-mass with a square footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionBody {
    /// Top-left corner of the footprint.
    pub position: DVec2,
    /// Velocity in units per second.
    pub velocity: DVec2,
    /// Side length of the square footprint.
    pub size: f64,
    /// Colour tag passed to [`Surface::blit`].
    pub tint: Tint,
}

impl MotionBody {
    /// Creates a body at rest at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        debug!("Creating body at ({x}, {y}) with size {size}");
        Self {
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            size,
            tint: Tint::White,
        }
    }

    /// Returns the same body with a different colour tag.
    #[must_use]
    pub const fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    /// Centre point of the footprint.
    #[must_use]
    pub fn centre(&self) -> DVec2 {
        footprint_centre(self.position, self.size)
    }

    /// Advances the position by `velocity * dt`.
    ///
    /// `dt` is not validated; a negative value moves the body backwards.
    pub fn update(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// Hands the current footprint to `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.blit(self.position, self.size, self.tint);
    }
}
