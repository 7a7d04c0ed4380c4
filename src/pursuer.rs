//! Enemy that steers straight at a target point every frame.
//!
//! Pursuit is memoryless: the velocity is rebuilt from the latest heading on
//! every update, so a pursuer turns instantly and never exceeds its speed.
use glam::DVec2;
use log::debug;

use crate::body::{MotionBody, Surface, Tint};
use crate::vector_math::{heading_between, heading_velocity};

/// A constant-speed chaser.
#[derive(Debug, Clone, PartialEq)]
pub struct Pursuer {
    /// Shared point-mass state.
    pub body: MotionBody,
    /// Heading in radians, overwritten by [`Pursuer::calc_angle`].
    pub angle: f64,
    /// Speed in units per second; fixed for the pursuer's lifetime.
    speed: f64,
}

impl Pursuer {
    /// Creates a pursuer at `(x, y)` heading east.
    #[must_use]
    pub fn new(x: f64, y: f64, size: f64, speed: f64) -> Self {
        debug!("Creating pursuer at ({x}, {y}) with speed {speed}");
        Self {
            body: MotionBody::new(x, y, size).with_tint(Tint::Red),
            angle: 0.0,
            speed,
        }
    }

    /// Points the heading from this pursuer's centre toward `(target_x, target_y)`.
    ///
    /// A target exactly on the centre yields a heading of `0.0`.
    pub fn calc_angle(&mut self, target_x: f64, target_y: f64) {
        self.angle = heading_between(self.body.centre(), DVec2::new(target_x, target_y));
    }

    /// Sets the velocity from the current heading and integrates position.
    pub fn update(&mut self, dt: f64) {
        self.body.velocity = heading_velocity(self.angle, self.speed);
        self.body.update(dt);
    }

    /// Constant pursuit speed.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Top-left corner of the footprint.
    #[must_use]
    pub const fn position(&self) -> DVec2 {
        self.body.position
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> DVec2 {
        self.body.velocity
    }

    /// Centre of the footprint.
    #[must_use]
    pub fn centre(&self) -> DVec2 {
        self.body.centre()
    }

    /// Draws the pursuer's footprint.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.body.draw(surface);
    }
}
