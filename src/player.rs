//! Player-controlled avatar with inertial, capped movement.
//!
//! Each axis is handled independently: held input accelerates, the speed is
//! clamped to `max_speed`, and a released axis decelerates at the same rate
//! until it drops below [`STOP_SPEED_THRESHOLD`], where it snaps to zero.
use glam::DVec2;
use log::debug;

use crate::body::{MotionBody, Surface, Tint};
use crate::constants::STOP_SPEED_THRESHOLD;
use crate::numeric::unit_sign;

/// Selects which component of the direction intent to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `x` axis; positive is to the right.
    Horizontal,
    /// The `y` axis; positive is down the screen.
    Vertical,
}

/// Player avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Shared point-mass state.
    pub body: MotionBody,
    /// Per-axis intent, nominally in `{-1, 0, 1}`.
    pub direction: [i32; 2],
    /// Acceleration magnitude in units per second squared.
    pub acceleration: f64,
    /// Per-axis speed cap.
    pub max_speed: f64,
}

impl Player {
    /// Creates a player at the origin.
    #[must_use]
    pub fn new(acceleration: f64, max_speed: f64, size: f64) -> Self {
        Self::at(DVec2::ZERO, acceleration, max_speed, size)
    }

    /// Creates a player centred in a viewport of `width` by `height`.
    #[must_use]
    pub fn centred_in(width: f64, height: f64, acceleration: f64, max_speed: f64, size: f64) -> Self {
        let top_left = DVec2::new(width / 2.0 - size / 2.0, height / 2.0 - size / 2.0);
        Self::at(top_left, acceleration, max_speed, size)
    }

    /// Creates a player with its footprint's top-left corner at `top_left`.
    #[must_use]
    pub fn at(top_left: DVec2, acceleration: f64, max_speed: f64, size: f64) -> Self {
        debug!(
            "Creating player at {top_left:?} (acceleration {acceleration}, max speed {max_speed})"
        );
        Self {
            body: MotionBody::new(top_left.x, top_left.y, size).with_tint(Tint::White),
            direction: [0, 0],
            acceleration,
            max_speed,
        }
    }

    /// Stores the intent for one axis. Values outside `{-1, 0, 1}` are kept
    /// and scale the acceleration accordingly.
    pub const fn set_direction(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Horizontal => self.direction[0] = value,
            Axis::Vertical => self.direction[1] = value,
        }
    }

    /// Current intent for `axis`.
    #[must_use]
    pub const fn direction(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.direction[0],
            Axis::Vertical => self.direction[1],
        }
    }

    /// Accelerates, clamps and decays each axis, then integrates position.
    pub fn update(&mut self, dt: f64) {
        let [ix, iy] = self.direction;
        self.body.velocity.x = self.advance_axis(self.body.velocity.x, ix, dt);
        self.body.velocity.y = self.advance_axis(self.body.velocity.y, iy, dt);
        self.body.update(dt);
    }

    fn advance_axis(&self, velocity: f64, intent: i32, dt: f64) -> f64 {
        let mut v = velocity + self.acceleration * f64::from(intent) * dt;

        if v > 0.0 {
            v = v.min(self.max_speed);
        } else {
            v = v.max(-self.max_speed);
        }

        if intent == 0 {
            // Decay pushes against the current sign; zero counts as positive.
            v -= self.acceleration * dt * unit_sign(v);
            if v.abs() < STOP_SPEED_THRESHOLD {
                v = 0.0;
            }
        }
        v
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

    /// Centre of the footprint; the point pursuers steer toward.
    #[must_use]
    pub fn centre(&self) -> DVec2 {
        self.body.centre()
    }

    /// Draws the player's footprint.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.body.draw(surface);
    }
}
