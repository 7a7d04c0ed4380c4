//! Explicit harness context owning the simulated entities.
//!
//! A [`Scenario`] replaces process-wide window/clock state: it is built once
//! from a [`SimConfig`], stepped once per frame, and dropped at exit. Within a
//! step the order is fixed. Input is applied, the player moves, the pursuer
//! re-aims at the player's *post-update* centre, then the pursuer moves.
use log::trace;

use crate::body::Surface;
use crate::config::SimConfig;
use crate::input::MoveInput;
use crate::player::Player;
use crate::pursuer::Pursuer;
use crate::registry::EnemyRegistry;

/// Frames between position traces.
const TRACE_INTERVAL: u64 = 120;

/// One player chased by one pursuer.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    player: Player,
    pursuer: Pursuer,
    enemies: EnemyRegistry,
    fixed_dt: f64,
    frame: u64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

impl Scenario {
    /// Builds the scenario described by `config`. The player spawns centred
    /// in the viewport.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        let player = Player::centred_in(
            f64::from(config.viewport.width),
            f64::from(config.viewport.height),
            config.player.acceleration,
            config.player.max_speed,
            config.player.size,
        );
        let pursuer = Pursuer::new(
            config.pursuer.x,
            config.pursuer.y,
            config.pursuer.size,
            config.pursuer.speed,
        );
        Self::from_parts(player, pursuer, config.frame_dt())
    }

    /// Builds a scenario from already constructed entities.
    #[must_use]
    pub const fn from_parts(player: Player, pursuer: Pursuer, fixed_dt: f64) -> Self {
        Self {
            player,
            pursuer,
            enemies: EnemyRegistry::new(),
            fixed_dt,
            frame: 0,
        }
    }

    /// Advances the simulation by `dt` seconds with `input` held.
    pub fn step(&mut self, dt: f64, input: MoveInput) {
        input.apply_to(&mut self.player);
        self.player.update(dt);

        let target = self.player.centre();
        self.pursuer.calc_angle(target.x, target.y);
        self.pursuer.update(dt);

        self.frame += 1;
        if self.frame % TRACE_INTERVAL == 0 {
            trace!(
                "frame {}: player {:?} v={:?}, pursuer {:?}",
                self.frame,
                self.player.position(),
                self.player.velocity(),
                self.pursuer.position()
            );
        }
    }

    /// Advances by the configured fixed timestep.
    pub fn step_fixed(&mut self, input: MoveInput) {
        self.step(self.fixed_dt, input);
    }

    /// Draws the player, then the pursuer.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.player.draw(surface);
        self.pursuer.draw(surface);
    }

    /// The player avatar.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The pursuer chasing the player.
    #[must_use]
    pub const fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    /// Registry of additional pursuers. Not driven by [`Scenario::step`].
    #[must_use]
    pub const fn enemies(&self) -> &EnemyRegistry {
        &self.enemies
    }

    /// Mutable access to the registry.
    pub const fn enemies_mut(&mut self) -> &mut EnemyRegistry {
        &mut self.enemies
    }

    /// Number of completed steps.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Seconds advanced by [`Scenario::step_fixed`].
    #[must_use]
    pub const fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }
}
