//! Reference scenario constants shared by the simulation and its harnesses.
//!
//! These are the defaults used when no configuration file is supplied. All
//! distances are in screen units (pixels) and all times are in seconds.

/// Viewport width of the reference scenario.
pub const VIEWPORT_WIDTH: u32 = 1000;
/// Viewport height of the reference scenario.
pub const VIEWPORT_HEIGHT: u32 = 800;
/// Frame cap; the harness steps the simulation at `1 / FRAMES_PER_SECOND`.
pub const FRAMES_PER_SECOND: f64 = 120.0;

/// Player acceleration in units per second squared.
pub const PLAYER_ACCELERATION: f64 = 1500.0;
/// Per-axis speed cap for the player.
pub const PLAYER_MAX_SPEED: f64 = 500.0;
/// Side length of the player's square footprint.
pub const PLAYER_SIZE: f64 = 50.0;

/// Spawn position of the default pursuer (top-left of its footprint).
pub const PURSUER_SPAWN_X: f64 = 100.0;
/// Spawn position of the default pursuer (top-left of its footprint).
pub const PURSUER_SPAWN_Y: f64 = 100.0;
/// Side length of the pursuer's square footprint.
pub const PURSUER_SIZE: f64 = 20.0;
/// Constant pursuit speed in units per second.
pub const PURSUER_SPEED: f64 = 300.0;

/// Below this speed a released player axis snaps to a dead stop.
pub const STOP_SPEED_THRESHOLD: f64 = 40.0;
