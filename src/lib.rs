#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the chase simulation core.
//! A player square moves with inertia and a speed cap while a pursuer steers
//! straight at it every frame. Re-exports the entity types and the scenario
//! harness for the binary and tests.
pub mod body;
pub mod config;
pub mod constants;
pub mod input;
pub mod logging;
pub mod numeric;
pub mod player;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod presentation;
pub mod pursuer;
pub mod registry;
pub mod scenario;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use body::{MotionBody, Surface, Tint};
pub use config::{ConfigError, PlayerConfig, PursuerConfig, SimConfig, Viewport};
pub use input::MoveInput;
pub use logging::init as init_logging;
pub use player::{Axis, Player};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::ChasePlugin;
pub use pursuer::Pursuer;
pub use registry::EnemyRegistry;
pub use scenario::Scenario;
pub use vector_math::{footprint_centre, heading_between, heading_velocity};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use chase::prelude::*;
    //! ```

    pub use crate::Axis;
    pub use crate::EnemyRegistry;
    pub use crate::MoveInput;
    pub use crate::Player;
    pub use crate::Pursuer;
    pub use crate::Scenario;
    pub use crate::SimConfig;
    pub use glam::DVec2;
}
