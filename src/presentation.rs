//! Bevy harness: window, keyboard polling and sprite drawing.
//!
//! [`ChasePlugin`] owns the [`Scenario`] as a resource. The simulation steps
//! in `FixedUpdate` at the configured frame rate, so Bevy's fixed clock does
//! the frame pacing. Drawing happens in `Update` through a [`Surface`]
//! adapter that maps screen coordinates (top-left origin, `y` down) onto
//! Bevy's world space (centred origin, `y` up).
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use glam::DVec2;

use crate::body::{Surface, Tint};
use crate::config::SimConfig;
use crate::input::MoveInput;
use crate::numeric::expect_f32;
use crate::scenario::Scenario;
use crate::vector_math::footprint_centre;

/// The running scenario.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct ChaseWorld(pub Scenario);

/// Viewport dimensions used for the screen-to-world transform.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize(pub DVec2);

/// Marks the sprite that shows one simulated entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avatar {
    /// The player's sprite.
    Player,
    /// The pursuer's sprite.
    Pursuer,
}

/// Converts a footprint in screen coordinates to the Bevy world position of
/// its centre.
///
/// # Examples
///
/// ```
/// use bevy::math::Vec2;
/// use chase::presentation::screen_to_world;
/// use glam::DVec2;
///
/// let screen = DVec2::new(1000.0, 800.0);
/// let centre = screen_to_world(DVec2::new(475.0, 375.0), 50.0, screen);
/// assert_eq!(centre, Vec2::ZERO);
/// ```
#[must_use]
pub fn screen_to_world(top_left: DVec2, size: f64, screen: DVec2) -> Vec2 {
    let centre = footprint_centre(top_left, size);
    Vec2::new(
        expect_f32(centre.x - screen.x / 2.0),
        expect_f32(screen.y / 2.0 - centre.y),
    )
}

/// Sprite colour for a tint tag.
#[must_use]
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::White => Color::WHITE,
        Tint::Red => Color::srgb(1.0, 0.0, 0.0),
    }
}

/// Writes a blitted footprint into a sprite's transform, size and colour.
struct SpriteSurface<'a> {
    screen: DVec2,
    transform: &'a mut Transform,
    sprite: &'a mut Sprite,
}

impl Surface for SpriteSurface<'_> {
    fn blit(&mut self, top_left: DVec2, size: f64, tint: Tint) {
        let centre = screen_to_world(top_left, size, self.screen);
        self.transform.translation.x = centre.x;
        self.transform.translation.y = centre.y;
        self.sprite.custom_size = Some(Vec2::splat(expect_f32(size)));
        self.sprite.color = tint_color(tint);
    }
}

/// Reads WASD (or arrow keys) into a [`MoveInput`].
#[must_use]
pub fn read_move_input(keyboard: &ButtonInput<KeyCode>) -> MoveInput {
    MoveInput {
        up: keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
    }
}

/// Advances the scenario by one fixed timestep using the held keys.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn simulation_step_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut world: ResMut<ChaseWorld>,
) {
    let input = read_move_input(&keyboard);
    world.step(time.delta_secs_f64(), input);
}

/// Draws every entity onto its sprite.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn draw_avatars_system(
    world: Res<ChaseWorld>,
    screen: Res<ScreenSize>,
    mut sprites: Query<(&Avatar, &mut Transform, &mut Sprite)>,
) {
    for (avatar, mut transform, mut sprite) in &mut sprites {
        let mut surface = SpriteSurface {
            screen: screen.0,
            transform: &mut *transform,
            sprite: &mut *sprite,
        };
        match avatar {
            Avatar::Player => world.player().draw(&mut surface),
            Avatar::Pursuer => world.pursuer().draw(&mut surface),
        }
    }
}

fn spawn_avatars(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("ChaseCamera")));
    commands.spawn((Avatar::Player, Sprite::default(), Name::new("Player")));
    commands.spawn((Avatar::Pursuer, Sprite::default(), Name::new("Pursuer")));
}

/// Plugin installing the scenario, fixed-rate stepping and drawing.
#[derive(Debug, Default)]
pub struct ChasePlugin {
    config: SimConfig,
}

impl ChasePlugin {
    /// Creates the plugin for `config`.
    #[must_use]
    pub const fn new(config: SimConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ChasePlugin {
    fn build(&self, app: &mut App) {
        let viewport = self.config.viewport;
        app.insert_resource(ChaseWorld(Scenario::new(&self.config)))
            .insert_resource(ScreenSize(DVec2::new(
                f64::from(viewport.width),
                f64::from(viewport.height),
            )))
            .insert_resource(ClearColor(Color::BLACK))
            .insert_resource(Time::<Fixed>::from_hz(self.config.fps))
            .add_systems(Startup, spawn_avatars)
            .add_systems(FixedUpdate, simulation_step_system)
            .add_systems(Update, draw_avatars_system);
    }
}

/// Opens the window and runs until it is closed.
pub fn run(config: SimConfig) -> AppExit {
    let window = Window {
        title: "Chase".to_owned(),
        resolution: WindowResolution::new(config.viewport.width, config.viewport.height),
        resizable: false,
        ..default()
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                }),
        )
        .add_plugins(ChasePlugin::new(config))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_plugins(ChasePlugin::default());
        app
    }

    fn avatar_state(app: &mut App, wanted: Avatar) -> Option<(Vec3, Sprite)> {
        let world = app.world_mut();
        let mut query = world.query::<(&Avatar, &Transform, &Sprite)>();
        query
            .iter(world)
            .find(|(avatar, _, _)| **avatar == wanted)
            .map(|(_, transform, sprite)| (transform.translation, sprite.clone()))
    }

    #[rstest]
    #[case::centre(DVec2::new(475.0, 375.0), 50.0, Vec2::ZERO)]
    #[case::top_left_corner(DVec2::ZERO, 0.0, Vec2::new(-500.0, 400.0))]
    #[case::pursuer_spawn(DVec2::new(100.0, 100.0), 20.0, Vec2::new(-390.0, 290.0))]
    fn screen_to_world_cases(#[case] top_left: DVec2, #[case] size: f64, #[case] expected: Vec2) {
        let screen = DVec2::new(1000.0, 800.0);
        assert_eq!(screen_to_world(top_left, size, screen), expected);
    }

    #[test]
    fn plugin_inserts_resources() {
        let app = app();
        assert!(app.world().contains_resource::<ChaseWorld>());
        assert!(app.world().contains_resource::<ScreenSize>());
    }

    #[test]
    fn first_frame_draws_both_avatars() {
        let mut app = app();
        app.update();

        let (player_pos, player_sprite) =
            avatar_state(&mut app, Avatar::Player).unwrap_or_else(|| panic!("player sprite"));
        assert_eq!(player_pos.truncate(), Vec2::ZERO);
        assert_eq!(player_sprite.custom_size, Some(Vec2::splat(50.0)));
        assert_eq!(player_sprite.color, Color::WHITE);

        let (pursuer_pos, pursuer_sprite) =
            avatar_state(&mut app, Avatar::Pursuer).unwrap_or_else(|| panic!("pursuer sprite"));
        assert_eq!(pursuer_pos.truncate(), Vec2::new(-390.0, 290.0));
        assert_eq!(pursuer_sprite.color, tint_color(Tint::Red));
    }

    #[test]
    fn held_keys_map_to_move_input() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::ArrowRight);
        let input = read_move_input(&keyboard);
        assert_eq!(
            input,
            MoveInput {
                up: true,
                right: true,
                ..Default::default()
            }
        );
    }
}
