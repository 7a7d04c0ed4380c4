//! Behaviour of the player's accelerate/clamp/decay model over many frames.
use approx::assert_relative_eq;
use chase::{Axis, Player};
use rstest::{fixture, rstest};

const DT: f64 = 1.0 / 120.0;

#[fixture]
fn player() -> Player {
    Player::new(1500.0, 500.0, 50.0)
}

#[rstest]
fn single_large_step_hits_cap(mut player: Player) {
    player.set_direction(Axis::Horizontal, 1);
    player.update(1.0);
    assert_relative_eq!(player.velocity().x, 500.0);
    assert_relative_eq!(player.position().x, 500.0);
}

#[rstest]
fn many_small_steps_reach_same_speed(mut player: Player) {
    player.set_direction(Axis::Horizontal, 1);
    for _ in 0..1000 {
        player.update(0.001);
    }
    assert_relative_eq!(player.velocity().x, 500.0);
    assert_eq!(player.velocity().y, 0.0, "idle axis must stay at rest");
}

#[rstest]
#[case::right(Axis::Horizontal, 1)]
#[case::left(Axis::Horizontal, -1)]
#[case::down(Axis::Vertical, 1)]
#[case::up(Axis::Vertical, -1)]
fn holding_reaches_cap_without_exceeding(
    mut player: Player,
    #[case] axis: Axis,
    #[case] value: i32,
) {
    player.set_direction(axis, value);
    // max_speed / acceleration = 1/3 s = 40 frames at 120 Hz.
    let mut reached_at = None;
    for frame in 1..=120 {
        player.update(DT);
        let v = player.velocity();
        assert!(v.x.abs() <= 500.0 && v.y.abs() <= 500.0, "frame {frame}: {v:?}");
        let speed = match axis {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        };
        if reached_at.is_none() && (speed.abs() - 500.0).abs() < 1e-9 {
            reached_at = Some(frame);
        }
    }
    assert_eq!(reached_at, Some(40));
}

#[rstest]
#[case::moving_right(1)]
#[case::moving_left(-1)]
fn release_decays_monotonically_then_stops(mut player: Player, #[case] value: i32) {
    player.set_direction(Axis::Horizontal, value);
    for _ in 0..60 {
        player.update(DT);
    }
    player.set_direction(Axis::Horizontal, 0);

    let sign = f64::from(value);
    let mut previous = player.velocity().x.abs();
    let mut stopped_at = None;
    for frame in 1..=120 {
        player.update(DT);
        let vx = player.velocity().x;
        assert!(vx * sign >= 0.0, "frame {frame}: decay flipped sign to {vx}");
        assert!(vx.abs() <= previous, "frame {frame}: speed grew to {vx}");
        previous = vx.abs();
        if vx == 0.0 {
            stopped_at.get_or_insert(frame);
        }
    }
    // 500 drops by 12.5 per frame; 37.5 is the first value under 40.
    assert_eq!(stopped_at, Some(37));
}

#[rstest]
fn diagonal_axes_are_independent(mut player: Player) {
    player.set_direction(Axis::Horizontal, 1);
    player.set_direction(Axis::Vertical, -1);
    for _ in 0..10 {
        player.update(DT);
    }
    assert_relative_eq!(player.velocity().x, 125.0, epsilon = 1e-9);
    assert_relative_eq!(player.velocity().y, -125.0, epsilon = 1e-9);
}

#[rstest]
fn large_idle_step_overshoots_decay(mut player: Player) {
    // The decay step is applied even from rest; with dt large enough it
    // exceeds the stop threshold and is not snapped back.
    player.update(0.1);
    assert_relative_eq!(player.velocity().x, -150.0);
}
