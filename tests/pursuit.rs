//! Pursuit steering: heading, speed and convergence on a stationary target.
use approx::assert_relative_eq;
use chase::Pursuer;
use glam::DVec2;
use rstest::rstest;

#[test]
fn pursuer_reaches_target_on_axis() {
    let mut pursuer = Pursuer::new(0.0, 0.0, 0.0, 300.0);
    pursuer.calc_angle(300.0, 0.0);
    assert_eq!(pursuer.angle, 0.0);
    pursuer.update(1.0);
    assert_eq!(pursuer.position(), DVec2::new(300.0, 0.0));
}

#[rstest]
#[case::east(DVec2::new(400.0, 110.0))]
#[case::south_west(DVec2::new(-50.0, 600.0))]
#[case::north(DVec2::new(110.0, -20.0))]
#[case::off_grid(DVec2::new(123.4, 98.7))]
fn velocity_has_speed_and_points_at_target(#[case] target: DVec2) {
    let mut pursuer = Pursuer::new(100.0, 100.0, 20.0, 300.0);
    let start_centre = pursuer.centre();
    pursuer.calc_angle(target.x, target.y);
    pursuer.update(1.0 / 120.0);

    let velocity = pursuer.velocity();
    assert_relative_eq!(velocity.length(), pursuer.speed(), epsilon = 1e-9);
    let wanted = (target - start_centre).normalize();
    assert_relative_eq!(velocity.normalize().dot(wanted), 1.0, epsilon = 1e-12);
}

fn target_inside_footprint(pursuer: &Pursuer, target: DVec2) -> bool {
    let min = pursuer.position();
    let max = min + DVec2::splat(pursuer.body.size);
    target.cmpge(min).all() && target.cmple(max).all()
}

#[rstest]
#[case::far_corner(DVec2::new(900.0, 700.0))]
#[case::behind(DVec2::new(-300.0, 40.0))]
#[case::straight_down(DVec2::new(110.0, 500.0))]
fn distance_shrinks_every_frame_until_caught(#[case] target: DVec2) {
    let mut pursuer = Pursuer::new(100.0, 100.0, 20.0, 300.0);
    let mut distance = pursuer.centre().distance(target);

    let mut frames = 0;
    while !target_inside_footprint(&pursuer, target) {
        frames += 1;
        assert!(frames < 2000, "pursuer never reached {target:?}");
        pursuer.calc_angle(target.x, target.y);
        pursuer.update(1.0 / 120.0);
        let next = pursuer.centre().distance(target);
        assert!(next < distance, "frame {frames}: {next} >= {distance}");
        distance = next;
    }
}

#[test]
fn zero_speed_pursuer_stays_put() {
    let mut pursuer = Pursuer::new(5.0, 5.0, 10.0, 0.0);
    pursuer.calc_angle(100.0, 100.0);
    pursuer.update(1.0);
    assert_eq!(pursuer.position(), DVec2::new(5.0, 5.0));
}
