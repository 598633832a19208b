// Integration tests for the ball pit integrator.

use app_core::{
    Ball, Ballpit, Behavior, FrameContext, BALL_BOUND_XZ, BALL_COUNT, BALL_FLOOR_Y,
};
use glam::{Vec2, Vec3};

fn resting_ball(position: Vec3) -> Ball {
    Ball {
        position,
        velocity: Vec3::ZERO,
        color: [1.0, 1.0, 1.0],
        scale: 0.1,
        spin: Vec2::ZERO,
    }
}

#[test]
fn seeded_pit_has_expected_population() {
    let pit = Ballpit::new(7);
    assert_eq!(pit.balls.len(), BALL_COUNT);
    for ball in &pit.balls {
        // Seed region: x,z in [-4, 4], y in [2, 6]
        assert!(ball.position.x.abs() <= 4.0);
        assert!(ball.position.z.abs() <= 4.0);
        assert!(ball.position.y >= 2.0 && ball.position.y <= 6.0);
        assert!(ball.scale >= 0.1 && ball.scale <= 0.25);
    }
}

#[test]
fn seeding_is_deterministic() {
    let mut a = Ballpit::new(42);
    let mut b = Ballpit::new(42);
    let ctx = FrameContext::new(0.0, Vec2::new(0.3, -0.2));
    for _ in 0..100 {
        a.update(&ctx);
        b.update(&ctx);
    }
    for (x, y) in a.balls.iter().zip(&b.balls) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.velocity, y.velocity);
    }
}

#[test]
fn balls_stay_inside_the_box() {
    let mut pit = Ballpit::new(1);
    for i in 0..5000 {
        // Sweep the pointer around to keep pumping energy in.
        let t = i as f32 * 0.016;
        let ctx = FrameContext::new(t, Vec2::new(t.sin(), (t * 0.7).cos()));
        pit.update(&ctx);
        for ball in &pit.balls {
            assert!(ball.position.y >= BALL_FLOOR_Y);
            assert!(ball.position.x.abs() <= BALL_BOUND_XZ);
            assert!(ball.position.z.abs() <= BALL_BOUND_XZ);
        }
    }
}

#[test]
fn center_ball_falls_monotonically_until_the_floor() {
    let mut pit = Ballpit {
        balls: vec![resting_ball(Vec3::ZERO)],
    };
    let ctx = FrameContext::new(0.0, Vec2::ZERO);
    let mut prev_y = 0.0f32;
    let mut landed = false;
    for _ in 0..500 {
        pit.update(&ctx);
        let ball = &pit.balls[0];
        // The pointer target sits at the origin, so nothing moves laterally.
        assert_eq!(ball.position.x, 0.0);
        assert_eq!(ball.position.z, 0.0);
        if ball.position.y <= BALL_FLOOR_Y {
            landed = true;
            break;
        }
        assert!(ball.position.y < prev_y, "descent must be monotonic");
        prev_y = ball.position.y;
    }
    assert!(landed, "ball never reached the floor");
}

#[test]
fn wall_hit_clamps_and_damps() {
    let mut pit = Ballpit {
        balls: vec![Ball {
            velocity: Vec3::new(0.5, 0.0, 0.0),
            ..resting_ball(Vec3::new(3.9, 0.0, 0.0))
        }],
    };
    pit.update(&FrameContext::new(0.0, Vec2::ZERO));
    let ball = &pit.balls[0];
    assert_eq!(ball.position.x, BALL_BOUND_XZ);
    assert!(ball.velocity.x < 0.0, "bounce must reverse the component");
    assert!(
        ball.velocity.x.abs() < 0.5,
        "bounce must bleed energy, not add it"
    );
}

#[test]
fn floor_bounce_is_inelastic() {
    let mut pit = Ballpit {
        balls: vec![Ball {
            velocity: Vec3::new(0.0, -0.5, 0.0),
            ..resting_ball(Vec3::new(1.0, -2.9, 1.0))
        }],
    };
    pit.update(&FrameContext::new(0.0, Vec2::ZERO));
    let ball = &pit.balls[0];
    assert_eq!(ball.position.y, BALL_FLOOR_Y);
    assert!(ball.velocity.y > 0.0);
    assert!(ball.velocity.y < 0.5);
}

#[test]
fn spin_tracks_speed() {
    let mut pit = Ballpit {
        balls: vec![Ball {
            velocity: Vec3::new(0.1, 0.0, 0.0),
            ..resting_ball(Vec3::ZERO)
        }],
    };
    pit.update(&FrameContext::new(0.0, Vec2::ZERO));
    let after_one = pit.balls[0].spin.x;
    assert!(after_one > 0.0);
    pit.update(&FrameContext::new(0.0, Vec2::ZERO));
    assert!(pit.balls[0].spin.x > after_one, "spin accumulates");
}

#[test]
fn attractor_projects_pointer_into_the_scene() {
    let target = Ballpit::attractor(Vec2::new(1.0, -0.5));
    assert_eq!(target, Vec3::new(2.0, -1.0, 0.0));
}
