use glam::{Vec2, Vec3};
use rand::prelude::*;

use crate::behaviors::Behavior;
use crate::constants::{
    BALL_ATTRACT_GAIN, BALL_ATTRACT_REACH, BALL_BOUNCE_DAMPING, BALL_BOUND_XZ, BALL_COLORS,
    BALL_COUNT, BALL_FLOOR_Y, BALL_GRAVITY, BALL_MIN_SCALE, BALL_SCALE_SPAN,
    BALL_SPIN_X_PER_SPEED, BALL_SPIN_Y_PER_SPEED,
};
use crate::frame::FrameContext;

/// One simulated ball. Positions are local to the pit's group anchor.
#[derive(Clone, Copy, Debug)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: [f32; 3],
    pub scale: f32,
    /// Accumulated cosmetic spin around x/y, driven by speed. The current
    /// hosts draw balls as radially symmetric billboards and ignore it; a
    /// mesh-based host would feed it into the ball's rotation.
    pub spin: Vec2,
}

/// Explicit-Euler ball pit bounded by `|x| < 4`, `|z| < 4`, `y >= -3`.
///
/// The integrator folds the timestep into its per-frame constants (one
/// implicit frame per `update`), so the simulation speed tracks the host's
/// frame rate the same way the original scene did.
pub struct Ballpit {
    pub balls: Vec<Ball>,
}

impl Ballpit {
    /// Seeded placement so both hosts (and tests) can reproduce a run.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let balls = (0..BALL_COUNT)
            .map(|_| Ball {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 8.0,
                    rng.gen::<f32>() * 4.0 + 2.0,
                    (rng.gen::<f32>() - 0.5) * 8.0,
                ),
                velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 0.02,
                    rng.gen::<f32>() * 0.01,
                    (rng.gen::<f32>() - 0.5) * 0.02,
                ),
                color: *BALL_COLORS.choose(&mut rng).unwrap_or(&BALL_COLORS[0]),
                scale: BALL_MIN_SCALE + rng.gen::<f32>() * BALL_SCALE_SPAN,
                spin: Vec2::ZERO,
            })
            .collect();
        Self { balls }
    }

    /// World position the pointer pulls every ball toward.
    #[inline]
    pub fn attractor(pointer: Vec2) -> Vec3 {
        Vec3::new(
            pointer.x * BALL_ATTRACT_REACH,
            pointer.y * BALL_ATTRACT_REACH,
            0.0,
        )
    }
}

impl Behavior for Ballpit {
    fn update(&mut self, ctx: &FrameContext) {
        let attractor = Self::attractor(ctx.pointer);
        for ball in &mut self.balls {
            // Gravity, then the spring-like pointer pull. The pull has no
            // damping of its own; only the walls bleed energy off.
            ball.velocity.y -= BALL_GRAVITY;
            ball.velocity += (attractor - ball.position) * BALL_ATTRACT_GAIN;

            ball.position += ball.velocity;

            // Inelastic bounce: clamp the offending coordinate and flip-damp
            // the matching velocity component.
            if ball.position.y < BALL_FLOOR_Y {
                ball.position.y = BALL_FLOOR_Y;
                ball.velocity.y *= -BALL_BOUNCE_DAMPING;
            }
            if ball.position.x.abs() > BALL_BOUND_XZ {
                ball.position.x = BALL_BOUND_XZ.copysign(ball.position.x);
                ball.velocity.x *= -BALL_BOUNCE_DAMPING;
            }
            if ball.position.z.abs() > BALL_BOUND_XZ {
                ball.position.z = BALL_BOUND_XZ.copysign(ball.position.z);
                ball.velocity.z *= -BALL_BOUNCE_DAMPING;
            }

            let speed = ball.velocity.length();
            ball.spin.x += speed * BALL_SPIN_X_PER_SPEED;
            ball.spin.y += speed * BALL_SPIN_Y_PER_SPEED;
        }
    }
}
