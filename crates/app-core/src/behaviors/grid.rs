use glam::Vec3;

use crate::behaviors::Behavior;
use crate::constants::{
    GRID_BOB_AMPLITUDE, GRID_BOB_RATE, GRID_DIVISIONS, GRID_FOLLOW_GAIN, GRID_REST_Y, GRID_SIZE,
    GRID_TILT_AMPLITUDE, GRID_TILT_RATE,
};
use crate::frame::FrameContext;
use crate::state::Transform;

/// The floor grid: static line geometry, animated as a rigid body that bobs
/// with time and slides after the pointer.
pub struct GridFollow {
    /// Line-list vertices (consecutive pairs form segments) in grid space.
    pub lines: Vec<Vec3>,
    pub transform: Transform,
}

impl GridFollow {
    pub fn new() -> Self {
        let half = GRID_SIZE * 0.5;
        let mut lines = Vec::with_capacity((GRID_DIVISIONS + 1) * 4);
        for i in 0..=GRID_DIVISIONS {
            let v = (i as f32 / GRID_DIVISIONS as f32) * GRID_SIZE - half;
            lines.push(Vec3::new(-half, 0.0, v));
            lines.push(Vec3::new(half, 0.0, v));
            lines.push(Vec3::new(v, 0.0, -half));
            lines.push(Vec3::new(v, 0.0, half));
        }
        Self {
            lines,
            transform: Transform::from_translation(Vec3::new(0.0, GRID_REST_Y, 0.0)),
        }
    }
}

impl Default for GridFollow {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for GridFollow {
    fn update(&mut self, ctx: &FrameContext) {
        let t = ctx.elapsed_sec;
        self.transform.translation.y = (t * GRID_BOB_RATE).sin() * GRID_BOB_AMPLITUDE + GRID_REST_Y;
        self.transform.rotation.x = (t * GRID_TILT_RATE).sin() * GRID_TILT_AMPLITUDE;
        self.transform.translation.x = ctx.pointer.x * GRID_FOLLOW_GAIN;
        self.transform.translation.z = ctx.pointer.y * GRID_FOLLOW_GAIN;
    }
}
