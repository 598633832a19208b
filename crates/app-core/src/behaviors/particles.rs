use glam::Vec3;
use rand::prelude::*;

use crate::behaviors::Behavior;
use crate::constants::{
    PARTICLE_COUNT, PARTICLE_HALF_EXTENT, PARTICLE_PARALLAX, PARTICLE_SPIN_X_RATE,
    PARTICLE_SPIN_Y_RATE,
};
use crate::frame::FrameContext;
use crate::state::Transform;

/// A fixed cloud of drifting points. The cloud itself never changes; the
/// whole field slowly tumbles with time and parallaxes with the pointer.
pub struct ParticleDrift {
    pub positions: Vec<Vec3>,
    pub transform: Transform,
}

impl ParticleDrift {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_HALF_EXTENT,
                    (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_HALF_EXTENT,
                    (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_HALF_EXTENT,
                )
            })
            .collect();
        Self {
            positions,
            transform: Transform::default(),
        }
    }
}

impl Behavior for ParticleDrift {
    fn update(&mut self, ctx: &FrameContext) {
        let t = ctx.elapsed_sec;
        self.transform.rotation.x = t * PARTICLE_SPIN_X_RATE;
        self.transform.rotation.y = t * PARTICLE_SPIN_Y_RATE;
        self.transform.translation.x = ctx.pointer.x * PARTICLE_PARALLAX;
        self.transform.translation.y = ctx.pointer.y * PARTICLE_PARALLAX;
    }
}
