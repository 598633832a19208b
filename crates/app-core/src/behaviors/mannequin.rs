use glam::Vec3;
use smallvec::SmallVec;

use crate::behaviors::Behavior;
use crate::constants::{
    mannequin_origin, DRESS_BREATHE_AMPLITUDE, DRESS_BREATHE_RATE, MANNEQUIN_BOB_AMPLITUDE,
    MANNEQUIN_BOB_RATE, MANNEQUIN_SCALE, MANNEQUIN_TURN_RATE,
};
use crate::frame::FrameContext;
use crate::state::Transform;

/// Shape of a single mannequin part, in its own local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PartShape {
    /// Truncated cone around +y, centered on the origin. A plain cone is a
    /// frustum with `top_radius` 0; a cylinder has equal radii.
    Frustum {
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
    },
    /// Small glowing sphere, drawn as a billboard by the hosts.
    Bead { radius: f32 },
}

#[derive(Clone, Copy, Debug)]
pub struct MannequinPart {
    pub shape: PartShape,
    pub local: Transform,
    pub color: [f32; 4],
}

/// The slowly turning dress form. Whole-figure sway plus a breathing dress;
/// everything is a closed-form function of elapsed time.
pub struct MannequinSway {
    pub group: Transform,
    pub dress_scale: Vec3,
}

impl MannequinSway {
    pub fn new() -> Self {
        Self {
            group: Transform {
                translation: mannequin_origin(),
                rotation: Vec3::ZERO,
                scale: Vec3::splat(MANNEQUIN_SCALE),
            },
            dress_scale: Vec3::ONE,
        }
    }

    /// The figure's parts for this frame: base disc, pole, torso, dress,
    /// and the glowing accent bead. Local transforms are relative to
    /// `self.group`.
    pub fn parts(&self) -> SmallVec<[MannequinPart; 6]> {
        let mut parts = SmallVec::new();
        parts.push(MannequinPart {
            shape: PartShape::Frustum {
                top_radius: 0.3,
                bottom_radius: 0.3,
                height: 0.1,
            },
            local: Transform::from_translation(Vec3::new(0.0, -2.0, 0.0)),
            color: [0.267, 0.267, 0.267, 1.0],
        });
        parts.push(MannequinPart {
            shape: PartShape::Frustum {
                top_radius: 0.05,
                bottom_radius: 0.05,
                height: 3.0,
            },
            local: Transform::from_translation(Vec3::new(0.0, -0.5, 0.0)),
            color: [0.4, 0.4, 0.4, 1.0],
        });
        parts.push(MannequinPart {
            shape: PartShape::Frustum {
                top_radius: 0.6,
                bottom_radius: 0.4,
                height: 1.5,
            },
            local: Transform::from_translation(Vec3::new(0.0, 0.5, 0.0)),
            color: [0.961, 0.961, 0.863, 1.0],
        });
        parts.push(MannequinPart {
            shape: PartShape::Frustum {
                top_radius: 0.0,
                bottom_radius: 1.2,
                height: 2.0,
            },
            local: Transform {
                translation: Vec3::ZERO,
                rotation: Vec3::ZERO,
                scale: self.dress_scale,
            },
            color: [1.0, 0.412, 0.706, 0.8],
        });
        parts.push(MannequinPart {
            shape: PartShape::Bead { radius: 0.05 },
            local: Transform::from_translation(Vec3::new(0.0, 1.2, 0.5)),
            color: [0.0, 0.588, 0.533, 1.0],
        });
        parts
    }
}

impl Default for MannequinSway {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for MannequinSway {
    fn update(&mut self, ctx: &FrameContext) {
        let t = ctx.elapsed_sec;
        self.group.rotation.y = t * MANNEQUIN_TURN_RATE;
        self.group.translation =
            mannequin_origin() + Vec3::Y * ((t * MANNEQUIN_BOB_RATE).sin() * MANNEQUIN_BOB_AMPLITUDE);
        self.dress_scale.x = 1.0 + (t * DRESS_BREATHE_RATE).sin() * DRESS_BREATHE_AMPLITUDE;
        self.dress_scale.z = 1.0 + (t * DRESS_BREATHE_RATE).cos() * DRESS_BREATHE_AMPLITUDE;
    }
}

/// Tessellate a y-axis frustum into positions/normals/triangle indices.
/// Lateral surface plus both caps; `segments` slices around the axis.
pub fn frustum_mesh(
    top_radius: f32,
    bottom_radius: f32,
    height: f32,
    segments: usize,
) -> (Vec<Vec3>, Vec<Vec3>, Vec<u32>) {
    let half = height * 0.5;
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Lateral ring pairs. The side normal leans by the slope of the wall.
    let slope = (bottom_radius - top_radius) / height;
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = theta.sin_cos();
        let n = Vec3::new(cos, slope, sin).normalize();
        positions.push(Vec3::new(cos * bottom_radius, -half, sin * bottom_radius));
        normals.push(n);
        positions.push(Vec3::new(cos * top_radius, half, sin * top_radius));
        normals.push(n);
    }
    for i in 0..segments as u32 {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
    }

    // Caps, fanned from a center vertex.
    for (y, radius, normal) in [
        (-half, bottom_radius, -Vec3::Y),
        (half, top_radius, Vec3::Y),
    ] {
        if radius <= 0.0 {
            continue;
        }
        let center = positions.len() as u32;
        positions.push(Vec3::new(0.0, y, 0.0));
        normals.push(normal);
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            positions.push(Vec3::new(cos * radius, y, sin * radius));
            normals.push(normal);
        }
        for i in 0..segments as u32 {
            indices.extend_from_slice(&[center, center + 1 + i, center + 2 + i]);
        }
    }

    (positions, normals, indices)
}
