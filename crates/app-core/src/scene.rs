//! Scene ownership and per-frame composition.
//!
//! `Scene` owns the five behaviors (their state is disjoint, so updates
//! need no coordination) and flattens them into a `SceneFrame` of GPU-ready
//! primitives. Both hosts upload the frame verbatim, which keeps all
//! geometry decisions on this side of the renderer boundary.

use glam::{Mat4, Vec3};

use crate::behaviors::{
    frustum_mesh, Ballpit, Behavior, FabricWave, GridFollow, MannequinSway, ParticleDrift,
    PartShape,
};
use crate::constants::{ballpit_origin, FABRIC_COLOR, GRID_COLOR, PARTICLE_COLOR, PARTICLE_SCALE};
use crate::frame::FrameContext;

/// One billboarded circle sprite (balls, particles, the accent bead).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
}

/// One lit, alpha-blended mesh vertex (fabric sheet, mannequin solids).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// One line-list vertex (floor grid).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Everything the renderer needs for one frame, in world space.
#[derive(Default)]
pub struct SceneFrame {
    pub sprites: Vec<SpriteInstance>,
    pub mesh_vertices: Vec<MeshVertex>,
    pub mesh_indices: Vec<u32>,
    pub lines: Vec<LineVertex>,
}

pub struct Scene {
    pub fabric: FabricWave,
    pub particles: ParticleDrift,
    pub ballpit: Ballpit,
    pub mannequin: MannequinSway,
    pub grid: GridFollow,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        // Derive a distinct particle seed so the two clouds decorrelate.
        let particle_seed = seed ^ 0x9E37_79B9_7F4A_7C15;
        Self {
            fabric: FabricWave::new(),
            particles: ParticleDrift::new(particle_seed),
            ballpit: Ballpit::new(seed),
            mannequin: MannequinSway::new(),
            grid: GridFollow::new(),
        }
    }

    /// Drive every behavior once. Order is irrelevant; nothing is shared.
    pub fn update(&mut self, ctx: &FrameContext) {
        self.fabric.update(ctx);
        self.particles.update(ctx);
        self.ballpit.update(ctx);
        self.mannequin.update(ctx);
        self.grid.update(ctx);
    }

    /// Flatten the current behavior state into renderer primitives.
    pub fn compose(&self) -> SceneFrame {
        let mut frame = SceneFrame::default();
        self.compose_particles(&mut frame);
        self.compose_balls(&mut frame);
        self.compose_fabric(&mut frame);
        self.compose_mannequin(&mut frame);
        self.compose_grid(&mut frame);
        frame
    }

    fn compose_particles(&self, frame: &mut SceneFrame) {
        let m = self.particles.transform.matrix();
        frame.sprites.extend(self.particles.positions.iter().map(|p| {
            SpriteInstance {
                position: m.transform_point3(*p).to_array(),
                scale: PARTICLE_SCALE,
                color: PARTICLE_COLOR,
            }
        }));
    }

    fn compose_balls(&self, frame: &mut SceneFrame) {
        let origin = ballpit_origin();
        frame.sprites.extend(self.ballpit.balls.iter().map(|b| {
            let c = b.color;
            SpriteInstance {
                position: (origin + b.position).to_array(),
                scale: b.scale,
                color: [c[0], c[1], c[2], 0.8],
            }
        }));
    }

    fn compose_fabric(&self, frame: &mut SceneFrame) {
        let m = self.fabric.transform.matrix();
        let rot = self.fabric.transform.quat();
        let color = [
            FABRIC_COLOR[0],
            FABRIC_COLOR[1],
            FABRIC_COLOR[2],
            self.fabric.opacity.max(0.0),
        ];
        let base = frame.mesh_vertices.len() as u32;
        for (p, n) in self.fabric.positions.iter().zip(&self.fabric.normals) {
            frame.mesh_vertices.push(MeshVertex {
                position: m.transform_point3(*p).to_array(),
                normal: (rot * *n).to_array(),
                color,
            });
        }
        frame
            .mesh_indices
            .extend(self.fabric.indices.iter().map(|i| base + i));
    }

    fn compose_mannequin(&self, frame: &mut SceneFrame) {
        let group = self.mannequin.group.matrix();
        for part in self.mannequin.parts() {
            match part.shape {
                PartShape::Frustum {
                    top_radius,
                    bottom_radius,
                    height,
                } => {
                    // The dress keeps the original's coarse faceting.
                    let segments = if top_radius == 0.0 { 8 } else { 16 };
                    let (positions, normals, indices) =
                        frustum_mesh(top_radius, bottom_radius, height, segments);
                    let m = group * part.local.matrix();
                    let rot = self.mannequin.group.quat() * part.local.quat();
                    append_mesh(frame, &m, rot, &positions, &normals, &indices, part.color);
                }
                PartShape::Bead { radius } => {
                    let world = group.transform_point3(part.local.translation);
                    frame.sprites.push(SpriteInstance {
                        position: world.to_array(),
                        scale: radius,
                        color: part.color,
                    });
                }
            }
        }
    }

    fn compose_grid(&self, frame: &mut SceneFrame) {
        let m = self.grid.transform.matrix();
        frame.lines.extend(self.grid.lines.iter().map(|p| LineVertex {
            position: m.transform_point3(*p).to_array(),
            color: GRID_COLOR,
        }));
    }
}

fn append_mesh(
    frame: &mut SceneFrame,
    m: &Mat4,
    rot: glam::Quat,
    positions: &[Vec3],
    normals: &[Vec3],
    indices: &[u32],
    color: [f32; 4],
) {
    let base = frame.mesh_vertices.len() as u32;
    for (p, n) in positions.iter().zip(normals) {
        frame.mesh_vertices.push(MeshVertex {
            position: m.transform_point3(*p).to_array(),
            normal: (rot * *n).to_array(),
            color,
        });
    }
    frame.mesh_indices.extend(indices.iter().map(|i| base + i));
}
