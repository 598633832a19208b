use glam::{Vec2, Vec3};

use crate::behaviors::Behavior;
use crate::constants::{
    FABRIC_COLS, FABRIC_HEIGHT, FABRIC_POINTER_X_GAIN, FABRIC_POINTER_Y_GAIN, FABRIC_ROWS,
    FABRIC_WIDTH,
};
use crate::frame::FrameContext;
use crate::state::Transform;

/// Closed-form cloth displacement. Pure in `(x, y, t, pointer)`, so the
/// sheet is restart-safe: the same inputs always produce the same depth.
#[inline]
pub fn displacement(x: f32, y: f32, t: f32, pointer: Vec2) -> f32 {
    (x * 0.5 + t * 2.0).sin() * 0.3
        + (y * 0.7 + t * 1.5).cos() * 0.2
        + ((x + y) * 0.3 + t).sin() * 0.1
        + pointer.x * FABRIC_POINTER_X_GAIN
        + pointer.y * FABRIC_POINTER_Y_GAIN
}

/// A 33x25 vertex sheet whose depth is re-derived from `displacement` every
/// frame. No velocity state is kept; the wave is a function, not a sim.
pub struct FabricWave {
    /// Grid vertices in sheet-local space, row-major, z displaced per frame.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, recomputed after displacement.
    pub normals: Vec<Vec3>,
    /// Triangle-list indices into `positions`; fixed for the sheet's life.
    pub indices: Vec<u32>,
    /// Whole-sheet sway applied on top of the vertex waves.
    pub transform: Transform,
    /// Shimmering material opacity, `0.2 + sin(2t) * 0.1`.
    pub opacity: f32,
}

impl FabricWave {
    pub fn new() -> Self {
        let mut positions = Vec::with_capacity(FABRIC_COLS * FABRIC_ROWS);
        for row in 0..FABRIC_ROWS {
            for col in 0..FABRIC_COLS {
                let x = (col as f32 / (FABRIC_COLS - 1) as f32 - 0.5) * FABRIC_WIDTH;
                let y = (row as f32 / (FABRIC_ROWS - 1) as f32 - 0.5) * FABRIC_HEIGHT;
                positions.push(Vec3::new(x, y, 0.0));
            }
        }
        let mut indices = Vec::with_capacity((FABRIC_COLS - 1) * (FABRIC_ROWS - 1) * 6);
        for row in 0..FABRIC_ROWS - 1 {
            for col in 0..FABRIC_COLS - 1 {
                let i = (row * FABRIC_COLS + col) as u32;
                let right = i + 1;
                let below = i + FABRIC_COLS as u32;
                indices.extend_from_slice(&[i, right, below, right, below + 1, below]);
            }
        }
        let normals = vec![Vec3::Z; positions.len()];
        Self {
            positions,
            normals,
            indices,
            transform: Transform::default(),
            opacity: 0.2,
        }
    }

    #[inline]
    fn vertex_z(&self, col: usize, row: usize) -> f32 {
        self.positions[row * FABRIC_COLS + col].z
    }

    /// Normals from central differences on the height field; one-sided at
    /// the sheet edges.
    fn recompute_normals(&mut self) {
        let dx = FABRIC_WIDTH / (FABRIC_COLS - 1) as f32;
        let dy = FABRIC_HEIGHT / (FABRIC_ROWS - 1) as f32;
        for row in 0..FABRIC_ROWS {
            for col in 0..FABRIC_COLS {
                let (c0, c1) = (col.saturating_sub(1), (col + 1).min(FABRIC_COLS - 1));
                let (r0, r1) = (row.saturating_sub(1), (row + 1).min(FABRIC_ROWS - 1));
                let dzdx = (self.vertex_z(c1, row) - self.vertex_z(c0, row))
                    / ((c1 - c0) as f32 * dx);
                let dzdy = (self.vertex_z(col, r1) - self.vertex_z(col, r0))
                    / ((r1 - r0) as f32 * dy);
                self.normals[row * FABRIC_COLS + col] =
                    Vec3::new(-dzdx, -dzdy, 1.0).normalize();
            }
        }
    }
}

impl Default for FabricWave {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for FabricWave {
    fn update(&mut self, ctx: &FrameContext) {
        let t = ctx.elapsed_sec;
        for v in &mut self.positions {
            v.z = displacement(v.x, v.y, t, ctx.pointer);
        }
        self.recompute_normals();

        self.transform.rotation.x = (t * 0.2).sin() * 0.1;
        self.transform.rotation.y = (t * 0.15).cos() * 0.05;
        self.transform.translation.z = (t * 0.3).sin() * 0.2 - 2.0;
        self.opacity = 0.2 + (t * 2.0).sin() * 0.1;
    }
}
