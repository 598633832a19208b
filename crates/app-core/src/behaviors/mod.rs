//! The five visual behaviors that animate the landing backdrop.
//!
//! Each behavior owns its geometry/transform state outright; nothing is
//! shared between them, so the host can drive all five from one per-frame
//! callback without any coordination.

mod ballpit;
mod fabric;
mod grid;
mod mannequin;
mod particles;

pub use ballpit::{Ball, Ballpit};
pub use fabric::{displacement, FabricWave};
pub use grid::GridFollow;
pub use mannequin::{frustum_mesh, MannequinPart, MannequinSway, PartShape};
pub use particles::ParticleDrift;

use crate::frame::FrameContext;

/// A self-contained, time- and pointer-driven update applied once per frame.
///
/// Implementations must be non-blocking and must not assume anything about
/// the cadence of calls: the closed-form behaviors derive all state from
/// `ctx.elapsed_sec`, and the ball pit folds its timestep into per-frame
/// constants.
pub trait Behavior {
    fn update(&mut self, ctx: &FrameContext);
}
