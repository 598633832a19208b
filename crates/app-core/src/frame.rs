use glam::Vec2;

/// Per-tick snapshot handed to every visual behavior.
///
/// The host recomputes this once per frame from its clock and pointer
/// tracking; behaviors treat it as read-only. `pointer` is in normalized
/// device coordinates, [-1, 1] on both axes with +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameContext {
    pub elapsed_sec: f32,
    pub pointer: Vec2,
}

impl FrameContext {
    pub fn new(elapsed_sec: f32, pointer: Vec2) -> Self {
        Self {
            elapsed_sec,
            pointer,
        }
    }
}
