pub mod behaviors;
pub mod constants;
pub mod frame;
pub mod scene;
pub mod selection;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use behaviors::*;
pub use constants::*;
pub use frame::*;
pub use scene::*;
pub use selection::*;
pub use state::*;
