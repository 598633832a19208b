use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 300.0;

// Ball pit
pub const BALL_COUNT: usize = 30;
pub const BALLPIT_ORIGIN: [f32; 3] = [4.0, 0.0, -3.0]; // group anchor in world space
pub const BALL_GRAVITY: f32 = 0.001; // per-frame vy decrement
pub const BALL_ATTRACT_GAIN: f32 = 0.0001; // spring pull toward the pointer target
pub const BALL_ATTRACT_REACH: f32 = 2.0; // pointer NDC -> attractor position scale
pub const BALL_BOUNCE_DAMPING: f32 = 0.8; // velocity kept (and flipped) on a wall hit
pub const BALL_BOUND_XZ: f32 = 4.0; // |x| and |z| wall distance
pub const BALL_FLOOR_Y: f32 = -3.0;
pub const BALL_MIN_SCALE: f32 = 0.1;
pub const BALL_SCALE_SPAN: f32 = 0.15;
pub const BALL_SPIN_X_PER_SPEED: f32 = 10.0; // cosmetic spin, no physical meaning
pub const BALL_SPIN_Y_PER_SPEED: f32 = 5.0;

// Palette shared by the balls (pink, teal, ice, violet, coral)
pub const BALL_COLORS: [[f32; 3]; 5] = [
    [1.0, 0.412, 0.706],
    [0.0, 0.588, 0.533],
    [0.753, 0.992, 0.984],
    [0.612, 0.153, 0.690],
    [1.0, 0.420, 0.420],
];

// Fabric sheet
pub const FABRIC_WIDTH: f32 = 12.0;
pub const FABRIC_HEIGHT: f32 = 8.0;
pub const FABRIC_COLS: usize = 33; // vertices across (32 subdivisions)
pub const FABRIC_ROWS: usize = 25; // vertices down (24 subdivisions)
pub const FABRIC_COLOR: [f32; 3] = [0.753, 0.992, 0.984];
pub const FABRIC_POINTER_X_GAIN: f32 = 0.5;
pub const FABRIC_POINTER_Y_GAIN: f32 = 0.3;

// Particle field
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_HALF_EXTENT: f32 = 10.0; // seeded cube is [-10, 10]^3
pub const PARTICLE_SPIN_X_RATE: f32 = 0.05;
pub const PARTICLE_SPIN_Y_RATE: f32 = 0.1;
pub const PARTICLE_PARALLAX: f32 = 0.5; // pointer -> translation gain
pub const PARTICLE_SCALE: f32 = 0.05;
pub const PARTICLE_COLOR: [f32; 4] = [0.753, 0.992, 0.984, 0.4];

// Mannequin
pub const MANNEQUIN_ORIGIN: [f32; 3] = [3.0, 0.0, -1.0];
pub const MANNEQUIN_SCALE: f32 = 0.8;
pub const MANNEQUIN_TURN_RATE: f32 = 0.2; // rad/sec around y
pub const MANNEQUIN_BOB_RATE: f32 = 0.5;
pub const MANNEQUIN_BOB_AMPLITUDE: f32 = 0.1;
pub const DRESS_BREATHE_RATE: f32 = 2.0;
pub const DRESS_BREATHE_AMPLITUDE: f32 = 0.05;

// Floor grid
pub const GRID_SIZE: f32 = 20.0;
pub const GRID_DIVISIONS: usize = 40;
pub const GRID_REST_Y: f32 = -4.0;
pub const GRID_BOB_AMPLITUDE: f32 = 0.5;
pub const GRID_BOB_RATE: f32 = 0.5;
pub const GRID_TILT_AMPLITUDE: f32 = 0.1;
pub const GRID_TILT_RATE: f32 = 0.2;
pub const GRID_FOLLOW_GAIN: f32 = 2.0; // pointer NDC -> x/z slide
pub const GRID_COLOR: [f32; 4] = [0.0, 0.588, 0.533, 0.3];

// Selection flow
pub const ROLE_TRANSITION_DELAY_SEC: f64 = 1.0; // pause before the welcome panel

#[inline]
pub fn ballpit_origin() -> Vec3 {
    Vec3::from(BALLPIT_ORIGIN)
}

#[inline]
pub fn mannequin_origin() -> Vec3 {
    Vec3::from(MANNEQUIN_ORIGIN)
}
