use glam::Vec3;

// Scene tuning constants shared by the core and the web frontend.

// Wave plane
pub const WAVE_SIZE: f32 = 200.0;
pub const WAVE_SEGMENTS: u32 = 120;
pub const WAVE_TILT_X: f32 = -std::f32::consts::PI / 2.5;
pub const WAVE_OFFSET_Y: f32 = -5.0;
pub const WAVE_FREQ_DIVISOR: f32 = 6.0; // world units per radian of phase
pub const WAVE_SPEED: f32 = 1.4; // radians per second
pub const WAVE_AMPLITUDE: f32 = 2.0;
pub const WAVE_COLOR: u32 = 0x0b2745;

// Horizon grid
pub const GRID_SIZE: f32 = 800.0;
pub const GRID_SEGMENTS: u32 = 80;
pub const GRID_TILT_X: f32 = -std::f32::consts::PI / 2.8;
pub const GRID_BASE_Y: f32 = -100.0;
pub const GRID_BASE_Z: f32 = -100.0;
pub const GRID_SPIN_PER_SEC: f32 = 0.01;
pub const GRID_SPIN_PER_SCROLL_PX: f32 = 0.0002;
pub const GRID_DEPTH_SWAY_RATE: f32 = 0.3;
pub const GRID_DEPTH_SWAY_AMP: f32 = 10.0;
pub const GRID_DEPTH_PER_SCROLL_PX: f32 = 0.15; // pushed away as the page scrolls
pub const GRID_HEIGHT_SWAY_RATE: f32 = 0.2;
pub const GRID_HEIGHT_SWAY_AMP: f32 = 5.0;
pub const GRID_COLOR: u32 = 0x072033;
pub const GRID_OPACITY: f32 = 0.3;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 10.0, 80.0);
pub const CAMERA_PARALLAX_X: f32 = 10.0;
pub const CAMERA_PARALLAX_Y: f32 = 6.0;
pub const CAMERA_SMOOTHING: f32 = 0.05; // fraction of remaining distance per frame
pub const CAMERA_BASE_Z: f32 = 80.0;
pub const CAMERA_Z_PER_SCROLL_PX: f32 = 0.06;

// Navbar fade
pub const NAV_FADE_DISTANCE_PX: f32 = 300.0;
pub const NAV_FADE_DEPTH: f32 = 0.3; // opacity lost at full fade

// Page
pub const CLEAR_COLOR: u32 = 0x020617;
