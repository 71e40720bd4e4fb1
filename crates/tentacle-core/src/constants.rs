// Shared kinematics tuning constants. Values are the defaults used by the overlay;
// `SimConfig` copies the tunable ones so tests can override them.

// Chain layout
pub const APPENDAGE_COUNT: usize = 10;
pub const POINTS_PER_APPENDAGE: usize = 80;
pub const MIN_POINTS_PER_APPENDAGE: usize = 2; // a chain needs both ends

// Reach
pub const MAX_GRAB_DISTANCE: f32 = 300.0; // initial scatter radius
pub const DETACH_DISTANCE: f32 = 350.0; // cursor-to-anchor distance that forces a new anchor
pub const PREDICTION_CLAMP_FACTOR: f32 = 0.7; // predicted travel <= MAX_GRAB_DISTANCE * this

// Temporal smoothing of chain points (fraction of the remaining gap closed per tick)
pub const SMOOTH_SPEED: f32 = 0.15;

// Cursor velocity filter
pub const VELOCITY_BLEND_PER_SEC: f32 = 10.0; // smoothFactor = min(max, dt * this)
pub const VELOCITY_BLEND_MAX: f32 = 0.7;
pub const VELOCITY_IDLE_DECAY: f32 = 0.95; // per tick while the cursor rests
pub const VELOCITY_SNAP_EPSILON: f32 = 0.1; // units/sec, per component

// Motion prediction
pub const PREDICTION_HORIZON_MS: f32 = 500.0;
pub const HORIZON_SPEED_COEFF: f32 = 0.005;
pub const DIRECTION_MIN_SPEED: f32 = 0.1; // below this the heading is random

// Detachment
pub const ANGULAR_DETACH_MIN_SPEED: f32 = 15.0;
pub const ANCHOR_CONE_HALF_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
pub const ANGLE_EPSILON: f32 = 1e-4;

// Wave shape
pub const WAVE_SPATIAL_CYCLES: f32 = 2.0; // full sine periods along one chain (4π)
pub const WAVE_SPEED_NORMALIZER: f32 = 10.0; // speed at which wobble reaches full amplitude
pub const DEGENERATE_SEGMENT_LENGTH: f32 = 0.001;

// Default palette (head -> tail)
pub const HEAD_COLOR: [u8; 3] = [135, 206, 250]; // LightSkyBlue
pub const TAIL_COLOR: [u8; 3] = [65, 105, 225]; // RoyalBlue

// Tip marker
pub const TIP_DIAMETER: f32 = 4.0;
