// Shared visual tuning constants used by the web and native frontends.

// Frame loop
pub const GLOBAL_ANGLE_INCREMENT: f32 = 0.003; // radians per frame, drives twist and pulse
pub const RADIUS_PULSE_RATE: f32 = 2.0; // pulse sinusoid runs at 2x the twist angle

// Helix geometry
pub const PARTICLE_COUNT: usize = 90;
pub const HELIX_RADIUS: f32 = 80.0; // strand circle radius around the long axis
pub const HELIX_SPAN_DIAGONAL_FACTOR: f32 = 2.5; // long-axis span relative to viewport diagonal
pub const HELIX_TILT_RADIANS: f32 = -36.0 * std::f32::consts::PI / 180.0; // diagonal lean
pub const FOCAL_LENGTH: f32 = 800.0; // perspective divide: scale = f / (f + z)
pub const ANGULAR_STEP: f32 = 0.18; // phase advance between adjacent spine points
pub const PULSE_PHASE_STEP: f32 = 0.35; // per-particle pulse offset progression

// Particle sizing
pub const PARTICLE_BASE_RADIUS: f32 = 2.6;
pub const PARTICLE_RADIUS_JITTER: f32 = 0.8;

// Draw thresholds and opacity
pub const BASE_PAIR_DIST_SQ_MAX: f32 = 40_000.0; // squared px, scaled by instance scale^2
pub const STRAND_SEGMENT_DIST_SQ_MAX: f32 = 8_100.0; // squared px, drops near/far crossover lines
pub const BASE_PAIR_ALPHA: f32 = 0.35;
pub const STRAND_ALPHA: f32 = 0.5;
pub const DOT_ALPHA: f32 = 0.9;
pub const DOT_ALPHA_MIN: f32 = 0.25; // dots stay visible even far away

// Layout
pub const MOBILE_BREAKPOINT: f32 = 768.0; // below this the visual region is full width
pub const MID_BREAKPOINT: f32 = 1024.0;
pub const SPLIT_RATIO_MID: f32 = 0.50;
pub const SPLIT_RATIO_WIDE: f32 = 0.55;

// Blobs (grid currently zeroed: the background blob layer is disabled)
pub const BLOB_GRID_ROWS: usize = 0;
pub const BLOB_GRID_COLS: usize = 0;
pub const BLOB_ATOM_MIN: usize = 3;
pub const BLOB_ATOM_MAX: usize = 6;
pub const BLOB_ATOM_SPREAD: f32 = 18.0; // max atom offset from the blob center
pub const BLOB_ATOM_RADIUS_MIN: f32 = 3.0;
pub const BLOB_ATOM_RADIUS_MAX: f32 = 8.0;
pub const BLOB_SPEED_MAX: f32 = 14.0; // px per second
pub const BLOB_ROT_SPEED_MAX: f32 = 0.4; // radians per second
pub const BLOB_OPACITY_MAX: f32 = 0.2;
pub const BLOB_OPACITY_RATE: f32 = 0.7; // radians per second
pub const BLOB_WRAP_PADDING: f32 = 30.0; // toroidal wrap margin

// Ripples (stepped but never drawn: the surface effect is disabled)
pub const RIPPLE_SPAWN_INTERVAL_SEC: f32 = 2.5;
pub const RIPPLE_GROWTH_SPEED: f32 = 28.0; // px per second
pub const RIPPLE_MAX_RADIUS: f32 = 120.0;

// Fireflies
pub const FIREFLY_COUNT: usize = 24;
pub const FIREFLY_SPEED_MAX: f32 = 12.0; // px per second
pub const FIREFLY_RADIUS: f32 = 1.6;
pub const FIREFLY_FLICKER_RATE: f32 = 1.8; // radians per second
pub const FIREFLY_ALPHA_BASE: f32 = 0.25;
pub const FIREFLY_ALPHA_SPAN: f32 = 0.35;
