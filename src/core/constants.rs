/// Swarm, mood and phrase tuning constants.
///
/// Distances are in canvas pixels, times in milliseconds, and per-frame
/// rates assume one update per display refresh.

// Orbit geometry
pub const ORBIT_RADIUS: f32 = 120.0; // steady-state distance from cursor
pub const ENCIRCLE_FACTOR: f32 = 1.2; // heads inside ORBIT_RADIUS * this count as encircling
pub const SPAWN_DISTANCE_FACTOR: f32 = 2.0; // initial head distance, in orbit radii

// Swarm
pub const TENDRIL_COUNT: usize = 30;
pub const SEGMENT_COUNT: usize = 15;
pub const SEGMENT_LENGTH: f32 = 8.0; // rest length between neighbouring segments
pub const BASE_SPEED_MIN: f32 = 0.01; // radians per frame
pub const BASE_SPEED_SPAN: f32 = 0.02;
pub const DEFAULT_TURN_SPEED: f32 = 0.03; // fraction of the gap to target closed per frame
pub const DEFAULT_WIGGLE: f32 = 0.05;
pub const MAX_SPEED_MULTIPLIER: f32 = 2.0;
pub const NEAR_ORBIT_RATE: f32 = 2.0; // fixed angular multiplier once inside the ring

// Behavior table
pub const AGGRESSIVE_SPEED: f32 = 1.5;
pub const AGGRESSIVE_TURN: f32 = 0.05;
pub const HESITANT_SPEED: f32 = 0.7;
pub const HESITANT_TURN: f32 = 0.02;
pub const ERRATIC_JITTER: f32 = 0.5; // multiplier spread around 1.0
pub const ERRATIC_WIGGLE: f32 = 0.1;

// Darkness
pub const DARKNESS_SMOOTHING: f32 = 0.05; // level += (target - level) * this
pub const DARKNESS_THRESHOLD: f32 = 0.5;
pub const DARKEN_MAX_ALPHA: f32 = 0.7;
pub const SHADOW_RADIUS: f32 = 110.0;
pub const SHADOW_INNER_FRACTION: f32 = 0.7;

// Phrases
pub const PHRASE_INTERVAL_MS: f64 = 2000.0;
pub const BRIGHT_QUIET_MS: f64 = 2000.0; // no positive phrases this soon after brightening
pub const PHRASE_MARGIN: f32 = 50.0;
pub const PHRASE_FADE_PER_FRAME: f32 = 0.0015;
pub const RECENT_HISTORY_LEN: usize = 7;
pub const PICK_MAX_ATTEMPTS: usize = 64;

// Transition flourish
pub const TRANSITION_DURATION_MS: f64 = 500.0;
pub const SHAKE_MAX: f32 = 5.0;
pub const BLUR_MAX_PX: f32 = 10.0;

// Drawing
pub const CURSOR_RADIUS: f32 = 8.0;
pub const TIP_RADIUS: f32 = 3.0;
pub const TENDRIL_LINE_WIDTH: f32 = 4.0;
pub const PHRASE_FONT_PX: u32 = 16;
