use super::constants::*;

/// Tunable knobs for a [`Simulation`](super::Simulation).
///
/// `Default` mirrors the values in `constants.rs`; tests shrink or stretch
/// individual fields with struct update syntax.
#[derive(Clone, Debug)]
pub struct SimParams {
    pub tendril_count: usize,
    pub segment_count: usize,
    pub segment_length: f32,
    pub orbit_radius: f32,
    pub encircle_factor: f32,
    pub spawn_distance_factor: f32,
    pub darkness_smoothing: f32,
    pub phrase_interval_ms: f64,
    pub bright_quiet_ms: f64,
    pub phrase_margin: f32,
    pub phrase_fade: f32,
    pub transition_ms: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            tendril_count: TENDRIL_COUNT,
            segment_count: SEGMENT_COUNT,
            segment_length: SEGMENT_LENGTH,
            orbit_radius: ORBIT_RADIUS,
            encircle_factor: ENCIRCLE_FACTOR,
            spawn_distance_factor: SPAWN_DISTANCE_FACTOR,
            darkness_smoothing: DARKNESS_SMOOTHING,
            phrase_interval_ms: PHRASE_INTERVAL_MS,
            bright_quiet_ms: BRIGHT_QUIET_MS,
            phrase_margin: PHRASE_MARGIN,
            phrase_fade: PHRASE_FADE_PER_FRAME,
            transition_ms: TRANSITION_DURATION_MS,
        }
    }
}

impl SimParams {
    /// Radius inside which a tendril head counts as encircling the cursor.
    #[inline]
    pub fn encircle_radius(&self) -> f32 {
        self.orbit_radius * self.encircle_factor
    }
}
