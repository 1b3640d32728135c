// Host-side tests for the darkness level and its threshold crossings.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shadow_tendrils::core::{
    Crossing, DarknessState, RecordingPainter, SimParams, Simulation,
};

#[test]
fn level_stays_in_unit_range_for_any_input() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut state = DarknessState::new(0.05);
    for _ in 0..20_000 {
        let total = rng.gen_range(0..40usize);
        let encircling = rng.gen_range(0..=total + 5);
        state.update(encircling, total);
        let level = state.level();
        assert!((0.0..=1.0).contains(&level), "level escaped: {level}");
    }
}

#[test]
fn full_smoothing_jumps_straight_to_target() {
    let mut state = DarknessState::new(1.0);
    assert_eq!(state.update(30, 30), Some(Crossing::ToDark));
    assert_eq!(state.level(), 1.0);
    assert_eq!(state.update(15, 30), Some(Crossing::ToBright));
    assert_eq!(state.level(), 0.0);
}

#[test]
fn shadow_alpha_scales_with_level() {
    let mut state = DarknessState::new(1.0);
    assert_eq!(state.darken_alpha(), 0.0);
    state.update(30, 30);
    assert!((state.darken_alpha() - 0.7).abs() < 1e-6);
}

#[test]
fn stationary_cursor_darkens_with_a_single_transition() {
    let mut sim = Simulation::new(SimParams::default(), 1024.0, 768.0, 2024);
    let mut painter = RecordingPainter::new();
    let mut activations = Vec::new();
    let mut now = 0.0;

    for frame in 0..900 {
        now += 16.0;
        let report = sim.frame(now, &mut painter);
        painter.ops.clear();
        if let Some(c) = report.crossing {
            activations.push((frame, c));
            assert!(sim.transition().is_active());
            assert_eq!(sim.transition().start_ms(), now);
        }
    }

    assert_eq!(activations.len(), 1, "crossings: {activations:?}");
    assert_eq!(activations[0].1, Crossing::ToDark);
    assert!(sim.darkness().level() > 0.5);
    assert_eq!(sim.encircling_count(), sim.tendrils().len());
}
