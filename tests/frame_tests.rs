// Host-side tests for the fixed per-frame draw order.

use shadow_tendrils::core::{
    action_for_key, Crossing, KeyAction, PaintOp, RecordingPainter, SimParams, Simulation,
};

fn small_sim(tendrils: usize) -> Simulation {
    let params = SimParams {
        tendril_count: tendrils,
        darkness_smoothing: 1.0,
        ..SimParams::default()
    };
    Simulation::new(params, 800.0, 600.0, 11)
}

fn is_cursor(op: &PaintOp) -> bool {
    matches!(op, PaintOp::Circle { radius, .. } if *radius == 8.0)
}

#[test]
fn calm_frame_draws_background_swarm_then_cursor() {
    let mut sim = small_sim(4);
    let mut painter = RecordingPainter::new();
    let report = sim.frame(16.0, &mut painter);
    assert_eq!(report.crossing, None);
    assert!(report.transition.is_none());

    let ops = painter.take();
    assert_eq!(ops.len(), 1 + 4 * 2 + 1, "ops: {ops:?}");
    assert_eq!(ops[0], PaintOp::Clear);
    for pair in ops[1..9].chunks(2) {
        assert!(matches!(pair[0], PaintOp::Polyline { points: 15 }));
        assert!(matches!(pair[1], PaintOp::Circle { radius, .. } if radius == 3.0));
    }
    assert!(is_cursor(&ops[9]));
}

#[test]
fn crossing_frame_repaints_with_shake_and_blur() {
    let mut sim = small_sim(1);
    let head = sim.tendrils()[0].head();
    sim.set_cursor(head);

    let mut painter = RecordingPainter::new();
    let report = sim.frame(16.0, &mut painter);
    assert_eq!(report.crossing, Some(Crossing::ToDark));
    let fx = report.transition.expect("transition pass");
    assert_eq!(fx.progress, 0.0);

    let ops = painter.take();
    let expected_prefix = [PaintOp::Clear, PaintOp::Shadow { alpha: 0.7 }];
    assert_eq!(&ops[..2], &expected_prefix);
    assert!(matches!(ops[2], PaintOp::Polyline { .. }));
    assert!(matches!(ops[3], PaintOp::Circle { .. }));
    assert!(is_cursor(&ops[4]));
    assert_eq!(ops[5], PaintOp::Save);
    assert_eq!(ops[6], PaintOp::Translate(fx.shake));
    assert_eq!(ops[7], PaintOp::Blur(10.0));
    assert_eq!(ops[8], PaintOp::Clear);
    assert!(matches!(ops[9], PaintOp::Shadow { .. }));
    assert!(matches!(ops[10], PaintOp::Polyline { .. }));
    assert!(matches!(ops[11], PaintOp::Circle { .. }));
    assert!(is_cursor(&ops[12]));
    assert_eq!(ops[13], PaintOp::Restore);
    assert_eq!(ops.len(), 14);
}

#[test]
fn transition_pass_stops_after_its_duration() {
    let mut sim = small_sim(1);
    let head = sim.tendrils()[0].head();
    sim.set_cursor(head);
    let mut painter = RecordingPainter::new();

    sim.frame(1000.0, &mut painter);
    assert!(sim.transition().is_active());

    // Keep the cursor glued to the head so the mood stays dark
    let mut now = 1000.0;
    while now < 1500.0 {
        now += 100.0;
        let head = sim.tendrils()[0].head();
        sim.set_cursor(head);
        let report = sim.frame(now, &mut painter);
        assert_eq!(report.crossing, None);
        assert!(report.transition.is_some());
    }
    assert!(!sim.transition().is_active());

    painter.ops.clear();
    let report = sim.frame(1600.0, &mut painter);
    assert!(report.transition.is_none());
    assert!(!painter.ops.contains(&PaintOp::Save));
}

#[test]
fn phrases_draw_after_tendrils_and_before_cursor() {
    let mut sim = small_sim(2);
    let mut painter = RecordingPainter::new();
    let mut now = 0.0;
    while !sim.frame(now, &mut painter).spawned {
        now += 100.0;
    }
    painter.ops.clear();
    sim.frame(now + 16.0, &mut painter);

    let mut ops = painter.take();
    // Only the normal pass; a transition pass may follow it
    if let Some(save_at) = ops.iter().position(|op| *op == PaintOp::Save) {
        ops.truncate(save_at);
    }
    let text_at = ops
        .iter()
        .position(|op| matches!(op, PaintOp::Text { .. }))
        .expect("phrase drawn");
    let last_polyline = ops
        .iter()
        .rposition(|op| matches!(op, PaintOp::Polyline { .. }))
        .expect("tendrils drawn");
    let cursor_at = ops.iter().position(is_cursor).expect("cursor drawn");
    assert!(last_polyline < text_at && text_at < cursor_at);
    if let PaintOp::Text { alpha, .. } = &ops[text_at] {
        assert!(*alpha < 1.0 && *alpha > 0.9);
    }
}

#[test]
fn keyboard_controls_pause_and_reseat() {
    assert_eq!(action_for_key(" "), Some(KeyAction::TogglePause));
    assert_eq!(action_for_key("R"), Some(KeyAction::ReseatSwarm));
    assert_eq!(action_for_key("x"), None);

    let mut sim = small_sim(3);
    sim.apply(KeyAction::TogglePause);
    assert!(sim.is_paused());
    sim.apply(KeyAction::TogglePause);
    assert!(!sim.is_paused());

    let mut painter = RecordingPainter::new();
    for i in 0..50 {
        sim.frame(i as f64 * 16.0, &mut painter);
    }
    sim.apply(KeyAction::ReseatSwarm);
    let cursor = sim.cursor();
    for t in sim.tendrils() {
        assert!((t.head().distance(cursor) - 240.0).abs() < 1e-3);
    }
}

#[test]
fn long_run_keeps_history_bounded_and_tracks_resize() {
    let mut sim = small_sim(6);
    assert_eq!(sim.params().tendril_count, 6);
    assert_eq!(sim.surface(), glam::Vec2::new(800.0, 600.0));

    let mut painter = RecordingPainter::new();
    let mut spawned = 0;
    for i in 0..3000 {
        if i == 1500 {
            sim.resize(320.0, 240.0);
            assert_eq!(sim.surface(), glam::Vec2::new(320.0, 240.0));
            assert_eq!(sim.cursor(), glam::Vec2::new(400.0, 300.0));
        }
        let report = sim.frame(i as f64 * 16.0, &mut painter);
        painter.ops.clear();
        if report.spawned {
            spawned += 1;
            let latest = sim.phrases().last().expect("spawned phrase").text;
            assert_eq!(sim.recent().latest(), Some(latest));
        }
        assert!(sim.recent().len() <= 7);
    }
    assert!(spawned > 7, "only {spawned} phrases spawned");
    assert_eq!(sim.recent().len(), 7);
}
