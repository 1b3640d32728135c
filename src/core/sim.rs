//! Whole-scene state and the fixed per-frame order.
//!
//! Everything the animation mutates lives on [`Simulation`]. Input handlers
//! only overwrite the cursor or surface size; [`Simulation::frame`] is the
//! single writer for everything else.

use super::constants::{CURSOR_RADIUS, SHADOW_INNER_FRACTION, SHADOW_RADIUS};
use super::darkness::{Crossing, DarknessState};
use super::paint::{Painter, Rgba, CURSOR_FILL};
use super::params::SimParams;
use super::phrase::{Phrase, RecentPhrases, SpawnPolicy};
use super::tendril::Tendril;
use super::transition::{TransitionEffect, TransitionFrame};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

/// What happened during one call to [`Simulation::frame`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub crossing: Option<Crossing>,
    pub spawned: bool,
    pub purged: usize,
    pub transition: Option<TransitionFrame>,
}

pub struct Simulation {
    params: SimParams,
    surface: Vec2,
    cursor: Vec2,
    tendrils: Vec<Tendril>,
    phrases: Vec<Phrase>,
    darkness: DarknessState,
    transition: TransitionEffect,
    recent: RecentPhrases,
    spawn: SpawnPolicy,
    rng: StdRng,
    paused: bool,
}

impl Simulation {
    /// Cursor starts at the surface center with the swarm spread evenly
    /// around it.
    pub fn new(params: SimParams, width: f32, height: f32, seed: u64) -> Self {
        let surface = Vec2::new(width, height);
        let mut sim = Self {
            darkness: DarknessState::new(params.darkness_smoothing),
            transition: TransitionEffect::new(params.transition_ms),
            params,
            surface,
            cursor: surface * 0.5,
            tendrils: Vec::new(),
            phrases: Vec::new(),
            recent: RecentPhrases::default(),
            spawn: SpawnPolicy::default(),
            rng: StdRng::seed_from_u64(seed),
            paused: false,
        };
        sim.reseat_swarm();
        sim
    }

    /// Replace the swarm with fresh tendrils spaced evenly on a ring of
    /// `spawn_distance_factor` orbit radii around the cursor.
    pub fn reseat_swarm(&mut self) {
        let n = self.params.tendril_count;
        let distance = self.params.orbit_radius * self.params.spawn_distance_factor;
        let cursor = self.cursor;
        self.tendrils = (0..n)
            .map(|i| {
                let angle = i as f32 / n as f32 * TAU;
                let origin = cursor + Vec2::from_angle(angle) * distance;
                Tendril::spawn(origin, cursor, &self.params, &mut self.rng)
            })
            .collect();
        log::debug!("[swarm] seated {} tendrils at r={:.0}", n, distance);
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;
    }

    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Vec2::new(width, height);
    }

    pub fn tendrils(&self) -> &[Tendril] {
        &self.tendrils
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn push_phrase(&mut self, phrase: Phrase) {
        self.phrases.push(phrase);
    }

    pub fn darkness(&self) -> &DarknessState {
        &self.darkness
    }

    pub fn transition(&self) -> &TransitionEffect {
        &self.transition
    }

    pub fn recent(&self) -> &RecentPhrases {
        &self.recent
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn encircling_count(&self) -> usize {
        let radius = self.params.encircle_radius();
        self.tendrils
            .iter()
            .filter(|t| t.is_encircling(self.cursor, radius))
            .count()
    }

    /// Drop every discouraging phrase; encouraging ones are left untouched.
    pub fn purge_discouraging(&mut self) -> usize {
        let before = self.phrases.len();
        self.phrases.retain(|p| p.positive);
        before - self.phrases.len()
    }

    /// Run one frame at `now_ms` and draw it onto `painter`.
    ///
    /// Order: clear, darkness, shadow, tendrils, phrases, spawn, cursor,
    /// then the transition pass when active. While paused the scene is
    /// repainted without advancing.
    pub fn frame(&mut self, now_ms: f64, painter: &mut dyn Painter) -> FrameReport {
        let mut report = FrameReport::default();
        painter.clear(Rgba::WHITE);

        if self.paused {
            self.draw_scene(painter);
            return report;
        }

        report.crossing = self.update_darkness(now_ms);
        if report.crossing == Some(Crossing::ToBright) {
            report.purged = self.purge_discouraging();
            log::debug!("[phrase] purged {} discouraging phrases", report.purged);
        }
        self.draw_shadow(painter);

        for tendril in self.tendrils.iter_mut() {
            tendril.update(self.cursor, &self.params, &mut self.rng);
            tendril.draw(painter);
        }

        self.phrases.retain_mut(|p| p.update());
        for phrase in &self.phrases {
            phrase.draw(painter);
        }

        if let Some(phrase) = self.spawn.maybe_spawn(
            now_ms,
            self.darkness.is_dark(),
            self.surface,
            &self.params,
            &mut self.recent,
            &mut self.rng,
        ) {
            log::debug!(
                "[phrase] \"{}\" at ({:.0},{:.0}) positive={}",
                phrase.text,
                phrase.pos.x,
                phrase.pos.y,
                phrase.positive
            );
            self.phrases.push(phrase);
            report.spawned = true;
        }

        self.draw_cursor(painter);

        report.transition = self.transition.sample(now_ms, &mut self.rng);
        if let Some(fx) = &report.transition {
            self.draw_transition(painter, fx);
        }
        report
    }

    fn update_darkness(&mut self, now_ms: f64) -> Option<Crossing> {
        let encircling = self.encircling_count();
        let crossing = self.darkness.update(encircling, self.tendrils.len());
        if let Some(c) = crossing {
            self.transition.trigger(now_ms);
            if c == Crossing::ToBright {
                self.spawn.mark_bright(now_ms);
            }
            log::info!(
                "[mood] {:?} level={:.3} encircling={}/{}",
                c,
                self.darkness.level(),
                encircling,
                self.tendrils.len()
            );
        }
        crossing
    }

    fn draw_shadow(&self, painter: &mut dyn Painter) {
        if self.darkness.level() > 0.0 {
            painter.fill_radial_shadow(
                self.cursor,
                SHADOW_RADIUS * SHADOW_INNER_FRACTION,
                SHADOW_RADIUS,
                self.darkness.darken_alpha(),
            );
        }
    }

    fn draw_cursor(&self, painter: &mut dyn Painter) {
        painter.fill_circle(self.cursor, CURSOR_RADIUS, CURSOR_FILL);
    }

    fn draw_scene(&self, painter: &mut dyn Painter) {
        self.draw_shadow(painter);
        for tendril in &self.tendrils {
            tendril.draw(painter);
        }
        for phrase in &self.phrases {
            phrase.draw(painter);
        }
        self.draw_cursor(painter);
    }

    fn draw_transition(&self, painter: &mut dyn Painter, fx: &TransitionFrame) {
        painter.save();
        painter.translate(fx.shake);
        painter.set_blur(fx.blur_px);
        painter.clear(Rgba::WHITE);
        self.draw_scene(painter);
        painter.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paint::{PaintOp, RecordingPainter};

    #[test]
    fn new_swarm_is_evenly_spread() {
        let sim = Simulation::new(SimParams::default(), 800.0, 600.0, 5);
        assert_eq!(sim.tendrils().len(), 30);
        assert_eq!(sim.cursor(), Vec2::new(400.0, 300.0));
        for t in sim.tendrils() {
            assert!((t.head().distance(sim.cursor()) - 240.0).abs() < 1e-3);
        }
        assert_eq!(sim.encircling_count(), 0);
    }

    #[test]
    fn paused_frame_repaints_without_advancing() {
        let mut sim = Simulation::new(SimParams::default(), 800.0, 600.0, 5);
        sim.set_paused(true);
        let heads: Vec<Vec2> = sim.tendrils().iter().map(|t| t.head()).collect();
        let mut painter = RecordingPainter::new();
        let report = sim.frame(5000.0, &mut painter);
        assert_eq!(report, FrameReport::default());
        assert_eq!(painter.ops.first(), Some(&PaintOp::Clear));
        let after: Vec<Vec2> = sim.tendrils().iter().map(|t| t.head()).collect();
        assert_eq!(heads, after);
        assert!(sim.phrases().is_empty());
    }
}
