use super::constants::{BLUR_MAX_PX, SHAKE_MAX};
use glam::Vec2;
use rand::Rng;

/// One sampled frame of the shake+blur flourish.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionFrame {
    pub progress: f32,
    pub shake: Vec2,
    pub blur_px: f32,
}

impl TransitionFrame {
    #[inline]
    pub fn shake_amount(&self) -> f32 {
        SHAKE_MAX * (1.0 - self.progress)
    }
}

/// Single-instance flourish, re-armed on every darkness crossing.
#[derive(Clone, Debug)]
pub struct TransitionEffect {
    active: bool,
    duration_ms: f64,
    start_ms: f64,
}

impl TransitionEffect {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            active: false,
            duration_ms,
            start_ms: 0.0,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Start (or restart) the flourish at `now_ms`.
    pub fn trigger(&mut self, now_ms: f64) {
        self.active = true;
        self.start_ms = now_ms;
    }

    /// Progress in [0, 1] at `now_ms`, without touching the active flag.
    pub fn progress_at(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Deterministic part of a frame: progress and blur, zero shake.
    pub fn sample_at(&self, now_ms: f64) -> TransitionFrame {
        let progress = self.progress_at(now_ms);
        TransitionFrame {
            progress,
            shake: Vec2::ZERO,
            blur_px: BLUR_MAX_PX * (1.0 - progress),
        }
    }

    /// Sample the active flourish, drawing a shake offset from `rng`.
    /// Deactivates once progress reaches 1; returns `None` when idle.
    pub fn sample<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Option<TransitionFrame> {
        if !self.active {
            return None;
        }
        let mut frame = self.sample_at(now_ms);
        let amount = frame.shake_amount();
        frame.shake = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * amount;
        if frame.progress >= 1.0 {
            self.active = false;
        }
        Some(frame)
    }
}
