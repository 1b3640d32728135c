use super::constants::{DARKEN_MAX_ALPHA, DARKNESS_THRESHOLD};

/// Direction in which the smoothed level crossed the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    ToDark,
    ToBright,
}

/// Smoothed mood driven by how many tendrils encircle the cursor.
#[derive(Clone, Debug)]
pub struct DarknessState {
    level: f32,
    smoothing: f32,
}

impl DarknessState {
    pub fn new(smoothing: f32) -> Self {
        Self {
            level: 0.0,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.level > DARKNESS_THRESHOLD
    }

    /// Alpha of the shadow ring drawn around the cursor.
    #[inline]
    pub fn darken_alpha(&self) -> f32 {
        DARKEN_MAX_ALPHA * self.level
    }

    /// Ease toward the target for `encircling` of `total` tendrils and
    /// report a threshold crossing, if this step made one.
    pub fn update(&mut self, encircling: usize, total: usize) -> Option<Crossing> {
        let target = target_darkness(encircling, total);
        let previous = self.level;
        self.level += (target - self.level) * self.smoothing;
        crossing(previous, self.level)
    }
}

/// Zero until more than half the swarm encircles, then linear up to 1.
pub fn target_darkness(encircling: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    let ratio = encircling.min(total) as f32 / total as f32;
    ((ratio - 0.5) * 2.0).clamp(0.0, 1.0)
}

pub fn crossing(previous: f32, current: f32) -> Option<Crossing> {
    if previous <= DARKNESS_THRESHOLD && current > DARKNESS_THRESHOLD {
        Some(Crossing::ToDark)
    } else if previous > DARKNESS_THRESHOLD && current <= DARKNESS_THRESHOLD {
        Some(Crossing::ToBright)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_ramps_after_half() {
        assert_eq!(target_darkness(0, 30), 0.0);
        assert_eq!(target_darkness(15, 30), 0.0);
        assert!((target_darkness(24, 30) - 0.6).abs() < 1e-6);
        assert_eq!(target_darkness(30, 30), 1.0);
        assert_eq!(target_darkness(3, 0), 0.0);
    }

    #[test]
    fn crossing_fires_once_per_edge() {
        let mut state = DarknessState::new(0.05);
        let mut crossings = Vec::new();
        for _ in 0..400 {
            if let Some(c) = state.update(30, 30) {
                crossings.push(c);
            }
        }
        assert_eq!(crossings, vec![Crossing::ToDark]);
        assert!(state.level() > 0.99);

        for _ in 0..400 {
            if let Some(c) = state.update(0, 30) {
                crossings.push(c);
            }
        }
        assert_eq!(crossings, vec![Crossing::ToDark, Crossing::ToBright]);
        assert!(state.level() < 0.01);
    }
}
