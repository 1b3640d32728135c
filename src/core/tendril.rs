use super::constants::*;
use super::paint::{Painter, TENDRIL_STROKE, TENDRIL_TIP};
use super::params::SimParams;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

pub type SegmentChain = SmallVec<[Vec2; 16]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Normal,
    Aggressive,
    Hesitant,
    Erratic,
}

/// How a behavior reshapes the distance-derived speed multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpeedModifier {
    None,
    Scale(f32),
    /// Multiply by `1 + (u - 0.5) * spread` with `u` uniform in [0, 1).
    Jitter(f32),
}

impl SpeedModifier {
    pub fn apply<R: Rng + ?Sized>(self, multiplier: f32, rng: &mut R) -> f32 {
        match self {
            SpeedModifier::None => multiplier,
            SpeedModifier::Scale(k) => multiplier * k,
            SpeedModifier::Jitter(spread) => {
                multiplier * (1.0 + (rng.gen::<f32>() - 0.5) * spread)
            }
        }
    }
}

/// Per-behavior parameter row. `None` keeps the tendril default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BehaviorProfile {
    pub speed: SpeedModifier,
    pub turn_speed: Option<f32>,
    pub wiggle: Option<f32>,
}

impl Behavior {
    pub const ALL: [Behavior; 4] = [
        Behavior::Normal,
        Behavior::Aggressive,
        Behavior::Hesitant,
        Behavior::Erratic,
    ];

    pub const fn profile(self) -> BehaviorProfile {
        match self {
            Behavior::Normal => BehaviorProfile {
                speed: SpeedModifier::None,
                turn_speed: None,
                wiggle: None,
            },
            Behavior::Aggressive => BehaviorProfile {
                speed: SpeedModifier::Scale(AGGRESSIVE_SPEED),
                turn_speed: Some(AGGRESSIVE_TURN),
                wiggle: None,
            },
            Behavior::Hesitant => BehaviorProfile {
                speed: SpeedModifier::Scale(HESITANT_SPEED),
                turn_speed: Some(HESITANT_TURN),
                wiggle: None,
            },
            Behavior::Erratic => BehaviorProfile {
                speed: SpeedModifier::Jitter(ERRATIC_JITTER),
                turn_speed: None,
                wiggle: Some(ERRATIC_WIGGLE),
            },
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Debug)]
pub struct Tendril {
    segments: SegmentChain,
    segment_length: f32,
    behavior: Behavior,
    base_speed: f32,
    turn_speed: f32,
    wiggle: f32,
    angle: f32,
}

impl Tendril {
    /// Build a tendril whose head sits at `origin`, with a random behavior.
    pub fn spawn<R: Rng + ?Sized>(
        origin: Vec2,
        cursor: Vec2,
        params: &SimParams,
        rng: &mut R,
    ) -> Self {
        let behavior = Behavior::random(rng);
        Self::with_behavior(origin, cursor, behavior, params, rng)
    }

    pub fn with_behavior<R: Rng + ?Sized>(
        origin: Vec2,
        cursor: Vec2,
        behavior: Behavior,
        params: &SimParams,
        rng: &mut R,
    ) -> Self {
        let len = params.segment_length;
        let mut segments = SegmentChain::with_capacity(params.segment_count);
        let mut current = origin;
        for _ in 0..params.segment_count.max(1) {
            segments.push(current);
            current += Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * len;
        }
        let to_origin = origin - cursor;
        let profile = behavior.profile();
        Self {
            segments,
            segment_length: len,
            behavior,
            base_speed: BASE_SPEED_MIN + rng.gen::<f32>() * BASE_SPEED_SPAN,
            turn_speed: profile.turn_speed.unwrap_or(DEFAULT_TURN_SPEED),
            wiggle: profile.wiggle.unwrap_or(DEFAULT_WIGGLE),
            angle: to_origin.y.atan2(to_origin.x),
        }
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Vec2] {
        &self.segments
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn turn_speed(&self) -> f32 {
        self.turn_speed
    }

    pub fn wiggle(&self) -> f32 {
        self.wiggle
    }

    #[inline]
    pub fn is_encircling(&self, cursor: Vec2, radius: f32) -> bool {
        self.head().distance(cursor) < radius
    }

    /// Advance one frame: orbit the cursor, ease the head toward its orbit
    /// slot, jitter it, then relax the rest of the chain.
    pub fn update<R: Rng + ?Sized>(&mut self, cursor: Vec2, params: &SimParams, rng: &mut R) {
        let orbit = params.orbit_radius;
        let head = self.head();
        let distance = head.distance(cursor);

        let multiplier = if orbit > 0.0 {
            (distance / orbit).min(MAX_SPEED_MULTIPLIER)
        } else {
            MAX_SPEED_MULTIPLIER
        };
        let multiplier = self.behavior.profile().speed.apply(multiplier, rng);
        let rate = if distance < params.encircle_radius() {
            NEAR_ORBIT_RATE
        } else {
            multiplier
        };
        self.angle += self.base_speed * rate;

        let target = cursor + Vec2::from_angle(self.angle) * orbit;
        let mut head = head.lerp(target, self.turn_speed);
        head.x += (rng.gen::<f32>() - 0.5) * self.wiggle;
        head.y += (rng.gen::<f32>() - 0.5) * self.wiggle;
        self.segments[0] = head;

        relax_chain(&mut self.segments, self.segment_length);
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        painter.stroke_polyline(&self.segments, TENDRIL_STROKE, TENDRIL_LINE_WIDTH);
        painter.fill_circle(self.head(), TIP_RADIUS, TENDRIL_TIP);
    }
}

/// Pull each segment toward its predecessor until the gap is at most
/// `rest`. Segments already closer than `rest` are left alone.
pub fn relax_chain(segments: &mut [Vec2], rest: f32) {
    for i in 1..segments.len() {
        let prev = segments[i - 1];
        let delta = prev - segments[i];
        let distance = delta.length();
        if distance > rest {
            segments[i] += delta * ((distance - rest) / distance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn behavior_table_matches_tuning() {
        let aggressive = Behavior::Aggressive.profile();
        assert_eq!(aggressive.speed, SpeedModifier::Scale(1.5));
        assert_eq!(aggressive.turn_speed, Some(0.05));
        let hesitant = Behavior::Hesitant.profile();
        assert_eq!(hesitant.speed, SpeedModifier::Scale(0.7));
        assert_eq!(hesitant.turn_speed, Some(0.02));
        let erratic = Behavior::Erratic.profile();
        assert_eq!(erratic.wiggle, Some(0.1));
        assert_eq!(erratic.turn_speed, None);
        assert_eq!(Behavior::Normal.profile().speed, SpeedModifier::None);
    }

    #[test]
    fn jitter_stays_within_spread() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let m = SpeedModifier::Jitter(0.5).apply(1.0, &mut rng);
            assert!((0.75..1.25).contains(&m), "jittered multiplier {m}");
        }
    }

    #[test]
    fn relax_only_pulls_overstretched_links() {
        let mut chain = [
            Vec2::ZERO,
            Vec2::new(3.0, 0.0),
            Vec2::new(23.0, 0.0),
        ];
        relax_chain(&mut chain, 8.0);
        assert_eq!(chain[1], Vec2::new(3.0, 0.0));
        assert!((chain[2].x - 11.0).abs() < 1e-4);
    }

    #[test]
    fn spawn_faces_away_from_cursor() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = SimParams::default();
        let cursor = Vec2::new(100.0, 100.0);
        let t = Tendril::spawn(Vec2::new(100.0, 340.0), cursor, &params, &mut rng);
        assert!((t.angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        assert_eq!(t.segments().len(), params.segment_count);
        assert!(t.base_speed() >= 0.01 && t.base_speed() < 0.03);
    }
}
