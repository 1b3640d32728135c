use super::constants::{PICK_MAX_ATTEMPTS, RECENT_HISTORY_LEN};
use super::paint::{Font, Painter, NEGATIVE_TEXT, POSITIVE_TEXT};
use super::params::SimParams;
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;

pub const NEGATIVE_THOUGHTS: &[&str] = &[
    "I've failed them",
    "I'm not enough",
    "I can't do this",
    "What's the point?",
    "Nobody understands",
    "I'm always messing up",
    "I'll never be good enough",
    "Everything is my fault",
    "I'm so stupid",
    "I'm a disappointment",
    "I'm wasting my life",
    "I'll always be alone",
    "I don't deserve happiness",
    "I'm a burden to everyone",
    "Things will never get better",
    "I'm trapped",
    "No one cares",
    "It's hopeless",
    "I'm worthless",
    "I'll always be a failure",
    "I'm unlovable",
    "I don't belong anywhere",
    "I'm weak",
    "I'll never succeed",
    "Everything is falling apart",
];

pub const POSITIVE_THOUGHTS: &[&str] = &[
    "This is possible",
    "There's a way",
    "I can learn from this",
    "One step at a time",
    "I am resilient",
    "I have overcome before",
    "I am worthy",
    "Progress, not perfection",
    "I choose to keep going",
    "This too shall pass",
    "I am enough",
    "Every day is a new chance",
    "I can handle this",
    "I believe in myself",
    "Small steps lead to big changes",
    "I'm growing stronger",
    "I have value",
    "I can adapt",
    "I'm making progress",
    "I'm capable of change",
    "My efforts matter",
    "I deserve joy",
    "I'm finding my way",
    "I have inner strength",
    "Better days are coming",
];

/// Floating thought that fades out over a few seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Phrase {
    pub text: &'static str,
    pub pos: Vec2,
    pub opacity: f32,
    pub positive: bool,
    fade: f32,
}

impl Phrase {
    pub fn new(text: &'static str, pos: Vec2, positive: bool, fade: f32) -> Self {
        Self {
            text,
            pos,
            opacity: 1.0,
            positive,
            fade,
        }
    }

    /// Fade one frame; returns whether the phrase is still visible.
    pub fn update(&mut self) -> bool {
        self.opacity -= self.fade;
        self.opacity > 0.0
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        let (font, color) = if self.positive {
            (Font::Regular, POSITIVE_TEXT)
        } else {
            (Font::Bold, NEGATIVE_TEXT)
        };
        painter.fill_text(self.text, self.pos, font, color.with_alpha(self.opacity));
    }
}

/// Last few texts shown, oldest first.
#[derive(Clone, Debug)]
pub struct RecentPhrases {
    items: VecDeque<&'static str>,
    capacity: usize,
}

impl Default for RecentPhrases {
    fn default() -> Self {
        Self::with_capacity(RECENT_HISTORY_LEN)
    }
}

impl RecentPhrases {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|t| *t == text)
    }

    pub fn push(&mut self, text: &'static str) {
        self.items.push_back(text);
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&'static str> {
        self.items.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().copied()
    }
}

/// Pick a text from `pool` that is not in `recent`.
///
/// Rejection sampling is capped; past the cap the first non-recent entry
/// wins, and if every entry is recent a repeat is allowed.
pub fn pick_text<R: Rng + ?Sized>(
    pool: &[&'static str],
    recent: &RecentPhrases,
    rng: &mut R,
) -> Option<&'static str> {
    if pool.is_empty() {
        return None;
    }
    for _ in 0..PICK_MAX_ATTEMPTS {
        let text = pool[rng.gen_range(0..pool.len())];
        if !recent.contains(text) {
            return Some(text);
        }
    }
    if let Some(text) = pool.iter().copied().find(|t| !recent.contains(t)) {
        return Some(text);
    }
    log::warn!(
        "[phrase] pool of {} exhausted by history of {}, allowing a repeat",
        pool.len(),
        recent.len()
    );
    Some(pool[rng.gen_range(0..pool.len())])
}

/// Timers gating when the next phrase may appear.
#[derive(Clone, Debug)]
pub struct SpawnPolicy {
    last_spawn_ms: f64,
    bright_since_ms: f64,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            last_spawn_ms: 0.0,
            bright_since_ms: f64::NEG_INFINITY,
        }
    }
}

impl SpawnPolicy {
    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    /// Record a dark-to-bright transition at `now_ms`.
    pub fn mark_bright(&mut self, now_ms: f64) {
        self.bright_since_ms = now_ms;
    }

    /// Called every frame. Returns a new phrase when the interval has
    /// elapsed and the post-brightening quiet period is over.
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        dark: bool,
        surface: Vec2,
        params: &SimParams,
        recent: &mut RecentPhrases,
        rng: &mut R,
    ) -> Option<Phrase> {
        if now_ms - self.last_spawn_ms <= params.phrase_interval_ms {
            return None;
        }
        if !dark && now_ms - self.bright_since_ms < params.bright_quiet_ms {
            return None;
        }

        let margin = params.phrase_margin;
        let pos = Vec2::new(
            axis_position(surface.x, margin, rng),
            axis_position(surface.y, margin, rng),
        );
        let pool = if dark {
            NEGATIVE_THOUGHTS
        } else {
            POSITIVE_THOUGHTS
        };
        let text = pick_text(pool, recent, rng)?;
        recent.push(text);
        self.last_spawn_ms = now_ms;
        Some(Phrase::new(text, pos, !dark, params.phrase_fade))
    }
}

/// Uniform in [margin, extent - margin), or the center when too small.
fn axis_position<R: Rng + ?Sized>(extent: f32, margin: f32, rng: &mut R) -> f32 {
    if extent - margin > margin {
        rng.gen_range(margin..extent - margin)
    } else {
        extent * 0.5
    }
}
