//! Drawing seam between the simulation and whatever surface shows it.
//!
//! The simulation only ever talks to a [`Painter`]. The web front-end
//! implements it over a Canvas 2D context; tests use [`RecordingPainter`] to
//! inspect what was drawn and in which order.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string; alpha is clamped to [0, 1].
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

pub const TENDRIL_STROKE: Rgba = Rgba::new(0, 0, 0, 0.7);
pub const TENDRIL_TIP: Rgba = Rgba::new(0, 0, 0, 0.9);
pub const CURSOR_FILL: Rgba = Rgba::new(255, 0, 0, 0.7);
pub const POSITIVE_TEXT: Rgba = Rgba::new(100, 100, 100, 1.0);
pub const NEGATIVE_TEXT: Rgba = Rgba::new(0, 0, 0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    pub fn to_css(self, px: u32) -> String {
        match self {
            Font::Regular => format!("{px}px Arial"),
            Font::Bold => format!("bold {px}px Arial"),
        }
    }
}

pub trait Painter {
    /// Fill the whole surface, discarding anything drawn before.
    fn clear(&mut self, color: Rgba);
    /// Fill the whole surface with a radial gradient centered on `center`:
    /// transparent inside `inner`, black at `alpha` from `outer` outwards.
    fn fill_radial_shadow(&mut self, center: Vec2, inner: f32, outer: f32, alpha: f32);
    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, color: Rgba);
    fn save(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn set_blur(&mut self, px: f32);
    fn restore(&mut self);
}

/// One recorded call on a [`RecordingPainter`].
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    Clear,
    Shadow { alpha: f32 },
    Polyline { points: usize },
    Circle { center: Vec2, radius: f32 },
    Text { text: String, alpha: f32 },
    Save,
    Translate(Vec2),
    Blur(f32),
    Restore,
}

/// Painter that only remembers what it was asked to draw.
#[derive(Default, Debug)]
pub struct RecordingPainter {
    pub ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, _color: Rgba) {
        self.ops.push(PaintOp::Clear);
    }

    fn fill_radial_shadow(&mut self, _center: Vec2, _inner: f32, _outer: f32, alpha: f32) {
        self.ops.push(PaintOp::Shadow { alpha });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], _color: Rgba, _width: f32) {
        self.ops.push(PaintOp::Polyline {
            points: points.len(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Rgba) {
        self.ops.push(PaintOp::Circle { center, radius });
    }

    fn fill_text(&mut self, text: &str, _pos: Vec2, _font: Font, color: Rgba) {
        self.ops.push(PaintOp::Text {
            text: text.to_string(),
            alpha: color.a,
        });
    }

    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(PaintOp::Translate(offset));
    }

    fn set_blur(&mut self, px: f32) {
        self.ops.push(PaintOp::Blur(px));
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings_match_canvas_syntax() {
        assert_eq!(CURSOR_FILL.to_css(), "rgba(255, 0, 0, 0.7)");
        assert_eq!(NEGATIVE_TEXT.with_alpha(1.5).to_css(), "rgba(0, 0, 0, 1)");
        assert_eq!(Font::Regular.to_css(16), "16px Arial");
        assert_eq!(Font::Bold.to_css(16), "bold 16px Arial");
    }
}
