use crate::core::constants::PHRASE_FONT_PX;
use crate::core::{Font, Painter, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Painter`] over a Canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        Self { ctx, canvas }
    }

    #[inline]
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, color: Rgba) {
        // Always covers the whole backing store, whatever transform or
        // filter the caller has active.
        let (w, h) = self.size();
        self.ctx.save();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.set_filter("none");
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.restore();
    }

    fn fill_radial_shadow(&mut self, center: Vec2, inner: f32, outer: f32, alpha: f32) {
        let (w, h) = self.size();
        let (cx, cy) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(cx, cy, inner as f64, cx, cy, outer as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::error!("radial gradient error: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
        _ = gradient.add_color_stop(1.0, &Rgba::new(0, 0, 0, alpha).to_css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, color: Rgba) {
        self.ctx.set_font(&font.to_css(PHRASE_FONT_PX));
        self.ctx.set_fill_style_str(&color.to_css());
        _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn set_blur(&mut self, px: f32) {
        self.ctx.set_filter(&format!("blur({:.2}px)", px.max(0.0)));
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
