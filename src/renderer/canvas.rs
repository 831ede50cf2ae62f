//! Browser 2D canvas surface

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, colors};

/// Font family for scores and instructions
const FONT_FAMILY: &str = "fantasy";

/// Paints onto an `HtmlCanvasElement` through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2D context of a canvas
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, origin: Vec2, width: f32, height: f32, color: [f32; 4]) {
        self.ctx.set_fill_style_str(&colors::to_css(color));
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.ctx.set_fill_style_str(&colors::to_css(color));
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, baseline: Vec2, font_px: f32, color: [f32; 4]) {
        self.ctx.set_fill_style_str(&colors::to_css(color));
        self.ctx.set_font(&format!("{}px {}", font_px, FONT_FAMILY));
        if let Err(e) = self.ctx.fill_text(text, baseline.x as f64, baseline.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
