//! Recording surface
//!
//! Keeps every primitive as a value instead of painting it. Used by tests and
//! by the headless native runner.

use glam::Vec2;

use super::Surface;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        origin: Vec2,
        width: f32,
        height: f32,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        baseline: Vec2,
        font_px: f32,
        color: [f32; 4],
    },
}

/// Ordered list of draw commands
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text commands as (text, baseline) in paint order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, baseline, .. } => Some((text.as_str(), *baseline)),
            _ => None,
        })
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Rect { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, origin: Vec2, width: f32, height: f32, color: [f32; 4]) {
        self.commands.push(DrawCmd::Rect {
            origin,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, baseline: Vec2, font_px: f32, color: [f32; 4]) {
        self.commands.push(DrawCmd::Text {
            text: text.to_owned(),
            baseline,
            font_px,
            color,
        });
    }
}
