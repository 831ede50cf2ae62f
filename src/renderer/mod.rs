//! Rendering module
//!
//! Paints a read-only view of the game state onto any [`Surface`]. Only three
//! primitives are needed: filled rectangles, filled circles and text.

pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw_list::{DrawCmd, DrawList};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::{HINT_FONT_PX, SCORE_FONT_PX};
use crate::sim::{GameState, Paddle};

/// Something flat shapes and text can be painted on
pub trait Surface {
    /// Fill an axis-aligned rectangle given its top-left corner
    fn fill_rect(&mut self, origin: Vec2, width: f32, height: f32, color: [f32; 4]);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Draw text with its baseline starting at `baseline`
    fn fill_text(&mut self, text: &str, baseline: Vec2, font_px: f32, color: [f32; 4]);
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const NET: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// CSS `rgba()` string for a color
    pub fn to_css(color: [f32; 4]) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(color[0]),
            channel(color[1]),
            channel(color[2]),
            color[3].clamp(0.0, 1.0)
        )
    }
}

/// Instruction lines shown while the left paddle is automated
pub const PLAY_HINT: [&str; 2] = [
    "Press the spacebar key to play!",
    "Use mouse to control the left paddle",
];

/// Paint the whole surface with the background color
pub fn clear<S: Surface + ?Sized>(surface: &mut S, width: f32, height: f32) {
    surface.fill_rect(Vec2::ZERO, width, height, colors::BACKGROUND);
}

/// Paint one frame
///
/// Order: background, instructions, scores, net, paddles, ball.
pub fn render<S: Surface + ?Sized>(state: &GameState, config: &GameConfig, surface: &mut S) {
    let (w, h) = (state.width, state.height);
    clear(surface, w, h);

    if config.manual_play_enabled && !state.playable {
        let first = Vec2::new(w / 4.0, 5.0 * h / 7.0);
        surface.fill_text(PLAY_HINT[0], first, HINT_FONT_PX, colors::TEXT);
        surface.fill_text(PLAY_HINT[1], first + Vec2::new(0.0, 24.0), HINT_FONT_PX, colors::TEXT);
    }

    if config.score_display_enabled {
        let left = state.left.score.to_string();
        let right = state.right.score.to_string();
        surface.fill_text(&left, Vec2::new(w / 2.0 - 64.0, h / 5.0), SCORE_FONT_PX, colors::TEXT);
        surface.fill_text(&right, Vec2::new(w / 2.0 + 52.0, h / 5.0), SCORE_FONT_PX, colors::TEXT);
    }

    let net = &state.net;
    for dash in net.dashes(h) {
        surface.fill_rect(dash, net.width, net.dash_height, net.color);
    }

    draw_paddle(surface, &state.left);
    draw_paddle(surface, &state.right);

    let ball = &state.ball;
    surface.fill_circle(ball.pos, ball.radius(), ball.color);
}

fn draw_paddle<S: Surface + ?Sized>(surface: &mut S, paddle: &Paddle) {
    surface.fill_rect(paddle.origin(), paddle.width(), paddle.height(), paddle.color);
}
