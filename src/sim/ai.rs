//! Automated paddle tracking
//!
//! Paddles chase the ball with a proportional step whose gain is redrawn
//! every tick, aiming at a point off the paddle's centre. The result lags
//! and wobbles instead of snapping onto the ball.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Paddle, Side};

/// Tunable tracking parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingParams {
    /// Aim point on the left paddle as a fraction of its height from the top
    pub left_aim: f32,
    /// Aim point on the right paddle as a fraction of its height from the top
    pub right_aim: f32,
    /// Lower bound of the per-tick gain (inclusive)
    pub gain_min: f32,
    /// Upper bound of the per-tick gain (exclusive)
    pub gain_max: f32,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self {
            left_aim: 0.25,
            right_aim: 0.75,
            gain_min: 0.4,
            gain_max: 1.4,
        }
    }
}

impl TrackingParams {
    pub fn aim_fraction(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_aim,
            Side::Right => self.right_aim,
        }
    }

    /// Draw this tick's gain
    pub fn draw_gain<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.gain_max > self.gain_min {
            rng.random_range(self.gain_min..self.gain_max)
        } else {
            self.gain_min
        }
    }
}

/// Step a paddle toward the ball's height using the given gain
pub fn track(paddle: &mut Paddle, ball_y: f32, aim_fraction: f32, gain: f32) {
    let aim = paddle.y + paddle.height() * aim_fraction;
    paddle.y += (ball_y - aim) * gain;
}
