//! Game state and core simulation types
//!
//! Every entity is created once when the court is built and lives until the
//! surface goes away. Scoring only re-centres the ball.

use glam::Vec2;

use super::collision::Aabb;
use crate::config::GameConfig;
use crate::consts::{NET_DASH_HEIGHT, NET_PITCH, NET_WIDTH};
use crate::renderer::colors;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// User paddle (pointer or automated)
    Left,
    /// Opponent paddle (always automated)
    Right,
}

impl Side {
    /// The other side of the net
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of a ball leaving this side's paddle
    pub fn departure_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// `scorer` won the point; the ball went back to the centre
    Scored { scorer: Side },
    /// Ball came off a paddle at `angle` radians from horizontal
    PaddleHit { side: Side, angle: f32 },
    /// Ball bounced off the top or bottom edge
    WallBounce,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scalar speed; equals `vel.length()` after every redirection
    pub speed: f32,
    pub color: [f32; 4],
    radius: f32,
    speed_up: f32,
}

impl Ball {
    /// Create a ball at `center` heading down-right at 45 degrees
    pub fn new(center: Vec2, radius: f32, speed: f32, speed_up: f32) -> Self {
        let angle = std::f32::consts::FRAC_PI_4;
        Self {
            pos: center,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            speed,
            color: colors::BALL,
            radius,
            speed_up,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Speed added on every paddle hit
    #[inline]
    pub fn speed_up(&self) -> f32 {
        self.speed_up
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_circle(self.pos, self.radius)
    }

    /// Serve again from `center` toward the side that just conceded
    ///
    /// The horizontal direction flips, the vertical direction is kept and the
    /// magnitude drops back to `start_speed`.
    pub fn reset(&mut self, center: Vec2, start_speed: f32) {
        let dir = Vec2::new(-self.vel.x, self.vel.y).normalize_or(Vec2::NEG_X);
        self.pos = center;
        self.speed = start_speed;
        self.vel = dir * start_speed;
    }

    /// Rebuild the velocity from a bounce angle and horizontal direction
    pub fn redirect(&mut self, angle: f32, direction: f32) {
        self.vel = Vec2::new(direction * angle.cos(), angle.sin()) * self.speed;
    }
}

/// A paddle; only its vertical position ever changes
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    /// Top edge
    pub y: f32,
    pub score: u32,
    pub color: [f32; 4],
    x: f32,
    width: f32,
    height: f32,
}

impl Paddle {
    /// Paddle flush against its side of a `surface_width` x `surface_height` court,
    /// vertically centred
    pub fn new(side: Side, surface_width: f32, surface_height: f32, width: f32, height: f32) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => surface_width - width,
        };
        Self {
            side,
            y: (surface_height - height) / 2.0,
            score: 0,
            color: colors::PADDLE,
            x,
            width,
            height,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_rect(self.origin(), self.width, self.height)
    }

    /// Centre the paddle on a pointer's vertical position
    pub fn follow_pointer(&mut self, pointer_y: f32) {
        self.y = pointer_y - self.height / 2.0;
    }
}

/// Decorative dashed centre line
#[derive(Debug, Clone, Copy)]
pub struct Net {
    pub x: f32,
    pub width: f32,
    pub dash_height: f32,
    pub pitch: f32,
    pub color: [f32; 4],
}

impl Net {
    pub fn new(surface_width: f32) -> Self {
        Self {
            x: (surface_width - NET_WIDTH) / 2.0,
            width: NET_WIDTH,
            dash_height: NET_DASH_HEIGHT,
            pitch: NET_PITCH,
            color: colors::NET,
        }
    }

    /// Top-left corners of every dash down a surface of the given height
    pub fn dashes(&self, surface_height: f32) -> impl Iterator<Item = Vec2> + '_ {
        (0u32..)
            .map(move |i| i as f32 * self.pitch)
            .take_while(move |y| *y <= surface_height)
            .map(move |y| Vec2::new(self.x, y))
    }
}

/// Complete state of one court
#[derive(Debug, Clone)]
pub struct GameState {
    /// Surface width, fixed at startup
    pub width: f32,
    /// Surface height, fixed at startup
    pub height: f32,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub net: Net,
    /// Left paddle follows the pointer instead of tracking the ball
    pub playable: bool,
}

impl GameState {
    /// Build a court of the given size with entities at their start positions
    pub fn new(config: &GameConfig, width: f32, height: f32) -> Self {
        let center = Vec2::new(width / 2.0, height / 2.0);
        Self {
            width,
            height,
            ball: Ball::new(
                center,
                config.ball_radius,
                config.ball_start_speed,
                config.ball_speed_up,
            ),
            left: Paddle::new(Side::Left, width, height, config.paddle_width, config.paddle_height),
            right: Paddle::new(Side::Right, width, height, config.paddle_width, config.paddle_height),
            net: Net::new(width),
            playable: false,
        }
    }

    /// Centre of the surface
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Whether a paddle is driven by the tracking AI this tick
    pub fn is_automated(&self, side: Side) -> bool {
        match side {
            Side::Left => !self.playable,
            Side::Right => true,
        }
    }
}
