//! Paddle Court - classic two-paddle Pong on a flat 2D surface
//!
//! Core modules:
//! - `sim`: Fixed-rate simulation (entities, collisions, scoring, opponent)
//! - `renderer`: Paints game state onto a drawing surface
//! - `game_loop`: Start/stop control over a repeating tick schedule
//! - `game`: Owned aggregate tying state, config and RNG together
//! - `config`: Variant switches and tunable parameters
//! - `platform`: Browser glue (timers)

pub mod config;
pub mod game;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, Scores};
pub use game_loop::{LoopController, ManualScheduler, Scheduler};

/// Game configuration constants
pub mod consts {
    /// Ticks per second; one tick is the unit of simulated time
    pub const FRAMES_PER_SECOND: f64 = 60.0;
    /// Interval between ticks in milliseconds
    pub const TICK_INTERVAL_MS: f64 = 1000.0 / FRAMES_PER_SECOND;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Scalar speed in pixels per tick
    pub const BALL_START_SPEED: f32 = 12.0;
    /// Added to the speed on every paddle hit
    pub const BALL_SPEED_UP: f32 = 0.2;
    /// Speed ceiling for the classic rule set
    pub const BALL_SPEED_CAP: f32 = 24.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Maximum bounce deflection off a paddle (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Net dashes
    pub const NET_WIDTH: f32 = 4.0;
    pub const NET_DASH_HEIGHT: f32 = 30.0;
    pub const NET_PITCH: f32 = 45.0;

    /// Text sizes (px)
    pub const SCORE_FONT_PX: f32 = 32.0;
    pub const HINT_FONT_PX: f32 = 20.0;
}
