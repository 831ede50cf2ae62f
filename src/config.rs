//! Game configuration
//!
//! One record covers every rule-set variant: optional speed cap, manual
//! play, score display and auto start. Loaded from JSON; missing fields fall
//! back to the classic rules.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::TrackingParams;

/// Errors from loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid JSON for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but make no sense together
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Rule set and tunable parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Variant switches ===
    /// Stop speeding the ball up once it reaches this speed
    pub speed_cap: Option<f32>,
    /// Space toggles pointer control of the left paddle
    pub manual_play_enabled: bool,
    /// Paint the two score numerals
    pub score_display_enabled: bool,
    /// Start the loop as soon as the page is up
    pub auto_start: bool,

    // === Ball ===
    pub ball_radius: f32,
    /// Speed at launch and after every point (pixels per tick)
    pub ball_start_speed: f32,
    /// Added to the speed on every paddle hit
    pub ball_speed_up: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Opponent tracking behaviour
    pub tracking: TrackingParams,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// Full game: capped speed, playable with the mouse, scores shown
    pub fn classic() -> Self {
        Self {
            speed_cap: Some(BALL_SPEED_CAP),
            manual_play_enabled: true,
            score_display_enabled: true,
            auto_start: true,

            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,
            ball_speed_up: BALL_SPEED_UP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            tracking: TrackingParams::default(),
        }
    }

    /// Hands-off demo: both paddles automated, no scores, no speed ceiling
    pub fn attract() -> Self {
        Self {
            speed_cap: None,
            manual_play_enabled: false,
            score_display_enabled: false,
            ..Self::classic()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a config, falling back to classic rules on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded game config");
                config
            }
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Reject parameter combinations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("ball_radius", self.ball_radius),
            ("ball_start_speed", self.ball_start_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.ball_speed_up.is_finite() && self.ball_speed_up >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ball_speed_up must not be negative, got {}",
                self.ball_speed_up
            )));
        }
        match self.speed_cap {
            Some(cap) if cap.is_nan() || cap < self.ball_start_speed => {
                return Err(ConfigError::Invalid(format!(
                    "speed_cap {cap} is below ball_start_speed {}",
                    self.ball_start_speed
                )));
            }
            _ => {}
        }
        let t = &self.tracking;
        for (name, value) in [("left_aim", t.left_aim), ("right_aim", t.right_aim)] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("tracking {name} must be finite, got {value}")));
            }
        }
        if !(t.gain_min.is_finite() && t.gain_max.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "tracking gain range [{}, {}) must be finite",
                t.gain_min, t.gain_max
            )));
        }
        if !(t.gain_min > 0.0 && t.gain_max >= t.gain_min) {
            return Err(ConfigError::Invalid(format!(
                "tracking gain range [{}, {}) is empty or not positive",
                t.gain_min, t.gain_max
            )));
        }
        Ok(())
    }
}
