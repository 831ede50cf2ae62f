//! Game aggregate
//!
//! Owns the court, its rules and the jitter RNG. Platform glue forwards input
//! here and calls [`Game::frame`] once per tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::TICK_INTERVAL_MS;
use crate::game_loop::{LoopController, ManualScheduler};
use crate::renderer::{self, DrawList, Surface};
use crate::sim::{GameEvent, GameState, Side, tick};

/// Key code that switches between pointer control and automated play
pub const TOGGLE_PLAY_KEY: &str = "Space";

/// Point totals for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

/// One running court
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub config: GameConfig,
    rng: Pcg32,
}

impl Game {
    /// Set up a court sized to the host surface
    pub fn new(config: GameConfig, width: f32, height: f32, seed: u64) -> Self {
        log::info!("New court {}x{} (seed {})", width, height, seed);
        Self {
            state: GameState::new(&config, width, height),
            config,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Advance the simulation one tick without painting
    pub fn step(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.config, &mut self.rng);
        for event in &events {
            match event {
                GameEvent::Scored { scorer } => {
                    let scores = self.scores();
                    log::info!("{:?} scores ({} - {})", scorer, scores.left, scores.right);
                }
                GameEvent::PaddleHit { side, angle } => {
                    log::debug!(
                        "{:?} paddle hit at {:.1} deg, speed now {:.2}",
                        side,
                        angle.to_degrees(),
                        self.state.ball.speed
                    );
                }
                GameEvent::WallBounce => log::trace!("wall bounce at y={:.1}", self.state.ball.pos.y),
            }
        }
        events
    }

    /// Paint the current state
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        renderer::render(&self.state, &self.config, surface);
    }

    /// One scheduled tick: simulate, then paint
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Vec<GameEvent> {
        let events = self.step();
        self.render(surface);
        events
    }

    /// Pointer moved to `y` (surface coordinates); moves the left paddle when playable
    pub fn pointer_moved(&mut self, y: f32) {
        if self.state.playable {
            self.state.left.follow_pointer(y);
        }
    }

    /// Handle a key press; returns true if the key was recognised
    pub fn key_pressed(&mut self, code: &str) -> bool {
        if code == TOGGLE_PLAY_KEY && self.config.manual_play_enabled {
            self.toggle_playable();
            true
        } else {
            false
        }
    }

    /// Switch the left paddle between pointer control and automated tracking
    ///
    /// The paddle keeps its current position either way.
    pub fn toggle_playable(&mut self) {
        self.state.playable = !self.state.playable;
        log::info!(
            "Left paddle now {}",
            if self.state.playable { "pointer-driven" } else { "automated" }
        );
    }

    /// Play `ticks` frames on simulated time, recording each into `surface`
    ///
    /// There is nobody to press start in a headless run, so the loop starts
    /// regardless of `auto_start`. Returns the number of frames played.
    pub fn play_headless(&mut self, surface: &mut DrawList, ticks: u64) -> u64 {
        let mut controller = LoopController::new(ManualScheduler::new());
        controller.start();

        let mut played = 0;
        while played < ticks {
            let due = controller.scheduler_mut().advance(TICK_INTERVAL_MS);
            for _ in 0..due {
                if played == ticks {
                    break;
                }
                surface.reset();
                self.frame(surface);
                played += 1;
            }
        }
        controller.stop(surface, self.width(), self.height());
        played
    }

    pub fn scores(&self) -> Scores {
        Scores {
            left: self.state.paddle(Side::Left).score,
            right: self.state.paddle(Side::Right).score,
        }
    }

    pub fn width(&self) -> f32 {
        self.state.width
    }

    pub fn height(&self) -> f32 {
        self.state.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    fn game() -> Game {
        Game::new(GameConfig::classic(), 800.0, 600.0, 42)
    }

    #[test]
    fn test_pointer_ignored_until_playable() {
        let mut g = game();
        let start = g.state.left.y;
        g.pointer_moved(100.0);
        assert_eq!(g.state.left.y, start);

        assert!(g.key_pressed("Space"));
        g.pointer_moved(100.0);
        assert_eq!(g.state.left.y, 50.0);
    }

    #[test]
    fn test_toggle_keeps_paddle_position() {
        let mut g = game();
        g.toggle_playable();
        g.pointer_moved(420.0);
        let y = g.state.left.y;

        g.toggle_playable();
        assert!(!g.state.playable);
        assert_eq!(g.state.left.y, y);

        g.toggle_playable();
        assert!(g.state.playable);
        assert_eq!(g.state.left.y, y);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut g = game();
        assert!(!g.key_pressed("KeyA"));
        assert!(!g.state.playable);
    }

    #[test]
    fn test_space_ignored_without_manual_play() {
        let mut g = Game::new(GameConfig::attract(), 800.0, 600.0, 1);
        assert!(!g.key_pressed("Space"));
        assert!(!g.state.playable);
    }

    #[test]
    fn test_frame_paints_after_step() {
        let mut g = game();
        let mut list = DrawList::new();
        let before = g.state.ball.pos;
        g.frame(&mut list);
        assert_ne!(g.state.ball.pos, before);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_headless_plays_without_auto_start() {
        let config = GameConfig {
            auto_start: false,
            ..GameConfig::attract()
        };
        let mut g = Game::new(config, 800.0, 600.0, 9);
        let mut list = DrawList::new();

        assert_eq!(g.play_headless(&mut list, 120), 120);
        assert_ne!(g.state.ball.pos, g.state.center());
        // Ends on the cleared frame left by stopping
        assert_eq!(list.commands.last(), list.commands.first());
    }

    #[test]
    fn test_scores_snapshot() {
        let mut g = game();
        g.state.left.score = 2;
        g.state.right.score = 5;
        assert_eq!(g.scores(), Scores { left: 2, right: 5 });
        let json = serde_json::to_string(&g.scores()).unwrap();
        assert_eq!(json, r#"{"left":2,"right":5}"#);
    }
}
