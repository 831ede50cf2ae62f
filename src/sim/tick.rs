//! Fixed-rate simulation tick
//!
//! One call advances the court by exactly one frame. Stage order matters:
//! every later stage sees the ball as the scoring check left it.

use rand::Rng;

use super::ai;
use super::collision::circle_rect_overlap;
use super::state::{Ball, GameEvent, GameState, Side};
use crate::config::GameConfig;
use crate::consts::MAX_BOUNCE_ANGLE;

/// Advance the game state by one tick
///
/// Returns what happened so callers can log or react to it.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, config: &GameConfig, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match check_scoring(state, config) {
        Some(scorer) => events.push(GameEvent::Scored { scorer }),
        None => integrate(state),
    }

    move_automated_paddles(state, config, rng);

    if bounce_walls(state) {
        events.push(GameEvent::WallBounce);
    }

    if let Some((side, angle)) = deflect_off_paddle(state, config) {
        events.push(GameEvent::PaddleHit { side, angle });
    }

    events
}

/// Award a point when the ball reaches either end, then serve again
///
/// Returns the side that scored. A scoring tick skips integration so the
/// ball is seen at the centre once the tick is over.
fn check_scoring(state: &mut GameState, config: &GameConfig) -> Option<Side> {
    let ball = &state.ball;
    let scorer = if ball.pos.x - ball.radius() <= 0.0 {
        Side::Right
    } else if ball.pos.x + ball.radius() >= state.width {
        Side::Left
    } else {
        return None;
    };

    state.paddle_mut(scorer).score += 1;
    let center = state.center();
    state.ball.reset(center, config.ball_start_speed);
    Some(scorer)
}

/// Explicit Euler step; one tick is one unit of time
fn integrate(state: &mut GameState) {
    state.ball.pos += state.ball.vel;
}

/// Let the tracking AI steer every paddle that is not under pointer control
fn move_automated_paddles<R: Rng + ?Sized>(state: &mut GameState, config: &GameConfig, rng: &mut R) {
    let ball_y = state.ball.pos.y;
    for side in [Side::Right, Side::Left] {
        if !state.is_automated(side) {
            continue;
        }
        let gain = config.tracking.draw_gain(rng);
        let aim = config.tracking.aim_fraction(side);
        ai::track(state.paddle_mut(side), ball_y, aim, gain);
    }
}

/// Flip the vertical velocity when the ball reaches the top or bottom edge
///
/// Position is left alone; the ball may sit past the edge for a tick.
fn bounce_walls(state: &mut GameState) -> bool {
    let ball = &mut state.ball;
    if ball.pos.y - ball.radius() <= 0.0 || ball.pos.y + ball.radius() >= state.height {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Paddle the ball is heading for, judged by which half its leading edge is in
fn candidate_side(state: &GameState) -> Side {
    if state.ball.pos.x + state.ball.radius() < state.width / 2.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// Bounce off the candidate paddle, steering by where the ball struck it
///
/// The offset from the paddle centre is normalised to roughly [-1, 1] and
/// mapped onto +/- 45 degrees. Hits right on the corners can land a little
/// outside that range. Returns the paddle side and the outgoing angle.
fn deflect_off_paddle(state: &mut GameState, config: &GameConfig) -> Option<(Side, f32)> {
    let side = candidate_side(state);
    let paddle = state.paddle(side);
    let ball = &state.ball;
    if !circle_rect_overlap(ball.pos, ball.radius(), paddle.origin(), paddle.width(), paddle.height()) {
        return None;
    }

    let half_height = paddle.height() / 2.0;
    let offset = (ball.pos.y - paddle.center_y()) / half_height;
    let angle = MAX_BOUNCE_ANGLE * offset;

    // Speed up first so the rebuilt velocity carries the new speed
    speed_up(&mut state.ball, config.speed_cap);
    state.ball.redirect(angle, side.departure_sign());
    Some((side, angle))
}

/// Apply the per-hit speed-up, saturating at `cap` when one is configured
fn speed_up(ball: &mut Ball, cap: Option<f32>) {
    let boosted = ball.speed + ball.speed_up();
    ball.speed = match cap {
        Some(cap) if ball.speed >= cap => ball.speed,
        Some(cap) => boosted.min(cap),
        None => boosted,
    };
}
