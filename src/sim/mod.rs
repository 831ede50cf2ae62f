//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick is one frame; no time-delta scaling
//! - Randomness only through the caller's seeded RNG
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::TrackingParams;
pub use collision::{Aabb, circle_rect_overlap};
pub use state::{Ball, GameEvent, GameState, Net, Paddle, Side};
pub use tick::tick;
