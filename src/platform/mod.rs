//! Platform abstraction layer
//!
//! Browser timers live here; everything above talks to them through
//! [`crate::game_loop::Scheduler`].

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::IntervalScheduler;
