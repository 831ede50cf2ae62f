//! Loop control
//!
//! A [`LoopController`] owns the running flag and the handle of a repeating
//! schedule. The schedule itself comes from a [`Scheduler`]: browser timers
//! in production, [`ManualScheduler`] in tests and headless runs.

use glam::Vec2;

use crate::consts::TICK_INTERVAL_MS;
use crate::renderer::{Surface, colors};

/// Source of a cancellable repeating tick
pub trait Scheduler {
    type Handle;

    /// Begin firing the tick every `interval_ms`; `None` if no timer could be set
    fn schedule_repeating(&mut self, interval_ms: f64) -> Option<Self::Handle>;

    /// Stop a schedule; no further ticks fire for it
    fn cancel(&mut self, handle: Self::Handle);
}

/// Identifies one schedule created by a [`ManualScheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleId(u64);

/// Scheduler driven by hand: the caller reports elapsed time and gets back
/// how many ticks fell due
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: Vec<(ScheduleId, f64)>,
    accumulator_ms: f64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live schedules
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Let `elapsed_ms` pass; returns the ticks due on the live schedule
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        let Some(&(_, interval)) = self.active.first() else {
            return 0;
        };
        self.accumulator_ms += elapsed_ms;
        let mut due = 0;
        while self.accumulator_ms >= interval {
            self.accumulator_ms -= interval;
            due += 1;
        }
        due
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ScheduleId;

    fn schedule_repeating(&mut self, interval_ms: f64) -> Option<ScheduleId> {
        let id = ScheduleId(self.next_id);
        self.next_id += 1;
        self.active.push((id, interval_ms));
        Some(id)
    }

    fn cancel(&mut self, handle: ScheduleId) {
        self.active.retain(|(id, _)| *id != handle);
        if self.active.is_empty() {
            self.accumulator_ms = 0.0;
        }
    }
}

/// Start/stop control over the fixed-rate tick
pub struct LoopController<S: Scheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> LoopController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Schedule the tick at 60 Hz. Does nothing if already running.
    ///
    /// Returns whether a new schedule was created. The loop stays stopped if
    /// the scheduler refuses.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            log::debug!("start ignored: loop already running");
            return false;
        }
        self.handle = self.scheduler.schedule_repeating(TICK_INTERVAL_MS);
        if self.handle.is_none() {
            log::warn!("Loop not started: no timer available");
            return false;
        }
        log::info!("Loop started ({:.2} ms per tick)", TICK_INTERVAL_MS);
        true
    }

    /// Cancel the tick and leave a blank surface. Does nothing if stopped.
    ///
    /// Returns whether a schedule was cancelled.
    pub fn stop<T: Surface + ?Sized>(&mut self, surface: &mut T, width: f32, height: f32) -> bool {
        let Some(handle) = self.handle.take() else {
            log::debug!("stop ignored: loop not running");
            return false;
        };
        self.scheduler.cancel(handle);
        surface.fill_rect(Vec2::ZERO, width, height, colors::BACKGROUND);
        log::info!("Loop stopped");
        true
    }

    /// Stop if running, start otherwise; returns the new running state
    pub fn toggle<T: Surface + ?Sized>(&mut self, surface: &mut T, width: f32, height: f32) -> bool {
        if self.is_running() {
            self.stop(surface, width, height);
        } else {
            self.start();
        }
        self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCmd, DrawList};

    fn controller() -> LoopController<ManualScheduler> {
        LoopController::new(ManualScheduler::new())
    }

    #[test]
    fn test_double_start_keeps_one_schedule() {
        let mut ctl = controller();
        assert!(ctl.start());
        assert!(!ctl.start());
        assert!(ctl.is_running());
        assert_eq!(ctl.scheduler().active_count(), 1);
    }

    #[test]
    fn test_double_stop_is_noop() {
        let mut ctl = controller();
        let mut list = DrawList::new();

        assert!(!ctl.stop(&mut list, 800.0, 600.0));
        assert!(list.is_empty());

        ctl.start();
        assert!(ctl.stop(&mut list, 800.0, 600.0));
        assert!(!ctl.stop(&mut list, 800.0, 600.0));
        assert!(!ctl.is_running());
        assert_eq!(ctl.scheduler().active_count(), 0);
        // Exactly one cleared frame
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_stop_paints_cleared_frame() {
        let mut ctl = controller();
        let mut list = DrawList::new();
        ctl.start();
        ctl.stop(&mut list, 320.0, 240.0);
        assert_eq!(
            list.commands,
            vec![DrawCmd::Rect {
                origin: Vec2::ZERO,
                width: 320.0,
                height: 240.0,
                color: colors::BACKGROUND,
            }]
        );
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut ctl = controller();
        let mut list = DrawList::new();
        assert!(ctl.toggle(&mut list, 800.0, 600.0));
        assert!(!ctl.toggle(&mut list, 800.0, 600.0));
        assert!(ctl.toggle(&mut list, 800.0, 600.0));
        assert_eq!(ctl.scheduler().active_count(), 1);
    }

    #[test]
    fn test_manual_scheduler_counts_due_ticks() {
        let mut ctl = controller();
        assert_eq!(ctl.scheduler_mut().advance(1000.0), 0);

        ctl.start();
        assert_eq!(ctl.scheduler_mut().advance(1001.0), 60);
        assert_eq!(ctl.scheduler_mut().advance(TICK_INTERVAL_MS / 2.0), 0);
        assert_eq!(ctl.scheduler_mut().advance(TICK_INTERVAL_MS / 2.0), 1);
    }

    /// Refuses the first `failures` requests, then behaves like a manual scheduler
    struct FlakyScheduler {
        failures: u32,
        inner: ManualScheduler,
    }

    impl Scheduler for FlakyScheduler {
        type Handle = ScheduleId;

        fn schedule_repeating(&mut self, interval_ms: f64) -> Option<ScheduleId> {
            if self.failures > 0 {
                self.failures -= 1;
                return None;
            }
            self.inner.schedule_repeating(interval_ms)
        }

        fn cancel(&mut self, handle: ScheduleId) {
            self.inner.cancel(handle);
        }
    }

    #[test]
    fn test_failed_schedule_leaves_loop_stopped() {
        let mut ctl = LoopController::new(FlakyScheduler {
            failures: 1,
            inner: ManualScheduler::new(),
        });
        let mut list = DrawList::new();

        assert!(!ctl.start());
        assert!(!ctl.is_running());

        // A single toggle recovers
        assert!(ctl.toggle(&mut list, 800.0, 600.0));
        assert_eq!(ctl.scheduler().inner.active_count(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_no_ticks_after_stop() {
        let mut ctl = controller();
        let mut list = DrawList::new();
        ctl.start();
        ctl.scheduler_mut().advance(10.0);
        ctl.stop(&mut list, 800.0, 600.0);
        assert_eq!(ctl.scheduler_mut().advance(1000.0), 0);
    }
}
