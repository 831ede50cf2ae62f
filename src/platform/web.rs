//! `setInterval`-backed scheduler

use wasm_bindgen::prelude::*;

use crate::game_loop::Scheduler;

/// Fires one callback on a browser interval timer
pub struct IntervalScheduler {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

impl IntervalScheduler {
    pub fn new(window: web_sys::Window, callback: Closure<dyn FnMut()>) -> Self {
        Self { window, callback }
    }
}

impl Scheduler for IntervalScheduler {
    /// Browser interval id
    type Handle = i32;

    fn schedule_repeating(&mut self, interval_ms: f64) -> Option<i32> {
        // Browsers truncate fractional timeouts anyway
        let timeout = interval_ms as i32;
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("setInterval failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}
