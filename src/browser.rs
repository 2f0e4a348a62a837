//! Browser Capabilities
//!
//! Timer and randomness backed by the page.

use std::time::Duration;

use checklist_core::{RandomSource, Scheduler};
use gloo_timers::callback::Timeout;

/// Schedules tasks with `setTimeout`. Dropping the returned [`Timeout`] clears it.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> Timeout {
        Timeout::new(millis(delay), task)
    }
}

/// `Math.random()`
#[derive(Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&self) -> f64 {
        js_sys::Math::random()
    }
}

/// Fire `task` once after `delay_ms`, with no way to cancel it
pub fn defer(delay_ms: u32, task: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, task).forget();
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
