//! Test doubles: a virtual clock scheduler, a pinned random source and a
//! stage that records every cue it receives.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::random::RandomSource;
use crate::sequencer::{Cue, Scheduler, StageEffects};
use crate::stage::Stage;

/// Always returns the same unit value
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        self.0
    }
}

struct Entry {
    due: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    queue: Vec<Entry>,
}

/// Scheduler driven by [`ManualScheduler::advance`]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its task when dropped
pub struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Run every live task due within `by`, in due order
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                clock.queue.retain(|entry| !entry.cancelled.get());
                let index = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.seq))
                    .map(|(index, _)| index);
                index.map(|index| {
                    let entry = clock.queue.remove(index);
                    clock.now = entry.due;
                    entry
                })
            };
            match next {
                Some(entry) => (entry.task)(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let cancelled = Rc::new(Cell::new(false));
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.queue.push(Entry {
            due,
            seq,
            cancelled: Rc::clone(&cancelled),
            task,
        });
        ManualHandle(cancelled)
    }
}

/// Applies cues to a [`Stage`] and logs them with their virtual time in ms
pub struct RecordingStage {
    clock: ManualScheduler,
    stage: RefCell<Stage>,
    cues: RefCell<Vec<(u128, Cue)>>,
}

impl RecordingStage {
    pub fn new(clock: ManualScheduler) -> Self {
        Self {
            clock,
            stage: RefCell::new(Stage::default()),
            cues: RefCell::new(Vec::new()),
        }
    }

    pub fn cues(&self) -> Vec<(u128, Cue)> {
        self.cues.borrow().clone()
    }

    pub fn snapshot(&self) -> Stage {
        self.stage.borrow().clone()
    }
}

impl StageEffects for RecordingStage {
    fn apply(&self, cue: Cue) {
        self.stage.borrow_mut().apply(&cue);
        self.cues.borrow_mut().push((self.clock.now().as_millis(), cue));
    }
}
