//! Completion Sequencer
//!
//! One-shot celebration played when every item is completed. Steps are
//! scheduled relative to the trigger through a [`Scheduler`]; every handle is
//! kept until the next reset, which cancels whatever has not fired yet.

use std::rc::Rc;
use std::time::Duration;

use crate::config::CelebrationConfig;
use crate::ids::IdGenerator;
use crate::random::RandomSource;
use crate::stage::{Marker, Sparkle};
use crate::store::ItemStore;

/// Deferred task runner. Dropping a handle cancels its task if still pending.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> Self::Handle;
}

/// Receiver of trigger steps (stage visuals and sound)
pub trait StageEffects {
    fn apply(&self, cue: Cue);
}

/// One step of the celebration
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    /// Show the overlay and start the drop animation
    Reveal,
    /// Start the idle pulse once the drop has landed
    Pulse,
    /// Play the chime
    Chime,
    /// Replace the particle overlay
    Sparkles(Vec<Sparkle>),
    DropMarker(Marker),
    /// Clear every effect and start the overlay exit
    Dismiss,
    /// Hide the overlay after its exit has played
    Conceal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledCue {
    /// Offset from the trigger
    pub at: Duration,
    pub cue: Cue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SequencerState {
    #[default]
    Idle,
    Running,
}

/// Build the trigger sequence, ordered by offset
pub fn plan_sequence(config: &CelebrationConfig, random: &dyn RandomSource) -> Vec<ScheduledCue> {
    let timing = &config.timing;
    let mut plan = vec![
        ScheduledCue { at: Duration::ZERO, cue: Cue::Reveal },
        ScheduledCue { at: timing.pulse(), cue: Cue::Pulse },
        ScheduledCue { at: timing.chime(), cue: Cue::Chime },
        ScheduledCue {
            at: timing.sparkles(),
            cue: Cue::Sparkles(Sparkle::scatter(config.sparkle_count, random)),
        },
    ];
    for (slot, preset) in config.markers.iter().enumerate() {
        plan.push(ScheduledCue {
            at: timing.marker(slot),
            cue: Cue::DropMarker(Marker {
                slot,
                glyph: preset.glyph.clone(),
                offset_px: preset.offset_px,
                rotation_deg: random.between(-10.0, 10.0),
            }),
        });
    }
    // Stable, so cues sharing an offset keep the order above
    plan.sort_by_key(|step| step.at);
    plan
}

pub struct CompletionSequencer<S: Scheduler> {
    scheduler: S,
    effects: Rc<dyn StageEffects>,
    random: Rc<dyn RandomSource>,
    config: CelebrationConfig,
    state: SequencerState,
    pending: Vec<S::Handle>,
    triggered: u32,
}

impl<S: Scheduler> CompletionSequencer<S> {
    pub fn new(
        scheduler: S,
        effects: Rc<dyn StageEffects>,
        random: Rc<dyn RandomSource>,
        config: CelebrationConfig,
    ) -> Self {
        Self {
            scheduler,
            effects,
            random,
            config,
            state: SequencerState::Idle,
            pending: Vec::new(),
            triggered: 0,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// How many times the sequence has started
    pub fn triggered(&self) -> u32 {
        self.triggered
    }

    /// Scheduled tasks not yet cancelled (fired ones included until reset)
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run after every store mutation. Starts the sequence when the list is
    /// all complete and the sequencer is idle; returns whether it started.
    pub fn check_and_maybe_trigger<G: IdGenerator>(&mut self, store: &ItemStore<G>) -> bool {
        if self.state == SequencerState::Running || !store.is_all_complete() {
            return false;
        }

        // Drop a deferred overlay hide left over from the last reset
        self.cancel_pending();
        self.state = SequencerState::Running;
        self.triggered += 1;
        log::info!("[SEQ] All {} items complete, starting celebration", store.len());

        for ScheduledCue { at, cue } in plan_sequence(&self.config, self.random.as_ref()) {
            if at.is_zero() {
                self.effects.apply(cue);
            } else {
                self.defer(at, cue);
            }
        }
        true
    }

    /// Back to idle: cancel outstanding steps, clear the effects, empty the store.
    /// Safe to call when already idle.
    pub fn reset<G: IdGenerator>(&mut self, store: &mut ItemStore<G>) {
        let cancelled = self.cancel_pending();
        if cancelled > 0 {
            log::debug!("[SEQ] Cancelled {} scheduled steps", cancelled);
        }
        self.state = SequencerState::Idle;
        store.clear();

        self.effects.apply(Cue::Dismiss);
        self.defer(self.config.timing.overlay_exit(), Cue::Conceal);
        log::info!("[SEQ] Reset");
    }

    fn defer(&mut self, delay: Duration, cue: Cue) {
        let effects = Rc::clone(&self.effects);
        let handle = self
            .scheduler
            .schedule(delay, Box::new(move || effects.apply(cue)));
        self.pending.push(handle);
    }

    fn cancel_pending(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }
}
