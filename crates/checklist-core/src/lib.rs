//! Checklist Core
//!
//! Browser-free domain logic for the wrap-up checklist:
//! - item: checklist entries and their ids
//! - store: the ordered item list and its mutations
//! - import: line-delimited text import
//! - list_view: row model the page renders from
//! - stage / sequencer: the one-shot completion celebration
//! - sound / snow: parameters for the decorative audio and canvas layers

mod config;
mod error;
mod ids;
mod import;
mod item;
mod list_view;
mod random;
mod sequencer;
mod snow;
mod sound;
mod stage;
mod store;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

pub use config::{CelebrationConfig, ChecklistConfig, ListTiming, MarkerSlot, SequenceTiming};
pub use error::{ConfigError, ImportError};
pub use ids::{IdGenerator, SequentialIds};
pub use import::{parse_lines, ImportTickets};
pub use item::{Item, ItemId};
pub use list_view::{strikethrough_path, ListView, Row};
pub use random::RandomSource;
pub use sequencer::{plan_sequence, CompletionSequencer, Cue, ScheduledCue, Scheduler, SequencerState, StageEffects};
pub use snow::{Snowfall, Snowflake};
pub use sound::{chime_voices, noise_samples, ChimeVoice, ScratchEnvelope, CHIME_PARTIALS, CHIME_ROOTS, NOISE_SECONDS, SCRATCH};
pub use stage::{Marker, OverlayPhase, Sparkle, Stage, TreeMotion};
pub use store::ItemStore;
