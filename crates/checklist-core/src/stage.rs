//! Celebration Stage
//!
//! Visual state of the overlay shown when the list is completed.

use crate::random::RandomSource;
use crate::sequencer::Cue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Hidden,
    Visible,
    /// Fading out, hidden once the exit transition has played
    Leaving,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeMotion {
    #[default]
    Still,
    /// Falling into place
    Dropping,
    /// Landed, pulsing until reset
    Pulsing,
}

/// A reward marker that has popped in
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index into the configured marker slots
    pub slot: usize,
    pub glyph: String,
    pub offset_px: i32,
    pub rotation_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    /// Offset from the centre of the stage
    pub x: f64,
    pub y: f64,
    pub delay_s: f64,
}

impl Sparkle {
    /// Half-width of the square the sparkles are spread over
    pub const SPREAD_PX: f64 = 125.0;
    pub const MAX_DELAY_S: f64 = 2.0;

    pub fn scatter(count: usize, random: &dyn RandomSource) -> Vec<Self> {
        (0..count)
            .map(|_| Self {
                x: random.between(-Self::SPREAD_PX, Self::SPREAD_PX),
                y: random.between(-Self::SPREAD_PX, Self::SPREAD_PX),
                delay_s: random.between(0.0, Self::MAX_DELAY_S),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage {
    pub overlay: OverlayPhase,
    pub tree: TreeMotion,
    pub markers: Vec<Marker>,
    pub sparkles: Vec<Sparkle>,
    /// Bumped each time the sparkles are regenerated
    pub sparkle_batch: u32,
}

impl Stage {
    /// Apply one step of the trigger sequence. Sound cues leave the stage untouched.
    pub fn apply(&mut self, cue: &Cue) {
        match cue {
            Cue::Reveal => {
                self.overlay = OverlayPhase::Visible;
                self.tree = TreeMotion::Dropping;
            }
            Cue::Pulse => {
                if self.tree == TreeMotion::Dropping {
                    self.tree = TreeMotion::Pulsing;
                }
            }
            Cue::Chime => {}
            Cue::Sparkles(sparkles) => {
                self.sparkles = sparkles.clone();
                self.sparkle_batch += 1;
            }
            Cue::DropMarker(marker) => {
                self.markers.retain(|m| m.slot != marker.slot);
                self.markers.push(marker.clone());
            }
            Cue::Dismiss => {
                if self.overlay == OverlayPhase::Visible {
                    self.overlay = OverlayPhase::Leaving;
                }
                self.tree = TreeMotion::Still;
                self.markers.clear();
                self.sparkles.clear();
            }
            Cue::Conceal => {
                if self.overlay == OverlayPhase::Leaving {
                    self.overlay = OverlayPhase::Hidden;
                }
            }
        }
    }
}
