//! Checklist configuration
//!
//! Every field has a default, so a partial JSON document only overrides what it names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const SEED_ITEMS: [&str; 5] = [
    "Leave detailed status reports on all in-progress tickets",
    "Notify relevant stakeholders about your absence",
    "Set out-of-office messages in email and chat apps",
    "Run system updates on your machine",
    "Take a moment to reflect on your accomplishments this year",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Items shown on first load
    pub seed_items: Vec<String>,
    pub list: ListTiming,
    pub celebration: CelebrationConfig,
    /// Number of particles on the snow canvas
    pub snowflakes: usize,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            seed_items: SEED_ITEMS.iter().map(|s| s.to_string()).collect(),
            list: ListTiming::default(),
            celebration: CelebrationConfig::default(),
            snowflakes: 200,
        }
    }
}

impl ChecklistConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.seed_items.iter().position(|s| s.trim().is_empty()) {
            Some(index) => Err(ConfigError::BlankSeedItem(index)),
            None => Ok(()),
        }
    }
}

/// Row animation timings, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTiming {
    /// Exit animation length before a deleted row leaves the DOM
    pub row_exit_ms: u32,
    /// Fade-out of the old rows before an import replaces them
    pub import_fade_ms: u32,
    /// Per-index entrance delay on an animated full render
    pub entrance_stagger_ms: u32,
}

impl Default for ListTiming {
    fn default() -> Self {
        Self {
            row_exit_ms: 400,
            import_fade_ms: 300,
            entrance_stagger_ms: 100,
        }
    }
}

/// Offsets of each trigger step from the moment the list is completed, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceTiming {
    pub pulse_ms: u32,
    pub chime_ms: u32,
    pub sparkles_ms: u32,
    pub first_marker_ms: u32,
    pub marker_stagger_ms: u32,
    /// Overlay fade-out on reset before it is hidden
    pub overlay_exit_ms: u32,
}

impl Default for SequenceTiming {
    fn default() -> Self {
        Self {
            pulse_ms: 1200,
            chime_ms: 800,
            sparkles_ms: 800,
            first_marker_ms: 800,
            marker_stagger_ms: 300,
            overlay_exit_ms: 500,
        }
    }
}

impl SequenceTiming {
    pub fn pulse(&self) -> Duration {
        ms(self.pulse_ms)
    }

    pub fn chime(&self) -> Duration {
        ms(self.chime_ms)
    }

    pub fn sparkles(&self) -> Duration {
        ms(self.sparkles_ms)
    }

    /// When marker `index` pops in
    pub fn marker(&self, index: usize) -> Duration {
        ms(self.first_marker_ms) + ms(self.marker_stagger_ms) * index as u32
    }

    pub fn overlay_exit(&self) -> Duration {
        ms(self.overlay_exit_ms)
    }
}

/// Fixed landing slot of a reward marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSlot {
    pub glyph: String,
    /// Horizontal offset from the centre of the stage
    pub offset_px: i32,
}

impl MarkerSlot {
    fn new(glyph: &str, offset_px: i32) -> Self {
        Self {
            glyph: glyph.to_string(),
            offset_px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub timing: SequenceTiming,
    pub markers: Vec<MarkerSlot>,
    pub sparkle_count: usize,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            timing: SequenceTiming::default(),
            markers: vec![
                MarkerSlot::new("🎁", -80),
                MarkerSlot::new("🧸", -40),
                MarkerSlot::new("🚲", 0),
                MarkerSlot::new("🎮", 40),
                MarkerSlot::new("🥁", 80),
            ],
            sparkle_count: 40,
        }
    }
}

fn ms(millis: u32) -> Duration {
    Duration::from_millis(u64::from(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChecklistConfig::default();
        assert_eq!(config.seed_items.len(), 5);
        assert_eq!(config.celebration.markers.len(), 5);
        assert_eq!(config.list.row_exit_ms, 400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = ChecklistConfig::from_json(
            r#"{ "snowflakes": 20, "celebration": { "timing": { "marker_stagger_ms": 100 } } }"#,
        )
        .unwrap();
        assert_eq!(config.snowflakes, 20);
        assert_eq!(config.celebration.timing.marker_stagger_ms, 100);
        assert_eq!(config.celebration.timing.first_marker_ms, 800);
        assert_eq!(config.celebration.sparkle_count, 40);
        assert_eq!(config.seed_items.len(), 5);
    }

    #[test]
    fn test_blank_seed_item_rejected() {
        let err = ChecklistConfig::from_json(r#"{ "seed_items": ["ok", "  "] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BlankSeedItem(1)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ChecklistConfig::from_json("{ seed_items: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_marker_offsets() {
        let timing = SequenceTiming::default();
        let offsets: Vec<u128> = (0..5).map(|i| timing.marker(i).as_millis()).collect();
        assert_eq!(offsets, vec![800, 1100, 1400, 1700, 2000]);
    }
}
