//! Sound parameters for the synthesized effects.

use crate::random::RandomSource;

/// Length of the shared noise buffer
pub const NOISE_SECONDS: f64 = 2.0;

/// Chord roots, C5 E5 G5 C6
pub const CHIME_ROOTS: [f64; 4] = [523.25, 659.25, 783.99, 1046.50];

/// Bell-like inharmonic partial ratios
pub const CHIME_PARTIALS: [f64; 4] = [1.0, 2.0, 3.0, 4.2];

const CHIME_MAX_JITTER_S: f64 = 0.05;
const CHIME_ATTACK_S: f64 = 0.02;
const CHIME_FLOOR: f32 = 0.001;
const TAIL_S: f64 = 0.1;

/// Filtered-noise "pencil scratch" played when an item is ticked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScratchEnvelope {
    pub lowpass_hz: f32,
    pub peak: f32,
    pub attack_s: f64,
    pub sustain: f32,
    pub sustain_at_s: f64,
    pub floor: f32,
    pub duration_s: f64,
}

pub const SCRATCH: ScratchEnvelope = ScratchEnvelope {
    lowpass_hz: 600.0,
    peak: 0.6,
    attack_s: 0.05,
    sustain: 0.3,
    sustain_at_s: 0.15,
    floor: 0.01,
    duration_s: 0.35,
};

impl ScratchEnvelope {
    /// When the noise source stops, relative to its start
    pub fn stop_s(&self) -> f64 {
        self.duration_s + TAIL_S
    }
}

/// One sine partial of the chime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChimeVoice {
    pub frequency_hz: f32,
    /// Start offset from the chime trigger
    pub start_s: f64,
    pub peak: f32,
    pub attack_s: f64,
    /// Time from start to reach the decay floor
    pub decay_s: f64,
    pub floor: f32,
}

impl ChimeVoice {
    pub fn stop_s(&self) -> f64 {
        self.start_s + self.decay_s + TAIL_S
    }
}

/// Every partial of every chord note. Higher partials are quieter and decay faster.
pub fn chime_voices(random: &dyn RandomSource) -> Vec<ChimeVoice> {
    CHIME_ROOTS
        .iter()
        .flat_map(|root| {
            CHIME_PARTIALS.iter().enumerate().map(move |(index, ratio)| (root, index, ratio))
        })
        .map(|(root, index, ratio)| {
            let rank = (index + 1) as f64;
            ChimeVoice {
                frequency_hz: (root * ratio) as f32,
                start_s: random.between(0.0, CHIME_MAX_JITTER_S),
                peak: (0.15 / rank) as f32,
                attack_s: CHIME_ATTACK_S,
                decay_s: 2.0 / rank,
                floor: CHIME_FLOOR,
            }
        })
        .collect()
}

/// Uniform white noise in `[-1, 1)`
pub fn noise_samples(sample_rate: f32, random: &dyn RandomSource) -> Vec<f32> {
    let len = (f64::from(sample_rate) * NOISE_SECONDS) as usize;
    (0..len).map(|_| random.between(-1.0, 1.0) as f32).collect()
}
