//! Audio Engine
//!
//! Web Audio rendering of the scratch and chime effects. The context is
//! created on the first user gesture; the noise buffer is built once and
//! reused, while oscillators and gains are created per sound.

use checklist_core::{chime_voices, noise_samples, SCRATCH};
use wasm_bindgen::JsValue;
use web_sys::{AudioBuffer, AudioContext, BiquadFilterType, OscillatorType};

use crate::browser::BrowserRandom;

#[derive(Default)]
pub struct AudioEngine {
    context: Option<AudioContext>,
    noise: Option<AudioBuffer>,
}

impl AudioEngine {
    /// Create the audio context if needed. Must run inside a user gesture.
    pub fn prime(&mut self) -> Result<(), JsValue> {
        if self.context.is_none() {
            self.context = Some(AudioContext::new()?);
            log::debug!("[AUDIO] Context created");
        }
        Ok(())
    }

    fn noise_buffer(&mut self, ctx: &AudioContext) -> Result<AudioBuffer, JsValue> {
        if let Some(buffer) = &self.noise {
            return Ok(buffer.clone());
        }
        let sample_rate = ctx.sample_rate();
        let mut samples = noise_samples(sample_rate, &BrowserRandom);
        let buffer = ctx.create_buffer(1, samples.len() as u32, sample_rate)?;
        buffer.copy_to_channel(&mut samples, 0)?;
        self.noise = Some(buffer.clone());
        Ok(buffer)
    }

    /// Pencil scratch: lowpassed noise with a short swell and decay
    pub fn play_scratch(&mut self) -> Result<(), JsValue> {
        let Some(ctx) = self.context.clone() else { return Ok(()) };
        let buffer = self.noise_buffer(&ctx)?;
        let t = ctx.current_time();

        let source = ctx.create_buffer_source()?;
        source.set_buffer(Some(&buffer));

        let filter = ctx.create_biquad_filter()?;
        filter.set_type(BiquadFilterType::Lowpass);
        filter.frequency().set_value_at_time(SCRATCH.lowpass_hz, t)?;

        let gain = ctx.create_gain()?;
        let envelope = gain.gain();
        envelope.set_value_at_time(0.0, t)?;
        envelope.linear_ramp_to_value_at_time(SCRATCH.peak, t + SCRATCH.attack_s)?;
        envelope.linear_ramp_to_value_at_time(SCRATCH.sustain, t + SCRATCH.sustain_at_s)?;
        envelope.exponential_ramp_to_value_at_time(SCRATCH.floor, t + SCRATCH.duration_s)?;

        source.connect_with_audio_node(&filter)?;
        filter.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        source.start_with_when(t)?;
        source.stop_with_when(t + SCRATCH.stop_s())?;
        Ok(())
    }

    /// Bell chord, one sine oscillator per partial
    pub fn play_chime(&mut self) -> Result<(), JsValue> {
        let Some(ctx) = self.context.clone() else { return Ok(()) };
        let t = ctx.current_time();

        for voice in chime_voices(&BrowserRandom) {
            let osc = ctx.create_oscillator()?;
            osc.set_type(OscillatorType::Sine);
            osc.frequency().set_value(voice.frequency_hz);

            let start = t + voice.start_s;
            let gain = ctx.create_gain()?;
            let envelope = gain.gain();
            envelope.set_value_at_time(0.0, start)?;
            envelope.linear_ramp_to_value_at_time(voice.peak, start + voice.attack_s)?;
            envelope.exponential_ramp_to_value_at_time(voice.floor, start + voice.decay_s)?;

            osc.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&ctx.destination())?;

            osc.start_with_when(start)?;
            osc.stop_with_when(t + voice.stop_s())?;
        }
        Ok(())
    }
}

/// Log instead of propagating; a missing sound never breaks the list
pub fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(e) = result {
        log::warn!("[AUDIO] {} failed: {:?}", what, e);
    }
}
