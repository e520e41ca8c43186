//! Sound cues. Click/milestone/star sounds are synthesized on a shared Web Audio
//! context; the MLG cue plays a remote clip. Playback is fire-and-forget and a
//! failure never interrupts the interaction: it is logged and dropped.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, HtmlAudioElement, OscillatorType};

use crate::error::{ClickerError, Result};

/// What the state machine asks the speaker to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    /// Index into [`CLICK_VARIATIONS`] (wraps).
    Click(usize),
    Sassy,
    Celebration,
    Ouch,
    Mlg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Wave {
    fn oscillator_type(self) -> OscillatorType {
        match self {
            Wave::Sine => OscillatorType::Sine,
            Wave::Square => OscillatorType::Square,
            Wave::Triangle => OscillatorType::Triangle,
            Wave::Sawtooth => OscillatorType::Sawtooth,
        }
    }
}

/// One oscillator note: exponential pitch sweep and exponential fade-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub wave: Wave,
    /// Start offset from the cue's trigger time, seconds.
    pub offset_s: f64,
    pub duration_s: f64,
    pub start_hz: f32,
    pub end_hz: f32,
    pub gain: f32,
    /// Time for the pitch sweep (<= duration).
    pub sweep_s: f64,
}

// Exponential ramps cannot target zero.
const FADE_FLOOR: f32 = 0.001;

const fn tone(wave: Wave, offset_s: f64, duration_s: f64, start_hz: f32, end_hz: f32, gain: f32) -> Tone {
    Tone { wave, offset_s, duration_s, start_hz, end_hz, gain, sweep_s: duration_s }
}

/// Button press variations; one is picked at random per click.
pub const CLICK_VARIATIONS: &[&[Tone]] = &[
    // pop
    &[tone(Wave::Sine, 0.0, 0.12, 620.0, 220.0, 0.25)],
    // boing
    &[tone(Wave::Triangle, 0.0, 0.25, 180.0, 720.0, 0.2)],
    // blip-blip
    &[
        tone(Wave::Square, 0.0, 0.06, 880.0, 880.0, 0.06),
        tone(Wave::Square, 0.08, 0.06, 1320.0, 1320.0, 0.06),
    ],
    // zap
    &[tone(Wave::Sawtooth, 0.0, 0.15, 1400.0, 90.0, 0.08)],
    // bubble
    &[
        tone(Wave::Sine, 0.0, 0.08, 300.0, 900.0, 0.2),
        tone(Wave::Sine, 0.07, 0.08, 450.0, 1200.0, 0.15),
    ],
    // thunk
    &[tone(Wave::Triangle, 0.0, 0.1, 140.0, 60.0, 0.35)],
];

/// Descending "wah-wah" for the 69 banner.
pub const SASSY: &[Tone] = &[
    tone(Wave::Sawtooth, 0.0, 0.22, 520.0, 420.0, 0.07),
    tone(Wave::Sawtooth, 0.25, 0.4, 440.0, 300.0, 0.07),
];

/// Rising major arpeggio for every hundred clicks.
pub const CELEBRATION: &[Tone] = &[
    tone(Wave::Triangle, 0.0, 0.15, 523.25, 523.25, 0.2),
    tone(Wave::Triangle, 0.12, 0.15, 659.25, 659.25, 0.2),
    tone(Wave::Triangle, 0.24, 0.15, 783.99, 783.99, 0.2),
    tone(Wave::Triangle, 0.36, 0.45, 1046.5, 1046.5, 0.22),
];

/// Cute star poke: 880 -> 440 Hz in 0.1 s, fading 0.1 -> 0.01 over 0.2 s.
pub const OUCH: &[Tone] = &[Tone {
    wave: Wave::Sine,
    offset_s: 0.0,
    duration_s: 0.2,
    start_hz: 880.0,
    end_hz: 440.0,
    gain: 0.1,
    sweep_s: 0.1,
}];

/// Synthesized notes for a cue; empty for clip-based cues.
pub fn tones_for(cue: SoundCue) -> &'static [Tone] {
    match cue {
        SoundCue::Click(i) => CLICK_VARIATIONS[i % CLICK_VARIATIONS.len()],
        SoundCue::Sassy => SASSY,
        SoundCue::Celebration => CELEBRATION,
        SoundCue::Ouch => OUCH,
        SoundCue::Mlg => &[],
    }
}

/// Owns the lazily created audio context. Browsers only allow a context to
/// start after a user gesture, and every cue originates from one.
pub struct Speaker {
    ctx: Option<AudioContext>,
    clip_url: String,
    clip_volume: f64,
}

impl Speaker {
    pub fn new(clip_url: impl Into<String>, clip_volume: f64) -> Self {
        Self { ctx: None, clip_url: clip_url.into(), clip_volume }
    }

    /// Play a cue; errors are logged, never returned.
    pub fn play(&mut self, cue: SoundCue) {
        if let Err(err) = self.try_play(cue) {
            tracing::warn!(?cue, %err, "failed to play sound");
        }
    }

    fn try_play(&mut self, cue: SoundCue) -> Result<()> {
        if cue == SoundCue::Mlg {
            return self.play_clip();
        }
        let ctx = self.context()?;
        let t0 = ctx.current_time();
        for t in tones_for(cue) {
            schedule_tone(ctx, t, t0).map_err(ClickerError::audio)?;
        }
        Ok(())
    }

    fn context(&mut self) -> Result<&AudioContext> {
        if self.ctx.is_none() {
            self.ctx = Some(AudioContext::new().map_err(ClickerError::audio)?);
        }
        let ctx = self.ctx.as_ref().ok_or_else(|| ClickerError::Audio("no audio context".into()))?;
        if ctx.state() == AudioContextState::Suspended {
            // Resolves asynchronously; notes scheduled meanwhile still play.
            let _ = ctx.resume().map_err(ClickerError::audio)?;
        }
        Ok(ctx)
    }

    fn play_clip(&self) -> Result<()> {
        let audio = HtmlAudioElement::new_with_src(&self.clip_url).map_err(ClickerError::audio)?;
        audio.set_volume(self.clip_volume);
        // A rejected play() promise (autoplay policy, 404) only reaches the console.
        let _ = audio.play().map_err(ClickerError::audio)?;
        Ok(())
    }
}

fn schedule_tone(ctx: &AudioContext, t: &Tone, t0: f64) -> std::result::Result<(), JsValue> {
    let start = t0 + t.offset_s;
    let end = start + t.duration_s;

    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    osc.set_type(t.wave.oscillator_type());
    let freq = osc.frequency();
    freq.set_value_at_time(t.start_hz, start)?;
    if t.end_hz != t.start_hz {
        freq.exponential_ramp_to_value_at_time(t.end_hz, start + t.sweep_s)?;
    }

    let level = gain.gain();
    level.set_value_at_time(t.gain, start)?;
    level.exponential_ramp_to_value_at_time((t.gain * 0.1).max(FADE_FLOOR), end)?;

    osc.start_with_when(start)?;
    osc.stop_with_when(end)?;
    Ok(())
}
