//! Procedural PCM for the four sound cues.
//!
//! Every clip is a sine sweep with a linear fade-out; the death cue adds
//! white noise on top.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::Sound;

pub const SAMPLE_RATE: u32 = 44_100;

/// Sweep parameters: `f(t) = base + slope·t`, `amp(t) = peak·(1 − t/len)`.
#[derive(Debug, Clone, Copy)]
struct Sweep {
    secs: f32,
    base_hz: f32,
    slope_hz: f32,
    peak: f32,
    noise: f32,
}

impl Sweep {
    const fn of(sound: Sound) -> Self {
        match sound {
            Sound::Heartbeat => Sweep {
                secs: 1.0 / 8.0,
                base_hz: 100.0,
                slope_hz: -100.0,
                peak: 9000.0,
                noise: 0.0,
            },
            Sound::Shoot => Sweep {
                secs: 1.0 / 20.0,
                base_hz: 880.0,
                slope_hz: -1500.0,
                peak: 5000.0,
                noise: 0.0,
            },
            Sound::MonsterHit => Sweep {
                secs: 1.0 / 15.0,
                base_hz: 660.0,
                slope_hz: 800.0,
                peak: 7000.0,
                noise: 0.0,
            },
            Sound::MonsterDeath => Sweep {
                secs: 1.0 / 2.0,
                base_hz: 220.0,
                slope_hz: -200.0,
                peak: 8000.0,
                noise: 4000.0,
            },
        }
    }
}

/// Fixed seed: every bank renders the same death rumble.
const NOISE_SEED: u64 = 0x9E37_79B9;

/// Render one cue to 16-bit mono samples at [`SAMPLE_RATE`].
pub fn synthesize(sound: Sound) -> Vec<i16> {
    let sw = Sweep::of(sound);
    let len = (SAMPLE_RATE as f32 * sw.secs) as usize;
    let mut rng = SmallRng::seed_from_u64(NOISE_SEED);

    (0..len)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let freq = sw.base_hz + sw.slope_hz * t;
            let fade = 1.0 - t / sw.secs;
            let mut s = (TAU * freq * t).sin() * sw.peak * fade;
            if sw.noise > 0.0 {
                s += rng.random_range(-1.0_f32..1.0) * sw.noise * fade;
            }
            s.clamp(i16::MIN as f32, i16::MAX as f32) as i16
        })
        .collect()
}

/// All cues rendered once up front.
pub struct SoundBank {
    clips: [Vec<i16>; 4],
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundBank {
    pub fn new() -> Self {
        Self {
            clips: Sound::ALL.map(synthesize),
        }
    }

    #[inline]
    pub fn clip(&self, sound: Sound) -> &[i16] {
        &self.clips[sound as usize]
    }

    /// Clip length in milliseconds.
    pub fn duration_ms(&self, sound: Sound) -> u32 {
        (self.clip(sound).len() as u64 * 1000 / SAMPLE_RATE as u64) as u32
    }
}
