//! Sound cues and where they go.
//!
//! The simulation only reports [`SimEvent`]s; [`Sound::for_event`] maps them
//! to cues and an [`AudioSink`] plays them.

mod synth;

use log::{debug, trace};

pub use synth::{SAMPLE_RATE, SoundBank, synthesize};

use crate::sim::SimEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Heartbeat,
    Shoot,
    MonsterHit,
    MonsterDeath,
}

impl Sound {
    pub const ALL: [Sound; 4] = [
        Sound::Heartbeat,
        Sound::Shoot,
        Sound::MonsterHit,
        Sound::MonsterDeath,
    ];

    /// Cue for a simulation event, if it has one.
    pub fn for_event(event: &SimEvent) -> Option<Sound> {
        match event {
            SimEvent::Fired { .. } => Some(Sound::Shoot),
            SimEvent::Heartbeat => Some(Sound::Heartbeat),
            SimEvent::EnemyHit { .. } => Some(Sound::MonsterHit),
            SimEvent::EnemyKilled => Some(Sound::MonsterDeath),
            SimEvent::PlayerCaught => None,
        }
    }
}

/// Fire-and-forget cue playback.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);

    /// Play the cue of every event in order.
    fn play_events(&mut self, events: &[SimEvent]) {
        for sound in events.iter().filter_map(Sound::for_event) {
            self.play(sound);
        }
    }
}

/// Discards every cue (`--mute`).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}

/// Renders the cues and reports them through the log instead of a device.
#[derive(Default)]
pub struct LogAudio {
    bank: SoundBank,
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, sound: Sound) {
        self.played += 1;
        let ms = self.bank.duration_ms(sound);
        match sound {
            Sound::Heartbeat => trace!("cue {sound:?} ({ms} ms)"),
            _ => debug!(
                "cue {sound:?} ({ms} ms, {} samples)",
                self.bank.clip(sound).len()
            ),
        }
    }
}
