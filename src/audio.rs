//! Sound effect triggers
//!
//! The simulation only names sounds; synthesis and playback belong to whatever
//! implements `AudioSink`. Calls are fire-and-forget.

use std::collections::HashMap;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Standard bullet fired
    Fire,
    /// Bouncer launched
    AltFire,
    /// Bullet destroyed an obstacle
    Explosion,
    /// Bouncer smashed an obstacle
    Bounce,
    /// Dash started
    Dash,
    /// Power-up collected
    PowerUp,
    /// Shield absorbed an obstacle
    ShieldHit,
    /// Player lost a life
    PlayerHit,
    /// Combo milestone reached
    Combo,
    /// Run ended
    GameOver,
    /// New high score
    HighScore,
}

/// Anything that can play a named sound effect
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every sound
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs each sound at debug level and keeps a per-effect tally
#[derive(Debug, Default, Clone)]
pub struct LogAudio {
    muted: bool,
    counts: HashMap<SoundEffect, u32>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute; muted sounds are neither logged nor counted
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn count(&self, effect: SoundEffect) -> u32 {
        self.counts.get(&effect).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        log::debug!("sfx: {effect:?}");
        *self.counts.entry(effect).or_insert(0) += 1;
    }
}
