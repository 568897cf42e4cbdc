//! Audio Cues
//!
//! Fire-and-forget sound playback. Implementations must return immediately.

use crate::game::assets::SoundCue;

/// Plays pre-loaded sounds without blocking the caller.
pub trait AudioCue {
    /// Start playing `cue`.
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioCue for SilentAudio {
    fn play(&mut self, _cue: SoundCue) {}
}
