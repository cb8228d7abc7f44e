//! Audio seam - where the session hands off its sound triggers
//!
//! The session never waits on playback; cues are fire-and-forget.

use crate::types::SoundCue;

/// Consumer of sound cues emitted during a tick
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Records cues in order (useful for tests and replays)
impl AudioSink for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}
