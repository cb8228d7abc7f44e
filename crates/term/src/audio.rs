//! Terminal bell as a sound output.

use std::io::{self, Write};

use crate::core::AudioSink;
use crate::types::SoundCue;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell for every cue.
///
/// Terminals have a single bell tone, so start and placement cues sound the
/// same. Write failures are ignored; a missing beep never stops the game.
pub struct TerminalBell {
    enabled: bool,
    rung: u32,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, rung: 0 }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Number of cues played so far (counted even when muted).
    pub fn rung(&self) -> u32 {
        self.rung
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, _cue: SoundCue) {
        self.rung = self.rung.saturating_add(1);
        if !self.enabled {
            return;
        }
        let mut out = io::stdout().lock();
        let _ = out.write_all(BEL).and_then(|_| out.flush());
    }
}
