//! JSON Lines game record.
//!
//! One line per session event, each carrying the board as it stood after the
//! tick that produced it:
//!
//! ```text
//! {"seq":1,"ts_ms":1700000000000,"event":"started","mode":"computer","screen":"playing",...}
//! {"seq":2,"ts_ms":1700000000412,"event":"placed","player":"one","column":3,"row":5,"by_computer":false,...}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameSnapshot, SessionEvent};
use crate::types::{Outcome, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RecordEvent {
    Started {
        mode: &'static str,
    },
    Placed {
        player: &'static str,
        column: usize,
        row: usize,
        by_computer: bool,
    },
    GameOver {
        winner: Option<&'static str>,
        draw: bool,
    },
    ReturnedToTitle,
}

impl From<SessionEvent> for RecordEvent {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::Started { mode } => RecordEvent::Started {
                mode: mode.as_str(),
            },
            SessionEvent::Placed {
                player,
                column,
                row,
                by_computer,
            } => RecordEvent::Placed {
                player: player.as_str(),
                column,
                row,
                by_computer,
            },
            SessionEvent::GameOver { outcome } => RecordEvent::GameOver {
                winner: outcome.winner().map(|p| p.as_str()),
                draw: outcome == Outcome::Draw,
            },
            SessionEvent::ReturnedToTitle => RecordEvent::ReturnedToTitle,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordLine {
    pub seq: u64,
    pub ts_ms: u64,
    #[serde(flatten)]
    pub event: RecordEvent,
    pub screen: &'static str,
    pub current_player: &'static str,
    pub moves_made: u32,
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
}

/// A record appending to a file.
pub type FileRecord = GameRecord<BufWriter<File>>;

/// Appends session events to a writer, one JSON object per line.
pub struct GameRecord<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
}

impl FileRecord {
    /// Open `path` for appending, creating it if needed.
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open game record {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> GameRecord<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(512),
        }
    }

    /// Number of lines written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Write one line per event; flushes when anything was written.
    pub fn record(&mut self, events: &[SessionEvent], snap: &GameSnapshot) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }
        let ts_ms = current_timestamp_ms();
        for &event in events {
            self.seq += 1;
            let line = RecordLine {
                seq: self.seq,
                ts_ms,
                event: event.into(),
                screen: snap.screen.as_str(),
                current_player: snap.current_player.as_str(),
                moves_made: snap.moves_made,
                board: snap.board,
            };
            self.buf.clear();
            serde_json::to_writer(&mut self.buf, &line).context("encode record line")?;
            self.buf.push(b'\n');
            self.out.write_all(&self.buf).context("write record line")?;
        }
        self.out.flush().context("flush game record")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
