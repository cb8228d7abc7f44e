//! Folds terminal mouse and key events into one [`FrameInput`] per tick.
//!
//! Terminals deliver events at arbitrary times between ticks. The tracker keeps
//! the latest pointer position, latches a left-button press until the next
//! tick consumes it, and holds the first key pressed since the last tick.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::map::map_key;
use crate::types::{FrameInput, KeyPress, Pointer};

/// Terminal cell coordinate (column, row), origin at the top-left of the screen.
pub type TermPos = (u16, u16);

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    position: Option<TermPos>,
    click: Option<TermPos>,
    key: Option<KeyPress>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<TermPos> {
        self.position
    }

    pub fn has_pending(&self) -> bool {
        self.click.is_some() || self.key.is_some()
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let pos = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.position = Some(pos);
                if self.click.is_none() {
                    self.click = Some(pos);
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.position = Some(pos);
            }
            _ => {}
        }
    }

    /// Record a key press. Returns the mapped key, if the game understands it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<KeyPress> {
        let mapped = map_key(key)?;
        if self.key.is_none() {
            self.key = Some(mapped);
        }
        Some(mapped)
    }

    /// Produce this tick's input and clear the latched click and key.
    ///
    /// `to_board` converts a terminal cell into a board-relative pointer.
    pub fn take_frame(&mut self, to_board: impl Fn(u16, u16) -> Pointer) -> FrameInput {
        let clicked = self.click.is_some();
        let pointer = self
            .click
            .take()
            .or(self.position)
            .map(|(x, y)| to_board(x, y))
            .unwrap_or_default();

        FrameInput {
            pointer,
            clicked,
            key: self.key.take(),
        }
    }
}
