//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the computer
//! opponent. It has **no dependencies** on terminal I/O, windowing or audio
//! devices, making it:
//!
//! - **Deterministic**: Same seed produces identical computer moves
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 7x6 grid with gravity placement
//! - [`win`]: four-in-a-row detection in all four directions
//! - [`ai`]: block / win / random heuristic for the computer player
//! - [`rng`]: seeded LCG used for the computer's random fallback
//! - [`session`]: Title → Playing → GameOver state machine
//! - [`snapshot`]: render descriptor produced each frame
//! - [`audio`]: the sound-cue seam
//!
//! # Example
//!
//! ```
//! use tui_connect_four_core::{GameSession, NullAudio};
//! use tui_connect_four_types::{FrameInput, KeyPress, Screen};
//!
//! let mut session = GameSession::new(12345);
//! let mut audio = NullAudio;
//!
//! // Pick two-player mode on the title screen.
//! session.update(&FrameInput::key(KeyPress::Digit(2)), 16, &mut audio);
//! assert_eq!(session.screen(), Screen::Playing);
//!
//! // Drop a disk into the fourth column.
//! session.update(&FrameInput::key(KeyPress::Digit(4)), 16, &mut audio);
//! assert_eq!(session.board().disk_count(), 1);
//! ```
//!
//! # Timing
//!
//! Only the game-over countdown depends on time. Call
//! [`GameSession::update`](session::GameSession::update) every frame with the
//! elapsed milliseconds since the previous frame.

pub mod ai;
pub mod audio;
pub mod board;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod win;

pub use tui_connect_four_types as types;

// Re-export commonly used types for convenience
pub use ai::{find_winning_column, winning_move, AiMove, HeuristicAi, MoveReason};
pub use audio::{AudioSink, NullAudio};
pub use board::Board;
pub use rng::SimpleRng;
pub use session::{column_from_pointer, GameSession, SessionEvent, SessionSettings};
pub use snapshot::GameSnapshot;
pub use win::{check_win, has_win, WinLine};
