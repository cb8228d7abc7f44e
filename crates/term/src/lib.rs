//! Terminal front end for Connect Four.
//!
//! A small, game-oriented rendering layer: the game view paints a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer, and the
//! renderer flushes that framebuffer to the terminal with diffing.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot → framebuffer, plus terminal → board pointer mapping
//! - [`renderer`]: raw mode, alternate screen, mouse capture and frame output
//! - [`audio`]: terminal bell sound cues

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_connect_four_core as core;
pub use tui_connect_four_types as types;

pub use audio::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{outcome_message, player_color, AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
