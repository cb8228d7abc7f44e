//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into the [`crate::types::FrameInput`] the
//! game session consumes once per tick.

pub mod map;
pub mod pointer;

pub use tui_connect_four_types as types;

pub use map::{map_key, should_quit};
pub use pointer::{PointerTracker, TermPos};
