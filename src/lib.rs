//! Terminal Connect Four (workspace facade crate).
//!
//! Re-exports the member crates as `tui_connect_four::{types,core,input,term}`
//! and holds the pieces only the binary needs: environment configuration,
//! logging setup and the JSON Lines game record.

pub use tui_connect_four_core as core;
pub use tui_connect_four_input as input;
pub use tui_connect_four_term as term;
pub use tui_connect_four_types as types;

pub mod config;
pub mod logging;
pub mod record;

pub use config::Config;
pub use record::{FileRecord, GameRecord};
