//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, game records).
//!
//! # Board Dimensions
//!
//! Standard Connect Four grid:
//!
//! - **Width**: 7 columns (indexed 0-6, left to right)
//! - **Height**: 6 rows (indexed 0-5, row 0 is the top, row 5 the bottom)
//! - **Connect**: 4 disks in a line win
//!
//! # Pointer Units
//!
//! Pointer positions are measured relative to the board's top-left corner.
//! A pixel front end uses `CELL_SIZE` units per cell; the terminal front end
//! supplies its own per-cell metrics (terminal columns/rows).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_SIZE` | 80 | Pointer units per board cell |
//! | `BOARD_PIXEL_HEIGHT` | 480 | Board height in pointer units |
//! | `FOOTER_HEIGHT` | 100 | Label/footer strip under the board |
//! | `GAME_OVER_DELAY_MS` | 1000 | Countdown before returning to title |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_connect_four_types::{Player, Screen, GameMode, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(Player::One.other(), Player::Two);
//! assert_eq!(Player::from_str("two"), Some(Player::Two));
//! assert_eq!(Screen::Title.as_str(), "title");
//! assert_eq!(GameMode::from_str("computer"), Some(GameMode::Computer));
//!
//! assert_eq!(BOARD_WIDTH, 7);
//! assert_eq!(BOARD_HEIGHT, 6);
//! ```

/// Board width in cells (7 columns)
pub const BOARD_WIDTH: usize = 7;

/// Board height in cells (6 rows)
pub const BOARD_HEIGHT: usize = 6;

/// Number of same-player disks in a line needed to win
pub const CONNECT: usize = 4;

/// Pointer units per board cell for pixel-oriented front ends
pub const CELL_SIZE: u16 = 80;

/// Board height in pointer units at the default cell size
pub const BOARD_PIXEL_HEIGHT: u16 = BOARD_HEIGHT as u16 * CELL_SIZE;

/// Height of the footer strip (column labels) under the board
pub const FOOTER_HEIGHT: u16 = 100;

/// Game-over countdown before the title screen returns (1000ms)
pub const GAME_OVER_DELAY_MS: u32 = 1000;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// The two sides of a game
///
/// - **One**: moves first; the human in computer mode (drawn red)
/// - **Two**: moves second; the computer in computer mode (drawn blue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number, as shown on screen ("Player 1")
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }

    /// Parse player from string (case-insensitive)
    ///
    /// Accepts "one" | "1" | "player1" and "two" | "2" | "player2".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "one" | "1" | "player1" => Some(Player::One),
            "two" | "2" | "player2" => Some(Player::Two),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "one",
            Player::Two => "two",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell holding that player's disk
pub type Cell = Option<Player>;

/// Who plays the second seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Player Two is driven by the built-in heuristic
    Computer,
    /// Two humans share the pointer
    TwoPlayer,
}

impl GameMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "computer" | "cpu" | "ai" => Some(GameMode::Computer),
            "twoplayer" | "two_player" | "pvp" => Some(GameMode::TwoPlayer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Computer => "computer",
            GameMode::TwoPlayer => "twoPlayer",
        }
    }
}

/// Top-level screens of the game loop
///
/// The cycle is: Title → Playing → GameOver → Title. There is no terminal
/// screen; the program runs until closed from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Title,
    Playing,
    GameOver,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Title => "title",
            Screen::Playing => "playing",
            Screen::GameOver => "gameOver",
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Player),
    /// Board filled with no four-in-a-row
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(p) => Some(*p),
            Outcome::Draw => None,
        }
    }
}

/// Fire-and-forget sound triggers emitted by the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A disk landed on the board
    Place,
    /// A game was started from the title screen
    Start,
}

/// Pointer position relative to the board's top-left corner
///
/// Coordinates can be negative when the pointer is left of / above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
}

impl Pointer {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Discrete key selections the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPress {
    /// A number key (1-9). On the title screen 1/2 pick the mode; during play
    /// 1-7 drop into that column.
    Digit(u8),
    /// Start a game against the computer
    ComputerMode,
    /// Start a two-player game
    TwoPlayerMode,
}

/// Everything the game consumes from the input producer in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Latest known pointer position
    pub pointer: Pointer,
    /// Primary button pressed during this frame
    pub clicked: bool,
    /// Key pressed during this frame
    pub key: Option<KeyPress>,
}

impl FrameInput {
    /// No input this frame
    pub fn idle() -> Self {
        Self::default()
    }

    /// A click at `pointer`
    pub fn click(pointer: Pointer) -> Self {
        Self {
            pointer,
            clicked: true,
            key: None,
        }
    }

    /// A key press with no click
    pub fn key(key: KeyPress) -> Self {
        Self {
            key: Some(key),
            ..Self::default()
        }
    }
}
