//! Board module - manages the game grid
//!
//! The board is a 7x6 grid where each cell is empty or holds one player's disk.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..5 (top to bottom) and col 0..6
//! (left to right). Disks fall under gravity, so a column's occupied cells are
//! always contiguous from the bottom row upward.

use arrayvec::ArrayVec;

use crate::types::{Cell, Player, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The game board - 7 columns x 6 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return None;
        }
        Some(row * BOARD_WIDTH + col)
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col) without applying gravity
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Lowest empty row in `col`, if the column has space
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= BOARD_WIDTH {
            return None;
        }
        (0..BOARD_HEIGHT)
            .rev()
            .find(|&row| self.cells[row * BOARD_WIDTH + col].is_none())
    }

    /// Drop a disk into `col`.
    ///
    /// Returns the row the disk landed in, or None when the column is full or
    /// out of range (the board is left untouched).
    pub fn place(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row * BOARD_WIDTH + col] = Some(player);
        Some(row)
    }

    /// Check if a column can take another disk (its top cell is empty)
    pub fn has_space(&self, col: usize) -> bool {
        matches!(self.get(0, col), Some(None))
    }

    /// Number of disks stacked in `col`
    pub fn column_height(&self, col: usize) -> usize {
        if col >= BOARD_WIDTH {
            return 0;
        }
        (0..BOARD_HEIGHT)
            .filter(|&row| self.cells[row * BOARD_WIDTH + col].is_some())
            .count()
    }

    /// Columns that can still take a disk, left to right
    pub fn legal_columns(&self) -> ArrayVec<usize, BOARD_WIDTH> {
        (0..BOARD_WIDTH).filter(|&col| self.has_space(col)).collect()
    }

    /// Check if every column is full
    pub fn is_full(&self) -> bool {
        (0..BOARD_WIDTH).all(|col| !self.has_space(col))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of disks on the board
    pub fn disk_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write the board as a compact u8 grid: 0 = empty, 1 = player one, 2 = player two
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH]; BOARD_HEIGHT]) {
        for (row, cells) in self.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                out[row][col] = cell.map_or(0, Player::number);
            }
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` is empty, `1`/`X` is player one, `2`/`O` is player two. Intended for
    /// tests and fixtures; rows shorter than the board are padded with empty
    /// cells and extra characters are ignored.
    pub fn from_rows(rows: [&str; BOARD_HEIGHT]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_WIDTH).enumerate() {
                let cell = match ch {
                    '1' | 'X' | 'x' => Some(Player::One),
                    '2' | 'O' | 'o' => Some(Player::Two),
                    _ => None,
                };
                board.set(row, col, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
