//! Win detection - scans the board for four in a row
//!
//! Every occupied cell is tested as the start of a line in four directions:
//! horizontal (→), vertical (↓), diagonal (↘) and anti-diagonal (↗). Lines never
//! wrap around the board edges. The scan is row-major from the top-left cell, so
//! when several lines exist the first one in that order is reported.

use crate::board::Board;
use crate::types::{Player, BOARD_HEIGHT, BOARD_WIDTH, CONNECT};

/// Direction steps as (d_row, d_col)
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // →
    (1, 0),  // ↓
    (1, 1),  // ↘
    (-1, 1), // ↗
];

/// A completed line of four
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine {
    pub player: Player,
    /// (row, col) of each disk in the line, starting from the scanned origin
    pub cells: [(usize, usize); CONNECT],
}

impl WinLine {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Find a four-in-a-row anywhere on the board.
///
/// Returns the owning player and the cells of the first line found, or None.
pub fn check_win(board: &Board) -> Option<WinLine> {
    for row in 0..BOARD_HEIGHT {
        for col in 0..BOARD_WIDTH {
            let Some(Some(player)) = board.get(row, col) else {
                continue;
            };

            for &(dr, dc) in DIRECTIONS.iter() {
                if let Some(cells) = line_from(board, player, row, col, dr, dc) {
                    return Some(WinLine { player, cells });
                }
            }
        }
    }
    None
}

/// True when any four-in-a-row exists
#[inline]
pub fn has_win(board: &Board) -> bool {
    check_win(board).is_some()
}

fn line_from(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> Option<[(usize, usize); CONNECT]> {
    let mut cells = [(row, col); CONNECT];
    for (step, slot) in cells.iter_mut().enumerate().skip(1) {
        let r = row.checked_add_signed(dr * step as isize)?;
        let c = col.checked_add_signed(dc * step as isize)?;
        if board.get(r, c)? != Some(player) {
            return None;
        }
        *slot = (r, c);
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_win() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_horizontal_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".222...",
            ".1111..",
        ]);
        let line = check_win(&board).unwrap();
        assert_eq!(line.player, Player::One);
        assert_eq!(line.cells, [(5, 1), (5, 2), (5, 3), (5, 4)]);
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            "...2...",
            "...2.1.",
            "...2.1.",
            "...2.1.",
        ]);
        let line = check_win(&board).unwrap();
        assert_eq!(line.player, Player::Two);
        assert_eq!(line.cells, [(2, 3), (3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            "1......",
            "21.....",
            "221....",
            "2121...",
        ]);
        let line = check_win(&board).unwrap();
        assert_eq!(line.player, Player::One);
        assert_eq!(line.cells, [(2, 0), (3, 1), (4, 2), (5, 3)]);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            "......2",
            ".....21",
            "....211",
            "...2121",
        ]);
        let line = check_win(&board).unwrap();
        assert_eq!(line.player, Player::Two);
        assert!(line.contains(5, 3));
        assert!(line.contains(2, 6));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "1......",
            "1......",
            "1.222..",
        ]);
        assert!(!has_win(&board));
    }

    #[test]
    fn test_no_wraparound_across_row_edge() {
        // Three at the right end of row 4, one at the left end of row 5.
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "....111",
            "1...222",
        ]);
        assert!(!has_win(&board));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "1121...",
        ]);
        assert!(!has_win(&board));
    }
}
