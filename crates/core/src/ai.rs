//! Computer opponent - a one-ply block/win/random heuristic
//!
//! Priority order, each scan running left to right over the columns:
//!
//! 1. **Block**: a column where the opponent's disk would complete four
//! 2. **Win**: a column where the computer's own disk would complete four
//! 3. **Random**: a uniformly random column that still has space
//!
//! Probes place a hypothetical disk, run the win detector and then put the
//! cell back to empty, so the board is observably unchanged afterwards.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{Player, BOARD_WIDTH};
use crate::win::check_win;

/// Why a column was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveReason {
    Block,
    Win,
    Random,
}

impl MoveReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveReason::Block => "block",
            MoveReason::Win => "win",
            MoveReason::Random => "random",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiMove {
    pub column: usize,
    pub reason: MoveReason,
}

/// Would dropping `player`'s disk into `col` give `player` four in a row?
///
/// Full or out-of-range columns return false. The probed cell is always
/// restored to empty.
pub fn winning_move(board: &mut Board, player: Player, col: usize) -> bool {
    let Some(row) = board.landing_row(col) else {
        return false;
    };

    board.set(row, col, Some(player));
    let wins = check_win(board).is_some_and(|line| line.player == player);
    board.set(row, col, None);
    wins
}

/// First column (left to right) where `player` wins immediately
pub fn find_winning_column(board: &mut Board, player: Player) -> Option<usize> {
    (0..BOARD_WIDTH).find(|&col| winning_move(board, player, col))
}

/// The heuristic computer player
#[derive(Debug, Clone)]
pub struct HeuristicAi {
    rng: SimpleRng,
}

impl HeuristicAi {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Choose a column for `me`, or None when every column is full.
    pub fn choose(&mut self, board: &mut Board, me: Player) -> Option<AiMove> {
        #[cfg(debug_assertions)]
        let before = *board;

        let choice = if let Some(column) = find_winning_column(board, me.other()) {
            Some(AiMove {
                column,
                reason: MoveReason::Block,
            })
        } else if let Some(column) = find_winning_column(board, me) {
            Some(AiMove {
                column,
                reason: MoveReason::Win,
            })
        } else {
            let legal = board.legal_columns();
            self.rng.choose(&legal).map(|&column| AiMove {
                column,
                reason: MoveReason::Random,
            })
        };

        #[cfg(debug_assertions)]
        debug_assert_eq!(before, *board, "AI probes must not leave disks behind");

        choice
    }

    /// Column-only form of [`HeuristicAi::choose`]
    pub fn best_move(&mut self, board: &mut Board, me: Player) -> Option<usize> {
        self.choose(board, me).map(|m| m.column)
    }

    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_HEIGHT;

    #[test]
    fn test_probe_reverts_cell() {
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "111....",
        ]);
        let before = board;

        assert!(winning_move(&mut board, Player::One, 3));
        assert_eq!(board, before);
        assert!(!winning_move(&mut board, Player::Two, 3));
        assert_eq!(board, before);
    }

    #[test]
    fn test_probe_full_column_is_false() {
        let mut board = Board::new();
        for _ in 0..BOARD_HEIGHT {
            board.place(0, Player::Two);
        }
        assert!(!winning_move(&mut board, Player::Two, 0));
    }

    #[test]
    fn test_blocks_opponent_three() {
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "2......",
            "111.2..",
        ]);
        let mut ai = HeuristicAi::new(5);
        let m = ai.choose(&mut board, Player::Two).unwrap();
        assert_eq!(m.column, 3);
        assert_eq!(m.reason, MoveReason::Block);
    }

    #[test]
    fn test_block_takes_priority_over_own_win() {
        // Player Two could win in column 6 (vertical), but Player One threatens column 3.
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "......2",
            "......2",
            "111...2",
        ]);
        let mut ai = HeuristicAi::new(5);
        let m = ai.choose(&mut board, Player::Two).unwrap();
        assert_eq!(m.column, 3);
        assert_eq!(m.reason, MoveReason::Block);
    }

    #[test]
    fn test_takes_own_win_when_nothing_to_block() {
        let mut board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "......2",
            "1.....2",
            "11....2",
        ]);
        let mut ai = HeuristicAi::new(5);
        let m = ai.choose(&mut board, Player::Two).unwrap();
        assert_eq!(m.column, 6);
        assert_eq!(m.reason, MoveReason::Win);
    }

    #[test]
    fn test_random_move_is_legal() {
        let mut board = Board::new();
        for _ in 0..BOARD_HEIGHT {
            board.place(0, Player::One);
            board.place(0, Player::Two);
        }
        let mut ai = HeuristicAi::new(11);
        for _ in 0..50 {
            let m = ai.choose(&mut board, Player::Two).unwrap();
            assert_eq!(m.reason, MoveReason::Random);
            assert!(board.has_space(m.column));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::from_rows([
            "1122112",
            "2211221",
            "1122112",
            "2211221",
            "1122112",
            "2211221",
        ]);
        assert!(board.is_full());
        assert!(check_win(&board).is_none());

        let mut ai = HeuristicAi::new(1);
        assert_eq!(ai.best_move(&mut board, Player::Two), None);
    }
}
