use crate::types::{GameMode, Outcome, Player, Screen, BOARD_HEIGHT, BOARD_WIDTH, CONNECT};

/// Everything a renderer needs to draw one frame.
///
/// Board cells are encoded as 0 = empty, 1 = player one, 2 = player two,
/// row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub screen: Screen,
    pub mode: Option<GameMode>,
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
    pub current_player: Player,
    pub outcome: Option<Outcome>,
    pub win_cells: Option<[(usize, usize); CONNECT]>,
    pub last_move: Option<(usize, usize)>,
    pub game_over_remaining_ms: u32,
    pub games_played: u32,
    pub moves_made: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        match self.board.get(row)?.get(col)? {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn is_win_cell(&self, row: usize, col: usize) -> bool {
        self.win_cells
            .is_some_and(|cells| cells.contains(&(row, col)))
    }

    pub fn winner(&self) -> Option<Player> {
        self.outcome.and_then(|o| o.winner())
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            screen: Screen::Title,
            mode: None,
            board: [[0u8; BOARD_WIDTH]; BOARD_HEIGHT],
            current_player: Player::One,
            outcome: None,
            win_cells: None,
            last_move: None,
            game_over_remaining_ms: 0,
            games_played: 0,
            moves_made: 0,
        }
    }
}
