//! Game session module - the screen/turn state machine
//!
//! A [`GameSession`] owns everything one game loop needs: the board, the active
//! screen, the chosen mode, whose turn it is, the outcome and the game-over
//! countdown. The frame pump calls [`GameSession::update`] once per tick with
//! that tick's input and elapsed time; all mutation happens inside that call.
//!
//! Screen cycle: Title → Playing → GameOver → Title.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::ai::HeuristicAi;
use crate::audio::AudioSink;
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::win::{check_win, WinLine};
use crate::Board;

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Countdown before GameOver returns to the title screen
    pub game_over_delay_ms: u32,
    /// Pointer units per board column
    pub cell_width: u16,
    /// Pointer units per board row
    pub cell_height: u16,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            game_over_delay_ms: GAME_OVER_DELAY_MS,
            cell_width: CELL_SIZE,
            cell_height: CELL_SIZE,
        }
    }
}

/// Notable things that happened during the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    Started {
        mode: GameMode,
    },
    Placed {
        player: Player,
        column: usize,
        row: usize,
        by_computer: bool,
    },
    GameOver {
        outcome: Outcome,
    },
    ReturnedToTitle,
}

/// At most: human placement, computer placement, game over.
const EVENTS_PER_TICK: usize = 4;

/// Map a board-relative pointer to a column.
///
/// `column = floor(x / cell_w)`. Returns None left of or above the board,
/// right of the last column, or below the board (the label footer).
pub fn column_from_pointer(pointer: Pointer, cell_w: u16, cell_h: u16) -> Option<usize> {
    if pointer.x < 0 || pointer.y < 0 || cell_w == 0 || cell_h == 0 {
        return None;
    }
    let board_h = BOARD_HEIGHT as i32 * cell_h as i32;
    if pointer.y > board_h {
        return None;
    }
    let col = (pointer.x / cell_w as i32) as usize;
    (col < BOARD_WIDTH).then_some(col)
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    screen: Screen,
    mode: Option<GameMode>,
    current_player: Player,
    outcome: Option<Outcome>,
    win_line: Option<WinLine>,
    game_over_timer_ms: u32,
    last_move: Option<(usize, usize)>,
    moves_made: u32,
    games_played: u32,
    ai: HeuristicAi,
    settings: SessionSettings,
    events: ArrayVec<SessionEvent, EVENTS_PER_TICK>,
}

impl GameSession {
    /// Create a session on the title screen; `seed` drives the computer's random moves
    pub fn new(seed: u32) -> Self {
        Self::with_settings(seed, SessionSettings::default())
    }

    pub fn with_settings(seed: u32, settings: SessionSettings) -> Self {
        Self {
            board: Board::new(),
            screen: Screen::Title,
            mode: None,
            current_player: Player::One,
            outcome: None,
            win_line: None,
            game_over_timer_ms: 0,
            last_move: None,
            moves_made: 0,
            games_played: 0,
            ai: HeuristicAi::new(seed),
            settings,
            events: ArrayVec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Player> {
        self.outcome.and_then(|o| o.winner())
    }

    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Pointer metrics can change when the terminal is resized
    pub fn set_cell_metrics(&mut self, cell_width: u16, cell_height: u16) {
        self.settings.cell_width = cell_width;
        self.settings.cell_height = cell_height;
    }

    pub fn game_over_remaining_ms(&self) -> u32 {
        self.game_over_timer_ms
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Events produced by the most recent [`update`](Self::update)
    pub fn last_events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Clear the board and give the first move back to player one.
    ///
    /// Calling this on an already reset session changes nothing.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.last_move = None;
        self.moves_made = 0;
    }

    /// Advance one frame.
    pub fn update<A: AudioSink + ?Sized>(
        &mut self,
        input: &FrameInput,
        elapsed_ms: u32,
        audio: &mut A,
    ) {
        self.events.clear();
        match self.screen {
            Screen::Title => self.update_title(input, audio),
            Screen::Playing => self.update_playing(input, audio),
            Screen::GameOver => self.update_game_over(input, elapsed_ms),
        }
    }

    fn update_title<A: AudioSink + ?Sized>(&mut self, input: &FrameInput, audio: &mut A) {
        let mode = match input.key {
            Some(KeyPress::Digit(1)) | Some(KeyPress::ComputerMode) => GameMode::Computer,
            Some(KeyPress::Digit(2)) | Some(KeyPress::TwoPlayerMode) => GameMode::TwoPlayer,
            _ => return,
        };
        self.start(mode, audio);
    }

    /// Leave the title screen and begin a game in `mode`.
    pub fn start<A: AudioSink + ?Sized>(&mut self, mode: GameMode, audio: &mut A) {
        if self.screen != Screen::Title {
            return;
        }
        audio.play(SoundCue::Start);
        self.mode = Some(mode);
        self.screen = Screen::Playing;
        self.push_event(SessionEvent::Started { mode });
        info!(mode = mode.as_str(), "game started");
    }

    fn update_playing<A: AudioSink + ?Sized>(&mut self, input: &FrameInput, audio: &mut A) {
        let column = if input.clicked {
            column_from_pointer(
                input.pointer,
                self.settings.cell_width,
                self.settings.cell_height,
            )
        } else {
            match input.key {
                Some(KeyPress::Digit(n)) if (1..=BOARD_WIDTH as u8).contains(&n) => {
                    Some((n - 1) as usize)
                }
                _ => None,
            }
        };

        if let Some(column) = column {
            self.drop_disk(column, audio);
        }
    }

    /// Drop the current player's disk into `column`.
    ///
    /// Returns false (and changes nothing) when not playing or the column is
    /// full. In computer mode a successful human move is answered by the
    /// computer within the same call.
    pub fn drop_disk<A: AudioSink + ?Sized>(&mut self, column: usize, audio: &mut A) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }

        let player = self.current_player;
        let Some(row) = self.board.place(column, player) else {
            debug!(column, "column full, move ignored");
            return false;
        };
        audio.play(SoundCue::Place);
        self.record_move(player, column, row, false);

        if self.finish_if_over() {
            return true;
        }

        self.current_player = player.other();
        if self.mode == Some(GameMode::Computer) && self.current_player == Player::Two {
            self.computer_turn(audio);
        }
        true
    }

    fn computer_turn<A: AudioSink + ?Sized>(&mut self, audio: &mut A) {
        let me = self.current_player;
        match self.ai.choose(&mut self.board, me) {
            Some(choice) => {
                if let Some(row) = self.board.place(choice.column, me) {
                    debug!(
                        column = choice.column,
                        reason = choice.reason.as_str(),
                        "computer moved"
                    );
                    audio.play(SoundCue::Place);
                    self.record_move(me, choice.column, row, true);
                    if self.finish_if_over() {
                        return;
                    }
                }
            }
            None => debug!("computer has no legal column, turn passes"),
        }
        self.current_player = Player::One;
    }

    fn record_move(&mut self, player: Player, column: usize, row: usize, by_computer: bool) {
        self.last_move = Some((row, column));
        self.moves_made = self.moves_made.saturating_add(1);
        self.push_event(SessionEvent::Placed {
            player,
            column,
            row,
            by_computer,
        });
    }

    /// Enter GameOver on a win or a full board. Returns true if the game ended.
    fn finish_if_over(&mut self) -> bool {
        let (outcome, line) = if let Some(line) = check_win(&self.board) {
            (Outcome::Winner(line.player), Some(line))
        } else if self.board.is_full() {
            (Outcome::Draw, None)
        } else {
            return false;
        };

        self.screen = Screen::GameOver;
        self.outcome = Some(outcome);
        self.win_line = line;
        self.game_over_timer_ms = self.settings.game_over_delay_ms;
        self.games_played = self.games_played.saturating_add(1);
        self.push_event(SessionEvent::GameOver { outcome });
        match outcome {
            Outcome::Winner(p) => info!(winner = p.as_str(), moves = self.moves_made, "game over"),
            Outcome::Draw => info!(moves = self.moves_made, "game over, draw"),
        }
        true
    }

    fn update_game_over(&mut self, input: &FrameInput, elapsed_ms: u32) {
        self.game_over_timer_ms = self.game_over_timer_ms.saturating_sub(elapsed_ms);
        if input.clicked || self.game_over_timer_ms == 0 {
            self.return_to_title();
        }
    }

    fn return_to_title(&mut self) {
        self.reset();
        self.outcome = None;
        self.win_line = None;
        self.mode = None;
        self.game_over_timer_ms = 0;
        self.screen = Screen::Title;
        self.push_event(SessionEvent::ReturnedToTitle);
        debug!("returned to title");
    }

    fn push_event(&mut self, event: SessionEvent) {
        let _ = self.events.try_push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.screen = self.screen;
        out.mode = self.mode;
        out.current_player = self.current_player;
        out.outcome = self.outcome;
        out.win_cells = self.win_line.map(|line| line.cells);
        out.last_move = self.last_move;
        out.game_over_remaining_ms = self.game_over_timer_ms;
        out.games_played = self.games_played;
        out.moves_made = self.moves_made;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
