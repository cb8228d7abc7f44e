//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the inverse mapping from
//! terminal coordinates back to board-relative pointer positions, so clicks
//! and drawing always agree on where the board is.

use crate::core::GameSnapshot;
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameMode, Outcome, Player, Pointer, Screen, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame sits inside a viewport.
///
/// `x`/`y` is the top-left border corner; the playable cells start one
/// column and one row inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    /// Row holding the column labels, directly under the frame.
    pub fn label_row(&self) -> u16 {
        self.y.saturating_add(self.frame_h)
    }

    /// Row holding the status line, under the labels.
    pub fn status_row(&self) -> u16 {
        self.label_row().saturating_add(1)
    }
}

/// Lines below the frame: labels and status.
const FOOTER_ROWS: u16 = 2;

const BG: Rgb = Rgb::BLACK;
const WIN_GLYPH: char = '▓';
const DISK_GLYPH: char = '█';
const EMPTY_GLYPH: char = '·';

/// Disk color for a player.
pub fn player_color(player: Player) -> Rgb {
    match player {
        Player::One => Rgb::RED,
        Player::Two => Rgb::BLUE,
    }
}

/// Message shown on the game-over screen.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Winner(Player::One) => "Player 1 Wins!",
        Outcome::Winner(Player::Two) => "Player 2 Wins!",
        Outcome::Draw => "Draw!",
    }
}

/// A lightweight terminal renderer for Connect Four.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps disks roughly round with typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal columns and rows per board cell.
    ///
    /// These are the pointer units of [`board_pointer`](Self::board_pointer),
    /// so the session must be configured with the same values.
    pub fn cell_metrics(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + FOOTER_ROWS) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Convert a terminal cell position into a board-relative pointer.
    ///
    /// (0, 0) is the top-left playable cell; the border and everything
    /// outside it map to negative or out-of-board coordinates.
    pub fn board_pointer(&self, viewport: Viewport, term_x: u16, term_y: u16) -> Pointer {
        let layout = self.layout(viewport);
        Pointer::new(
            term_x as i32 - (layout.x as i32 + 1),
            term_y as i32 - (layout.y as i32 + 1),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is only resized when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(Rgb::WHITE, BG).into_cell(' '));

        match snap.screen {
            Screen::Title => self.draw_title(fb, snap, viewport),
            Screen::Playing => {
                let layout = self.layout(viewport);
                self.draw_board(fb, snap, layout);
                self.draw_turn_line(fb, snap, layout);
                self.draw_side_panel(fb, snap, viewport, layout);
            }
            Screen::GameOver => {
                let layout = self.layout(viewport);
                self.draw_board(fb, snap, layout);
                self.draw_game_over(fb, snap, layout);
                self.draw_side_panel(fb, snap, viewport, layout);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let title = CellStyle::plain(Rgb::WHITE, BG).bold();
        let text = CellStyle::plain(Rgb::WHITE, BG);
        let hint = CellStyle::plain(Rgb::WHITE, BG).dim();

        let mid = viewport.height / 2;
        let w = viewport.width;
        fb.put_str_centered(0, w, mid.saturating_sub(3), "Connect Four", title);
        fb.put_str_centered(0, w, mid.saturating_sub(1), "Press '1' for Computer Mode", text);
        fb.put_str_centered(0, w, mid, "Press '2' for Two Player Mode", text);
        fb.put_str_centered(
            0,
            w,
            mid.saturating_add(2),
            "click a column or press 1-7 to drop, q to quit",
            hint,
        );

        if snap.games_played > 0 {
            let label = "games played: ";
            let total = text_width(label) + digit_count(snap.games_played);
            let x = w.saturating_sub(total) / 2;
            let y = mid.saturating_add(4);
            fb.put_str(x, y, label, hint);
            fb.put_u32(x + text_width(label), y, snap.games_played, hint);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: BoardLayout) {
        let border = CellStyle::plain(Rgb::WHITE, BG);
        self.draw_border(fb, layout, border);

        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                match snap.cell(row, col) {
                    Some(player) => {
                        let mut style = CellStyle::plain(player_color(player), BG);
                        if snap.last_move == Some((row, col)) {
                            style = style.bold();
                        }
                        let glyph = if snap.is_win_cell(row, col) {
                            WIN_GLYPH
                        } else {
                            DISK_GLYPH
                        };
                        self.draw_disk(fb, layout, row as u16, col as u16, glyph, style);
                    }
                    None => {
                        let style = CellStyle::plain(Rgb::WHITE, BG).dim();
                        let (px, py) = self.cell_origin(layout, row as u16, col as u16);
                        fb.put_char(px + self.disk_w() / 2, py + (self.cell_h - 1) / 2, EMPTY_GLYPH, style);
                    }
                }
            }
        }

        // Column labels 1..7 under each column.
        let label = CellStyle::plain(Rgb::WHITE, BG);
        let y = layout.label_row();
        for col in 0..BOARD_WIDTH as u16 {
            let (px, _) = self.cell_origin(layout, 0, col);
            fb.put_u32(px + self.disk_w() / 2, y, col as u32 + 1, label);
        }
    }

    /// Disk width, leaving one blank column between neighbours when there is room.
    fn disk_w(&self) -> u16 {
        if self.cell_w > 2 {
            self.cell_w - 1
        } else {
            self.cell_w
        }
    }

    fn cell_origin(&self, layout: BoardLayout, row: u16, col: u16) -> (u16, u16) {
        (
            layout.x + 1 + col * self.cell_w,
            layout.y + 1 + row * self.cell_h,
        )
    }

    fn draw_disk(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        row: u16,
        col: u16,
        glyph: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(layout, row, col);
        fb.fill_rect(px, py, self.disk_w(), self.cell_h, glyph, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout, style: CellStyle) {
        let BoardLayout {
            x,
            y,
            frame_w: w,
            frame_h: h,
        } = layout;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_turn_line(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: BoardLayout) {
        let player = snap.current_player;
        let text = match (snap.mode, player) {
            (Some(GameMode::Computer), Player::One) => "Your move",
            (_, Player::One) => "Player 1 to move",
            (_, Player::Two) => "Player 2 to move",
        };
        let style = CellStyle::plain(player_color(player), BG).bold();
        fb.put_str_centered(layout.x, layout.frame_w, layout.status_row(), text, style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: BoardLayout) {
        let Some(outcome) = snap.outcome else {
            return;
        };
        let fg = outcome.winner().map(player_color).unwrap_or(Rgb::WHITE);
        let message = outcome_message(outcome);

        // Blank a band across the middle of the board so the message reads cleanly.
        let mid_y = layout.y + layout.frame_h / 2;
        let band_w = text_width(message) + 2;
        let band_x = layout.x + layout.frame_w.saturating_sub(band_w) / 2;
        fb.fill_rect(band_x, mid_y, band_w, 1, ' ', CellStyle::plain(Rgb::WHITE, BG));
        fb.put_str_centered(
            layout.x,
            layout.frame_w,
            mid_y,
            message,
            CellStyle::plain(fg, BG).bold(),
        );

        fb.put_str_centered(
            layout.x,
            layout.frame_w,
            layout.status_row(),
            "click to continue",
            CellStyle::plain(Rgb::WHITE, BG).dim(),
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::plain(Rgb::WHITE, BG).bold();
        let value = CellStyle::plain(Rgb::WHITE, BG);

        let mut y = layout.y;
        fb.put_str(panel_x, y, "MODE", label);
        y += 1;
        let mode = match snap.mode {
            Some(GameMode::Computer) => "vs CPU",
            Some(GameMode::TwoPlayer) => "2 players",
            None => "-",
        };
        fb.put_str(panel_x, y, mode, value);
        y += 2;

        fb.put_str(panel_x, y, "TURN", label);
        y += 1;
        let turn = CellStyle::plain(player_color(snap.current_player), BG);
        fb.put_str(panel_x, y, snap.current_player.name(), turn);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.moves_made, value);
        y += 2;

        fb.put_str(panel_x, y, "GAMES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.games_played, value);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
