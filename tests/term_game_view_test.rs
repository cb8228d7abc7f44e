use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_connect_four::core::{column_from_pointer, GameSession, GameSnapshot, NullAudio};
use tui_connect_four::input::PointerTracker;
use tui_connect_four::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use tui_connect_four::types::{
    FrameInput, GameMode, KeyPress, Outcome, Player, Screen, BOARD_HEIGHT, BOARD_WIDTH, TICK_MS,
};

const VP: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn playing_snapshot() -> GameSnapshot {
    GameSnapshot {
        screen: Screen::Playing,
        mode: Some(GameMode::TwoPlayer),
        ..GameSnapshot::default()
    }
}

fn contains(fb: &FrameBuffer, needle: &str) -> bool {
    fb.text().contains(needle)
}

/// Terminal position of the middle of a board cell with the default 4x2 cells.
fn cell_pos(view: &GameView, row: usize, col: usize) -> (u16, u16) {
    let layout = view.layout(VP);
    (
        layout.x + 1 + col as u16 * 4 + 1,
        layout.y + 1 + row as u16 * 2,
    )
}

#[test]
fn title_screen_shows_mode_prompts() {
    let fb = GameView::default().render(&GameSnapshot::default(), VP);

    assert!(contains(&fb, "Connect Four"));
    assert!(contains(&fb, "Press '1' for Computer Mode"));
    assert!(contains(&fb, "Press '2' for Two Player Mode"));
    // No board on the title screen.
    assert!(!contains(&fb, "┌"));
}

#[test]
fn playing_screen_draws_frame_and_column_labels() {
    let view = GameView::default();
    let fb = view.render(&playing_snapshot(), VP);
    let layout = view.layout(VP);

    assert_eq!(fb.get(layout.x, layout.y).unwrap().ch, '┌');
    assert_eq!(fb.get(layout.x + layout.frame_w - 1, layout.y).unwrap().ch, '┐');
    assert_eq!(fb.get(layout.x, layout.y + layout.frame_h - 1).unwrap().ch, '└');
    assert_eq!(
        fb.get(layout.x + layout.frame_w - 1, layout.y + layout.frame_h - 1)
            .unwrap()
            .ch,
        '┘'
    );

    let labels: String = fb
        .row_text(layout.label_row())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    assert_eq!(labels, "1234567");
    assert!(fb.row_text(layout.status_row()).contains("Player 1 to move"));
}

#[test]
fn disks_use_player_colors() {
    let view = GameView::default();
    let mut snap = playing_snapshot();
    snap.board[BOARD_HEIGHT - 1][0] = 1;
    snap.board[BOARD_HEIGHT - 1][1] = 2;

    let fb = view.render(&snap, VP);

    let (x, y) = cell_pos(&view, BOARD_HEIGHT - 1, 0);
    let red = fb.get(x, y).unwrap();
    assert_eq!(red.ch, '█');
    assert_eq!(red.style.fg, Rgb::RED);

    let (x, y) = cell_pos(&view, BOARD_HEIGHT - 1, 1);
    let blue = fb.get(x, y).unwrap();
    assert_eq!(blue.ch, '█');
    assert_eq!(blue.style.fg, Rgb::BLUE);

    let (x, y) = cell_pos(&view, 0, 0);
    assert_ne!(fb.get(x, y).unwrap().ch, '█');
}

#[test]
fn game_over_shows_winner_and_marks_line() {
    let view = GameView::default();
    let mut snap = playing_snapshot();
    snap.screen = Screen::GameOver;
    snap.outcome = Some(Outcome::Winner(Player::Two));
    let cells = [(5, 0), (5, 1), (5, 2), (5, 3)];
    for &(r, c) in &cells {
        snap.board[r][c] = 2;
    }
    snap.win_cells = Some(cells);

    let fb = view.render(&snap, VP);
    assert!(contains(&fb, "Player 2 Wins!"));

    let (x, y) = cell_pos(&view, 5, 2);
    let cell = fb.get(x, y).unwrap();
    assert_eq!(cell.ch, '▓');
    assert_eq!(cell.style.fg, Rgb::BLUE);
}

#[test]
fn game_over_draw_message() {
    let mut snap = playing_snapshot();
    snap.screen = Screen::GameOver;
    snap.outcome = Some(Outcome::Draw);
    let fb = GameView::default().render(&snap, VP);
    assert!(contains(&fb, "Draw!"));
}

#[test]
fn side_panel_appears_when_wide_enough() {
    let view = GameView::default();
    let wide = view.render(&playing_snapshot(), VP);
    assert!(contains(&wide, "MODE"));
    assert!(contains(&wide, "2 players"));

    let narrow = view.render(&playing_snapshot(), Viewport::new(32, 20));
    assert!(!contains(&narrow, "MODE"));
}

#[test]
fn top_anchor_puts_frame_on_first_row() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&playing_snapshot(), VP);
    assert_eq!(view.layout(VP).y, 0);
    assert_eq!(fb.get(view.layout(VP).x, 0).unwrap().ch, '┌');
}

#[test]
fn tiny_viewport_does_not_panic() {
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 3), (29, 13)] {
        let _ = view.render(&playing_snapshot(), Viewport::new(w, h));
        let _ = view.render(&GameSnapshot::default(), Viewport::new(w, h));
    }
}

#[test]
fn terminal_cells_map_back_to_columns() {
    let view = GameView::default();
    let (cw, ch) = view.cell_metrics();
    let layout = view.layout(VP);

    for col in 0..BOARD_WIDTH {
        for row in 0..BOARD_HEIGHT {
            let (x, y) = cell_pos(&view, row, col);
            let p = view.board_pointer(VP, x, y);
            assert_eq!(column_from_pointer(p, cw, ch), Some(col));
        }
    }

    // Borders and the label row are outside the board.
    let left = view.board_pointer(VP, layout.x, layout.y + 3);
    let right = view.board_pointer(VP, layout.x + layout.frame_w - 1, layout.y + 3);
    let labels = view.board_pointer(VP, layout.x + 3, layout.label_row());
    assert_eq!(column_from_pointer(left, cw, ch), None);
    assert_eq!(column_from_pointer(right, cw, ch), None);
    assert_eq!(column_from_pointer(labels, cw, ch), None);
}

#[test]
fn mouse_click_drops_disk_end_to_end() {
    let view = GameView::default();
    let (cw, ch) = view.cell_metrics();
    let mut session = GameSession::new(1);
    session.set_cell_metrics(cw, ch);
    let mut audio = NullAudio;
    session.update(&FrameInput::key(KeyPress::TwoPlayerMode), TICK_MS, &mut audio);

    let (x, y) = cell_pos(&view, 0, 5);
    let mut tracker = PointerTracker::new();
    tracker.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    });
    let input = tracker.take_frame(|tx, ty| view.board_pointer(VP, tx, ty));
    session.update(&input, TICK_MS, &mut audio);

    assert_eq!(session.board().get(BOARD_HEIGHT - 1, 5), Some(Some(Player::One)));
    assert_eq!(session.current_player(), Player::Two);
}
