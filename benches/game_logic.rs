use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_connect_four::core::{check_win, Board, GameSession, GameSnapshot, HeuristicAi, NullAudio};
use tui_connect_four::term::{FrameBuffer, GameView, Viewport};
use tui_connect_four::types::{FrameInput, KeyPress, Player, TICK_MS};

fn midgame_board() -> Board {
    Board::from_rows([
        ".......", ".......", "..1....", "..21...", ".2121..", "1211221",
    ])
}

fn bench_check_win(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("check_win_midgame", |b| {
        b.iter(|| check_win(black_box(&board)))
    });
}

fn bench_best_move(c: &mut Criterion) {
    let mut board = midgame_board();
    let mut ai = HeuristicAi::new(12345);

    c.bench_function("ai_best_move", |b| {
        b.iter(|| ai.best_move(black_box(&mut board), Player::Two))
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    let mut audio = NullAudio;
    session.update(&FrameInput::key(KeyPress::TwoPlayerMode), TICK_MS, &mut audio);
    let idle = FrameInput::idle();

    c.bench_function("session_tick_idle", |b| {
        b.iter(|| session.update(black_box(&idle), TICK_MS, &mut audio))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut snap = GameSnapshot::default();
    let mut session = GameSession::new(1);
    session.update(&FrameInput::key(KeyPress::TwoPlayerMode), TICK_MS, &mut NullAudio);
    session.snapshot_into(&mut snap);

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_playing_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_check_win,
    bench_best_move,
    bench_session_tick,
    bench_render
);
criterion_main!(benches);
