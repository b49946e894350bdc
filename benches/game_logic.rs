use criterion::{black_box, criterion_group, criterion_main, Criterion};
use columns::core::{find_matches, Board, GameState, Session, SessionConfig, SimpleRng};
use columns::types::GameAction;

/// Bottom half packed with a repeating pattern, a few runs included.
fn busy_board() -> Board {
    let mut rows = vec!["......"; 6];
    rows.extend([
        "RBGYPO", "BGYPOR", "GYPORB", "RRRCCC", "OPYGBR", "PYGBRO", "YGBROP",
    ]);
    Board::from_rows(&rows)
}

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig {
        seed: 12345,
        fall_interval_ms: 16,
    });

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session.apply_action(GameAction::Restart);
            }
            session.tick(black_box(16));
        })
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("find_matches_busy_board", |b| {
        b.iter(|| find_matches(black_box(&board)))
    });
}

fn bench_gravity(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("clear_and_gravity", |b| {
        b.iter(|| {
            let mut game = GameState::with_board(board.clone(), SimpleRng::new(1));
            let found = find_matches(game.board());
            game.clear_board_of_matches(&found);
            game.gravity(None);
            black_box(game.board().occupied_count())
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("create_new_faller", |b| {
        b.iter(|| state.create_new_faller())
    });
}

criterion_group!(benches, bench_tick, bench_find_matches, bench_gravity, bench_spawn);
criterion_main!(benches);
