//! Game state integration tests

use columns::core::{Board, Faller, GameError, GameState, JewelRng, SimpleRng};
use columns::types::{Direction, Jewel, BOARD_COLUMNS, FALLER_SPAWN_ROWS};

/// Replays a fixed list of draws, wrapping around.
struct ScriptedRng {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }
}

impl JewelRng for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        let v = self.draws[self.next % self.draws.len()];
        self.next += 1;
        v % max
    }
}

fn game_with_faller(board: Board, faller: Faller) -> GameState {
    let mut game = GameState::with_board(board, SimpleRng::new(9));
    game.place_faller(faller);
    game
}

/// Twelve empty rows above `floor`.
fn with_floor(floor: &str) -> Vec<&str> {
    let mut rows = vec!["......"; 12];
    rows.push(floor);
    rows
}

fn drop_times(game: &mut GameState, n: usize) {
    for _ in 0..n {
        game.drop_faller_one_row().unwrap();
    }
}

#[test]
fn test_spawn_uses_rng_draws() {
    // column, top, middle, bottom
    let mut game = GameState::with_rng(ScriptedRng::new(&[4, 0, 2, 6]));
    let faller = game.create_new_faller();

    assert_eq!(faller.column(), 4);
    assert_eq!(faller.jewels(), [Jewel::Red, Jewel::Green, Jewel::Cyan]);
    assert_eq!(faller.rows(), FALLER_SPAWN_ROWS);
    assert!(!faller.landed() && !faller.frozen());
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_thousand_spawns_are_valid() {
    let mut game = GameState::new(2024);
    let mut seen = [false; BOARD_COLUMNS as usize];
    for _ in 0..1000 {
        let faller = game.create_new_faller();
        assert!((0..BOARD_COLUMNS as i8).contains(&faller.column()));
        assert!(faller.jewels().iter().all(|j| Jewel::ALL.contains(j)));
        seen[faller.column() as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "every column should come up");
}

#[test]
fn test_drop_on_full_column_ends_game() {
    let board = Board::from_rows(&["..R...", "..B..."].repeat(7)[..13]);
    assert!(board.is_column_full(2));
    let mut game = game_with_faller(board, Faller::new(2, Jewel::Red, Jewel::Red, Jewel::Red));

    assert_eq!(game.drop_faller_one_row(), Ok(()));
    assert!(game.is_game_over());
    assert_eq!(game.faller().unwrap().rows(), FALLER_SPAWN_ROWS);
}

#[test]
fn test_freeze_requires_landing() {
    let mut game = game_with_faller(
        Board::new(),
        Faller::new(1, Jewel::Blue, Jewel::Green, Jewel::Yellow),
    );
    drop_times(&mut game, 5);
    assert_eq!(game.freeze_faller(), Err(GameError::NotLanded));

    drop_times(&mut game, 8);
    assert!(game.faller().unwrap().landed());
    assert_eq!(
        game.drop_faller_one_row(),
        Err(GameError::AlreadyLanded)
    );

    let frozen = game.freeze_faller().unwrap();
    assert!(frozen.frozen());
    assert!(game.faller().is_none());
    assert!(!game.is_game_over());
    assert_eq!(game.board().get(1, 10), Some(Some(Jewel::Blue)));
    assert_eq!(game.board().get(1, 11), Some(Some(Jewel::Green)));
    assert_eq!(game.board().get(1, 12), Some(Some(Jewel::Yellow)));
}

#[test]
fn test_freeze_above_grid_ends_game() {
    // Column 0 is full except for the top row.
    let mut rows = vec!["......"];
    rows.extend(["R.....", "B....."].repeat(6));
    let mut game = game_with_faller(
        Board::from_rows(&rows),
        Faller::new(0, Jewel::Green, Jewel::Green, Jewel::Yellow),
    );

    drop_times(&mut game, 1);
    assert!(game.faller().unwrap().landed());
    assert_eq!(game.board().get(0, 0), Some(Some(Jewel::Yellow)));

    game.freeze_faller().unwrap();
    assert!(game.is_game_over());
}

#[test]
fn test_operations_without_faller() {
    let mut game = GameState::new(1);
    assert_eq!(game.drop_faller_one_row(), Err(GameError::NoFaller));
    assert_eq!(game.freeze_faller(), Err(GameError::NoFaller));
    assert_eq!(game.rotate_faller(), Err(GameError::NoFaller));
    assert_eq!(game.shift(Direction::Left), Err(GameError::NoFaller));
}

#[test]
fn test_rotate_three_times_is_identity() {
    let mut game = game_with_faller(
        Board::new(),
        Faller::new(3, Jewel::Red, Jewel::Green, Jewel::Blue),
    );
    drop_times(&mut game, 4);
    let before = *game.faller().unwrap();
    let board_before = game.board().clone();

    game.rotate_faller().unwrap();
    assert_eq!(
        game.faller().unwrap().jewels(),
        [Jewel::Blue, Jewel::Red, Jewel::Green]
    );
    assert_eq!(game.faller().unwrap().rows(), before.rows());

    game.rotate_faller().unwrap();
    game.rotate_faller().unwrap();
    assert_eq!(*game.faller().unwrap(), before);
    assert_eq!(*game.board(), board_before);
}

#[test]
fn test_shift_round_trip_restores_board() {
    let mut game = game_with_faller(
        Board::from_rows(&with_floor("Y....P")),
        Faller::new(2, Jewel::Red, Jewel::Orange, Jewel::Cyan),
    );
    drop_times(&mut game, 5);
    let board_before = game.board().clone();

    game.shift(Direction::Right).unwrap();
    assert_eq!(game.faller().unwrap().column(), 3);
    assert_eq!(game.board().get(2, 4), Some(None));
    assert_eq!(game.board().get(3, 4), Some(Some(Jewel::Cyan)));

    game.shift(Direction::Left).unwrap();
    assert_eq!(game.faller().unwrap().column(), 2);
    assert_eq!(*game.board(), board_before);
}

#[test]
fn test_shift_rejections_leave_state_unchanged() {
    let mut game = game_with_faller(
        Board::from_rows(&with_floor("...G..")),
        Faller::new(2, Jewel::Red, Jewel::Blue, Jewel::Red),
    );
    drop_times(&mut game, 13);
    let faller = *game.faller().unwrap();
    let board = game.board().clone();

    assert_eq!(game.shift(Direction::Right), Err(GameError::InvalidMove));
    assert_eq!(*game.faller().unwrap(), faller);
    assert_eq!(*game.board(), board);

    game.shift(Direction::Left).unwrap();
    game.shift(Direction::Left).unwrap();
    assert_eq!(game.shift(Direction::Left), Err(GameError::InvalidMove));
    assert_eq!(game.faller().unwrap().column(), 0);
}

#[test]
fn test_gravity_compacts_every_column() {
    let mut game = GameState::with_board(
        Board::from_rows(&["R..B..", "......", "G....C", "......", ".Y...."]),
        SimpleRng::new(1),
    );
    game.gravity(None);

    let board = game.board();
    assert_eq!(board.get(0, 11), Some(Some(Jewel::Red)));
    assert_eq!(board.get(0, 12), Some(Some(Jewel::Green)));
    assert_eq!(board.get(1, 12), Some(Some(Jewel::Yellow)));
    assert_eq!(board.get(3, 12), Some(Some(Jewel::Blue)));
    assert_eq!(board.get(5, 12), Some(Some(Jewel::Cyan)));
    assert_eq!(board.occupied_count(), 5);
}

#[test]
fn test_clear_then_gravity() {
    let mut rows = vec!["......"; 10];
    rows.extend(["B.....", "RRR...", "G....."]);
    let mut game = GameState::with_board(Board::from_rows(&rows), SimpleRng::new(1));

    let matches = columns::core::find_matches(game.board());
    game.clear_board_of_matches(&matches);
    game.gravity(None);

    assert_eq!(game.board().get(0, 11), Some(Some(Jewel::Blue)));
    assert_eq!(game.board().get(0, 12), Some(Some(Jewel::Green)));
    assert_eq!(game.board().occupied_count(), 2);
}

#[test]
fn test_reset_keeps_rng_sequence() {
    let mut a = GameState::new(77);
    let mut b = GameState::new(77);
    a.create_new_faller();
    a.reset();
    b.create_new_faller();

    assert!(a.faller().is_none());
    assert_eq!(a.create_new_faller(), b.create_new_faller());
}
