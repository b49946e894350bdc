use columns::core::{Board, Faller, GameState, Session, SessionConfig, SimpleRng};
use columns::term::{encode_diff_into, jewel_color, GameView, Viewport};
use columns::types::{GameAction, Jewel, FALL_INTERVAL_MS, MATCH_FLASH_MS};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2: well = 6*2 by 13 => 12x13, plus border => 14x15
    let fb = view.render(&snap, Viewport::new(14, 15));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 14).unwrap().ch, '└');
    assert_eq!(fb.get(13, 14).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_active_faller_from_session() {
    let mut game = GameState::with_board(Board::new(), SimpleRng::new(1));
    game.place_faller(Faller::new(1, Jewel::Orange, Jewel::Purple, Jewel::Yellow));
    let mut session = Session::with_game(game, 10);
    for _ in 0..3 {
        session.tick(10);
    }

    // Rows 0..=2 of column 1: x = 1 + 1*2, y = 1 + row.
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(14, 15));
    for (row, jewel) in [(0, Jewel::Orange), (1, Jewel::Purple), (2, Jewel::Yellow)] {
        for x in [3, 4] {
            let cell = fb.get(x, 1 + row).unwrap();
            assert_eq!(cell.ch, '█');
            assert_eq!(cell.style.fg, jewel_color(jewel));
            assert!(cell.style.bold);
        }
    }
}

#[test]
fn term_view_marks_pause() {
    let mut session = Session::new(SessionConfig::default());
    session.tick(1);
    session.apply_action(GameAction::Pause);

    let fb = GameView::default().render(&session.snapshot(), Viewport::new(14, 15));
    assert!(fb.row_text(7).contains("PAUSED"));
}

#[test]
fn term_diff_is_limited_to_changed_cells() {
    let view = GameView::default();
    let vp = Viewport::new(14, 15);
    let empty = GameState::new(1).snapshot();
    let mut one = empty;
    one.board[12][0] = Jewel::Red.index();

    let a = view.render(&empty, vp);
    let b = view.render(&one, vp);

    let mut out = Vec::new();
    encode_diff_into(&a, &b, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert_eq!(text.matches('█').count(), 2);
    assert!(!text.contains('┌'));
}

#[test]
fn term_view_shows_board_under_recovered_faller() {
    // Column 0 holds red on rows 1-2 with blue/green below; the faller's red
    // bottom completes the run and the freeze that ended the game is undone.
    let mut rows = vec!["......", "R.....", "R....."];
    rows.extend(["B.....", "G....."].repeat(5));
    let mut game = GameState::with_board(Board::from_rows(&rows), SimpleRng::new(4));
    game.place_faller(Faller::new(0, Jewel::Yellow, Jewel::Purple, Jewel::Red));
    let mut session = Session::with_game(game, FALL_INTERVAL_MS);
    session.tick(FALL_INTERVAL_MS);
    session.tick(FALL_INTERVAL_MS);
    assert!(session.last_cascade().recovered);

    let view = GameView::default();
    let vp = Viewport::new(14, 15);

    // The cleared reds flash first.
    let fb = view.render(&session.snapshot(), vp);
    assert_eq!(fb.get(1, 1).unwrap().style.fg, columns::term::Rgb::new(255, 255, 255));

    session.tick(MATCH_FLASH_MS);
    let snap = session.snapshot();
    assert!(snap.faller.unwrap().frozen);
    assert_eq!(snap.faller.unwrap().rows, [0, 1, 2]);

    // The faller records rows 0..=2 but gravity put its jewels on rows 1-2.
    let fb = view.render(&snap, vp);
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
    for (y, jewel) in [(2, Jewel::Yellow), (3, Jewel::Purple), (4, Jewel::Blue)] {
        let cell = fb.get(1, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, jewel_color(jewel));
        assert!(!cell.style.bold);
    }
}
