//! Match detection - runs of three or more identical jewels.
//!
//! Every occupied cell is used as a starting point and walked outward in all
//! eight directions (both signs of the horizontal, vertical and two diagonal
//! orientations). A run is found several times from different cells and
//! directions; the result is a set, so the repeats are absorbed.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{BOARD_COLUMNS, BOARD_ROWS};

/// (column, row) board coordinate
pub type Coord = (i8, i8);

/// Minimum run length that clears
pub const MIN_RUN: usize = 3;

const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const MAX_RUN: usize = BOARD_ROWS as usize;

/// Return every cell that belongs to a run of at least [`MIN_RUN`] jewels.
pub fn find_matches(board: &Board) -> BTreeSet<Coord> {
    let mut found = BTreeSet::new();

    for column in 0..BOARD_COLUMNS as i8 {
        for row in 0..BOARD_ROWS as i8 {
            if !board.is_occupied(column, row) || found.contains(&(column, row)) {
                continue;
            }
            for &(dc, dr) in &DIRECTIONS {
                let run = run_from(board, column, row, dc, dr);
                if run.len() >= MIN_RUN {
                    found.extend(run);
                }
            }
        }
    }

    found
}

/// True if the board has at least one run to clear
pub fn has_matches(board: &Board) -> bool {
    !find_matches(board).is_empty()
}

/// Cells from (column, row) walking (dc, dr) while the color repeats,
/// including the start cell.
fn run_from(board: &Board, column: i8, row: i8, dc: i8, dr: i8) -> ArrayVec<Coord, MAX_RUN> {
    let mut run = ArrayVec::new();
    let Some(start @ Some(_)) = board.get(column, row) else {
        return run;
    };
    run.push((column, row));

    let (mut c, mut r) = (column + dc, row + dr);
    while board.get(c, r) == Some(start) && !run.is_full() {
        run.push((c, r));
        c += dc;
        r += dr;
    }
    run
}
