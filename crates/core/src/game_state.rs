//! Game state module - the board plus the active faller
//!
//! The board is the single source of truth for what is on screen. While a
//! faller is active, every one of its rows that is inside the grid is painted
//! onto the board. A single private repaint step re-establishes that after each
//! faller mutation, so the two never drift apart.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::GameError;
use crate::faller::Faller;
use crate::matches::Coord;
use crate::rng::{JewelRng, SimpleRng};
use crate::snapshot::{FallerSnapshot, GameSnapshot};
use crate::types::{Direction, BOARD_COLUMNS, BOARD_ROWS, FALLER_LEN};

/// Board, active faller and game-over flag
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    faller: Option<Faller>,
    game_over: bool,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: JewelRng> GameState<R> {
    /// Create a new game drawing spawns from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Start from a prepared board (puzzles, tests, replays)
    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            board,
            faller: None,
            game_over: false,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn faller(&self) -> Option<&Faller> {
        self.faller.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn end_game(&mut self) {
        if !self.game_over {
            info!(occupied = self.board.occupied_count(), "game over");
        }
        self.game_over = true;
    }

    /// Empty the board and forget the faller; the RNG sequence continues.
    pub fn reset(&mut self) {
        self.board.clear();
        self.faller = None;
        self.game_over = false;
    }

    /// Spawn a faller in a random column with three random jewels.
    ///
    /// Callers spawn only when no faller is active. A faller that has not
    /// entered the grid yet is simply replaced, which is how callers re-roll
    /// a spawn that landed on a full column.
    pub fn create_new_faller(&mut self) -> Faller {
        let column = self.rng.next_column();
        let top = self.rng.next_jewel();
        let middle = self.rng.next_jewel();
        let bottom = self.rng.next_jewel();
        self.place_faller(Faller::new(column, top, middle, bottom))
    }

    /// Make `faller` the active faller as-is and paint its visible rows.
    pub fn place_faller(&mut self, faller: Faller) -> Faller {
        debug!(
            column = faller.column(),
            jewels = ?faller.jewels(),
            "faller spawned"
        );
        self.faller = Some(faller);
        if faller.rows().iter().any(|&row| row >= 0) {
            self.repaint();
        }
        faller
    }

    /// True when the active faller's column has no empty cell
    pub fn is_faller_column_full(&self) -> bool {
        self.faller
            .as_ref()
            .map_or(false, |f| self.board.is_column_full(f.column()))
    }

    /// Move the faller down one row.
    ///
    /// A landed faller cannot fall; the caller should freeze it instead. When
    /// the faller's column is already full the game ends and the faller stays
    /// where it is.
    pub fn drop_faller_one_row(&mut self) -> Result<(), GameError> {
        let faller = self.faller.as_mut().ok_or(GameError::NoFaller)?;
        if faller.landed() {
            return Err(GameError::AlreadyLanded);
        }
        if self.board.is_column_full(faller.column()) {
            self.end_game();
            return Ok(());
        }

        faller.increment_row();
        self.repaint();
        Ok(())
    }

    /// Commit a landed faller to the board and release it.
    ///
    /// The frozen faller is handed back so the driver can reattach it if a
    /// later cascade makes room for it (see [`GameState::recover_faller`]).
    pub fn freeze_faller(&mut self) -> Result<Faller, GameError> {
        let faller = self.faller.as_mut().ok_or(GameError::NoFaller)?;
        if !faller.landed() {
            return Err(GameError::NotLanded);
        }

        faller.freeze();
        let frozen = *faller;
        self.faller = None;
        debug!(column = frozen.column(), rows = ?frozen.rows(), "faller frozen");

        if frozen.is_partly_above_grid() {
            self.end_game();
        }
        Ok(frozen)
    }

    /// Cycle the faller's colors in place.
    pub fn rotate_faller(&mut self) -> Result<(), GameError> {
        let faller = self.faller.as_mut().ok_or(GameError::NoFaller)?;
        faller.rotate();
        self.repaint();
        Ok(())
    }

    /// Move the faller one column left or right.
    pub fn shift(&mut self, direction: Direction) -> Result<(), GameError> {
        let faller = self.faller.ok_or(GameError::NoFaller)?;
        if faller.frozen() {
            return Err(GameError::Frozen);
        }

        let target = faller.column() + direction.delta();
        if !self.can_shift_to(&faller, target) {
            return Err(GameError::InvalidMove);
        }

        for row in faller.rows() {
            if row >= 0 {
                self.board.set(faller.column(), row, None);
            }
        }
        if let Some(active) = self.faller.as_mut() {
            active.set_column(target);
        }
        self.repaint();
        Ok(())
    }

    fn can_shift_to(&self, faller: &Faller, target: i8) -> bool {
        if target < 0 || target >= BOARD_COLUMNS as i8 {
            return false;
        }
        // Rows above the grid are empty in every column.
        faller
            .rows()
            .iter()
            .all(|&row| row < 0 || !self.board.is_occupied(target, row))
    }

    /// Compact every column so its jewels rest on the floor.
    ///
    /// With `dropped_tail`, the jewels of that faller which never entered the
    /// grid are stacked back on top of its column, in their original order,
    /// while the column has room. The rest are discarded.
    pub fn gravity(&mut self, dropped_tail: Option<&Faller>) {
        for column in 0..BOARD_COLUMNS as i8 {
            let mut stack = self.board.column_stack(column);

            if let Some(tail) = dropped_tail.filter(|f| f.column() == column) {
                let rows = tail.rows();
                let jewels = tail.jewels();
                for i in (0..FALLER_LEN).rev() {
                    if rows[i] < 0 && !stack.is_full() {
                        stack.insert(0, jewels[i]);
                    }
                }
            }

            self.board.settle_column(column, &stack);
        }
    }

    /// Empty every listed cell. Coordinates come from the match finder and
    /// are always inside the grid.
    pub fn clear_board_of_matches<'a, I>(&mut self, coords: I)
    where
        I: IntoIterator<Item = &'a Coord>,
    {
        for &(column, row) in coords {
            self.board.set(column, row, None);
        }
    }

    /// Reattach a faller whose freeze ended the game, after a cascade cleared
    /// room below it.
    ///
    /// Game over is cleared, gravity re-runs with the faller's unplaced jewels
    /// reinserted, and the faller comes back one row lower (two if its column
    /// still has an empty cell). It keeps its landed and frozen flags, so the
    /// next fall tick freezes it again.
    pub fn recover_faller(&mut self, mut faller: Faller) {
        info!(column = faller.column(), "reattaching faller after cascade");
        self.game_over = false;
        self.gravity(Some(&faller));

        faller.increment_row();
        if !self.board.is_column_full(faller.column()) {
            faller.increment_row();
        }
        self.faller = Some(faller);
    }

    /// Paint the faller onto the board and refresh its landed flag.
    fn repaint(&mut self) {
        let Some(faller) = self.faller.as_mut() else {
            return;
        };
        let column = faller.column();

        for (i, (row, jewel)) in faller.cells().enumerate() {
            if row < 0 {
                continue;
            }
            self.board.set(column, row, Some(jewel));
            // The cell the top jewel just left.
            if i == 0 && row > 0 {
                self.board.set(column, row - 1, None);
            }
        }

        if is_supported(&self.board, faller) {
            faller.land();
        } else if faller.landed() {
            faller.lift();
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.faller = self.faller.map(FallerSnapshot::from);
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Bottom jewel rests on the floor or on an occupied cell
fn is_supported(board: &Board, faller: &Faller) -> bool {
    let bottom = faller.bottom_row();
    bottom == BOARD_ROWS as i8 - 1 || board.is_occupied(faller.column(), bottom + 1)
}
