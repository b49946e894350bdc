//! Session - the control loop around a [`GameState`]
//!
//! A session decides *when* engine operations run: it spawns fallers (with a
//! bounded re-roll when the random column is full), drops the faller on a
//! fixed interval, freezes it once it has landed, applies player actions and
//! resolves cascades once nothing is falling. The cells a cascade cleared
//! stay marked in the snapshot for [`MATCH_FLASH_MS`] so a view can flash
//! them.
//!
//! Call [`Session::tick`] every frame with the elapsed time and
//! [`Session::apply_action`] for each player action.

use tracing::{debug, info, warn};

use crate::error::GameError;
use crate::faller::Faller;
use crate::game_state::GameState;
use crate::matches::find_matches;
use crate::rng::{JewelRng, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameAction, BOARD_COLUMNS, BOARD_ROWS, FALL_INTERVAL_MS, MATCH_FLASH_MS,
    MAX_SPAWN_ATTEMPTS,
};

type FlashGrid = [[bool; BOARD_COLUMNS as usize]; BOARD_ROWS as usize];

const NO_FLASH: FlashGrid = [[false; BOARD_COLUMNS as usize]; BOARD_ROWS as usize];

/// Runtime settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for spawn columns and colors
    pub seed: u32,
    /// Milliseconds between automatic one-row drops
    pub fall_interval_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            fall_interval_ms: FALL_INTERVAL_MS,
        }
    }
}

/// Outcome of one [`Session::resolve_matches`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    /// Clear-and-settle passes performed
    pub passes: u32,
    /// Total cells cleared across all passes
    pub cleared: usize,
    /// A faller that had ended the game was reattached
    pub recovered: bool,
}

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    game: GameState<R>,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    /// Most recently frozen faller, kept for post-cascade recovery
    last_frozen: Option<Faller>,
    paused: bool,
    last_cascade: CascadeReport,
    /// Cells cleared by the last cascade, row-major
    flash: FlashGrid,
    flash_ms: u32,
}

impl Session<SimpleRng> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_game(GameState::new(config.seed), config.fall_interval_ms)
    }
}

impl<R: JewelRng> Session<R> {
    pub fn with_game(game: GameState<R>, fall_interval_ms: u32) -> Self {
        Self {
            game,
            fall_interval_ms: fall_interval_ms.max(1),
            fall_timer_ms: 0,
            last_frozen: None,
            paused: false,
            last_cascade: CascadeReport::default(),
            flash: NO_FLASH,
            flash_ms: 0,
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn last_cascade(&self) -> CascadeReport {
        self.last_cascade
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        out.paused = self.paused;
        out.cascades = self.last_cascade.passes;
        out.flash = if self.flash_ms > 0 { self.flash } else { NO_FLASH };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the session by `elapsed_ms`. Returns true if the board changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused {
            return false;
        }

        let was_flashing = self.flash_ms > 0;
        self.flash_ms = self.flash_ms.saturating_sub(elapsed_ms);
        let flash_expired = was_flashing && self.flash_ms == 0;
        if self.game.is_game_over() {
            return flash_expired;
        }

        let mut changed = self.ensure_faller() | flash_expired;

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms = 0;
            changed |= self.advance();
        }

        changed |= self.resolve_matches().passes > 0;
        changed
    }

    /// Spawn a faller if none is active.
    ///
    /// A spawn whose column is already full is re-rolled up to
    /// [`MAX_SPAWN_ATTEMPTS`] times; if every attempt hits a full column the
    /// game ends.
    pub fn ensure_faller(&mut self) -> bool {
        if self.game.faller().is_some() || self.game.is_game_over() {
            return false;
        }

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            self.game.create_new_faller();
            if !self.game.is_faller_column_full() {
                return true;
            }
        }

        warn!(attempts = MAX_SPAWN_ATTEMPTS, "no open column for a new faller");
        self.game.end_game();
        true
    }

    /// Drop the faller one row, or freeze it if it has already landed.
    pub fn advance(&mut self) -> bool {
        if self.game.faller().is_none() {
            return false;
        }

        match self.game.drop_faller_one_row() {
            Ok(()) => true,
            Err(GameError::AlreadyLanded) => match self.game.freeze_faller() {
                Ok(frozen) => {
                    self.last_frozen = Some(frozen);
                    true
                }
                Err(err) => {
                    debug!(%err, "freeze rejected");
                    false
                }
            },
            Err(err) => {
                debug!(%err, "drop rejected");
                false
            }
        }
    }

    /// Apply a player action. Returns true if it took effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game.is_game_over() {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.game.reset();
                self.fall_timer_ms = 0;
                self.last_frozen = None;
                self.paused = false;
                self.last_cascade = CascadeReport::default();
                self.flash = NO_FLASH;
                self.flash_ms = 0;
                true
            }
            _ if self.paused || self.game.is_game_over() => false,
            GameAction::ShiftLeft => self.shift(Direction::Left),
            GameAction::ShiftRight => self.shift(Direction::Right),
            GameAction::Rotate => {
                let movable = self.game.faller().map_or(false, |f| !f.frozen());
                movable && self.game.rotate_faller().is_ok()
            }
            GameAction::SoftDrop => {
                let falling = self.game.faller().map_or(false, |f| !f.landed());
                if !falling {
                    return false;
                }
                self.fall_timer_ms = 0;
                self.advance()
            }
        }
    }

    fn shift(&mut self, direction: Direction) -> bool {
        match self.game.shift(direction) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, ?direction, "shift ignored");
                false
            }
        }
    }

    /// Clear matches until the board is stable.
    ///
    /// Runs only while no faller is active. Each pass clears every current
    /// match and settles the columns. If a pass happens while the game is over
    /// and the faller that ended it is known, that faller is reattached, which
    /// also ends the loop.
    pub fn resolve_matches(&mut self) -> CascadeReport {
        let mut report = CascadeReport::default();
        let mut cleared = NO_FLASH;

        while self.game.faller().is_none() {
            let matches = find_matches(self.game.board());
            if matches.is_empty() {
                break;
            }

            report.passes += 1;
            report.cleared += matches.len();
            for &(column, row) in &matches {
                cleared[row as usize][column as usize] = true;
            }
            self.game.clear_board_of_matches(&matches);
            self.game.gravity(None);

            if self.game.is_game_over() {
                if let Some(faller) = self.last_frozen.take() {
                    self.game.recover_faller(faller);
                    report.recovered = true;
                }
            }
        }

        if report.passes > 0 {
            info!(
                passes = report.passes,
                cleared = report.cleared,
                recovered = report.recovered,
                "cascade resolved"
            );
            self.last_cascade = report;
            self.flash = cleared;
            self.flash_ms = MATCH_FLASH_MS;
        }
        report
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
