use crate::faller::Faller;
use crate::types::{Jewel, BOARD_COLUMNS, BOARD_ROWS, FALLER_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallerSnapshot {
    pub column: i8,
    pub jewels: [Jewel; FALLER_LEN],
    pub rows: [i8; FALLER_LEN],
    pub landed: bool,
    pub frozen: bool,
}

impl From<Faller> for FallerSnapshot {
    fn from(value: Faller) -> Self {
        Self {
            column: value.column(),
            jewels: value.jewels(),
            rows: value.rows(),
            landed: value.landed(),
            frozen: value.frozen(),
        }
    }
}

/// Copyable view of a running game for renderers.
///
/// `board` is row-major: `board[row][column]`, 0 for empty, otherwise the
/// jewel's 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
    pub faller: Option<FallerSnapshot>,
    pub game_over: bool,
    pub paused: bool,
    /// Passes in the most recent cascade
    pub cascades: u32,
    /// Cells cleared by the most recent cascade, row-major like `board`.
    /// All false once the highlight has expired.
    pub flash: [[bool; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    pub fn jewel_at(&self, column: usize, row: usize) -> Option<Jewel> {
        self.board
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(|&v| Jewel::from_index(v))
    }

    pub fn is_flashing(&self, column: usize, row: usize) -> bool {
        self.flash
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
            faller: None,
            game_over: false,
            paused: false,
            cascades: 0,
            flash: [[false; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
        }
    }
}
