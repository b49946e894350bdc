//! Faller - the three-jewel falling piece.

use crate::types::{Jewel, FALLER_LEN, FALLER_SPAWN_ROWS};

/// Active falling piece
///
/// `jewels` and `rows` are both ordered top, middle, bottom. Rows are always
/// consecutive and may be negative while the piece is still above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Faller {
    column: i8,
    jewels: [Jewel; FALLER_LEN],
    rows: [i8; FALLER_LEN],
    landed: bool,
    frozen: bool,
}

impl Faller {
    /// Create a faller in `column` (0-based) at the spawn rows
    pub fn new(column: i8, top: Jewel, middle: Jewel, bottom: Jewel) -> Self {
        Self {
            column,
            jewels: [top, middle, bottom],
            rows: FALLER_SPAWN_ROWS,
            landed: false,
            frozen: false,
        }
    }

    pub fn column(&self) -> i8 {
        self.column
    }

    pub fn jewels(&self) -> [Jewel; FALLER_LEN] {
        self.jewels
    }

    pub fn rows(&self) -> [i8; FALLER_LEN] {
        self.rows
    }

    pub fn top_row(&self) -> i8 {
        self.rows[0]
    }

    pub fn bottom_row(&self) -> i8 {
        self.rows[FALLER_LEN - 1]
    }

    pub fn landed(&self) -> bool {
        self.landed
    }

    pub fn frozen(&self) -> bool {
        self.frozen
    }

    /// (row, jewel) pairs, top to bottom
    pub fn cells(&self) -> impl Iterator<Item = (i8, Jewel)> + '_ {
        self.rows.iter().copied().zip(self.jewels.iter().copied())
    }

    /// True if any part of the piece is still above the grid
    pub fn is_partly_above_grid(&self) -> bool {
        self.rows.iter().any(|&row| row < 0)
    }

    /// Move down one row
    pub fn increment_row(&mut self) {
        for row in &mut self.rows {
            *row += 1;
        }
    }

    /// Cycle colors: bottom becomes top, the others shift down
    pub fn rotate(&mut self) {
        self.jewels.rotate_right(1);
    }

    pub fn land(&mut self) {
        self.landed = true;
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Clear `landed` after the support below was removed
    pub(crate) fn lift(&mut self) {
        self.landed = false;
    }

    pub(crate) fn set_column(&mut self, column: i8) {
        self.column = column;
    }
}
