//! Board module - the 6x13 jewel grid
//!
//! Storage is column-major: gravity and the full-column test work on one
//! column at a time, so each column is a contiguous array.
//! Coordinates: (column, row) where column ranges 0..5 (left to right) and
//! row ranges 0..12 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, Jewel, BOARD_COLUMNS, BOARD_ROWS};

const COLUMNS: usize = BOARD_COLUMNS as usize;
const ROWS: usize = BOARD_ROWS as usize;

/// Non-empty cells of one column, top to bottom
pub type ColumnStack = ArrayVec<Jewel, ROWS>;

/// The game board - 6 columns x 13 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: [[Cell; ROWS]; COLUMNS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            columns: [[None; ROWS]; COLUMNS],
        }
    }

    #[inline(always)]
    fn index(column: i8, row: i8) -> Option<(usize, usize)> {
        if column < 0 || column >= BOARD_COLUMNS as i8 || row < 0 || row >= BOARD_ROWS as i8 {
            return None;
        }
        Some((column as usize, row as usize))
    }

    /// Get cell at (column, row)
    /// Returns None if out of bounds
    pub fn get(&self, column: i8, row: i8) -> Option<Cell> {
        Self::index(column, row).map(|(c, r)| self.columns[c][r])
    }

    /// Set cell at (column, row)
    /// Returns false if out of bounds
    pub fn set(&mut self, column: i8, row: i8, cell: Cell) -> bool {
        match Self::index(column, row) {
            Some((c, r)) => {
                self.columns[c][r] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, column: i8, row: i8) -> bool {
        matches!(self.get(column, row), Some(None))
    }

    /// Check if position is within bounds and holds a jewel
    pub fn is_occupied(&self, column: i8, row: i8) -> bool {
        matches!(self.get(column, row), Some(Some(_)))
    }

    pub fn in_bounds(&self, column: i8, row: i8) -> bool {
        Self::index(column, row).is_some()
    }

    /// True when the column has no empty cell left.
    /// Out-of-range columns are never full.
    pub fn is_column_full(&self, column: i8) -> bool {
        match Self::index(column, 0) {
            Some((c, _)) => self.columns[c].iter().all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// The column's jewels with gaps removed, top to bottom
    pub fn column_stack(&self, column: i8) -> ColumnStack {
        let mut stack = ColumnStack::new();
        if let Some((c, _)) = Self::index(column, 0) {
            stack.extend(self.columns[c].iter().filter_map(|cell| *cell));
        }
        stack
    }

    /// Replace a column with `stack` resting on the floor, empty cells above
    pub fn settle_column(&mut self, column: i8, stack: &[Jewel]) {
        let Some((c, _)) = Self::index(column, 0) else {
            return;
        };
        let keep = stack.len().min(ROWS);
        let pad = ROWS - keep;
        let col = &mut self.columns[c];
        col[..pad].fill(None);
        for (slot, jewel) in col[pad..].iter_mut().zip(&stack[stack.len() - keep..]) {
            *slot = Some(*jewel);
        }
    }

    /// Count of non-empty cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.columns
            .iter()
            .map(|col| col.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for col in &mut self.columns {
            col.fill(None);
        }
    }

    /// Write the board as row-major color indices (0 = empty)
    pub fn write_u8_grid(&self, out: &mut [[u8; COLUMNS]; ROWS]) {
        for (c, col) in self.columns.iter().enumerate() {
            for (r, cell) in col.iter().enumerate() {
                out[r][c] = cell.map(|j| j.index()).unwrap_or(0);
            }
        }
    }

    /// Build a board from row strings, top row first.
    ///
    /// Each row has one character per column: a jewel letter or `.` for empty.
    /// Missing rows or characters are left empty; unknown characters are empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        for (r, line) in rows.iter().take(ROWS).enumerate() {
            for (c, ch) in line.chars().take(COLUMNS).enumerate() {
                board.columns[c][r] = Jewel::from_letter(ch);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some((0, 0)));
        assert_eq!(Board::index(5, 12), Some((5, 12)));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(6, 0), None);
        assert_eq!(Board::index(0, 13), None);
        assert_eq!(Board::index(0, -1), None);
    }

    #[test]
    fn test_column_stack_skips_gaps() {
        let mut board = Board::new();
        board.set(2, 3, Some(Jewel::Red));
        board.set(2, 7, Some(Jewel::Blue));
        board.set(2, 12, Some(Jewel::Green));

        let stack = board.column_stack(2);
        assert_eq!(stack.as_slice(), &[Jewel::Red, Jewel::Blue, Jewel::Green]);
        assert!(board.column_stack(9).is_empty());
    }

    #[test]
    fn test_settle_column_rests_on_floor() {
        let mut board = Board::new();
        board.set(1, 0, Some(Jewel::Cyan));
        board.settle_column(1, &[Jewel::Red, Jewel::Blue]);

        assert_eq!(board.get(1, 0), Some(None));
        assert_eq!(board.get(1, 10), Some(None));
        assert_eq!(board.get(1, 11), Some(Some(Jewel::Red)));
        assert_eq!(board.get(1, 12), Some(Some(Jewel::Blue)));
    }

    #[test]
    fn test_is_column_full() {
        let mut board = Board::new();
        assert!(!board.is_column_full(0));
        for row in 0..BOARD_ROWS as i8 {
            board.set(0, row, Some(Jewel::Yellow));
        }
        assert!(board.is_column_full(0));
        assert!(!board.is_column_full(1));
        assert!(!board.is_column_full(-1));
    }

    #[test]
    fn test_from_rows_and_u8_grid() {
        let board = Board::from_rows(&["R.....", ".b...C"]);
        assert_eq!(board.get(0, 0), Some(Some(Jewel::Red)));
        assert_eq!(board.get(1, 1), Some(Some(Jewel::Blue)));
        assert_eq!(board.get(5, 1), Some(Some(Jewel::Cyan)));
        assert_eq!(board.occupied_count(), 3);

        let mut grid = [[0u8; COLUMNS]; ROWS];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[1][1], 2);
        assert_eq!(grid[1][5], 7);
        assert_eq!(grid[12][0], 0);
    }
}
