//! Shared types and constants for the Columns workspace.
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the engine, the input mapping and the terminal
//! renderer.
//!
//! # Board Dimensions
//!
//! - **Columns**: 6 (indexed 0-5, left to right)
//! - **Rows**: 13 (indexed 0-12, top to bottom)
//! - **Spawn rows**: a faller starts at rows -3, -2, -1 (fully above the grid)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Frame interval (~30 FPS) |
//! | `FALL_INTERVAL_MS` | 700 | Time between automatic one-row drops |
//! | `MATCH_FLASH_MS` | 500 | How long cleared cells stay highlighted |
//!
//! # Examples
//!
//! ```
//! use columns_types::{Jewel, GameAction, BOARD_COLUMNS, BOARD_ROWS};
//!
//! assert_eq!(Jewel::from_letter('r'), Some(Jewel::Red));
//! assert_eq!(Jewel::Cyan.letter(), 'C');
//! assert_eq!(GameAction::from_str("shiftLeft"), Some(GameAction::ShiftLeft));
//!
//! assert_eq!(BOARD_COLUMNS, 6);
//! assert_eq!(BOARD_ROWS, 13);
//! ```

/// Board width in columns
pub const BOARD_COLUMNS: u8 = 6;

/// Board height in rows
pub const BOARD_ROWS: u8 = 13;

/// Number of jewels in a faller
pub const FALLER_LEN: usize = 3;

/// Row positions of a freshly spawned faller (top, middle, bottom)
pub const FALLER_SPAWN_ROWS: [i8; FALLER_LEN] = [-3, -2, -1];

/// Frame interval in milliseconds (~30 FPS)
pub const TICK_MS: u32 = 33;

/// Automatic fall interval in milliseconds
pub const FALL_INTERVAL_MS: u32 = 700;

/// How long the cells cleared by a cascade stay highlighted
pub const MATCH_FLASH_MS: u32 = 500;

/// Upper bound on random re-rolls when a spawn lands on a full column
pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

/// The seven jewel colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Jewel {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Cyan,
}

impl Jewel {
    /// All colors, in index order
    pub const ALL: [Jewel; 7] = [
        Jewel::Red,
        Jewel::Blue,
        Jewel::Green,
        Jewel::Yellow,
        Jewel::Purple,
        Jewel::Orange,
        Jewel::Cyan,
    ];

    /// Number of distinct colors
    pub const COUNT: u32 = 7;

    /// Color from its 1-based index (1..=7)
    ///
    /// # Examples
    ///
    /// ```
    /// use columns_types::Jewel;
    ///
    /// assert_eq!(Jewel::from_index(1), Some(Jewel::Red));
    /// assert_eq!(Jewel::from_index(7), Some(Jewel::Cyan));
    /// assert_eq!(Jewel::from_index(0), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1..=7 => Some(Self::ALL[(index - 1) as usize]),
            _ => None,
        }
    }

    /// 1-based index (0 is reserved for an empty cell in snapshots)
    pub fn index(&self) -> u8 {
        match self {
            Jewel::Red => 1,
            Jewel::Blue => 2,
            Jewel::Green => 3,
            Jewel::Yellow => 4,
            Jewel::Purple => 5,
            Jewel::Orange => 6,
            Jewel::Cyan => 7,
        }
    }

    /// Parse from a single letter (case-insensitive)
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(Jewel::Red),
            'B' => Some(Jewel::Blue),
            'G' => Some(Jewel::Green),
            'Y' => Some(Jewel::Yellow),
            'P' => Some(Jewel::Purple),
            'O' => Some(Jewel::Orange),
            'C' => Some(Jewel::Cyan),
            _ => None,
        }
    }

    /// Uppercase letter for this color
    pub fn letter(&self) -> char {
        match self {
            Jewel::Red => 'R',
            Jewel::Blue => 'B',
            Jewel::Green => 'G',
            Jewel::Yellow => 'Y',
            Jewel::Purple => 'P',
            Jewel::Orange => 'O',
            Jewel::Cyan => 'C',
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Jewel)`: Cell holding a jewel of that color
pub type Cell = Option<Jewel>;

/// Horizontal shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for this direction
    pub fn delta(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Player actions applied to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the faller one column left
    ShiftLeft,
    /// Move the faller one column right
    ShiftRight,
    /// Cycle the faller's colors (bottom becomes top)
    Rotate,
    /// Advance the faller one row immediately
    SoftDrop,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use columns_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shiftleft" => Some(GameAction::ShiftLeft),
            "shiftright" => Some(GameAction::ShiftRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }
}
