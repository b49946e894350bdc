//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management for Columns.
//! It has no dependencies on UI, terminal or I/O, so it is:
//!
//! - **Deterministic**: the same seed produces the same sequence of fallers
//! - **Testable**: every rule is exercised without a screen
//! - **Portable**: the terminal front-end is just one possible driver
//!
//! # Module Structure
//!
//! - [`board`]: 6x13 jewel grid with bounds-checked access
//! - [`faller`]: the three-jewel falling piece
//! - [`game_state`]: board + active faller; spawn, drop, freeze, shift, rotate, gravity
//! - [`matches`]: runs of three or more along rows, columns and diagonals
//! - [`rng`]: injectable, seedable spawn randomness
//! - [`session`]: the fixed-interval control loop with the cascade loop
//! - [`snapshot`]: copyable view for renderers
//!
//! # Game Rules
//!
//! - A faller spawns above the grid in a random column with three random colors
//! - It drops one row per fall interval; the player may shift it, rotate its
//!   colors, or drop it a row early
//! - Once it rests on the floor or on a jewel it has landed; the next fall
//!   tick freezes it into the board
//! - A freeze with any jewel still above the grid ends the game
//! - Runs of three or more identical jewels clear; jewels above settle and may
//!   form new runs (cascade)
//!
//! # Example
//!
//! ```
//! use columns_core::{Session, SessionConfig};
//! use columns_types::{GameAction, FALL_INTERVAL_MS};
//!
//! let mut session = Session::new(SessionConfig { seed: 42, ..Default::default() });
//!
//! // First tick spawns a faller above the grid.
//! session.tick(16);
//! assert!(session.game().faller().is_some());
//!
//! session.apply_action(GameAction::Rotate);
//! session.apply_action(GameAction::SoftDrop);
//! session.tick(FALL_INTERVAL_MS);
//!
//! assert!(!session.is_game_over());
//! ```

pub mod board;
pub mod error;
pub mod faller;
pub mod game_state;
pub mod matches;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use columns_types as types;

pub use board::Board;
pub use error::GameError;
pub use faller::Faller;
pub use game_state::GameState;
pub use matches::{find_matches, has_matches, Coord};
pub use rng::{JewelRng, SimpleRng};
pub use session::{CascadeReport, Session, SessionConfig};
pub use snapshot::{FallerSnapshot, GameSnapshot};
