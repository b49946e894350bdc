//! Columns (workspace facade crate).
//!
//! Re-exports the member crates under `columns::{core,input,term,types}` so the
//! binary, integration tests and benches share one import path.

pub use columns_core as core;
pub use columns_input as input;
pub use columns_term as term;
pub use columns_types as types;
