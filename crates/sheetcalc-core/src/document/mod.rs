//! Document state and logic (UI-agnostic).

mod eval;
mod ops;
mod state;

pub use state::{Document, GridSize, MAX_GRID_COLS, MAX_GRID_ROWS};
