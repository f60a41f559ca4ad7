//! Error types for sheetcalc core.

use thiserror::Error;

/// Errors that can occur while editing a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

pub type Result<T> = std::result::Result<T, CoreError>;
