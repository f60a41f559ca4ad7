//! Error kinds produced while resolving a cell.

use thiserror::Error;

/// Display sentinel for a cycle that returns to the cell being evaluated.
pub const CIRCULAR_SENTINEL: &str = "#CIRCULAR";

/// Display sentinel for every other formula failure.
pub const ERROR_SENTINEL: &str = "#ERROR";

/// Why a cell could not be resolved.
///
/// Kinds propagate unchanged through nested references; only the display
/// layer collapses them into the two sentinels.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaError {
    /// The resolution came back to the cell whose evaluation was requested.
    #[error("circular reference")]
    Circular,

    /// A cycle among other cells, or a reference outside the configured bounds.
    #[error("invalid reference")]
    Reference,

    /// Text was used where a number is required.
    #[error("text used as a number")]
    Value,

    /// Arithmetic produced a non-finite number.
    #[error("non-finite arithmetic result")]
    Math,

    /// The formula text could not be tokenized or parsed.
    #[error("malformed formula")]
    Parse,
}

impl FormulaError {
    pub fn is_circular(self) -> bool {
        matches!(self, FormulaError::Circular)
    }

    /// The string shown in place of a value for this failure.
    pub fn sentinel(self) -> &'static str {
        if self.is_circular() {
            CIRCULAR_SENTINEL
        } else {
            ERROR_SENTINEL
        }
    }
}

pub type Result<T> = std::result::Result<T, FormulaError>;
