//! Full recalculation of a cell store into a display map.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::cell::{CellStore, Value};
use super::cell_ref::CellRef;
use super::eval::{EngineConfig, Evaluator};
use crate::error::FormulaError;

/// What a stored cell shows after recalculation.
///
/// Errors keep their kind; only [`fmt::Display`] collapses them into the two
/// sentinels.
#[derive(Clone, Debug, PartialEq)]
pub enum Shown {
    Value(Value),
    Error(FormulaError),
}

impl Shown {
    pub fn error(&self) -> Option<FormulaError> {
        match self {
            Shown::Value(_) => None,
            Shown::Error(kind) => Some(*kind),
        }
    }
}

impl From<Result<Value, FormulaError>> for Shown {
    fn from(result: Result<Value, FormulaError>) -> Self {
        match result {
            Ok(value) => Shown::Value(value),
            Err(kind) => Shown::Error(kind),
        }
    }
}

impl fmt::Display for Shown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shown::Value(value) => write!(f, "{value}"),
            Shown::Error(kind) => f.write_str(kind.sentinel()),
        }
    }
}

/// Display values for every stored cell, in row-major order.
pub type DisplayMap = BTreeMap<CellRef, Shown>;

/// Re-derive every stored cell from scratch.
///
/// Each cell is evaluated as its own root with a fresh visiting set, so a
/// failure in one cell never affects another.
pub fn recalculate(store: &CellStore, config: &EngineConfig) -> DisplayMap {
    let mut evaluator = Evaluator::new(store, config);
    let shown: DisplayMap = store
        .keys()
        .map(|cell| (cell.clone(), Shown::from(evaluator.evaluate(cell))))
        .collect();

    let errors = shown.values().filter(|s| s.error().is_some()).count();
    debug!(cells = shown.len(), errors, memoize = config.memoize, "recalculated");
    shown
}
