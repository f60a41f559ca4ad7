//! Spreadsheet formula engine API.
//!
//! This module provides the formula resolution engine for the spreadsheet:
//!
//! - [`CellRef`], [`Bounds`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`Content`], [`Value`], [`CellStore`] - Raw content classification and storage
//! - [`expand_range`] - Range expansion in column-major order
//! - [`tokenize`], [`substitute_references`], [`parse`] - Formula pipeline stages
//! - [`Visiting`] - Circular reference tracking
//! - [`Evaluator`], [`evaluate`] - Recursive cell evaluation
//! - [`recalculate`] - Full recalculation into a [`DisplayMap`]
//! - [`format_number`] - Format values for display

mod cell;
mod cell_ref;
mod cycle;
mod eval;
mod format;
mod lexer;
mod parser;
mod preprocess;
mod range;
mod recalc;

pub use cell::{CellStore, Content, FORMULA_MARKER, Value};
pub use cell_ref::{Bounds, CellRef};
pub use cycle::Visiting;
pub use eval::{EngineConfig, Evaluator, MAX_REFERENCE_DEPTH, eval_expr, evaluate};
pub use format::format_number;
pub use lexer::{Token, tokenize};
pub use parser::{BinOp, Expr, parse};
pub use preprocess::substitute_references;
pub use range::{MAX_RANGE_CELLS, expand_range, parse_range};
pub use recalc::{DisplayMap, Shown, recalculate};
