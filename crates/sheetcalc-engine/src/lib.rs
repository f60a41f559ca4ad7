//! sheetcalc_engine - Spreadsheet formula resolution engine.
//!
//! Turns raw cell contents into values: classifies literals, resolves cell and
//! range references transitively, detects circular references, and evaluates
//! arithmetic with the SUM, AVG, MAX and MIN aggregates.

pub mod builtins;
pub mod engine;
pub mod error;

pub use error::{CIRCULAR_SENTINEL, ERROR_SENTINEL, FormulaError};
