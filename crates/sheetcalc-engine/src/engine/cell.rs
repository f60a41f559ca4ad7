//! Cell content data structures.
//!
//! - [`Content`] - What a cell's raw string means (formula or literal)
//! - [`Value`] - A resolved cell value (number or text)
//! - [`CellStore`] - Sparse storage of raw cell contents

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::cell_ref::CellRef;
use super::format::format_number;
use crate::error::{FormulaError, Result};

/// Leading character that marks raw content as a formula.
pub const FORMULA_MARKER: char = '=';

/// Sparse map from cell to raw content. A missing key is a blank cell;
/// blank cells are never stored as empty strings.
pub type CellStore = BTreeMap<CellRef, String>;

/// A resolved cell value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    /// Literal content that is not a number. Only ever a final result.
    Text(String),
}

impl Value {
    /// Coerce to a number for use as an arithmetic operand.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Text(_) => Err(FormulaError::Value),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Classified raw content.
#[derive(Clone, Debug, PartialEq)]
pub enum Content<'a> {
    /// Formula body, with the marker stripped.
    Formula(&'a str),
    Literal(Value),
}

impl<'a> Content<'a> {
    /// Classify raw cell content.
    /// - Starts with `=` -> Formula (without the `=`)
    /// - Empty or whitespace only -> Number(0)
    /// - Valid finite number (surrounding whitespace ignored) -> Number
    /// - Otherwise -> Text, verbatim
    pub fn classify(raw: &'a str) -> Content<'a> {
        if let Some(body) = raw.strip_prefix(FORMULA_MARKER) {
            return Content::Formula(body);
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Content::Literal(Value::Number(0.0));
        }

        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Content::Literal(Value::Number(n)),
            _ => Content::Literal(Value::Text(raw.to_string())),
        }
    }
}
