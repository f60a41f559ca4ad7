//! Cell evaluation.
//!
//! [`Evaluator::evaluate`] resolves one cell of a [`CellStore`]: literals are
//! classified directly, formulas are tokenized, have their references
//! substituted (recursing into the referenced cells), are parsed, and are
//! computed. A fresh [`Visiting`] set is threaded through every recursive
//! call of one top-level evaluation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::cell::{CellStore, Content, Value};
use super::cell_ref::{Bounds, CellRef};
use super::cycle::Visiting;
use super::lexer::tokenize;
use super::parser::{BinOp, Expr, parse};
use super::preprocess::substitute_references;
use crate::error::{FormulaError, Result};

/// Longest chain of nested cell references followed before giving up.
pub const MAX_REFERENCE_DEPTH: usize = 256;

/// Engine settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Region formulas may reference.
    pub bounds: Bounds,
    /// Reuse successful cell results within one recalculation pass.
    pub memoize: bool,
}

/// Resolves cells of one store.
///
/// With memoisation enabled, successful results are remembered for the
/// lifetime of the evaluator. Failures are never remembered, because whether a
/// revisit is `Circular` or `Reference` depends on the root being evaluated.
pub struct Evaluator<'a> {
    store: &'a CellStore,
    bounds: Bounds,
    memo: Option<HashMap<CellRef, Value>>,
}

impl<'a> Evaluator<'a> {
    pub fn new(store: &'a CellStore, config: &EngineConfig) -> Evaluator<'a> {
        Evaluator {
            store,
            bounds: config.bounds,
            memo: config.memoize.then(HashMap::new),
        }
    }

    /// Evaluate `cell` as the root of a new resolution.
    pub fn evaluate(&mut self, cell: &CellRef) -> Result<Value> {
        let mut visiting = Visiting::new(cell.clone());
        let result = self.resolve(cell, &mut visiting);
        debug_assert!(visiting.is_empty());
        result
    }

    /// Evaluate raw content that is not stored in any cell.
    pub fn evaluate_formula(&mut self, raw: &str) -> Result<Value> {
        let mut visiting = Visiting::detached();
        self.evaluate_content(raw, &mut visiting)
    }

    fn resolve(&mut self, cell: &CellRef, visiting: &mut Visiting) -> Result<Value> {
        if let Some(memo) = &self.memo
            && let Some(value) = memo.get(cell)
        {
            return Ok(value.clone());
        }
        if visiting.len() >= MAX_REFERENCE_DEPTH {
            return Err(FormulaError::Reference);
        }

        let store = self.store;
        let value = visiting.scoped(cell, |visiting| {
            let raw = store.get(cell).map_or("", String::as_str);
            trace!(%cell, raw, depth = visiting.len(), "resolving cell");
            self.evaluate_content(raw, visiting)
        })?;

        if let Some(memo) = &mut self.memo {
            memo.insert(cell.clone(), value.clone());
        }
        Ok(value)
    }

    fn evaluate_content(&mut self, raw: &str, visiting: &mut Visiting) -> Result<Value> {
        match Content::classify(raw) {
            Content::Literal(value) => Ok(value),
            Content::Formula(body) => self.evaluate_body(body, visiting).map(Value::Number),
        }
    }

    fn evaluate_body(&mut self, body: &str, visiting: &mut Visiting) -> Result<f64> {
        let tokens = tokenize(body)?;
        let bounds = self.bounds;
        let tokens = substitute_references(tokens, &bounds, |cell| {
            self.resolve(cell, visiting)?.as_number()
        })?;
        let expr = parse(&tokens)?;
        eval_expr(&expr)
    }
}

/// Evaluate one cell of `store` with default settings.
pub fn evaluate(cell: &CellRef, store: &CellStore) -> Result<Value> {
    Evaluator::new(store, &EngineConfig::default()).evaluate(cell)
}

/// Compute an expression tree. Every intermediate result must be finite.
pub fn eval_expr(expr: &Expr) -> Result<f64> {
    let value = match expr {
        Expr::Number(n) => *n,
        Expr::Neg(inner) => -eval_expr(inner)?,
        Expr::Binary { op, left, right } => {
            let left = eval_expr(left)?;
            let right = eval_expr(right)?;
            match op {
                BinOp::Add => left + right,
                BinOp::Sub => left - right,
                BinOp::Mul => left * right,
                BinOp::Div => {
                    if right == 0.0 {
                        return Err(FormulaError::Math);
                    }
                    left / right
                }
            }
        }
        Expr::Call { func, args } => {
            let values = args.iter().map(eval_expr).collect::<Result<Vec<_>>>()?;
            func.apply(&values)
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::Math)
    }
}
