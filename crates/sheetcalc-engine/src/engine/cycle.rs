//! Circular reference tracking for formula resolution.
//!
//! Resolving a cell may resolve the cells it references, recursively. The
//! [`Visiting`] set records which cells are on the active resolution stack so
//! that a revisit is reported instead of recursing forever (e.g., A1
//! references B1, B1 references C1, C1 references A1).
//!
//! Only a revisit of the cell whose evaluation was requested (the root) is
//! [`FormulaError::Circular`]. A revisit of any other cell is reported as
//! [`FormulaError::Reference`].

use std::collections::HashSet;

use tracing::debug;

use super::CellRef;
use crate::error::{FormulaError, Result};

/// Cells on the active resolution stack of one top-level evaluation.
#[derive(Debug)]
pub struct Visiting {
    root: Option<CellRef>,
    active: HashSet<CellRef>,
}

impl Visiting {
    /// Start tracking an evaluation requested for `root`.
    pub fn new(root: CellRef) -> Visiting {
        Visiting {
            root: Some(root),
            active: HashSet::new(),
        }
    }

    /// Track an evaluation of content that does not live in any cell.
    pub fn detached() -> Visiting {
        Visiting {
            root: None,
            active: HashSet::new(),
        }
    }

    pub fn root(&self) -> Option<&CellRef> {
        self.root.as_ref()
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        self.active.contains(cell)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Depth of the active resolution stack.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Run `resolve` with `cell` marked as active.
    ///
    /// Fails without calling `resolve` if `cell` is already active. The mark is
    /// removed again before returning, whether `resolve` succeeded or not.
    pub fn scoped<T>(
        &mut self,
        cell: &CellRef,
        resolve: impl FnOnce(&mut Visiting) -> Result<T>,
    ) -> Result<T> {
        if self.contains(cell) {
            let error = if self.root() == Some(cell) {
                FormulaError::Circular
            } else {
                FormulaError::Reference
            };
            debug!(%cell, root = ?self.root().map(ToString::to_string), ?error, "revisited cell");
            return Err(error);
        }

        self.active.insert(cell.clone());
        let result = resolve(self);
        self.active.remove(cell);
        result
    }
}
