use sheetcalc_engine::engine::CellRef;
use tracing::debug;

use super::{Document, GridSize};
use crate::error::{CoreError, Result};

impl Document {
    /// Push the current cells onto the undo stack before modifying them
    fn push_undo(&mut self) {
        self.undo_stack.push(self.cells.clone());
        self.redo_stack.clear();
        if self.undo_stack.len() > super::state::MAX_UNDO_STACK {
            self.undo_stack.remove(0);
        }
    }

    /// Commit a draft for a cell.
    ///
    /// Does nothing when the draft equals the current content (blank cells
    /// count as ""). Otherwise records an undo snapshot and writes the draft;
    /// an empty draft removes the cell. Returns whether anything changed.
    pub fn commit(&mut self, cell_ref: CellRef, draft: &str) -> bool {
        let current = self.cells.get(&cell_ref).map_or("", String::as_str);
        if current == draft {
            return false;
        }

        self.push_undo();
        debug!(cell = %cell_ref, draft, "commit");
        if draft.is_empty() {
            self.cells.remove(&cell_ref);
        } else {
            self.cells.insert(cell_ref, draft.to_string());
        }
        true
    }

    /// Commit a draft for a cell named in A1 notation.
    pub fn commit_named(&mut self, name: &str, draft: &str) -> Result<bool> {
        let cell_ref =
            CellRef::from_str(name).ok_or_else(|| CoreError::InvalidCellRef(name.to_string()))?;
        Ok(self.commit(cell_ref, draft))
    }

    /// Clear the specified cell
    pub fn clear_cell(&mut self, cell_ref: CellRef) -> bool {
        self.commit(cell_ref, "")
    }

    /// Remove every cell. Does nothing (and records no history) when already empty.
    pub fn clear_all(&mut self) -> bool {
        if self.cells.is_empty() {
            return false;
        }
        self.push_undo();
        debug!(cells = self.cells.len(), "clear all");
        self.cells.clear();
        true
    }

    /// Restore the cells as they were before the last change.
    pub fn undo(&mut self) -> Result<()> {
        let previous = self.undo_stack.pop().ok_or(CoreError::NothingToUndo)?;
        let current = std::mem::replace(&mut self.cells, previous);
        self.redo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "undo");
        Ok(())
    }

    /// Reapply the last undone change.
    pub fn redo(&mut self) -> Result<()> {
        let next = self.redo_stack.pop().ok_or(CoreError::NothingToRedo)?;
        let current = std::mem::replace(&mut self.cells, next);
        self.undo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "redo");
        Ok(())
    }

    /// Change how many rows and columns are shown. Not recorded in history.
    pub fn resize(&mut self, rows: i64, cols: i64) -> GridSize {
        self.grid = GridSize::clamped(rows, cols);
        self.grid
    }
}
