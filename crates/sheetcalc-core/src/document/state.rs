use serde::{Deserialize, Serialize};
use sheetcalc_engine::engine::{CellStore, EngineConfig};

/// Maximum number of undo entries to keep
pub(crate) const MAX_UNDO_STACK: usize = 100;

/// Largest number of rows a grid may show.
pub const MAX_GRID_ROWS: usize = 100;
/// Largest number of columns a grid may show.
pub const MAX_GRID_COLS: usize = 100;

/// How many rows and columns a front end shows.
///
/// Unrelated to which cells formulas may reference (see `Bounds`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    /// Build a size from user input, clamping each dimension to `1..=MAX`.
    pub fn clamped(rows: i64, cols: i64) -> GridSize {
        GridSize {
            rows: clamp_dimension(rows, MAX_GRID_ROWS),
            cols: clamp_dimension(cols, MAX_GRID_COLS),
        }
    }
}

fn clamp_dimension(requested: i64, max: usize) -> usize {
    usize::try_from(requested).unwrap_or(0).clamp(1, max)
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize { rows: 10, cols: 10 }
    }
}

/// UI-agnostic document state for the spreadsheet.
pub struct Document {
    /// Raw contents of every non-blank cell
    pub(crate) cells: CellStore,
    /// Engine settings used for every recalculation
    pub config: EngineConfig,
    /// Rows and columns shown by front ends
    pub grid: GridSize,
    /// Snapshots to restore on undo, most recent last
    pub(crate) undo_stack: Vec<CellStore>,
    /// Snapshots to restore on redo, most recent last
    pub(crate) redo_stack: Vec<CellStore>,
}

impl Document {
    /// Create an empty document with default settings.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default(), GridSize::default())
    }

    pub fn with_config(config: EngineConfig, grid: GridSize) -> Self {
        Document {
            cells: CellStore::new(),
            config,
            grid: GridSize {
                rows: grid.rows.clamp(1, MAX_GRID_ROWS),
                cols: grid.cols.clamp(1, MAX_GRID_COLS),
            },
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// The raw contents of every non-blank cell.
    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    /// An immutable point-in-time copy of the cell store.
    pub fn snapshot(&self) -> CellStore {
        self.cells.clone()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
