//! Plain-text output of a document's computed values.

use sheetcalc_core::{CellRef, Document};
use std::io::{self, Write};

/// One `CELL<TAB>VALUE` line per stored cell, in row-major order.
pub fn write_list<W: Write>(out: &mut W, doc: &Document) -> io::Result<()> {
    for (cell_ref, shown) in doc.display() {
        writeln!(out, "{}\t{}", cell_ref, shown)?;
    }
    Ok(())
}

/// A markdown table covering the visible grid, blank cells left empty.
pub fn write_grid<W: Write>(out: &mut W, doc: &Document) -> io::Result<()> {
    let display = doc.display();
    let grid = doc.grid;

    write!(out, "|   |")?;
    for col in 0..grid.cols {
        write!(out, " {} |", CellRef::col_to_letters(col))?;
    }
    writeln!(out)?;

    write!(out, "|---|")?;
    for _ in 0..grid.cols {
        write!(out, "---|")?;
    }
    writeln!(out)?;

    for row in 0..grid.rows {
        write!(out, "| {} |", row + 1)?;
        for col in 0..grid.cols {
            let shown = display
                .get(&CellRef::new(col, row))
                .map(|shown| shown.to_string())
                .unwrap_or_default();
            write!(out, " {} |", shown.replace('|', "\\|"))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
