//! Range expansion.
//!
//! A range such as `A1:B2` names every cell in the rectangle between its two
//! corners. Expansion walks columns in the outer loop and rows in the inner
//! loop, so `A1:B2` yields `A1, A2, B1, B2`. Aggregate arguments are passed in
//! this order.

use super::cell_ref::{Bounds, CellRef};
use crate::error::{FormulaError, Result};

/// Largest number of cells a single range may name.
pub const MAX_RANGE_CELLS: usize = 1_000_000;

/// Expand the range between `start` and `end` (inclusive) in column-major order.
///
/// Fails with [`FormulaError::Parse`] when either corner lies outside `bounds`,
/// when the end precedes the start in either dimension, or when the range
/// holds more than [`MAX_RANGE_CELLS`] cells.
pub fn expand_range(start: &CellRef, end: &CellRef, bounds: &Bounds) -> Result<Vec<CellRef>> {
    if !bounds.contains(start) || !bounds.contains(end) {
        return Err(FormulaError::Parse);
    }
    if end.col < start.col || end.row < start.row {
        return Err(FormulaError::Parse);
    }

    let size = (end.col - start.col)
        .checked_add(1)
        .zip((end.row - start.row).checked_add(1))
        .and_then(|(cols, rows)| cols.checked_mul(rows))
        .filter(|&size| size <= MAX_RANGE_CELLS)
        .ok_or(FormulaError::Parse)?;

    let mut cells = Vec::with_capacity(size);
    for col in start.col..=end.col {
        for row in start.row..=end.row {
            cells.push(CellRef::new(col, row));
        }
    }
    Ok(cells)
}

/// Parse a cell range like "A1:B5" and return its two corners.
/// Whitespace around the colon is allowed.
pub fn parse_range(range: &str) -> Option<(CellRef, CellRef)> {
    let (start, end) = range.split_once(':')?;
    let start = CellRef::from_str(start.trim())?;
    let end = CellRef::from_str(end.trim())?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn refs(names: &[&str]) -> Vec<CellRef> {
        names.iter().map(|n| CellRef::from_str(n).unwrap()).collect()
    }

    #[test]
    fn test_expand_is_column_major() {
        let (start, end) = parse_range("A1:B2").unwrap();
        let cells = expand_range(&start, &end, &Bounds::default()).unwrap();
        assert_eq!(cells, refs(&["A1", "A2", "B1", "B2"]));
    }

    #[test]
    fn test_expand_single_cell_range() {
        let (start, end) = parse_range("C3:C3").unwrap();
        let cells = expand_range(&start, &end, &Bounds::default()).unwrap();
        assert_eq!(cells, refs(&["C3"]));
    }

    #[test]
    fn test_expand_rejects_reversed_ranges() {
        let bounds = Bounds::default();
        let (start, end) = parse_range("B2:A1").unwrap();
        assert_eq!(expand_range(&start, &end, &bounds), Err(FormulaError::Parse));
        let (start, end) = parse_range("A2:B1").unwrap();
        assert_eq!(expand_range(&start, &end, &bounds), Err(FormulaError::Parse));
    }

    #[test]
    fn test_expand_rejects_out_of_bounds_corners() {
        let bounds = Bounds::default();
        let (start, end) = parse_range("A1:K1").unwrap();
        assert_eq!(expand_range(&start, &end, &bounds), Err(FormulaError::Parse));
        let (start, end) = parse_range("A1:A11").unwrap();
        assert_eq!(expand_range(&start, &end, &bounds), Err(FormulaError::Parse));
    }

    #[test]
    fn test_wider_bounds_accept_multi_letter_columns() {
        let bounds = Bounds::new(30, 100);
        let (start, end) = parse_range("Z99:AA100").unwrap();
        let cells = expand_range(&start, &end, &bounds).unwrap();
        assert_eq!(cells, refs(&["Z99", "Z100", "AA99", "AA100"]));
    }

    #[test]
    fn test_oversized_ranges_are_rejected() {
        let bounds = Bounds::new(usize::MAX, usize::MAX);
        let start = CellRef::new(0, 0);
        let end = CellRef::from_str("ZZZZZZZZZZZZ99999999999").unwrap();
        assert_eq!(expand_range(&start, &end, &bounds), Err(FormulaError::Parse));

        let far = CellRef::new(usize::MAX - 1, usize::MAX - 1);
        assert_eq!(expand_range(&start, &far, &bounds), Err(FormulaError::Parse));

        let (start, end) = parse_range("A1:J100000").unwrap();
        assert_eq!(
            expand_range(&start, &end, &bounds).map(|cells| cells.len()),
            Ok(MAX_RANGE_CELLS)
        );
        let (start, end) = parse_range("A1:J100001").unwrap();
        assert_eq!(expand_range(&start, &end, &bounds), Err(FormulaError::Parse));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_range("A1 : B5"),
            Some((CellRef::new(0, 0), CellRef::new(1, 4)))
        );
        assert_eq!(parse_range("A1"), None);
        assert_eq!(parse_range("invalid"), None);
    }
}
