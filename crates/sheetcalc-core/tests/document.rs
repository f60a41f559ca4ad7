//! End-to-end document behaviour: edits, history and recalculation together.

use pretty_assertions::assert_eq;
use sheetcalc_core::{CellRef, Document, EngineConfig, Shown};
use sheetcalc_engine::FormulaError;
use sheetcalc_engine::engine::Bounds;

fn cell(name: &str) -> CellRef {
    CellRef::from_str(name).unwrap()
}

fn rendered(doc: &Document) -> Vec<(String, String)> {
    doc.display()
        .iter()
        .map(|(cell, shown)| (cell.to_string(), shown.to_string()))
        .collect()
}

fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn test_sum_over_dependent_cells() {
    let mut doc = Document::new();
    doc.commit(cell("A1"), "5");
    doc.commit(cell("A2"), "=A1*2");
    doc.commit(cell("A3"), "=SUM(A1:A2)");

    assert_eq!(rendered(&doc), pairs(&[("A1", "5"), ("A2", "10"), ("A3", "15")]));
}

#[test]
fn test_mutual_references_are_circular() {
    let mut doc = Document::new();
    doc.commit(cell("A1"), "=B1");
    doc.commit(cell("B1"), "=A1");

    assert_eq!(
        rendered(&doc),
        pairs(&[("A1", "#CIRCULAR"), ("B1", "#CIRCULAR")])
    );
}

#[test]
fn test_cycle_behind_another_cell_is_a_generic_error() {
    let mut doc = Document::new();
    doc.commit(cell("A1"), "=B1");
    doc.commit(cell("B1"), "=A1");
    doc.commit(cell("C1"), "=A1 + 1");

    let display = doc.display();
    assert_eq!(display[&cell("C1")], Shown::Error(FormulaError::Reference));
    assert_eq!(display[&cell("C1")].to_string(), "#ERROR");
}

#[test]
fn test_edit_then_undo_restores_display() {
    let mut doc = Document::new();
    doc.commit(cell("A1"), "5");
    doc.commit(cell("A2"), "=A1 + 1");
    let before = doc.display();

    doc.commit(cell("A1"), "hello");
    assert_eq!(doc.display()[&cell("A2")], Shown::Error(FormulaError::Value));

    doc.undo().unwrap();
    assert_eq!(doc.display(), before);

    doc.redo().unwrap();
    assert_eq!(doc.display()[&cell("A1")].to_string(), "hello");
}

#[test]
fn test_deleting_a_cell_removes_its_entry() {
    let mut doc = Document::new();
    doc.commit(cell("A1"), "5");
    doc.commit(cell("A2"), "=A1");
    doc.commit(cell("A1"), "");

    assert!(!doc.cells().contains_key(&cell("A1")));
    assert_eq!(rendered(&doc), pairs(&[("A2", "0")]));
}

#[test]
fn test_snapshot_is_independent_of_later_edits() {
    let mut doc = Document::new();
    doc.commit(cell("A1"), "1");
    let snapshot = doc.snapshot();
    doc.commit(cell("A1"), "2");
    assert_eq!(snapshot[&cell("A1")], "1");
}

#[test]
fn test_reference_bounds_are_independent_of_grid_size() {
    let mut doc = Document::new();
    doc.resize(100, 100);
    doc.commit(cell("K1"), "3");
    doc.commit(cell("A1"), "=K1");
    assert_eq!(doc.display()[&cell("A1")], Shown::Error(FormulaError::Reference));
    assert_eq!(doc.cell_display(&cell("K1")), "3");

    doc.config = EngineConfig {
        bounds: Bounds::new(11, 10),
        ..EngineConfig::default()
    };
    assert_eq!(doc.cell_display(&cell("A1")), "3");
}

#[test]
fn test_repeated_recalculation_is_stable() {
    let mut doc = Document::new();
    doc.commit(cell("A1"), "=AVG(B1:B3)");
    doc.commit(cell("B1"), "1");
    doc.commit(cell("B2"), "2");
    doc.commit(cell("C1"), "=C1");
    assert_eq!(doc.display(), doc.display());
}
