use sheetcalc_engine::FormulaError;
use sheetcalc_engine::engine::{CellRef, DisplayMap, Evaluator, Shown, Value, recalculate};

use super::Document;

impl Document {
    /// Raw content of a cell ("" when blank).
    pub fn raw(&self, cell_ref: &CellRef) -> &str {
        self.cells.get(cell_ref).map_or("", String::as_str)
    }

    /// Recalculate every stored cell.
    pub fn display(&self) -> DisplayMap {
        recalculate(&self.cells, &self.config)
    }

    /// Evaluate a single stored cell as its own root.
    /// Returns None for blank cells.
    pub fn cell_value(&self, cell_ref: &CellRef) -> Option<Shown> {
        if !self.cells.contains_key(cell_ref) {
            return None;
        }
        let mut evaluator = Evaluator::new(&self.cells, &self.config);
        Some(Shown::from(evaluator.evaluate(cell_ref)))
    }

    /// Get the display string for a cell ("" when blank).
    pub fn cell_display(&self, cell_ref: &CellRef) -> String {
        self.cell_value(cell_ref)
            .map(|shown| shown.to_string())
            .unwrap_or_default()
    }

    /// Evaluate content against the current cells without storing it.
    pub fn evaluate_formula(&self, raw: &str) -> Result<Value, FormulaError> {
        Evaluator::new(&self.cells, &self.config).evaluate_formula(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> CellRef {
        CellRef::from_str(name).unwrap()
    }

    #[test]
    fn test_cell_display_matches_display_map() {
        let mut doc = Document::new();
        doc.commit(cell("A1"), "2");
        doc.commit(cell("A2"), "=A1 / 8");
        doc.commit(cell("A3"), "=A3");

        let display = doc.display();
        for (cell_ref, shown) in &display {
            assert_eq!(doc.cell_display(cell_ref), shown.to_string());
        }
        assert_eq!(doc.cell_display(&cell("A2")), "0.25");
        assert_eq!(doc.cell_display(&cell("A3")), "#CIRCULAR");
        assert_eq!(doc.cell_display(&cell("J10")), "");
    }

    #[test]
    fn test_evaluate_formula_does_not_store() {
        let mut doc = Document::new();
        doc.commit(cell("A1"), "6");
        assert_eq!(doc.evaluate_formula("=A1 * 7"), Ok(Value::Number(42.0)));
        assert_eq!(doc.cells().len(), 1);
        assert_eq!(doc.raw(&cell("B1")), "");
    }
}
