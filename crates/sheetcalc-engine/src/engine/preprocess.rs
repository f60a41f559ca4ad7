//! Reference substitution.
//!
//! Before a formula can be parsed as plain arithmetic, its references must be
//! replaced by numbers:
//!
//! - **Ranges**: `SUM(A1:A3)` → `SUM(5, 10, 15)`, one number per expanded cell
//! - **Single cells**: `A1 * 2` → `5 * 2`
//!
//! All ranges are substituted before any single cell, left to right within
//! each pass. Resolving a reference is delegated to the caller, which is how
//! the evaluator recurses into other cells.

use super::cell_ref::{Bounds, CellRef};
use super::lexer::Token;
use super::range::expand_range;
use crate::error::{FormulaError, Result};

/// Replace every range and cell token with resolved numbers.
///
/// `resolve` is called once per referenced cell occurrence. Ranges whose
/// corners are out of `bounds` or reversed fail with [`FormulaError::Parse`];
/// a single cell outside `bounds` fails with [`FormulaError::Reference`].
pub fn substitute_references(
    tokens: Vec<Token>,
    bounds: &Bounds,
    mut resolve: impl FnMut(&CellRef) -> Result<f64>,
) -> Result<Vec<Token>> {
    let mut with_ranges = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Range(start, end) => {
                let cells = expand_range(&start, &end, bounds)?;
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 {
                        with_ranges.push(Token::Comma);
                    }
                    with_ranges.push(Token::Number(resolve(cell)?));
                }
            }
            other => with_ranges.push(other),
        }
    }

    with_ranges
        .into_iter()
        .map(|token| match token {
            Token::Cell(cell) => {
                if !bounds.contains(&cell) {
                    return Err(FormulaError::Reference);
                }
                resolve(&cell).map(Token::Number)
            }
            other => Ok(other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lexer::tokenize;
    use pretty_assertions::assert_eq;

    /// Resolve a cell to its 1-based row number times ten plus its column index.
    fn fake(cell: &CellRef) -> Result<f64> {
        Ok(((cell.row + 1) * 10 + cell.col) as f64)
    }

    #[test]
    fn test_substitute_single_cells() {
        let tokens = tokenize("A1 + B2").unwrap();
        let out = substitute_references(tokens, &Bounds::default(), fake).unwrap();
        assert_eq!(out, vec![Token::Number(10.0), Token::Plus, Token::Number(21.0)]);
    }

    #[test]
    fn test_substitute_ranges_comma_joined() {
        let tokens = tokenize("SUM(A1:B2)").unwrap();
        let out = substitute_references(tokens, &Bounds::default(), fake).unwrap();
        assert_eq!(
            out,
            vec![
                Token::Ident("SUM".to_string()),
                Token::LParen,
                Token::Number(10.0),
                Token::Comma,
                Token::Number(20.0),
                Token::Comma,
                Token::Number(11.0),
                Token::Comma,
                Token::Number(21.0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_ranges_resolve_before_single_cells() {
        let tokens = tokenize("C1 + SUM(A1:A2)").unwrap();
        let mut order = Vec::new();
        substitute_references(tokens, &Bounds::default(), |cell| {
            order.push(cell.to_string());
            Ok(0.0)
        })
        .unwrap();
        assert_eq!(order, vec!["A1", "A2", "C1"]);
    }

    #[test]
    fn test_out_of_bounds_references() {
        let bounds = Bounds::default();
        let tokens = tokenize("K1 + 1").unwrap();
        assert_eq!(
            substitute_references(tokens, &bounds, fake),
            Err(FormulaError::Reference)
        );
        let tokens = tokenize("SUM(A1:A11)").unwrap();
        assert_eq!(
            substitute_references(tokens, &bounds, fake),
            Err(FormulaError::Parse)
        );
    }

    #[test]
    fn test_resolution_failure_propagates() {
        let tokens = tokenize("A1 + A2").unwrap();
        let result = substitute_references(tokens, &Bounds::default(), |_| {
            Err(FormulaError::Value)
        });
        assert_eq!(result, Err(FormulaError::Value));
    }
}
