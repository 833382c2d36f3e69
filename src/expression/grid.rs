use std::convert::TryFrom;

use super::{Delimiters, Expression};
use crate::error::{ExpressionError, ExpressionResult};

/// A rectangular array of cells, with optional rules between rows and columns.
///
/// The shape is checked when the grid is built: there is at least one row, no row is empty
/// and every row has as many cells as the first one.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(try_from = "GridSpec", into = "GridSpec")]
pub struct Grid {
    cells:                Vec<Vec<Expression>>,
    /// a horizontal rule is drawn below each of these rows
    pub horizontal_lines: Vec<usize>,
    /// a vertical rule is drawn right of each of these columns
    pub vertical_lines:   Vec<usize>,
    /// center the cells of a column instead of aligning them left
    pub center_aligned:   bool,
    pub delimiters:       Delimiters,
}

impl Grid {
    /// Checks the shape of `cells` and builds a grid without rules.
    pub fn new(cells: Vec<Vec<Expression>>) -> ExpressionResult<Self> {
        let expected = cells.first().ok_or(ExpressionError::EmptyGrid)?.len();

        for (row, cells) in cells.iter().enumerate() {
            if cells.is_empty() {
                return Err(ExpressionError::EmptyRow { row });
            }
            if cells.len() != expected {
                return Err(ExpressionError::RaggedGrid { row, expected, found: cells.len() });
            }
        }

        Ok(Self {
            cells,
            horizontal_lines: Vec::new(),
            vertical_lines:   Vec::new(),
            center_aligned:   false,
            delimiters:       Delimiters::none(),
        })
    }

    pub fn horizontal_lines(self, horizontal_lines: impl IntoIterator<Item = usize>) -> Self {
        Self { horizontal_lines: horizontal_lines.into_iter().collect(), ..self }
    }

    pub fn vertical_lines(self, vertical_lines: impl IntoIterator<Item = usize>) -> Self {
        Self { vertical_lines: vertical_lines.into_iter().collect(), ..self }
    }

    pub fn center_aligned(self, center_aligned: bool) -> Self {
        Self { center_aligned, ..self }
    }

    /// The rows of the grid, never empty and all of the same length
    pub fn cells(&self) -> &[Vec<Expression>] {
        &self.cells
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells[0].len()
    }

    pub fn has_horizontal_line(&self, row: usize) -> bool {
        self.horizontal_lines.contains(&row)
    }

    pub fn has_vertical_line(&self, column: usize) -> bool {
        self.vertical_lines.contains(&column)
    }
}


/// Unchecked (de)serialized form of a [`Grid`].
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    pub cells:            Vec<Vec<Expression>>,
    #[serde(default)]
    pub horizontal_lines: Vec<usize>,
    #[serde(default)]
    pub vertical_lines:   Vec<usize>,
    #[serde(default)]
    pub center_aligned:   bool,
    #[serde(flatten)]
    pub delimiters:       Delimiters,
}

impl TryFrom<GridSpec> for Grid {
    type Error = ExpressionError;

    fn try_from(spec: GridSpec) -> ExpressionResult<Self> {
        let GridSpec { cells, horizontal_lines, vertical_lines, center_aligned, delimiters } = spec;
        let grid = Grid::new(cells)?;
        Ok(Grid { horizontal_lines, vertical_lines, center_aligned, delimiters, ..grid })
    }
}

impl From<Grid> for GridSpec {
    fn from(grid: Grid) -> Self {
        let Grid { cells, horizontal_lines, vertical_lines, center_aligned, delimiters } = grid;
        GridSpec { cells, horizontal_lines, vertical_lines, center_aligned, delimiters }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Expression { Expression::text("x") }

    #[test]
    fn rejects_malformed_shapes() {
        assert_eq!(Grid::new(vec![]), Err(ExpressionError::EmptyGrid));
        assert_eq!(Grid::new(vec![vec![]]), Err(ExpressionError::EmptyRow { row: 0 }));
        assert_eq!(
            Grid::new(vec![vec![x(), x()], vec![x()]]),
            Err(ExpressionError::RaggedGrid { row: 1, expected: 2, found: 1 }),
        );
    }

    #[test]
    fn accepts_rectangles() {
        let grid = Grid::new(vec![vec![x(), x(), x()], vec![x(), x(), x()]])
            .unwrap()
            .horizontal_lines([0]);
        assert_eq!((grid.rows(), grid.columns()), (2, 3));
        assert!(grid.has_horizontal_line(0));
        assert!(!grid.has_vertical_line(0));
    }

    #[test]
    fn deserialization_checks_shape() {
        let ragged = r#"{ "kind": "grid", "cells": [[{ "kind": "text", "value": "a" }], []] }"#;
        let error = serde_json::from_str::<Expression>(ragged).unwrap_err();
        assert!(error.to_string().contains("row 1"));

        let fine = r#"{ "kind": "grid", "cells": [[{ "kind": "text", "value": "a" }]], "verticalLines": [0], "delimiterLeft": "(" }"#;
        let grid = match serde_json::from_str::<Expression>(fine).unwrap() {
            Expression::Grid(grid) => grid,
            other => panic!("expected a grid, got {:?}", other),
        };
        assert_eq!(grid.vertical_lines, vec![0]);
        assert_eq!(grid.delimiters.left.as_deref(), Some("("));
    }
}
