use std::collections::BTreeMap;

use crate::excel::{Cell, CellValue};

/// A named, sparse grid of cells addressed by 1-based `(row, col)`
#[derive(Clone, Debug, Default)]
pub struct Sheet {
    pub name: String,
    cells: BTreeMap<(u32, u16), Cell>,
    column_widths: BTreeMap<u16, f64>,
    pub max_rows: u32,
    pub max_cols: u16,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Value at `(row, col)`, or [`CellValue::Empty`] when nothing was stored.
    pub fn value(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|cell| cell.value.clone())
            .unwrap_or_default()
    }

    pub fn set_cell(&mut self, row: u32, col: u16, cell: Cell) {
        self.max_rows = self.max_rows.max(row);
        self.max_cols = self.max_cols.max(col);
        self.cells.insert((row, col), cell);
    }

    /// Row-major block covering the inclusive bounds.
    pub fn values_in(&self, start: (u32, u16), end: (u32, u16)) -> Vec<Vec<CellValue>> {
        (start.0..=end.0)
            .map(|row| (start.1..=end.1).map(|col| self.value(row, col)).collect())
            .collect()
    }

    /// Stored cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.cells.iter().map(|(&(row, col), cell)| (row, col, cell))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Used extent as `(max_row, max_col)`; `(0, 0)` for an empty sheet.
    pub fn dimensions(&self) -> (u32, u16) {
        (self.max_rows, self.max_cols)
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(&col, &width)| (col, width))
    }
}
