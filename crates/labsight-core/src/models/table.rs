use serde::{Deserialize, Serialize};

/// One cell of an extracted table, as reported by the document-analysis
/// service. Indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row_index: usize,
    pub column_index: usize,
    pub content: String,
}

impl Cell {
    pub fn new(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self {
            row_index,
            column_index,
            content: content.into(),
        }
    }
}

/// A table found in a document: a flat list of cells plus the row count
/// reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub row_count: usize,
    pub cells: Vec<Cell>,
}

impl Table {
    pub fn new(row_count: usize, cells: Vec<Cell>) -> Self {
        Self { row_count, cells }
    }

    /// Build a table from row-major text, one inner vector per row.
    /// Column indices follow the position within each row.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = Vec::new();
        let mut row_count = 0;
        for (row_index, row) in rows.into_iter().enumerate() {
            for (column_index, content) in row.into_iter().enumerate() {
                cells.push(Cell::new(row_index, column_index, content));
            }
            row_count = row_index + 1;
        }
        Self { row_count, cells }
    }

    /// Cells of row `row_index`, ordered by column index.
    pub fn row(&self, row_index: usize) -> Vec<&Cell> {
        let mut cells: Vec<&Cell> = self
            .cells
            .iter()
            .filter(|c| c.row_index == row_index)
            .collect();
        cells.sort_by_key(|c| c.column_index);
        cells
    }

    /// The cell at (`row_index`, `column_index`), if the service reported one.
    pub fn cell(&self, row_index: usize, column_index: usize) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| c.row_index == row_index && c.column_index == column_index)
    }
}

/// Column assignments inferred for a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub name_index: usize,
    pub value_index: usize,
    pub unit_index: Option<usize>,
    pub range_index: Option<usize>,
}
