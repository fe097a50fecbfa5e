//! Conversion of Textract's block graph into [`Table`]s.
//!
//! `AnalyzeDocument` returns a flat list of blocks linked by id. A `TABLE`
//! block lists its `CELL` blocks as `CHILD` relationships; each cell lists
//! its `WORD` blocks the same way. Textract row and column indices are
//! 1-based.

use std::collections::HashMap;

use aws_sdk_textract::types::{Block, BlockType, RelationshipType};

use labsight_core::models::table::{Cell, Table};

/// Ids of the `CHILD` blocks of `block`, in Textract's order.
fn child_ids(block: &Block) -> impl Iterator<Item = &str> {
    block
        .relationships()
        .iter()
        .filter(|r| r.r#type() == Some(&RelationshipType::Child))
        .flat_map(|r| r.ids().iter().map(String::as_str))
}

/// Text of a cell: its child words joined by single spaces.
fn cell_text(cell: &Block, by_id: &HashMap<&str, &Block>) -> String {
    child_ids(cell)
        .filter_map(|id| by_id.get(id))
        .filter(|b| b.block_type() == Some(&BlockType::Word))
        .filter_map(|b| b.text())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a 1-based Textract index to 0-based.
fn zero_based(index: Option<i32>) -> Option<usize> {
    usize::try_from(index?).ok()?.checked_sub(1)
}

/// Build one [`Table`] per `TABLE` block, in block order.
///
/// Cells without a valid row or column index are dropped. The row count is
/// the highest row index seen among the table's cells.
pub fn tables_from_blocks(blocks: &[Block]) -> Vec<Table> {
    let by_id: HashMap<&str, &Block> = blocks
        .iter()
        .filter_map(|b| b.id().map(|id| (id, b)))
        .collect();

    blocks
        .iter()
        .filter(|b| b.block_type() == Some(&BlockType::Table))
        .map(|table| {
            let cells: Vec<Cell> = child_ids(table)
                .filter_map(|id| by_id.get(id))
                .filter(|b| b.block_type() == Some(&BlockType::Cell))
                .filter_map(|cell| {
                    Some(Cell {
                        row_index: zero_based(cell.row_index())?,
                        column_index: zero_based(cell.column_index())?,
                        content: cell_text(cell, &by_id),
                    })
                })
                .collect();

            let row_count = cells.iter().map(|c| c.row_index + 1).max().unwrap_or(0);
            Table::new(row_count, cells)
        })
        .collect()
}
