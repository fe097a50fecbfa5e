use aws_sdk_textract::types::{Block, BlockType, Relationship, RelationshipType};
use labsight_core::classify::extract_document;
use labsight_core::models::table::Cell;
use labsight_core::models::test_result::TestResult;
use labsight_textract::blocks::tables_from_blocks;
use pretty_assertions::assert_eq;

fn children(ids: &[&str]) -> Relationship {
    let mut builder = Relationship::builder().r#type(RelationshipType::Child);
    for id in ids {
        builder = builder.ids(*id);
    }
    builder.build()
}

fn word(id: &str, text: &str) -> Block {
    Block::builder()
        .block_type(BlockType::Word)
        .id(id)
        .text(text)
        .build()
}

fn cell(id: &str, row: i32, column: i32, words: &[&str]) -> Block {
    let mut builder = Block::builder()
        .block_type(BlockType::Cell)
        .id(id)
        .row_index(row)
        .column_index(column);
    if !words.is_empty() {
        builder = builder.relationships(children(words));
    }
    builder.build()
}

fn table(id: &str, cells: &[&str]) -> Block {
    Block::builder()
        .block_type(BlockType::Table)
        .id(id)
        .relationships(children(cells))
        .build()
}

/// A 2x3 table: row label, test name, value.
fn two_row_table() -> Vec<Block> {
    vec![
        Block::builder().block_type(BlockType::Page).id("page").build(),
        table("t1", &["c11", "c12", "c13", "c21", "c22", "c23"]),
        cell("c11", 1, 1, &["w1"]),
        cell("c12", 1, 2, &["w2", "w3"]),
        cell("c13", 1, 3, &["w4"]),
        cell("c21", 2, 1, &["w5"]),
        cell("c22", 2, 2, &["w6"]),
        cell("c23", 2, 3, &[]),
        word("w1", "1"),
        word("w2", "Mean"),
        word("w3", "Platelet Volume"),
        word("w4", "9.8"),
        word("w5", "2"),
        word("w6", "Ferritin"),
    ]
}

#[test]
fn converts_cells_to_zero_based_indices() {
    let tables = tables_from_blocks(&two_row_table());

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].row_count, 2);
    assert_eq!(
        tables[0].cells,
        vec![
            Cell::new(0, 0, "1"),
            Cell::new(0, 1, "Mean Platelet Volume"),
            Cell::new(0, 2, "9.8"),
            Cell::new(1, 0, "2"),
            Cell::new(1, 1, "Ferritin"),
            Cell::new(1, 2, ""),
        ]
    );
}

#[test]
fn converted_tables_feed_the_classifier() {
    let results = extract_document(&tables_from_blocks(&two_row_table()));
    assert_eq!(results, vec![TestResult::new("Mean Platelet Volume", 9.8)]);
}

#[test]
fn each_table_block_becomes_a_table() {
    let blocks = vec![
        table("t1", &["a"]),
        table("t2", &["b", "c"]),
        cell("a", 1, 1, &[]),
        cell("b", 1, 1, &[]),
        cell("c", 3, 2, &[]),
    ];

    let tables = tables_from_blocks(&blocks);

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].row_count, 1);
    assert_eq!(tables[1].row_count, 3);
    assert_eq!(tables[1].cells[1], Cell::new(2, 1, ""));
}

#[test]
fn cells_with_invalid_indices_are_dropped() {
    let blocks = vec![
        table("t1", &["ok", "zero", "missing"]),
        cell("ok", 1, 2, &[]),
        cell("zero", 0, 1, &[]),
        Block::builder().block_type(BlockType::Cell).id("missing").build(),
    ];

    let tables = tables_from_blocks(&blocks);
    assert_eq!(tables[0].cells, vec![Cell::new(0, 1, "")]);
}

#[test]
fn no_table_blocks_means_no_tables() {
    let blocks = vec![word("w1", "Hemoglobin"), word("w2", "13.5")];
    assert!(tables_from_blocks(&blocks).is_empty());
}
