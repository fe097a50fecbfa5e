//! Integration test against the real Textract API.
//!
//! Requires valid AWS credentials in the environment and a scanned lab
//! report at the path given by `LABSIGHT_SAMPLE_REPORT`.
//!
//! Run with: `cargo test -p labsight-textract --test live -- --ignored`

use labsight_textract::TextractAnalyzer;

#[tokio::test]
#[ignore]
async fn analyzes_sample_report() {
    let path = std::env::var("LABSIGHT_SAMPLE_REPORT").expect("LABSIGHT_SAMPLE_REPORT not set");
    let bytes = std::fs::read(&path).expect("failed to read sample report");

    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await;

    let tables = TextractAnalyzer::new(&config, None)
        .analyze_tables(&bytes)
        .await
        .expect("Textract call failed");

    for (i, table) in tables.iter().enumerate() {
        println!("table {i}: {} rows, {} cells", table.row_count, table.cells.len());
    }
    assert!(!tables.is_empty());
}
