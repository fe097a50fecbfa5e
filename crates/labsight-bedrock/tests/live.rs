//! Integration test against the real Bedrock Converse API.
//!
//! Requires valid AWS credentials in the environment and access to the
//! default model.
//!
//! Run with: `cargo test -p labsight-bedrock --test live -- --ignored`

use labsight_bedrock::{BedrockGenerator, DEFAULT_MODEL_ID};

#[tokio::test]
#[ignore]
async fn answers_a_prompt() {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await;

    let generator = BedrockGenerator::new(&config, DEFAULT_MODEL_ID, None);
    let answer = generator
        .converse("In medical context, can you help me explain what is Hemoglobin")
        .await
        .expect("Converse call failed");

    println!("{answer}");
    assert!(!answer.is_empty());
}
