use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, ConverseOutput, Message};
use labsight_bedrock::converse::reply_text;
use labsight_bedrock::error::BedrockError;
use labsight_core::error::CollaboratorError;

fn output(blocks: Vec<ContentBlock>) -> ConverseOutput {
    let mut builder = Message::builder().role(ConversationRole::Assistant);
    for block in blocks {
        builder = builder.content(block);
    }
    ConverseOutput::Message(builder.build().unwrap())
}

#[test]
fn reads_text_of_output_message() {
    let out = output(vec![ContentBlock::Text(
        "Hemoglobin carries oxygen.".to_string(),
    )]);
    assert_eq!(reply_text(Some(&out)).unwrap(), "Hemoglobin carries oxygen.");
}

#[test]
fn joins_multiple_text_blocks() {
    let out = output(vec![
        ContentBlock::Text("Your WBC ".to_string()),
        ContentBlock::Text("is normal.".to_string()),
    ]);
    assert_eq!(reply_text(Some(&out)).unwrap(), "Your WBC is normal.");
}

#[test]
fn missing_output_is_a_parse_error() {
    let err = reply_text(None).unwrap_err();
    assert!(matches!(err, BedrockError::ResponseParse(_)));
}

#[test]
fn errors_name_the_service() {
    let err: CollaboratorError = BedrockError::Invocation("throttled".to_string()).into();
    assert_eq!(err.service, "bedrock");
    assert_eq!(err.to_string(), "bedrock: model invocation failed: throttled");
}
