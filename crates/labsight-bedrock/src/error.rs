use thiserror::Error;

use labsight_core::error::CollaboratorError;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

impl From<BedrockError> for CollaboratorError {
    fn from(e: BedrockError) -> Self {
        CollaboratorError::new("bedrock", e.to_string())
    }
}
