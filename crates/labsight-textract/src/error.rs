use thiserror::Error;

use labsight_core::error::CollaboratorError;

#[derive(Debug, Error)]
pub enum TextractError {
    #[error("Textract rejected the document: {0}")]
    Rejected(String),

    #[error("Textract AnalyzeDocument error: {0}")]
    Api(String),
}

impl From<TextractError> for CollaboratorError {
    fn from(e: TextractError) -> Self {
        CollaboratorError::new("textract", e.to_string())
    }
}
