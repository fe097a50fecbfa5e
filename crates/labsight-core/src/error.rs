use thiserror::Error;

use crate::prompt::Question;

/// A failure reported by an external collaborator (document analysis or
/// text generation).
#[derive(Debug, Error)]
#[error("{service}: {message}")]
pub struct CollaboratorError {
    pub service: &'static str,
    pub message: String,
}

impl CollaboratorError {
    pub fn new(service: &'static str, message: impl Into<String>) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("uploaded document is empty")]
    EmptyDocument,

    #[error("document analysis failed: {0}")]
    Extraction(#[source] CollaboratorError),

    #[error("{question} generation failed: {source}")]
    Generation {
        question: Question,
        #[source]
        source: CollaboratorError,
    },
}
