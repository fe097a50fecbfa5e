use std::sync::Arc;

use labsight_bedrock::BedrockGenerator;
use labsight_core::analyze::{DocumentAnalyzer, TextGenerator};
use labsight_textract::TextractAnalyzer;

use crate::config::AppConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub collaborators: Arc<dyn Collaborators>,
    pub max_upload_bytes: usize,
}

/// Hands out fresh service clients for each request.
pub trait Collaborators: Send + Sync {
    fn document_analyzer(&self) -> Box<dyn DocumentAnalyzer>;
    fn text_generator(&self) -> Box<dyn TextGenerator>;
}

/// Textract for document analysis, Bedrock for answers.
pub struct AwsCollaborators {
    sdk_config: aws_config::SdkConfig,
    model_id: String,
    textract_endpoint: Option<String>,
    bedrock_endpoint: Option<String>,
}

impl AwsCollaborators {
    pub fn new(sdk_config: aws_config::SdkConfig, config: &AppConfig) -> Self {
        Self {
            sdk_config,
            model_id: config.model_id.clone(),
            textract_endpoint: config.textract_endpoint.clone(),
            bedrock_endpoint: config.bedrock_endpoint.clone(),
        }
    }
}

impl Collaborators for AwsCollaborators {
    fn document_analyzer(&self) -> Box<dyn DocumentAnalyzer> {
        Box::new(TextractAnalyzer::new(
            &self.sdk_config,
            self.textract_endpoint.as_deref(),
        ))
    }

    fn text_generator(&self) -> Box<dyn TextGenerator> {
        Box::new(BedrockGenerator::new(
            &self.sdk_config,
            &self.model_id,
            self.bedrock_endpoint.as_deref(),
        ))
    }
}
