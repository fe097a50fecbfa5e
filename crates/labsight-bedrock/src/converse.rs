//! Single-turn conversations with a Bedrock model.
//!
//! Every prompt is sent as its own conversation: one user message, no
//! system prompt, no history. Only the model's output message is read.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, ConverseOutput, Message};
use tracing::info;

use labsight_core::analyze::TextGenerator;
use labsight_core::error::CollaboratorError;

use crate::error::BedrockError;

/// Inference profile used when the deployment doesn't name one.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Text generation backed by Bedrock. Holds a single client and a fixed
/// model; build one per request.
pub struct BedrockGenerator {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockGenerator {
    /// Build a Bedrock runtime client from shared AWS config, optionally
    /// pointed at a non-default endpoint.
    pub fn new(
        config: &aws_config::SdkConfig,
        model_id: impl Into<String>,
        endpoint_url: Option<&str>,
    ) -> Self {
        let mut builder = aws_sdk_bedrockruntime::config::Builder::from(config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }
        Self {
            client: aws_sdk_bedrockruntime::Client::from_conf(builder.build()),
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Send `prompt` as a one-message conversation and return the reply.
    pub async fn converse(&self, prompt: &str) -> Result<String, BedrockError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        if let Some(usage) = response.usage() {
            info!(
                model = %self.model_id,
                input_tokens = usage.input_tokens(),
                output_tokens = usage.output_tokens(),
                "converse complete"
            );
        }

        reply_text(response.output())
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, CollaboratorError> {
        Ok(self.converse(prompt).await?)
    }
}

/// Concatenated text blocks of the output message.
pub fn reply_text(output: Option<&ConverseOutput>) -> Result<String, BedrockError> {
    let output_message = output
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(text)
}
