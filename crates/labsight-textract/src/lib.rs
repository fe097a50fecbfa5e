//! labsight-textract
//!
//! Table extraction via Amazon Textract `AnalyzeDocument`.

pub mod blocks;
pub mod error;

use async_trait::async_trait;
use aws_sdk_textract::types::{Document, FeatureType};
use tracing::info;

use labsight_core::analyze::DocumentAnalyzer;
use labsight_core::error::CollaboratorError;
use labsight_core::models::table::Table;

use crate::error::TextractError;

/// Media types Textract's synchronous `AnalyzeDocument` accepts.
const SUPPORTED_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png", "image/tiff", "application/pdf"];

/// Document analysis backed by Textract. Holds a single client; build one
/// per request.
pub struct TextractAnalyzer {
    client: aws_sdk_textract::Client,
}

impl TextractAnalyzer {
    /// Build a Textract client from shared AWS config, optionally pointed at
    /// a non-default endpoint.
    pub fn new(config: &aws_config::SdkConfig, endpoint_url: Option<&str>) -> Self {
        let mut builder = aws_sdk_textract::config::Builder::from(config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }
        Self {
            client: aws_sdk_textract::Client::from_conf(builder.build()),
        }
    }

    /// Run table analysis on raw document bytes and wait for the result.
    pub async fn analyze_tables(&self, document: &[u8]) -> Result<Vec<Table>, TextractError> {
        info!(document_len = document.len(), "starting Textract table analysis");

        let response = self
            .client
            .analyze_document()
            .document(
                Document::builder()
                    .bytes(aws_smithy_types::Blob::new(document))
                    .build(),
            )
            .feature_types(FeatureType::Tables)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_unsupported_document_exception()
                    || err.is_bad_document_exception()
                    || err.is_document_too_large_exception()
                {
                    TextractError::Rejected(err.to_string())
                } else {
                    TextractError::Api(err.to_string())
                }
            })?;

        let tables = blocks::tables_from_blocks(response.blocks());

        info!(
            blocks = response.blocks().len(),
            tables = tables.len(),
            "Textract table analysis complete"
        );

        Ok(tables)
    }
}

#[async_trait]
impl DocumentAnalyzer for TextractAnalyzer {
    async fn analyze(&self, document: &[u8]) -> Result<Vec<Table>, CollaboratorError> {
        Ok(self.analyze_tables(document).await?)
    }
}

/// Whether Textract can analyze a document of this media type. Parameters
/// such as `; charset=...` are ignored.
pub fn is_supported_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    SUPPORTED_MEDIA_TYPES.contains(&essence.as_str())
}

/// Map a file extension to the media type Textract expects.
///
/// Returns `None` for extensions Textract can't analyze.
pub fn media_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "tif" | "tiff" => Some("image/tiff"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}
