use std::path::Path;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use tracing::info;

use labsight_core::analyze::analyze_document;
use labsight_core::models::response::AnalyzeResponse;
use labsight_textract::{is_supported_media_type, media_type_for_extension};

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the multipart field carrying the report.
const FILE_FIELD: &str = "file";

/// A report pulled out of the multipart body.
struct Upload {
    filename: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

/// Analyze an uploaded lab report.
///
/// Reads the tables from the document, picks out the test results, and asks
/// the model for a definition, an analysis, and a recommendation.
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let upload = read_upload(&mut multipart).await?;

    if upload.bytes.is_empty() {
        return Err(ApiError::BadRequest("uploaded file is empty".to_string()));
    }

    let media_type = resolve_media_type(upload.content_type.as_deref(), upload.filename.as_deref())
        .ok_or_else(|| {
            ApiError::UnsupportedMediaType(format!(
                "unsupported document type: {}",
                upload.content_type.as_deref().unwrap_or("unknown")
            ))
        })?;

    info!(
        filename = upload.filename.as_deref().unwrap_or(""),
        media_type,
        size = upload.bytes.len(),
        "analyzing report"
    );

    let analyzer = state.collaborators.document_analyzer();
    let generator = state.collaborators.text_generator();

    let analysis =
        analyze_document(analyzer.as_ref(), generator.as_ref(), &upload.bytes).await?;

    info!(results = analysis.results.len(), "report analyzed");

    Ok(Json(analysis.response))
}

/// Take the `file` field, or failing that the first field carrying a
/// filename.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    let mut fallback = None;

    while let Some(field) = multipart.next_field().await? {
        let is_file_field = field.name() == Some(FILE_FIELD);
        if !is_file_field && (field.file_name().is_none() || fallback.is_some()) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        let upload = Upload {
            filename,
            content_type,
            bytes,
        };

        if is_file_field {
            return Ok(upload);
        }
        fallback = Some(upload);
    }

    fallback.ok_or_else(|| ApiError::BadRequest(format!("missing `{FILE_FIELD}` field")))
}

/// The media type to treat the upload as: the declared content type when
/// it's supported, otherwise whatever the file extension implies.
fn resolve_media_type<'a>(
    content_type: Option<&'a str>,
    filename: Option<&str>,
) -> Option<&'a str> {
    if let Some(content_type) = content_type
        && is_supported_media_type(content_type)
    {
        return Some(content_type);
    }

    let ext = Path::new(filename?).extension()?.to_str()?;
    media_type_for_extension(ext)
}
