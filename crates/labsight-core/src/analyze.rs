//! The per-request pipeline: document analysis, column classification, and
//! the three-way question fan-out.
//!
//! The external services sit behind [`DocumentAnalyzer`] and
//! [`TextGenerator`]. Nothing here holds state between requests.

use async_trait::async_trait;
use tracing::info;

use crate::classify::extract_document;
use crate::error::{AnalyzeError, CollaboratorError};
use crate::models::response::{Analysis, AnalyzeResponse};
use crate::models::table::Table;
use crate::models::test_result::TestResult;
use crate::prompt::Question;

/// Turns raw document bytes into the tables found in the document.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(&self, document: &[u8]) -> Result<Vec<Table>, CollaboratorError>;
}

/// Answers a single-turn prompt with text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, CollaboratorError>;
}

async fn ask(
    generator: &dyn TextGenerator,
    question: Question,
    results: &[TestResult],
) -> Result<String, AnalyzeError> {
    let prompt = question.prompt(results);
    info!(%question, prompt_len = prompt.len(), "asking question");

    let answer = generator
        .generate(&prompt)
        .await
        .map_err(|source| AnalyzeError::Generation { question, source })?;

    info!(%question, answer_len = answer.len(), "question answered");
    Ok(answer)
}

/// Ask all three questions concurrently and wait for every answer.
///
/// The first failure is returned and the outstanding requests are dropped;
/// a response is only built when all three answers arrived.
pub async fn answer_questions(
    generator: &dyn TextGenerator,
    results: &[TestResult],
) -> Result<AnalyzeResponse, AnalyzeError> {
    let (definition, analysis, recommendation) = tokio::try_join!(
        ask(generator, Question::Definition, results),
        ask(generator, Question::Analysis, results),
        ask(generator, Question::Recommendation, results),
    )?;

    Ok(AnalyzeResponse {
        definition,
        analysis,
        recommendation,
    })
}

/// Run the whole pipeline for one uploaded document.
///
/// An empty upload is rejected before any service is called. A document
/// without readable tables is not an error: the questions are still asked,
/// over an empty list of results.
pub async fn analyze_document(
    analyzer: &dyn DocumentAnalyzer,
    generator: &dyn TextGenerator,
    document: &[u8],
) -> Result<Analysis, AnalyzeError> {
    if document.is_empty() {
        return Err(AnalyzeError::EmptyDocument);
    }

    let tables = analyzer
        .analyze(document)
        .await
        .map_err(AnalyzeError::Extraction)?;

    let results = extract_document(&tables);
    info!(
        tables = tables.len(),
        results = results.len(),
        "extracted test results"
    );

    let response = answer_questions(generator, &results).await?;

    Ok(Analysis { results, response })
}
