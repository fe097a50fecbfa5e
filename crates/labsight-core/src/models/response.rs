use serde::{Deserialize, Serialize};

use crate::models::test_result::TestResult;

/// The three answers returned to the caller for one uploaded report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub definition: String,
    pub analysis: String,
    pub recommendation: String,
}

/// Everything produced for one document: the measurements that were read
/// and the answers generated from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub results: Vec<TestResult>,
    pub response: AnalyzeResponse,
}
