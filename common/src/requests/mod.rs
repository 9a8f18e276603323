use serde::{Deserialize, Serialize};

use crate::model::analysis::AnalysisResult;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";
/// Multipart field carrying the free-text job description.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// Message shown when a failed response carries no usable `error` field.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Successful `POST /upload` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub result_id: Option<String>,
    pub analysis: AnalysisResult,
}

impl UploadResponse {
    /// The analysis, with the envelope's `result_id` filled in when the
    /// analysis itself does not carry one.
    pub fn into_analysis(self) -> AnalysisResult {
        let mut analysis = self.analysis;
        if analysis.result_id().is_none() {
            if let Some(id) = self.result_id.filter(|id| !id.is_empty()) {
                analysis.result_id = Some(id);
            }
        }
        analysis
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn message(&self) -> &str {
        self.error
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(GENERIC_ERROR)
    }
}
