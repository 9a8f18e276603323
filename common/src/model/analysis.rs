use serde::{Deserialize, Serialize};

use super::category::{CategoryScores, Suggestions};
use super::score::Score;
use super::section::ParsedResume;

/// `ats_score`: overall score plus one score per category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall: Score,
    #[serde(default)]
    pub categories: CategoryScores,
}

/// Result of one resume evaluation, as produced by the analysis service.
///
/// `result_id` identifies the stored result on the server and is what the
/// PDF report download is keyed on. It is absent when the service did not
/// persist the result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ats_score: AtsScore,
    #[serde(default)]
    pub suggestions: Suggestions,
    #[serde(default)]
    pub parsed_resume: ParsedResume,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
}

impl AnalysisResult {
    /// Non-empty result id, if any.
    pub fn result_id(&self) -> Option<&str> {
        self.result_id.as_deref().filter(|id| !id.is_empty())
    }
}
