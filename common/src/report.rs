//! Report document generated in the browser when the server cannot render a
//! PDF for the current analysis.

use serde::{Deserialize, Serialize};

use crate::model::analysis::{AnalysisResult, AtsScore};
use crate::model::category::Suggestions;

pub const FALLBACK_REPORT_FILENAME: &str = "resume_analysis_report.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackReport {
    /// ISO-8601 generation time.
    pub timestamp: String,
    pub ats_score: AtsScore,
    pub suggestions: Suggestions,
}

impl FallbackReport {
    pub fn from_analysis(analysis: &AnalysisResult, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            ats_score: analysis.ats_score,
            suggestions: analysis.suggestions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::score::Score;

    #[test]
    fn report_has_only_scores_and_suggestions() {
        let mut analysis = AnalysisResult::default();
        analysis.ats_score.overall = Score::new(64.0);
        analysis.suggestions.style = vec!["Avoid passive voice".to_string()];

        let report = FallbackReport::from_analysis(&analysis, "2024-05-01T10:00:00.000Z");
        let value = serde_json::to_value(&report).unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(value["timestamp"], "2024-05-01T10:00:00.000Z");
        assert_eq!(value["ats_score"]["overall"], 64.0);
        assert_eq!(value["suggestions"]["style"][0], "Avoid passive voice");
    }

    #[test]
    fn whole_scores_keep_integer_form() {
        let analysis: AnalysisResult = serde_json::from_str(
            r#"{"ats_score": {"overall": 85, "categories":
                {"content": 90, "format": 70, "skills": 60, "sections": 95, "style": 55}}}"#,
        )
        .unwrap();

        let json = serde_json::to_string(&FallbackReport::from_analysis(&analysis, "t")).unwrap();
        assert!(json.contains(r#""overall":85,"#));
        assert!(json.contains(r#""content":90,"format":70,"#));
        assert!(!json.contains("85.0"));
    }
}
