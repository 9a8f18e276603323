//! Report download: server-rendered PDF when the result is stored, otherwise
//! a JSON report generated in the browser.

use common::model::analysis::AnalysisResult;
use common::report::FallbackReport;
use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config::UiConfig;
use crate::error::UiError;

#[derive(Clone, Debug, PartialEq)]
pub enum DownloadAction {
    /// Navigate the window to the PDF route.
    Navigate(String),
    /// Offer `contents` as a local file.
    SaveJson { filename: String, contents: String },
}

/// Decides how to deliver the report. `timestamp` is only called on the JSON path.
pub fn plan_download(
    analysis: Option<&AnalysisResult>,
    config: &UiConfig,
    timestamp: impl FnOnce() -> String,
) -> Result<DownloadAction, UiError> {
    let analysis = analysis.ok_or(UiError::NoAnalysis)?;

    if let Some(result_id) = analysis.result_id() {
        return Ok(DownloadAction::Navigate(config.pdf_url(result_id)));
    }

    let report = FallbackReport::from_analysis(analysis, timestamp());
    Ok(DownloadAction::SaveJson {
        filename: config.fallback_report_filename.clone(),
        contents: serde_json::to_string_pretty(&report)?,
    })
}

/// Performs a planned download in the browser.
pub fn execute(action: DownloadAction) -> Result<(), UiError> {
    let window = web_sys::window().ok_or_else(|| UiError::Browser("no window".to_string()))?;
    match action {
        DownloadAction::Navigate(url) => window
            .location()
            .set_href(&url)
            .map_err(UiError::browser),
        DownloadAction::SaveJson { filename, contents } => {
            let document = window
                .document()
                .ok_or_else(|| UiError::Browser("no document".to_string()))?;
            let body = document
                .body()
                .ok_or_else(|| UiError::Browser("no body".to_string()))?;

            let blob = Blob::new_with_options(contents.as_str(), Some("application/json"));
            let url = ObjectUrl::from(blob);

            let anchor: HtmlAnchorElement = document
                .create_element("a")
                .map_err(UiError::browser)?
                .unchecked_into();
            anchor.set_href(&url);
            anchor.set_download(&filename);
            body.append_child(&anchor).map_err(UiError::browser)?;
            anchor.click();
            anchor.remove();

            // Revoking the URL right after click() can cancel the download.
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(1000).await;
                drop(url);
            });
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::score::Score;

    fn analysis(result_id: Option<&str>) -> AnalysisResult {
        let mut analysis = AnalysisResult::default();
        analysis.ats_score.overall = Score::new(85.0);
        analysis.suggestions.format = vec!["Use bullet points".to_string()];
        analysis.result_id = result_id.map(str::to_string);
        analysis
    }

    #[test]
    fn stored_result_downloads_pdf() {
        let config = UiConfig::default();
        let action = plan_download(Some(&analysis(Some("r1"))), &config, || {
            panic!("timestamp not needed for the PDF path")
        })
        .unwrap();
        assert_eq!(action, DownloadAction::Navigate("/download-pdf/r1".to_string()));
    }

    #[test]
    fn missing_analysis_is_an_error() {
        let config = UiConfig::default();
        let err = plan_download(None, &config, || unreachable!()).unwrap_err();
        assert!(matches!(err, UiError::NoAnalysis));
        assert_eq!(err.to_string(), "No analysis data available.");
    }

    #[test]
    fn unstored_result_falls_back_to_json() {
        let config = UiConfig::default();
        let action = plan_download(Some(&analysis(None)), &config, || {
            "2024-05-01T10:00:00.000Z".to_string()
        })
        .unwrap();

        let DownloadAction::SaveJson { filename, contents } = action else {
            panic!("expected a JSON download");
        };
        assert_eq!(filename, "resume_analysis_report.json");

        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["timestamp"], "2024-05-01T10:00:00.000Z");
        assert_eq!(value["ats_score"]["overall"], 85);
        assert_eq!(value["suggestions"]["format"][0], "Use bullet points");
        assert!(value.get("parsed_resume").is_none());
        assert!(contents.contains('\n'));
    }

    #[test]
    fn empty_result_id_falls_back_to_json() {
        let config = UiConfig::default();
        let action = plan_download(Some(&analysis(Some(""))), &config, String::new).unwrap();
        assert!(matches!(action, DownloadAction::SaveJson { .. }));
    }
}
