//! HTTP calls to the analysis service.
//!
//! One request per call: no retries and no timeout beyond the browser's own.

use common::model::analysis::AnalysisResult;
use common::requests::{
    ErrorResponse, UploadResponse, GENERIC_ERROR, JOB_DESCRIPTION_FIELD, RESUME_FIELD,
};
use gloo_net::http::{Request, Response};
use web_sys::FormData;

use crate::config::UiConfig;
use crate::error::UiError;

/// Uploads the resume and job description; returns the analysis on 2xx.
pub async fn submit_resume(
    config: &UiConfig,
    file: &web_sys::File,
    job_description: &str,
) -> Result<AnalysisResult, UiError> {
    let form = FormData::new().map_err(UiError::browser)?;
    form.append_with_blob_and_filename(RESUME_FIELD, file, &file.name())
        .map_err(UiError::browser)?;
    form.append_with_str(JOB_DESCRIPTION_FIELD, job_description)
        .map_err(UiError::browser)?;

    let response = Request::post(&config.upload_endpoint)
        .body(form)?
        .send()
        .await?;
    let response = ensure_success(response).await?;

    Ok(response.json::<UploadResponse>().await?.into_analysis())
}

/// Fetches a previously stored analysis.
pub async fn fetch_result(config: &UiConfig, result_id: &str) -> Result<AnalysisResult, UiError> {
    let response = Request::get(&config.result_url(result_id)).send().await?;
    let response = ensure_success(response).await?;

    let mut analysis = response.json::<AnalysisResult>().await?;
    if analysis.result_id().is_none() {
        analysis.result_id = Some(result_id.to_string());
    }
    Ok(analysis)
}

async fn ensure_success(response: Response) -> Result<Response, UiError> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(UiError::Server(server_error_message(&body)))
}

/// Extracts the `error` field of a failed response body, or the generic
/// message when the body is not the expected JSON.
pub fn server_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message().to_string())
        .unwrap_or_else(|_| GENERIC_ERROR.to_string())
}
