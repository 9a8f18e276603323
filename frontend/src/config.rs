//! Client configuration: service endpoints and upload constraints.
//!
//! The defaults match the analysis service routes. The upload constraints are
//! only a client-side courtesy; the service validates again.

use common::report::FALLBACK_REPORT_FILENAME;

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    /// `POST` target for the multipart resume upload.
    pub upload_endpoint: String,
    /// Prefix of the server-rendered PDF report route; the result id is appended.
    pub pdf_download_endpoint: String,
    /// Prefix of the stored result route; the result id is appended.
    pub results_endpoint: String,
    pub max_upload_bytes: u64,
    /// Lower-case file extensions accepted for upload.
    pub allowed_extensions: Vec<String>,
    pub fallback_report_filename: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            upload_endpoint: "/upload".to_string(),
            pdf_download_endpoint: "/download-pdf".to_string(),
            results_endpoint: "/results".to_string(),
            max_upload_bytes: 2 * 1024 * 1024,
            allowed_extensions: vec!["pdf".to_string(), "docx".to_string()],
            fallback_report_filename: FALLBACK_REPORT_FILENAME.to_string(),
        }
    }
}

impl UiConfig {
    pub fn pdf_url(&self, result_id: &str) -> String {
        join_path(&self.pdf_download_endpoint, result_id)
    }

    pub fn result_url(&self, result_id: &str) -> String {
        join_path(&self.results_endpoint, result_id)
    }

    /// `accept` attribute for the file input, e.g. `.pdf,.docx`.
    pub fn accept_attribute(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Upload limit as shown to users ("2MB").
    pub fn max_upload_label(&self) -> String {
        let mib = self.max_upload_bytes as f64 / (1024.0 * 1024.0);
        format!("{}MB", mib)
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), segment)
}
