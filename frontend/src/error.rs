use thiserror::Error;

/// Why a chosen file was not staged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Please upload a PDF or DOCX file only.")]
    UnsupportedType,

    #[error("File size exceeds {limit}. Please upload a smaller file.")]
    TooLarge { limit: String },
}

/// Errors surfaced to the user by the analyzer UI.
#[derive(Debug, Error)]
pub enum UiError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("Please select a resume file.")]
    NoFileSelected,

    #[error("No analysis data available.")]
    NoAnalysis,

    #[error("{0}")]
    Network(#[from] gloo_net::Error),

    /// Non-2xx response; holds the server's message or the generic fallback.
    #[error("{0}")]
    Server(String),

    #[error("Could not build the report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Browser error: {0}")]
    Browser(String),
}

impl UiError {
    pub fn browser(value: wasm_bindgen::JsValue) -> Self {
        UiError::Browser(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
