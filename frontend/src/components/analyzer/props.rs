//! Properties for the `ResumeAnalyzerComponent`.

use yew::prelude::*;

use crate::config::UiConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct ResumeAnalyzerProps {
    /// Endpoints and upload limits.
    #[prop_or_default]
    pub config: UiConfig,

    /// Id of a stored analysis to show on first render instead of the upload form.
    ///
    /// Checked once, in the `rendered` hook of the first render. If loading
    /// fails the component falls back to the empty upload form.
    #[prop_or_default]
    pub result_id: Option<String>,
}
