use common::model::analysis::AnalysisResult;

use super::session::PanelId;

#[derive(Clone)]
pub enum Msg {
    OpenFileDialog,
    FileChosen(Option<web_sys::File>),
    DragActive(bool),
    RemoveFile,
    UpdateJobDescription(String),
    Submit,
    LoadStoredResult(String),
    AnalysisReceived(AnalysisResult),
    SubmissionFailed(String),
    RestoreFailed(String),
    TogglePanel(PanelId),
    DownloadReport,
    AnalyzeNew,
}
