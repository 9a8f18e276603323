//! Component state for the resume analyzer.
//!
//! Fields are `pub` because they are read by `view` and written by `update`.
//! The current analysis is not a field of its own: it lives in `session`, which
//! exposes the only read and write paths.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::intake::FileIntake;
use super::session::AnalysisSession;

pub struct ResumeAnalyzerComponent {
    /// The staged resume, if any.
    pub intake: FileIntake<web_sys::File>,

    /// View state, current analysis and expanded panels.
    pub session: AnalysisSession,

    /// Raw job description text, sent as-is.
    pub job_description: String,

    /// A drag is currently over the drop area.
    pub drag_active: bool,

    /// Hidden `<input type="file">` opened by the Browse button.
    pub file_input_ref: NodeRef,

    /// Guard for the one-time stored-result load in `rendered`.
    pub loaded: bool,
}

impl ResumeAnalyzerComponent {
    pub fn new() -> Self {
        Self {
            intake: FileIntake::default(),
            session: AnalysisSession::default(),
            job_description: String::new(),
            drag_active: false,
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Drops the staged file and clears the native input so choosing the same
    /// file again fires `change`.
    pub fn clear_file(&mut self) {
        self.intake.clear();
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    /// Back to an empty upload form. Safe to call repeatedly.
    pub fn reset_all(&mut self) {
        self.session.reset();
        self.clear_file();
        self.job_description.clear();
        self.drag_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::session::ViewState;
    use common::model::analysis::AnalysisResult;

    #[test]
    fn reset_all_twice_leaves_empty_upload_form() {
        let mut component = ResumeAnalyzerComponent::new();
        component.job_description = "Rust engineer".to_string();
        component.drag_active = true;
        assert!(component.session.begin_request());
        component.session.install(AnalysisResult::default());

        component.reset_all();
        component.reset_all();

        assert_eq!(component.session.view(), ViewState::Upload);
        assert!(component.session.current_analysis().is_none());
        assert!(component.intake.staged().is_none());
        assert!(component.job_description.is_empty());
        assert!(!component.drag_active);
    }
}
