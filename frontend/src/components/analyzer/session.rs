//! View state and the current analysis.
//!
//! The session is the only owner of the current `AnalysisResult`. It is
//! written by `install` (a request just succeeded) and `reset`; starting a
//! request clears it so the Loading panel never coexists with old results.

use std::collections::HashSet;

use common::model::analysis::AnalysisResult;
use common::model::category::Category;
use common::model::section::SectionKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Upload,
    Loading,
    Results,
}

/// A collapsible panel in the results view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Suggestions(Category),
    Section(SectionKey),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisSession {
    view: ViewState,
    analysis: Option<AnalysisResult>,
    expanded: HashSet<PanelId>,
}

impl AnalysisSession {
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn current_analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.view == ViewState::Loading
    }

    /// Moves to Loading. Returns `false` if a request is already in flight.
    pub fn begin_request(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.analysis = None;
        self.expanded.clear();
        self.view = ViewState::Loading;
        true
    }

    /// Installs a just-received analysis and shows it with all panels collapsed.
    pub fn install(&mut self, analysis: AnalysisResult) {
        self.analysis = Some(analysis);
        self.expanded.clear();
        self.view = ViewState::Results;
    }

    /// A request failed: back to Upload with nothing to show.
    pub fn fail(&mut self) {
        self.analysis = None;
        self.expanded.clear();
        self.view = ViewState::Upload;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flips one panel without touching the others.
    pub fn toggle(&mut self, panel: PanelId) {
        if !self.expanded.remove(&panel) {
            self.expanded.insert(panel);
        }
    }

    pub fn is_expanded(&self, panel: PanelId) -> bool {
        self.expanded.contains(&panel)
    }
}
