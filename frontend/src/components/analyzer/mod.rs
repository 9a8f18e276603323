//! Resume analyzer: the upload form and results view of the application.
//!
//! Responsibilities
//! - Stage a resume chosen by browsing or drag-and-drop (`intake`).
//! - Submit it with the job description and track Upload/Loading/Results
//!   (`session`, `transport`).
//! - Render scores, suggestions and parsed sections (`view_model`, `view`).
//! - Download the report as a server PDF or a local JSON fallback (`download`).
//! - On first render, show a stored analysis when a `result_id` is provided.

use yew::prelude::*;

mod download;
mod helpers;
mod intake;
mod messages;
mod props;
mod session;
mod state;
mod transport;
mod update;
mod view;
mod view_model;

pub use messages::Msg;
pub use props::ResumeAnalyzerProps;
pub use state::ResumeAnalyzerComponent;

impl Component for ResumeAnalyzerComponent {
    type Message = Msg;
    type Properties = ResumeAnalyzerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResumeAnalyzerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(result_id) = ctx.props().result_id.clone().filter(|id| !id.is_empty()) {
                ctx.link().send_message(Msg::LoadStoredResult(result_id));
            }
        }
    }
}
