use crate::components::analyzer::ResumeAnalyzerComponent;
use crate::config::UiConfig;
use web_sys::UrlSearchParams;
use yew::{html, Component, Context, Html};

/// Query parameter naming a stored analysis to open, e.g. `/?result=<id>`.
const RESULT_QUERY_PARAM: &str = "result";

pub struct App {
    config: UiConfig,
    result_id: Option<String>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: UiConfig::default(),
            result_id: result_id_from_location(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <ResumeAnalyzerComponent
                    config={self.config.clone()}
                    result_id={self.result_id.clone()}
                />
            </div>
        }
    }
}

fn result_id_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(RESULT_QUERY_PARAM)
        .filter(|id| !id.is_empty())
}
