//! Update function for the resume analyzer component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render. Network calls are
//! spawned with `spawn_local` and report back through `Msg::AnalysisReceived`,
//! `Msg::SubmissionFailed` or `Msg::RestoreFailed`.

use gloo_console::{error, log};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::error::UiError;

use super::download::{self, DownloadAction};
use super::helpers::{iso_timestamp, notify, show_toast};
use super::messages::Msg;
use super::state::ResumeAnalyzerComponent;
use super::transport;

pub fn update(
    component: &mut ResumeAnalyzerComponent,
    ctx: &Context<ResumeAnalyzerComponent>,
    msg: Msg,
) -> bool {
    let config = &ctx.props().config;
    match msg {
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileChosen(file) => {
            let Some(file) = file else {
                return false;
            };
            let name = file.name();
            let size = file.size() as u64;
            let outcome = component
                .intake
                .offer(file, &name, size, config)
                .map(|staged| format!("Staged {} ({} bytes)", staged.name, staged.size));
            match outcome {
                Ok(line) => log!(line),
                Err(err) => {
                    component.clear_file();
                    notify(&UiError::from(err).to_string());
                }
            }
            true
        }
        Msg::DragActive(active) => {
            let changed = component.drag_active != active;
            component.drag_active = active;
            changed
        }
        Msg::RemoveFile => {
            component.clear_file();
            true
        }
        Msg::UpdateJobDescription(text) => {
            component.job_description = text;
            true
        }
        Msg::Submit => {
            let Some(staged) = component.intake.staged() else {
                notify(&UiError::NoFileSelected.to_string());
                return false;
            };
            let file = staged.file.clone();
            let name = staged.name.clone();
            if !component.session.begin_request() {
                return false;
            }
            log!(format!("Submitting {} for analysis", name));

            let link = ctx.link().clone();
            let config = config.clone();
            let job_description = component.job_description.clone();
            spawn_local(async move {
                match transport::submit_resume(&config, &file, &job_description).await {
                    Ok(analysis) => link.send_message(Msg::AnalysisReceived(analysis)),
                    Err(err) => link.send_message(Msg::SubmissionFailed(err.to_string())),
                }
            });
            true
        }
        Msg::LoadStoredResult(result_id) => {
            if !component.session.begin_request() {
                return false;
            }
            log!(format!("Loading stored analysis {}", result_id));

            let link = ctx.link().clone();
            let config = config.clone();
            spawn_local(async move {
                match transport::fetch_result(&config, &result_id).await {
                    Ok(analysis) => link.send_message(Msg::AnalysisReceived(analysis)),
                    Err(err) => link.send_message(Msg::RestoreFailed(format!(
                        "Could not load analysis {}: {}",
                        result_id, err
                    ))),
                }
            });
            true
        }
        Msg::AnalysisReceived(analysis) => {
            // Only a response to the request in flight may populate the results.
            if !component.session.is_busy() {
                return false;
            }
            log!(format!(
                "Analysis received, overall score {}",
                analysis.ats_score.overall
            ));
            component.session.install(analysis);
            true
        }
        Msg::SubmissionFailed(message) => {
            error!(format!("Analysis request failed: {}", message));
            component.session.fail();
            notify(&format!("Error: {}", message));
            true
        }
        Msg::RestoreFailed(message) => {
            error!(message.clone());
            component.session.fail();
            show_toast(&message);
            true
        }
        Msg::TogglePanel(panel) => {
            component.session.toggle(panel);
            true
        }
        Msg::DownloadReport => {
            let analysis = component.session.current_analysis();
            let planned = download::plan_download(analysis, config, iso_timestamp);
            let result = planned.and_then(|action| {
                let fallback = matches!(action, DownloadAction::SaveJson { .. });
                download::execute(action)?;
                Ok(fallback)
            });
            match result {
                Ok(true) => {
                    log!("No stored result, downloaded JSON report");
                    show_toast("PDF report unavailable. Downloaded a JSON summary instead.");
                }
                Ok(false) => log!("Requested PDF report"),
                Err(err) => notify(&err.to_string()),
            }
            false
        }
        Msg::AnalyzeNew => {
            component.reset_all();
            true
        }
    }
}
