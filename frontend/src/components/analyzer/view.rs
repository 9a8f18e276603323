//! View rendering for the resume analyzer component.
//!
//! Exactly one of three sections is rendered, following the session's
//! `ViewState`: the upload form, the loading indicator, or the results. The
//! results markup is built from a `ResultsVm` only; all decisions about what
//! to show (banding, placeholders, skipped sections) are made in `view_model`.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::config::UiConfig;

use super::helpers::format_file_size;
use super::intake::StagedFile;
use super::messages::Msg;
use super::session::{PanelId, ViewState};
use super::state::ResumeAnalyzerComponent;
use super::view_model::{
    CategoryBarVm, GaugeVm, ResultsVm, SectionBodyVm, SectionPanelVm, SuggestionListVm,
};

/// SVG path of a full circle with circumference 100, so `stroke-dasharray`
/// maps a score straight onto the arc length.
const GAUGE_ARC: &str =
    "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

pub fn view(component: &ResumeAnalyzerComponent, ctx: &Context<ResumeAnalyzerComponent>) -> Html {
    let link = ctx.link();
    let config = &ctx.props().config;

    html! {
        <div class="analyzer-root">
            <header class="app-header">
                <h1>{"Resume ATS Analyzer"}</h1>
                <p>{"See how your resume performs with Applicant Tracking Systems"}</p>
            </header>
            {
                match component.session.view() {
                    ViewState::Upload => build_upload_section(component, config, link),
                    ViewState::Loading => build_loading_section(),
                    ViewState::Results => match component.session.current_analysis() {
                        Some(analysis) => {
                            let vm = ResultsVm::from_analysis(analysis);
                            build_results_section(component, &vm, link)
                        }
                        None => html! {},
                    },
                }
            }
        </div>
    }
}

fn build_upload_section(
    component: &ResumeAnalyzerComponent,
    config: &UiConfig,
    link: &Scope<ResumeAnalyzerComponent>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <section class="upload-section">
            <form id="resume-form" onsubmit={onsubmit}>
                <input
                    type="file"
                    id="resume-file"
                    ref={component.file_input_ref.clone()}
                    accept={config.accept_attribute()}
                    style="display: none;"
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FileChosen(input.files().and_then(|files| files.get(0)))
                    })}
                />
                {
                    match component.intake.staged() {
                        Some(staged) => build_selected_file(staged, link),
                        None => build_drop_area(component, config, link),
                    }
                }
                <div class="form-group">
                    <label>{"Job Description (optional)"}</label>
                    <textarea
                        id="job-description"
                        rows="6"
                        placeholder="Paste the job description to compare keywords against your resume"
                        value={component.job_description.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                            Msg::UpdateJobDescription(value)
                        })}
                    />
                </div>
                <button
                    type="submit"
                    id="analyze-btn"
                    class="btn primary"
                    disabled={!component.intake.can_submit()}
                >
                    {"Analyze Resume"}
                </button>
            </form>
        </section>
    }
}

/// Drop target. Every drag event suppresses the browser's default file-open.
fn build_drop_area(
    component: &ResumeAnalyzerComponent,
    config: &UiConfig,
    link: &Scope<ResumeAnalyzerComponent>,
) -> Html {
    let highlight = |active: bool| {
        link.callback(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            Msg::DragActive(active)
        })
    };
    let ondrop = link.batch_callback(|e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        let file = e
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        vec![Msg::DragActive(false), Msg::FileChosen(file)]
    });

    html! {
        <div
            id="drop-area"
            class={classes!("drop-area", if component.drag_active { "dragover" } else { "" })}
            ondragenter={highlight(true)}
            ondragover={highlight(true)}
            ondragleave={highlight(false)}
            ondrop={ondrop}
        >
            <i class="fas fa-cloud-upload-alt"></i>
            <p>{"Drag & drop your resume here or"}</p>
            <button
                type="button"
                id="browse-btn"
                class="btn secondary"
                onclick={link.callback(|_| Msg::OpenFileDialog)}
            >
                {"Browse Files"}
            </button>
            <p class="file-types">
                { format!("Supported formats: PDF, DOCX (max {})", config.max_upload_label()) }
            </p>
        </div>
    }
}

fn build_selected_file(
    staged: &StagedFile<web_sys::File>,
    link: &Scope<ResumeAnalyzerComponent>,
) -> Html {
    html! {
        <div id="selected-file-container" class="selected-file">
            <i class="fas fa-file-alt"></i>
            <span id="file-name">{ staged.name.clone() }</span>
            <span class="file-size">{ format_file_size(staged.size) }</span>
            <button
                type="button"
                id="remove-file"
                class="btn icon"
                title="Remove file"
                onclick={link.callback(|_| Msg::RemoveFile)}
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}

fn build_loading_section() -> Html {
    html! {
        <section class="loading-section">
            <div class="spinner"></div>
            <p>{"Analyzing your resume..."}</p>
        </section>
    }
}

fn build_results_section(
    component: &ResumeAnalyzerComponent,
    vm: &ResultsVm,
    link: &Scope<ResumeAnalyzerComponent>,
) -> Html {
    html! {
        <section class="results-section">
            <div class="score-overview">
                { build_gauge(&vm.gauge) }
                { build_category_bars(&vm.categories) }
            </div>

            <div class="suggestions">
                <h2>{"Improvement Suggestions"}</h2>
                <div class="accordion">
                    { for vm.suggestions.iter().map(|list| build_suggestion_panel(component, list, link)) }
                </div>
            </div>

            <div class="parsed-resume">
                <h2>{"Parsed Resume Sections"}</h2>
                <div id="resume-sections-accordion" class="accordion">
                    { for vm.sections.iter().map(|panel| build_section_panel(component, panel, link)) }
                </div>
            </div>

            <div class="actions">
                <button
                    id="download-report"
                    class="btn primary"
                    onclick={link.callback(|_| Msg::DownloadReport)}
                >
                    <i class="fas fa-download"></i>
                    {" Download Report"}
                </button>
                <button
                    id="analyze-new"
                    class="btn secondary"
                    onclick={link.callback(|_| Msg::AnalyzeNew)}
                >
                    <i class="fas fa-redo"></i>
                    {" Analyze New Resume"}
                </button>
            </div>
        </section>
    }
}

fn build_gauge(gauge: &GaugeVm) -> Html {
    html! {
        <div class="overall-score">
            <h2>{"Overall ATS Score"}</h2>
            <svg viewBox="0 0 36 36" class="circular-chart">
                <path class="circle-bg" d={GAUGE_ARC} />
                <path
                    id="score-circle"
                    class={classes!("circle", gauge.band.css_class())}
                    stroke-dasharray={gauge.dasharray.clone()}
                    style={format!("stroke: {};", gauge.band.color())}
                    d={GAUGE_ARC}
                />
                <text x="18" y="20.35" class="score-text">{ gauge.text.clone() }</text>
            </svg>
            <p class="verdict">{ gauge.verdict }</p>
        </div>
    }
}

fn build_category_bars(bars: &[CategoryBarVm]) -> Html {
    html! {
        <div class="category-scores">
            <h2>{"Category Scores"}</h2>
            {
                for bars.iter().map(|bar| {
                    let key = bar.category.key();
                    html! {
                        <div class="category" key={key}>
                            <div class="category-header">
                                <span class="category-name">{ bar.title }</span>
                                <span id={format!("{}-score", key)} class="category-score">
                                    { bar.score_text.clone() }
                                </span>
                            </div>
                            <div class="progress">
                                <div
                                    id={format!("{}-progress", key)}
                                    class={classes!("progress-bar", bar.band.css_class())}
                                    style={format!("width: {}; background-color: {};", bar.width, bar.band.color())}
                                ></div>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}

fn build_suggestion_panel(
    component: &ResumeAnalyzerComponent,
    list: &SuggestionListVm,
    link: &Scope<ResumeAnalyzerComponent>,
) -> Html {
    let panel = PanelId::Suggestions(list.category);
    let header = html! {
        <>
            <i class="fas fa-lightbulb"></i>
            <span>{ format!("{} Suggestions", list.title) }</span>
        </>
    };
    let body = html! {
        <ul
            id={format!("{}-suggestions", list.category.key())}
            class={classes!(if list.is_placeholder { "no-suggestions" } else { "" })}
        >
            { for list.items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
        </ul>
    };
    accordion_item(panel, component.session.is_expanded(panel), header, body, link)
}

fn build_section_panel(
    component: &ResumeAnalyzerComponent,
    section: &SectionPanelVm,
    link: &Scope<ResumeAnalyzerComponent>,
) -> Html {
    let panel = PanelId::Section(section.section);
    let header = html! {
        <>
            <i class={classes!("fas", section.icon)}></i>
            <span>{ section.title }</span>
        </>
    };
    let body = match &section.body {
        SectionBodyVm::Contact(lines) => html! {
            <ul>
                {
                    for lines.iter().map(|line| html! {
                        <li class="contact-line">{ line.text() }</li>
                    })
                }
            </ul>
        },
        SectionBodyVm::Text(text) => html! {
            <p class="section-text" style="white-space: pre-line;">{ text.clone() }</p>
        },
    };
    accordion_item(panel, component.session.is_expanded(panel), header, body, link)
}

/// Collapsible panel; the header toggles only this panel.
fn accordion_item(
    panel: PanelId,
    expanded: bool,
    header: Html,
    body: Html,
    link: &Scope<ResumeAnalyzerComponent>,
) -> Html {
    let active = if expanded { "active" } else { "" };
    html! {
        <div class={classes!("accordion-item", active)}>
            <div
                class={classes!("accordion-header", active)}
                onclick={link.callback(move |_| Msg::TogglePanel(panel))}
            >
                { header }
                <i class="fas fa-chevron-down"></i>
            </div>
            <div class={classes!("accordion-content", active)}>
                { body }
            </div>
        </div>
    }
}
