use crate::app::App;

mod app;
mod components;
mod config;
mod error;

fn main() {
    yew::Renderer::<App>::new().render();
}
