use crate::app::App;

mod app;
mod browser;
mod components;
mod upload;

fn main() {
    browser::logger::init();
    yew::Renderer::<App>::new().render();
}
