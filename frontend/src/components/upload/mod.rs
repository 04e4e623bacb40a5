//! Upload page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! The page logic itself lives in `crate::upload`; this component owns an
//! `UploadController`, forwards DOM events to it as commands, and renders the
//! `RenderState` the controller writes into.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploadPageProps;
pub use state::UploadPage;

impl Component for UploadPage {
    type Message = Msg;
    type Properties = UploadPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.apply_dom_effects();
    }
}
