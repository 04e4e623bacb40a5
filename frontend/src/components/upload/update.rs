//! Update function for the upload page.
//!
//! Every message is forwarded to the controller as the matching command. The
//! only asynchronous work is the submission itself: it is spawned on the
//! local executor and comes back as `Msg::SubmissionFinished`.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser::transport::FormTransport;
use crate::upload::Transport;

use super::messages::Msg;
use super::state::UploadPage;

/// Central update function for the component.
///
/// Contract
/// - Forwards `msg` to the matching `UploadController` command; the controller
///   writes its visible effects into the `RenderState`.
/// - `Msg::Submit` spawns the multipart POST against `ctx.props().endpoint` and
///   reports back through `ctx.link()` with `Msg::SubmissionFinished`.
/// - Returns `false` when nothing visible changed (repeated drag-enter, stale
///   submission outcome), `true` otherwise.
pub fn update(component: &mut UploadPage, ctx: &Context<UploadPage>, msg: Msg) -> bool {
    let controller = &mut component.controller;

    match msg {
        Msg::FilesSelected(files) => controller.select_files(files),
        Msg::DragEnter => {
            if controller.view().drop_highlighted {
                return false;
            }
            controller.drag_enter();
        }
        Msg::DragLeave => controller.drag_leave(),
        Msg::FilesDropped(files) => controller.drop_files(files),
        Msg::FieldInput(field, value) => {
            *field.value_mut(&mut controller.view_mut().fields) = value;
        }
        Msg::Submit => {
            let fields = controller.view().fields.clone();
            if let Some(request) = controller.begin_submit(fields) {
                let transport = FormTransport::new(ctx.props().endpoint.to_string());
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = transport.send(&request).await;
                    link.send_message(Msg::SubmissionFinished {
                        id: request.id,
                        outcome,
                    });
                });
            }
        }
        Msg::SubmissionFinished { id, outcome } => {
            if !controller.finish_submit(id, outcome) {
                return false;
            }
        }
        Msg::Restart => {
            controller.restart();
            component.scroll_to_form_pending = true;
        }
    }
    true
}
