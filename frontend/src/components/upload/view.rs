//! View rendering for the upload page.
//!
//! Three regions: the form (drop zone, error panel, fields, submit button),
//! hidden once a result is available, and the download section that replaces
//! it. All texts are Spanish, like the rest of the page.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::browser::files_from_list;
use crate::upload::{mask, max_size_hint, UploadPhase, DETAIL_TITLE};

use super::helpers::suppress_drag;
use super::messages::{FormField, Msg};
use super::state::{RenderState, UploadPage};

pub fn view(component: &UploadPage, ctx: &Context<UploadPage>) -> Html {
    let link = ctx.link();
    let state = component.controller.view();

    html! {
        <div class="upload-root">
            {
                match &state.result {
                    None => build_form(component, ctx),
                    Some(_) => build_download_section(state, link),
                }
            }
        </div>
    }
}

fn build_form(component: &UploadPage, ctx: &Context<UploadPage>) -> Html {
    let link = ctx.link();
    let state = component.controller.view();
    let submitting = component.controller.phase() == UploadPhase::Submitting;

    html! {
        <form
            id="upload-form"
            class="upload-form"
            ref={component.form_ref.clone()}
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            { build_drop_zone(component, ctx, submitting) }
            { build_error_panel(component) }
            <div class="form-fields">
                { for FormField::ALL.iter().map(|field| build_field(*field, state, link, submitting)) }
            </div>
            <button type="submit" class="submit-btn" disabled={submitting}>
                { if submitting { "Procesando..." } else { "Procesar archivo" } }
            </button>
        </form>
    }
}

/// Drop zone wrapping the hidden file input. All four drag events are
/// suppressed; enter/over highlight the zone and leave/drop clear it.
fn build_drop_zone(component: &UploadPage, ctx: &Context<UploadPage>, submitting: bool) -> Html {
    let link = ctx.link();
    let state = component.controller.view();
    let validator = component.controller.validator();

    let on_drag_enter = link.callback(|e: DragEvent| {
        suppress_drag(&e);
        Msg::DragEnter
    });
    let on_drag_over = link.callback(|e: DragEvent| {
        suppress_drag(&e);
        Msg::DragEnter
    });
    let on_drag_leave = link.callback(|e: DragEvent| {
        suppress_drag(&e);
        Msg::DragLeave
    });
    let on_drop = link.callback(|e: DragEvent| {
        suppress_drag(&e);
        Msg::FilesDropped(files_from_list(e.data_transfer().and_then(|dt| dt.files())))
    });
    let on_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FilesSelected(files_from_list(input.files()))
    });

    let accept = validator
        .allowed()
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    html! {
        <div
            id="drop-zone"
            class={classes!(
                "drop-zone",
                state.drop_highlighted.then_some("drag-over"),
                state.file_loaded.then_some("file-loaded")
            )}
            ondragenter={on_drag_enter}
            ondragover={on_drag_over}
            ondragleave={on_drag_leave}
            ondrop={on_drop}
        >
            <input
                type="file"
                id="file"
                name="file"
                accept={accept}
                disabled={submitting}
                ref={component.file_input_ref.clone()}
                onchange={on_change}
            />
            <label for="file" class="drop-label">
                {"Arrastrá tu archivo Excel aquí o hacé clic para seleccionarlo"}
            </label>
            <p class="drop-hint">{ max_size_hint(validator.allowed(), ctx.props().max_file_size) }</p>
            <div id="file-list" class="file-list">{ state.file_list_text.clone() }</div>
        </div>
    }
}

/// Error panel. The container is always mounted so it can be scrolled to.
fn build_error_panel(component: &UploadPage) -> Html {
    let state = component.controller.view();

    let content = match &state.error {
        Some(error) => html! {
            <div class="format-error">
                <div class="error-icon">{"⚠️"}</div>
                <div class="error-content">
                    <div class="error-message">{ error.friendly_message.clone() }</div>
                    {
                        if error.detail_lines.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div class="detailed-errors">
                                    <div class="errors-title">{ DETAIL_TITLE }</div>
                                    <ul class="errors-list">
                                        { for error.detail_lines.iter().map(|line| html! { <li>{ format!("• {}", line) }</li> }) }
                                    </ul>
                                </div>
                            }
                        }
                    }
                </div>
            </div>
        },
        None => html! {},
    };

    html! {
        <div
            id="format-error-container"
            ref={component.error_ref.clone()}
            style={ if state.error.is_some() { "display:block;" } else { "display:none;" } }
        >
            { content }
        </div>
    }
}

/// One labelled text input. Date fields are masked in place on every
/// keystroke, so the DOM never shows unmasked input.
fn build_field(field: FormField, state: &RenderState, link: &Scope<UploadPage>, disabled: bool) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut value = input.value();
        if field.is_date() {
            value = mask(&value);
            input.set_value(&value);
        }
        Msg::FieldInput(field, value)
    });

    html! {
        <div class="form-field">
            <label for={field.name()}>{ field.label() }</label>
            <input
                type="text"
                id={field.name()}
                name={field.name()}
                value={field.value(&state.fields).to_string()}
                placeholder={ if field.is_date() { "DD/MM/AAAA" } else { "" } }
                maxlength={ if field.is_date() { "10" } else { "255" } }
                required=true
                disabled={disabled}
                {oninput}
            />
        </div>
    }
}

fn build_download_section(state: &RenderState, link: &Scope<UploadPage>) -> Html {
    let Some(result) = &state.result else {
        return html! {};
    };

    html! {
        <section id="download-section" class="download-section">
            <h2>{"Archivos generados"}</h2>
            <p>
                {"Archivo procesado: "}
                <strong id="uploaded-file-name">{ result.uploaded_filename.clone() }</strong>
            </p>
            {
                match (&result.summary, result.records_count) {
                    (Some(summary), _) => html! { <p class="summary">{ summary.clone() }</p> },
                    (None, Some(count)) => html! { <p class="summary">{ format!("Se procesaron {} registros.", count) }</p> },
                    (None, None) => html! {},
                }
            }
            <div class="download-links">
                <a id="download-alumnos" class="download-btn" href={result.alumnos_url.clone()}>
                    {"Descargar alumnos"}
                </a>
                <a id="download-notas" class="download-btn" href={result.notas_url.clone()}>
                    {"Descargar notas"}
                </a>
            </div>
            <button id="restart-button" type="button" class="restart-btn" onclick={link.callback(|_| Msg::Restart)}>
                {"Procesar otro archivo"}
            </button>
        </section>
    }
}
