//! Component state for the upload page.
//!
//! `RenderState` is the page-side half of the controller: the controller
//! pushes changes into it through `UploadView`, and `view.rs` renders from
//! it. Effects that need the live DOM (clearing the file input, scrolling)
//! are recorded as pending flags and applied after the next render.

use common::model::form::{FormFieldSnapshot, FormFields};
use common::model::upload::UploadSuccess;
use web_sys::{HtmlInputElement, ScrollLogicalPosition};
use yew::prelude::*;

use crate::browser::storage::BrowserStore;
use crate::upload::{
    ErrorPayload, FormFieldPersistence, UploadController, UploadView, NO_FILE_SELECTED,
};

use super::helpers::scroll_into_view;

/// Everything `view.rs` needs to draw the page.
///
/// Written by the controller through [`UploadView`] and, for typed field
/// values, directly by `update` on `Msg::FieldInput`.
///
/// Fields are `pub` because they are read by `view` and `update` modules.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    /// Current values of the six inputs. Dates are stored already masked.
    pub fields: FormFields,

    /// Text under the drop zone: the selected file name or the
    /// "no file" placeholder.
    pub file_list_text: String,

    /// `true` while a drag hovers the drop zone (`drag-over` class).
    pub drop_highlighted: bool,

    /// `true` while a validated file is held (`file-loaded` class).
    pub file_loaded: bool,

    /// Content of the error panel; `None` keeps it hidden.
    pub error: Option<ErrorPayload>,

    /// Processed upload. When `Some`, the form is replaced by the download
    /// section.
    pub result: Option<UploadSuccess>,

    /// The file input must be emptied after the next render.
    pub clear_input_pending: bool,

    /// The error panel must be scrolled into view after the next render.
    pub scroll_to_error_pending: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            fields: FormFields::default(),
            file_list_text: NO_FILE_SELECTED.to_string(),
            drop_highlighted: false,
            file_loaded: false,
            error: None,
            result: None,
            clear_input_pending: false,
            scroll_to_error_pending: false,
        }
    }
}

impl UploadView for RenderState {
    fn set_file_list_text(&mut self, text: &str) {
        self.file_list_text = text.to_string();
    }

    fn set_drop_highlighted(&mut self, highlighted: bool) {
        self.drop_highlighted = highlighted;
    }

    fn set_file_loaded(&mut self, loaded: bool) {
        self.file_loaded = loaded;
    }

    fn clear_file_input(&mut self) {
        self.clear_input_pending = true;
    }

    fn render_error(&mut self, error: Option<&ErrorPayload>) {
        self.scroll_to_error_pending = error.is_some();
        self.error = error.cloned();
    }

    fn render_result(&mut self, result: Option<&UploadSuccess>) {
        self.result = result.cloned();
    }

    fn set_form_fields(&mut self, snapshot: &FormFieldSnapshot) {
        self.fields.apply_snapshot(snapshot);
    }
}

/// Controller over real browser files and storage.
pub type PageController = UploadController<web_sys::File, RenderState, BrowserStore, BrowserStore>;

/// Main state container for the `UploadPage` component.
pub struct UploadPage {
    /// Upload state machine; its view half is the [`RenderState`].
    pub controller: PageController,

    /// Reference to the `<input type="file">` inside the drop zone.
    pub file_input_ref: NodeRef,

    /// Reference to the error panel container.
    pub error_ref: NodeRef,

    /// Reference to the `<form>`, scrolled back into view on restart.
    pub form_ref: NodeRef,

    /// The form must be scrolled back into view after the next render
    /// (set by `Msg::Restart`).
    pub scroll_to_form_pending: bool,
}

impl UploadPage {
    /// Builds the controller over browser storage and runs the load-time
    /// field restore/wipe decision.
    pub fn new() -> Self {
        let persistence = FormFieldPersistence::new(BrowserStore::local(), BrowserStore::session());
        let mut controller = UploadController::new(RenderState::default(), persistence);
        controller.initialize();

        Self {
            controller,
            file_input_ref: NodeRef::default(),
            error_ref: NodeRef::default(),
            form_ref: NodeRef::default(),
            scroll_to_form_pending: false,
        }
    }

    /// Applies the DOM effects requested since the last render.
    pub fn apply_dom_effects(&mut self) {
        let state = self.controller.view_mut();

        if std::mem::take(&mut state.clear_input_pending) {
            if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }

        if std::mem::take(&mut state.scroll_to_error_pending) {
            scroll_into_view(&self.error_ref, ScrollLogicalPosition::Center);
        }

        if std::mem::take(&mut self.scroll_to_form_pending) {
            scroll_into_view(&self.form_ref, ScrollLogicalPosition::Start);
        }
    }
}
