//! Browser-free core of the upload page.
//!
//! Everything in here is plain Rust: the controller talks to the page through
//! [`UploadView`], to storage through [`KeyValueStore`] and to the network
//! through [`Transport`]. The Yew component and the `browser` adapters plug
//! the real implementations in; tests plug in recording fakes.

mod controller;
mod date_mask;
mod error;
mod error_presenter;
mod persistence;
mod texts;
mod validator;

pub use controller::{
    CandidateFile, SelectedFile, SubmissionRequest, Transport, UploadController, UploadPhase,
    UploadView,
};
pub use date_mask::mask;
pub use error::{StoreError, UploadError};
pub use error_presenter::{present, ErrorPayload};
pub use persistence::{FormFieldPersistence, KeyValueStore, LoadDecision, MemoryStore};
pub use texts::{file_selected_text, max_size_hint, DETAIL_TITLE, NO_FILE_SELECTED};
pub use validator::{FileValidator, Validation};
