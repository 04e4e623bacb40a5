//! Multipart POST to the processing endpoint.

use common::config::FILE_FIELD;
use common::model::upload::{UploadResponse, UploadResponseBody};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::upload::{SubmissionRequest, Transport, UploadError};

/// Sends `campo1..campo6` and the file as one `multipart/form-data` body.
///
/// The response body is decoded whatever the HTTP status: the endpoint
/// reports application errors as JSON with a 4xx status.
#[derive(Clone, Debug)]
pub struct FormTransport {
    endpoint: String,
}

impl FormTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn form_data(request: &SubmissionRequest<File>) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        for (name, value) in request.fields.pairs() {
            form.append_with_str(name, value)?;
        }
        form.append_with_blob_and_filename(FILE_FIELD, &request.file, &request.file.name())?;
        Ok(form)
    }
}

impl Transport<File> for FormTransport {
    async fn send(&self, request: &SubmissionRequest<File>) -> Result<UploadResponse, UploadError> {
        let form = Self::form_data(request)
            .map_err(|e| UploadError::Transport(format!("could not build form: {:?}", e)))?;

        let response = Request::post(&self.endpoint)
            .body(form)
            .map_err(|e| UploadError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let body: UploadResponseBody = response
            .json()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))?;

        body.classify().ok_or(UploadError::Malformed)
    }
}
