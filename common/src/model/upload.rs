use serde::{Deserialize, Serialize};

/// One entry of the `detailed_errors` list returned by the endpoint.
///
/// The server emits two shapes, sometimes mixed in the same response:
/// already formatted strings, and per-row records keyed by spreadsheet row
/// (`fila`) with the list of problems found on it (`errores`). Anything else
/// is kept as raw JSON so that one odd entry does not make the whole
/// response unreadable; the client skips those when rendering.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum DetailedError {
    Line(String),
    Row { fila: i64, errores: Vec<String> },
    Other(serde_json::Value),
}

/// Response body of the processing endpoint, exactly as it arrives.
///
/// Both outcomes share a single JSON object with optional members, and the
/// HTTP status is not used to tell them apart. Call [`UploadResponseBody::classify`]
/// to turn it into an [`UploadResponse`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UploadResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_errors: Option<Vec<DetailedError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_file_alumnos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_file_notas: Option<String>,
    /// Human readable summary, e.g. "Archivos procesados correctamente...".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_count: Option<u64>,
}

/// Structured outcome of a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadResponse {
    Failure(UploadFailure),
    Success(UploadSuccess),
}

/// Application-level rejection of the upload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFailure {
    pub message: String,
    pub detailed_errors: Vec<DetailedError>,
}

/// The two generated CSV artifacts and the file name the server received.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSuccess {
    pub uploaded_filename: String,
    pub alumnos_url: String,
    pub notas_url: String,
    pub summary: Option<String>,
    pub records_count: Option<u64>,
}

impl UploadResponseBody {
    /// Decides which outcome the body describes.
    ///
    /// A non-empty `error` always wins. Otherwise all three success members
    /// must be present. Returns `None` for bodies that match neither shape.
    pub fn classify(self) -> Option<UploadResponse> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Some(UploadResponse::Failure(UploadFailure {
                message,
                detailed_errors: self.detailed_errors.unwrap_or_default(),
            }));
        }

        match (
            self.uploaded_filename,
            self.processed_file_alumnos,
            self.processed_file_notas,
        ) {
            (Some(uploaded_filename), Some(alumnos_url), Some(notas_url)) => {
                Some(UploadResponse::Success(UploadSuccess {
                    uploaded_filename,
                    alumnos_url,
                    notas_url,
                    summary: self.success,
                    records_count: self.records_count,
                }))
            }
            _ => None,
        }
    }
}

impl From<UploadResponse> for UploadResponseBody {
    fn from(response: UploadResponse) -> Self {
        match response {
            UploadResponse::Failure(failure) => UploadResponseBody {
                error: Some(failure.message),
                detailed_errors: Some(failure.detailed_errors),
                ..Default::default()
            },
            UploadResponse::Success(success) => UploadResponseBody {
                uploaded_filename: Some(success.uploaded_filename),
                processed_file_alumnos: Some(success.alumnos_url),
                processed_file_notas: Some(success.notas_url),
                success: success.summary,
                records_count: success.records_count,
                ..Default::default()
            },
        }
    }
}
