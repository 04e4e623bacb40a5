use thiserror::Error;

/// Failure to obtain a structured response from the processing endpoint.
///
/// None of these reach the user verbatim: the controller logs them and shows
/// a single generic message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Transport(String),

    /// The body was not JSON or did not match the expected member types.
    #[error("response body could not be decoded: {0}")]
    Decode(String),

    /// The body decoded but described neither a success nor a failure.
    #[error("response matches neither the success nor the failure shape")]
    Malformed,
}

/// Failure of a browser key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage is not available: {0}")]
    Unavailable(String),

    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to serialize form values: {0}")]
    Serialize(#[from] serde_json::Error),
}
