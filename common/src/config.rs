//! Fixed configuration of the upload workflow.
//!
//! These values are part of the contract with the processing endpoint and with
//! the data the page leaves in browser storage, so they are constants rather
//! than runtime settings.

/// File extensions accepted by the page, lower-case and without the dot.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xls", "xlsx"];

/// Largest upload the endpoint accepts. Only referenced in messaging on the
/// client; enforcement belongs to the server.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Endpoint the form is posted to when no other is configured.
pub const DEFAULT_ENDPOINT: &str = "/";

/// Multipart field carrying the spreadsheet.
pub const FILE_FIELD: &str = "file";

/// Durable storage key holding the JSON snapshot of `campo1..campo4`.
pub const FORM_VALUES_KEY: &str = "formValues";

/// Session storage key flagging "this render follows our own submit".
pub const FORM_SUBMITTED_KEY: &str = "formSubmitted";

/// Value stored under [`FORM_SUBMITTED_KEY`].
pub const FORM_SUBMITTED_VALUE: &str = "true";
