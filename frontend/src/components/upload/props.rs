//! Properties of the `UploadPage` component.

use common::config::{DEFAULT_ENDPOINT, MAX_FILE_SIZE};
use yew::prelude::*;

/// Properties accepted by `UploadPage`.
///
/// Lets the embedding page point the form somewhere else than the default
/// endpoint, or advertise a different size limit. Both default to the values
/// in `common::config`.
#[derive(Properties, PartialEq, Clone)]
pub struct UploadPageProps {
    /// URL the multipart form is posted to.
    #[prop_or(AttrValue::Static(DEFAULT_ENDPOINT))]
    pub endpoint: AttrValue,

    /// Size limit shown in the drop zone hint, in bytes. Not enforced here.
    #[prop_or(MAX_FILE_SIZE)]
    pub max_file_size: u64,
}
