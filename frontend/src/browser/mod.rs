//! Browser implementations of the seams used by the `upload` core.

pub mod logger;
pub mod storage;
pub mod transport;

use crate::upload::CandidateFile;

impl CandidateFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Copies a `FileList` (picker or drop) into owned handles, in order.
pub fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}
