//! Types shared between the upload page and any server implementing the
//! spreadsheet processing endpoint.

pub mod config;
pub mod model;
