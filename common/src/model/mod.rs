pub mod form;
pub mod upload;
