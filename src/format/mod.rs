//! Graph input/output: JSON adjacency files and form-field adapter.

pub mod form;
pub mod json;

pub use form::{adjacency_from_form, parse_form_body};
pub use json::{AdjacencyReader, AdjacencyWriter, FileGraph};
