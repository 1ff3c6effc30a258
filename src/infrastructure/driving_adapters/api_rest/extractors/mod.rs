//! Request Extractors
//!
//! Typed decoding of query, form and JSON input, with validation.

mod validated;

pub use validated::{ValidatedJson, ValidatedParams};
