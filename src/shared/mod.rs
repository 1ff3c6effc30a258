//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod envelope;
pub mod errors;

pub use envelope::{Envelope, ResultCode};
pub use errors::{ApiError, RepositoryError, UseCaseError};
