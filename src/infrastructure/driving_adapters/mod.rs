//! Driving Adapters
//!
//! Entry points that drive the application. Only the REST API exists today.

pub mod api_rest;
