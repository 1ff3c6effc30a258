//! HTTP Handlers

pub mod accounts;
pub mod live;
