//! Infrastructure Layer
//!
//! Driving adapters (the HTTP gateway) and driven adapters (PostgreSQL
//! repositories, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
