//! Live Companion API
//!
//! Account, follow and version-check backend for a live-streaming companion
//! app, laid out along Clean/Hexagonal Architecture lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
