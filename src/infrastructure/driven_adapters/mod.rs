//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod follow_repository;
pub mod update_info_repository;
pub mod user_repository;

pub use config::AppConfig;
pub use follow_repository::PostgresFollowRepository;
pub use update_info_repository::PostgresUpdateInfoRepository;
pub use user_repository::PostgresUserRepository;
