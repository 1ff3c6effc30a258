//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod follow_repository;
pub mod update_info_repository;
pub mod user_repository;

pub use follow_repository::FollowRepository;
pub use update_info_repository::UpdateInfoRepository;
pub use user_repository::UserRepository;
