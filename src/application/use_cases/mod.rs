//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod accounts;
pub mod follows;
pub mod releases;

pub use accounts::{ChangePasswordUseCase, ChangeUserInfoUseCase, LoginUseCase, RegisterUseCase};
pub use follows::{
    FollowAreaUseCase, FollowRoomUseCase, GetFollowedAreasUseCase, UnfollowAreaUseCase,
    UnfollowRoomUseCase,
};
pub use releases::CheckUpdateUseCase;

/// Shown when an operation targets an account that does not exist
pub const USER_NOT_FOUND: &str = "用户不存在";
