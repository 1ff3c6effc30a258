//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod account;
pub mod live;

pub use account::{ChangePasswordParams, LoginParams, RegisterParams, UserInfoDto};
pub use live::{AreaFollowParams, AreaSimpleDto, RoomFollowParams, UidParams, UpdateInfoDto};
