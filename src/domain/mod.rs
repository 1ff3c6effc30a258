//! Domain Layer
//!
//! Contains the core business concepts, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{FollowRepository, UpdateInfoRepository, UserRepository};
pub use models::{
    AreaFollow, AreaSimple, AreaTarget, BanSettings, RegisterUserData, RoomFollow, RoomTarget,
    Uid, UpdateInfo, UserAccount, UserInfoChanges,
};
