//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod follow;
pub mod update_info;
pub mod user;

pub use follow::{AreaFollow, AreaSimple, AreaTarget, RoomFollow, RoomTarget};
pub use update_info::UpdateInfo;
pub use user::{BanSettings, RegisterUserData, Uid, UserAccount, UserInfoChanges};
