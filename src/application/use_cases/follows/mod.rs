//! Follow Use Cases
//!
//! Following and unfollowing live rooms and content areas.

mod follow_area;
mod follow_room;
mod get_followed_areas;
mod unfollow_area;
mod unfollow_room;

pub use follow_area::FollowAreaUseCase;
pub use follow_room::FollowRoomUseCase;
pub use get_followed_areas::GetFollowedAreasUseCase;
pub use unfollow_area::UnfollowAreaUseCase;
pub use unfollow_room::UnfollowRoomUseCase;

use crate::application::use_cases::USER_NOT_FOUND;
use crate::shared::errors::{RepositoryError, UseCaseError};

/// A missing account surfaces as a not-found failure; anything else is a fault
fn user_missing_or_fault(err: RepositoryError) -> UseCaseError {
    match err {
        RepositoryError::NotFound(_) => UseCaseError::NotFound(USER_NOT_FOUND.to_string()),
        other => UseCaseError::Repository(other),
    }
}
