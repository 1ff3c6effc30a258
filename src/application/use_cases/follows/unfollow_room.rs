//! Unfollow Room Use Case

use std::sync::Arc;

use crate::domain::gateways::FollowRepository;
use crate::domain::models::follow::RoomTarget;
use crate::shared::errors::UseCaseError;

/// Use case for unfollowing a live room
pub struct UnfollowRoomUseCase {
    follow_repository: Arc<dyn FollowRepository>,
}

impl UnfollowRoomUseCase {
    /// Create a new UnfollowRoomUseCase
    #[must_use]
    pub fn new(follow_repository: Arc<dyn FollowRepository>) -> Self {
        Self { follow_repository }
    }

    /// Execute the use case
    ///
    /// Unfollowing a room that is not followed succeeds.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, target: RoomTarget) -> Result<(), UseCaseError> {
        let removed = self.follow_repository.unfollow_room(&target).await?;

        tracing::info!(
            uid = %target.uid,
            platform = %target.platform,
            room_id = %target.room_id,
            removed,
            "Room unfollowed"
        );
        Ok(())
    }
}
