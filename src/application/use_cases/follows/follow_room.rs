//! Follow Room Use Case
//!
//! Records that a user follows a live room.

use std::sync::Arc;

use super::user_missing_or_fault;
use crate::domain::gateways::FollowRepository;
use crate::domain::models::follow::{RoomFollow, RoomTarget};
use crate::shared::errors::UseCaseError;

/// Use case for following a live room
pub struct FollowRoomUseCase {
    follow_repository: Arc<dyn FollowRepository>,
}

impl FollowRoomUseCase {
    /// Create a new FollowRoomUseCase
    #[must_use]
    pub fn new(follow_repository: Arc<dyn FollowRepository>) -> Self {
        Self { follow_repository }
    }

    /// Execute the use case
    ///
    /// Following an already followed room succeeds without duplicating it.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the uid has no account.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, target: RoomTarget) -> Result<(), UseCaseError> {
        let follow = RoomFollow::new(target);
        let created = self
            .follow_repository
            .follow_room(&follow)
            .await
            .map_err(user_missing_or_fault)?;

        let target = follow.target();
        tracing::info!(
            uid = %target.uid,
            platform = %target.platform,
            room_id = %target.room_id,
            created,
            "Room followed"
        );
        Ok(())
    }
}
