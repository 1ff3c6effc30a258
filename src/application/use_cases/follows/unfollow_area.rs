//! Unfollow Area Use Case

use std::sync::Arc;

use crate::domain::gateways::FollowRepository;
use crate::domain::models::follow::AreaTarget;
use crate::shared::errors::UseCaseError;

/// Use case for unfollowing a content area
pub struct UnfollowAreaUseCase {
    follow_repository: Arc<dyn FollowRepository>,
}

impl UnfollowAreaUseCase {
    /// Create a new UnfollowAreaUseCase
    #[must_use]
    pub fn new(follow_repository: Arc<dyn FollowRepository>) -> Self {
        Self { follow_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, target: AreaTarget) -> Result<(), UseCaseError> {
        let removed = self.follow_repository.unfollow_area(&target).await?;

        tracing::info!(
            uid = %target.uid,
            area_type = %target.area_type,
            area = %target.area,
            removed,
            "Area unfollowed"
        );
        Ok(())
    }
}
