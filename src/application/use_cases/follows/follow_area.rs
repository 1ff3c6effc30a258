//! Follow Area Use Case
//!
//! Records that a user follows a content area.

use std::sync::Arc;

use super::user_missing_or_fault;
use crate::domain::gateways::FollowRepository;
use crate::domain::models::follow::{AreaFollow, AreaTarget};
use crate::shared::errors::UseCaseError;

/// Use case for following a content area
pub struct FollowAreaUseCase {
    follow_repository: Arc<dyn FollowRepository>,
}

impl FollowAreaUseCase {
    /// Create a new FollowAreaUseCase
    #[must_use]
    pub fn new(follow_repository: Arc<dyn FollowRepository>) -> Self {
        Self { follow_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the uid has no account.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, target: AreaTarget) -> Result<(), UseCaseError> {
        let follow = AreaFollow::new(target);
        let created = self
            .follow_repository
            .follow_area(&follow)
            .await
            .map_err(user_missing_or_fault)?;

        let target = follow.target();
        tracing::info!(
            uid = %target.uid,
            area_type = %target.area_type,
            area = %target.area,
            created,
            "Area followed"
        );
        Ok(())
    }
}
