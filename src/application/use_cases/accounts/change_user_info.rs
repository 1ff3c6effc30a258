//! Change User Info Use Case
//!
//! Updates the nickname and ban settings of an account, then re-reads it.

use std::sync::Arc;

use crate::application::use_cases::USER_NOT_FOUND;
use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{UserAccount, UserInfoChanges};
use crate::shared::errors::UseCaseError;

/// Use case for updating profile and ban settings
pub struct ChangeUserInfoUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ChangeUserInfoUseCase {
    /// Create a new ChangeUserInfoUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// Both changes are applied atomically by the repository.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no account has this username.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        username: &str,
        changes: UserInfoChanges,
    ) -> Result<UserAccount, UseCaseError> {
        if !self.user_repository.update_info(username, &changes).await? {
            tracing::warn!(username, "User info update failed: account not found");
            return Err(UseCaseError::NotFound(USER_NOT_FOUND.to_string()));
        }

        let refreshed = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UseCaseError::NotFound(USER_NOT_FOUND.to_string()))?;

        tracing::info!(
            username,
            uid = %refreshed.uid(),
            ban_active = refreshed.ban().active,
            "User info updated"
        );
        Ok(refreshed)
    }
}
