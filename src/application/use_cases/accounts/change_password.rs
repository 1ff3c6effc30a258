//! Change Password Use Case
//!
//! Re-authenticates with the old password before storing a new one.

use std::sync::Arc;

use crate::application::use_cases::USER_NOT_FOUND;
use crate::domain::gateways::UserRepository;
use crate::shared::errors::UseCaseError;

/// Shown when the old password does not match
pub const OLD_PASSWORD_INCORRECT: &str = "旧密码错误";

/// Use case for changing an account password
pub struct ChangePasswordUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ChangePasswordUseCase {
    /// Create a new ChangePasswordUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` if the old password is wrong; the
    /// stored password is left untouched.
    /// Returns `UseCaseError::NotFound` if the account vanished between checks.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), UseCaseError> {
        if self
            .user_repository
            .find_by_credentials(username, old_password)
            .await?
            .is_none()
        {
            tracing::info!(username, "Password change rejected: old password incorrect");
            return Err(UseCaseError::Unauthorized(OLD_PASSWORD_INCORRECT.to_string()));
        }

        if !self
            .user_repository
            .update_password(username, new_password)
            .await?
        {
            tracing::warn!(username, "Password change failed: account not found");
            return Err(UseCaseError::NotFound(USER_NOT_FOUND.to_string()));
        }

        tracing::info!(username, "Password changed");
        Ok(())
    }
}
