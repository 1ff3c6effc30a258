//! Login Use Case
//!
//! Authenticates a user with a username and a client-hashed password.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::UserAccount;
use crate::shared::errors::UseCaseError;

/// Shown when username or password does not match
pub const INVALID_CREDENTIALS: &str = "账户密码错误";

/// Use case for logging a user in
pub struct LoginUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl LoginUseCase {
    /// Create a new LoginUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` if no account matches the credentials.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, username: &str, password: &str) -> Result<UserAccount, UseCaseError> {
        let Some(account) = self
            .user_repository
            .find_by_credentials(username, password)
            .await?
        else {
            tracing::info!(username, "Login rejected: account/password incorrect");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        tracing::info!(username, uid = %account.uid(), "Login succeeded");
        Ok(account)
    }
}
