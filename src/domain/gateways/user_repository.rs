//! User Repository Gateway
//!
//! Abstract trait defining the contract for account persistence operations.

use async_trait::async_trait;

use crate::domain::models::user::{UserAccount, UserInfoChanges};
use crate::shared::errors::RepositoryError;

/// Repository trait for account persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by its username
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, RepositoryError>;

    /// Find the account matching both username and (pre-hashed) password
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserAccount>, RepositoryError>;

    /// Persist a new account
    ///
    /// Returns `RepositoryError::Conflict` when the username is already taken.
    async fn create(&self, account: &UserAccount) -> Result<UserAccount, RepositoryError>;

    /// Apply the profile update and the ban update as one atomic change
    ///
    /// Returns `false` if no account has this username.
    async fn update_info(&self, username: &str, changes: &UserInfoChanges) -> Result<bool, RepositoryError>;

    /// Replace the stored password; returns `false` if no account has this username
    async fn update_password(&self, username: &str, password: &str) -> Result<bool, RepositoryError>;
}
