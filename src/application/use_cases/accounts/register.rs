//! Register Use Case
//!
//! Creates a new account after checking the username is free.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{RegisterUserData, UserAccount};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Shown when the requested username is taken
pub const USERNAME_TAKEN: &str = "用户名已存在";

/// Use case for registering a new account
pub struct RegisterUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl RegisterUseCase {
    /// Create a new RegisterUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if the username already exists, including
    /// when a concurrent registration wins the race to insert it.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: RegisterUserData) -> Result<UserAccount, UseCaseError> {
        let username = data.username.clone();

        if self
            .user_repository
            .find_by_username(&username)
            .await?
            .is_some()
        {
            tracing::info!(username = %username, "Registration rejected: username already exists");
            return Err(UseCaseError::Conflict(USERNAME_TAKEN.to_string()));
        }

        let account = UserAccount::new(data);
        let created = match self.user_repository.create(&account).await {
            Ok(created) => created,
            Err(RepositoryError::Conflict(_)) => {
                tracing::info!(username = %username, "Registration rejected: username taken concurrently");
                return Err(UseCaseError::Conflict(USERNAME_TAKEN.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(username = %username, uid = %created.uid(), "Registration succeeded");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::user_repository::MockUserRepository;
    use mockall::predicate::eq;

    fn register_data() -> RegisterUserData {
        RegisterUserData {
            username: "bob".to_string(),
            nickname: "鲍勃".to_string(),
            password: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_account_when_username_is_free() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("bob"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|account| Ok(account.clone()));

        let use_case = RegisterUseCase::new(Arc::new(repo));
        let account = use_case.execute(register_data()).await.unwrap();

        assert_eq!(account.username(), "bob");
        assert_eq!(account.nickname(), "鲍勃");
        assert_eq!(account.password(), "hash");
        assert_eq!(account.uid().as_str().len(), 32);
        assert!(account.uid().as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn should_return_conflict_without_writing_when_username_exists() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(UserAccount::new(register_data()))));
        repo.expect_create().never();

        let use_case = RegisterUseCase::new(Arc::new(repo));
        let result = use_case.execute(register_data()).await;

        match result {
            Err(UseCaseError::Conflict(message)) => assert_eq!(message, "用户名已存在"),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_return_conflict_when_insert_loses_race() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(RepositoryError::Conflict("user_name".to_string())));

        let use_case = RegisterUseCase::new(Arc::new(repo));
        let result = use_case.execute(register_data()).await;

        assert!(matches!(result, Err(UseCaseError::Conflict(_))));
    }
}
