//! Check Update Use Case
//!
//! Returns the latest published client release.

use std::sync::Arc;

use crate::domain::gateways::UpdateInfoRepository;
use crate::domain::models::update_info::UpdateInfo;
use crate::shared::errors::UseCaseError;

/// Use case for the app version check
pub struct CheckUpdateUseCase {
    update_info_repository: Arc<dyn UpdateInfoRepository>,
}

impl CheckUpdateUseCase {
    /// Create a new CheckUpdateUseCase
    #[must_use]
    pub fn new(update_info_repository: Arc<dyn UpdateInfoRepository>) -> Self {
        Self {
            update_info_repository,
        }
    }

    /// Execute the use case
    ///
    /// `None` means nothing has been published yet, which clients treat as
    /// "no update available".
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Option<UpdateInfo>, UseCaseError> {
        let release = self.update_info_repository.find_latest().await?;

        match &release {
            Some(info) => tracing::debug!(version = %info.version_num, "Served latest release"),
            None => tracing::debug!("No release published"),
        }
        Ok(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::update_info_repository::MockUpdateInfoRepository;

    fn release() -> UpdateInfo {
        UpdateInfo {
            version_num: "2.3.1".to_string(),
            description: "修复若干问题".to_string(),
            url: "https://example.com/app-2.3.1.apk".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_same_release_on_repeated_calls() {
        let mut repo = MockUpdateInfoRepository::new();
        repo.expect_find_latest()
            .times(2)
            .returning(|| Ok(Some(release())));

        let use_case = CheckUpdateUseCase::new(Arc::new(repo));
        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.unwrap().version_num, "2.3.1");
    }

    #[tokio::test]
    async fn should_return_none_when_nothing_published() {
        let mut repo = MockUpdateInfoRepository::new();
        repo.expect_find_latest().returning(|| Ok(None));

        let use_case = CheckUpdateUseCase::new(Arc::new(repo));

        assert_eq!(use_case.execute().await.unwrap(), None);
    }
}
