//! Release Metadata Gateway

use async_trait::async_trait;

use crate::domain::models::update_info::UpdateInfo;
use crate::shared::errors::RepositoryError;

/// Read-only access to published client releases
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateInfoRepository: Send + Sync {
    /// The most recently published release, if any
    async fn find_latest(&self) -> Result<Option<UpdateInfo>, RepositoryError>;
}
