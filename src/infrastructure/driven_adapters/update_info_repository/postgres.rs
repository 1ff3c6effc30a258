//! PostgreSQL Release Metadata Repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::UpdateInfoRepository;
use crate::domain::models::update_info::UpdateInfo;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct UpdateInfoRow {
    version_num: String,
    description: String,
    url: String,
}

impl From<UpdateInfoRow> for UpdateInfo {
    fn from(row: UpdateInfoRow) -> Self {
        Self {
            version_num: row.version_num,
            description: row.description,
            url: row.url,
        }
    }
}

/// PostgreSQL implementation of UpdateInfoRepository
pub struct PostgresUpdateInfoRepository {
    pool: PgPool,
}

impl PostgresUpdateInfoRepository {
    /// Create a new PostgresUpdateInfoRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UpdateInfoRepository for PostgresUpdateInfoRepository {
    async fn find_latest(&self) -> Result<Option<UpdateInfo>, RepositoryError> {
        let row = sqlx::query_as::<_, UpdateInfoRow>(
            r#"
            SELECT version_num, description, url
            FROM app_update_info
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UpdateInfo::from))
    }
}
