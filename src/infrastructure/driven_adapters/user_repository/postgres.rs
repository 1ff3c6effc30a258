//! PostgreSQL User Repository Implementation
//!
//! Implements the UserRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{BanSettings, Uid, UserAccount, UserInfoChanges};
use crate::shared::errors::RepositoryError;

/// Database row representation for the user_info table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    uid: String,
    user_name: String,
    nick_name: String,
    password: String,
    ban_active: bool,
    all_content: String,
    selected_content: String,
}

impl From<UserRow> for UserAccount {
    fn from(row: UserRow) -> Self {
        UserAccount::restore(
            Uid::from(row.uid),
            row.user_name,
            row.nick_name,
            row.password,
            BanSettings {
                active: row.ban_active,
                all_content: row.all_content,
                selected_content: row.selected_content,
            },
        )
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgresUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT uid, user_name, nick_name, password,
                   ban_active, all_content, selected_content
            FROM user_info
            WHERE user_name = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserAccount::from))
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT uid, user_name, nick_name, password,
                   ban_active, all_content, selected_content
            FROM user_info
            WHERE user_name = $1 AND password = $2
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserAccount::from))
    }

    async fn create(&self, account: &UserAccount) -> Result<UserAccount, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO user_info (
                uid, user_name, nick_name, password,
                ban_active, all_content, selected_content
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING uid, user_name, nick_name, password,
                      ban_active, all_content, selected_content
            "#,
        )
        .bind(account.uid().as_str())
        .bind(account.username())
        .bind(account.nickname())
        .bind(account.password())
        .bind(account.ban().active)
        .bind(&account.ban().all_content)
        .bind(&account.ban().selected_content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::classify(e, format!("user_name {}", account.username())))?;

        Ok(UserAccount::from(row))
    }

    async fn update_info(&self, username: &str, changes: &UserInfoChanges) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let profile = sqlx::query(
            r#"
            UPDATE user_info
            SET nick_name = $2, updated_at = NOW()
            WHERE user_name = $1
            "#,
        )
        .bind(username)
        .bind(&changes.nickname)
        .execute(&mut *tx)
        .await?;

        if profile.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"
            UPDATE user_info
            SET ban_active = $2, all_content = $3, selected_content = $4
            WHERE user_name = $1
            "#,
        )
        .bind(username)
        .bind(changes.ban.active)
        .bind(&changes.ban.all_content)
        .bind(&changes.ban.selected_content)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn update_password(&self, username: &str, password: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE user_info
            SET password = $2, updated_at = NOW()
            WHERE user_name = $1
            "#,
        )
        .bind(username)
        .bind(password)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
