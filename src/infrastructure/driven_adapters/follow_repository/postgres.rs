//! PostgreSQL Follow Repository Implementation
//!
//! Room and area follows live in `room_follow` and `area_follow`. Both carry a
//! unique constraint on the relation and a foreign key to `user_info`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::FollowRepository;
use crate::domain::models::follow::{AreaFollow, AreaSimple, AreaTarget, RoomFollow, RoomTarget};
use crate::domain::models::user::Uid;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct AreaRow {
    area_type: String,
    area: String,
}

impl From<AreaRow> for AreaSimple {
    fn from(row: AreaRow) -> Self {
        Self {
            area_type: row.area_type,
            area_name: row.area,
        }
    }
}

/// PostgreSQL implementation of FollowRepository
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    /// Create a new PostgresFollowRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn follow_room(&self, follow: &RoomFollow) -> Result<bool, RepositoryError> {
        let target = follow.target();
        let result = sqlx::query(
            r#"
            INSERT INTO room_follow (uid, platform, room_id, followed_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT ON CONSTRAINT room_follow_unique DO NOTHING
            "#,
        )
        .bind(target.uid.as_str())
        .bind(&target.platform)
        .bind(&target.room_id)
        .bind(follow.followed_at())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::classify(e, format!("user {}", target.uid)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn unfollow_room(&self, target: &RoomTarget) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM room_follow
            WHERE uid = $1 AND platform = $2 AND room_id = $3
            "#,
        )
        .bind(target.uid.as_str())
        .bind(&target.platform)
        .bind(&target.room_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn follow_area(&self, follow: &AreaFollow) -> Result<bool, RepositoryError> {
        let target = follow.target();
        let result = sqlx::query(
            r#"
            INSERT INTO area_follow (uid, area_type, area, followed_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT ON CONSTRAINT area_follow_unique DO NOTHING
            "#,
        )
        .bind(target.uid.as_str())
        .bind(&target.area_type)
        .bind(&target.area)
        .bind(follow.followed_at())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::classify(e, format!("user {}", target.uid)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn unfollow_area(&self, target: &AreaTarget) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM area_follow
            WHERE uid = $1 AND area_type = $2 AND area = $3
            "#,
        )
        .bind(target.uid.as_str())
        .bind(&target.area_type)
        .bind(&target.area)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_followed_areas(&self, uid: &Uid) -> Result<Vec<AreaSimple>, RepositoryError> {
        let rows = sqlx::query_as::<_, AreaRow>(
            r#"
            SELECT area_type, area
            FROM area_follow
            WHERE uid = $1
            ORDER BY followed_at ASC, id ASC
            "#,
        )
        .bind(uid.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AreaSimple::from).collect())
    }
}
