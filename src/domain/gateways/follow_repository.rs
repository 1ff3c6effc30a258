//! Follow Repository Gateway
//!
//! Abstract trait defining the contract for room and area follow relations.

use async_trait::async_trait;

use crate::domain::models::follow::{AreaFollow, AreaSimple, AreaTarget, RoomFollow, RoomTarget};
use crate::domain::models::user::Uid;
use crate::shared::errors::RepositoryError;

/// Repository trait for follow relations
///
/// Follow and unfollow are idempotent: the returned flag reports whether the
/// call changed anything. A uid with no account yields `RepositoryError::NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Record a room follow; `false` if it already existed
    async fn follow_room(&self, follow: &RoomFollow) -> Result<bool, RepositoryError>;

    /// Remove a room follow; `false` if it was absent
    async fn unfollow_room(&self, target: &RoomTarget) -> Result<bool, RepositoryError>;

    /// Record an area follow; `false` if it already existed
    async fn follow_area(&self, follow: &AreaFollow) -> Result<bool, RepositoryError>;

    /// Remove an area follow; `false` if it was absent
    async fn unfollow_area(&self, target: &AreaTarget) -> Result<bool, RepositoryError>;

    /// All areas followed by a user, oldest follow first
    async fn find_followed_areas(&self, uid: &Uid) -> Result<Vec<AreaSimple>, RepositoryError>;
}
