//! Follow Relations
//!
//! Links between a user and the live rooms or content areas they follow.

use chrono::{DateTime, Utc};

use super::user::Uid;

/// A live room on a given platform, from one user's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTarget {
    pub uid: Uid,
    pub platform: String,
    pub room_id: String,
}

/// A content area (category) from one user's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaTarget {
    pub uid: Uid,
    pub area_type: String,
    pub area: String,
}

/// A user following a live room
#[derive(Debug, Clone)]
pub struct RoomFollow {
    target: RoomTarget,
    followed_at: DateTime<Utc>,
}

impl RoomFollow {
    #[must_use]
    pub fn new(target: RoomTarget) -> Self {
        Self {
            target,
            followed_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn target(&self) -> &RoomTarget {
        &self.target
    }

    #[must_use]
    pub fn followed_at(&self) -> DateTime<Utc> {
        self.followed_at
    }
}

/// A user following a content area
#[derive(Debug, Clone)]
pub struct AreaFollow {
    target: AreaTarget,
    followed_at: DateTime<Utc>,
}

impl AreaFollow {
    #[must_use]
    pub fn new(target: AreaTarget) -> Self {
        Self {
            target,
            followed_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn target(&self) -> &AreaTarget {
        &self.target
    }

    #[must_use]
    pub fn followed_at(&self) -> DateTime<Utc> {
        self.followed_at
    }
}

/// Summary of a followed area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSimple {
    pub area_type: String,
    pub area_name: String,
}
