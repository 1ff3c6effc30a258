//! Live DTOs
//!
//! Parameters and payloads of the `/api/live` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::follow::{AreaSimple, AreaTarget, RoomTarget};
use crate::domain::models::update_info::UpdateInfo;
use crate::domain::models::user::Uid;

/// Parameters of `followArea` and `unFollowArea`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AreaFollowParams {
    #[validate(length(min = 1, max = 64, message = "uid must be between 1 and 64 characters"))]
    pub uid: String,

    #[validate(length(min = 1, max = 64, message = "areaType must be between 1 and 64 characters"))]
    pub area_type: String,

    #[validate(length(min = 1, max = 64, message = "area must be between 1 and 64 characters"))]
    pub area: String,
}

impl From<AreaFollowParams> for AreaTarget {
    fn from(params: AreaFollowParams) -> Self {
        Self {
            uid: Uid::from(params.uid),
            area_type: params.area_type,
            area: params.area,
        }
    }
}

/// Parameters of `follow` and `unFollow`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomFollowParams {
    #[validate(length(min = 1, max = 32, message = "platform must be between 1 and 32 characters"))]
    pub platform: String,

    #[validate(length(min = 1, max = 64, message = "roomId must be between 1 and 64 characters"))]
    pub room_id: String,

    #[validate(length(min = 1, max = 64, message = "uid must be between 1 and 64 characters"))]
    pub uid: String,
}

impl From<RoomFollowParams> for RoomTarget {
    fn from(params: RoomFollowParams) -> Self {
        Self {
            uid: Uid::from(params.uid),
            platform: params.platform,
            room_id: params.room_id,
        }
    }
}

/// Parameters of `getFollowedAreas`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UidParams {
    #[validate(length(min = 1, max = 64, message = "uid must be between 1 and 64 characters"))]
    pub uid: String,
}

/// Followed area summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSimpleDto {
    pub area_type: String,
    pub area_name: String,
}

impl From<AreaSimple> for AreaSimpleDto {
    fn from(area: AreaSimple) -> Self {
        Self {
            area_type: area.area_type,
            area_name: area.area_name,
        }
    }
}

/// Latest client release
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInfoDto {
    pub version_num: String,
    pub description: String,
    pub url: String,
}

impl From<UpdateInfo> for UpdateInfoDto {
    fn from(info: UpdateInfo) -> Self {
        Self {
            version_num: info.version_num,
            description: info.description,
            url: info.url,
        }
    }
}
