//! Live Handlers
//!
//! Follow management, profile changes and the version check under `/api/live`.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};

use crate::domain::models::user::Uid;
use crate::infrastructure::driving_adapters::api_rest::dto::account::{
    ChangePasswordParams, UserInfoDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::live::{
    AreaFollowParams, AreaSimpleDto, RoomFollowParams, UidParams, UpdateInfoDto,
};
use crate::infrastructure::driving_adapters::api_rest::extractors::{ValidatedJson, ValidatedParams};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::Envelope;
use crate::shared::errors::ApiError;

/// Payload of a successful follow
pub const FOLLOWED: &str = "关注成功";
/// Payload of a successful unfollow
pub const UNFOLLOWED: &str = "已经取消关注";
/// Payload of a successful password change
pub const PASSWORD_CHANGED: &str = "密码修改成功";

/// Create the router for `/api/live` endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/live/followArea", get(follow_area))
        .route("/api/live/unFollowArea", get(unfollow_area))
        .route("/api/live/getFollowedAreas", get(get_followed_areas))
        .route("/api/live/follow", get(follow_room))
        .route("/api/live/unFollow", get(unfollow_room))
        .route("/api/live/changeUserInfo", post(change_user_info))
        .route("/api/live/changePassword", get(change_password))
        .route("/api/live/versionUpdate", get(version_update))
}

/// GET /api/live/followArea - Follow a content area
#[axum::debug_handler]
async fn follow_area(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<AreaFollowParams>,
) -> Result<Envelope<&'static str>, ApiError> {
    state.follow_area_use_case.execute(params.into()).await?;
    Ok(Envelope::success(FOLLOWED))
}

/// GET /api/live/unFollowArea - Unfollow a content area
#[axum::debug_handler]
async fn unfollow_area(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<AreaFollowParams>,
) -> Result<Envelope<&'static str>, ApiError> {
    state.unfollow_area_use_case.execute(params.into()).await?;
    Ok(Envelope::success(UNFOLLOWED))
}

/// GET /api/live/getFollowedAreas - List followed areas, oldest first
#[axum::debug_handler]
async fn get_followed_areas(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<UidParams>,
) -> Result<Envelope<Vec<AreaSimpleDto>>, ApiError> {
    let areas = state
        .get_followed_areas_use_case
        .execute(&Uid::from(params.uid))
        .await?;

    Ok(Envelope::success(
        areas.into_iter().map(AreaSimpleDto::from).collect(),
    ))
}

/// GET /api/live/follow - Follow a live room
#[axum::debug_handler]
async fn follow_room(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<RoomFollowParams>,
) -> Result<Envelope<&'static str>, ApiError> {
    state.follow_room_use_case.execute(params.into()).await?;
    Ok(Envelope::success(FOLLOWED))
}

/// GET /api/live/unFollow - Unfollow a live room
#[axum::debug_handler]
async fn unfollow_room(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<RoomFollowParams>,
) -> Result<Envelope<&'static str>, ApiError> {
    state.unfollow_room_use_case.execute(params.into()).await?;
    Ok(Envelope::success(UNFOLLOWED))
}

/// POST /api/live/changeUserInfo - Update nickname and ban settings
///
/// # Responses
///
/// * 200 OK, code 200 - Refreshed account record
/// * 400 Bad Request - Malformed JSON or invalid fields
/// * 404 Not Found - "用户不存在"
#[axum::debug_handler]
async fn change_user_info(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UserInfoDto>,
) -> Result<Envelope<UserInfoDto>, ApiError> {
    let (username, changes) = dto.into_changes();
    let account = state
        .change_user_info_use_case
        .execute(&username, changes)
        .await?;

    Ok(Envelope::success(UserInfoDto::from(account)))
}

/// GET /api/live/changePassword - Change password after re-authenticating
///
/// # Responses
///
/// * 200 OK, code 200 - "密码修改成功"
/// * 200 OK, code 400 - "旧密码错误"
#[axum::debug_handler]
async fn change_password(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<ChangePasswordParams>,
) -> Result<Envelope<&'static str>, ApiError> {
    state
        .change_password_use_case
        .execute(&params.user_name, &params.old_password, &params.new_password)
        .await?;

    Ok(Envelope::success(PASSWORD_CHANGED))
}

/// GET /api/live/versionUpdate - Latest Android client release
///
/// Answers a success envelope with `data: null` while nothing is published.
#[axum::debug_handler]
async fn version_update(
    State(state): State<AppState>,
) -> Result<Envelope<Option<UpdateInfoDto>>, ApiError> {
    let release = state.check_update_use_case.execute().await?;
    Ok(Envelope::success(release.map(UpdateInfoDto::from)))
}
