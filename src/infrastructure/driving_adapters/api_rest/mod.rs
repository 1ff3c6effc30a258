//! REST API Module
//!
//! Contains HTTP handlers, DTOs, extractors and middleware for the REST API.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod rate_limit;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    ChangePasswordUseCase, ChangeUserInfoUseCase, CheckUpdateUseCase, FollowAreaUseCase,
    FollowRoomUseCase, GetFollowedAreasUseCase, LoginUseCase, RegisterUseCase,
    UnfollowAreaUseCase, UnfollowRoomUseCase,
};
use crate::domain::gateways::{FollowRepository, UpdateInfoRepository, UserRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub login_use_case: Arc<LoginUseCase>,
    pub register_use_case: Arc<RegisterUseCase>,
    pub change_user_info_use_case: Arc<ChangeUserInfoUseCase>,
    pub change_password_use_case: Arc<ChangePasswordUseCase>,
    pub follow_room_use_case: Arc<FollowRoomUseCase>,
    pub unfollow_room_use_case: Arc<UnfollowRoomUseCase>,
    pub follow_area_use_case: Arc<FollowAreaUseCase>,
    pub unfollow_area_use_case: Arc<UnfollowAreaUseCase>,
    pub get_followed_areas_use_case: Arc<GetFollowedAreasUseCase>,
    pub check_update_use_case: Arc<CheckUpdateUseCase>,
}

impl AppState {
    /// Wire every use case to the given collaborators
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        follow_repository: Arc<dyn FollowRepository>,
        update_info_repository: Arc<dyn UpdateInfoRepository>,
    ) -> Self {
        Self {
            login_use_case: Arc::new(LoginUseCase::new(user_repository.clone())),
            register_use_case: Arc::new(RegisterUseCase::new(user_repository.clone())),
            change_user_info_use_case: Arc::new(ChangeUserInfoUseCase::new(user_repository.clone())),
            change_password_use_case: Arc::new(ChangePasswordUseCase::new(user_repository)),
            follow_room_use_case: Arc::new(FollowRoomUseCase::new(follow_repository.clone())),
            unfollow_room_use_case: Arc::new(UnfollowRoomUseCase::new(follow_repository.clone())),
            follow_area_use_case: Arc::new(FollowAreaUseCase::new(follow_repository.clone())),
            unfollow_area_use_case: Arc::new(UnfollowAreaUseCase::new(follow_repository.clone())),
            get_followed_areas_use_case: Arc::new(GetFollowedAreasUseCase::new(follow_repository)),
            check_update_use_case: Arc::new(CheckUpdateUseCase::new(update_info_repository)),
        }
    }
}

/// Assemble the full API
///
/// `accounts` is taken pre-built so the caller can wrap the login and
/// register routes in a rate limiter.
pub fn build_router(accounts: Router<AppState>, state: AppState) -> Router {
    Router::new()
        .merge(accounts)
        .merge(handlers::live::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
