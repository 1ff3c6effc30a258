//! Account Handlers
//!
//! Login and registration. Both are public and rate limited in production.

use axum::{extract::State, routing::post, Router};

use crate::domain::models::user::RegisterUserData;
use crate::infrastructure::driving_adapters::api_rest::dto::account::{
    LoginParams, RegisterParams, UserInfoDto,
};
use crate::infrastructure::driving_adapters::api_rest::extractors::ValidatedParams;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::Envelope;
use crate::shared::errors::ApiError;

/// Create the router for account endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/register", post(register))
}

/// POST /api/login - Authenticate with username and pre-hashed password
///
/// # Responses
///
/// * 200 OK, code 200 - Account record
/// * 200 OK, code 400 - "账户密码错误"
/// * 400 Bad Request - Missing or invalid parameters
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<LoginParams>,
) -> Result<Envelope<UserInfoDto>, ApiError> {
    let account = state
        .login_use_case
        .execute(&params.username, &params.password)
        .await?;

    Ok(Envelope::success(UserInfoDto::from(account)))
}

/// POST /api/register - Create a new account
///
/// # Responses
///
/// * 200 OK, code 200 - Created account record with its new uid
/// * 200 OK, code 400 - "用户名已存在"
/// * 400 Bad Request - Missing or invalid parameters
#[axum::debug_handler]
async fn register(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<RegisterParams>,
) -> Result<Envelope<UserInfoDto>, ApiError> {
    let account = state
        .register_use_case
        .execute(RegisterUserData::from(params))
        .await?;

    Ok(Envelope::success(UserInfoDto::from(account)))
}
