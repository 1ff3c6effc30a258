//! Rate Limiting
//!
//! Per-peer-IP throttling for the credential endpoints. Rejections are
//! answered with the regular envelope so clients can show the message.

use std::sync::Arc;

use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use governor::middleware::NoOpMiddleware;
use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::{GovernorError, GovernorLayer};

use crate::infrastructure::driven_adapters::config::RateLimitConfig;
use crate::shared::envelope::{Envelope, ResultCode};
use crate::shared::errors::INTERNAL_ERROR_MESSAGE;

use super::AppState;

/// Shown when a client exceeds its quota
pub const TOO_MANY_REQUESTS: &str = "请求过于频繁，请稍后再试";

/// Limiter keyed by peer IP
pub type AccountRateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Build the limiter from configuration
///
/// Returns `None` if the interval or the burst size is zero.
#[must_use]
pub fn governor_config(settings: &RateLimitConfig) -> Option<Arc<AccountRateLimit>> {
    GovernorConfigBuilder::default()
        .per_second(settings.replenish_interval_secs)
        .burst_size(settings.burst_size)
        .error_handler(rejection_response)
        .finish()
        .map(Arc::new)
}

/// Put every route of `router` behind the shared quota
pub fn rate_limited(router: Router<AppState>, config: Arc<AccountRateLimit>) -> Router<AppState> {
    router.layer(GovernorLayer { config })
}

fn rejection_response(error: GovernorError) -> Response {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            tracing::warn!(wait_time, "Rate limit exceeded");
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Envelope::fail(ResultCode::Fail, TOO_MANY_REQUESTS),
            )
                .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(wait_time));
            response
        }
        GovernorError::UnableToExtractKey => {
            tracing::error!("Rate limiter could not resolve the peer address");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::fail(ResultCode::InternalServerError, INTERNAL_ERROR_MESSAGE),
            )
                .into_response()
        }
        GovernorError::Other { code, msg, headers } => {
            let mut response = (
                code,
                Envelope::fail(ResultCode::Fail, msg.unwrap_or_else(|| TOO_MANY_REQUESTS.to_string())),
            )
                .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{header, Method, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::gateways::follow_repository::MockFollowRepository;
    use crate::domain::gateways::update_info_repository::MockUpdateInfoRepository;
    use crate::domain::gateways::user_repository::MockUserRepository;
    use crate::domain::models::user::{RegisterUserData, UserAccount};
    use crate::infrastructure::driving_adapters::api_rest::handlers::accounts;
    use crate::infrastructure::driving_adapters::api_rest::build_router;
    use crate::shared::envelope::JSON_UTF8;

    fn settings(burst_size: u32) -> RateLimitConfig {
        RateLimitConfig {
            replenish_interval_secs: 60,
            burst_size,
        }
    }

    fn app(users: MockUserRepository, burst_size: u32) -> axum::Router {
        let state = AppState::new(
            Arc::new(users),
            Arc::new(MockFollowRepository::new()),
            Arc::new(MockUpdateInfoRepository::new()),
        );
        let config = governor_config(&settings(burst_size)).unwrap();
        build_router(rate_limited(accounts::router(), config), state)
    }

    fn login_from(peer: &str) -> Request<Body> {
        let addr: SocketAddr = peer.parse().unwrap();
        Request::builder()
            .method(Method::POST)
            .uri("/api/login?username=alice&password=hash")
            .extension(ConnectInfo(addr))
            .body(Body::empty())
            .unwrap()
    }

    fn alice() -> UserAccount {
        UserAccount::new(RegisterUserData {
            username: "alice".to_string(),
            nickname: "Alice".to_string(),
            password: "hash".to_string(),
        })
    }

    #[test]
    fn test_zero_burst_is_rejected() {
        assert!(governor_config(&settings(0)).is_none());
    }

    #[tokio::test]
    async fn test_exceeding_quota_answers_envelope_with_429() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_credentials()
            .times(1)
            .returning(|_, _| Ok(Some(alice())));
        let app = app(users, 1);

        let first = app.clone().oneshot(login_from("10.0.0.1:5000")).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app.oneshot(login_from("10.0.0.1:5001")).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(second.headers().get(header::CONTENT_TYPE).unwrap(), JSON_UTF8);
        assert!(second.headers().contains_key(RETRY_AFTER));

        let body = axum::body::to_bytes(second.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 400);
        assert_eq!(json["message"], TOO_MANY_REQUESTS);
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_quota_is_tracked_per_peer() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_credentials()
            .times(2)
            .returning(|_, _| Ok(Some(alice())));
        let app = app(users, 1);

        let first = app.clone().oneshot(login_from("10.0.0.1:5000")).await.unwrap();
        let other = app.oneshot(login_from("10.0.0.2:5000")).await.unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(other.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_live_routes_are_not_limited() {
        let mut releases = MockUpdateInfoRepository::new();
        releases.expect_find_latest().times(2).returning(|| Ok(None));
        let state = AppState::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockFollowRepository::new()),
            Arc::new(releases),
        );
        let config = governor_config(&settings(1)).unwrap();
        let app = build_router(rate_limited(accounts::router(), config), state);

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/live/versionUpdate")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
