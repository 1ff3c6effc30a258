//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde::Deserialize;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use live_companion_api::infrastructure::driven_adapters::database;
use live_companion_api::infrastructure::driven_adapters::{
    PostgresFollowRepository, PostgresUpdateInfoRepository, PostgresUserRepository,
};
use live_companion_api::infrastructure::driving_adapters::api_rest::handlers::accounts;
use live_companion_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let app_state = AppState::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresFollowRepository::new(pool.clone())),
            Arc::new(PostgresUpdateInfoRepository::new(pool.clone())),
        );

        // Build router (without rate limiting for tests)
        let router = build_router(accounts::router(), app_state);

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Send a GET request and decode the envelope
    pub async fn get(&self, uri: &str) -> (StatusCode, Envelope) {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Send a bodiless POST, parameters in the query string
    #[allow(dead_code)]
    pub async fn post(&self, uri: &str) -> (StatusCode, Envelope) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Send a POST with form-encoded parameters and decode the envelope
    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, Envelope) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Send a POST with a JSON body and decode the envelope
    #[allow(dead_code)]
    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Envelope) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Envelope) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    /// Register an account and return its uid
    pub async fn register(&self, username: &str, nickname: &str, password: &str) -> String {
        let (_, envelope) = self
            .post_form(
                "/api/register",
                &format!(
                    "username={}&nickname={}&password={}",
                    urlencoding::encode(username),
                    urlencoding::encode(nickname),
                    urlencoding::encode(password)
                ),
            )
            .await;
        assert_eq!(envelope.code, 200, "registration failed: {}", envelope.message);
        envelope.data["uid"].as_str().unwrap().to_string()
    }

    /// Count rows in a table
    #[allow(dead_code)]
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }

    /// Publish a client release
    #[allow(dead_code)]
    pub async fn publish_release(&self, version_num: &str, description: &str, url: &str) {
        sqlx::query("INSERT INTO app_update_info (version_num, description, url) VALUES ($1, $2, $3)")
            .bind(version_num)
            .bind(description)
            .bind(url)
            .execute(&self.pool)
            .await
            .expect("Failed to insert release");
    }
}

/// Response envelope structure for deserialization
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub code: u16,
    pub message: String,
    pub data: Value,
}
