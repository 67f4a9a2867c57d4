#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};
use tower::ServiceExt;

use school_api::db::run_migrations;
use school_api::routes::create_router;
use school_api::state::{AppState, Config};

pub const PAGE_SIZE: u32 = 5;

pub struct TestApp {
    pub router: Router,
    _container: ContainerAsync<GenericImage>,
}

/// Spin up a PostgreSQL container, migrate it and build the app router.
pub async fn setup_test_app() -> TestApp {
    let container = GenericImage::new("postgres", "16")
        .with_exposed_port(ContainerPort::Tcp(5432))
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_DB", "school_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let url = format!("postgresql://postgres:postgres@{host}:{port}/school_test");
    let pool = retry_connect(&url).await;
    run_migrations(&pool).await.expect("Failed to run migrations");

    let config = Arc::new(Config {
        database_url: url,
        database_max_connections: 5,
        host: "127.0.0.1".to_string(),
        port: 0,
        page_size: PAGE_SIZE,
        cors_allowed_origins: Vec::new(),
    });

    TestApp {
        router: create_router(AppState::new(pool, config)),
        _container: container,
    }
}

async fn retry_connect(url: &str) -> PgPool {
    for _ in 0..30 {
        if let Ok(pool) = PgPoolOptions::new().max_connections(5).connect(url).await {
            return pool;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    panic!("Failed to connect to test database");
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, &body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, &body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(json_request("PATCH", uri, &body)).await
    }

    pub async fn create_group(&self, name: &str, room_number: &str) -> Value {
        let (status, json) = self
            .post(
                "/api/groups",
                serde_json::json!({ "name": name, "room_number": room_number }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json
    }

    pub async fn create_student(&self, full_name: &str, code: &str, group: Option<&str>) -> Value {
        let (status, json) = self
            .post(
                "/api/students",
                serde_json::json!({
                    "full_name": full_name,
                    "code": code,
                    "email": format!("{}@school.test", code.to_lowercase()),
                    "group": group,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json
    }
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "testserver")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn names(page: &Value, key: &str) -> Vec<String> {
    page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item[key].as_str().unwrap().to_string())
        .collect()
}
