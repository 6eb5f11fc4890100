//! Shared helpers for driving the router in-process

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use cafe_api::{AppState, Config, api};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn memory_config(allowed_origins: &[&str]) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        http_port: 0,
        allowed_origins: allowed_origins.iter().map(|o| o.to_string()).collect(),
        max_connections: 1,
    }
}

pub async fn app_with_origins(allowed_origins: &[&str]) -> Router {
    let config = memory_config(allowed_origins);
    let state = AppState::new(&config).await.unwrap();
    api::create_router(state, &config)
}

pub async fn app() -> Router {
    app_with_origins(&[]).await
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        bytes,
    }
}

pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}
