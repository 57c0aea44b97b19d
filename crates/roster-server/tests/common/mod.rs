//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use roster_adapter_memory::MemoryRoster;
use roster_core::{Member, RosterError, RosterSource};
use roster_server::build_router;

/// Two-member roster used by most tests.
pub fn sample_members() -> Vec<Member> {
    vec![Member::new("1", "A"), Member::new("2", "B")]
}

pub fn app_with(source: MemoryRoster) -> Router {
    build_router(Arc::new(source))
}

pub fn sample_app() -> (Router, MemoryRoster) {
    let source = MemoryRoster::from_members(&sample_members());
    (app_with(source.clone()), source)
}

/// Send a bodyless request and decode the JSON envelope.
pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri).await
}

/// Source whose reads always fail, counting attempts.
#[derive(Default)]
pub struct FailingSource {
    pub reads: AtomicUsize,
}

#[async_trait]
impl RosterSource for FailingSource {
    async fn load(&self) -> Result<String, RosterError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(RosterError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        )))
    }
}
