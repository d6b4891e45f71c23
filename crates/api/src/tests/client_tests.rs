// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client tests against an in-process fake backend.

use super::helpers::{listings_json, seasons_json};
use crate::{Backend, Gateway, GatewayError, HandlerNames, LambdaClient, LoadedCatalog};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use cinema_seasons_domain::{Cinema, SeasonId};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Answers each handler with a canned body; unknown handlers get an empty
/// 200 response.
#[derive(Clone)]
struct FakeBackend {
    status: StatusCode,
    replies: Arc<HashMap<String, Value>>,
    seen: Arc<Mutex<Vec<Value>>>,
}

impl FakeBackend {
    fn new(status: StatusCode) -> Self {
        Self {
            status,
            replies: Arc::new(HashMap::new()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn reply(mut self, handler: &str, body: Value) -> Self {
        Arc::make_mut(&mut self.replies).insert(handler.to_string(), body);
        self
    }
}

async fn handle(State(fake): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    let handler: String = body["handler"].as_str().unwrap_or_default().to_string();
    fake.seen.lock().await.push(body);
    match fake.replies.get(&handler) {
        Some(reply) => (fake.status, Json(reply.clone())).into_response(),
        None => fake.status.into_response(),
    }
}

async fn spawn_backend(fake: FakeBackend) -> String {
    let app: Router = Router::new().route("/", post(handle)).with_state(fake);
    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn test_invoke_posts_json_and_decodes_reply() {
    let fake: FakeBackend = FakeBackend::new(StatusCode::OK).reply("ping", json!({ "ok": true }));
    let seen: Arc<Mutex<Vec<Value>>> = Arc::clone(&fake.seen);
    let client: LambdaClient = LambdaClient::new(&spawn_backend(fake).await);

    let reply: Value = client
        .invoke(json!({ "handler": "ping", "cinema_id": "rio" }))
        .await
        .unwrap();

    assert_eq!(reply, json!({ "ok": true }));
    assert_eq!(
        seen.lock().await.clone(),
        vec![json!({ "handler": "ping", "cinema_id": "rio" })]
    );
}

#[tokio::test]
async fn test_empty_success_body_is_an_ack() {
    let client: LambdaClient =
        LambdaClient::new(&spawn_backend(FakeBackend::new(StatusCode::OK)).await);

    let reply: Value = client.invoke(json!({ "handler": "ack" })).await.unwrap();

    assert_eq!(reply, Value::Null);
}

#[tokio::test]
async fn test_non_success_status_is_failure() {
    let fake: FakeBackend = FakeBackend::new(StatusCode::INTERNAL_SERVER_ERROR)
        .reply("ping", json!({ "error": "boom" }));
    let client: LambdaClient = LambdaClient::new(&spawn_backend(fake).await);

    let result: Result<Value, GatewayError> = client.invoke(json!({ "handler": "ping" })).await;

    assert_eq!(result.unwrap_err(), GatewayError::Status { status: 500 });
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    let client: LambdaClient = LambdaClient::new(&format!("http://{addr}/"));

    let result: Result<Value, GatewayError> = client.invoke(json!({ "handler": "ping" })).await;

    assert!(matches!(result, Err(GatewayError::Transport { .. })));
}

#[tokio::test]
async fn test_gateway_loads_catalog_over_http() {
    let fake: FakeBackend = FakeBackend::new(StatusCode::OK)
        .reply("get_cinemas_active_listings", listings_json())
        .reply("get_seasons_for_cinema", seasons_json());
    let url: String = spawn_backend(fake).await;
    let gateway: Gateway<LambdaClient> = Gateway::new(
        LambdaClient::new(&url),
        HandlerNames::default(),
        Cinema::Barbican,
    );

    let loaded: LoadedCatalog = gateway.fetch_catalog().await.unwrap();

    assert_eq!(loaded.catalog.film_count(), 2);
    assert_eq!(loaded.catalog.initial_count(&SeasonId::new("s1")), 1);
}
