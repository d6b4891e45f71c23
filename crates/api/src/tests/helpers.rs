// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{
    ActiveListingsResponse, Backend, Gateway, GatewayError, HandlerNames, SeasonsResponse,
};
use cinema_seasons_domain::Cinema;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory backend answering each handler with a scripted result.
///
/// Handlers without a script acknowledge with `null`.
#[derive(Default)]
pub struct ScriptedBackend {
    responses: Mutex<HashMap<String, Result<Value, GatewayError>>>,
    requests: Mutex<Vec<Value>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, handler: &str, result: Result<Value, GatewayError>) -> Self {
        self.set_response(handler, result);
        self
    }

    pub fn set_response(&self, handler: &str, result: Result<Value, GatewayError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(handler.to_string(), result);
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_for(&self, handler: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|body| body["handler"] == handler)
            .collect()
    }
}

impl Backend for ScriptedBackend {
    async fn invoke(&self, body: Value) -> Result<Value, GatewayError> {
        let handler: String = body["handler"].as_str().unwrap_or_default().to_string();
        self.requests.lock().unwrap().push(body);
        self.responses
            .lock()
            .unwrap()
            .get(&handler)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    }
}

/// Listings `f1` (titled) and `f2` (named only).
pub fn listings_json() -> Value {
    json!({
        "active_listings": {
            "f1": { "title": "Paris, Texas" },
            "f2": { "name": "Stalker" }
        }
    })
}

/// Seasons `s1` holding `f1` and an empty `s2`.
pub fn seasons_json() -> Value {
    json!({
        "status": "ok",
        "seasons": {
            "s1": {
                "season_info": {
                    "season_name": "Spring",
                    "season_date_range": "2026-03-01,2026-05-31"
                },
                "films": { "f1": { "screen": "1" } }
            },
            "s2": {
                "season_info": { "season_name": "Summer" },
                "films": {}
            }
        }
    })
}

/// Listings `f1`, `f2` and a single empty season `s1`.
pub fn empty_season_json() -> Value {
    json!({
        "seasons": {
            "s1": { "season_info": { "season_name": "Spring" }, "films": {} }
        }
    })
}

pub fn listings(value: Value) -> ActiveListingsResponse {
    serde_json::from_value(value).unwrap()
}

pub fn seasons(value: Value) -> SeasonsResponse {
    serde_json::from_value(value).unwrap()
}

/// A backend that serves the given catalog fetches.
pub fn create_test_backend(seasons: Value) -> ScriptedBackend {
    ScriptedBackend::new()
        .respond("get_cinemas_active_listings", Ok(listings_json()))
        .respond("get_seasons_for_cinema", Ok(seasons))
}

pub fn create_test_gateway(backend: ScriptedBackend) -> Gateway<ScriptedBackend> {
    Gateway::new(backend, HandlerNames::default(), Cinema::CloseUp)
}
