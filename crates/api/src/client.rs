// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transport to the backend.

use crate::error::GatewayError;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use tracing::debug;

/// Something that accepts a handler-tagged JSON body and answers with JSON.
///
/// The production implementation is [`LambdaClient`]; tests substitute
/// in-memory doubles.
pub trait Backend: Send + Sync {
    /// Sends one request and waits for its response.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` if the request could not be delivered or the
    /// backend answered with a non-success status.
    fn invoke(&self, body: Value) -> impl Future<Output = Result<Value, GatewayError>> + Send;
}

/// HTTP client for the single POST endpoint the backend exposes.
#[derive(Debug, Clone)]
pub struct LambdaClient {
    base_url: String,
    client: Client,
}

impl LambdaClient {
    /// Creates a client posting to `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::new(),
        }
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Backend for LambdaClient {
    async fn invoke(&self, body: Value) -> Result<Value, GatewayError> {
        let response: reqwest::Response = self
            .client
            .post(&self.base_url)
            .json(&body)
            .send()
            .await
            .map_err(|err| GatewayError::Transport {
                message: err.to_string(),
            })?;

        let status: reqwest::StatusCode = response.status();
        debug!("Backend responded with {}", status);
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let text: String = response
            .text()
            .await
            .map_err(|err| GatewayError::Transport {
                message: err.to_string(),
            })?;

        // Acknowledgements are opaque and need not be JSON
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text)))
    }
}
