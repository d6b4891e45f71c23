// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cinema_seasons::CoreError;
use thiserror::Error;

/// Failures talking to the backend.
///
/// Any non-2xx status is a failure; the body of an error response is not
/// interpreted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("Transport failure: {message}")]
    Transport {
        /// The underlying error.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("Backend returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The request body could not be encoded.
    #[error("Failed to encode request: {message}")]
    Encode {
        /// The serializer's message.
        message: String,
    },

    /// The response did not have the expected shape.
    #[error("Malformed backend response: {message}")]
    Decode {
        /// What was wrong with the response.
        message: String,
    },
}

/// Failures surfaced by a workflow session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// The catalog could not be loaded; reopening retries.
    #[error("Failed to load catalog: {0}")]
    LoadFailure(GatewayError),

    /// The backend rejected or never received the submission.
    #[error("Submission failed: {0}")]
    SubmissionFailure(GatewayError),

    /// The wizard rejected an event.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The session has no loaded catalog.
    #[error("Workflow is not ready: no catalog loaded")]
    NotReady,

    /// A result arrived for a workflow instance that has since been reset.
    #[error("Discarded result for generation {ticket}; current generation is {current}")]
    StaleResult {
        /// The generation the result was issued for.
        ticket: u64,
        /// The session's current generation.
        current: u64,
    },
}
