// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Boundary between the wizard core and the remote season backend.
//!
//! This crate owns everything that touches the wire: the JSON request and
//! response contract, validation of backend payloads into a [`Catalog`],
//! the HTTP transport, and the workflow session that tags asynchronous
//! results with the generation they belong to.
//!
//! [`Catalog`]: cinema_seasons_domain::Catalog

mod client;
mod config;
mod error;
mod gateway;
mod request_response;
mod validation;
mod workflow;

#[cfg(test)]
mod tests;

pub use client::{Backend, LambdaClient};
pub use config::{EndpointConfig, HandlerNames};
pub use error::{GatewayError, WorkflowError};
pub use gateway::Gateway;
pub use request_response::{
    ActiveListingsResponse, AddSeasonRequest, AssignFilmsRequest, CinemaRequest,
    DeleteSeasonRequest, Envelope, MoveFilmsRequest, SeasonDefinition, SeasonsResponse,
    UpdateSeasonRequest,
};
pub use validation::{LoadedCatalog, Quarantine, QuarantineReason, build_catalog};
pub use workflow::{
    Generation, LoadTicket, Phase, SubmitTicket, WorkflowSession, confirm_and_submit,
    open_and_load,
};
