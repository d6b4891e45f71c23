// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The submission gateway: every call the workflow and the season
//! administration commands make to the backend.

use crate::client::Backend;
use crate::config::HandlerNames;
use crate::error::GatewayError;
use crate::request_response::{
    ActiveListingsResponse, AddSeasonRequest, AssignFilmsRequest, CinemaRequest,
    DeleteSeasonRequest, Envelope, MoveFilmsRequest, SeasonDefinition, SeasonsResponse,
    UpdateSeasonRequest,
};
use crate::validation::{LoadedCatalog, build_catalog};
use cinema_seasons::Mutation;
use cinema_seasons_domain::{Cinema, SeasonId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Issues backend calls for one cinema.
///
/// Each method sends exactly one request per backend call and never
/// retries.
#[derive(Debug, Clone)]
pub struct Gateway<B> {
    backend: B,
    handlers: HandlerNames,
    cinema: Cinema,
}

impl<B: Backend> Gateway<B> {
    /// Creates a gateway.
    ///
    /// # Arguments
    ///
    /// * `backend` - The transport
    /// * `handlers` - Handler names to dispatch to
    /// * `cinema` - The cinema every request is scoped to
    #[must_use]
    pub const fn new(backend: B, handlers: HandlerNames, cinema: Cinema) -> Self {
        Self {
            backend,
            handlers,
            cinema,
        }
    }

    /// Returns the cinema requests are scoped to.
    #[must_use]
    pub const fn cinema(&self) -> Cinema {
        self.cinema
    }

    /// Returns the transport.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetches listings and seasons concurrently and validates them into a
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if either fetch fails or its response is malformed.
    /// No partial catalog is produced.
    pub async fn fetch_catalog(&self) -> Result<LoadedCatalog, GatewayError> {
        let request: CinemaRequest = CinemaRequest {
            cinema_id: self.cinema,
        };

        let (listings, seasons): (Value, Value) = tokio::try_join!(
            self.call(&self.handlers.active_listings, request),
            self.call(&self.handlers.seasons, request),
        )?;

        let listings: ActiveListingsResponse = decode(listings)?;
        check_status(listings.status.as_deref())?;
        let seasons: SeasonsResponse = decode(seasons)?;
        check_status(seasons.status.as_deref())?;

        let loaded: LoadedCatalog = build_catalog(&listings, &seasons)?;
        info!(
            "Loaded catalog for {}: {} films, {} seasons, {} entries quarantined",
            self.cinema,
            loaded.catalog.film_count(),
            loaded.catalog.assigned_seasons().count(),
            loaded.quarantined.len()
        );
        Ok(loaded)
    }

    /// Sends a wizard's confirmed mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the request.
    pub async fn submit(&self, mutation: &Mutation) -> Result<Value, GatewayError> {
        let request: Value = self.mutation_request(mutation)?;
        info!(
            "Submitting {} film(s) for {}",
            mutation.film_count(),
            self.cinema
        );
        self.backend.invoke(request).await
    }

    /// Returns the request body a mutation is sent as.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Encode` if the body cannot be serialized.
    pub fn mutation_request(&self, mutation: &Mutation) -> Result<Value, GatewayError> {
        match mutation {
            Mutation::AssignFilms { film_to_season } => envelope(
                &self.handlers.assign_films,
                AssignFilmsRequest {
                    cinema_id: self.cinema,
                    film_to_season_map: film_to_season.clone(),
                },
            ),
            Mutation::MoveFilms {
                source,
                destination,
                films,
            } => envelope(
                &self.handlers.move_films,
                MoveFilmsRequest {
                    cinema_id: self.cinema,
                    source_season_key: source.clone(),
                    destination_season_key: destination.clone(),
                    film_keys: films.clone(),
                },
            ),
        }
    }

    /// Adds a season to the cinema.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the request.
    pub async fn create_season(
        &self,
        key: &SeasonId,
        definition: SeasonDefinition,
    ) -> Result<Value, GatewayError> {
        let mut season_definitions: BTreeMap<SeasonId, SeasonDefinition> = BTreeMap::new();
        season_definitions.insert(key.clone(), definition);
        self.call(
            &self.handlers.add_season,
            AddSeasonRequest {
                cinema_id: self.cinema,
                season_definitions,
            },
        )
        .await
    }

    /// Deletes a season from the cinema.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the request.
    pub async fn delete_season(&self, key: &SeasonId) -> Result<Value, GatewayError> {
        self.call(
            &self.handlers.delete_season,
            DeleteSeasonRequest {
                cinema_id: self.cinema,
                season_key: key.clone(),
            },
        )
        .await
    }

    /// Overwrites individual fields of a season's info.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the request.
    pub async fn update_season(
        &self,
        key: &SeasonId,
        updates: Map<String, Value>,
    ) -> Result<Value, GatewayError> {
        self.call(
            &self.handlers.update_season,
            UpdateSeasonRequest {
                cinema_id: self.cinema,
                season_key: key.clone(),
                season_info_updates: updates,
            },
        )
        .await
    }

    async fn call<T: Serialize>(&self, handler: &str, body: T) -> Result<Value, GatewayError> {
        let request: Value = envelope(handler, body)?;
        debug!("Invoking backend handler {}", handler);
        self.backend.invoke(request).await
    }
}

fn envelope<T: Serialize>(handler: &str, body: T) -> Result<Value, GatewayError> {
    serde_json::to_value(Envelope { handler, body }).map_err(|err| GatewayError::Encode {
        message: err.to_string(),
    })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, GatewayError> {
    serde_json::from_value(value).map_err(|err| GatewayError::Decode {
        message: err.to_string(),
    })
}

fn check_status(status: Option<&str>) -> Result<(), GatewayError> {
    match status {
        Some("error") => Err(GatewayError::Decode {
            message: String::from("backend reported status 'error'"),
        }),
        _ => Ok(()),
    }
}
