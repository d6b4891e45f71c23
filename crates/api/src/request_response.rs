// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire request and response data transfer objects.
//!
//! Requests are flattened into an [`Envelope`] that carries the handler
//! name. Responses are decoded loosely here; their entries are validated
//! separately before anything reaches the wizard.

use cinema_seasons_domain::{Cinema, FilmId, SeasonId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A request body tagged with the handler that should process it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<'a, B> {
    /// The backend handler name.
    pub handler: &'a str,
    /// The handler's fields, merged into the top-level object.
    #[serde(flatten)]
    pub body: B,
}

/// Request naming only the cinema, used by both catalog fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CinemaRequest {
    /// The cinema to read.
    pub cinema_id: Cinema,
}

/// Request to record a bulk assignment.
///
/// Films absent from the map are recorded as unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignFilmsRequest {
    /// The cinema being programmed.
    pub cinema_id: Cinema,
    /// Positive assignments only.
    pub film_to_season_map: BTreeMap<FilmId, SeasonId>,
}

/// Request to move films out of one season and into another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveFilmsRequest {
    /// The cinema being programmed.
    pub cinema_id: Cinema,
    /// The season films leave.
    pub source_season_key: SeasonId,
    /// The season films join.
    pub destination_season_key: SeasonId,
    /// The films to move.
    pub film_keys: Vec<FilmId>,
}

/// Descriptive fields for a new season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonDefinition {
    /// The season's title.
    pub season_name: String,
    /// The programme strand, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_group_name: Option<String>,
    /// Who programmed the season.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programmer_name: Option<String>,
    /// `"start,end"` in ISO dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_date_range: Option<String>,
    /// Image URLs; new seasons start with none.
    pub season_images: Vec<String>,
}

/// Request to add seasons to a cinema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddSeasonRequest {
    /// The cinema being programmed.
    pub cinema_id: Cinema,
    /// New seasons keyed by season identifier.
    pub season_definitions: BTreeMap<SeasonId, SeasonDefinition>,
}

/// Request to delete a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteSeasonRequest {
    /// The cinema being programmed.
    pub cinema_id: Cinema,
    /// The season to delete.
    pub season_key: SeasonId,
}

/// Request to overwrite individual season fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateSeasonRequest {
    /// The cinema being programmed.
    pub cinema_id: Cinema,
    /// The season to edit.
    pub season_key: SeasonId,
    /// Field name to new value.
    pub season_info_updates: Map<String, Value>,
}

/// Response of the active-listings handler.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActiveListingsResponse {
    /// `"ok"` or `"error"`, when the backend reports one.
    #[serde(default)]
    pub status: Option<String>,
    /// Listings keyed by film identifier, not yet validated.
    #[serde(default)]
    pub active_listings: Map<String, Value>,
}

/// Response of the seasons handler.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeasonsResponse {
    /// `"ok"` or `"error"`, when the backend reports one.
    #[serde(default)]
    pub status: Option<String>,
    /// Seasons keyed by season identifier, not yet validated.
    #[serde(default)]
    pub seasons: Map<String, Value>,
}
