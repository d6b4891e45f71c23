// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Endpoint configuration.

use serde::{Deserialize, Serialize};

/// Names of the backend handlers, dispatched by the `handler` request field.
///
/// Every field defaults to the name the production backend uses, so a
/// partial JSON override only needs to list the handlers it renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerNames {
    /// Active film listings for a cinema.
    pub active_listings: String,
    /// Seasons and their films for a cinema.
    pub seasons: String,
    /// Bulk film-to-season assignment.
    pub assign_films: String,
    /// Moving films from one season to another.
    pub move_films: String,
    /// Season creation.
    pub add_season: String,
    /// Season deletion.
    pub delete_season: String,
    /// Season field edits.
    pub update_season: String,
}

impl Default for HandlerNames {
    fn default() -> Self {
        Self {
            active_listings: String::from("get_cinemas_active_listings"),
            seasons: String::from("get_seasons_for_cinema"),
            assign_films: String::from("assign_films_to_seasons"),
            move_films: String::from("move_films_between_seasons"),
            add_season: String::from("add_season_to_cinema"),
            delete_season: String::from("delete_season_from_cinema"),
            update_season: String::from("update_season_info"),
        }
    }
}

/// Where and how to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// The URL every request is POSTed to.
    pub base_url: String,
    /// Handler names for each operation.
    #[serde(default)]
    pub handlers: HandlerNames,
}

impl EndpointConfig {
    /// Creates a configuration with the default handler names.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            handlers: HandlerNames::default(),
        }
    }

    /// Replaces the handler names.
    #[must_use]
    pub fn with_handlers(mut self, handlers: HandlerNames) -> Self {
        self.handlers = handlers;
        self
    }
}
