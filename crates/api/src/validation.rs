// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation of backend payloads into a catalog snapshot.
//!
//! The backend's JSON is loosely shaped. Entries that cannot be trusted are
//! quarantined: dropped from the catalog, recorded, and logged, so that the
//! wizard only ever sees well-formed films and seasons.

use crate::error::GatewayError;
use crate::request_response::{ActiveListingsResponse, SeasonsResponse};
use cinema_seasons_domain::{
    Catalog, DateRange, FilmId, FilmListing, Season, SeasonId, SeasonInfo,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Why a backend entry was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuarantineReason {
    /// The entry's key is blank.
    EmptyKey,
    /// A listing is not a JSON object.
    ListingNotObject,
    /// A season is not a JSON object.
    SeasonNotObject,
    /// A season's `season_info` is not a JSON object.
    InfoNotObject,
    /// A season's `films` is not a JSON object.
    FilmsNotObject,
    /// A season's date range could not be parsed; the season is kept
    /// without one.
    InvalidDateRange(String),
    /// The film is already claimed by another season, which keeps it.
    DuplicateMembership {
        /// The season that keeps the film.
        kept: SeasonId,
    },
}

impl std::fmt::Display for QuarantineReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "blank key"),
            Self::ListingNotObject => write!(f, "listing is not an object"),
            Self::SeasonNotObject => write!(f, "season is not an object"),
            Self::InfoNotObject => write!(f, "season_info is not an object"),
            Self::FilmsNotObject => write!(f, "films is not an object"),
            Self::InvalidDateRange(reason) => write!(f, "{reason}"),
            Self::DuplicateMembership { kept } => {
                write!(f, "film already belongs to season '{kept}'")
            }
        }
    }
}

/// A backend entry that was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarantine {
    /// Dotted path to the entry, e.g. `seasons.spring.films.f1`.
    pub entry: String,
    /// Why it was left out.
    pub reason: QuarantineReason,
}

/// A validated catalog together with everything that was left out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    /// The snapshot handed to the wizard.
    pub catalog: Catalog,
    /// Entries that failed validation.
    pub quarantined: Vec<Quarantine>,
}

#[derive(Default)]
struct Quarantined(Vec<Quarantine>);

impl Quarantined {
    fn push(&mut self, entry: String, reason: QuarantineReason) {
        warn!("Quarantined backend entry {}: {}", entry, reason);
        self.0.push(Quarantine { entry, reason });
    }
}

/// Builds a catalog from the two fetch responses.
///
/// When two seasons list the same film, the first season in key order keeps
/// it. Films listed under the reserved unassigned season claim nothing.
///
/// # Arguments
///
/// * `listings` - The active-listings response
/// * `seasons` - The seasons response
///
/// # Errors
///
/// Returns `GatewayError::Decode` if the validated entries still do not form
/// a consistent catalog.
pub fn build_catalog(
    listings: &ActiveListingsResponse,
    seasons: &SeasonsResponse,
) -> Result<LoadedCatalog, GatewayError> {
    let mut quarantined: Quarantined = Quarantined::default();

    let films: Vec<FilmListing> = listings
        .active_listings
        .iter()
        .filter_map(|(key, value)| parse_listing(key, value, &mut quarantined))
        .collect();

    let mut claims: BTreeMap<FilmId, SeasonId> = BTreeMap::new();
    let mut parsed: Vec<(Season, Vec<FilmId>)> = Vec::new();

    for (key, value) in &seasons.seasons {
        let entry: String = format!("seasons.{key}");
        if key.trim().is_empty() {
            quarantined.push(entry, QuarantineReason::EmptyKey);
            continue;
        }
        let Some(object) = value.as_object() else {
            quarantined.push(entry, QuarantineReason::SeasonNotObject);
            continue;
        };

        let id: SeasonId = SeasonId::new(key);
        let info: SeasonInfo = parse_info(&entry, object.get("season_info"), &mut quarantined);

        let mut members: Vec<FilmId> = Vec::new();
        for film_key in film_keys(&entry, object.get("films"), &mut quarantined) {
            let film: FilmId = FilmId::new(&film_key);
            if !id.is_unassigned() {
                if let Some(kept) = claims.get(&film) {
                    quarantined.push(
                        format!("{entry}.films.{film_key}"),
                        QuarantineReason::DuplicateMembership { kept: kept.clone() },
                    );
                    continue;
                }
                claims.insert(film.clone(), id.clone());
            }
            members.push(film);
        }

        parsed.push((Season { id, info }, members));
    }

    let catalog: Catalog = Catalog::new(films, parsed).map_err(|err| GatewayError::Decode {
        message: err.to_string(),
    })?;

    Ok(LoadedCatalog {
        catalog,
        quarantined: quarantined.0,
    })
}

fn parse_listing(key: &str, value: &Value, quarantined: &mut Quarantined) -> Option<FilmListing> {
    let entry: String = format!("active_listings.{key}");
    if key.trim().is_empty() {
        quarantined.push(entry, QuarantineReason::EmptyKey);
        return None;
    }
    let Some(object) = value.as_object() else {
        quarantined.push(entry, QuarantineReason::ListingNotObject);
        return None;
    };

    Some(FilmListing {
        id: FilmId::new(key),
        title: text_field(object, "title"),
        name: text_field(object, "name"),
    })
}

fn parse_info(entry: &str, value: Option<&Value>, quarantined: &mut Quarantined) -> SeasonInfo {
    let object: &Map<String, Value> = match value {
        None | Some(Value::Null) => return SeasonInfo::default(),
        Some(Value::Object(object)) => object,
        Some(_) => {
            quarantined.push(
                format!("{entry}.season_info"),
                QuarantineReason::InfoNotObject,
            );
            return SeasonInfo::default();
        }
    };

    let date_range: Option<DateRange> =
        text_field(object, "season_date_range").and_then(|raw| match DateRange::parse(&raw) {
            Ok(range) => Some(range),
            Err(err) => {
                quarantined.push(
                    format!("{entry}.season_info.season_date_range"),
                    QuarantineReason::InvalidDateRange(err.to_string()),
                );
                None
            }
        });

    SeasonInfo {
        season_name: text_field(object, "season_name"),
        season_group_name: text_field(object, "season_group_name"),
        programmer_name: text_field(object, "programmer_name"),
        date_range,
    }
}

fn film_keys(entry: &str, value: Option<&Value>, quarantined: &mut Quarantined) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Object(films)) => films
            .keys()
            .filter(|key| {
                if key.trim().is_empty() {
                    quarantined.push(format!("{entry}.films.{key}"), QuarantineReason::EmptyKey);
                    return false;
                }
                true
            })
            .cloned()
            .collect(),
        Some(_) => {
            quarantined.push(format!("{entry}.films"), QuarantineReason::FilmsNotObject);
            Vec::new()
        }
    }
}

fn text_field(object: &Map<String, Value>, field: &str) -> Option<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}
