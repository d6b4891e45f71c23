// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque film identifier, unique within one cinema's catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(String);

impl FilmId {
    /// Creates a new `FilmId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FilmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilmId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Opaque season identifier.
///
/// The reserved key [`SeasonId::UNASSIGNED_KEY`] denotes "not in any season".
/// It always exists in a catalog, whether or not the backend lists it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(String);

impl SeasonId {
    /// Wire key of the reserved unassigned bucket.
    pub const UNASSIGNED_KEY: &'static str = "season_none";

    /// Creates a new `SeasonId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the reserved unassigned season.
    #[must_use]
    pub fn unassigned() -> Self {
        Self(String::from(Self::UNASSIGNED_KEY))
    }

    /// Returns whether this is the reserved unassigned season.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.0 == Self::UNASSIGNED_KEY
    }

    /// Returns the identifier as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeasonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeasonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The cinemas whose programming the backend manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Cinema {
    /// The Castle Cinema.
    Castle,
    /// The Prince Charles Cinema.
    PrinceCharles,
    /// The Nickel.
    Nickel,
    /// Close-Up Film Centre.
    #[default]
    CloseUp,
    /// Institute of Contemporary Arts.
    Ica,
    /// Rio Cinema.
    Rio,
    /// The Garden Cinema.
    GardenCinema,
    /// Regent Street Cinema.
    RegentStreet,
    /// The Cinema Museum.
    TheCinemaMuseum,
    /// Barbican Cinema.
    Barbican,
    /// BFI Southbank.
    BfiSouthbank,
    /// Ciné Lumière.
    CineLumiere,
}

impl Cinema {
    /// Every supported cinema, in menu order.
    pub const ALL: [Self; 12] = [
        Self::Castle,
        Self::PrinceCharles,
        Self::Nickel,
        Self::CloseUp,
        Self::Ica,
        Self::Rio,
        Self::GardenCinema,
        Self::RegentStreet,
        Self::TheCinemaMuseum,
        Self::Barbican,
        Self::BfiSouthbank,
        Self::CineLumiere,
    ];

    /// Returns the `cinema_id` value used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Castle => "castle",
            Self::PrinceCharles => "prince_charles",
            Self::Nickel => "nickel",
            Self::CloseUp => "close_up",
            Self::Ica => "ica",
            Self::Rio => "rio",
            Self::GardenCinema => "garden_cinema",
            Self::RegentStreet => "regent_street",
            Self::TheCinemaMuseum => "the_cinema_museum",
            Self::Barbican => "barbican",
            Self::BfiSouthbank => "bfi_southbank",
            Self::CineLumiere => "cine_lumiere",
        }
    }

    /// Returns the human-readable cinema name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Castle => "Castle",
            Self::PrinceCharles => "Prince Charles",
            Self::Nickel => "Nickel",
            Self::CloseUp => "Close-Up",
            Self::Ica => "ICA",
            Self::Rio => "Rio",
            Self::GardenCinema => "Garden Cinema",
            Self::RegentStreet => "Regent Street",
            Self::TheCinemaMuseum => "Cinema Museum",
            Self::Barbican => "Barbican",
            Self::BfiSouthbank => "BFI Southbank",
            Self::CineLumiere => "Ciné Lumière",
        }
    }
}

impl FromStr for Cinema {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cinema| cinema.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCinema(s.to_string()))
    }
}

impl std::fmt::Display for Cinema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A film as shown in pickers and reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmListing {
    /// The film identifier.
    pub id: FilmId,
    /// Preferred display title.
    pub title: Option<String>,
    /// Fallback display name.
    pub name: Option<String>,
}

impl FilmListing {
    /// Creates a listing with no display metadata.
    #[must_use]
    pub const fn bare(id: FilmId) -> Self {
        Self {
            id,
            title: None,
            name: None,
        }
    }

    /// Returns the display label: title, else name, else the identifier.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }
}
