// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::season::Season;
use crate::types::{FilmId, FilmListing, SeasonId};
use std::collections::{BTreeMap, BTreeSet};

/// Read-only snapshot of one cinema's films and seasons.
///
/// A catalog is built once per workflow activation and never mutated.
/// It always contains the reserved unassigned season, and every film
/// referenced by a season is part of the film set. Only films the backend
/// lists as active are offered for bulk assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    films: BTreeMap<FilmId, FilmListing>,
    active: BTreeSet<FilmId>,
    seasons: BTreeMap<SeasonId, Season>,
    /// Backend-recorded owner of each film placed in a real season.
    membership: BTreeMap<FilmId, SeasonId>,
}

impl Catalog {
    /// Builds a catalog from active listings and season memberships.
    ///
    /// Films listed under the reserved unassigned season carry no claim.
    /// Films that only appear inside a season are added with bare listings
    /// and are not active.
    ///
    /// # Arguments
    ///
    /// * `films` - The cinema's active film listings
    /// * `seasons` - Each season with the films the backend records under it
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateMembership` if a film is listed under
    /// two real seasons.
    pub fn new(
        films: Vec<FilmListing>,
        seasons: Vec<(Season, Vec<FilmId>)>,
    ) -> Result<Self, DomainError> {
        let mut film_map: BTreeMap<FilmId, FilmListing> = films
            .into_iter()
            .map(|listing| (listing.id.clone(), listing))
            .collect();
        let active: BTreeSet<FilmId> = film_map.keys().cloned().collect();
        let mut season_map: BTreeMap<SeasonId, Season> = BTreeMap::new();
        let mut membership: BTreeMap<FilmId, SeasonId> = BTreeMap::new();

        for (season, members) in seasons {
            for film in members {
                film_map
                    .entry(film.clone())
                    .or_insert_with(|| FilmListing::bare(film.clone()));

                if season.id.is_unassigned() {
                    continue;
                }
                if let Some(first) = membership.get(&film) {
                    if *first != season.id {
                        return Err(DomainError::DuplicateMembership {
                            film,
                            first: first.clone(),
                            second: season.id,
                        });
                    }
                    continue;
                }
                membership.insert(film, season.id.clone());
            }
            season_map.insert(season.id.clone(), season);
        }

        season_map
            .entry(SeasonId::unassigned())
            .or_insert_with(|| Season::bare(SeasonId::unassigned()));

        Ok(Self {
            films: film_map,
            active,
            seasons: season_map,
            membership,
        })
    }

    /// Returns every film, ordered by identifier.
    pub fn films(&self) -> impl Iterator<Item = &FilmListing> {
        self.films.values()
    }

    /// Returns the films the backend lists as active, ordered by identifier.
    pub fn active_films(&self) -> impl Iterator<Item = &FilmListing> {
        self.films
            .values()
            .filter(|listing| self.active.contains(&listing.id))
    }

    /// Returns whether the backend lists the film as active.
    #[must_use]
    pub fn is_active(&self, film: &FilmId) -> bool {
        self.active.contains(film)
    }

    /// Returns the number of films in the catalog.
    #[must_use]
    pub fn film_count(&self) -> usize {
        self.films.len()
    }

    /// Looks up a film.
    #[must_use]
    pub fn film(&self, film: &FilmId) -> Option<&FilmListing> {
        self.films.get(film)
    }

    /// Returns whether the film is part of the catalog.
    #[must_use]
    pub fn contains_film(&self, film: &FilmId) -> bool {
        self.films.contains_key(film)
    }

    /// Returns the display label for a film, or its identifier if unknown.
    #[must_use]
    pub fn film_label<'a>(&'a self, film: &'a FilmId) -> &'a str {
        self.films
            .get(film)
            .map_or_else(|| film.as_str(), FilmListing::label)
    }

    /// Returns every season, the unassigned bucket first.
    pub fn seasons(&self) -> impl Iterator<Item = &Season> {
        let unassigned = self.seasons.get(&SeasonId::unassigned());
        unassigned
            .into_iter()
            .chain(self.assigned_seasons())
    }

    /// Returns every real season, ordered by identifier.
    pub fn assigned_seasons(&self) -> impl Iterator<Item = &Season> {
        self.seasons.values().filter(|s| !s.id.is_unassigned())
    }

    /// Looks up a season.
    #[must_use]
    pub fn season(&self, season: &SeasonId) -> Option<&Season> {
        self.seasons.get(season)
    }

    /// Returns whether the season is part of the catalog.
    #[must_use]
    pub fn contains_season(&self, season: &SeasonId) -> bool {
        self.seasons.contains_key(season)
    }

    /// Returns the display name for a season, or its identifier if unknown.
    #[must_use]
    pub fn season_name<'a>(&'a self, season: &'a SeasonId) -> &'a str {
        self.seasons
            .get(season)
            .map_or_else(|| season.as_str(), Season::display_name)
    }

    /// Returns the owner the backend recorded for a film at load time.
    ///
    /// Films in no real season are owned by the unassigned bucket.
    #[must_use]
    pub fn initial_owner(&self, film: &FilmId) -> SeasonId {
        self.membership
            .get(film)
            .cloned()
            .unwrap_or_else(SeasonId::unassigned)
    }

    /// Returns the films the backend recorded under a season at load time.
    #[must_use]
    pub fn initial_members(&self, season: &SeasonId) -> BTreeSet<FilmId> {
        self.films
            .keys()
            .filter(|film| self.initial_owner(film) == *season)
            .cloned()
            .collect()
    }

    /// Returns how many films the backend recorded under a season at load time.
    #[must_use]
    pub fn initial_count(&self, season: &SeasonId) -> usize {
        if season.is_unassigned() {
            return self.films.len() - self.membership.len();
        }
        self.membership.values().filter(|s| *s == season).count()
    }
}
