// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::error::DomainError;
use crate::types::{FilmId, SeasonId};
use std::collections::{BTreeMap, BTreeSet};

/// Many-to-one mapping of films to the season that owns them.
///
/// Every film the relation was built over has exactly one owner at all
/// times, possibly the unassigned bucket. Ownership only changes through
/// [`Self::relocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRelation {
    owners: BTreeMap<FilmId, SeasonId>,
    seasons: BTreeSet<SeasonId>,
}

impl AssignmentRelation {
    /// Creates a relation with every active film in the unassigned bucket.
    ///
    /// Films known only through a season's membership are left out.
    #[must_use]
    pub fn unassigned(catalog: &Catalog) -> Self {
        Self {
            owners: catalog
                .active_films()
                .map(|listing| (listing.id.clone(), SeasonId::unassigned()))
                .collect(),
            seasons: catalog.seasons().map(|s| s.id.clone()).collect(),
        }
    }

    /// Creates a relation mirroring the memberships the backend reported.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            owners: catalog
                .films()
                .map(|listing| (listing.id.clone(), catalog.initial_owner(&listing.id)))
                .collect(),
            seasons: catalog.seasons().map(|s| s.id.clone()).collect(),
        }
    }

    /// Returns the season that owns a film.
    ///
    /// Returns `None` for films the relation was not built over.
    #[must_use]
    pub fn owner_of(&self, film: &FilmId) -> Option<&SeasonId> {
        self.owners.get(film)
    }

    /// Returns the films currently owned by a season.
    ///
    /// Seasons with no films, including unknown ones, yield an empty set.
    #[must_use]
    pub fn bucket(&self, season: &SeasonId) -> BTreeSet<FilmId> {
        self.owners
            .iter()
            .filter(|(_, owner)| *owner == season)
            .map(|(film, _)| film.clone())
            .collect()
    }

    /// Returns the number of films left in the unassigned bucket.
    #[must_use]
    pub fn unassigned_count(&self) -> usize {
        self.owners.values().filter(|s| s.is_unassigned()).count()
    }

    /// Returns every film with its owner, ordered by film.
    pub fn iter(&self) -> impl Iterator<Item = (&FilmId, &SeasonId)> {
        self.owners.iter()
    }

    /// Returns every season the relation knows about.
    pub fn seasons(&self) -> impl Iterator<Item = &SeasonId> {
        self.seasons.iter()
    }

    /// Moves a film from one season to another.
    ///
    /// No-op when `from == to`. On error the relation is unchanged.
    ///
    /// # Arguments
    ///
    /// * `film` - The film to move
    /// * `from` - The season the caller believes currently owns the film
    /// * `to` - The season that should own the film afterwards
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The film is not part of the relation
    /// - The destination season is unknown
    /// - The film is not currently owned by `from` (`InvariantViolation`)
    pub fn relocate(
        &mut self,
        film: &FilmId,
        from: &SeasonId,
        to: &SeasonId,
    ) -> Result<(), DomainError> {
        let owner: &mut SeasonId = self
            .owners
            .get_mut(film)
            .ok_or_else(|| DomainError::FilmNotFound(film.clone()))?;

        if *owner != *from {
            return Err(DomainError::InvariantViolation {
                film: film.clone(),
                expected: from.clone(),
                actual: owner.clone(),
            });
        }
        if from == to {
            return Ok(());
        }
        if !self.seasons.contains(to) {
            return Err(DomainError::SeasonNotFound(to.clone()));
        }

        *owner = to.clone();
        Ok(())
    }

    /// Produces the film-to-season map the backend records.
    ///
    /// Unassigned films are omitted: absence means "not in any season".
    #[must_use]
    pub fn to_mutation_payload(&self) -> BTreeMap<FilmId, SeasonId> {
        self.owners
            .iter()
            .filter(|(_, owner)| !owner.is_unassigned())
            .map(|(film, owner)| (film.clone(), owner.clone()))
            .collect()
    }
}
