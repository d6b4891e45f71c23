// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_seasons_domain::{FilmId, SeasonId};
use std::collections::BTreeMap;

/// The single outbound change a confirmed wizard asks the backend to apply.
///
/// Each variant maps to exactly one backend call and is applied atomically
/// from the caller's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Record the given film-to-season placements.
    ///
    /// Films absent from the map are unassigned.
    AssignFilms {
        /// Positive placements only.
        film_to_season: BTreeMap<FilmId, SeasonId>,
    },
    /// Move a set of films from one season to another.
    MoveFilms {
        /// The season the films leave.
        source: SeasonId,
        /// The season the films join.
        destination: SeasonId,
        /// The films being moved, ordered by identifier.
        films: Vec<FilmId>,
    },
}

impl Mutation {
    /// Returns how many films the mutation touches.
    #[must_use]
    pub fn film_count(&self) -> usize {
        match self {
            Self::AssignFilms { film_to_season } => film_to_season.len(),
            Self::MoveFilms { films, .. } => films.len(),
        }
    }
}
