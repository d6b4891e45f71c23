// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Event, Flavor, TransitionResult, WizardState, apply};
use cinema_seasons_domain::{Catalog, FilmId, FilmListing, Season, SeasonId, SeasonInfo};
use std::collections::BTreeSet;

pub fn film(id: &str) -> FilmListing {
    FilmListing::bare(FilmId::new(id))
}

pub fn season(id: &str, name: &str) -> Season {
    Season {
        id: SeasonId::new(id),
        info: SeasonInfo {
            season_name: Some(name.to_string()),
            ..SeasonInfo::default()
        },
    }
}

pub fn films(ids: &[&str]) -> Vec<FilmId> {
    ids.iter().map(|id| FilmId::new(id)).collect()
}

pub fn film_set(ids: &[&str]) -> BTreeSet<FilmId> {
    ids.iter().map(|id| FilmId::new(id)).collect()
}

/// Films `f1`, `f2`; one empty season `s1`.
pub fn create_assign_catalog() -> Catalog {
    Catalog::new(
        vec![film("f1"), film("f2")],
        vec![(season("s1", "Spring"), Vec::new())],
    )
    .unwrap()
}

/// Films `f1`..`f3`; seasons `s1`, `s2`, both empty.
pub fn create_two_season_catalog() -> Catalog {
    Catalog::new(
        vec![film("f1"), film("f2"), film("f3")],
        vec![
            (season("s1", "Spring"), Vec::new()),
            (season("s2", "Summer"), Vec::new()),
        ],
    )
    .unwrap()
}

/// Season `s1` holds `f1`, `f2`; season `s2` is empty.
pub fn create_move_catalog() -> Catalog {
    Catalog::new(
        Vec::new(),
        vec![
            (season("s1", "Spring"), films(&["f1", "f2"])),
            (season("s2", "Summer"), Vec::new()),
        ],
    )
    .unwrap()
}

/// Applies each event in order, panicking on the first rejection.
pub fn drive(catalog: &Catalog, state: WizardState, events: Vec<Event>) -> WizardState {
    events.into_iter().fold(state, |state, event| {
        let name: &'static str = event.name();
        let result: TransitionResult = apply(catalog, &state, event)
            .unwrap_or_else(|err| panic!("event {name} rejected: {err}"));
        result.new_state
    })
}

pub fn start(flavor: Flavor, catalog: &Catalog) -> WizardState {
    WizardState::new(flavor, catalog)
}
