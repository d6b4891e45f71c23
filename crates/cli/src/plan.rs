// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Translation of command-line requests into wizard events.
//!
//! The command line describes the end result; these functions produce the
//! event sequence a user would click through to reach it.

use cinema_seasons::Event;
use cinema_seasons_domain::{FilmId, SeasonId};
use std::collections::BTreeMap;

/// Films to place into one season, from `--to SEASON=FILM[,FILM...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The target season.
    pub season: SeasonId,
    /// The films to place there.
    pub films: Vec<FilmId>,
}

/// Parses `SEASON=FILM[,FILM...]`.
///
/// # Errors
///
/// Returns a message if the separator is missing or either side is blank.
pub fn parse_placement(raw: &str) -> Result<Placement, String> {
    let (season, films) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SEASON=FILM[,FILM...], got '{raw}'"))?;

    let season: &str = season.trim();
    if season.is_empty() {
        return Err(format!("missing season in '{raw}'"));
    }
    let films: Vec<FilmId> = films
        .split(',')
        .map(str::trim)
        .filter(|film| !film.is_empty())
        .map(FilmId::new)
        .collect();
    if films.is_empty() {
        return Err(format!("no films listed for season '{season}'"));
    }

    Ok(Placement {
        season: SeasonId::new(season),
        films,
    })
}

/// Events that take a fresh bulk-assign wizard to its review step with
/// every placement applied.
///
/// A film named under several seasons ends up in the last one. A film
/// repeated under the same season is toggled only once.
#[must_use]
pub fn assign_events(placements: &[Placement]) -> Vec<Event> {
    let mut placed: BTreeMap<&FilmId, &SeasonId> = BTreeMap::new();
    let mut events: Vec<Event> = Vec::new();

    for placement in placements {
        if !events.is_empty() {
            events.push(Event::Back);
        }
        events.push(Event::PickSeason(placement.season.clone()));
        events.push(Event::Next);
        for film in &placement.films {
            if placed.get(film) == Some(&&placement.season) {
                continue;
            }
            placed.insert(film, &placement.season);
            events.push(Event::ToggleFilm(film.clone()));
        }
    }

    if !events.is_empty() {
        events.push(Event::Next);
    }
    events
}

/// A move requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    /// The season films leave.
    pub from: SeasonId,
    /// The season films join.
    pub to: SeasonId,
    /// Films named explicitly.
    pub films: Vec<FilmId>,
    /// Select every film matching `search` (or every film, without one)
    /// instead of `films`.
    pub all: bool,
    /// Filter applied before selecting all.
    pub search: Option<String>,
}

/// Events that take a fresh move-between wizard to its review step.
#[must_use]
pub fn move_events(plan: &MovePlan) -> Vec<Event> {
    let mut events: Vec<Event> = vec![Event::PickSource(plan.from.clone()), Event::Next];

    if let Some(search) = &plan.search {
        events.push(Event::SetSearch(search.clone()));
    }
    if plan.all {
        events.push(Event::SelectAllVisible);
    } else {
        let mut chosen: Vec<&FilmId> = Vec::new();
        for film in &plan.films {
            if chosen.contains(&film) {
                continue;
            }
            chosen.push(film);
            events.push(Event::ToggleFilm(film.clone()));
        }
    }

    events.push(Event::Next);
    events.push(Event::PickDestination(plan.to.clone()));
    events.push(Event::Next);
    events
}
