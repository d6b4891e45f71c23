// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Move-between wizard transitions.

use crate::tests::helpers::{
    create_move_catalog, drive, film, film_set, films, season, start,
};
use crate::{
    CoreError, Event, Flavor, Mutation, Step, TransitionResult, WizardState, apply,
    valid_destinations, valid_sources,
};
use cinema_seasons_domain::{Catalog, FilmId, SeasonId};
use std::collections::BTreeSet;

fn to_destination_step(catalog: &Catalog, picked: &[&str]) -> WizardState {
    let mut events: Vec<Event> = vec![Event::PickSource(SeasonId::new("s1")), Event::Next];
    events.extend(picked.iter().map(|id| Event::ToggleFilm(FilmId::new(id))));
    events.push(Event::Next);
    drive(catalog, start(Flavor::MoveBetween, catalog), events)
}

#[test]
fn test_sources_are_seasons_holding_films() {
    let catalog: Catalog = create_move_catalog();

    assert_eq!(valid_sources(&catalog), vec![SeasonId::new("s1")]);
}

#[test]
fn test_unassigned_bucket_is_a_source_when_it_holds_films() {
    let catalog: Catalog = Catalog::new(
        vec![film("loose")],
        vec![(season("s1", "Spring"), films(&["f1"]))],
    )
    .unwrap();

    assert_eq!(
        valid_sources(&catalog),
        vec![SeasonId::unassigned(), SeasonId::new("s1")]
    );
}

#[test]
fn test_destinations_exclude_source() {
    let catalog: Catalog = create_move_catalog();

    assert_eq!(
        valid_destinations(&catalog, Some(&SeasonId::new("s1"))),
        vec![SeasonId::unassigned(), SeasonId::new("s2")]
    );
}

#[test]
fn test_empty_season_cannot_be_source() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = start(Flavor::MoveBetween, &catalog);

    assert!(matches!(
        apply(&catalog, &state, Event::PickSource(SeasonId::new("s2"))).unwrap_err(),
        CoreError::InvalidChoice { .. }
    ));
}

#[test]
fn test_next_without_source_is_rejected() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = start(Flavor::MoveBetween, &catalog);

    assert_eq!(
        apply(&catalog, &state, Event::Next).unwrap_err(),
        CoreError::GuardViolation {
            step: Step::ChooseSource
        }
    );
    assert_eq!(state.step(), Step::ChooseSource);
    assert_eq!(state.source(), None);
}

#[test]
fn test_next_without_films_is_rejected() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::MoveBetween, &catalog),
        vec![Event::PickSource(SeasonId::new("s1")), Event::Next],
    );

    assert_eq!(
        apply(&catalog, &state, Event::Next).unwrap_err(),
        CoreError::GuardViolation {
            step: Step::SelectFilms
        }
    );
}

#[test]
fn test_source_cannot_be_destination() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = to_destination_step(&catalog, &["f1"]);

    assert!(matches!(
        apply(&catalog, &state, Event::PickDestination(SeasonId::new("s1"))).unwrap_err(),
        CoreError::InvalidChoice { .. }
    ));
}

#[test]
fn test_next_without_destination_is_rejected() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = to_destination_step(&catalog, &["f1"]);

    assert_eq!(
        apply(&catalog, &state, Event::Next).unwrap_err(),
        CoreError::GuardViolation {
            step: Step::ChooseDestination
        }
    );
}

#[test]
fn test_film_outside_source_cannot_be_toggled() {
    let catalog: Catalog = Catalog::new(
        Vec::new(),
        vec![
            (season("s1", "Spring"), films(&["f1"])),
            (season("s2", "Summer"), films(&["f2"])),
        ],
    )
    .unwrap();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::MoveBetween, &catalog),
        vec![Event::PickSource(SeasonId::new("s1")), Event::Next],
    );

    assert_eq!(
        apply(&catalog, &state, Event::ToggleFilm(FilmId::new("f2"))).unwrap_err(),
        CoreError::FilmNotSelectable(FilmId::new("f2"))
    );
}

#[test]
fn test_toggling_does_not_touch_relation() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::MoveBetween, &catalog),
        vec![
            Event::PickSource(SeasonId::new("s1")),
            Event::Next,
            Event::ToggleFilm(FilmId::new("f1")),
        ],
    );

    assert_eq!(state.chosen_films(), film_set(&["f1"]));
    assert_eq!(
        state.relation().bucket(&SeasonId::new("s1")),
        film_set(&["f1", "f2"])
    );
}

#[test]
fn test_reentering_film_step_clears_picks() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = drive(
        &catalog,
        to_destination_step(&catalog, &["f1", "f2"]),
        vec![
            Event::PickDestination(SeasonId::new("s2")),
            Event::Back,
            Event::Back,
        ],
    );

    assert_eq!(state.step(), Step::ChooseSource);
    assert_eq!(state.source(), Some(&SeasonId::new("s1")));

    let state: WizardState = drive(&catalog, state, vec![Event::Next]);
    assert!(state.chosen_films().is_empty());
}

#[test]
fn test_reentering_destination_step_clears_destination() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = drive(
        &catalog,
        to_destination_step(&catalog, &["f1"]),
        vec![
            Event::PickDestination(SeasonId::new("s2")),
            Event::Back,
            Event::Next,
        ],
    );

    assert_eq!(state.step(), Step::ChooseDestination);
    assert_eq!(state.destination(), None);
    assert_eq!(state.chosen_films(), film_set(&["f1"]));
}

#[test]
fn test_select_all_respects_search() {
    let catalog: Catalog = Catalog::new(
        Vec::new(),
        vec![(season("s1", "Spring"), films(&["alien", "aliens", "heat"]))],
    )
    .unwrap();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::MoveBetween, &catalog),
        vec![
            Event::PickSource(SeasonId::new("s1")),
            Event::Next,
            Event::SetSearch("ALIEN".to_string()),
            Event::SelectAllVisible,
        ],
    );

    assert_eq!(
        state.chosen_films(),
        film_set(&["alien", "aliens"])
    );

    let cleared: WizardState = drive(&catalog, state, vec![Event::ClearSelection]);
    assert!(cleared.chosen_films().is_empty());
}

#[test]
fn test_end_to_end_move() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = drive(
        &catalog,
        to_destination_step(&catalog, &["f1"]),
        vec![Event::PickDestination(SeasonId::new("s2")), Event::Next],
    );

    let result: TransitionResult = apply(&catalog, &state, Event::Confirm).unwrap();
    assert_eq!(
        result.outbound,
        Some(Mutation::MoveFilms {
            source: SeasonId::new("s1"),
            destination: SeasonId::new("s2"),
            films: films(&["f1"]),
        })
    );

    let done: WizardState = drive(&catalog, result.new_state, vec![Event::SubmissionSucceeded]);
    let s1: BTreeSet<FilmId> = done.relation().bucket(&SeasonId::new("s1"));
    let s2: BTreeSet<FilmId> = done.relation().bucket(&SeasonId::new("s2"));
    assert_eq!(s1, film_set(&["f2"]));
    assert_eq!(s2, film_set(&["f1"]));
    assert!(done.is_terminal());
}

#[test]
fn test_move_into_unassigned_bucket() {
    let catalog: Catalog = create_move_catalog();
    let state: WizardState = drive(
        &catalog,
        to_destination_step(&catalog, &["f2"]),
        vec![
            Event::PickDestination(SeasonId::unassigned()),
            Event::Next,
            Event::Confirm,
            Event::SubmissionSucceeded,
        ],
    );

    assert_eq!(
        state.relation().owner_of(&FilmId::new("f2")),
        Some(&SeasonId::unassigned())
    );
}
