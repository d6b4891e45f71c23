// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk-assign wizard transitions.

use crate::tests::helpers::{create_assign_catalog, create_two_season_catalog, drive, start};
use crate::{CoreError, Event, Flavor, Mutation, Step, TransitionResult, WizardState, apply};
use cinema_seasons_domain::{Catalog, DomainError, FilmId, SeasonId};
use std::collections::BTreeMap;

#[test]
fn test_every_film_unassigned_after_open() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = start(Flavor::BulkAssign, &catalog);

    assert_eq!(state.step(), Step::ChooseSeason);
    for listing in catalog.films() {
        assert_eq!(
            state.relation().owner_of(&listing.id),
            Some(&SeasonId::unassigned())
        );
    }
}

#[test]
fn test_next_without_active_season_is_rejected() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = start(Flavor::BulkAssign, &catalog);

    let result: Result<TransitionResult, CoreError> = apply(&catalog, &state, Event::Next);

    assert_eq!(
        result.unwrap_err(),
        CoreError::GuardViolation {
            step: Step::ChooseSeason
        }
    );
    assert_eq!(state.step(), Step::ChooseSeason);
}

#[test]
fn test_unassigned_bucket_cannot_be_active_season() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = start(Flavor::BulkAssign, &catalog);

    let result: Result<TransitionResult, CoreError> =
        apply(&catalog, &state, Event::PickSeason(SeasonId::unassigned()));

    assert!(matches!(
        result.unwrap_err(),
        CoreError::InvalidChoice { .. }
    ));
}

#[test]
fn test_unknown_active_season_is_rejected() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = start(Flavor::BulkAssign, &catalog);

    let result: Result<TransitionResult, CoreError> =
        apply(&catalog, &state, Event::PickSeason(SeasonId::new("winter")));

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::SeasonNotFound(SeasonId::new("winter")))
    );
}

#[test]
fn test_toggle_places_film_in_active_season() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::BulkAssign, &catalog),
        vec![
            Event::PickSeason(SeasonId::new("s1")),
            Event::Next,
            Event::ToggleFilm(FilmId::new("f1")),
        ],
    );

    assert_eq!(state.step(), Step::SelectFilms);
    assert_eq!(
        state.relation().owner_of(&FilmId::new("f1")),
        Some(&SeasonId::new("s1"))
    );
    assert_eq!(
        state.relation().owner_of(&FilmId::new("f2")),
        Some(&SeasonId::unassigned())
    );
}

#[test]
fn test_toggling_twice_restores_previous_owner() {
    let catalog: Catalog = create_assign_catalog();
    let before: WizardState = drive(
        &catalog,
        start(Flavor::BulkAssign, &catalog),
        vec![Event::PickSeason(SeasonId::new("s1")), Event::Next],
    );

    let after: WizardState = drive(
        &catalog,
        before.clone(),
        vec![
            Event::ToggleFilm(FilmId::new("f2")),
            Event::ToggleFilm(FilmId::new("f2")),
        ],
    );

    assert_eq!(after.relation(), before.relation());
}

#[test]
fn test_toggle_steals_film_from_another_season() {
    let catalog: Catalog = create_two_season_catalog();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::BulkAssign, &catalog),
        vec![
            Event::PickSeason(SeasonId::new("s1")),
            Event::Next,
            Event::ToggleFilm(FilmId::new("f1")),
            Event::Back,
            Event::PickSeason(SeasonId::new("s2")),
            Event::Next,
            Event::ToggleFilm(FilmId::new("f1")),
        ],
    );

    assert_eq!(
        state.relation().owner_of(&FilmId::new("f1")),
        Some(&SeasonId::new("s2"))
    );
    assert!(state.relation().bucket(&SeasonId::new("s1")).is_empty());
}

#[test]
fn test_review_reachable_with_nothing_selected() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::BulkAssign, &catalog),
        vec![
            Event::PickSeason(SeasonId::new("s1")),
            Event::Next,
            Event::Next,
        ],
    );

    assert_eq!(state.step(), Step::Review);
    let result: TransitionResult = apply(&catalog, &state, Event::Confirm).unwrap();
    assert_eq!(
        result.outbound,
        Some(Mutation::AssignFilms {
            film_to_season: BTreeMap::new()
        })
    );
}

#[test]
fn test_end_to_end_bulk_assign_payload() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::BulkAssign, &catalog),
        vec![
            Event::PickSeason(SeasonId::new("s1")),
            Event::Next,
            Event::ToggleFilm(FilmId::new("f1")),
            Event::Next,
        ],
    );

    let result: TransitionResult = apply(&catalog, &state, Event::Confirm).unwrap();

    let mut expected: BTreeMap<FilmId, SeasonId> = BTreeMap::new();
    expected.insert(FilmId::new("f1"), SeasonId::new("s1"));
    assert_eq!(
        result.outbound,
        Some(Mutation::AssignFilms {
            film_to_season: expected
        })
    );
    assert!(result.new_state.is_submitting());
}

#[test]
fn test_toggle_unknown_film_is_rejected() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::BulkAssign, &catalog),
        vec![Event::PickSeason(SeasonId::new("s1")), Event::Next],
    );

    let result: Result<TransitionResult, CoreError> =
        apply(&catalog, &state, Event::ToggleFilm(FilmId::new("f9")));

    assert_eq!(
        result.unwrap_err(),
        CoreError::FilmNotSelectable(FilmId::new("f9"))
    );
}

#[test]
fn test_move_only_events_rejected_in_bulk_assign() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = drive(
        &catalog,
        start(Flavor::BulkAssign, &catalog),
        vec![Event::PickSeason(SeasonId::new("s1")), Event::Next],
    );

    for event in [
        Event::SelectAllVisible,
        Event::ClearSelection,
        Event::PickSource(SeasonId::new("s1")),
    ] {
        assert!(matches!(
            apply(&catalog, &state, event).unwrap_err(),
            CoreError::EventNotAllowed {
                step: Step::SelectFilms,
                ..
            }
        ));
    }
}
