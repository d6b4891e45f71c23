// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_assign_catalog, create_move_catalog, drive, start};
use crate::{
    CoreError, Event, Flavor, Mutation, Step, SubmissionStatus, TransitionResult, WizardState,
    apply, can_confirm,
};
use cinema_seasons_domain::{Catalog, FilmId, SeasonId};

fn submitted_assign(catalog: &Catalog) -> (WizardState, Mutation) {
    let review: WizardState = drive(
        catalog,
        start(Flavor::BulkAssign, catalog),
        vec![
            Event::PickSeason(SeasonId::new("s1")),
            Event::Next,
            Event::ToggleFilm(FilmId::new("f1")),
            Event::Next,
        ],
    );
    let result: TransitionResult = apply(catalog, &review, Event::Confirm).unwrap();
    (result.new_state, result.outbound.unwrap())
}

#[test]
fn test_confirm_marks_submission_in_flight() {
    let catalog: Catalog = create_assign_catalog();
    let (state, mutation): (WizardState, Mutation) = submitted_assign(&catalog);

    assert!(state.is_submitting());
    assert!(!can_confirm(&state));
    assert!(matches!(
        state.submission(),
        SubmissionStatus::InFlight { mutation: sent, .. } if *sent == mutation
    ));
}

#[test]
fn test_edits_locked_while_in_flight() {
    let catalog: Catalog = create_assign_catalog();
    let (state, _): (WizardState, Mutation) = submitted_assign(&catalog);

    for event in [
        Event::Confirm,
        Event::Back,
        Event::DismissError,
        Event::ToggleFilm(FilmId::new("f2")),
    ] {
        assert_eq!(
            apply(&catalog, &state, event).unwrap_err(),
            CoreError::SubmissionInFlight
        );
    }
}

#[test]
fn test_failure_keeps_relation_and_allows_retry() {
    let catalog: Catalog = create_assign_catalog();
    let (state, first): (WizardState, Mutation) = submitted_assign(&catalog);
    let before: WizardState = state.clone();

    let failed: WizardState = drive(
        &catalog,
        state,
        vec![Event::SubmissionFailed {
            message: "503 Service Unavailable".to_string(),
        }],
    );

    assert!(!failed.is_submitting());
    assert_eq!(failed.error_message(), Some("503 Service Unavailable"));
    assert_eq!(failed.relation(), before.relation());
    assert_eq!(failed.selection(), before.selection());
    assert!(can_confirm(&failed));

    let retry: TransitionResult = apply(&catalog, &failed, Event::Confirm).unwrap();
    assert_eq!(retry.outbound, Some(first));
}

#[test]
fn test_dismiss_clears_failure_message() {
    let catalog: Catalog = create_assign_catalog();
    let (state, _): (WizardState, Mutation) = submitted_assign(&catalog);

    let dismissed: WizardState = drive(
        &catalog,
        state,
        vec![
            Event::SubmissionFailed {
                message: "timeout".to_string(),
            },
            Event::DismissError,
        ],
    );

    assert_eq!(dismissed.error_message(), None);
    assert_eq!(dismissed.submission(), &SubmissionStatus::Idle);
}

#[test]
fn test_leaving_review_clears_failure_message() {
    let catalog: Catalog = create_assign_catalog();
    let (state, _): (WizardState, Mutation) = submitted_assign(&catalog);

    let failed: WizardState = drive(
        &catalog,
        state,
        vec![Event::SubmissionFailed {
            message: "HTTP 500".to_string(),
        }],
    );
    let back: WizardState = drive(&catalog, failed.clone(), vec![Event::Back]);

    assert_eq!(back.step(), Step::SelectFilms);
    assert_eq!(back.error_message(), None);
    assert_eq!(back.submission(), &SubmissionStatus::Idle);
    assert_eq!(back.relation(), failed.relation());

    let first_step: WizardState = drive(&catalog, back, vec![Event::Back]);
    assert_eq!(first_step.step(), Step::ChooseSeason);
    assert_eq!(first_step.error_message(), None);
}

#[test]
fn test_result_without_submission_is_rejected() {
    let catalog: Catalog = create_assign_catalog();
    let state: WizardState = start(Flavor::BulkAssign, &catalog);

    assert_eq!(
        apply(&catalog, &state, Event::SubmissionSucceeded).unwrap_err(),
        CoreError::NoSubmissionInFlight
    );
    assert_eq!(
        apply(
            &catalog,
            &state,
            Event::SubmissionFailed {
                message: "late".to_string()
            }
        )
        .unwrap_err(),
        CoreError::NoSubmissionInFlight
    );
}

#[test]
fn test_move_relation_unchanged_until_acknowledged() {
    let catalog: Catalog = create_move_catalog();
    let review: WizardState = drive(
        &catalog,
        start(Flavor::MoveBetween, &catalog),
        vec![
            Event::PickSource(SeasonId::new("s1")),
            Event::Next,
            Event::ToggleFilm(FilmId::new("f1")),
            Event::Next,
            Event::PickDestination(SeasonId::new("s2")),
            Event::Next,
        ],
    );

    let in_flight: WizardState = apply(&catalog, &review, Event::Confirm)
        .unwrap()
        .new_state;
    assert_eq!(in_flight.relation(), review.relation());

    let failed: WizardState = drive(
        &catalog,
        in_flight,
        vec![Event::SubmissionFailed {
            message: "boom".to_string(),
        }],
    );
    assert_eq!(
        failed.relation().owner_of(&FilmId::new("f1")),
        Some(&SeasonId::new("s1"))
    );
}
