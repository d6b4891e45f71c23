// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Event;
use crate::error::CoreError;
use crate::mutation::Mutation;
use crate::state::{Flavor, Selection, Step, SubmissionStatus, WizardState};
use crate::view::visible_films;
use cinema_seasons_domain::{
    AssignmentRelation, Catalog, DomainError, FilmId, SearchFilter, SeasonId,
};
use std::collections::BTreeSet;

/// The result of a successful wizard transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the transition.
    pub new_state: WizardState,
    /// The mutation to hand to the submission gateway, if the event confirmed.
    pub outbound: Option<Mutation>,
}

impl TransitionResult {
    const fn stay(new_state: WizardState) -> Self {
        Self {
            new_state,
            outbound: None,
        }
    }
}

/// Returns whether the guard on the current step's forward edge holds.
///
/// The review step has no forward edge and always reports `false`.
#[must_use]
pub fn can_advance(state: &WizardState) -> bool {
    match (&state.selection, state.step) {
        (Selection::Assign { active_season }, Step::ChooseSeason) => active_season.is_some(),
        (Selection::Assign { .. }, Step::SelectFilms) => true,
        (Selection::Move { source, .. }, Step::ChooseSource) => source.is_some(),
        (Selection::Move { chosen, .. }, Step::SelectFilms) => !chosen.is_empty(),
        (Selection::Move { destination, .. }, Step::ChooseDestination) => destination.is_some(),
        _ => false,
    }
}

/// Returns whether the review step may be confirmed.
#[must_use]
pub fn can_confirm(state: &WizardState) -> bool {
    state.step == Step::Review
        && !state.is_submitting()
        && !state.is_terminal()
        && match &state.selection {
            Selection::Assign { .. } => true,
            Selection::Move {
                source,
                chosen,
                destination,
            } => source.is_some() && destination.is_some() && !chosen.is_empty(),
        }
}

/// Returns the seasons a move may start from.
///
/// The pool is the set of seasons holding films in the catalog snapshot and
/// does not change while the wizard runs.
#[must_use]
pub fn valid_sources(catalog: &Catalog) -> Vec<SeasonId> {
    catalog
        .seasons()
        .filter(|season| catalog.initial_count(&season.id) > 0)
        .map(|season| season.id.clone())
        .collect()
}

/// Returns the seasons a move may end in: every season except the source.
#[must_use]
pub fn valid_destinations(catalog: &Catalog, source: Option<&SeasonId>) -> Vec<SeasonId> {
    catalog
        .seasons()
        .filter(|season| Some(&season.id) != source)
        .map(|season| season.id.clone())
        .collect()
}

/// Applies an event to a wizard state, producing a new state.
///
/// This is a pure function: the input state is never modified, and a
/// failed transition leaves the caller holding the unchanged state.
///
/// # Arguments
///
/// * `catalog` - The snapshot this wizard was opened with
/// * `state` - The current state (immutable)
/// * `event` - The user action to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and, on confirmation,
///   the mutation to submit
/// * `Err(CoreError)` if the event is not permitted
///
/// # Errors
///
/// Returns an error if:
/// - The wizard is terminal, or a submission is in flight
/// - The event has no meaning at the current step
/// - A forward transition's guard does not hold
/// - A picked season or film is outside the offered pool
/// - A relocation finds a stale owner
pub fn apply(
    catalog: &Catalog,
    state: &WizardState,
    event: Event,
) -> Result<TransitionResult, CoreError> {
    if state.is_terminal() {
        return Err(CoreError::Terminal);
    }

    if let SubmissionStatus::InFlight { staged, .. } = &state.submission {
        return match event {
            Event::SubmissionSucceeded => {
                let mut new_state: WizardState = state.clone();
                new_state.relation = staged.clone();
                new_state.submission = SubmissionStatus::Succeeded;
                Ok(TransitionResult::stay(new_state))
            }
            Event::SubmissionFailed { message } => {
                let mut new_state: WizardState = state.clone();
                new_state.submission = SubmissionStatus::Failed { message };
                Ok(TransitionResult::stay(new_state))
            }
            _ => Err(CoreError::SubmissionInFlight),
        };
    }

    let step: Step = state.step;
    let not_allowed = |event: &Event| CoreError::EventNotAllowed {
        step,
        event: event.name(),
    };

    match event {
        Event::SubmissionSucceeded | Event::SubmissionFailed { .. } => {
            Err(CoreError::NoSubmissionInFlight)
        }
        Event::DismissError => {
            let mut new_state: WizardState = state.clone();
            new_state.submission = SubmissionStatus::Idle;
            Ok(TransitionResult::stay(new_state))
        }
        Event::Next => advance(state),
        Event::Back => {
            let previous: Step = state
                .flavor
                .previous_step(step)
                .ok_or_else(|| not_allowed(&Event::Back))?;
            let mut new_state: WizardState = state.clone();
            new_state.step = previous;
            // A failure message belongs to the review step it was reported on
            if matches!(new_state.submission, SubmissionStatus::Failed { .. }) {
                new_state.submission = SubmissionStatus::Idle;
            }
            Ok(TransitionResult::stay(new_state))
        }
        Event::SetSearch(text) => {
            if step != Step::SelectFilms {
                return Err(not_allowed(&Event::SetSearch(text)));
            }
            let mut new_state: WizardState = state.clone();
            new_state.search = SearchFilter::new(&text);
            Ok(TransitionResult::stay(new_state))
        }
        Event::PickSeason(season) => {
            if state.flavor != Flavor::BulkAssign || step != Step::ChooseSeason {
                return Err(not_allowed(&Event::PickSeason(season)));
            }
            pick_active_season(catalog, state, season)
        }
        Event::PickSource(season) => {
            if state.flavor != Flavor::MoveBetween || step != Step::ChooseSource {
                return Err(not_allowed(&Event::PickSource(season)));
            }
            pick_source(catalog, state, season)
        }
        Event::PickDestination(season) => {
            if state.flavor != Flavor::MoveBetween || step != Step::ChooseDestination {
                return Err(not_allowed(&Event::PickDestination(season)));
            }
            pick_destination(catalog, state, season)
        }
        Event::ToggleFilm(film) => {
            if step != Step::SelectFilms {
                return Err(not_allowed(&Event::ToggleFilm(film)));
            }
            match state.flavor {
                Flavor::BulkAssign => toggle_assignment(catalog, state, &film),
                Flavor::MoveBetween => toggle_candidate(catalog, state, film),
            }
        }
        event @ (Event::SelectAllVisible | Event::ClearSelection) => {
            if state.flavor != Flavor::MoveBetween || step != Step::SelectFilms {
                return Err(not_allowed(&event));
            }
            let replacement: BTreeSet<FilmId> = if event == Event::SelectAllVisible {
                visible_films(catalog, state)
                    .into_iter()
                    .map(|listing| listing.id.clone())
                    .collect()
            } else {
                BTreeSet::new()
            };
            let mut new_state: WizardState = state.clone();
            if let Selection::Move { chosen, .. } = &mut new_state.selection {
                *chosen = replacement;
            }
            Ok(TransitionResult::stay(new_state))
        }
        Event::Confirm => confirm(state),
    }
}

/// Moves forward one step if the current step's guard holds.
fn advance(state: &WizardState) -> Result<TransitionResult, CoreError> {
    let step: Step = state.step;
    let next: Step = state
        .flavor
        .next_step(step)
        .ok_or(CoreError::EventNotAllowed {
            step,
            event: Event::Next.name(),
        })?;

    if !can_advance(state) {
        return Err(CoreError::GuardViolation { step });
    }

    let mut new_state: WizardState = state.clone();
    new_state.step = next;

    // Entering a step going forward resets the picks that depend on it
    match (&mut new_state.selection, next) {
        (Selection::Assign { .. }, Step::SelectFilms) => {
            new_state.search = SearchFilter::default();
        }
        (Selection::Move { chosen, .. }, Step::SelectFilms) => {
            chosen.clear();
            new_state.search = SearchFilter::default();
        }
        (Selection::Move { destination, .. }, Step::ChooseDestination) => {
            *destination = None;
        }
        _ => {}
    }

    Ok(TransitionResult::stay(new_state))
}

fn pick_active_season(
    catalog: &Catalog,
    state: &WizardState,
    season: SeasonId,
) -> Result<TransitionResult, CoreError> {
    if season.is_unassigned() {
        return Err(CoreError::InvalidChoice {
            season,
            reason: "films are assigned to a real season",
        });
    }
    if !catalog.contains_season(&season) {
        return Err(CoreError::DomainViolation(DomainError::SeasonNotFound(
            season,
        )));
    }

    let mut new_state: WizardState = state.clone();
    new_state.selection = Selection::Assign {
        active_season: Some(season),
    };
    Ok(TransitionResult::stay(new_state))
}

fn pick_source(
    catalog: &Catalog,
    state: &WizardState,
    season: SeasonId,
) -> Result<TransitionResult, CoreError> {
    if !valid_sources(catalog).contains(&season) {
        return Err(CoreError::InvalidChoice {
            season,
            reason: "the season has no films to move",
        });
    }

    let mut new_state: WizardState = state.clone();
    if let Selection::Move { source, chosen, .. } = &mut new_state.selection {
        *source = Some(season);
        chosen.clear();
    }
    Ok(TransitionResult::stay(new_state))
}

fn pick_destination(
    catalog: &Catalog,
    state: &WizardState,
    season: SeasonId,
) -> Result<TransitionResult, CoreError> {
    if !valid_destinations(catalog, state.source()).contains(&season) {
        return Err(CoreError::InvalidChoice {
            season,
            reason: "the destination must be a different, known season",
        });
    }

    let mut new_state: WizardState = state.clone();
    if let Selection::Move { destination, .. } = &mut new_state.selection {
        *destination = Some(season);
    }
    Ok(TransitionResult::stay(new_state))
}

/// Toggles a film's membership in the active season's bucket.
///
/// A film already owned by the active season goes back to unassigned.
/// Any other film is relocated from its current owner, whichever season
/// that is, into the active season.
fn toggle_assignment(
    catalog: &Catalog,
    state: &WizardState,
    film: &FilmId,
) -> Result<TransitionResult, CoreError> {
    let active: &SeasonId = state.active_season().ok_or(CoreError::GuardViolation {
        step: Step::ChooseSeason,
    })?;
    if !catalog.is_active(film) {
        return Err(CoreError::FilmNotSelectable(film.clone()));
    }

    let owner: SeasonId = state
        .relation
        .owner_of(film)
        .cloned()
        .ok_or_else(|| CoreError::FilmNotSelectable(film.clone()))?;
    let target: SeasonId = if owner == *active {
        SeasonId::unassigned()
    } else {
        active.clone()
    };

    let mut new_state: WizardState = state.clone();
    new_state.relation.relocate(film, &owner, &target)?;
    Ok(TransitionResult::stay(new_state))
}

fn toggle_candidate(
    catalog: &Catalog,
    state: &WizardState,
    film: FilmId,
) -> Result<TransitionResult, CoreError> {
    let source: &SeasonId = state.source().ok_or(CoreError::GuardViolation {
        step: Step::ChooseSource,
    })?;
    if !catalog.initial_members(source).contains(&film) {
        return Err(CoreError::FilmNotSelectable(film));
    }

    let mut new_state: WizardState = state.clone();
    if let Selection::Move { chosen, .. } = &mut new_state.selection {
        let was_chosen: bool = chosen.remove(&film);
        if !was_chosen {
            chosen.insert(film);
        }
    }
    Ok(TransitionResult::stay(new_state))
}

/// Builds the outbound mutation and stages the relation it will produce.
fn confirm(state: &WizardState) -> Result<TransitionResult, CoreError> {
    if state.step != Step::Review {
        return Err(CoreError::EventNotAllowed {
            step: state.step,
            event: Event::Confirm.name(),
        });
    }
    if !can_confirm(state) {
        return Err(CoreError::GuardViolation { step: Step::Review });
    }

    let (mutation, staged): (Mutation, AssignmentRelation) = match &state.selection {
        Selection::Assign { .. } => (
            Mutation::AssignFilms {
                film_to_season: state.relation.to_mutation_payload(),
            },
            state.relation.clone(),
        ),
        Selection::Move {
            source,
            chosen,
            destination,
        } => {
            let (Some(source), Some(destination)) = (source, destination) else {
                return Err(CoreError::GuardViolation { step: Step::Review });
            };
            let mut staged: AssignmentRelation = state.relation.clone();
            for film in chosen {
                staged.relocate(film, source, destination)?;
            }
            (
                Mutation::MoveFilms {
                    source: source.clone(),
                    destination: destination.clone(),
                    films: chosen.iter().cloned().collect(),
                },
                staged,
            )
        }
    };

    let mut new_state: WizardState = state.clone();
    new_state.submission = SubmissionStatus::InFlight {
        mutation: mutation.clone(),
        staged,
    };
    Ok(TransitionResult {
        new_state,
        outbound: Some(mutation),
    })
}
