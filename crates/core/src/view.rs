// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only projections of a wizard for display.
//!
//! Nothing here changes state; every function derives its output from the
//! catalog snapshot and the current wizard state.

use crate::apply::{valid_destinations, valid_sources};
use crate::state::{Flavor, Selection, Step, WizardState};
use cinema_seasons_domain::{Catalog, DateRange, FilmId, FilmListing, SeasonId};

/// Progress marker for one entry of the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Not reached yet.
    Pending,
    /// The step the wizard is on.
    Current,
    /// Already passed.
    Completed,
}

/// One entry of the step indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepProgress {
    /// The step.
    pub step: Step,
    /// 1-based position in the sequence.
    pub number: usize,
    /// Display label.
    pub label: &'static str,
    /// Where the wizard stands relative to this step.
    pub status: StepStatus,
}

/// A season offered by a picker step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonChoice {
    /// The season identifier.
    pub id: SeasonId,
    /// Display name.
    pub name: String,
    /// When the season runs, if known.
    pub date_range: Option<DateRange>,
    /// Films the season holds, as shown on the card.
    pub film_count: usize,
    /// Whether this season is the current pick.
    pub selected: bool,
}

/// A film offered by the selection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmChoice {
    /// The film identifier.
    pub id: FilmId,
    /// Display label.
    pub label: String,
    /// Whether the film is selected for the current pick.
    pub selected: bool,
    /// The season the film currently sits in (bulk assign only).
    pub owner: Option<SeasonId>,
}

/// Films held by one season on the bulk-assign review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewBucket {
    /// The season identifier.
    pub season: SeasonId,
    /// Display name.
    pub name: String,
    /// Films the season will hold, ordered by identifier.
    pub films: Vec<FilmId>,
}

/// Summary shown before confirming a bulk assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignReview {
    /// Every real season with its bucket, possibly empty.
    pub seasons: Vec<ReviewBucket>,
    /// Films left unassigned.
    pub unassigned_count: usize,
}

/// Summary shown before confirming a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReview {
    /// The season films leave.
    pub source: SeasonId,
    /// Its display name.
    pub source_name: String,
    /// The films moving out.
    pub moving: Vec<FilmId>,
    /// The season films join.
    pub destination: SeasonId,
    /// Its display name.
    pub destination_name: String,
    /// Films the destination already holds.
    pub destination_current: usize,
}

/// The review projection for either flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Review {
    /// Bulk-assign review.
    Assign(AssignReview),
    /// Move-between review.
    Move(MoveReview),
}

/// Returns the step indicator for a wizard.
#[must_use]
pub fn progress(state: &WizardState) -> Vec<StepProgress> {
    let flavor: Flavor = state.flavor();
    let current: usize = flavor.index_of(state.step()).unwrap_or(0);

    flavor
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| StepProgress {
            step: *step,
            number: i + 1,
            label: flavor.label(*step),
            status: match i.cmp(&current) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Current,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            },
        })
        .collect()
}

/// Returns the seasons offered at the current picker step.
///
/// Non-picker steps return an empty list.
#[must_use]
pub fn season_choices(catalog: &Catalog, state: &WizardState) -> Vec<SeasonChoice> {
    let (pool, picked): (Vec<SeasonId>, Option<&SeasonId>) = match state.step() {
        Step::ChooseSeason => (
            catalog
                .assigned_seasons()
                .map(|season| season.id.clone())
                .collect(),
            state.active_season(),
        ),
        Step::ChooseSource => (valid_sources(catalog), state.source()),
        Step::ChooseDestination => (
            valid_destinations(catalog, state.source()),
            state.destination(),
        ),
        Step::SelectFilms | Step::Review => return Vec::new(),
    };

    pool.into_iter()
        .filter_map(|id| catalog.season(&id))
        .map(|season| SeasonChoice {
            id: season.id.clone(),
            name: season.display_name().to_string(),
            date_range: season.info.date_range,
            film_count: match state.flavor() {
                Flavor::BulkAssign => state.relation().bucket(&season.id).len(),
                Flavor::MoveBetween => catalog.initial_count(&season.id),
            },
            selected: picked == Some(&season.id),
        })
        .collect()
}

/// Returns the films the selection step shows under the current filter.
///
/// Bulk assign offers every active film. Move between offers the films
/// the source season held when the catalog was loaded.
#[must_use]
pub fn visible_films<'a>(catalog: &'a Catalog, state: &WizardState) -> Vec<&'a FilmListing> {
    match state.selection() {
        Selection::Assign { .. } => catalog
            .active_films()
            .filter(|listing| state.search().matches(listing))
            .collect(),
        Selection::Move { source, .. } => {
            let Some(source) = source else {
                return Vec::new();
            };
            catalog
                .initial_members(source)
                .iter()
                .filter_map(|film| catalog.film(film))
                .filter(|listing| state.search().matches(listing))
                .collect()
        }
    }
}

/// Returns the selection step's film cards.
#[must_use]
pub fn film_choices(catalog: &Catalog, state: &WizardState) -> Vec<FilmChoice> {
    visible_films(catalog, state)
        .into_iter()
        .map(|listing| match state.selection() {
            Selection::Assign { active_season } => {
                let owner: Option<SeasonId> = state.relation().owner_of(&listing.id).cloned();
                FilmChoice {
                    id: listing.id.clone(),
                    label: listing.label().to_string(),
                    selected: owner.is_some() && owner.as_ref() == active_season.as_ref(),
                    owner,
                }
            }
            Selection::Move { chosen, .. } => FilmChoice {
                id: listing.id.clone(),
                label: listing.label().to_string(),
                selected: chosen.contains(&listing.id),
                owner: None,
            },
        })
        .collect()
}

/// Returns the review summary, or `None` before the wizard reaches review.
#[must_use]
pub fn review(catalog: &Catalog, state: &WizardState) -> Option<Review> {
    if state.step() != Step::Review {
        return None;
    }

    match state.selection() {
        Selection::Assign { .. } => Some(Review::Assign(AssignReview {
            seasons: catalog
                .assigned_seasons()
                .map(|season| ReviewBucket {
                    season: season.id.clone(),
                    name: season.display_name().to_string(),
                    films: state.relation().bucket(&season.id).into_iter().collect(),
                })
                .collect(),
            unassigned_count: state.relation().unassigned_count(),
        })),
        Selection::Move {
            source,
            chosen,
            destination,
        } => {
            let source: &SeasonId = source.as_ref()?;
            let destination: &SeasonId = destination.as_ref()?;
            Some(Review::Move(MoveReview {
                source: source.clone(),
                source_name: catalog.season_name(source).to_string(),
                moving: chosen.iter().cloned().collect(),
                destination: destination.clone(),
                destination_name: catalog.season_name(destination).to_string(),
                destination_current: catalog.initial_count(destination),
            }))
        }
    }
}
