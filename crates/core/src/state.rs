// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::mutation::Mutation;
use cinema_seasons_domain::{AssignmentRelation, Catalog, FilmId, SearchFilter, SeasonId};
use std::collections::BTreeSet;

/// The two wizard variants.
///
/// Both share one step/guard design and differ only in their step
/// sequence, their selection shape, and the mutation they submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Place unassigned films into seasons.
    BulkAssign,
    /// Move films from one season into another.
    MoveBetween,
}

impl Flavor {
    /// Returns the ordered steps of this flavor.
    #[must_use]
    pub const fn steps(&self) -> &'static [Step] {
        match self {
            Self::BulkAssign => &[Step::ChooseSeason, Step::SelectFilms, Step::Review],
            Self::MoveBetween => &[
                Step::ChooseSource,
                Step::SelectFilms,
                Step::ChooseDestination,
                Step::Review,
            ],
        }
    }

    /// Returns the first step of this flavor.
    #[must_use]
    pub const fn first_step(&self) -> Step {
        match self {
            Self::BulkAssign => Step::ChooseSeason,
            Self::MoveBetween => Step::ChooseSource,
        }
    }

    /// Returns the position of a step in this flavor's sequence.
    #[must_use]
    pub fn index_of(&self, step: Step) -> Option<usize> {
        self.steps().iter().position(|s| *s == step)
    }

    /// Returns the step after `step`, if any.
    #[must_use]
    pub fn next_step(&self, step: Step) -> Option<Step> {
        self.index_of(step)
            .and_then(|i| self.steps().get(i + 1))
            .copied()
    }

    /// Returns the step before `step`, if any.
    #[must_use]
    pub fn previous_step(&self, step: Step) -> Option<Step> {
        self.index_of(step)
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.steps().get(i))
            .copied()
    }

    /// Returns the label shown in the step indicator.
    #[must_use]
    pub const fn label(&self, step: Step) -> &'static str {
        match (self, step) {
            (Self::BulkAssign, Step::ChooseSeason | Step::ChooseSource) => "Choose season",
            (Self::MoveBetween, Step::ChooseSeason | Step::ChooseSource) => "From season",
            (_, Step::SelectFilms) => "Select films",
            (_, Step::ChooseDestination) => "To season",
            (Self::BulkAssign, Step::Review) => "Review",
            (Self::MoveBetween, Step::Review) => "Confirm",
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BulkAssign => write!(f, "assign"),
            Self::MoveBetween => write!(f, "move"),
        }
    }
}

/// A wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Pick the active season (bulk assign).
    ChooseSeason,
    /// Pick the season to move films out of (move between).
    ChooseSource,
    /// Pick films.
    SelectFilms,
    /// Pick the season to move films into (move between).
    ChooseDestination,
    /// Review and confirm.
    Review,
}

impl Step {
    /// Returns a stable name for logging and error reporting.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ChooseSeason => "ChooseSeason",
            Self::ChooseSource => "ChooseSource",
            Self::SelectFilms => "SelectFilms",
            Self::ChooseDestination => "ChooseDestination",
            Self::Review => "Review",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transient per-step user picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Bulk-assign picks.
    Assign {
        /// The season toggled films are placed into.
        active_season: Option<SeasonId>,
    },
    /// Move-between picks.
    Move {
        /// The season films leave.
        source: Option<SeasonId>,
        /// Candidate films; the relation is not touched until confirmation.
        chosen: BTreeSet<FilmId>,
        /// The season films join.
        destination: Option<SeasonId>,
    },
}

impl Selection {
    /// Returns the empty selection for a flavor.
    #[must_use]
    pub const fn empty(flavor: Flavor) -> Self {
        match flavor {
            Flavor::BulkAssign => Self::Assign {
                active_season: None,
            },
            Flavor::MoveBetween => Self::Move {
                source: None,
                chosen: BTreeSet::new(),
                destination: None,
            },
        }
    }
}

/// Where the wizard stands with respect to its one outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing sent yet, or a failure was dismissed.
    Idle,
    /// A mutation is awaiting the backend.
    ///
    /// `staged` is the relation that becomes current once acknowledged.
    InFlight {
        /// The mutation sent.
        mutation: Mutation,
        /// The relation as it will be after the backend applies the mutation.
        staged: AssignmentRelation,
    },
    /// The last submission failed; the user may retry.
    Failed {
        /// Human-readable failure reason.
        message: String,
    },
    /// The backend acknowledged the mutation. Terminal.
    Succeeded,
}

/// The complete state of one wizard instance.
///
/// A state is built fresh from a catalog each time the workflow opens and
/// is discarded when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub(crate) flavor: Flavor,
    pub(crate) step: Step,
    pub(crate) selection: Selection,
    pub(crate) search: SearchFilter,
    pub(crate) relation: AssignmentRelation,
    pub(crate) submission: SubmissionStatus,
}

impl WizardState {
    /// Creates the initial state for a flavor.
    ///
    /// Bulk assign starts with every film unassigned. Move between starts
    /// from the memberships the backend reported.
    ///
    /// # Arguments
    ///
    /// * `flavor` - Which wizard to run
    /// * `catalog` - The snapshot loaded for this activation
    #[must_use]
    pub fn new(flavor: Flavor, catalog: &Catalog) -> Self {
        let relation: AssignmentRelation = match flavor {
            Flavor::BulkAssign => AssignmentRelation::unassigned(catalog),
            Flavor::MoveBetween => AssignmentRelation::from_catalog(catalog),
        };
        Self {
            flavor,
            step: flavor.first_step(),
            selection: Selection::empty(flavor),
            search: SearchFilter::default(),
            relation,
            submission: SubmissionStatus::Idle,
        }
    }

    /// Returns the wizard flavor.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the film search filter.
    #[must_use]
    pub const fn search(&self) -> &SearchFilter {
        &self.search
    }

    /// Returns the working assignment relation.
    #[must_use]
    pub const fn relation(&self) -> &AssignmentRelation {
        &self.relation
    }

    /// Returns the submission status.
    #[must_use]
    pub const fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    /// Returns whether a submission is awaiting the backend.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionStatus::InFlight { .. })
    }

    /// Returns whether the wizard has been submitted successfully.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.submission, SubmissionStatus::Succeeded)
    }

    /// Returns the failure message to show, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.submission {
            SubmissionStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Returns the bulk-assign active season, if chosen.
    #[must_use]
    pub const fn active_season(&self) -> Option<&SeasonId> {
        match &self.selection {
            Selection::Assign { active_season } => active_season.as_ref(),
            Selection::Move { .. } => None,
        }
    }

    /// Returns the move source season, if chosen.
    #[must_use]
    pub const fn source(&self) -> Option<&SeasonId> {
        match &self.selection {
            Selection::Move { source, .. } => source.as_ref(),
            Selection::Assign { .. } => None,
        }
    }

    /// Returns the move destination season, if chosen.
    #[must_use]
    pub const fn destination(&self) -> Option<&SeasonId> {
        match &self.selection {
            Selection::Move { destination, .. } => destination.as_ref(),
            Selection::Assign { .. } => None,
        }
    }

    /// Returns the films chosen for a move. Empty for bulk assign.
    #[must_use]
    pub fn chosen_films(&self) -> BTreeSet<FilmId> {
        match &self.selection {
            Selection::Move { chosen, .. } => chosen.clone(),
            Selection::Assign { .. } => BTreeSet::new(),
        }
    }
}
