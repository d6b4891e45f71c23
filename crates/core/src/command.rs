// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_seasons_domain::{FilmId, SeasonId};

/// An event represents one user action on the wizard, as data only.
///
/// Events are the only way to change a wizard's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Choose the season films will be assigned to (bulk assign).
    PickSeason(SeasonId),
    /// Choose the season films are moved out of (move between).
    PickSource(SeasonId),
    /// Choose the season films are moved into (move between).
    PickDestination(SeasonId),
    /// Toggle a film on the film selection step.
    ToggleFilm(FilmId),
    /// Choose every film currently visible under the search filter.
    SelectAllVisible,
    /// Drop every chosen film.
    ClearSelection,
    /// Replace the film search filter.
    SetSearch(String),
    /// Advance to the next step.
    Next,
    /// Return to the previous step.
    Back,
    /// Confirm the review and hand the mutation to the gateway.
    Confirm,
    /// The backend acknowledged the in-flight mutation.
    SubmissionSucceeded,
    /// The in-flight mutation failed.
    SubmissionFailed {
        /// Human-readable failure reason.
        message: String,
    },
    /// Dismiss a submission failure message.
    DismissError,
}

impl Event {
    /// Returns a stable name for logging and error reporting.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PickSeason(_) => "PickSeason",
            Self::PickSource(_) => "PickSource",
            Self::PickDestination(_) => "PickDestination",
            Self::ToggleFilm(_) => "ToggleFilm",
            Self::SelectAllVisible => "SelectAllVisible",
            Self::ClearSelection => "ClearSelection",
            Self::SetSearch(_) => "SetSearch",
            Self::Next => "Next",
            Self::Back => "Back",
            Self::Confirm => "Confirm",
            Self::SubmissionSucceeded => "SubmissionSucceeded",
            Self::SubmissionFailed { .. } => "SubmissionFailed",
            Self::DismissError => "DismissError",
        }
    }
}
