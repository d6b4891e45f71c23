// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Step;
use cinema_seasons_domain::{DomainError, FilmId, SeasonId};

/// Errors that can occur during wizard transitions.
///
/// A failed transition leaves the wizard state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A forward transition was attempted without its guard holding.
    GuardViolation {
        /// The step the wizard stayed on.
        step: Step,
    },
    /// The event has no meaning at the current step.
    EventNotAllowed {
        /// The current step.
        step: Step,
        /// The rejected event's name.
        event: &'static str,
    },
    /// The season is not in the pool offered at the current step.
    InvalidChoice {
        /// The rejected season.
        season: SeasonId,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// The film cannot be selected at the current step.
    FilmNotSelectable(FilmId),
    /// A submission is already in flight.
    SubmissionInFlight,
    /// A submission result arrived with nothing in flight.
    NoSubmissionInFlight,
    /// The wizard already submitted successfully.
    Terminal,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::GuardViolation { step } => {
                write!(f, "Cannot leave step '{step}' until it is complete")
            }
            Self::EventNotAllowed { step, event } => {
                write!(f, "Event '{event}' is not allowed at step '{step}'")
            }
            Self::InvalidChoice { season, reason } => {
                write!(f, "Season '{season}' cannot be chosen: {reason}")
            }
            Self::FilmNotSelectable(film) => {
                write!(f, "Film '{film}' cannot be selected here")
            }
            Self::SubmissionInFlight => write!(f, "A submission is already in progress"),
            Self::NoSubmissionInFlight => write!(f, "No submission is in progress"),
            Self::Terminal => write!(f, "The workflow has already been submitted"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
