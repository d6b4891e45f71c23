// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{FilmId, SeasonId};

/// Errors that can occur while building or mutating domain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A relocation named an owner that does not match the film's recorded owner.
    ///
    /// This indicates stale UI state and is a defect, not a user error.
    InvariantViolation {
        /// The film being relocated.
        film: FilmId,
        /// The owner the caller believed the film had.
        expected: SeasonId,
        /// The owner actually recorded.
        actual: SeasonId,
    },
    /// The film is not part of the catalog.
    FilmNotFound(FilmId),
    /// The season is not part of the catalog.
    SeasonNotFound(SeasonId),
    /// A film was listed under more than one season.
    DuplicateMembership {
        /// The film listed twice.
        film: FilmId,
        /// The season that claimed the film first.
        first: SeasonId,
        /// The season that claimed the film again.
        second: SeasonId,
    },
    /// A season date range could not be parsed.
    InvalidDateRange {
        /// The raw range string.
        raw: String,
        /// Why the range was rejected.
        reason: String,
    },
    /// The cinema identifier is not one of the supported cinemas.
    UnknownCinema(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvariantViolation {
                film,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invariant violation: film '{film}' is owned by '{actual}', not '{expected}'"
                )
            }
            Self::FilmNotFound(film) => write!(f, "Film '{film}' not found in catalog"),
            Self::SeasonNotFound(season) => write!(f, "Season '{season}' not found in catalog"),
            Self::DuplicateMembership {
                film,
                first,
                second,
            } => {
                write!(
                    f,
                    "Film '{film}' is listed in both season '{first}' and season '{second}'"
                )
            }
            Self::InvalidDateRange { raw, reason } => {
                write!(f, "Invalid season date range '{raw}': {reason}")
            }
            Self::UnknownCinema(id) => write!(f, "Unknown cinema '{id}'"),
        }
    }
}

impl std::error::Error for DomainError {}
