// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod mutation;
mod state;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{
    TransitionResult, apply, can_advance, can_confirm, valid_destinations, valid_sources,
};
pub use command::Event;
pub use error::CoreError;
pub use mutation::Mutation;
pub use state::{Flavor, Selection, Step, SubmissionStatus, WizardState};
pub use view::{
    AssignReview, FilmChoice, MoveReview, Review, ReviewBucket, SeasonChoice, StepProgress,
    StepStatus, film_choices, progress, review, season_choices, visible_films,
};
