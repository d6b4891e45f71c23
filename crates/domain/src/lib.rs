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

mod assignment;
mod catalog;
mod error;
mod search;
mod season;
mod types;

#[cfg(test)]
mod tests;

pub use assignment::AssignmentRelation;
pub use catalog::Catalog;
pub use error::DomainError;
pub use search::SearchFilter;
pub use season::{DateRange, Season, SeasonInfo};
pub use types::{Cinema, FilmId, FilmListing, SeasonId};
