// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of catalogs and wizard projections.

use cinema_seasons::{Review, StepProgress, StepStatus, WizardState, progress};
use cinema_seasons_domain::{Catalog, FilmId};
use std::fmt;

/// Renders every season with its date range and film count.
#[must_use]
pub fn season_table(catalog: &Catalog) -> String {
    SeasonTable(catalog).to_string()
}

/// Renders the step indicator on one line, e.g.
/// `[x] Choose season > [>] Select films > [ ] Review`.
#[must_use]
pub fn progress_line(state: &WizardState) -> String {
    progress(state)
        .iter()
        .map(|step: &StepProgress| {
            let marker: &str = match step.status {
                StepStatus::Completed => "[x]",
                StepStatus::Current => "[>]",
                StepStatus::Pending => "[ ]",
            };
            format!("{marker} {}", step.label)
        })
        .collect::<Vec<String>>()
        .join(" > ")
}

/// Renders a review summary.
#[must_use]
pub fn review_text(catalog: &Catalog, review: &Review) -> String {
    ReviewText { catalog, review }.to_string()
}

struct SeasonTable<'a>(&'a Catalog);

impl fmt::Display for SeasonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24} {:<32} {:<26} FILMS", "KEY", "NAME", "DATES")?;
        for season in self.0.seasons() {
            let dates: String = season
                .info
                .date_range
                .map_or_else(|| String::from("-"), |range| range.to_string());
            writeln!(
                f,
                "{:<24} {:<32} {:<26} {}",
                season.id,
                season.display_name(),
                dates,
                self.0.initial_count(&season.id)
            )?;
        }
        Ok(())
    }
}

struct ReviewText<'a> {
    catalog: &'a Catalog,
    review: &'a Review,
}

impl ReviewText<'_> {
    fn films(&self, f: &mut fmt::Formatter<'_>, films: &[FilmId]) -> fmt::Result {
        for film in films {
            writeln!(f, "  - {} ({film})", self.catalog.film_label(film))?;
        }
        Ok(())
    }
}

impl fmt::Display for ReviewText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.review {
            Review::Assign(summary) => {
                for bucket in &summary.seasons {
                    writeln!(
                        f,
                        "{} ({}): {} film(s)",
                        bucket.name,
                        bucket.season,
                        bucket.films.len()
                    )?;
                    self.films(f, &bucket.films)?;
                }
                writeln!(f, "Unassigned: {} film(s)", summary.unassigned_count)
            }
            Review::Move(summary) => {
                writeln!(
                    f,
                    "Moving {} film(s) from {} to {}",
                    summary.moving.len(),
                    summary.source_name,
                    summary.destination_name
                )?;
                self.films(f, &summary.moving)?;
                writeln!(
                    f,
                    "{}: {} currently + {} incoming",
                    summary.destination_name,
                    summary.destination_current,
                    summary.moving.len()
                )
            }
        }
    }
}
