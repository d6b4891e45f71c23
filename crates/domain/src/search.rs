// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::FilmListing;

/// Free-text filter applied to film pickers.
///
/// Matching is a case-insensitive substring test against the film's
/// identifier and its display label. A blank filter matches every film.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    raw: String,
    needle: String,
}

impl SearchFilter {
    /// Creates a filter from user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Returns the text as the user typed it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns whether the filter is effectively empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns whether a film passes the filter.
    #[must_use]
    pub fn matches(&self, film: &FilmListing) -> bool {
        if self.is_blank() {
            return true;
        }
        film.id.as_str().to_lowercase().contains(&self.needle)
            || film.label().to_lowercase().contains(&self.needle)
    }
}
