// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::SeasonId;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Inclusive calendar range a season runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidDateRange {
                raw: format!("{start},{end}"),
                reason: String::from("end date is before start date"),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses the backend's `"YYYY-MM-DD,YYYY-MM-DD"` form.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is missing or not an ISO date, or if
    /// the range is inverted.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let format = format_description!("[year]-[month]-[day]");
        let invalid = |reason: String| DomainError::InvalidDateRange {
            raw: raw.to_string(),
            reason,
        };

        let (start_str, end_str) = raw
            .split_once(',')
            .ok_or_else(|| invalid(String::from("expected 'start,end'")))?;

        let start: Date = Date::parse(start_str.trim(), format)
            .map_err(|err| invalid(format!("start date: {err}")))?;
        let end: Date = Date::parse(end_str.trim(), format)
            .map_err(|err| invalid(format!("end date: {err}")))?;

        Self::new(start, end).map_err(|_| invalid(String::from("end date is before start date")))
    }

    /// Returns the first day of the season.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the season.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Renders the range in the backend's wire form.
    #[must_use]
    pub fn to_wire(&self) -> String {
        format!("{},{}", self.start, self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Descriptive information attached to a season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonInfo {
    /// The season's title.
    pub season_name: Option<String>,
    /// The programme strand the season belongs to.
    pub season_group_name: Option<String>,
    /// Who programmed the season.
    pub programmer_name: Option<String>,
    /// When the season runs, if the backend supplied a valid range.
    pub date_range: Option<DateRange>,
}

/// A season as captured in a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    /// The season identifier.
    pub id: SeasonId,
    /// Descriptive information, if any.
    pub info: SeasonInfo,
}

impl Season {
    /// Creates a season with no descriptive information.
    #[must_use]
    pub fn bare(id: SeasonId) -> Self {
        Self {
            id,
            info: SeasonInfo::default(),
        }
    }

    /// Returns the name to show for this season.
    ///
    /// The reserved bucket is always shown as "Unassigned"; other seasons
    /// fall back to their key when no name is recorded.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.id.is_unassigned() {
            return "Unassigned";
        }
        self.info
            .season_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.id.as_str())
    }
}
