// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommand implementations.

use crate::plan::{MovePlan, Placement, assign_events, move_events};
use crate::render::{progress_line, review_text, season_table};
use cinema_seasons::{Event, Flavor, Mutation, WizardState, review};
use cinema_seasons_api::{
    Backend, Gateway, LoadedCatalog, SeasonDefinition, SubmitTicket, WorkflowError,
    WorkflowSession, confirm_and_submit, open_and_load,
};
use cinema_seasons_domain::{Catalog, DateRange, SeasonId};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Result type shared by every subcommand.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Prints every season with its date range and film count.
pub async fn list_seasons<B: Backend>(gateway: &Gateway<B>) -> CommandResult {
    let loaded: LoadedCatalog = gateway.fetch_catalog().await?;
    print!("{}", season_table(&loaded.catalog));
    if !loaded.quarantined.is_empty() {
        warn!(
            "{} malformed backend entries were skipped",
            loaded.quarantined.len()
        );
    }
    Ok(())
}

/// Runs the bulk-assign wizard to completion.
pub async fn assign<B: Backend>(
    gateway: &Gateway<B>,
    placements: &[Placement],
    dry_run: bool,
) -> CommandResult {
    let mut session: WorkflowSession = WorkflowSession::new(Flavor::BulkAssign);
    open_and_load(&mut session, gateway).await?;
    run_wizard(&mut session, gateway, assign_events(placements), dry_run).await
}

/// Runs the move-between wizard to completion.
pub async fn move_films<B: Backend>(
    gateway: &Gateway<B>,
    plan: &MovePlan,
    dry_run: bool,
) -> CommandResult {
    let mut session: WorkflowSession = WorkflowSession::new(Flavor::MoveBetween);
    open_and_load(&mut session, gateway).await?;
    run_wizard(&mut session, gateway, move_events(plan), dry_run).await
}

async fn run_wizard<B: Backend>(
    session: &mut WorkflowSession,
    gateway: &Gateway<B>,
    events: Vec<Event>,
    dry_run: bool,
) -> CommandResult {
    for event in events {
        let name: &'static str = event.name();
        debug!("Applying {}", name);
        session
            .dispatch(event)
            .map_err(|err| format!("{name} rejected: {err}"))?;
    }

    let catalog: &Catalog = session.catalog().ok_or(WorkflowError::NotReady)?;
    let state: &WizardState = session.state().ok_or(WorkflowError::NotReady)?;
    println!("{}", progress_line(state));
    if let Some(summary) = review(catalog, state) {
        print!("{}", review_text(catalog, &summary));
    }

    if dry_run {
        let ticket: SubmitTicket = session
            .dispatch(Event::Confirm)?
            .ok_or(WorkflowError::NotReady)?;
        let request: Value = gateway.mutation_request(ticket.mutation())?;
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let sent: Mutation = confirm_and_submit(session, gateway).await?;
    info!("Backend acknowledged {} film(s)", sent.film_count());
    println!("Submitted {} film(s)", sent.film_count());
    Ok(())
}

/// Fields for a new season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeason {
    /// The season key.
    pub key: SeasonId,
    /// The season's title.
    pub name: String,
    /// First day, `YYYY-MM-DD`.
    pub start: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    pub end: Option<String>,
    /// Programme strand.
    pub group: Option<String>,
    /// Who programmed it.
    pub programmer: Option<String>,
}

impl NewSeason {
    /// Builds the wire definition, validating the date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the dates do not form a valid range.
    pub fn definition(&self) -> Result<SeasonDefinition, Box<dyn std::error::Error>> {
        let season_date_range: Option<String> = match (&self.start, &self.end) {
            (Some(start), Some(end)) => {
                Some(DateRange::parse(&format!("{start},{end}"))?.to_wire())
            }
            (None, None) => None,
            _ => return Err("--start and --end must be given together".into()),
        };

        Ok(SeasonDefinition {
            season_name: self.name.clone(),
            season_group_name: self.group.clone(),
            programmer_name: self.programmer.clone(),
            season_date_range,
            season_images: Vec::new(),
        })
    }
}

/// Adds a season.
pub async fn create_season<B: Backend>(gateway: &Gateway<B>, season: &NewSeason) -> CommandResult {
    let definition: SeasonDefinition = season.definition()?;
    gateway.create_season(&season.key, definition).await?;
    println!("Created season '{}'", season.key);
    Ok(())
}

/// Deletes a season.
pub async fn delete_season<B: Backend>(gateway: &Gateway<B>, key: &SeasonId) -> CommandResult {
    gateway.delete_season(key).await?;
    println!("Deleted season '{key}'");
    Ok(())
}

/// Overwrites one field of a season's info with a JSON value.
pub async fn update_season<B: Backend>(
    gateway: &Gateway<B>,
    key: &SeasonId,
    field: &str,
    value: &str,
) -> CommandResult {
    let parsed: Value = serde_json::from_str(value)
        .map_err(|err| format!("--value must be JSON (quote strings): {err}"))?;
    let mut updates: Map<String, Value> = Map::new();
    updates.insert(field.to_string(), parsed);

    gateway.update_season(key, updates).await?;
    println!("Updated '{field}' on season '{key}'");
    Ok(())
}
