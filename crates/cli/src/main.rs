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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod plan;
mod render;

use clap::{Parser, Subcommand};
use cinema_seasons_api::{EndpointConfig, Gateway, HandlerNames, LambdaClient};
use cinema_seasons_domain::{Cinema, FilmId, SeasonId};
use commands::NewSeason;
use plan::{MovePlan, Placement, parse_placement};
use std::path::PathBuf;
use tracing::info;

/// Cinema Seasons - assign films to a cinema's seasons from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend endpoint URL every request is POSTed to
    #[arg(long, env = "CINEMA_SEASONS_ENDPOINT")]
    endpoint: String,

    /// Cinema to operate on
    #[arg(long, env = "CINEMA_SEASONS_CINEMA", default_value_t = Cinema::CloseUp)]
    cinema: Cinema,

    /// JSON file overriding backend handler names
    #[arg(long)]
    handlers: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List seasons with their date ranges and film counts
    Seasons,

    /// Place films into seasons and submit the assignment
    Assign {
        /// Films to place, as SEASON=FILM[,FILM...]; repeatable
        #[arg(long = "to", value_parser = parse_placement, required = true)]
        placements: Vec<Placement>,

        /// Print the request instead of submitting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Move films from one season into another
    Move {
        /// Season the films leave
        #[arg(long)]
        from: SeasonId,

        /// Season the films join
        #[arg(long)]
        to: SeasonId,

        /// Film to move; repeatable
        #[arg(long = "film", required_unless_present = "all")]
        films: Vec<FilmId>,

        /// Move every film of the source season matching --search
        #[arg(long, conflicts_with = "films")]
        all: bool,

        /// Restrict --all to films whose key or title contains this text
        #[arg(long, requires = "all")]
        search: Option<String>,

        /// Print the request instead of submitting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Create a season
    CreateSeason {
        /// Season key
        #[arg(long)]
        key: SeasonId,

        /// Season title
        #[arg(long)]
        name: String,

        /// First day, YYYY-MM-DD
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Last day, YYYY-MM-DD
        #[arg(long, requires = "start")]
        end: Option<String>,

        /// Programme strand
        #[arg(long)]
        group: Option<String>,

        /// Who programmed the season
        #[arg(long)]
        programmer: Option<String>,
    },

    /// Delete a season
    DeleteSeason {
        /// Season key
        #[arg(long)]
        key: SeasonId,
    },

    /// Overwrite one field of a season's info
    UpdateSeason {
        /// Season key
        #[arg(long)]
        key: SeasonId,

        /// Field name, e.g. `season_name`
        #[arg(long)]
        field: String,

        /// New value as JSON, e.g. '"Spring Nights"'
        #[arg(long)]
        value: String,
    },
}

fn load_config(args: &Args) -> Result<EndpointConfig, Box<dyn std::error::Error>> {
    let config: EndpointConfig = EndpointConfig::new(&args.endpoint);
    let Some(path) = &args.handlers else {
        return Ok(config);
    };

    let raw: String = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
    let handlers: HandlerNames = serde_json::from_str(&raw)
        .map_err(|err| format!("invalid handler names in {}: {err}", path.display()))?;
    Ok(config.with_handlers(handlers))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    let default_level: &str = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: EndpointConfig = load_config(&args)?;
    info!("Using backend {} for {}", config.base_url, args.cinema);

    let gateway: Gateway<LambdaClient> = Gateway::new(
        LambdaClient::new(&config.base_url),
        config.handlers,
        args.cinema,
    );

    match args.command {
        Command::Seasons => commands::list_seasons(&gateway).await,
        Command::Assign {
            placements,
            dry_run,
        } => commands::assign(&gateway, &placements, dry_run).await,
        Command::Move {
            from,
            to,
            films,
            all,
            search,
            dry_run,
        } => {
            let plan: MovePlan = MovePlan {
                from,
                to,
                films,
                all,
                search,
            };
            commands::move_films(&gateway, &plan, dry_run).await
        }
        Command::CreateSeason {
            key,
            name,
            start,
            end,
            group,
            programmer,
        } => {
            let season: NewSeason = NewSeason {
                key,
                name,
                start,
                end,
                group,
                programmer,
            };
            commands::create_season(&gateway, &season).await
        }
        Command::DeleteSeason { key } => commands::delete_season(&gateway, &key).await,
        Command::UpdateSeason { key, field, value } => {
            commands::update_season(&gateway, &key, &field, &value).await
        }
    }
}
