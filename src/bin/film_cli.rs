//! Film Inventory Command Line Interface
//!
//! A CLI for browsing and editing the film-roll catalog held by the
//! hosted backend.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog (display values as stored)
//! film_cli list
//!
//! # List with enum fields rewritten to their symbolic keys
//! film_cli list --keys -o json
//!
//! # Add a roll
//! film_cli add --name "Gold 200" --brand Kodak --film-type color \
//!     --film-format _35mm --iso 200 --date-acquired 2024-05-01 --source drugstore
//!
//! # Append a lifecycle event, then drop a roll
//! film_cli log 7 used
//! film_cli remove 7
//! ```
//!
//! Backend endpoint and key come from `FILM_BACKEND_URL` and
//! `FILM_BACKEND_API_KEY`.

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process::ExitCode;

use film_inventory::api::{BackendConfig, FilmCollectionClient};
use film_inventory::enums::convert_enum_values_to_keys;
use film_inventory::types::{
    film_enum_table, FilmEvent, FilmFormat, FilmRoll, FilmType, LogEvent,
};

#[derive(Parser)]
#[command(name = "film_cli")]
#[command(version = "0.1.0")]
#[command(about = "Browse and edit the film-roll catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: json or pretty (default)
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// List all rolls in the catalog
    List {
        /// Rewrite enum fields to their symbolic keys before printing
        #[arg(long)]
        keys: bool,
    },

    /// Show one roll, including its event log
    Show { id: i64 },

    /// Add a roll to the catalog
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        brand: String,
        /// Film type key or display value (e.g. color, "Black and White")
        #[arg(long)]
        film_type: String,
        /// Film format key or display value (e.g. _35mm, 120)
        #[arg(long)]
        film_format: String,
        #[arg(long)]
        iso: u32,
        /// Acquisition date, YYYY-MM-DD
        #[arg(long)]
        date_acquired: NaiveDate,
        #[arg(long)]
        source: String,
        #[arg(long)]
        expiry_date: Option<String>,
        #[arg(long)]
        device: Option<String>,
    },

    /// Append a lifecycle event (acquired, used, developed, received)
    Log { id: i64, event: String },

    /// Delete a roll
    Remove { id: i64 },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = BackendConfig::from_env()?;
    let client = FilmCollectionClient::new(config)?;

    match cli.command {
        Commands::List { keys } => {
            if keys {
                let rows = client.list_raw().await?;
                let table = film_enum_table();
                let converted: Vec<_> = rows
                    .iter()
                    .map(|row| convert_enum_values_to_keys(row, &table))
                    .collect();
                match cli.format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&converted)?)
                    }
                    OutputFormat::Pretty => {
                        for row in &converted {
                            println!("{row}");
                        }
                    }
                }
            } else {
                let rolls = client.list().await?;
                print_rolls(&rolls, cli.format)?;
            }
        }

        Commands::Show { id } => {
            let rolls = client.list().await?;
            let roll = rolls
                .into_iter()
                .find(|r| r.id == id)
                .ok_or_else(|| anyhow::anyhow!("no roll with id {id}"))?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&roll)?),
                OutputFormat::Pretty => {
                    print_roll_line(&roll);
                    for entry in roll.event_log.as_deref().unwrap_or_default() {
                        println!(
                            "    {} {}",
                            entry.date.format("%Y-%m-%d").to_string().dimmed(),
                            entry.event
                        );
                    }
                }
            }
        }

        Commands::Add {
            name,
            brand,
            film_type,
            film_format,
            iso,
            date_acquired,
            source,
            expiry_date,
            device,
        } => {
            let film_type = parse_film_type(&film_type)?;
            let film_format = parse_film_format(&film_format)?;
            let roll = FilmRoll {
                id: 0,
                created_at: None,
                name,
                brand,
                film_type,
                film_format,
                iso,
                date_acquired,
                expiry_date,
                source,
                event_log: Some(vec![LogEvent {
                    date: Utc::now(),
                    event: FilmEvent::Acquired,
                }]),
                dx_code: None,
                album_url: None,
                device,
            };
            let stored = client.create(&roll).await?;
            println!("{} roll {} ({})", "added".green().bold(), stored.id, stored.name);
        }

        Commands::Log { id, event } => {
            let event = parse_film_event(&event)?;
            let rolls = client.list().await?;
            let roll = rolls
                .into_iter()
                .find(|r| r.id == id)
                .ok_or_else(|| anyhow::anyhow!("no roll with id {id}"))?;
            let mut log = roll.event_log.unwrap_or_default();
            log.push(LogEvent {
                date: Utc::now(),
                event,
            });
            let patch = serde_json::json!({ "event_log": log });
            client.update(id, &patch).await?;
            println!("{} {} on roll {}", "logged".green().bold(), event, id);
        }

        Commands::Remove { id } => {
            client.delete(id).await?;
            println!("{} roll {}", "removed".green().bold(), id);
        }
    }

    Ok(())
}

fn print_rolls(rolls: &[FilmRoll], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rolls)?),
        OutputFormat::Pretty => {
            for roll in rolls {
                print_roll_line(roll);
            }
        }
    }
    Ok(())
}

fn print_roll_line(roll: &FilmRoll) {
    let events = roll.event_log.as_deref().map_or(0, <[LogEvent]>::len);
    println!(
        "{:>4}  {:<24} {:<10} {:<14} {:<6} ISO {:<5} {} event(s)",
        roll.id.to_string().bold(),
        roll.name,
        roll.brand,
        roll.film_type,
        roll.film_format,
        roll.iso,
        events
    );
}

/// Accept either the symbolic key or the display value.
fn parse_film_type(s: &str) -> anyhow::Result<FilmType> {
    FilmType::ALL
        .into_iter()
        .find(|t| t.key() == s)
        .or_else(|| FilmType::from_display(s))
        .ok_or_else(|| anyhow::anyhow!("unknown film type '{s}' (try: black_and_white, color, slide)"))
}

fn parse_film_format(s: &str) -> anyhow::Result<FilmFormat> {
    FilmFormat::ALL
        .into_iter()
        .find(|f| f.key() == s)
        .or_else(|| FilmFormat::from_display(s))
        .ok_or_else(|| anyhow::anyhow!("unknown film format '{s}' (try: _35mm, _120)"))
}

fn parse_film_event(s: &str) -> anyhow::Result<FilmEvent> {
    FilmEvent::ALL
        .into_iter()
        .find(|e| e.key() == s)
        .or_else(|| FilmEvent::from_display(s))
        .ok_or_else(|| {
            anyhow::anyhow!("unknown event '{s}' (try: acquired, used, developed, received)")
        })
}
