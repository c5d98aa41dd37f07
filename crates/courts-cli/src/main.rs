//! `gotcourts` CLI - report free tennis court slots, once or as a Telegram bot.
//!
//! ## Usage
//!
//! ```sh
//! # Check the next two weeks of weekends at the default club
//! gotcourts check
//!
//! # Check explicit dates at Lengg and broadcast to the configured chats
//! gotcourts check --club lengg --date "2026-10-17 2026-10-18" --ttoken $TOKEN
//!
//! # Check Fridays and Saturdays within the next 7 days
//! gotcourts check --weekdays fri,sat --ndays 7
//!
//! # Run the Telegram bot (/start, /check <club> [weekday ...])
//! gotcourts serve --ttoken $TOKEN
//!
//! # Render a report from captured payloads without network access
//! gotcourts replay --club lengg 2026-10-17=sat.json 2026-10-18=sun.json
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use courts_cli::{ChatConfig, GlobalArgs, GotCourtsClient, Settings, TelegramBot};
use courts_engine::calendar::today_in;
use courts_engine::{
    aggregate, dates_for_weekdays, parse_weekday_list, Club, ClubSnapshot, RequestProcessor,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gotcourts",
    version,
    about = "List free tennis court slots on GotCourts and send them to Telegram"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one report and print it (and broadcast it when a token is set)
    Check {
        /// Tennis club
        #[arg(long, env = "GOTCOURTS_CLUB", default_value = "mythenquai")]
        club: String,
        /// Space-separated dates (YYYY-MM-DD); overrides --weekdays
        #[arg(long, env = "GOTCOURTS_DATE")]
        date: Option<String>,
        /// Days of the week to check
        #[arg(long, env = "GOTCOURTS_WEEKDAYS", default_value = "sat,sun")]
        weekdays: String,
        /// Number of days ahead to check, today included
        #[arg(long, env = "GOTCOURTS_NDAYS", default_value_t = 14)]
        ndays: u32,
        /// YAML file listing the chat ids to broadcast to
        #[arg(long, env = "TELEGRAM_CONFIG_PATH", default_value = "config.yaml")]
        tconf: String,
    },
    /// Run the Telegram bot service
    Serve,
    /// Render a report from saved reservations payloads
    Replay {
        /// Tennis club
        #[arg(long, default_value = "mythenquai")]
        club: String,
        /// DATE=FILE pairs, reported in the given order
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let settings = Settings::from_args(&cli.global)?;

    match cli.command {
        Commands::Check {
            club,
            date,
            weekdays,
            ndays,
            tconf,
        } => {
            let club: Club = club.parse()?;
            let dates = match date.as_deref() {
                Some(raw) => raw.split_whitespace().map(str::to_string).collect(),
                None => {
                    let weekdays = parse_weekday_list(&weekdays)?;
                    dates_for_weekdays(&weekdays, today_in(settings.processor.timezone), ndays)
                }
            };
            let processor = build_processor(&settings)?;
            let report = processor
                .report(club, &dates)
                .await
                .context("Failed to build availability report")?;

            print!("{}", report);

            match &settings.telegram_token {
                Some(token) => {
                    let chats = ChatConfig::from_yaml(&tconf)?;
                    TelegramBot::new(token.clone())
                        .broadcast(&chats.chat_ids, &report)
                        .await?;
                }
                None => tracing::info!("No Telegram token provided, skipping delivery"),
            }
        }
        Commands::Serve => {
            let token = settings
                .telegram_token
                .clone()
                .context("Telegram token is not available (set --ttoken or TELEGRAM_TOKEN)")?;
            let processor = Arc::new(build_processor(&settings)?);
            let bot = Arc::new(TelegramBot::new(token));

            tokio::select! {
                result = bot.run(processor) => result?,
                signal = tokio::signal::ctrl_c() => {
                    signal.context("Failed to listen for shutdown signal")?;
                    tracing::info!("shutting down");
                }
            }
        }
        Commands::Replay { club, inputs } => {
            let club: Club = club.parse()?;
            let mut dates = Vec::with_capacity(inputs.len());
            let mut snapshots = Vec::with_capacity(inputs.len());
            for input in &inputs {
                let (date, path) = parse_replay_input(input)?;
                let body = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read file: {}", path))?;
                let snapshot = ClubSnapshot::from_api_json(&body)
                    .with_context(|| format!("Failed to decode payload: {}", path))?;
                dates.push(date.to_string());
                snapshots.push(snapshot);
            }
            let report = aggregate(club.name(), &dates, &snapshots, settings.processor.min_start)?;
            print!("{}", report);
        }
    }

    Ok(())
}

fn build_processor(settings: &Settings) -> Result<RequestProcessor> {
    let client = GotCourtsClient::new(settings.api_base.clone(), settings.http_timeout)?;
    Ok(RequestProcessor::new(Arc::new(client), settings.processor.clone()))
}

/// Split a `DATE=FILE` replay argument.
fn parse_replay_input(input: &str) -> Result<(&str, &str)> {
    match input.split_once('=') {
        Some((date, path)) if !date.trim().is_empty() && !path.trim().is_empty() => {
            Ok((date.trim(), path.trim()))
        }
        _ => anyhow::bail!("Expected DATE=FILE, got: '{}'", input),
    }
}
