//! dayalbum: history browser for the daily album game.
//!
//! Subcommands:
//! - `history`: list every unlocked day as a button
//! - `play`: open the game page for one of those days

use std::time::Duration;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dayalbum_history::{
    CutoffPolicy, DEFAULT_PLACEHOLDER_DAYS, GamePage, HistoryClient, HistoryConfig,
    HistoryListBuilder,
};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "dayalbum")]
#[command(about = "Browse past days of the daily album game", long_about = None)]
struct Cli {
    /// Backend origin serving /api/historial-completo
    #[arg(long, env = "DAYALBUM_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    /// URL of the history page; game links are resolved against it (defaults to the API origin)
    #[arg(long, env = "DAYALBUM_PAGE_URL")]
    page_url: Option<String>,

    /// Campaign start date (day 1), YYYY-MM-DD
    #[arg(long, env = "DAYALBUM_START_DATE", default_value = "2026-01-26")]
    start_date: NaiveDate,

    /// Last visible day: "yesterday" (completed days only) or "today"
    #[arg(long, env = "DAYALBUM_CUTOFF", default_value = "yesterday")]
    cutoff: CutoffPolicy,

    /// Minimum number of placeholder days shown when the backend is unavailable
    #[arg(long, env = "DAYALBUM_PLACEHOLDER_DAYS", default_value_t = DEFAULT_PLACEHOLDER_DAYS)]
    placeholder_days: u32,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the unlocked days
    History {
        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the game page for a day, chosen by number or by date
    Play {
        /// Day number
        #[arg(long, required_unless_present = "date", conflicts_with = "date")]
        day: Option<u32>,

        /// Scheduled date, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the page output.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "dayalbum=info,dayalbum_history=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = HistoryClient::with_timeout(&cli.api_url, Duration::from_secs(cli.timeout))
        .map_err(|e| miette::miette!("failed to create HTTP client: {}", e))?;

    let page = GamePage::parse(cli.page_url.as_deref().unwrap_or(&cli.api_url))
        .map_err(|e| miette::miette!("invalid page URL: {}", e))?;

    let builder = HistoryListBuilder::new(HistoryConfig {
        start_date: cli.start_date,
        cutoff: cli.cutoff,
        min_placeholder_days: cli.placeholder_days,
    });

    tracing::debug!(
        api_url = %client.base_url(),
        start_date = %cli.start_date,
        cutoff = %cli.cutoff,
        "loading album history"
    );

    match cli.command {
        Commands::History { json } => commands::history(&builder, &client, &page, json).await,
        Commands::Play { day, date } => {
            let selector = match (day, date) {
                (Some(day), _) => commands::DaySelector::Number(day),
                (None, Some(date)) => commands::DaySelector::Date(date),
                (None, None) => return Err(miette::miette!("pass --day or --date")),
            };
            commands::play(&builder, &client, &page, selector).await
        }
    }
}
