mod data;
mod groups;
mod report;
mod scrape;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pulse_client::ScrapeKind;
use pulse_core::Sentiment;
use tracing_subscriber::EnvFilter;

use crate::groups::GroupsCommands;
use crate::settings::SettingsCommands;

#[derive(Debug, Parser)]
#[command(name = "pulse")]
#[command(about = "Pulse content-analytics command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Health,
    /// Print dashboard metrics for a keyword group
    Report {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Write the detail set as CSV
    Export {
        #[command(flatten)]
        view: ViewArgs,
        /// Output path (defaults to `pulse_export_<group>_<date>.csv`)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Manage keyword groups
    Groups {
        #[command(subcommand)]
        command: GroupsCommands,
    },
    /// Show or change backend settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Start a scrape job on the backend
    Scrape {
        /// What to search for: hashtag, username, or keyword
        #[arg(long)]
        kind: ScrapeKind,
        /// Hashtag, account, or search phrase
        #[arg(long)]
        query: String,
        /// Number of videos to collect
        #[arg(long, default_value = "50")]
        count: u32,
        /// Only videos published on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<chrono::NaiveDate>,
        /// Also collect comments
        #[arg(long)]
        comments: bool,
        /// Comments to collect per video
        #[arg(long, default_value = "20")]
        comments_limit: u32,
    },
}

/// Options shared by `report` and `export`.
#[derive(Debug, Clone, Args)]
struct ViewArgs {
    /// Keyword group to filter by (defaults to all data)
    #[arg(long)]
    group: Option<String>,
    /// Narrow the detail set to one sentiment
    #[arg(long)]
    sentiment: Option<Sentiment>,
    /// Narrow the detail set to one `created_at` value
    #[arg(long)]
    date: Option<String>,
    /// Read records from a local JSON snapshot instead of the backend
    #[arg(long)]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pulse_core::load_app_config_from_env().context("failed to load configuration")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("pulse: run `pulse --help` for available commands");
        return Ok(());
    };

    match command {
        Commands::Health => {
            let client = data::connect(&config)?;
            let health = client.health().await.context("health check failed")?;
            println!(
                "backend {} at {} (credentials found: {})",
                health.status, config.api_url, health.credentials_found
            );
            if !health.is_healthy() {
                anyhow::bail!("backend reported status '{}'", health.status);
            }
        }
        Commands::Report { view } => {
            let snapshot = data::load(&config, view.input.as_deref()).await?;
            report::run_report(&snapshot, &view);
        }
        Commands::Export { view, output } => {
            let snapshot = data::load(&config, view.input.as_deref()).await?;
            report::run_export(&snapshot, &view, output.as_deref())?;
        }
        Commands::Groups { command } => groups::run(&config, command).await?,
        Commands::Settings { command } => settings::run(&config, command).await?,
        Commands::Scrape {
            kind,
            query,
            count,
            since,
            comments,
            comments_limit,
        } => {
            let options = scrape::ScrapeOptions {
                kind,
                query,
                count,
                since,
                comments,
                comments_limit,
            };
            scrape::run_scrape(&config, &options).await?;
        }
    }

    Ok(())
}
