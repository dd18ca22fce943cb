//! mika-ffstalk
//!
//! Looks up one Free Fire account and prints it as a colorized summary
//! (default), a table (`--table`) or the full normalized record (`--json`).
//! Progress and errors go to stderr; exit status is 1 on any failure.

mod render;
mod status;
mod table;

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use ffstalk_core::{ClientConfig, PlayerInfoClient, DEFAULT_BASE_URL, DEFAULT_REGION};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use render::OutputMode;
use status::Status;

#[derive(Debug, Parser)]
#[command(name = "mika-ffstalk", version, about = "Inspect Free Fire user accounts")]
struct Cli {
    /// Free Fire UID to fetch
    uid: Option<String>,

    /// Output raw JSON
    #[arg(long)]
    json: bool,

    /// Output formatted summary in a table
    #[arg(long)]
    table: bool,

    /// Upstream API base URL
    #[arg(long, env = "FFSTALK_API_BASE", default_value = DEFAULT_BASE_URL)]
    api_base: String,

    /// Region code sent to the upstream
    #[arg(long, env = "FFSTALK_REGION", default_value = DEFAULT_REGION)]
    region: String,

    /// Write debug logs to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.api_base.as_str())
            .with_region(self.region.as_str())
    }

    /// The UID argument, if one was given and is not blank.
    fn uid(&self) -> Option<&str> {
        self.uid.as_deref().map(str::trim).filter(|uid| !uid.is_empty())
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // stdout carries the rendered record, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(verbose),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

async fn run(cli: &Cli, uid: &str) -> anyhow::Result<()> {
    let config = cli.client_config();
    tracing::debug!("Using upstream {} (region {})", config.base_url, config.region);

    let client = PlayerInfoClient::new(config);
    let mode = OutputMode::from_flags(cli.json, cli.table);

    let status = Status::start(
        &format!("Fetching Free Fire data for UID: {uid}..."),
        mode == OutputMode::Json,
    );
    let record = match client.fetch_account(uid).await {
        Ok(record) => {
            status.succeed("Data fetched successfully!");
            record
        }
        Err(e) => {
            status.fail("Failed to fetch data.");
            return Err(e.into());
        }
    };

    let output = mode
        .render(&record)
        .context("Failed to serialize player record")?;
    println!("{output}");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(uid) = cli.uid() else {
        if let Err(e) = Cli::command().print_help() {
            tracing::debug!("Failed to print help: {e}");
        }
        return ExitCode::FAILURE;
    };

    if let Err(e) = run(&cli, uid).await {
        tracing::debug!("Lookup failed: {e:?}");
        eprintln!("{} {e:#}", "Error:".red());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
