//! CLI entry point for the GMD Rater tool.
//!
//! Provides subcommands for analyzing a weighing export (local file or URL)
//! and for listing the column spellings the field resolver accepts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gmd_rater::{
    fetch::{BasicClient, fetch_bytes},
    output::{append_records, print_json},
    parser::parse_records,
    pipeline,
    record::{
        AGE_ALIASES, ANIMAL_ALIASES, DATE_ALIASES, LOCATION_ALIASES, SEX_ALIASES, WEIGHT_ALIASES,
    },
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gmd_rater")]
#[command(about = "A tool to compute average daily weight gain from animal weighing records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a weighing export from a file or URL
    Analyze {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// CSV file to append summaries to
        #[arg(short, long, default_value = "gmd.csv")]
        output: String,

        /// Also log the summaries as pretty JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the accepted column spellings for each logical field
    ListAliases,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gmd_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gmd_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            output,
            json,
        } => {
            let bytes = fetcher(&source).await?;
            let records = parse_records(&bytes)?;
            info!(records = records.len(), "Export decoded");

            let summaries =
                pipeline::run(&records).context("failed to process weighing records")?;

            for summary in &summaries {
                info!(
                    animal = %summary.animal,
                    ganho_diario = summary.ganho_diario,
                    ganho_total = summary.ganho_total,
                    periodo_dias = summary.periodo_dias,
                    total_pesagens = summary.total_pesagens,
                    "Summary"
                );
            }

            if json {
                print_json(&summaries)?;
            }

            append_records(&output, &summaries)?;
            info!(
                animals = summaries.len(),
                output = %output,
                "Analysis complete"
            );
        }
        Commands::ListAliases => {
            let fields: &[(&str, &[&str])] = &[
                ("animal", ANIMAL_ALIASES),
                ("weight", WEIGHT_ALIASES),
                ("weigh_date", DATE_ALIASES),
                ("sex", SEX_ALIASES),
                ("location", LOCATION_ALIASES),
                ("age_months", AGE_ALIASES),
            ];

            for (field, aliases) in fields {
                info!(field, aliases = ?aliases, "Logical field");
            }
        }
    }

    Ok(())
}

/// Loads export data from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %url))]
async fn fetcher(url: &String) -> Result<Vec<u8>> {
    let bytes = if url.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, url).await?
    } else {
        std::fs::read(url)?
    };
    Ok(bytes)
}
