//! Command-line entry point.
//!
//! `report` runs one analysis pass over the configured tables and prints
//! the compliance report. `serve` loads the reference tables once and
//! exposes the classifier over HTTP.

use std::fs::File;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wage_compliance::api::{AppState, create_router};
use wage_compliance::classification::TracingSink;
use wage_compliance::config::ConfigLoader;
use wage_compliance::error::{EngineError, EngineResult};
use wage_compliance::pipeline::{ReferenceData, run_analysis};

#[derive(Parser)]
#[command(name = "wage-compliance", version, about = "Prevailing wage compliance report")]
struct Cli {
    /// Analysis configuration file
    #[arg(long, short, global = true, default_value = "analysis.yaml", env = "WAGE_COMPLIANCE_CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify the case table and print the report
    Report {
        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Serve the classifier over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Run failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let loader = ConfigLoader::load(&cli.config)?;
    let config = loader.into_config();

    match cli.command {
        Command::Report { json } => {
            init_file_logging(&config.log_file)?;
            let outcome = run_analysis(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.analysis.report)?);
            } else {
                print!("{}", outcome.analysis.report);
            }
        }
        Command::Serve { addr } => {
            init_console_logging();
            let mut sink = TracingSink::default();
            let reference = ReferenceData::load(&config.tables, &mut sink)?;
            let router = create_router(AppState::new(reference, config));

            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(%addr, "Listening");
            axum::serve(listener, router).await?;
        }
    }
    Ok(())
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Diagnostics go to a fresh side log so the report on stdout stays clean.
fn init_file_logging(path: &Path) -> EngineResult<()> {
    let file = File::create(path).map_err(|e| EngineError::LogFileError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn init_console_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .try_init();
}
