use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ua_compat::{analyze_file, Config, Error, UaClassifier, VersionQuery};

#[derive(Parser)]
#[command(name = "ua-compat")]
#[command(about = "Map User-Agent headers in access logs onto equivalent browser engines", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read an nginx combined-format access log and write browser/engine CSV rows to stdout
    Parse {
        /// Access log to read (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Match CSV rows produced by `parse` against a browser version query
    Analyze {
        /// CSV file produced by `parse`
        csv_file: PathBuf,

        /// Query to match each row against, e.g. 'chrome>=90,safari>=14,firefox>=90'
        query: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    match cli.command {
        Commands::Parse { input, config } => {
            let config = match config {
                Some(path) => Config::from_file(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(threads) = config.threads {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build_global()
                    .context("failed to configure worker threads")?;
            }

            let classifier = UaClassifier::with_config(&config)?;
            let stdout = io::stdout().lock();
            match input {
                Some(path) => {
                    info!("reading {}", path.display());
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    classifier.write_records(BufReader::new(file), stdout)?;
                }
                None => {
                    classifier.write_records(io::stdin().lock(), stdout)?;
                }
            }
        }

        Commands::Analyze { csv_file, query } => {
            // A bad query aborts before any row is read.
            let query = VersionQuery::parse(&query)?;
            let summary = analyze_file(&csv_file, &query)
                .with_context(|| format!("failed to analyze {}", csv_file.display()))?;
            print!("{}", summary);
            if summary.valid_rows == 0 {
                return Err(Error::EmptyCsv.into());
            }
        }
    }

    Ok(())
}
