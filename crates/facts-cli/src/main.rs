//! `company-facts`: fetch SEC company facts and write per-ticker fact documents.

#![forbid(unsafe_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use facts::{CompanyFactsProvider, EdgarConfig, EdgarProvider, FactsRunner, UserAgent, output};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

mod cli;

const DEFAULT_LOG_FILTER: &str = "company_facts=info,facts=info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the EDGAR configuration from flags, falling back to `EDGAR_*`
/// environment variables for the identity.
fn edgar_config(cli: &Cli) -> Result<EdgarConfig> {
    let mut config = match (&cli.name, &cli.email) {
        (Some(name), Some(email)) => {
            let (first, last) = name
                .trim()
                .split_once(char::is_whitespace)
                .context("--name must be given as \"First Last\"")?;
            EdgarConfig::new(UserAgent::new(first, last, email)?)
        }
        (None, None) => EdgarConfig::from_env()
            .context("no --name/--email given and EDGAR_* identity is incomplete")?,
        _ => bail!("--name and --email must be given together"),
    };

    if let Some(secs) = cli.timeout {
        config = config.with_facts_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    debug!("Command line input recorded: {cli:?}");

    let config = edgar_config(&cli)?;
    info!(user_agent = %config.user_agent(), "Using SEC identity");
    let provider = Arc::new(EdgarProvider::new(config)?);

    match cli.command {
        Commands::Fetch {
            ticker,
            output_dir,
            parquet,
        } => {
            let summary = FactsRunner::new(provider)
                .with_output_dir(output_dir)
                .with_parquet(parquet)
                .run_for_ticker(&ticker)
                .await
                .with_context(|| format!("fetching company facts for {ticker}"))?;

            println!(
                "{} (CIK {}): {} concepts, {} filings -> {}",
                summary.ticker,
                summary.cik,
                summary.concepts,
                summary.filings,
                summary.path.display()
            );
            if let Some(path) = summary.parquet_path {
                println!("parquet -> {}", path.display());
            }
        }
        Commands::Lookup { ticker } => {
            let company = FactsRunner::new(provider)
                .resolve(&ticker)
                .await
                .with_context(|| format!("looking up {ticker}"))?;
            println!("{}\t{}\t{}", company.ticker, company.identifier, company.name);
        }
        Commands::Companies { save } => {
            let directory = provider
                .company_directory()
                .await
                .context("downloading the company reference list")?
                .context("the SEC returned no company reference list")?;
            println!("{} companies", directory.len());

            if let Some(path) = save {
                output::save_companies(&path, &directory)
                    .await
                    .with_context(|| format!("saving companies to {}", path.display()))?;
                println!("saved -> {}", path.display());
            }
        }
    }

    Ok(())
}
