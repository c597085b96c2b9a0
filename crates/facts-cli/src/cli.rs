use std::path::PathBuf;

use clap::{Parser, Subcommand};
use facts::output::{DEFAULT_COMPANIES_PATH, DEFAULT_OUTPUT_DIR};

#[derive(Parser, Debug)]
#[command(name = "company-facts", version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Requester name sent to the SEC, as "First Last".
    #[arg(long, global = true)]
    pub(crate) name: Option<String>,

    /// Requester contact email sent to the SEC.
    #[arg(long, global = true)]
    pub(crate) email: Option<String>,

    /// Company facts request timeout in seconds.
    #[arg(long, global = true)]
    pub(crate) timeout: Option<u64>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Fetch a company's facts and write its fact document.
    Fetch {
        /// Ticker symbol, e.g. AAPL.
        ticker: String,

        /// Directory the `<TICKER>.json` document is written to.
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Also write a Parquet table of every filing.
        #[arg(long)]
        parquet: bool,
    },

    /// Print the CIK and company name for a ticker.
    Lookup {
        /// Ticker symbol, e.g. MSFT.
        ticker: String,
    },

    /// Download the SEC company reference list.
    Companies {
        /// Save the list as JSON, by default to ./data/sec/companies.json.
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_COMPANIES_PATH)]
        save: Option<PathBuf>,
    },
}
