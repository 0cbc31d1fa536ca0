//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Print the title of every property in the EasyBroker listings API
#[derive(Parser, Debug, Default)]
#[command(name = "easybroker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key sent in the X-Authorization header
    #[arg(long, env = "EASYBROKER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Listings endpoint (first page)
    #[arg(long, env = "EASYBROKER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Connect and read timeout in seconds
    #[arg(long, env = "EASYBROKER_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Additional attempts on 429 and 5xx responses
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Delay after the first retryable response, in milliseconds
    #[arg(long)]
    pub base_delay_ms: Option<u64>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
