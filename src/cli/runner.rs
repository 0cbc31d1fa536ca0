//! CLI runner - resolves settings and prints titles

use crate::cli::commands::Cli;
use crate::config::{ClientConfig, FileConfig, RetryPolicy, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output::{LineSink, TitleSink};
use crate::pagination::{PaginationSummary, PropertyPaginator};
use std::time::Duration;
use tracing::debug;

/// Settings after merging flags, environment, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Connection settings
    pub client: ClientConfig,
    /// Retry settings
    pub retry: RetryPolicy,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Print every title to standard output
    pub async fn run(&self) -> Result<()> {
        let mut sink = LineSink::stdout();
        self.run_with_sink(&mut sink).await?;
        Ok(())
    }

    /// Print every title into the given sink
    pub async fn run_with_sink(&self, sink: &mut impl TitleSink) -> Result<PaginationSummary> {
        let settings = self.resolve()?;
        debug!("Resolved settings: {:?}", settings);

        let client = HttpClient::with_retry(settings.client, settings.retry)?;
        PropertyPaginator::new(&client).print_all(sink).await
    }

    /// Merge flags (environment already folded in by clap) over the config file
    pub fn resolve(&self) -> Result<ResolvedSettings> {
        let file = match &self.cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let api_key = self
            .cli
            .api_key
            .clone()
            .or(file.api_key)
            .ok_or_else(|| Error::missing_field("api_key"))?;

        let endpoint = self
            .cli
            .endpoint
            .clone()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = self
            .cli
            .timeout
            .or(file.timeout_secs)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        let defaults = RetryPolicy::default();
        let retry = RetryPolicy::new(
            self.cli
                .max_retries
                .or(file.max_retries)
                .unwrap_or(defaults.max_retries),
            self.cli
                .base_delay_ms
                .or(file.base_delay_ms)
                .map_or(defaults.base_delay, Duration::from_millis),
        );

        Ok(ResolvedSettings {
            client: ClientConfig::new(api_key, endpoint, timeout)?,
            retry,
        })
    }
}
