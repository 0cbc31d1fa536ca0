// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]

//! # EasyBroker Client
//!
//! Walks the paginated EasyBroker property listings API and prints the title
//! of every listing.
//!
//! ## Features
//!
//! - **Authenticated Requests**: `X-Authorization` API key on every GET
//! - **Retry With Backoff**: 429 and 5xx responses retried with exponential delays
//! - **Next-Page Pagination**: follows `pagination.next_page` until the server stops
//! - **Lazy Titles**: titles are exposed as a `Stream`, pages fetched on demand
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use easybroker_client::{ClientConfig, HttpClient, LineSink, PropertyPaginator, Result};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new(
//!         "my-api-key",
//!         "https://api.stagingeb.com/v1/properties",
//!         Duration::from_secs(30),
//!     )?;
//!     let client = HttpClient::new(config)?;
//!
//!     let mut stdout = LineSink::stdout();
//!     PropertyPaginator::new(&client).print_all(&mut stdout).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   fetch(url)   ┌──────────────┐   GET + retry   ┌─────────┐
//! │  Paginator   │ ─────────────> │  HttpClient  │ ──────────────> │   API   │
//! │  next_page   │ <───────────── │  (Fetcher)   │ <────────────── │         │
//! └──────┬───────┘     Page       └──────────────┘                 └─────────┘
//!        │ titles
//!        v
//! ┌──────────────┐
//! │  TitleSink   │
//! └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Client configuration and retry policy
pub mod config;

/// HTTP client with retry and backoff
pub mod http;

/// Next-page pagination
pub mod pagination;

/// Title sinks
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ClientConfig, RetryPolicy};
pub use error::{Error, ErrorKind, Result};
pub use http::HttpClient;
pub use output::{LineSink, TitleSink};
pub use pagination::{Page, PropertyPaginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
