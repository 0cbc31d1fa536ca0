//! HTTP client module
//!
//! Provides the fetcher used to talk to the listings API.
//!
//! # Features
//!
//! - **Authenticated GET**: `Accept` and `X-Authorization` headers on every request
//! - **Automatic Retries**: 429 and 5xx responses are retried with exponential backoff
//! - **Fail Fast**: other statuses and transport failures surface immediately

mod client;

pub use client::{is_retryable_status, HttpClient, AUTH_HEADER};
