//! Pagination types
//!
//! Response shape of the listings API:
//!
//! ```text
//! { "content": [ { "title": string|null, ... } ],
//!   "pagination": { "next_page": string|null } }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Another page is available at this URL
    Continue {
        /// URL of the next page
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// One page of listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Properties on this page, in server order
    pub content: Vec<Property>,
    /// Pagination block
    pub pagination: Pagination,
}

impl Page {
    /// Decode a response body
    ///
    /// Fails when the body is not JSON or when `content` or `pagination`
    /// is missing or null.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::parse(format!("invalid page body: {e}")))
    }

    /// Where to go after this page
    pub fn next(&self) -> NextPage {
        match self.pagination.next_page.as_deref() {
            Some(url) if !url.is_empty() => NextPage::with_url(url),
            _ => NextPage::Done,
        }
    }

    /// Titles on this page as they are printed
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.content.iter().map(Property::display_title)
    }
}

/// Pagination block of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// URL of the next page, absent or null on the last page
    #[serde(default)]
    pub next_page: Option<String>,
}

/// A single listing; fields other than `title` are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Listing title
    #[serde(default)]
    pub title: Option<String>,
}

impl Property {
    /// Title as printed: a missing or null title is an empty line
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Owned variant of [`Property::display_title`]
    pub fn into_display_title(self) -> String {
        self.title.unwrap_or_default()
    }
}
