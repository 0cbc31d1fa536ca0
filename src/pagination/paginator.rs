//! Paginator over the listings API
//!
//! Drives the HTTP client across the `next_page` chain, one request at a time.

use super::types::{NextPage, Page};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output::TitleSink;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

/// Counters for a finished walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationSummary {
    /// Pages fetched
    pub pages: u64,
    /// Titles emitted
    pub titles: u64,
}

/// Follows `pagination.next_page` links and yields property titles
#[derive(Debug, Clone, Copy)]
pub struct PropertyPaginator<'a> {
    client: &'a HttpClient,
}

impl<'a> PropertyPaginator<'a> {
    /// Create a paginator on top of a client
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetch and decode a single page
    pub async fn fetch_page(&self, url: &str) -> Result<Page> {
        let response = self.client.fetch(url).await?;
        let body = response.text().await?;
        let page = Page::from_json(&body)?;
        debug!("Fetched page {} with {} properties", url, page.content.len());
        Ok(page)
    }

    /// Lazily walk the page chain starting at `start_url`
    ///
    /// A page is only requested when the consumer polls past the previous
    /// one. The stream ends after the page without a `next_page`, or right
    /// after the first error.
    pub fn pages(&self, start_url: &str) -> impl Stream<Item = Result<Page>> + 'a {
        let this = *self;
        stream::try_unfold(Some(start_url.to_string()), move |next_url| {
            this.advance(next_url)
        })
    }

    /// Lazily yield every title along the page chain, in server order
    ///
    /// Missing or null titles come through as empty strings.
    pub fn titles(&self, start_url: &str) -> impl Stream<Item = Result<String>> + 'a {
        self.pages(start_url)
            .map_ok(|page| {
                stream::iter(
                    page.content
                        .into_iter()
                        .map(|property| Ok::<_, Error>(property.into_display_title())),
                )
            })
            .try_flatten()
    }

    /// Walk the chain from the client's base endpoint into a sink
    pub async fn print_all(&self, sink: &mut impl TitleSink) -> Result<PaginationSummary> {
        let start = self.client.config().base_endpoint().to_string();
        self.print_titles(&start, sink).await
    }

    /// Walk the chain from `start_url`, emitting every title into `sink`
    pub async fn print_titles(
        &self,
        start_url: &str,
        sink: &mut impl TitleSink,
    ) -> Result<PaginationSummary> {
        let mut summary = PaginationSummary::default();
        let mut pages = Box::pin(self.pages(start_url));

        while let Some(page) = pages.next().await {
            let page = page?;
            summary.pages += 1;

            for title in page.titles() {
                sink.emit(title)?;
                summary.titles += 1;
            }
        }

        info!(
            "Pagination finished: {} pages, {} titles",
            summary.pages, summary.titles
        );
        Ok(summary)
    }

    /// Collect every title from `start_url` into memory
    pub async fn collect_titles(&self, start_url: &str) -> Result<Vec<String>> {
        self.titles(start_url).try_collect().await
    }

    /// Fetch the page at `next_url`, if any, and work out the one after it
    async fn advance(self, next_url: Option<String>) -> Result<Option<(Page, Option<String>)>> {
        let Some(url) = next_url else {
            return Ok(None);
        };

        let page = self.fetch_page(&url).await?;
        let following = match page.next() {
            NextPage::Continue { url } => Some(url),
            NextPage::Done => None,
        };
        Ok(Some((page, following)))
    }
}
