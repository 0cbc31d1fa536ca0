//! Pagination module
//!
//! Follows the `pagination.next_page` chain of the listings API.
//!
//! # Overview
//!
//! Each response is decoded into a [`Page`]. The paginator emits the title of
//! every property in order, then moves on to `next_page` until the server
//! stops supplying one. There is no page cap: termination is driven entirely
//! by the server.

mod paginator;
mod types;

pub use paginator::{PaginationSummary, PropertyPaginator};
pub use types::{NextPage, Page, Pagination, Property};

#[cfg(test)]
mod tests;
