//! List-view client for the events API
//!
//! Holds the state behind an events listing (filters, date range, page),
//! turns it into query parameters for `GET /events`, and renders the
//! response into display-ready pieces: page buttons and card labels.

pub mod format;
pub mod list;
pub mod pagination;
pub mod query;
pub mod response;
pub mod source;

pub use list::{EventListView, FetchTicket, ListAction, ListDisplay};
pub use pagination::{PageItem, PaginationControl};
pub use query::{DateRange, EventFilters, PageRequest, QueryParams};
pub use response::EventPage;
pub use source::{EventSource, FetchError, HttpEventSource};
