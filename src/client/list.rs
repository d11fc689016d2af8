//! Event list view state and fetch orchestration
//!
//! `EventListView` owns filter, date range and pagination state, derives the
//! query for each fetch and applies responses. Each fetch is tagged with a
//! sequence number and only the most recent one may update the view, so a
//! slow response can never overwrite the results of a newer query.

use chrono::NaiveDate;

use crate::models::{DateRangeMode, Event, SortKey};

use super::{
    pagination::{pagination_control, PaginationControl},
    query::{build_query_params, DateRange, EventFilters, PageRequest, QueryParams, DEFAULT_PAGE_SIZE},
    response::EventPage,
    source::{EventSource, FetchError},
};

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load events. Please try again later.";

/// A fetch in flight
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: QueryParams,
}

/// What the list region should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Events(&'a [Event]),
}

/// Recovery action offered next to an empty or failed list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    ClearFilters,
    Retry,
}

#[derive(Debug, Clone)]
pub struct EventListView {
    filters: EventFilters,
    date_range: DateRange,
    page: PageRequest,
    total: u64,
    pages: u32,
    events: Vec<Event>,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl Default for EventListView {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListView {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(limit: u32) -> Self {
        Self {
            filters: EventFilters::default(),
            date_range: DateRange::default(),
            page: PageRequest {
                page: 1,
                limit: limit.max(1),
            },
            total: 0,
            pages: 1,
            events: Vec::new(),
            loading: false,
            error: None,
            latest_seq: 0,
        }
    }

    pub fn filters(&self) -> &EventFilters {
        &self.filters
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    pub fn page(&self) -> u32 {
        self.page.page
    }

    pub fn limit(&self) -> u32 {
        self.page.limit
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ---- Filters (every change goes back to page 1) ----

    /// Replace filters wholesale
    pub fn set_filters(&mut self, filters: EventFilters) {
        self.filters = filters;
        self.page.page = 1;
    }

    /// Edit filters in place
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut EventFilters)) {
        edit(&mut self.filters);
        self.page.page = 1;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.update_filters(|f| f.category = category);
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.update_filters(|f| f.featured = featured);
    }

    pub fn set_show_past(&mut self, show_past: bool) {
        self.update_filters(|f| f.show_past = show_past);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.update_filters(|f| f.sort = sort);
    }

    /// Switch the date range mode; custom dates typed earlier are kept
    pub fn set_date_range_mode(&mut self, mode: DateRangeMode) {
        self.date_range.mode = mode;
        self.page.page = 1;
    }

    pub fn set_custom_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.date_range.start_date = start;
        self.date_range.end_date = end;
        self.page.page = 1;
    }

    /// Back to the default filters and date range, custom dates cleared
    pub fn clear_filters(&mut self) {
        self.filters = EventFilters::default();
        self.date_range = DateRange::default();
        self.page.page = 1;
    }

    // ---- Pagination ----

    pub fn set_page_size(&mut self, limit: u32) {
        self.page.limit = limit.max(1);
        self.page.page = 1;
    }

    /// Jump to `page`; refused (returns false) outside `1..=pages`
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.pages {
            return false;
        }
        self.page.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        match self.page.page.checked_add(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    pub fn prev_page(&mut self) -> bool {
        self.page.page > 1 && self.go_to_page(self.page.page - 1)
    }

    pub fn pagination(&self) -> Option<PaginationControl> {
        pagination_control(self.page.page, self.pages)
    }

    // ---- Fetching ----

    pub fn query_params(&self) -> QueryParams {
        build_query_params(&self.filters, &self.date_range, &self.page)
    }

    /// Start a fetch for the current state and mark the view as loading
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        FetchTicket {
            seq: self.latest_seq,
            params: self.query_params(),
        }
    }

    /// Apply the outcome of fetch `seq`. Outcomes of superseded fetches are
    /// dropped; returns whether the view changed.
    pub fn complete_fetch(&mut self, seq: u64, result: Result<EventPage, FetchError>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale events response");
            return false;
        }

        match result {
            Ok(page) => {
                tracing::debug!(seq, count = page.events.len(), total = page.total, "Events loaded");
                self.events = page.events;
                self.total = page.total;
                self.pages = page.pages.max(1);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "Failed to load events");
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Fetch the page matching the current state from `source`
    pub async fn refresh(&mut self, source: &dyn EventSource) {
        let ticket = self.begin_fetch();
        let result = source.fetch_events(&ticket.params).await;
        self.complete_fetch(ticket.seq, result);
    }

    /// Full reload: all state goes back to defaults, then a fresh fetch.
    /// Responses to fetches issued before the reload are still discarded.
    pub async fn reload(&mut self, source: &dyn EventSource) {
        let latest_seq = self.latest_seq;
        *self = Self::new();
        self.latest_seq = latest_seq;
        self.refresh(source).await;
    }

    // ---- Rendering ----

    pub fn display(&self) -> ListDisplay<'_> {
        if self.loading {
            ListDisplay::Loading
        } else if let Some(message) = &self.error {
            ListDisplay::Error(message)
        } else if self.events.is_empty() {
            ListDisplay::Empty
        } else {
            ListDisplay::Events(&self.events)
        }
    }

    pub fn action(&self) -> Option<ListAction> {
        match self.display() {
            ListDisplay::Error(_) => Some(ListAction::Retry),
            ListDisplay::Empty => Some(ListAction::ClearFilters),
            _ => None,
        }
    }
}
