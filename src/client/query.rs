//! List-view filter state and the query parameters derived from it

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::models::{DateRangeMode, SortKey};

/// Flat, ordered query parameters sent to `GET /events`
pub type QueryParams = IndexMap<&'static str, String>;

pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// User-selected filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilters {
    /// Category code, empty for all
    pub category: String,
    pub featured: bool,
    pub show_past: bool,
    pub sort: SortKey,
}

/// Date range selector state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub mode: DateRangeMode,
    /// Only meaningful with `DateRangeMode::Custom`
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn named(mode: DateRangeMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn custom(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            mode: DateRangeMode::Custom,
            start_date,
            end_date,
        }
    }

    /// Explicit bounds to send, present only for a complete custom range
    pub fn custom_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.mode, self.start_date, self.end_date) {
            (DateRangeMode::Custom, Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Build the query parameters for one listing request.
///
/// Named ranges are sent as-is; the server resolves them to dates.
pub fn build_query_params(filters: &EventFilters, range: &DateRange, page: &PageRequest) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("page", page.page.to_string());
    params.insert("limit", page.limit.to_string());
    params.insert("category", filters.category.clone());
    params.insert("featured", filters.featured.to_string());
    params.insert("showPast", filters.show_past.to_string());
    params.insert("sort", filters.sort.as_str().to_string());
    params.insert("dateRange", range.mode.as_str().to_string());

    if let Some((start, end)) = range.custom_bounds() {
        params.insert("startDate", start.format("%Y-%m-%d").to_string());
        params.insert("endDate", end.format("%Y-%m-%d").to_string());
    }

    params
}
