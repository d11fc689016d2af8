//! Event model (city events: concerts, festivals, workshops...)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::enums::{DateRangeMode, EventCategory, LocationKind, SortKey};

/// Event record as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    /// Category code (see `EventCategory`); kept as text so unknown codes survive
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub location: Option<EventLocation>,
    #[serde(default)]
    pub images: Vec<EventImage>,
    #[serde(default)]
    pub ticket_info: Option<TicketInfo>,
}

/// Event location. Which fields are set depends on `kind`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    #[serde(rename = "type", default)]
    pub kind: LocationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenueRef>,
    /// Reference to a map attraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attraction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Stream or meeting link for online events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VenueRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventImage {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub registration_required: bool,
    #[serde(default)]
    pub url: Option<String>,
}

/// Database row for the `events` table
#[derive(Debug, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub all_day: bool,
    pub category: EventCategory,
    pub featured: bool,
    pub location: Option<Json<EventLocation>>,
    pub images: Json<Vec<EventImage>>,
    pub ticket_info: Option<Json<TicketInfo>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            short_description: row.short_description,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            all_day: row.all_day,
            category: row.category.as_str().to_string(),
            featured: row.featured,
            location: row.location.map(|l| l.0),
            images: row.images.0,
            ticket_info: row.ticket_info.map(|t| t.0),
        }
    }
}

/// Create event request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_event_dates"))]
pub struct CreateEvent {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,
    #[validate(length(max = 300, message = "Short description is limited to 300 characters"))]
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default = "default_category")]
    pub category: EventCategory,
    #[serde(default)]
    pub featured: bool,
    pub location: Option<EventLocation>,
    #[serde(default)]
    pub images: Vec<EventImage>,
    pub ticket_info: Option<TicketInfo>,
}

fn default_category() -> EventCategory {
    EventCategory::Other
}

fn validate_event_dates(event: &CreateEvent) -> Result<(), ValidationError> {
    if event.end_date < event.start_date {
        let mut err = ValidationError::new("event_dates");
        err.message = Some("endDate must not be before startDate".into());
        return Err(err);
    }
    Ok(())
}

/// Query parameters for listing events
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EventQuery {
    /// Page number (1-based, default 1)
    pub page: Option<i64>,
    /// Page size (default from configuration)
    pub limit: Option<i64>,
    /// Category code; empty means all
    pub category: Option<String>,
    /// Only featured events when true
    pub featured: Option<bool>,
    /// Include events that already ended
    pub show_past: Option<bool>,
    pub sort: Option<SortKey>,
    pub date_range: Option<DateRangeMode>,
    /// Custom range start (YYYY-MM-DD), used with dateRange=custom
    pub start_date: Option<String>,
    /// Custom range end (YYYY-MM-DD, inclusive), used with dateRange=custom
    pub end_date: Option<String>,
}

/// Resolved listing filter handed to the repository
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilter {
    pub category: Option<EventCategory>,
    pub featured_only: bool,
    /// Keep events ending at or after this instant
    pub ends_after: Option<DateTime<Utc>>,
    /// Keep events starting strictly before this instant
    pub starts_before: Option<DateTime<Utc>>,
    pub sort: SortKey,
    /// 1-based page
    pub page: i64,
    pub limit: i64,
}

impl EventFilter {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Pagination metadata returned with every listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    /// ceil(total / limit), never below 1
    pub pages: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let pages = if limit > 0 { (total + limit - 1) / limit } else { 0 };
        Self {
            page,
            limit,
            total,
            pages: pages.max(1),
        }
    }
}

/// Paginated events response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventsListResponse {
    pub events: Vec<Event>,
    pub pagination: PaginationMeta,
}

/// Category entry for filter selectors
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryOption {
    pub code: EventCategory,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pagination_pages() {
        assert_eq!(PaginationMeta::new(1, 12, 0).pages, 1);
        assert_eq!(PaginationMeta::new(1, 12, 12).pages, 1);
        assert_eq!(PaginationMeta::new(1, 12, 13).pages, 2);
        assert_eq!(PaginationMeta::new(3, 10, 95).pages, 10);
    }

    #[test]
    fn test_event_partial_payload() {
        let json = r#"{
            "_id": "6f1c1a52-58f4-4f0e-9d7c-2b1e1c1d0a01",
            "title": "Jazz in the Park",
            "startDate": "2024-06-01T18:00:00Z",
            "endDate": "2024-06-01T21:00:00Z",
            "category": "street-art"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, "street-art");
        assert!(event.location.is_none());
        assert!(event.images.is_empty());
        assert!(!event.all_day);
    }

    #[test]
    fn test_create_event_rejects_inverted_dates() {
        let data = CreateEvent {
            title: "Marathon".into(),
            short_description: None,
            description: None,
            start_date: Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            all_day: false,
            category: EventCategory::Sport,
            featured: false,
            location: None,
            images: vec![],
            ticket_info: None,
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_create_event_rejects_empty_title() {
        let json = r#"{"title": "", "startDate": "2024-05-01T09:00:00Z", "endDate": "2024-05-01T10:00:00Z"}"#;
        let data: CreateEvent = serde_json::from_str(json).unwrap();
        assert_eq!(data.category, EventCategory::Other);
        assert!(data.validate().is_err());
    }
}
