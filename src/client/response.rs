//! Lenient decoding of listing responses

use serde::Deserialize;

use crate::models::Event;

/// Wire shape of `GET /events`; every part may be missing or null
#[derive(Debug, Default, Deserialize)]
pub struct RawEventsResponse {
    #[serde(default)]
    pub events: Option<Vec<Event>>,
    #[serde(default)]
    pub pagination: Option<RawPagination>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPagination {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub pages: Option<i64>,
}

/// A page of events with sane pagination numbers
#[derive(Debug, Clone, PartialEq)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub total: u64,
    /// Always at least 1
    pub pages: u32,
}

impl Default for EventPage {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            total: 0,
            pages: 1,
        }
    }
}

impl From<RawEventsResponse> for EventPage {
    fn from(raw: RawEventsResponse) -> Self {
        let pagination = raw.pagination.unwrap_or_default();
        let total = pagination.total.unwrap_or(0).max(0) as u64;
        let pages = pagination
            .pages
            .unwrap_or(1)
            .clamp(1, u32::MAX as i64) as u32;

        EventPage {
            events: raw.events.unwrap_or_default(),
            total,
            pages,
        }
    }
}

/// Decode a response body into an `EventPage`
pub fn parse_event_page(body: &[u8]) -> Result<EventPage, serde_json::Error> {
    let raw: RawEventsResponse = serde_json::from_slice(body)?;
    Ok(raw.into())
}
