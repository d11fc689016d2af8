//! Data models for the Smart City events API

pub mod enums;
pub mod event;

// Re-export commonly used types
pub use enums::{DateRangeMode, EventCategory, LocationKind, SortKey};
pub use event::{Event, EventLocation, EventsListResponse, PaginationMeta, TicketInfo};
