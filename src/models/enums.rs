//! Shared domain enums for city events

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EventCategory
// ---------------------------------------------------------------------------

/// Event category codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EventCategory {
    Conference,
    Exhibition,
    Concert,
    Festival,
    Sport,
    Workshop,
    Community,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 8] = [
        EventCategory::Conference,
        EventCategory::Exhibition,
        EventCategory::Concert,
        EventCategory::Festival,
        EventCategory::Sport,
        EventCategory::Workshop,
        EventCategory::Community,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Conference => "conference",
            EventCategory::Exhibition => "exhibition",
            EventCategory::Concert => "concert",
            EventCategory::Festival => "festival",
            EventCategory::Sport => "sport",
            EventCategory::Workshop => "workshop",
            EventCategory::Community => "community",
            EventCategory::Other => "other",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Conference => "Conference",
            EventCategory::Exhibition => "Exhibition",
            EventCategory::Concert => "Concert",
            EventCategory::Festival => "Festival",
            EventCategory::Sport => "Sport",
            EventCategory::Workshop => "Workshop",
            EventCategory::Community => "Community",
            EventCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conference" => Ok(EventCategory::Conference),
            "exhibition" => Ok(EventCategory::Exhibition),
            "concert" => Ok(EventCategory::Concert),
            "festival" => Ok(EventCategory::Festival),
            "sport" => Ok(EventCategory::Sport),
            "workshop" => Ok(EventCategory::Workshop),
            "community" => Ok(EventCategory::Community),
            "other" => Ok(EventCategory::Other),
            _ => Err(format!("Invalid event category: {}", s)),
        }
    }
}

// Deserialized through `FromStr`, case-insensitively like query strings
impl TryFrom<String> for EventCategory {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// Stored as TEXT
impl sqlx::Type<Postgres> for EventCategory {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for EventCategory {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for EventCategory {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Ordering applied to an events listing. A leading `-` means descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SortKey {
    #[default]
    #[serde(rename = "startDate")]
    StartDate,
    #[serde(rename = "-startDate")]
    StartDateDesc,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "-title")]
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::StartDate,
        SortKey::StartDateDesc,
        SortKey::Title,
        SortKey::TitleDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::StartDate => "startDate",
            SortKey::StartDateDesc => "-startDate",
            SortKey::Title => "title",
            SortKey::TitleDesc => "-title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::StartDate => "Date (earliest first)",
            SortKey::StartDateDesc => "Date (latest first)",
            SortKey::Title => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
        }
    }

    /// SQL ORDER BY body; id breaks ties so pages stay stable
    pub fn order_by(&self) -> &'static str {
        match self {
            SortKey::StartDate => "start_date ASC, id ASC",
            SortKey::StartDateDesc => "start_date DESC, id ASC",
            SortKey::Title => "title ASC, id ASC",
            SortKey::TitleDesc => "title DESC, id ASC",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DateRangeMode
// ---------------------------------------------------------------------------

/// Named date windows; everything but `Custom` is resolved server-side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DateRangeMode {
    #[default]
    Upcoming,
    Today,
    Tomorrow,
    ThisWeek,
    ThisWeekend,
    NextWeek,
    ThisMonth,
    Custom,
}

impl DateRangeMode {
    pub const ALL: [DateRangeMode; 8] = [
        DateRangeMode::Upcoming,
        DateRangeMode::Today,
        DateRangeMode::Tomorrow,
        DateRangeMode::ThisWeek,
        DateRangeMode::ThisWeekend,
        DateRangeMode::NextWeek,
        DateRangeMode::ThisMonth,
        DateRangeMode::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRangeMode::Upcoming => "upcoming",
            DateRangeMode::Today => "today",
            DateRangeMode::Tomorrow => "tomorrow",
            DateRangeMode::ThisWeek => "thisWeek",
            DateRangeMode::ThisWeekend => "thisWeekend",
            DateRangeMode::NextWeek => "nextWeek",
            DateRangeMode::ThisMonth => "thisMonth",
            DateRangeMode::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRangeMode::Upcoming => "Upcoming",
            DateRangeMode::Today => "Today",
            DateRangeMode::Tomorrow => "Tomorrow",
            DateRangeMode::ThisWeek => "This week",
            DateRangeMode::ThisWeekend => "This weekend",
            DateRangeMode::NextWeek => "Next week",
            DateRangeMode::ThisMonth => "This month",
            DateRangeMode::Custom => "Custom range",
        }
    }
}

impl std::fmt::Display for DateRangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LocationKind
// ---------------------------------------------------------------------------

/// Where an event takes place
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Venue,
    Attraction,
    Online,
    Address,
    #[default]
    #[serde(other)]
    Unknown,
}
