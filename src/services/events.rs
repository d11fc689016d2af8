//! Events service

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::EventsConfig,
    error::{AppError, AppResult},
    models::{
        event::{CategoryOption, CreateEvent, EventFilter, EventQuery},
        DateRangeMode, Event, EventCategory, EventsListResponse, PaginationMeta,
    },
    repository::Repository,
};

use super::date_range;

#[derive(Clone)]
pub struct EventsService {
    repository: Repository,
    config: EventsConfig,
}

impl EventsService {
    pub fn new(repository: Repository, config: EventsConfig) -> Self {
        Self { repository, config }
    }

    /// List one page of events matching the query
    pub async fn list(&self, query: &EventQuery) -> AppResult<EventsListResponse> {
        let filter = build_filter(query, &self.config, Utc::now())?;
        tracing::debug!(?filter, "Listing events");

        let (events, total) = self.repository.events.list(&filter).await?;
        Ok(EventsListResponse {
            events,
            pagination: PaginationMeta::new(filter.page, filter.limit, total),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Event> {
        self.repository.events.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        data.validate()?;
        let event = self.repository.events.create(data).await?;
        tracing::info!(id = %event.id, title = %event.title, "Event created");
        Ok(event)
    }

    pub fn categories(&self) -> Vec<CategoryOption> {
        EventCategory::ALL
            .iter()
            .map(|c| CategoryOption {
                code: *c,
                label: c.label().to_string(),
            })
            .collect()
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid {} (expected YYYY-MM-DD): {}", field, value)))
}

/// Validate query parameters and resolve them into a repository filter
pub fn build_filter(
    query: &EventQuery,
    config: &EventsConfig,
    now: DateTime<Utc>,
) -> AppResult<EventFilter> {
    let page = query.page.unwrap_or(1);
    if page < 1 {
        return Err(AppError::BadRequest("page must be >= 1".to_string()));
    }
    let limit = query
        .limit
        .unwrap_or(config.default_page_size)
        .clamp(1, config.max_page_size.max(1));
    if (page - 1).checked_mul(limit).is_none() {
        return Err(AppError::BadRequest("page is out of range".to_string()));
    }

    let category = non_empty(&query.category)
        .map(|c| c.parse::<EventCategory>())
        .transpose()
        .map_err(AppError::BadRequest)?;

    let mode = query.date_range.unwrap_or_default();
    let custom = if mode == DateRangeMode::Custom {
        match (non_empty(&query.start_date), non_empty(&query.end_date)) {
            (Some(start), Some(end)) => {
                let start = parse_date(start, "startDate")?;
                let end = parse_date(end, "endDate")?;
                if end < start {
                    return Err(AppError::BadRequest(
                        "endDate must not be before startDate".to_string(),
                    ));
                }
                Some((start, end))
            }
            _ => None,
        }
    } else {
        None
    };

    let mut bounds = date_range::resolve(mode, custom, now)
        .ok_or_else(|| AppError::BadRequest("dateRange is out of range".to_string()))?;
    if !query.show_past.unwrap_or(false) {
        bounds.ends_after = Some(bounds.ends_after.map_or(now, |t| t.max(now)));
    }

    Ok(EventFilter {
        category,
        featured_only: query.featured.unwrap_or(false),
        ends_after: bounds.ends_after,
        starts_before: bounds.starts_before,
        sort: query.sort.unwrap_or_default(),
        page,
        limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortKey;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 12, 15, 30, 0).unwrap()
    }

    fn config() -> EventsConfig {
        EventsConfig::default()
    }

    #[test]
    fn test_defaults() {
        let filter = build_filter(&EventQuery::default(), &config(), now()).unwrap();
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 12);
        assert_eq!(filter.offset(), 0);
        assert_eq!(filter.category, None);
        assert!(!filter.featured_only);
        assert_eq!(filter.sort, SortKey::StartDate);
        assert_eq!(filter.ends_after, Some(now()));
        assert_eq!(filter.starts_before, None);
    }

    #[test]
    fn test_page_and_limit() {
        let query = EventQuery {
            page: Some(3),
            limit: Some(500),
            ..Default::default()
        };
        let filter = build_filter(&query, &config(), now()).unwrap();
        assert_eq!(filter.limit, 100);
        assert_eq!(filter.offset(), 200);

        let query = EventQuery {
            page: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            build_filter(&query, &config(), now()),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_page_too_large_for_offset() {
        let query = EventQuery {
            page: Some(i64::MAX),
            ..Default::default()
        };
        assert!(matches!(
            build_filter(&query, &config(), now()),
            Err(AppError::BadRequest(_))
        ));

        let query = EventQuery {
            page: Some(i64::MAX / 100),
            limit: Some(100),
            ..Default::default()
        };
        let filter = build_filter(&query, &config(), now()).unwrap();
        assert!(filter.offset() > 0);
    }

    #[test]
    fn test_custom_range_at_last_date() {
        let query = EventQuery {
            date_range: Some(DateRangeMode::Custom),
            start_date: Some("+262142-12-31".to_string()),
            end_date: Some("+262142-12-31".to_string()),
            show_past: Some(true),
            ..Default::default()
        };
        assert!(matches!(
            build_filter(&query, &config(), now()),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_category_filter() {
        let query = EventQuery {
            category: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(build_filter(&query, &config(), now()).unwrap().category, None);

        let query = EventQuery {
            category: Some("concert".into()),
            ..Default::default()
        };
        assert_eq!(
            build_filter(&query, &config(), now()).unwrap().category,
            Some(EventCategory::Concert)
        );

        let query = EventQuery {
            category: Some("karaoke".into()),
            ..Default::default()
        };
        assert!(build_filter(&query, &config(), now()).is_err());
    }

    #[test]
    fn test_show_past_lifts_lower_bound() {
        let query = EventQuery {
            show_past: Some(true),
            date_range: Some(DateRangeMode::Today),
            ..Default::default()
        };
        let filter = build_filter(&query, &config(), now()).unwrap();
        assert_eq!(
            filter.ends_after,
            Some(Utc.with_ymd_and_hms(2024, 6, 12, 0, 0, 0).unwrap())
        );

        let query = EventQuery {
            show_past: Some(false),
            date_range: Some(DateRangeMode::Today),
            ..Default::default()
        };
        let filter = build_filter(&query, &config(), now()).unwrap();
        assert_eq!(filter.ends_after, Some(now()));
    }

    #[test]
    fn test_custom_range() {
        let query = EventQuery {
            date_range: Some(DateRangeMode::Custom),
            show_past: Some(true),
            start_date: Some("2024-07-01".into()),
            end_date: Some("2024-07-02".into()),
            ..Default::default()
        };
        let filter = build_filter(&query, &config(), now()).unwrap();
        assert_eq!(
            filter.starts_before,
            Some(Utc.with_ymd_and_hms(2024, 7, 3, 0, 0, 0).unwrap())
        );

        let inverted = EventQuery {
            date_range: Some(DateRangeMode::Custom),
            start_date: Some("2024-07-05".into()),
            end_date: Some("2024-07-02".into()),
            ..Default::default()
        };
        assert!(build_filter(&inverted, &config(), now()).is_err());

        let half = EventQuery {
            date_range: Some(DateRangeMode::Custom),
            show_past: Some(true),
            start_date: Some("2024-07-05".into()),
            end_date: Some(String::new()),
            ..Default::default()
        };
        let filter = build_filter(&half, &config(), now()).unwrap();
        assert_eq!(filter.ends_after, None);
        assert_eq!(filter.starts_before, None);
    }

    #[test]
    fn test_custom_dates_ignored_outside_custom_mode() {
        let query = EventQuery {
            date_range: Some(DateRangeMode::Upcoming),
            start_date: Some("not-a-date".into()),
            end_date: Some("2024-07-02".into()),
            ..Default::default()
        };
        let filter = build_filter(&query, &config(), now()).unwrap();
        assert_eq!(filter.starts_before, None);
    }
}
