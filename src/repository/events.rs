//! Events repository

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::event::{CreateEvent, Event, EventFilter, EventRow},
};

#[derive(Clone)]
pub struct EventsRepository {
    pool: Pool<Postgres>,
}

/// WHERE clause for `filter`; placeholders are numbered in the order
/// `bind_filter!` binds values.
fn where_clause(filter: &EventFilter) -> String {
    let mut conditions = Vec::new();
    let mut idx = 1;

    if filter.category.is_some() {
        conditions.push(format!("category = ${}", idx));
        idx += 1;
    }
    if filter.ends_after.is_some() {
        conditions.push(format!("end_date >= ${}", idx));
        idx += 1;
    }
    if filter.starts_before.is_some() {
        conditions.push(format!("start_date < ${}", idx));
    }
    if filter.featured_only {
        conditions.push("featured".to_string());
    }

    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

macro_rules! bind_filter {
    ($builder:expr, $filter:expr) => {{
        let mut builder = $builder;
        if let Some(category) = $filter.category { builder = builder.bind(category); }
        if let Some(after) = $filter.ends_after { builder = builder.bind(after); }
        if let Some(before) = $filter.starts_before { builder = builder.bind(before); }
        builder
    }};
}

impl EventsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List events matching the filter, returning the page and the total count
    pub async fn list(&self, filter: &EventFilter) -> AppResult<(Vec<Event>, i64)> {
        let where_clause = where_clause(filter);

        let count_q = format!("SELECT COUNT(*) FROM events {}", where_clause);
        let total = bind_filter!(sqlx::query_scalar::<_, i64>(&count_q), filter)
            .fetch_one(&self.pool)
            .await?;

        let select_q = format!(
            "SELECT * FROM events {} ORDER BY {} LIMIT {} OFFSET {}",
            where_clause,
            filter.sort.order_by(),
            filter.limit,
            filter.offset()
        );
        let rows = bind_filter!(sqlx::query_as::<_, EventRow>(&select_q), filter)
            .fetch_all(&self.pool)
            .await?;

        Ok((rows.into_iter().map(Event::from).collect(), total))
    }

    /// Get event by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Event> {
        sqlx::query_as::<_, EventRow>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Event::from)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    /// Create an event
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (
                id, title, short_description, description,
                start_date, end_date, all_day, category, featured,
                location, images, ticket_info
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.short_description)
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.all_day)
        .bind(data.category)
        .bind(data.featured)
        .bind(data.location.as_ref().map(Json))
        .bind(Json(&data.images))
        .bind(data.ticket_info.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }
}
