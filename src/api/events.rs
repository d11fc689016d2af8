//! Events API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::event::{CategoryOption, CreateEvent, Event, EventQuery, EventsListResponse},
};

use super::AdminKey;

/// List events with filters and pagination
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    params(EventQuery),
    responses(
        (status = 200, description = "One page of events", body = EventsListResponse),
        (status = 400, description = "Invalid filter or pagination parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_events(
    State(state): State<crate::AppState>,
    Query(query): Query<EventQuery>,
) -> AppResult<Json<EventsListResponse>> {
    let response = state.services.events.list(&query).await?;
    Ok(Json(response))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "events",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_event(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Event>> {
    let event = state.services.events.get_by_id(id).await?;
    Ok(Json(event))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    security(("api_key" = [])),
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Invalid event", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_event(
    State(state): State<crate::AppState>,
    _admin: AdminKey,
    Json(data): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = state.services.events.create(&data).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// List event categories with their display labels
#[utoipa::path(
    get,
    path = "/events/categories",
    tag = "events",
    responses(
        (status = 200, description = "Event categories", body = Vec<CategoryOption>)
    )
)]
pub async fn list_categories(State(state): State<crate::AppState>) -> Json<Vec<CategoryOption>> {
    Json(state.services.events.categories())
}
