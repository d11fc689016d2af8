//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{events, health, API_KEY_HEADER};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart City API",
        version = "1.0.0",
        description = "City events REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Events
        events::list_events,
        events::get_event,
        events::create_event,
        events::list_categories,
    ),
    components(
        schemas(
            // Events
            crate::models::event::Event,
            crate::models::event::EventLocation,
            crate::models::event::VenueRef,
            crate::models::event::Address,
            crate::models::event::EventImage,
            crate::models::event::TicketInfo,
            crate::models::event::CreateEvent,
            crate::models::event::EventQuery,
            crate::models::event::PaginationMeta,
            crate::models::event::EventsListResponse,
            crate::models::event::CategoryOption,
            crate::models::enums::EventCategory,
            crate::models::enums::SortKey,
            crate::models::enums::DateRangeMode,
            crate::models::enums::LocationKind,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&ApiKeyAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "City events listing")
    )
)]
pub struct ApiDoc;

struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_event_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/events"));
        assert!(doc.paths.paths.contains_key("/events/{id}"));
        assert!(doc.paths.paths.contains_key("/events/categories"));
    }
}
