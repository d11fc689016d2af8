//! API handlers for the Smart City REST endpoints

pub mod events;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use crate::{error::AppError, AppState};

/// Header carrying the administrative API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor guarding write endpoints behind the configured admin key
pub struct AdminKey;

#[async_trait]
impl FromRequestParts<AppState> for AdminKey {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing API key".to_string()))?;

        if key != state.config.events.admin_api_key {
            tracing::warn!("Rejected request with invalid API key");
            return Err(AppError::Authentication("Invalid API key".to_string()));
        }

        Ok(AdminKey)
    }
}
