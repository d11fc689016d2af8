//! Event sources: where a list view gets its pages from

use async_trait::async_trait;
use thiserror::Error;

use super::{
    query::QueryParams,
    response::{parse_event_page, EventPage},
};

/// Failure to obtain a page of events
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Capability to fetch one page of events for the given query parameters
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self, params: &QueryParams) -> Result<EventPage, FetchError>;
}

/// `EventSource` backed by the events REST API
#[derive(Clone, Debug)]
pub struct HttpEventSource {
    client: reqwest::Client,
    events_url: String,
}

impl HttpEventSource {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api/v1`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            events_url: format!("{}/events", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self, params: &QueryParams) -> Result<EventPage, FetchError> {
        let response = self
            .client
            .get(&self.events_url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %self.events_url, "Events request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(parse_event_page(&body)?)
    }
}
