//! Business logic services

pub mod date_range;
pub mod events;

use crate::{config::EventsConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub events: events::EventsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, events_config: EventsConfig) -> Self {
        Self {
            events: events::EventsService::new(repository, events_config),
        }
    }
}
