//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EventCommand, EventQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Event writes.
    pub events: Arc<dyn EventCommand>,
    /// Event reads.
    pub events_query: Arc<dyn EventQuery>,
}

impl HttpState {
    /// Bundle the event ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use event_api::domain::EventService;
    /// use event_api::inbound::http::state::HttpState;
    /// use event_api::outbound::memory::InMemoryEventRepository;
    ///
    /// let service = Arc::new(EventService::new(Arc::new(InMemoryEventRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _events = state.events.clone();
    /// ```
    pub fn new(events: Arc<dyn EventCommand>, events_query: Arc<dyn EventQuery>) -> Self {
        Self {
            events,
            events_query,
        }
    }
}
