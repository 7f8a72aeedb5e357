//! Driven port for event persistence.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Event, EventId, NewEvent};

use super::define_port_error;

define_port_error! {
    /// Errors raised by event repository adapters.
    pub enum EventRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "event repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "event repository query failed: {message}",
        /// The event to update does not exist.
        NotFound { id: i32 } =>
            "event {id} does not exist",
    }
}

/// Port for storing and paging through events.
///
/// Adapters own paging and ordering. Sort properties reaching an adapter
/// have already been checked with [`crate::domain::ensure_sortable`]; an
/// empty sort list means ascending by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event and return it with its assigned identifier.
    async fn insert(&self, event: NewEvent) -> Result<Event, EventRepositoryError>;

    /// Find an event by identifier.
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventRepositoryError>;

    /// Overwrite a stored event.
    async fn update(&self, event: &Event) -> Result<(), EventRepositoryError>;

    /// Read one page of events.
    async fn list(&self, request: &PageRequest) -> Result<Page<Event>, EventRepositoryError>;
}
