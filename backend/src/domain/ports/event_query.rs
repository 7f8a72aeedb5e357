//! Driving port for event reads.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, Event, EventId};

/// Driving port for reading events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventQuery: Send + Sync {
    /// Fetch one event, failing with `not_found` when it does not exist.
    async fn get(&self, id: EventId) -> Result<Event, Error>;

    /// Fetch one page of events.
    ///
    /// Fails with `invalid_request` when the request sorts by a property
    /// events do not have.
    async fn list(&self, request: PageRequest) -> Result<Page<Event>, Error>;
}
