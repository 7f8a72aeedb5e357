//! Event domain service.
//!
//! Implements the event driving ports on top of an [`EventRepository`]:
//! validation and derived-state computation happen here, storage and
//! paging in the adapter.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{EventCommand, EventQuery, EventRepository, EventRepositoryError};
use crate::domain::{
    Error, Event, EventId, EventPatch, EventSubmission, NewEvent, ensure_sortable,
    validate_submission, validation_error,
};

fn map_repository_error(error: EventRepositoryError) -> Error {
    debug!(%error, "event repository call failed");
    match error {
        EventRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("event repository unavailable: {message}"))
        }
        EventRepositoryError::Query { message } => {
            Error::internal(format!("event repository error: {message}"))
        }
        EventRepositoryError::NotFound { id } => Error::not_found(format!("event {id} not found")),
    }
}

fn not_found(id: EventId) -> Error {
    Error::not_found(format!("event {id} not found"))
}

fn check(submission: &EventSubmission) -> Result<(), Error> {
    let errors = validate_submission(submission);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(validation_error(errors))
    }
}

/// Event service implementing [`EventCommand`] and [`EventQuery`].
#[derive(Clone)]
pub struct EventService<R> {
    event_repo: Arc<R>,
}

impl<R> EventService<R> {
    /// Create a new service over the event repository.
    pub fn new(event_repo: Arc<R>) -> Self {
        Self { event_repo }
    }
}

impl<R> EventService<R>
where
    R: EventRepository,
{
    async fn load(&self, id: EventId) -> Result<Event, Error> {
        self.event_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R> EventCommand for EventService<R>
where
    R: EventRepository,
{
    async fn create(&self, submission: EventSubmission) -> Result<Event, Error> {
        check(&submission)?;
        self.event_repo
            .insert(NewEvent::draft(submission))
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, id: EventId, patch: EventPatch) -> Result<Event, Error> {
        let stored = self.load(id).await?;
        let merged = stored.submission().clone().merge(patch);
        check(&merged)?;

        let revised = stored.revise(merged);
        self.event_repo
            .update(&revised)
            .await
            .map_err(map_repository_error)?;
        Ok(revised)
    }
}

#[async_trait]
impl<R> EventQuery for EventService<R>
where
    R: EventRepository,
{
    async fn get(&self, id: EventId) -> Result<Event, Error> {
        self.load(id).await
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Event>, Error> {
        ensure_sortable(&request)?;
        self.event_repo
            .list(&request)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "event_service_tests.rs"]
mod tests;
