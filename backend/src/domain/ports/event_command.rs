//! Driving port for event writes.

use async_trait::async_trait;

use crate::domain::{Error, Event, EventId, EventPatch, EventSubmission};

/// Driving port for creating and updating events.
///
/// Inbound adapters call this port after presence checks; implementations
/// run the cross-field rules and recompute derived state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventCommand: Send + Sync {
    /// Validate and store a new event in draft status.
    ///
    /// Fails with `invalid_request` carrying `details.errors` when the
    /// submission breaks a rule.
    async fn create(&self, submission: EventSubmission) -> Result<Event, Error>;

    /// Merge `patch` onto the stored event, validate, and store the result.
    ///
    /// Fails with `not_found` for an unknown identifier and with
    /// `invalid_request` when the merged event breaks a rule.
    async fn update(&self, id: EventId, patch: EventPatch) -> Result<Event, Error>;
}
