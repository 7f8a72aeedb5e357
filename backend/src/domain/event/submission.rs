//! Client-supplied event fields and partial updates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::DerivedState;

/// Every field a client may set on an event.
///
/// Presence of the required fields is checked by inbound adapters before
/// a value of this type exists; cross-field rules live in
/// [`super::validate_submission`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSubmission {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// When enrollment opens.
    pub begin_enrollment_date_time: NaiveDateTime,
    /// When enrollment closes.
    pub close_enrollment_date_time: NaiveDateTime,
    /// When the event starts.
    pub begin_event_date_time: NaiveDateTime,
    /// When the event ends.
    pub end_event_date_time: NaiveDateTime,
    /// Venue; absent or blank for online events.
    pub location: Option<String>,
    /// Entry price.
    pub base_price: i32,
    /// Price ceiling; zero means unlimited.
    pub max_price: i32,
    /// Maximum number of attendees.
    pub limit_of_enrollment: i32,
}

impl EventSubmission {
    /// Compute the `free` and `offline` flags.
    #[must_use]
    pub fn derived_state(&self) -> DerivedState {
        DerivedState {
            free: self.base_price == 0 && self.max_price == 0,
            offline: self
                .location
                .as_deref()
                .is_some_and(|location| !location.trim().is_empty()),
        }
    }

    /// Overlay the fields present in `patch`.
    #[must_use]
    pub fn merge(self, patch: EventPatch) -> Self {
        Self {
            name: patch.name.unwrap_or(self.name),
            description: patch.description.unwrap_or(self.description),
            begin_enrollment_date_time: patch
                .begin_enrollment_date_time
                .unwrap_or(self.begin_enrollment_date_time),
            close_enrollment_date_time: patch
                .close_enrollment_date_time
                .unwrap_or(self.close_enrollment_date_time),
            begin_event_date_time: patch
                .begin_event_date_time
                .unwrap_or(self.begin_event_date_time),
            end_event_date_time: patch
                .end_event_date_time
                .unwrap_or(self.end_event_date_time),
            location: patch.location.or(self.location),
            base_price: patch.base_price.unwrap_or(self.base_price),
            max_price: patch.max_price.unwrap_or(self.max_price),
            limit_of_enrollment: patch
                .limit_of_enrollment
                .unwrap_or(self.limit_of_enrollment),
        }
    }
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New enrollment opening time.
    pub begin_enrollment_date_time: Option<NaiveDateTime>,
    /// New enrollment closing time.
    pub close_enrollment_date_time: Option<NaiveDateTime>,
    /// New start time.
    pub begin_event_date_time: Option<NaiveDateTime>,
    /// New end time.
    pub end_event_date_time: Option<NaiveDateTime>,
    /// New venue. A blank value makes the event online.
    pub location: Option<String>,
    /// New entry price.
    pub base_price: Option<i32>,
    /// New price ceiling.
    pub max_price: Option<i32>,
    /// New attendee limit.
    pub limit_of_enrollment: Option<i32>,
}
