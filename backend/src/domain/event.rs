//! Event aggregate.
//!
//! An [`Event`] is an accepted [`EventSubmission`] plus a store-assigned
//! identifier, the derived `free`/`offline` flags, and a lifecycle status.
//! Derived flags are recomputed from the submission whenever an event is
//! built, so they can never drift from the prices and location they
//! summarise.

mod sort;
mod submission;
mod validation;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use sort::{EventSortField, UnsortableProperty, ensure_sortable};
pub use submission::{EventPatch, EventSubmission};
pub use validation::{FieldError, SUBMISSION_OBJECT_NAME, validate_submission, validation_error};

/// Store-assigned event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i32);

impl EventId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Created but not yet visible.
    #[default]
    Draft,
    /// Visible to prospective attendees.
    Published,
    /// Enrollment is open.
    BeganEnrollment,
    /// Enrollment has closed.
    ClosedEnrollment,
    /// The event is running.
    Started,
    /// The event is over.
    Ended,
}

impl EventStatus {
    /// Wire and storage token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::BeganEnrollment => "BEGAN_ENROLLMENT",
            Self::ClosedEnrollment => "CLOSED_ENROLLMENT",
            Self::Started => "STARTED",
            Self::Ended => "ENDED",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event status: {0}")]
pub struct UnknownEventStatus(pub String);

impl FromStr for EventStatus {
    type Err = UnknownEventStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "BEGAN_ENROLLMENT" => Ok(Self::BeganEnrollment),
            "CLOSED_ENROLLMENT" => Ok(Self::ClosedEnrollment),
            "STARTED" => Ok(Self::Started),
            "ENDED" => Ok(Self::Ended),
            other => Err(UnknownEventStatus(other.to_owned())),
        }
    }
}

/// Flags computed from a submission rather than supplied by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedState {
    /// No base price and no price ceiling.
    pub free: bool,
    /// A non-blank location was given.
    pub offline: bool,
}

/// An event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    submission: EventSubmission,
    derived: DerivedState,
    status: EventStatus,
}

impl NewEvent {
    /// Prepare a validated submission for insertion as a draft.
    #[must_use]
    pub fn draft(submission: EventSubmission) -> Self {
        let derived = submission.derived_state();
        Self {
            submission,
            derived,
            status: EventStatus::Draft,
        }
    }

    /// Client-supplied fields.
    #[must_use]
    pub fn submission(&self) -> &EventSubmission {
        &self.submission
    }

    /// Derived flags.
    #[must_use]
    pub fn derived(&self) -> DerivedState {
        self.derived
    }

    /// Initial status.
    #[must_use]
    pub fn status(&self) -> EventStatus {
        self.status
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            submission: self.submission,
            derived: self.derived,
            status: self.status,
        }
    }
}

/// A stored event.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use event_api::domain::{Event, EventId, EventStatus, EventSubmission};
///
/// let at = |day| {
///     NaiveDate::from_ymd_opt(2024, 11, day)
///         .and_then(|d| d.and_hms_opt(9, 0, 0))
///         .expect("valid timestamp")
/// };
/// let submission = EventSubmission {
///     name: "Spring".to_owned(),
///     description: "REST API development".to_owned(),
///     begin_enrollment_date_time: at(1),
///     close_enrollment_date_time: at(2),
///     begin_event_date_time: at(3),
///     end_event_date_time: at(4),
///     location: Some("Gangnam".to_owned()),
///     base_price: 0,
///     max_price: 0,
///     limit_of_enrollment: 100,
/// };
/// let event = Event::create(EventId::new(1), submission);
/// assert!(event.is_free());
/// assert!(event.is_offline());
/// assert_eq!(event.status(), EventStatus::Draft);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    submission: EventSubmission,
    derived: DerivedState,
    status: EventStatus,
}

impl Event {
    /// Build a freshly created event in [`EventStatus::Draft`].
    #[must_use]
    pub fn create(id: EventId, submission: EventSubmission) -> Self {
        NewEvent::draft(submission).into_event(id)
    }

    /// Rebuild an event loaded from storage.
    #[must_use]
    pub fn restore(id: EventId, submission: EventSubmission, status: EventStatus) -> Self {
        let derived = submission.derived_state();
        Self {
            id,
            submission,
            derived,
            status,
        }
    }

    /// Replace the client-supplied fields, recomputing derived flags and
    /// keeping the identifier and status.
    #[must_use]
    pub fn revise(self, submission: EventSubmission) -> Self {
        Self::restore(self.id, submission, self.status)
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Client-supplied fields.
    #[must_use]
    pub fn submission(&self) -> &EventSubmission {
        &self.submission
    }

    /// Derived flags.
    #[must_use]
    pub fn derived(&self) -> DerivedState {
        self.derived
    }

    /// Whether attendance costs nothing.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.derived.free
    }

    /// Whether the event happens at a physical location.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.derived.offline
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> EventStatus {
        self.status
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared builders for event tests.

    use chrono::{NaiveDate, NaiveDateTime};

    use super::EventSubmission;

    /// 2024-11-`day` at 09:00.
    pub(crate) fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, day)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .expect("valid fixture timestamp")
    }

    /// A submission that passes every validation rule.
    pub(crate) fn valid_submission() -> EventSubmission {
        EventSubmission {
            name: "Spring".to_owned(),
            description: "REST API development with Spring".to_owned(),
            begin_enrollment_date_time: at(1),
            close_enrollment_date_time: at(2),
            begin_event_date_time: at(3),
            end_event_date_time: at(4),
            location: Some("Gangnam station D2 startup factory".to_owned()),
            base_price: 100,
            max_price: 200,
            limit_of_enrollment: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::test_support::valid_submission;
    use super::*;

    #[rstest]
    #[case(0, 0, true)]
    #[case(100, 0, false)]
    #[case(0, 100, false)]
    #[case(100, 200, false)]
    fn free_requires_both_prices_zero(
        #[case] base_price: i32,
        #[case] max_price: i32,
        #[case] free: bool,
    ) {
        let submission = EventSubmission {
            base_price,
            max_price,
            ..valid_submission()
        };
        let event = Event::create(EventId::new(1), submission);
        assert_eq!(event.is_free(), free);
    }

    #[rstest]
    #[case(Some("Gangnam"), true)]
    #[case(Some("   "), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn offline_requires_non_blank_location(#[case] location: Option<&str>, #[case] offline: bool) {
        let submission = EventSubmission {
            location: location.map(str::to_owned),
            ..valid_submission()
        };
        let event = Event::create(EventId::new(1), submission);
        assert_eq!(event.is_offline(), offline);
    }

    #[rstest]
    fn create_starts_as_draft() {
        let event = Event::create(EventId::new(3), valid_submission());
        assert_eq!(event.status(), EventStatus::Draft);
        assert_eq!(event.id(), EventId::new(3));
    }

    #[rstest]
    fn revise_recomputes_flags_and_keeps_status() {
        let event = Event::restore(EventId::new(9), valid_submission(), EventStatus::Published);
        assert!(!event.is_free());
        let revised = event.revise(EventSubmission {
            base_price: 0,
            max_price: 0,
            location: None,
            ..valid_submission()
        });
        assert!(revised.is_free());
        assert!(!revised.is_offline());
        assert_eq!(revised.status(), EventStatus::Published);
        assert_eq!(revised.id(), EventId::new(9));
    }

    #[rstest]
    #[case(EventStatus::Draft)]
    #[case(EventStatus::Published)]
    #[case(EventStatus::BeganEnrollment)]
    #[case(EventStatus::ClosedEnrollment)]
    #[case(EventStatus::Started)]
    #[case(EventStatus::Ended)]
    fn status_tokens_parse_back(#[case] status: EventStatus) {
        assert_eq!(status.as_str().parse::<EventStatus>(), Ok(status));
        let json = serde_json::to_value(status).expect("status serialises");
        assert_eq!(json, serde_json::Value::String(status.as_str().to_owned()));
    }

    #[rstest]
    fn unknown_status_token_is_rejected() {
        let err = "ARCHIVED".parse::<EventStatus>().expect_err("unknown status");
        assert_eq!(err, UnknownEventStatus("ARCHIVED".to_owned()));
    }
}
