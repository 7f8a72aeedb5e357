//! Request and response bodies for the event endpoints.

use chrono::NaiveDateTime;
use pagination::PageMetadata;
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::domain::{Event, EventStatus};
use crate::inbound::http::links::{Links, Profile, embedded_event_links, event_links};

/// Body of `POST /api/events`.
///
/// Optional fields let presence checks report every missing value at
/// once. Derived fields (`free`, `offline`, `eventStatus`) and `id` are
/// rejected as unknown.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventRequestBody {
    /// Display name.
    #[schema(example = "Spring")]
    pub name: Option<String>,
    /// Free-form description.
    #[schema(example = "REST API Development with Spring")]
    pub description: Option<String>,
    /// When enrollment opens.
    #[schema(value_type = Option<String>, example = "2018-11-23T14:21:00")]
    pub begin_enrollment_date_time: Option<NaiveDateTime>,
    /// When enrollment closes.
    #[schema(value_type = Option<String>, example = "2018-11-24T14:21:00")]
    pub close_enrollment_date_time: Option<NaiveDateTime>,
    /// When the event starts.
    #[schema(value_type = Option<String>, example = "2018-11-25T14:21:00")]
    pub begin_event_date_time: Option<NaiveDateTime>,
    /// When the event ends.
    #[schema(value_type = Option<String>, example = "2018-11-26T14:21:00")]
    pub end_event_date_time: Option<NaiveDateTime>,
    /// Venue; omit for online events.
    #[schema(example = "Gangnam station D2 startup factory")]
    pub location: Option<String>,
    /// Entry price; defaults to 0.
    #[serde(default)]
    #[schema(example = 100)]
    pub base_price: i32,
    /// Price ceiling, 0 for unlimited; defaults to 0.
    #[serde(default)]
    #[schema(example = 200)]
    pub max_price: i32,
    /// Attendee limit; defaults to 0.
    #[serde(default)]
    #[schema(example = 100)]
    pub limit_of_enrollment: i32,
}

/// Body of `PUT /api/events/{id}`; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventUpdateBody {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New enrollment opening time.
    #[schema(value_type = Option<String>, example = "2018-11-23T14:21:00")]
    pub begin_enrollment_date_time: Option<NaiveDateTime>,
    /// New enrollment closing time.
    #[schema(value_type = Option<String>, example = "2018-11-24T14:21:00")]
    pub close_enrollment_date_time: Option<NaiveDateTime>,
    /// New start time.
    #[schema(value_type = Option<String>, example = "2018-11-25T14:21:00")]
    pub begin_event_date_time: Option<NaiveDateTime>,
    /// New end time.
    #[schema(value_type = Option<String>, example = "2018-11-26T14:21:00")]
    pub end_event_date_time: Option<NaiveDateTime>,
    /// New venue; an empty string makes the event online.
    pub location: Option<String>,
    /// New entry price.
    pub base_price: Option<i32>,
    /// New price ceiling.
    pub max_price: Option<i32>,
    /// New attendee limit.
    pub limit_of_enrollment: Option<i32>,
}

/// Lifecycle status as exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatusBody {
    /// Created but not yet visible.
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

impl From<EventStatus> for EventStatusBody {
    fn from(value: EventStatus) -> Self {
        match value {
            EventStatus::Draft => Self::Draft,
            EventStatus::Published => Self::Published,
            EventStatus::BeganEnrollment => Self::BeganEnrollment,
            EventStatus::ClosedEnrollment => Self::ClosedEnrollment,
            EventStatus::Started => Self::Started,
            EventStatus::Ended => Self::Ended,
        }
    }
}

/// An event with its `_links`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponseBody {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// When enrollment opens.
    #[schema(value_type = String, example = "2018-11-23T14:21:00")]
    pub begin_enrollment_date_time: NaiveDateTime,
    /// When enrollment closes.
    #[schema(value_type = String, example = "2018-11-24T14:21:00")]
    pub close_enrollment_date_time: NaiveDateTime,
    /// When the event starts.
    #[schema(value_type = String, example = "2018-11-25T14:21:00")]
    pub begin_event_date_time: NaiveDateTime,
    /// When the event ends.
    #[schema(value_type = String, example = "2018-11-26T14:21:00")]
    pub end_event_date_time: NaiveDateTime,
    /// Venue, absent for online events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Entry price.
    pub base_price: i32,
    /// Price ceiling, 0 for unlimited.
    pub max_price: i32,
    /// Attendee limit.
    pub limit_of_enrollment: i32,
    /// Held at a physical venue.
    pub offline: bool,
    /// No charge to attend.
    pub free: bool,
    /// Lifecycle status.
    pub event_status: EventStatusBody,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: Links,
}

impl EventResponseBody {
    fn from_event(event: Event, links: Links) -> Self {
        let id = event.id().as_i32();
        let free = event.is_free();
        let offline = event.is_offline();
        let event_status = event.status().into();
        let submission = event.submission().clone();
        Self {
            id,
            name: submission.name,
            description: submission.description,
            begin_enrollment_date_time: submission.begin_enrollment_date_time,
            close_enrollment_date_time: submission.close_enrollment_date_time,
            begin_event_date_time: submission.begin_event_date_time,
            end_event_date_time: submission.end_event_date_time,
            location: submission.location,
            base_price: submission.base_price,
            max_price: submission.max_price,
            limit_of_enrollment: submission.limit_of_enrollment,
            offline,
            free,
            event_status,
            links,
        }
    }

    /// Render a single event with full navigation links.
    #[must_use]
    pub fn single(event: Event, origin: &Url, profile: Profile) -> Self {
        let links = event_links(origin, event.id(), profile);
        Self::from_event(event, links)
    }

    /// Render an event embedded in a page, carrying only its `self` link.
    #[must_use]
    pub fn embedded(event: Event, origin: &Url) -> Self {
        let links = embedded_event_links(origin, &event);
        Self::from_event(event, links)
    }
}

/// Page position and totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadataBody {
    /// Requested page size.
    #[schema(example = 10)]
    pub size: u32,
    /// Number of events across every page.
    #[schema(example = 30)]
    pub total_elements: u64,
    /// Number of pages.
    #[schema(example = 3)]
    pub total_pages: u32,
    /// Zero-based page number.
    #[schema(example = 1)]
    pub number: u32,
}

impl From<PageMetadata> for PageMetadataBody {
    fn from(value: PageMetadata) -> Self {
        Self {
            size: value.size,
            total_elements: value.total_elements,
            total_pages: value.total_pages,
            number: value.number,
        }
    }
}

/// Embedded resources of a page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedEvents {
    /// Events on this page.
    pub event_list: Vec<EventResponseBody>,
}

/// Response of `GET /api/events`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPageBody {
    /// Events on this page.
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedEvents,
    /// Page position and totals.
    pub page: PageMetadataBody,
    /// Navigation links.
    #[serde(rename = "_links")]
    pub links: Links,
}
