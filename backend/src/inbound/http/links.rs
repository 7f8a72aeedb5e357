//! Explicit `_links` shaping for event responses.
//!
//! Links are absolute, built from the URL the client called, so they stay
//! valid behind whatever host and scheme the request arrived on.

use std::collections::BTreeMap;

use pagination::{Page, PageRequest, page_link};
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::domain::{Event, EventId};

/// Collection path for events.
pub const EVENTS_PATH: &str = "/api/events";

const PROFILE_PATH: &str = "/docs/index.html";

/// One hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    /// Absolute target URL.
    #[schema(example = "http://localhost:8080/api/events/1")]
    pub href: String,
}

impl From<Url> for Link {
    fn from(url: Url) -> Self {
        Self { href: url.into() }
    }
}

/// Relation name to link.
pub type Links = BTreeMap<String, Link>;

/// Documentation section a response's `profile` link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Event creation.
    Create,
    /// Single event lookup.
    Get,
    /// Event update.
    Update,
    /// Event listing.
    List,
}

impl Profile {
    const fn anchor(self) -> &'static str {
        match self {
            Self::Create => "resources-events-create",
            Self::Get => "resources-events-get",
            Self::Update => "resources-events-update",
            Self::List => "resources-events-list",
        }
    }
}

fn with_path(origin: &Url, path: &str) -> Url {
    let mut url = origin.clone();
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    url
}

fn event_url(origin: &Url, id: EventId) -> Url {
    with_path(origin, &format!("{EVENTS_PATH}/{id}"))
}

fn profile_link(origin: &Url, profile: Profile) -> Link {
    let mut url = with_path(origin, PROFILE_PATH);
    url.set_fragment(Some(profile.anchor()));
    url.into()
}

/// Links for a single event: `self`, `query-events`, `update-event`, and
/// `profile`.
///
/// # Examples
/// ```
/// use event_api::domain::EventId;
/// use event_api::inbound::http::links::{Profile, event_links};
/// use url::Url;
///
/// let origin = Url::parse("http://localhost:8080/api/events").expect("valid url");
/// let links = event_links(&origin, EventId::new(7), Profile::Get);
/// assert_eq!(links["self"].href, "http://localhost:8080/api/events/7");
/// assert_eq!(
///     links["profile"].href,
///     "http://localhost:8080/docs/index.html#resources-events-get"
/// );
/// ```
#[must_use]
pub fn event_links(origin: &Url, id: EventId, profile: Profile) -> Links {
    let self_url = event_url(origin, id);
    Links::from([
        ("self".to_owned(), Link::from(self_url.clone())),
        (
            "query-events".to_owned(),
            Link::from(with_path(origin, EVENTS_PATH)),
        ),
        ("update-event".to_owned(), Link::from(self_url)),
        ("profile".to_owned(), profile_link(origin, profile)),
    ])
}

/// `self` link for an event embedded in a page.
#[must_use]
pub fn embedded_event_links(origin: &Url, event: &Event) -> Links {
    Links::from([("self".to_owned(), Link::from(event_url(origin, event.id())))])
}

/// Navigation links for a page of events.
///
/// `prev` and `next` are present only when such pages exist; `first` and
/// `last` are always present.
#[must_use]
pub fn page_links<T>(request_url: &Url, request: &PageRequest, page: &Page<T>) -> Links {
    let number = page.metadata().number;
    let mut links = Links::from([
        (
            "self".to_owned(),
            Link::from(page_link(request_url, request, number)),
        ),
        (
            "first".to_owned(),
            Link::from(page_link(request_url, request, 0)),
        ),
        (
            "last".to_owned(),
            Link::from(page_link(request_url, request, page.last_page_number())),
        ),
        ("profile".to_owned(), profile_link(request_url, Profile::List)),
    ]);
    if page.has_previous() {
        links.insert(
            "prev".to_owned(),
            Link::from(page_link(request_url, request, number.saturating_sub(1))),
        );
    }
    if page.has_next() {
        links.insert(
            "next".to_owned(),
            Link::from(page_link(request_url, request, number.saturating_add(1))),
        );
    }
    links
}
