//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the event and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], which keep the
//! domain types free of utoipa derives.
//!
//! The document backs Swagger UI under `/docs` and is exported by the
//! `openapi-dump` binary for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::events_dto::{
    EmbeddedEvents, EventPageBody, EventRequestBody, EventResponseBody, EventStatusBody,
    EventUpdateBody, PageMetadataBody,
};
use crate::inbound::http::links::Link;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, FieldErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event signup API",
        description = "Create, update, page through, and look up events.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::events::create_event,
        crate::inbound::http::events::list_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::events::update_event,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EventRequestBody,
        EventUpdateBody,
        EventResponseBody,
        EventStatusBody,
        EventPageBody,
        EmbeddedEvents,
        PageMetadataBody,
        Link,
        ErrorSchema,
        ErrorCodeSchema,
        FieldErrorSchema
    )),
    tags(
        (name = "events", description = "Event management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
