//! Event HTTP handlers.
//!
//! ```text
//! POST /api/events
//! GET  /api/events?page=&size=&sort=
//! GET  /api/events/{id}
//! PUT  /api/events/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, post, put, web};

use crate::domain::EventId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::events_dto::{
    EmbeddedEvents, EventPageBody, EventRequestBody, EventResponseBody, EventUpdateBody,
};
use crate::inbound::http::links::{Profile, page_links};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{check_create, check_update, parse_page_request};

/// Create an event in draft status.
///
/// Responds with `201 Created`, a `Location` header pointing at the new
/// event, and the stored event with its links.
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = EventRequestBody,
    responses(
        (status = 201, description = "Event created", body = EventResponseBody,
            headers(("Location" = String, description = "URL of the new event"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "createEvent"
)]
#[post("/events")]
pub async fn create_event(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<EventRequestBody>,
) -> ApiResult<HttpResponse> {
    let submission = check_create(payload.into_inner())?;
    let event = state.events.create(submission).await?;
    let body = EventResponseBody::single(event, &req.full_url(), Profile::Create);
    let location = body
        .links
        .get("self")
        .map(|link| link.href.clone())
        .unwrap_or_default();
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(body))
}

/// List events one page at a time.
#[utoipa::path(
    get,
    path = "/api/events",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page number"),
        ("size" = Option<u32>, Query, description = "Page size, at most 100"),
        ("sort" = Option<Vec<String>>, Query,
            description = "Sort expression `property[,ASC|DESC]`; may repeat")
    ),
    responses(
        (status = 200, description = "Page of events", body = EventPageBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "listEvents"
)]
#[get("/events")]
pub async fn list_events(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<EventPageBody>> {
    let request = parse_page_request(req.query_string())?;
    let page = state.events_query.list(request.clone()).await?;
    let request_url = req.full_url();
    let links = page_links(&request_url, &request, &page);
    let (content, metadata) = page.into_parts();
    let event_list = content
        .into_iter()
        .map(|event| EventResponseBody::embedded(event, &request_url))
        .collect();
    Ok(web::Json(EventPageBody {
        embedded: EmbeddedEvents { event_list },
        page: metadata.into(),
        links,
    }))
}

/// Fetch a single event.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Event", body = EventResponseBody),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "getEvent"
)]
#[get("/events/{id}")]
pub async fn get_event(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> ApiResult<web::Json<EventResponseBody>> {
    let event = state
        .events_query
        .get(EventId::new(path.into_inner()))
        .await?;
    Ok(web::Json(EventResponseBody::single(
        event,
        &req.full_url(),
        Profile::Get,
    )))
}

/// Apply a partial update to an event.
///
/// Absent fields keep their stored value. The merged event is validated as
/// a whole and its derived flags are recomputed; status is never changed.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event identifier")),
    request_body = EventUpdateBody,
    responses(
        (status = 200, description = "Updated event", body = EventResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "updateEvent"
)]
#[put("/events/{id}")]
pub async fn update_event(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<i32>,
    payload: web::Json<EventUpdateBody>,
) -> ApiResult<web::Json<EventResponseBody>> {
    let patch = check_update(payload.into_inner())?;
    let event = state
        .events
        .update(EventId::new(path.into_inner()), patch)
        .await?;
    Ok(web::Json(EventResponseBody::single(
        event,
        &req.full_url(),
        Profile::Update,
    )))
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
